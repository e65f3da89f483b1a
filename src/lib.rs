pub mod cli;
mod scan;

pub use scan::{
    is_identifier_continuation, is_identifier_start, scan, Diagnostics, Literal, Reporter,
    ScanError, ScanErrorKind, Scanner, Token, TokenType, KEYWORDS,
};

use std::io;
use std::path::Path;

use ariadne::{Color, Label, Report, ReportKind, Source};

/// Exit status of a script run that raised diagnostics.
pub const EXIT_DATA_ERROR: i32 = 65;

/// Scans `source` and prints its tokens, one per line.
///
/// Diagnostics raised by this run are added to `diags` and rendered to stderr.
pub fn run(path: &Path, source: &str, diags: &mut Diagnostics) -> io::Result<()> {
    let path = path.to_string_lossy();
    let path: &str = path.as_ref();

    let seen = diags.errors().len();
    let tokens = scan(source, diags);

    for e in &diags.errors()[seen..] {
        report_error(path, source, e)?;
    }

    for token in &tokens {
        println!("{token}");
    }

    Ok(())
}

pub fn report_error(path: &str, source: &str, e: &ScanError) -> io::Result<()> {
    Report::build(ReportKind::Error, (path, e.span.clone()))
        .with_message(e.to_string())
        .with_label(
            Label::new((path, e.span.clone()))
                .with_message(e.to_string())
                .with_color(Color::Red),
        )
        .with_note(format!("[line {}]", e.line))
        .finish()
        .eprint((path, Source::from(source)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_records_diagnostics() {
        let mut diags = Diagnostics::default();

        run(Path::new("t"), "1", &mut diags).unwrap();
        assert!(!diags.had_error());

        run(Path::new("t"), "@", &mut diags).unwrap();
        assert!(diags.had_error());
        assert_eq!(diags.errors().len(), 1);
    }

    #[test]
    fn run_keeps_earlier_diagnostics_until_cleared() {
        let mut diags = Diagnostics::default();

        run(Path::new("t"), "#", &mut diags).unwrap();
        run(Path::new("t"), "\"oops", &mut diags).unwrap();
        let kinds: Vec<_> = diags.errors().iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            [
                ScanErrorKind::UnexpectedCharacter('#'),
                ScanErrorKind::UnterminatedString
            ]
        );

        diags.clear();
        run(Path::new("t"), "var x;", &mut diags).unwrap();
        assert!(!diags.had_error());
    }
}
