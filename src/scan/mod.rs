mod report;
mod scanner;
mod token;

pub use report::{Diagnostics, Reporter};
pub use scanner::{
    is_identifier_continuation, is_identifier_start, scan, ScanError, ScanErrorKind, Scanner,
};
pub use token::{Literal, Token, TokenType, KEYWORDS};
