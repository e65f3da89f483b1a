use super::ScanError;

/// Receives the diagnostics raised while scanning.
///
/// Reporting never interrupts the scan: the scanner hands each error over and
/// carries on with the next character.
pub trait Reporter {
    fn report(&mut self, error: &ScanError);
}

impl<F> Reporter for F
where
    F: FnMut(&ScanError),
{
    fn report(&mut self, error: &ScanError) {
        self(error)
    }
}

/// Collects every reported error so the host can decide what to do afterwards.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<ScanError>,
}

impl Diagnostics {
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ScanError] {
        &self.errors
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl Reporter for Diagnostics {
    fn report(&mut self, error: &ScanError) {
        self.errors.push(error.clone());
    }
}
