/// How a form submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The API accepted the record and the catalog was reloaded
    Saved,
    /// Rejected locally, no request was sent
    Rejected(String),
    /// The request was sent and failed or was refused
    Failed,
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved)
    }
}
