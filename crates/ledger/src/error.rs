use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Validation error: {0}")]
    Validation(#[from] core_types::CoreError),

    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),
}

impl LedgerError {
    /// True when the request referenced a bettor or bet that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::Store(e) if e.is_not_found())
    }
}
