use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Bettor {0} was not found.")]
    BettorNotFound(Uuid),

    #[error("Bet {0} was not found.")]
    WagerNotFound(Uuid),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::BettorNotFound(_) | StoreError::WagerNotFound(_))
    }
}
