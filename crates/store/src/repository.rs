use async_trait::async_trait;
use core_types::{Bettor, BettorDraft, BettorWithWagers, Wager, WagerDraft, WagerPatch};
use uuid::Uuid;

use crate::error::StoreError;

/// The persistence boundary for bettors and their wagers.
///
/// Implementations receive already-validated values and never compute
/// profit themselves: `Wager::open` and `Wager::apply` do that. What they
/// must guarantee is that `update_wager` is atomic, so no reader ever
/// observes a wager whose fields and profit disagree. Concurrent updates to
/// the same wager are last-write-wins.
#[async_trait]
pub trait BettorRepository: Send + Sync {
    async fn create_bettor(&self, draft: BettorDraft) -> Result<Bettor, StoreError>;

    /// All bettors, newest first.
    async fn list_bettors(&self) -> Result<Vec<Bettor>, StoreError>;

    /// One bettor with their wagers in insertion order.
    async fn get_bettor(&self, bettor_id: Uuid) -> Result<BettorWithWagers, StoreError>;

    /// Deletes a bettor and every wager they own.
    async fn delete_bettor(&self, bettor_id: Uuid) -> Result<(), StoreError>;

    async fn create_wager(&self, bettor_id: Uuid, draft: WagerDraft) -> Result<Wager, StoreError>;

    async fn get_wager(&self, wager_id: Uuid) -> Result<Wager, StoreError>;

    /// Merges `patch` into the stored wager, recomputing its profit, as one atomic step.
    async fn update_wager(&self, wager_id: Uuid, patch: WagerPatch) -> Result<Wager, StoreError>;

    async fn delete_wager(&self, wager_id: Uuid) -> Result<(), StoreError>;
}
