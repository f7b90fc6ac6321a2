use async_trait::async_trait;
use core_types::{Bettor, BettorDraft, BettorWithWagers, Wager, WagerDraft, WagerPatch};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::repository::BettorRepository;

#[derive(Debug)]
struct BettorEntry {
    bettor: Bettor,
    wagers: Vec<Wager>,
}

#[derive(Debug, Default)]
struct State {
    bettors: HashMap<Uuid, BettorEntry>,
    /// Bettor ids in insertion order.
    order: Vec<Uuid>,
    /// Wager id -> owning bettor id.
    owners: HashMap<Uuid, Uuid>,
}

impl State {
    fn wager_mut(&mut self, wager_id: Uuid) -> Result<&mut Wager, StoreError> {
        let bettor_id = self
            .owners
            .get(&wager_id)
            .ok_or(StoreError::WagerNotFound(wager_id))?;
        self.bettors
            .get_mut(bettor_id)
            .and_then(|entry| entry.wagers.iter_mut().find(|w| w.id() == wager_id))
            .ok_or(StoreError::WagerNotFound(wager_id))
    }
}

/// A process-local repository. Cloning it yields another handle to the same data.
///
/// Every mutation runs under the write guard, which makes the
/// read-merge-recompute-write of `update_wager` atomic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BettorRepository for InMemoryRepository {
    async fn create_bettor(&self, draft: BettorDraft) -> Result<Bettor, StoreError> {
        let bettor = Bettor::new(draft.name, draft.profile_url);
        let mut state = self.state.write().await;
        state.order.push(bettor.id);
        state.bettors.insert(
            bettor.id,
            BettorEntry {
                bettor: bettor.clone(),
                wagers: Vec::new(),
            },
        );
        tracing::info!(bettor_id = %bettor.id, name = %bettor.name, "Bettor created.");
        Ok(bettor)
    }

    async fn list_bettors(&self) -> Result<Vec<Bettor>, StoreError> {
        let state = self.state.read().await;
        let mut bettors: Vec<Bettor> = state
            .order
            .iter()
            .rev()
            .filter_map(|id| state.bettors.get(id))
            .map(|entry| entry.bettor.clone())
            .collect();
        bettors.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bettors)
    }

    async fn get_bettor(&self, bettor_id: Uuid) -> Result<BettorWithWagers, StoreError> {
        let state = self.state.read().await;
        let entry = state
            .bettors
            .get(&bettor_id)
            .ok_or(StoreError::BettorNotFound(bettor_id))?;
        Ok(BettorWithWagers {
            bettor: entry.bettor.clone(),
            wagers: entry.wagers.clone(),
        })
    }

    async fn delete_bettor(&self, bettor_id: Uuid) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let entry = state
            .bettors
            .remove(&bettor_id)
            .ok_or(StoreError::BettorNotFound(bettor_id))?;
        state.order.retain(|id| *id != bettor_id);
        for wager in &entry.wagers {
            state.owners.remove(&wager.id());
        }
        tracing::info!(%bettor_id, wagers = entry.wagers.len(), "Bettor deleted.");
        Ok(())
    }

    async fn create_wager(&self, bettor_id: Uuid, draft: WagerDraft) -> Result<Wager, StoreError> {
        let mut state = self.state.write().await;
        let entry = state
            .bettors
            .get_mut(&bettor_id)
            .ok_or(StoreError::BettorNotFound(bettor_id))?;
        let wager = Wager::open(bettor_id, draft);
        entry.wagers.push(wager.clone());
        state.owners.insert(wager.id(), bettor_id);
        tracing::info!(
            wager_id = %wager.id(),
            %bettor_id,
            outcome = %wager.outcome(),
            profit = %wager.profit(),
            "Bet created."
        );
        Ok(wager)
    }

    async fn get_wager(&self, wager_id: Uuid) -> Result<Wager, StoreError> {
        let state = self.state.read().await;
        let bettor_id = state
            .owners
            .get(&wager_id)
            .ok_or(StoreError::WagerNotFound(wager_id))?;
        state
            .bettors
            .get(bettor_id)
            .and_then(|entry| entry.wagers.iter().find(|w| w.id() == wager_id))
            .cloned()
            .ok_or(StoreError::WagerNotFound(wager_id))
    }

    async fn update_wager(&self, wager_id: Uuid, patch: WagerPatch) -> Result<Wager, StoreError> {
        let mut state = self.state.write().await;
        let wager = state.wager_mut(wager_id)?;
        wager.apply(patch);
        tracing::info!(
            %wager_id,
            outcome = %wager.outcome(),
            profit = %wager.profit(),
            "Bet updated."
        );
        Ok(wager.clone())
    }

    async fn delete_wager(&self, wager_id: Uuid) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let bettor_id = state
            .owners
            .remove(&wager_id)
            .ok_or(StoreError::WagerNotFound(wager_id))?;
        if let Some(entry) = state.bettors.get_mut(&bettor_id) {
            entry.wagers.retain(|w| w.id() != wager_id);
        }
        tracing::info!(%wager_id, %bettor_id, "Bet deleted.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use core_types::{AmericanOdds, Outcome, Stake};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn bettor_draft(name: &str) -> BettorDraft {
        BettorDraft {
            name: name.to_string(),
            profile_url: "https://example.com/profile".to_string(),
        }
    }

    fn wager_draft(day: u32, odds: i32, stake: Decimal, outcome: Outcome) -> WagerDraft {
        WagerDraft {
            placed_at: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            description: format!("bet on the {}th", day),
            sport: Some("NBA".to_string()),
            odds: AmericanOdds::new(odds).unwrap(),
            stake: Stake::new(stake).unwrap(),
            outcome,
            notes: None,
        }
    }

    #[tokio::test]
    async fn wagers_keep_insertion_order() {
        let repo = InMemoryRepository::new();
        let bettor = repo.create_bettor(bettor_draft("Sample Bettor")).await.unwrap();

        let later = repo
            .create_wager(bettor.id, wager_draft(20, -110, dec!(1), Outcome::Win))
            .await
            .unwrap();
        let earlier = repo
            .create_wager(bettor.id, wager_draft(10, 150, dec!(1), Outcome::Pending))
            .await
            .unwrap();

        let fetched = repo.get_bettor(bettor.id).await.unwrap();
        let ids: Vec<Uuid> = fetched.wagers.iter().map(|w| w.id()).collect();
        assert_eq!(ids, vec![later.id(), earlier.id()]);
        assert_eq!(fetched.bettor, bettor);
    }

    #[tokio::test]
    async fn creating_a_wager_for_an_unknown_bettor_fails() {
        let repo = InMemoryRepository::new();
        let missing = Uuid::new_v4();
        let err = repo
            .create_wager(missing, wager_draft(1, -110, dec!(1), Outcome::Pending))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::BettorNotFound(missing));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn update_recomputes_profit_from_merged_fields() {
        let repo = InMemoryRepository::new();
        let bettor = repo.create_bettor(bettor_draft("A")).await.unwrap();
        let wager = repo
            .create_wager(bettor.id, wager_draft(1, -120, dec!(1.5), Outcome::Pending))
            .await
            .unwrap();
        assert_eq!(wager.profit(), Decimal::ZERO);

        let updated = repo
            .update_wager(
                wager.id(),
                WagerPatch {
                    outcome: Some(Outcome::Loss),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.profit(), dec!(-1.5));
        assert_eq!(updated.description(), wager.description());

        let stored = repo.get_wager(wager.id()).await.unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn concurrent_updates_never_leave_profit_stale() {
        let repo = InMemoryRepository::new();
        let bettor = repo.create_bettor(bettor_draft("A")).await.unwrap();
        let wager = repo
            .create_wager(bettor.id, wager_draft(1, 100, dec!(1), Outcome::Pending))
            .await
            .unwrap();

        let mut handles = Vec::new();
        for i in 0..16u32 {
            let repo = repo.clone();
            let id = wager.id();
            handles.push(tokio::spawn(async move {
                let outcome = if i % 2 == 0 { Outcome::Win } else { Outcome::Loss };
                let stake = Stake::new(Decimal::from(i + 1)).unwrap();
                repo.update_wager(
                    id,
                    WagerPatch {
                        outcome: Some(outcome),
                        stake: Some(stake),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let stored = repo.get_wager(wager.id()).await.unwrap();
        assert_eq!(
            stored.profit(),
            core_types::profit(stored.odds(), stored.stake(), stored.outcome())
        );
    }

    #[tokio::test]
    async fn deleting_a_wager_is_immediate() {
        let repo = InMemoryRepository::new();
        let bettor = repo.create_bettor(bettor_draft("A")).await.unwrap();
        let wager = repo
            .create_wager(bettor.id, wager_draft(1, 100, dec!(1), Outcome::Win))
            .await
            .unwrap();

        repo.delete_wager(wager.id()).await.unwrap();
        assert_eq!(
            repo.get_wager(wager.id()).await.unwrap_err(),
            StoreError::WagerNotFound(wager.id())
        );
        assert!(repo.get_bettor(bettor.id).await.unwrap().wagers.is_empty());
        assert_eq!(
            repo.delete_wager(wager.id()).await.unwrap_err(),
            StoreError::WagerNotFound(wager.id())
        );
    }

    #[tokio::test]
    async fn deleting_a_bettor_cascades_to_wagers() {
        let repo = InMemoryRepository::new();
        let bettor = repo.create_bettor(bettor_draft("A")).await.unwrap();
        let wager = repo
            .create_wager(bettor.id, wager_draft(1, 100, dec!(1), Outcome::Win))
            .await
            .unwrap();

        repo.delete_bettor(bettor.id).await.unwrap();
        assert_eq!(
            repo.get_bettor(bettor.id).await.unwrap_err(),
            StoreError::BettorNotFound(bettor.id)
        );
        assert_eq!(
            repo.get_wager(wager.id()).await.unwrap_err(),
            StoreError::WagerNotFound(wager.id())
        );
        assert!(repo.list_bettors().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lists_newest_bettors_first() {
        let repo = InMemoryRepository::new();
        let first = repo.create_bettor(bettor_draft("first")).await.unwrap();
        let second = repo.create_bettor(bettor_draft("second")).await.unwrap();

        let names: Vec<String> = repo
            .list_bettors()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec![second.name, first.name]);
    }
}
