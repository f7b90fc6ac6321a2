use analytics::{AnalyticsEngine, ResultFilter, TimeSeriesBuilder};
use core_types::{Bettor, BettorInput, Wager, WagerInput, WagerPatchInput};
use std::sync::Arc;
use store::BettorRepository;
use uuid::Uuid;

pub mod error;
pub mod report;

pub use error::LedgerError;
pub use report::BettorReport;

/// The application service: validates raw input, persists it through the
/// repository and computes reports from the stored wagers.
pub struct Ledger {
    repository: Arc<dyn BettorRepository>,
    engine: AnalyticsEngine,
    series: TimeSeriesBuilder,
}

impl Ledger {
    /// `date_format` is the strftime pattern used for the series labels.
    pub fn new(repository: Arc<dyn BettorRepository>, date_format: impl Into<String>) -> Self {
        Self {
            repository,
            engine: AnalyticsEngine::new(),
            series: TimeSeriesBuilder::new(date_format),
        }
    }

    pub async fn register_bettor(&self, input: BettorInput) -> Result<Bettor, LedgerError> {
        let draft = input.validate().inspect_err(|e| reject("bettor", e))?;
        Ok(self.repository.create_bettor(draft).await?)
    }

    /// All bettors, newest first.
    pub async fn bettors(&self) -> Result<Vec<Bettor>, LedgerError> {
        Ok(self.repository.list_bettors().await?)
    }

    pub async fn remove_bettor(&self, bettor_id: Uuid) -> Result<(), LedgerError> {
        Ok(self.repository.delete_bettor(bettor_id).await?)
    }

    pub async fn place_wager(
        &self,
        bettor_id: Uuid,
        input: WagerInput,
    ) -> Result<Wager, LedgerError> {
        let draft = input.validate().inspect_err(|e| reject("bet", e))?;
        Ok(self.repository.create_wager(bettor_id, draft).await?)
    }

    pub async fn amend_wager(
        &self,
        wager_id: Uuid,
        input: WagerPatchInput,
    ) -> Result<Wager, LedgerError> {
        let patch = input.validate().inspect_err(|e| reject("bet update", e))?;
        if patch.is_empty() {
            tracing::debug!(%wager_id, "Empty bet update; returning the stored bet.");
            return Ok(self.repository.get_wager(wager_id).await?);
        }
        Ok(self.repository.update_wager(wager_id, patch).await?)
    }

    pub async fn remove_wager(&self, wager_id: Uuid) -> Result<(), LedgerError> {
        Ok(self.repository.delete_wager(wager_id).await?)
    }

    /// Fetches a bettor's full wager set and recomputes every figure from it.
    pub async fn report(
        &self,
        bettor_id: Uuid,
        filter: ResultFilter,
    ) -> Result<BettorReport, LedgerError> {
        // 1. Fetch
        let record = self.repository.get_bettor(bettor_id).await?;

        // 2. Summarize and chart the whole set
        let summary = self.engine.summarize(&record.wagers);
        let series = self.series.build(&record.wagers);

        // 3. Select what to display
        let bets = filter.apply(&record.wagers).into_iter().cloned().collect();

        Ok(BettorReport {
            bettor: record.bettor,
            summary,
            series,
            filter,
            bets,
        })
    }
}

fn reject(what: &str, error: &core_types::CoreError) {
    tracing::warn!(%error, "Rejected invalid {}.", what);
}
