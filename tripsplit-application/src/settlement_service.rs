use crate::{error::SettlementServiceError, model::Trip, ports::TripSource};
use tripsplit_domain::{BalanceCalculator, MemberBalances, Settlement, SettlementCalculator};

/// A validated trip together with its settlement.
pub struct SettlementResult {
    pub trip: Trip,
    pub settlement: Settlement,
}

/// Settles trips loaded through a [`TripSource`].
#[derive(Clone, Copy)]
pub struct SettlementService<'a> {
    source: &'a dyn TripSource,
}

impl<'a> SettlementService<'a> {
    pub fn new(source: &'a dyn TripSource) -> Self {
        Self { source }
    }

    /// Loads, validates and settles the trip behind `reference`.
    pub fn settle(&self, reference: &str) -> Result<SettlementResult, SettlementServiceError> {
        let record = self.source.load(reference)?;
        tracing::debug!(
            reference,
            members = record.members.len(),
            expenses = record.expenses.len(),
            "loaded trip"
        );

        let trip = record.validate()?;
        let settlement = Self::settle_trip(&trip);
        tracing::info!(
            reference,
            transfers = settlement.transfers.len(),
            "computed settlement"
        );

        Ok(SettlementResult { trip, settlement })
    }

    /// Settles an already validated trip. Never fails.
    pub fn settle_trip(trip: &Trip) -> Settlement {
        let ledgers = BalanceCalculator.ledgers(&trip.expenses, &trip.members);
        let balances: MemberBalances = ledgers
            .iter()
            .map(|ledger| (ledger.member.clone(), ledger.net()))
            .collect();
        let transfers = SettlementCalculator.calculate(&balances);

        Settlement { ledgers, transfers }
    }
}
