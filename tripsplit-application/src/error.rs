use rust_decimal::Decimal;

/// Reasons a raw trip record is rejected before settlement.
///
/// Expense positions are 1-based, in document order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TripValidationError {
    #[error("Member '{0}' is listed more than once")]
    DuplicateMember(String),
    #[error("Expense #{position} has a negative amount ({amount})")]
    NegativeAmount { position: usize, amount: Decimal },
    #[error("Expense #{position} amount {amount} is more precise than a cent")]
    SubCentPrecision { position: usize, amount: Decimal },
    #[error("Expense #{position} amount {amount} cannot be represented")]
    UnrepresentableAmount { position: usize, amount: Decimal },
    #[error("Expense #{position} has no participants")]
    NoParticipants { position: usize },
    #[error("Expense #{position} lists participant '{member}' more than once")]
    DuplicateParticipant { position: usize, member: String },
}

#[derive(Debug, thiserror::Error)]
pub enum TripSourceError {
    #[error("Failed to read trip '{reference}': {source}")]
    Io {
        reference: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed trip document '{reference}': {detail}")]
    Malformed { reference: String, detail: String },
}

#[derive(Debug, thiserror::Error)]
pub enum SettlementServiceError {
    #[error(transparent)]
    Source(#[from] TripSourceError),
    #[error(transparent)]
    Validation(#[from] TripValidationError),
}
