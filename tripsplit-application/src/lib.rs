#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod settlement_service;

pub use error::{SettlementServiceError, TripSourceError, TripValidationError};
pub use model::{ExpenseRecord, MemberRecord, Trip, TripRecord};
pub use ports::{MemberDirectory, TripSource};
pub use settlement_service::{SettlementResult, SettlementService};
