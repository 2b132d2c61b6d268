#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Expense, Member, MemberBalance, MemberBalances, MemberId, MemberLedger, Money,
    SETTLEMENT_TOLERANCE, Settlement, Transfer,
};
pub use services::{BalanceCalculator, SettlementCalculator, settle_expenses};
