#![warn(clippy::uninlined_format_args)]

pub mod json_presenter;
pub mod settlement_presenter;
pub mod text_table;

pub use json_presenter::JsonSettlementPresenter;
pub use settlement_presenter::{SettlementPresenter, SettlementView};
