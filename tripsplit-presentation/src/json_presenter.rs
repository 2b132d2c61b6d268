use crate::settlement_presenter::format_member_label;
use serde::Serialize;
use std::borrow::Cow;
use tripsplit_application::{MemberDirectory, SettlementResult};
use tripsplit_domain::{Money, Settlement};

pub struct JsonSettlementPresenter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SettlementDocument<'a> {
    trip: Option<&'a str>,
    currency: &'a str,
    total_paid: f64,
    balances: Vec<BalanceDocument<'a>>,
    transfers: Vec<TransferDocument<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BalanceDocument<'a> {
    user_id: &'a str,
    name: Cow<'a, str>,
    paid: f64,
    owed: f64,
    net_balance: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TransferDocument<'a> {
    from_user_id: &'a str,
    to_user_id: &'a str,
    amount: f64,
}

impl JsonSettlementPresenter {
    pub fn render(result: &SettlementResult, currency: &str) -> Result<String, serde_json::Error> {
        Self::render_with_members(
            result.trip.name.as_deref(),
            &result.settlement,
            &result.trip,
            currency,
        )
    }

    pub fn render_with_members(
        trip: Option<&str>,
        settlement: &Settlement,
        member_directory: &dyn MemberDirectory,
        currency: &str,
    ) -> Result<String, serde_json::Error> {
        let document = SettlementDocument {
            trip,
            currency,
            total_paid: cents(settlement.total_paid()),
            balances: settlement
                .ledgers
                .iter()
                .map(|ledger| BalanceDocument {
                    user_id: ledger.member.as_str(),
                    name: format_member_label(&ledger.member, member_directory),
                    paid: cents(ledger.paid),
                    owed: cents(ledger.owed),
                    net_balance: cents(ledger.net()),
                })
                .collect(),
            transfers: settlement
                .transfers
                .iter()
                .map(|transfer| TransferDocument {
                    from_user_id: transfer.from.as_str(),
                    to_user_id: transfer.to.as_str(),
                    amount: cents(transfer.amount),
                })
                .collect(),
        };

        serde_json::to_string_pretty(&document)
    }
}

fn cents(amount: Money) -> f64 {
    let rounded = amount.round_to_cents().value();
    // Avoid emitting -0.0 for drift that rounds away.
    if rounded == 0.0 { 0.0 } else { rounded }
}
