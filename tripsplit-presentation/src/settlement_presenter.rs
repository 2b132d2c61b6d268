use crate::text_table::{Alignment, TextTableBuilder};
use std::borrow::Cow;
use tripsplit_application::{MemberDirectory, SettlementResult};
use tripsplit_domain::{MemberId, Money, Settlement};
use tripsplit_i18n as i18n;

pub struct SettlementPresenter;

pub struct SettlementView {
    pub balance_table: String,
    pub total_paid: String,
    pub sentences: Vec<String>,
}

impl SettlementView {
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.balance_table.len() + 256);
        text.push_str(&self.balance_table);
        text.push('\n');
        text.push_str(&self.total_paid);
        text.push_str("\n\n");

        if self.sentences.is_empty() {
            text.push_str(i18n::ALL_SETTLED);
            text.push('\n');
        }
        for sentence in &self.sentences {
            text.push_str(sentence);
            text.push('\n');
        }
        text
    }
}

impl SettlementPresenter {
    pub fn render(result: &SettlementResult, currency: &str) -> SettlementView {
        Self::render_with_members(&result.settlement, &result.trip, currency)
    }

    pub fn render_with_members(
        settlement: &Settlement,
        member_directory: &dyn MemberDirectory,
        currency: &str,
    ) -> SettlementView {
        SettlementView {
            balance_table: Self::balance_table(settlement, member_directory, currency),
            total_paid: format!(
                "{}: {}",
                i18n::TOTAL_PAID,
                format_amount(settlement.total_paid(), currency)
            ),
            sentences: Self::sentences(settlement, member_directory, currency),
        }
    }

    /// One "X owes Y to Z" line per transfer, in settlement order.
    pub fn sentences(
        settlement: &Settlement,
        member_directory: &dyn MemberDirectory,
        currency: &str,
    ) -> Vec<String> {
        settlement
            .transfers
            .iter()
            .map(|transfer| {
                let amount = format_amount(transfer.amount, currency);
                i18n::owes(
                    &format_member_label(&transfer.from, member_directory),
                    &amount,
                    &format_member_label(&transfer.to, member_directory),
                )
                .to_string()
            })
            .collect()
    }

    pub fn balance_table(
        settlement: &Settlement,
        member_directory: &dyn MemberDirectory,
        currency: &str,
    ) -> String {
        let headers = [
            Cow::Borrowed(i18n::MEMBER),
            Cow::Borrowed(i18n::PAID),
            Cow::Borrowed(i18n::OWED),
            Cow::Borrowed(i18n::BALANCE),
        ];
        let mut builder = TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Right,
                Alignment::Right,
                Alignment::Right,
            ])
            .headers(&headers);

        for ledger in &settlement.ledgers {
            let net = ledger.net();
            // Sub-cent drift must not print as "-0.00".
            let net = if net.is_settled() { Money::ZERO } else { net };
            let sign = if net.is_negative() { "" } else { "+" };
            builder = builder.row([
                format_member_label(&ledger.member, member_directory),
                Cow::Owned(format_amount(ledger.paid, currency)),
                Cow::Owned(format_amount(ledger.owed, currency)),
                Cow::Owned(format!("{sign}{}", format_amount(net, currency))),
            ]);
        }

        builder.build()
    }
}

pub(crate) fn format_member_label<'a>(
    member_id: &MemberId,
    member_directory: &'a dyn MemberDirectory,
) -> Cow<'a, str> {
    match member_directory.display_name(member_id) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Borrowed(i18n::UNKNOWN_MEMBER),
    }
}

fn format_amount(amount: Money, currency: &str) -> String {
    format!("{amount}{currency}")
}
