use proptest::prelude::*;
use rust_decimal::Decimal;
use tripsplit_application::{
    ExpenseRecord, MemberDirectory as _, MemberRecord, SettlementService, TripRecord,
};
use tripsplit_domain::Money;

const IDS: [&str; 5] = ["ana", "bruno", "chloe", "david", "emma"];

fn record(member_count: usize, expenses: &[(i64, usize, usize)]) -> TripRecord {
    TripRecord {
        name: Some("Property trip".to_owned()),
        members: IDS[..member_count]
            .iter()
            .map(|id| MemberRecord {
                user_id: (*id).to_owned(),
                name: None,
            })
            .collect(),
        expenses: expenses
            .iter()
            .map(|&(cents, payer, mask)| {
                let payer = payer % member_count;
                let mask = mask % (1 << member_count);
                let mut participants: Vec<String> = (0..member_count)
                    .filter(|bit| mask & (1 << bit) != 0)
                    .map(|bit| IDS[bit].to_owned())
                    .collect();
                if participants.is_empty() {
                    participants.push(IDS[payer].to_owned());
                }
                ExpenseRecord {
                    title: None,
                    amount: Decimal::new(cents, 2),
                    paid_by: IDS[payer].to_owned(),
                    participants,
                }
            })
            .collect(),
    }
}

proptest! {
    #[test]
    fn well_formed_records_validate_and_settle(
        member_count in 1usize..=5,
        expenses in prop::collection::vec((0i64..=50_000, 0usize..5, 0usize..32), 0..=20),
    ) {
        let trip = record(member_count, &expenses).validate();
        prop_assert!(trip.is_ok());
        let trip = trip.unwrap();

        let settlement = SettlementService::settle_trip(&trip);
        let expected_total: f64 = expenses.iter().map(|&(cents, _, _)| cents as f64 / 100.0).sum();

        prop_assert!((settlement.total_paid().value() - expected_total).abs() < 1e-6);
        let net: Money = settlement.balances().iter().map(|balance| balance.balance).sum();
        prop_assert!(net.value().abs() < 1e-6);
    }

    #[test]
    fn unnamed_members_have_no_display_name(member_count in 1usize..=5) {
        let trip = record(member_count, &[]).validate().unwrap();
        for member in &trip.members {
            prop_assert_eq!(trip.display_name(&member.id), None);
        }
    }
}
