use crate::model::{Expense, Member, MemberBalances, MemberId, MemberLedger};
use indexmap::IndexMap;

/// Accumulates paid and owed totals per roster member.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Paid / owed breakdown for every member, in roster order.
    ///
    /// Payers and participants that are not on the roster are skipped. Their
    /// share of an expense is still counted in the divisor.
    pub fn ledgers(&self, expenses: &[Expense], members: &[Member]) -> Vec<MemberLedger> {
        let mut ledgers: IndexMap<&MemberId, MemberLedger> =
            IndexMap::with_capacity(members.len());
        for member in members {
            ledgers
                .entry(&member.id)
                .or_insert_with(|| MemberLedger::new(member.id.clone()));
        }

        for expense in expenses {
            if let Some(ledger) = ledgers.get_mut(&expense.paid_by) {
                ledger.paid += expense.amount;
            }

            if !expense.is_shared() {
                continue;
            }

            let share = expense.share();
            for participant in &expense.participants {
                match ledgers.get_mut(participant) {
                    Some(ledger) => ledger.owed += share,
                    None => tracing::trace!(
                        participant = participant.as_str(),
                        "skipping participant outside the roster"
                    ),
                }
            }
        }

        ledgers.into_values().collect()
    }

    /// Net balance per member: positive when owed money, negative when owing.
    pub fn net_balances(&self, expenses: &[Expense], members: &[Member]) -> MemberBalances {
        self.ledgers(expenses, members)
            .into_iter()
            .map(|ledger| {
                let net = ledger.net();
                (ledger.member, net)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Money;
    use rstest::{fixture, rstest};

    #[fixture]
    fn calculator() -> BalanceCalculator {
        BalanceCalculator
    }

    fn roster(ids: &[&str]) -> Vec<Member> {
        ids.iter().map(|id| Member::new(*id, id.to_uppercase())).collect()
    }

    #[rstest]
    #[case::empty(vec![], vec![("a", 0.0), ("b", 0.0)])]
    #[case::two_person_split(
        vec![Expense::new(Money::new(100.0), "a", ["a", "b"])],
        vec![("a", 50.0), ("b", -50.0)]
    )]
    #[case::self_only(
        vec![Expense::new(Money::new(30.0), "a", ["a"])],
        vec![("a", 0.0), ("b", 0.0)]
    )]
    #[case::payer_not_participant(
        vec![Expense::new(Money::new(40.0), "a", ["b"])],
        vec![("a", 40.0), ("b", -40.0)]
    )]
    #[case::unknown_participant_ignored(
        vec![Expense::new(Money::new(60.0), "a", ["a", "b", "zed"])],
        vec![("a", 40.0), ("b", -20.0)]
    )]
    #[case::unknown_payer_ignored(
        vec![Expense::new(Money::new(10.0), "zed", ["a", "b"])],
        vec![("a", -5.0), ("b", -5.0)]
    )]
    #[case::no_participants(
        vec![Expense::new(Money::new(25.0), "b", Vec::<&str>::new())],
        vec![("a", 0.0), ("b", 25.0)]
    )]
    fn net_balance_cases(
        calculator: BalanceCalculator,
        #[case] expenses: Vec<Expense>,
        #[case] expected: Vec<(&str, f64)>,
    ) {
        let balances = calculator.net_balances(&expenses, &roster(&["a", "b"]));

        let actual: Vec<(&str, f64)> = balances
            .iter()
            .map(|(member, balance)| (member.as_str(), balance.value()))
            .collect();
        assert_eq!(actual, expected);
    }

    #[rstest]
    fn ledgers_follow_roster_order(calculator: BalanceCalculator) {
        let expenses = vec![
            Expense::new(Money::new(90.0), "a", ["a", "b", "c"]),
            Expense::new(Money::new(30.0), "b", ["b", "c"]),
        ];

        let ledgers = calculator.ledgers(&expenses, &roster(&["c", "a", "b"]));

        let order: Vec<&str> = ledgers.iter().map(|l| l.member.as_str()).collect();
        assert_eq!(order, ["c", "a", "b"]);
        assert_eq!(ledgers[0].paid, Money::ZERO);
        assert_eq!(ledgers[0].owed, Money::new(45.0));
        assert_eq!(ledgers[1].net(), Money::new(60.0));
        assert_eq!(ledgers[2].net(), Money::new(-15.0));
    }

    #[rstest]
    fn duplicate_roster_entries_collapse(calculator: BalanceCalculator) {
        let members = vec![Member::new("a", "Alice"), Member::new("a", "Alias")];
        let expenses = vec![Expense::new(Money::new(10.0), "a", ["a"])];

        let ledgers = calculator.ledgers(&expenses, &members);

        assert_eq!(ledgers.len(), 1);
        assert_eq!(ledgers[0].paid, Money::new(10.0));
    }
}
