use crate::{
    model::{Expense, Member, MemberBalances, MemberId, Money, Transfer},
    services::BalanceCalculator,
};

/// Settlement calculation service
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Calculate the transfers that bring every balance back to zero
    ///
    /// Largest debts are matched against largest credits first. The result is
    /// greedy, not a minimum-transfer solution.
    ///
    /// # Arguments
    /// * `balances` - Net balance per member (positive: owed money)
    ///
    /// # Returns
    /// Transfers in the order they were matched
    pub fn calculate(&self, balances: &MemberBalances) -> Vec<Transfer> {
        let mut debtors: Vec<(&MemberId, Money)> = Vec::new();
        let mut creditors: Vec<(&MemberId, Money)> = Vec::new();
        for (member, &balance) in balances {
            if !balance.is_finite() {
                tracing::warn!(member = member.as_str(), %balance, "skipping non-finite balance");
                continue;
            }
            if balance.is_settled() {
                continue;
            }
            if balance.is_negative() {
                debtors.push((member, balance));
            } else if balance.is_positive() {
                creditors.push((member, balance));
            }
        }

        // Stable sorts: equal balances keep roster order.
        debtors.sort_by(|(_, a), (_, b)| a.total_cmp(b));
        creditors.sort_by(|(_, a), (_, b)| b.total_cmp(a));

        let mut transfers =
            Vec::with_capacity((debtors.len() + creditors.len()).saturating_sub(1));
        let (mut debtor_idx, mut creditor_idx) = (0, 0);

        while debtor_idx < debtors.len() && creditor_idx < creditors.len() {
            let (debtor, debt) = &mut debtors[debtor_idx];
            let (creditor, credit) = &mut creditors[creditor_idx];

            let amount = debt.abs().min(*credit).round_to_cents();
            if amount.is_significant() {
                transfers.push(Transfer {
                    from: (*debtor).clone(),
                    to: (*creditor).clone(),
                    amount,
                });
            }

            *debt += amount;
            *credit -= amount;

            if debt.is_settled() || !debt.is_finite() {
                debtor_idx += 1;
            }
            if credit.is_settled() || !credit.is_finite() {
                creditor_idx += 1;
            }
        }

        tracing::debug!(
            debtors = debtors.len(),
            creditors = creditors.len(),
            transfers = transfers.len(),
            "settled balances"
        );

        transfers
    }
}

/// Transfers settling `expenses` between `members`.
pub fn settle_expenses(expenses: &[Expense], members: &[Member]) -> Vec<Transfer> {
    let balances = BalanceCalculator.net_balances(expenses, members);
    SettlementCalculator.calculate(&balances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn calculator() -> SettlementCalculator {
        SettlementCalculator
    }

    fn balances(entries: &[(&str, f64)]) -> MemberBalances {
        entries
            .iter()
            .map(|&(id, balance)| (MemberId::from(id), Money::new(balance)))
            .collect()
    }

    #[rstest]
    #[case::empty(&[], vec![])]
    #[case::all_settled(&[("a", 0.0), ("b", 0.004), ("c", -0.009)], vec![])]
    #[case::simple_pair(&[("a", 50.0), ("b", -50.0)], vec![("b", "a", 50.0)])]
    #[case::one_creditor_two_debtors(
        &[("a", 60.0), ("b", -15.0), ("c", -45.0)],
        vec![("c", "a", 45.0), ("b", "a", 15.0)]
    )]
    #[case::largest_first(
        &[("a", 10.0), ("b", 30.0), ("c", -25.0), ("d", -15.0)],
        vec![("c", "b", 25.0), ("d", "b", 5.0), ("d", "a", 10.0)]
    )]
    #[case::ties_keep_input_order(
        &[("a", -10.0), ("b", -10.0), ("c", 20.0)],
        vec![("a", "c", 10.0), ("b", "c", 10.0)]
    )]
    #[case::thirds_rounded(
        &[("a", 66.666_666_666_666_67), ("b", -33.333_333_333_333_336), ("c", -33.333_333_333_333_336)],
        vec![("b", "a", 33.33), ("c", "a", 33.33)]
    )]
    #[case::too_large_to_scale(&[("a", 1e307), ("b", -1e307)], vec![("b", "a", 1e307)])]
    #[case::non_finite_skipped(
        &[("a", f64::INFINITY), ("b", f64::NEG_INFINITY), ("c", f64::NAN), ("d", 5.0), ("e", -5.0)],
        vec![("e", "d", 5.0)]
    )]
    fn settlement_calculator_cases(
        calculator: SettlementCalculator,
        #[case] entries: &[(&str, f64)],
        #[case] expected: Vec<(&str, &str, f64)>,
    ) {
        let transfers = calculator.calculate(&balances(entries));

        let expected: Vec<Transfer> = expected
            .into_iter()
            .map(|(from, to, amount)| Transfer {
                from: MemberId::from(from),
                to: MemberId::from(to),
                amount: Money::new(amount),
            })
            .collect();
        assert_eq!(transfers, expected);
    }

    #[rstest]
    fn sub_cent_residue_is_not_emitted(calculator: SettlementCalculator) {
        let transfers = calculator.calculate(&balances(&[
            ("a", 10.004),
            ("b", -10.0),
            ("c", -0.004),
        ]));

        assert_eq!(
            transfers,
            vec![Transfer {
                from: MemberId::from("b"),
                to: MemberId::from("a"),
                amount: Money::new(10.0),
            }]
        );
    }

    #[rstest]
    fn greedy_walk_may_exceed_smaller_side(calculator: SettlementCalculator) {
        let transfers = calculator.calculate(&balances(&[
            ("a", 20.0),
            ("b", 20.0),
            ("c", 20.0),
            ("d", -30.0),
            ("e", -30.0),
        ]));

        assert_eq!(transfers.len(), 4);
        for transfer in &transfers {
            assert!(
                !transfers
                    .iter()
                    .any(|other| other.from == transfer.to && other.to == transfer.from)
            );
        }
    }

    #[test]
    fn settles_expenses_end_to_end() {
        let members = vec![
            Member::new("a", "Alice"),
            Member::new("b", "Bob"),
            Member::new("c", "Chloé"),
        ];
        let expenses = vec![
            Expense::new(Money::new(90.0), "a", ["a", "b", "c"]),
            Expense::new(Money::new(30.0), "b", ["b", "c"]),
        ];

        let transfers = settle_expenses(&expenses, &members);

        assert_eq!(
            transfers,
            vec![
                Transfer {
                    from: MemberId::from("c"),
                    to: MemberId::from("a"),
                    amount: Money::new(45.0),
                },
                Transfer {
                    from: MemberId::from("b"),
                    to: MemberId::from("a"),
                    amount: Money::new(15.0),
                },
            ]
        );
    }
}
