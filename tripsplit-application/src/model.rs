use crate::error::TripValidationError;
use fxhash::FxHashSet;
use rust_decimal::Decimal;
use tripsplit_domain::{Expense, Member, MemberId, Money};

/// Member entry as stored in a trip document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
    pub user_id: String,
    pub name: Option<String>,
}

/// Expense entry as stored in a trip document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub title: Option<String>,
    pub amount: Decimal,
    pub paid_by: String,
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripRecord {
    pub name: Option<String>,
    pub members: Vec<MemberRecord>,
    pub expenses: Vec<ExpenseRecord>,
}

/// A trip whose members and expenses passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub name: Option<String>,
    pub members: Vec<Member>,
    pub expenses: Vec<Expense>,
}

impl TripRecord {
    /// Converts the raw record into the strict domain model.
    ///
    /// Payers and participants missing from the roster are kept; the balance
    /// calculator ignores them.
    pub fn validate(self) -> Result<Trip, TripValidationError> {
        let mut seen = FxHashSet::default();
        let mut members = Vec::with_capacity(self.members.len());
        for record in self.members {
            if !seen.insert(record.user_id.clone()) {
                tracing::warn!(member = %record.user_id, "duplicate member in roster");
                return Err(TripValidationError::DuplicateMember(record.user_id));
            }
            members.push(Member::new(record.user_id, record.name.unwrap_or_default()));
        }

        let expenses = self
            .expenses
            .into_iter()
            .enumerate()
            .map(|(idx, record)| record.validate(idx + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Trip {
            name: self.name,
            members,
            expenses,
        })
    }
}

impl ExpenseRecord {
    fn validate(self, position: usize) -> Result<Expense, TripValidationError> {
        let amount = self.amount;
        let result = if amount.is_sign_negative() && !amount.is_zero() {
            Err(TripValidationError::NegativeAmount { position, amount })
        } else if amount.normalize().scale() > 2 {
            Err(TripValidationError::SubCentPrecision { position, amount })
        } else if self.participants.is_empty() {
            Err(TripValidationError::NoParticipants { position })
        } else {
            let mut seen = FxHashSet::default();
            match self.participants.iter().find(|id| !seen.insert(id.as_str())) {
                Some(member) => Err(TripValidationError::DuplicateParticipant {
                    position,
                    member: member.clone(),
                }),
                None => Money::from_decimal(amount)
                    .ok_or(TripValidationError::UnrepresentableAmount { position, amount }),
            }
        };

        match result {
            Ok(money) => Ok(Expense::new(money, self.paid_by, self.participants)),
            Err(err) => {
                tracing::warn!(position, title = ?self.title, error = %err, "rejected expense");
                Err(err)
            }
        }
    }
}

impl Trip {
    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|member| &member.id == id)
    }
}
