use indexmap::IndexMap;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// Smallest amount that still counts as money owed.
///
/// Balances below it are considered settled and transfers below it are dropped.
pub const SETTLEMENT_TOLERANCE: f64 = 0.01;

/// Member balances in roster order.
pub type MemberBalances = IndexMap<MemberId, Money>;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(String);

impl MemberId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for MemberId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for MemberId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Currency amount used by the settlement arithmetic.
///
/// Arithmetic is carried out in `f64`; amounts are only rounded to cents when a
/// transfer is emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Money(f64);

impl Money {
    pub const ZERO: Self = Self(0.0);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Within the settlement tolerance of zero.
    pub fn is_settled(self) -> bool {
        self.0.abs() < SETTLEMENT_TOLERANCE
    }

    /// Large enough to be worth a transfer.
    pub fn is_significant(self) -> bool {
        self.0 >= SETTLEMENT_TOLERANCE
    }

    /// Nearest whole cent. Amounts too large to scale are returned as is.
    pub fn round_to_cents(self) -> Self {
        let scaled = self.0 * 100.0;
        if !scaled.is_finite() {
            return self;
        }
        Self(scaled.round() / 100.0)
    }

    /// Even share of this amount across `parts` members.
    pub fn split(self, parts: usize) -> Self {
        Self(self.0 / parts as f64)
    }

    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    pub fn from_decimal(value: Decimal) -> Option<Self> {
        value.to_f64().map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
}

impl Member {
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A payment fronted by one member on behalf of `participants`.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub amount: Money,
    pub paid_by: MemberId,
    pub participants: Vec<MemberId>,
}

impl Expense {
    pub fn new<I>(amount: Money, paid_by: impl Into<MemberId>, participants: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<MemberId>,
    {
        Self {
            amount,
            paid_by: paid_by.into(),
            participants: participants.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this expense shifts anyone's owed total.
    pub fn is_shared(&self) -> bool {
        !self.participants.is_empty() && self.amount.is_positive()
    }

    pub fn share(&self) -> Money {
        self.amount.split(self.participants.len())
    }
}

/// Paid and owed totals of one member across all expenses.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberLedger {
    pub member: MemberId,
    pub paid: Money,
    pub owed: Money,
}

impl MemberLedger {
    pub fn new(member: MemberId) -> Self {
        Self {
            member,
            paid: Money::ZERO,
            owed: Money::ZERO,
        }
    }

    /// Positive when the member is owed money overall.
    pub fn net(&self) -> Money {
        self.paid - self.owed
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MemberBalance {
    pub member: MemberId,
    pub balance: Money,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transfer {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: Money,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Settlement {
    pub ledgers: Vec<MemberLedger>,
    pub transfers: Vec<Transfer>,
}

impl Settlement {
    pub fn balances(&self) -> Vec<MemberBalance> {
        self.ledgers
            .iter()
            .map(|ledger| MemberBalance {
                member: ledger.member.clone(),
                balance: ledger.net(),
            })
            .collect()
    }

    /// Total fronted by roster members.
    pub fn total_paid(&self) -> Money {
        self.ledgers.iter().map(|ledger| ledger.paid).sum()
    }

    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }
}
