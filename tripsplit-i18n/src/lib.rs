#[cfg(all(feature = "fr", feature = "en"))]
compile_error!("Cannot enable both 'fr' and 'en' features at the same time");

#[cfg(feature = "fr")]
pub mod strings {
    pub const MEMBER: &str = "Membre";
    pub const PAID: &str = "Payé";
    pub const OWED: &str = "Dû";
    pub const BALANCE: &str = "Solde";
    pub const UNKNOWN_MEMBER: &str = "Inconnu";
    pub const ALL_SETTLED: &str = "Tout le monde est quitte.";
    pub const TOTAL_PAID: &str = "Total dépensé";
}

#[cfg(not(feature = "fr"))]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const PAID: &str = "Paid";
    pub const OWED: &str = "Owed";
    pub const BALANCE: &str = "Balance";
    pub const UNKNOWN_MEMBER: &str = "Unknown";
    pub const ALL_SETTLED: &str = "Everyone is settled up.";
    pub const TOTAL_PAID: &str = "Total spent";
}

pub use strings::*;

pub struct OwesMessage<'a> {
    from: &'a str,
    to: &'a str,
    amount: &'a str,
}

/// "`from` owes `amount` to `to`"
pub fn owes<'a>(from: &'a str, amount: &'a str, to: &'a str) -> OwesMessage<'a> {
    OwesMessage { from, to, amount }
}

#[cfg(feature = "fr")]
impl std::fmt::Display for OwesMessage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} doit {} à {}", self.from, self.amount, self.to)
    }
}

#[cfg(not(feature = "fr"))]
impl std::fmt::Display for OwesMessage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} owes {} to {}", self.from, self.amount, self.to)
    }
}
