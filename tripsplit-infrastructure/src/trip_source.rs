use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use tripsplit_application::{ExpenseRecord, MemberRecord, TripRecord, TripSource, TripSourceError};

/// Reads trip documents stored as JSON files.
#[derive(Default)]
pub struct JsonTripSource;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TripDocument {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    members: Vec<MemberDocument>,
    #[serde(default)]
    expenses: Vec<ExpenseDocument>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemberDocument {
    user_id: String,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpenseDocument {
    #[serde(default)]
    title: Option<String>,
    amount: Decimal,
    paid_by: String,
    #[serde(default)]
    participants: Vec<String>,
}

impl JsonTripSource {
    /// Parses an in-memory trip document. `reference` only labels errors.
    pub fn parse_str(reference: &str, content: &str) -> Result<TripRecord, TripSourceError> {
        let document: TripDocument =
            serde_json::from_str(content).map_err(|err| TripSourceError::Malformed {
                reference: reference.to_owned(),
                detail: err.to_string(),
            })?;
        Ok(document.into_record())
    }
}

impl TripSource for JsonTripSource {
    fn load(&self, reference: &str) -> Result<TripRecord, TripSourceError> {
        let content = fs::read_to_string(reference).map_err(|source| TripSourceError::Io {
            reference: reference.to_owned(),
            source,
        })?;
        tracing::debug!(reference, bytes = content.len(), "read trip document");
        Self::parse_str(reference, &content)
    }
}

impl TripDocument {
    fn into_record(self) -> TripRecord {
        TripRecord {
            name: self.name,
            members: self
                .members
                .into_iter()
                .map(|member| MemberRecord {
                    user_id: member.user_id,
                    name: member.name,
                })
                .collect(),
            expenses: self
                .expenses
                .into_iter()
                .map(|expense| ExpenseRecord {
                    title: expense.title,
                    amount: expense.amount,
                    paid_by: expense.paid_by,
                    participants: expense.participants,
                })
                .collect(),
        }
    }
}
