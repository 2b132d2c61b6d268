use crate::{
    error::TripSourceError,
    model::{Trip, TripRecord},
};
use std::collections::HashMap;
use tripsplit_domain::MemberId;

/// Loads the raw record of a trip, e.g. from a file or a document store.
pub trait TripSource: Send + Sync {
    fn load(&self, reference: &str) -> Result<TripRecord, TripSourceError>;
}

pub trait MemberDirectory: Send + Sync {
    fn display_name(&self, member_id: &MemberId) -> Option<&str>;
}

impl MemberDirectory for HashMap<MemberId, String> {
    fn display_name(&self, member_id: &MemberId) -> Option<&str> {
        self.get(member_id).map(String::as_str)
    }
}

impl MemberDirectory for Trip {
    fn display_name(&self, member_id: &MemberId) -> Option<&str> {
        self.member(member_id)
            .map(|member| member.name.as_str())
            .filter(|name| !name.is_empty())
    }
}
