use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PayloadError;

/// Lifecycle state of an invitation, as named by the backend.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl InvitationStatus {
    pub const ALL: [InvitationStatus; 3] = [
        InvitationStatus::Pending,
        InvitationStatus::Accepted,
        InvitationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvitationStatus::Pending => "PENDING",
            InvitationStatus::Accepted => "ACCEPTED",
            InvitationStatus::Rejected => "REJECTED",
        }
    }

    pub fn is_pending(&self) -> bool {
        *self == InvitationStatus::Pending
    }

    /// True once the invited user has accepted or rejected.
    pub fn is_answered(&self) -> bool {
        !self.is_pending()
    }
}

impl fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvitationStatus {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InvitationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| PayloadError::UnknownEnumValue {
                field: "status".to_string(),
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for InvitationStatus {
    type Error = PayloadError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
