use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod invitation;
pub mod status;

pub use invitation::{parse_invitation_list, InvitationResponse};
pub use status::InvitationStatus;

/// Fields shared by every record the meetup backend returns.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Model {
    pub id: i64,
}

impl Model {
    pub fn new(id: i64) -> Self {
        Model { id }
    }
}

// Error body produced by the backend's exception handler
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ApiErrorResponse {
    pub code: i32,
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ApiErrorResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
