use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;

use super::{InvitationStatus, Model};
use crate::error::{PayloadError, Result};

/// An invitation to a meetup as returned by the backend.
///
/// Values only come out of the parse boundary (`from_json`, `from_slice`,
/// `from_value`, `parse_invitation_list`) or from direct construction; no
/// method mutates them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "InvitationResponsePayload")]
pub struct InvitationResponse {
    #[serde(flatten)]
    pub model: Model,
    pub user_id: i64,
    pub meetup_id: i64,
    pub meetup_owner_name: String,
    pub meetup_owner_email: String,
    pub meetup_day: NaiveDate,
    /// Forecast temperature for the meetup day.
    pub meetup_temperature: f64,
    pub status: InvitationStatus,
}

// Wire record before the status is checked against the enum
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct InvitationResponsePayload {
    #[serde(flatten)]
    model: Model,
    user_id: i64,
    meetup_id: i64,
    meetup_owner_name: String,
    meetup_owner_email: String,
    #[serde(deserialize_with = "deserialize_meetup_day")]
    meetup_day: NaiveDate,
    meetup_temperature: f64,
    status: String,
}

// Only the zero-padded `YYYY-MM-DD` form the backend writes
fn deserialize_meetup_day<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let day = String::deserialize(deserializer)?;
    let well_shaped = day.len() == 10
        && day.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_shaped {
        return Err(serde::de::Error::custom(format!(
            "meetupDay {:?} is not a YYYY-MM-DD date",
            day
        )));
    }
    NaiveDate::parse_from_str(&day, "%Y-%m-%d").map_err(|err| {
        serde::de::Error::custom(format!("meetupDay {:?} is not a YYYY-MM-DD date: {}", day, err))
    })
}

impl TryFrom<InvitationResponsePayload> for InvitationResponse {
    type Error = PayloadError;

    fn try_from(payload: InvitationResponsePayload) -> Result<Self> {
        Ok(InvitationResponse {
            model: payload.model,
            user_id: payload.user_id,
            meetup_id: payload.meetup_id,
            meetup_owner_name: payload.meetup_owner_name,
            meetup_owner_email: payload.meetup_owner_email,
            meetup_day: payload.meetup_day,
            meetup_temperature: payload.meetup_temperature,
            status: payload.status.parse()?,
        })
    }
}

impl InvitationResponse {
    pub fn id(&self) -> i64 {
        self.model.id
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::check(serde_json::from_str::<InvitationResponsePayload>(json))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::check(serde_json::from_slice::<InvitationResponsePayload>(bytes))
    }

    pub fn from_value(value: Value) -> Result<Self> {
        Self::check(serde_json::from_value::<InvitationResponsePayload>(value))
    }

    /// Checks the shape first, then the status, so a bad status is only
    /// reported on an otherwise well-formed record.
    fn check(payload: serde_json::Result<InvitationResponsePayload>) -> Result<Self> {
        let result = payload
            .map_err(PayloadError::from)
            .and_then(InvitationResponse::try_from);

        match &result {
            Ok(invitation) => debug!(
                "Parsed invitation {} for user {} to meetup {}",
                invitation.id(),
                invitation.user_id,
                invitation.meetup_id
            ),
            Err(err) => warn!("Rejected invitation payload: {}", err),
        }

        result
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Parses a JSON array of invitations, failing on the first bad element.
pub fn parse_invitation_list(json: &str) -> Result<Vec<InvitationResponse>> {
    let elements: Vec<&RawValue> = serde_json::from_str(json)?;
    debug!("Parsing invitation list with {} elements", elements.len());

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            InvitationResponse::from_json(element.get()).map_err(|err| err.at_index(index))
        })
        .collect()
}
