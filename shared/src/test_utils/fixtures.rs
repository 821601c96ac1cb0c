use serde_json::{json, Value};

/// A complete, well-formed invitation payload as the backend sends it.
pub fn invitation_payload() -> Value {
    json!({
        "id": 7,
        "userId": 42,
        "meetupId": 3,
        "meetupOwnerName": "Ada Lovelace",
        "meetupOwnerEmail": "ada@example.com",
        "meetupDay": "2024-03-01",
        "meetupTemperature": 98.6,
        "status": "PENDING"
    })
}

/// The fixture payload with one field overwritten.
pub fn invitation_payload_with(field: &str, value: Value) -> Value {
    let mut payload = invitation_payload();
    payload[field] = value;
    payload
}

/// The fixture payload with one field removed.
pub fn invitation_payload_without(field: &str) -> Value {
    let mut payload = invitation_payload();
    if let Some(object) = payload.as_object_mut() {
        object.remove(field);
    }
    payload
}

pub fn api_error_payload() -> Value {
    json!({
        "code": 404,
        "status": "NOT_FOUND",
        "message": "Entity not found",
        "errors": ["Meetup with id 3 was not found"]
    })
}
