use thiserror::Error;

pub type Result<T> = std::result::Result<T, PayloadError>;

/// Failures raised at the deserialization boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Unknown value {value:?} for enum field `{field}`")]
    UnknownEnumValue { field: String, value: String },
}

impl PayloadError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, PayloadError::MalformedPayload(_))
    }

    pub fn is_unknown_enum_value(&self) -> bool {
        matches!(self, PayloadError::UnknownEnumValue { .. })
    }

    // Prefix the error with the position of the failing list element
    pub(crate) fn at_index(self, index: usize) -> Self {
        match self {
            PayloadError::MalformedPayload(msg) => {
                PayloadError::MalformedPayload(format!("element {}: {}", index, msg))
            }
            PayloadError::UnknownEnumValue { field, value } => PayloadError::UnknownEnumValue {
                field: format!("[{}].{}", index, field),
                value,
            },
        }
    }
}

impl From<serde_json::Error> for PayloadError {
    fn from(err: serde_json::Error) -> Self {
        PayloadError::MalformedPayload(err.to_string())
    }
}
