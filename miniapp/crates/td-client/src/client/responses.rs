use serde::Serialize;
use serde_json::Value;
use td_core::User;

/// Result of asking the server who the caller is
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    Authenticated(Box<User>),
    /// Credentials are missing or expired
    Unauthorized,
    /// The server answered without a user for some other reason
    Rejected(String),
}

/// Acknowledgement of a successful mutation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MutationReceipt {
    /// Id of the created or touched record, when the server reports one
    pub id: Option<String>,
    pub message: Option<String>,
}

impl MutationReceipt {
    const ID_FIELDS: [&'static str; 4] = ["profileId", "preferencesId", "photoId", "id"];

    pub(crate) fn from_body(body: &Value) -> Self {
        let id = Self::ID_FIELDS
            .iter()
            .find_map(|field| body.get(*field).and_then(id_string))
            .or_else(|| body.get("data").and_then(|d| d.get("id")).and_then(id_string));

        Self {
            id,
            message: body
                .get("message")
                .and_then(Value::as_str)
                .map(String::from),
        }
    }
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// An image queued for upload
#[derive(Clone, PartialEq, Eq)]
pub struct PhotoFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PhotoFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

impl std::fmt::Debug for PhotoFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Best human-readable message in an error envelope:
/// `{error: {message}}`, `{error: "..."}` or `{message}`
pub(crate) fn error_message(body: &Value) -> Option<String> {
    let error = body.get("error");
    error
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .or_else(|| error.and_then(Value::as_str))
        .or_else(|| body.get("message").and_then(Value::as_str))
        .map(String::from)
}
