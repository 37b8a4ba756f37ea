/// Core error type for the notifier.
///
/// Adapter crates map their specific errors into this type so the poll loop can
/// match on the failure kind instead of inspecting message text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("endpoint {endpoint} is unavailable, API response code: {status}")]
    HttpStatus { status: u16, endpoint: String },

    #[error("remote service error: {0}")]
    RemoteService(String),

    #[error("unexpected API response: {0}")]
    Response(#[from] ResponseError),

    #[error("homework status error: {0}")]
    Status(#[from] StatusError),

    #[error("delivery error: {0}")]
    Delivery(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shape violations found while validating a homework-status payload.
///
/// Variants are listed in the order the checks run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("missing key \"homeworks\"")]
    MissingHomeworks,

    #[error("\"homeworks\" must be a list, got {0}")]
    HomeworksNotAList(&'static str),

    #[error("missing key \"current_date\"")]
    MissingCurrentDate,

    #[error("\"current_date\" must be an integer, got {0}")]
    CurrentDateNotInteger(&'static str),

    #[error("\"current_date\" must be non-zero")]
    ZeroCurrentDate,

    #[error("\"homeworks\" is empty")]
    EmptyHomeworks,
}

/// Problems with an individual homework record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    #[error("homework record has no \"{0}\"")]
    MissingField(&'static str),

    #[error("homework status is empty")]
    EmptyStatus,

    #[error("unexpected homework status: {0}")]
    UnexpectedStatus(String),
}

/// Human-readable name of a JSON value's type, used in validation errors.
pub(crate) fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "object",
    }
}

pub type Result<T> = std::result::Result<T, Error>;
