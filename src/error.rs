use thiserror::Error;

/// Faults from the relay pipeline.
///
/// Everything before the webhook POST is fatal for the invocation; the
/// hosting runtime sees the error and marks the invocation failed. A log
/// with no matching record is not an error (see [`crate::models::ExtractionResult`]).
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("malformed storage event notification: {0}")]
    Notification(String),

    #[error("object store request failed: {0}")]
    ObjectStore(#[source] aws_sdk_s3::Error),

    #[error("reading object body failed: {0}")]
    Io(#[source] std::io::Error),

    #[error("decompressing log object failed: {0}")]
    Decompress(#[source] std::io::Error),

    #[error("log object is not valid UTF-8: {0}")]
    Encoding(#[source] std::str::Utf8Error),

    #[error("log object is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("audit log has unexpected shape: {0}")]
    Schema(#[source] serde_json::Error),

    #[error("matched audit record is missing {0}")]
    MissingField(&'static str),

    #[error("identity ARN {0:?} does not split into prefix/role/username")]
    MalformedIdentity(String),

    #[error("webhook request could not be sent: {0}")]
    Network(#[source] reqwest::Error),
}
