use thiserror::Error;
use waf_lookup_core::ListError;

/// Error code WAF Classic returns when the listed item does not exist.
pub const NONEXISTENT_ITEM_CODE: &str = "WAFNonexistentItemException";

/// Errors from listing subscribed rule groups through the AWS SDK.
#[derive(Debug, Error)]
pub enum AwsListError {
    /// WAF reported that the requested item does not exist.
    #[error("WAF nonexistent item: {0}")]
    NotFound(String),

    /// The request was throttled by the service.
    #[error("AWS request throttled: {0}")]
    Throttled(String),

    /// A network or connection error occurred communicating with AWS.
    #[error("AWS connection error: {0}")]
    Connection(String),

    #[error("AWS request timed out: {0}")]
    Timeout(String),

    /// Credential resolution or authorization failed.
    #[error("credential error: {0}")]
    Credential(String),

    /// Any other error returned by the service.
    #[error("AWS service error: {0}")]
    Service(String),

    /// The lister configuration is invalid.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl ListError for AwsListError {
    fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Classify an SDK failure from its service error code (when the service
/// answered) and its rendered message.
///
/// The nonexistent-item code is matched as a substring of the code, then the
/// message is inspected for throttling, timeout, connection and credential
/// patterns.
pub fn classify_sdk_error(code: Option<&str>, message: &str) -> AwsListError {
    if code.is_some_and(|c| c.contains(NONEXISTENT_ITEM_CODE)) {
        return AwsListError::NotFound(message.to_owned());
    }

    let code_lower = code.unwrap_or_default().to_lowercase();
    let lower = message.to_lowercase();
    let mentions = |pattern: &str| code_lower.contains(pattern) || lower.contains(pattern);

    if mentions("throttl") || lower.contains("rate exceed") || lower.contains("too many") {
        AwsListError::Throttled(message.to_owned())
    } else if lower.contains("timeout") || lower.contains("timed out") {
        AwsListError::Timeout(message.to_owned())
    } else if mentions("accessdenied")
        || mentions("unrecognizedclient")
        || mentions("expiredtoken")
        || lower.contains("credential")
    {
        AwsListError::Credential(message.to_owned())
    } else if lower.contains("connection")
        || lower.contains("connect")
        || lower.contains("dns")
        || lower.contains("dispatch failure")
    {
        AwsListError::Connection(message.to_owned())
    } else {
        AwsListError::Service(message.to_owned())
    }
}
