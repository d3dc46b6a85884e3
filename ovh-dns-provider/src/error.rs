use std::fmt;

/// Everything an OVH API call can fail with.
///
/// Variants carry the `provider` that raised them and whatever the API said, so the
/// caller can render a message without re-parsing the response. Nothing in this crate
/// retries: every failure is surfaced as-is.
#[derive(Debug, Clone)]
pub enum ProviderError {
    /// No response: DNS resolution, TLS or connection failure.
    NetworkError { provider: String, detail: String },

    /// No response within the client timeout.
    Timeout { provider: String, detail: String },

    /// The application key, signature or consumer key was rejected, or no consumer key
    /// is configured.
    InvalidCredentials {
        provider: String,
        raw_message: Option<String>,
    },

    /// The consumer key is valid but was not granted the called route.
    PermissionDenied {
        provider: String,
        raw_message: Option<String>,
    },

    /// HTTP 409 on record creation.
    RecordExists {
        provider: String,
        /// Subdomain of the conflicting record.
        record_name: String,
        raw_message: Option<String>,
    },

    /// HTTP 404 on a record route.
    RecordNotFound {
        provider: String,
        record_id: String,
        raw_message: Option<String>,
    },

    /// HTTP 404 on a zone route, or a zone the account does not own.
    DomainNotFound {
        provider: String,
        domain: String,
        raw_message: Option<String>,
    },

    /// HTTP 400: the API refused a field (bad target, unknown type, ...).
    InvalidParameter {
        provider: String,
        param: String,
        detail: String,
    },

    /// A 2xx body that does not match the expected shape.
    ParseError { provider: String, detail: String },

    /// A request body could not be encoded.
    SerializationError { provider: String, detail: String },

    /// Any other status. `raw_code` is the OVH `errorCode` or the HTTP status.
    Unknown {
        provider: String,
        raw_code: Option<String>,
        raw_message: String,
    },
}

impl ProviderError {
    /// Caused by the request or the account rather than by the transport or the API.
    ///
    /// Expected errors are logged at `warn`, the rest at `error`.
    /// **Keep this in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::RecordExists { .. }
                | Self::RecordNotFound { .. }
                | Self::DomainNotFound { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// Whether re-running `setup` is the likely fix.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::InvalidCredentials { .. })
    }
}

/// `head` followed by `: msg` when the API gave one.
fn with_message(
    f: &mut fmt::Formatter<'_>,
    head: fmt::Arguments<'_>,
    msg: Option<&str>,
) -> fmt::Result {
    match msg {
        Some(msg) => write!(f, "{head}: {msg}"),
        None => write!(f, "{head}"),
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => with_message(
                f,
                format_args!("[{provider}] Invalid credentials"),
                raw_message.as_deref(),
            ),
            Self::PermissionDenied {
                provider,
                raw_message,
            } => with_message(
                f,
                format_args!("[{provider}] Permission denied"),
                raw_message.as_deref(),
            ),
            Self::RecordExists {
                provider,
                record_name,
                raw_message,
            } => with_message(
                f,
                format_args!("[{provider}] Record '{record_name}' already exists"),
                raw_message.as_deref(),
            ),
            Self::RecordNotFound {
                provider,
                record_id,
                raw_message,
            } => with_message(
                f,
                format_args!("[{provider}] Record '{record_id}' not found"),
                raw_message.as_deref(),
            ),
            Self::DomainNotFound {
                provider,
                domain,
                raw_message,
            } => with_message(
                f,
                format_args!("[{provider}] Zone '{domain}' not found"),
                raw_message.as_deref(),
            ),
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => write!(f, "[{provider}] Invalid parameter '{param}': {detail}"),
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Unexpected response: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Cannot encode request: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => write!(f, "[{provider}] {raw_message}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Result alias used by every API call.
pub type Result<T> = std::result::Result<T, ProviderError>;
