use thiserror::Error;

/// Every failure a Quobyte API call can produce.
///
/// Errors are surfaced unchanged to the caller. Nothing is retried and no
/// default value is ever substituted for a failed call.
#[derive(Debug, Error)]
pub enum QuobyteError {
    /// The request never produced a response: connection refused, DNS
    /// failure, transport timeout or an I/O error while reading the body.
    #[error("Quobyte API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered but reported a failure, either through a
    /// non-2xx status or an `error` object in the JSON-RPC reply.
    #[error("Quobyte API error (HTTP {status}{}): {message}", code_suffix(.code.as_ref()))]
    Api {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    /// The reply body was not valid JSON or did not match the expected shape.
    #[error("Failed to decode Quobyte API response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The reply carried neither a result nor an error.
    #[error("Empty result and no error for method {method}")]
    EmptyResponse { method: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl QuobyteError {
    pub fn is_transport(&self) -> bool {
        matches!(self, QuobyteError::Transport(_))
    }

    pub fn is_api(&self) -> bool {
        matches!(self, QuobyteError::Api { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, QuobyteError::Decode(_))
    }

    /// JSON-RPC error code reported by the service, if any.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            QuobyteError::Api { code, .. } => *code,
            _ => None,
        }
    }
}

fn code_suffix(code: Option<&i64>) -> String {
    code.map(|c| format!(", code {c}")).unwrap_or_default()
}

pub type QuobyteResult<T> = Result<T, QuobyteError>;
