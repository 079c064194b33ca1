fn detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(" ({})", m))
        .unwrap_or_default()
}

/// Failure of one backend call.
///
/// `Unauthorized` and `Forbidden` have already been acted on by the client
/// (session cleared and/or redirect) by the time the caller sees them.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("build http client")]
    Client(#[source] reqwest::Error),

    #[error("{label}: request failed")]
    Network {
        label: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{label}: unauthorized{}", detail(.message))]
    Unauthorized {
        label: String,
        message: Option<String>,
    },

    #[error("{label}: forbidden{}", detail(.message))]
    Forbidden {
        label: String,
        message: Option<String>,
    },

    #[error("{label}: server returned {status}{}", detail(.message))]
    Server {
        label: String,
        status: u16,
        message: Option<String>,
    },

    #[error("{label}: unexpected response body")]
    Decode {
        label: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Message the backend put in the error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message, .. }
            | ApiError::Forbidden { message, .. }
            | ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Server message verbatim, or `fallback`.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.server_message().unwrap_or(fallback)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Forbidden { .. } => Some(403),
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
