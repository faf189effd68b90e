use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Datamuse error {}{}", .status, body_suffix(.body))]
    Upstream { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Please enter at least one search term.")]
    EmptyRequest,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid blocklist entry on line {line}: {reason}")]
    InvalidBlockListEntry { line: usize, reason: String },

    #[error("Invalid config value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Upstream,
    Transport,
    Input,
    Config,
}

impl SearchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SearchError::Upstream { .. } => ErrorCategory::Upstream,
            SearchError::Transport(_) | SearchError::MalformedResponse(_) => {
                ErrorCategory::Transport
            }
            SearchError::EmptyRequest => ErrorCategory::Input,
            SearchError::Io(_)
            | SearchError::InvalidBlockListEntry { .. }
            | SearchError::InvalidConfigValue { .. } => ErrorCategory::Config,
        }
    }

    /// True for failures where no usable upstream response exists.
    pub fn is_transport(&self) -> bool {
        self.category() == ErrorCategory::Transport
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SearchError::Upstream { .. } | SearchError::EmptyRequest => self.to_string(),
            SearchError::Transport(_) | SearchError::MalformedResponse(_) => {
                "Unexpected error contacting API.".to_string()
            }
            _ => format!("Configuration problem: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Upstream => "The word service rejected the request; try again later",
            ErrorCategory::Transport => "Check your network connection and the endpoint URL",
            ErrorCategory::Input => "Provide --rhyme, --starts, --synonym or --antonym",
            ErrorCategory::Config => "Check command line flags and DATAMUSE_* environment variables",
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_display_with_and_without_body() {
        let err = SearchError::Upstream {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Datamuse error 500: boom");

        let err = SearchError::Upstream {
            status: 503,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "Datamuse error 503");
    }

    #[test]
    fn test_categories() {
        let decode = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert!(SearchError::MalformedResponse(decode).is_transport());
        assert!(!SearchError::EmptyRequest.is_transport());
        assert_eq!(
            SearchError::Upstream {
                status: 404,
                body: String::new()
            }
            .category(),
            ErrorCategory::Upstream
        );
    }
}
