use derive_more::Display;

/// Message shown for any non-2xx answer from the stock API
pub const NOT_FOUND_MESSAGE: &str = "Stock not found";

/// Why a single fetch attempt failed. Terminal for that attempt only.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FetchError {
    /// Non-2xx status; the status itself is kept for logging only
    #[display(fmt = "Stock not found")]
    NotFound { status: u16 },
    /// The request never produced a response
    #[display(fmt = "{}", _0)]
    Transport(String),
    /// A response arrived but its body was not a series
    #[display(fmt = "{}", _0)]
    Parse(String),
}

impl FetchError {
    /// Text stored in the dashboard's error state
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigError {
    #[display(fmt = "API base URL cannot be empty")]
    EmptyBaseUrl,
    #[display(fmt = "Debounce interval must be greater than zero")]
    ZeroDebounce,
    #[display(fmt = "Unknown response policy: {}", _0)]
    UnknownPolicy(String),
}

impl std::error::Error for ConfigError {}
