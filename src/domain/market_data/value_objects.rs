use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

/// Value Object - ticker code, always uppercase. May be empty while the user is typing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(from = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Uppercases the raw input; no other validation.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.to_uppercase())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Ticker {
    fn from(value: &str) -> Self {
        Self::normalize(value)
    }
}

impl From<String> for Ticker {
    fn from(value: String) -> Self {
        Self::normalize(&value)
    }
}

/// Value Object - one plottable price field
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, StrumDisplay, EnumIter, EnumString,
    AsRefStr, Serialize, Deserialize,
)]
pub enum Metric {
    Open,
    High,
    Low,
    Close,
}

impl Metric {
    /// Stroke color of the metric's line; fixed per metric.
    pub fn stroke(&self) -> &'static str {
        match self {
            Self::Open => "blue",
            Self::High => "green",
            Self::Low => "red",
            Self::Close => "black",
        }
    }

    /// All metrics in display order
    pub fn all() -> Vec<Metric> {
        Self::iter().collect()
    }
}

/// Fill color of the volume bars
pub const VOLUME_FILL: &str = "purple";
