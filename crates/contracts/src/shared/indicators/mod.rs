use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier, used as key when rendering stat cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Integer,
}

/// Direction of the change badge next to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
}

impl TrendDirection {
    /// `0` counts as down, matching the inventory table arrows.
    pub fn from_signed(value: i64) -> Self {
        if value > 0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        }
    }
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// A single stat card: computed value plus static display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub id: IndicatorId,
    pub label: String,
    /// Icon name understood by the frontend icon() helper
    pub icon: String,
    /// CSS colour of the icon tile
    pub accent: String,
    pub value: f64,
    pub format: ValueFormat,
    /// Change versus the previous period, already formatted ("+12.5%")
    pub change: String,
    pub trend: TrendDirection,
}
