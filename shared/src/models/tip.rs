//! Farming tip models

use serde::{Deserialize, Serialize};

/// Most urgent tip priority
pub const PRIORITY_URGENT: u8 = 1;
/// Routine tip priority, also the default when none is given
pub const PRIORITY_ROUTINE: u8 = 3;

/// Sentiment of a farming tip, used by the presentation layer to pick a card colour
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TipType {
    Positive,
    Warning,
    #[default]
    Info,
}

/// A single actionable farming recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tip {
    pub title: String,
    pub description: String,
    #[serde(rename = "type", default)]
    pub tip_type: TipType,
    /// 1 = most urgent, 3 = routine
    #[serde(default = "default_priority")]
    pub priority: u8,
}

fn default_priority() -> u8 {
    PRIORITY_ROUTINE
}

impl Tip {
    pub fn is_urgent(&self) -> bool {
        self.priority == PRIORITY_URGENT
    }
}
