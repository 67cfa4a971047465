//! View configuration.
//!
//! Every field has a default matching the reference week and month views, so
//! an empty JSON object is a complete configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};
use crate::layout::{LayoutStrategy, DEFAULT_MIN_EXTENT, DEFAULT_SLOT_HEIGHT};
use crate::overlap::GroupingStrategy;

/// Events listed in a month cell before the "+N more" marker.
pub const DEFAULT_MAX_VISIBLE_PER_CELL: usize = 3;

/// Minutes between rows of the day-column time axis.
pub const DEFAULT_TIME_SLOT_INTERVAL: u32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub slot_height: f64,
    pub min_extent: f64,
    pub max_visible_per_cell: usize,
    pub time_slot_interval: u32,
    pub grouping: GroupingStrategy,
    pub layout: LayoutStrategy,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            slot_height: DEFAULT_SLOT_HEIGHT,
            min_extent: DEFAULT_MIN_EXTENT,
            max_visible_per_cell: DEFAULT_MAX_VISIBLE_PER_CELL,
            time_slot_interval: DEFAULT_TIME_SLOT_INTERVAL,
            grouping: GroupingStrategy::default(),
            layout: LayoutStrategy::default(),
        }
    }
}

impl CalendarConfig {
    /// Parse a configuration from JSON and check its ranges.
    ///
    /// # Errors
    /// Returns `CalendarError::Json` for malformed JSON and
    /// `CalendarError::InvalidConfig` when `slot_height` is not positive or
    /// `min_extent` is negative.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CalendarConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        if !(self.slot_height.is_finite() && self.slot_height > 0.0) {
            return Err(CalendarError::InvalidConfig(format!(
                "slot_height must be positive, got {}",
                self.slot_height
            )));
        }
        if !(self.min_extent.is_finite() && self.min_extent >= 0.0) {
            return Err(CalendarError::InvalidConfig(format!(
                "min_extent must not be negative, got {}",
                self.min_extent
            )));
        }
        Ok(())
    }

    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig {
            slot_height: self.slot_height,
            min_extent: self.min_extent,
            grouping: self.grouping,
            strategy: self.layout,
        }
    }
}

/// The settings a day-column layout needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub slot_height: f64,
    pub min_extent: f64,
    pub grouping: GroupingStrategy,
    pub strategy: LayoutStrategy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        CalendarConfig::default().layout()
    }
}
