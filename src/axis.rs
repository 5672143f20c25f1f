//! Expected x-axis: the sizes every label is measured at.

use crate::Result;
use anyhow::bail;

/// Inclusive, evenly stepped size range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisConfig {
    pub start: i64,
    pub end: i64,
    pub step: i64,
}

impl Default for AxisConfig {
    /// 0, 50, 100, ..., 500.
    fn default() -> Self {
        Self {
            start: 0,
            end: 500,
            step: 50,
        }
    }
}

impl AxisConfig {
    pub fn validate(&self) -> Result<()> {
        if self.step <= 0 {
            bail!("axis step must be positive, got {}", self.step);
        }
        if self.end < self.start {
            bail!("axis end {} is before start {}", self.end, self.start);
        }
        Ok(())
    }

    pub fn points(&self) -> Vec<i64> {
        if self.step <= 0 {
            return vec![];
        }
        (self.start..=self.end).step_by(self.step as usize).collect()
    }
}
