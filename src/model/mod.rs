//! Chart model: pair aligned series with the expected x-axis.

use crate::Result;
use crate::axis::AxisConfig;
use crate::diagnostics;
use crate::results::AlignedResults;

use anyhow::bail;
use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesView {
    pub label: String,
    /// One value per x-axis point.
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x: Vec<i64>,
    pub series: Vec<SeriesView>,
}

#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Plot only labels matching this pattern.
    pub only: Option<Regex>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Benchmark results".to_string(),
            x_label: "size".to_string(),
            y_label: "time".to_string(),
            only: None,
        }
    }
}

/// Build chart data. Performs:
/// - label filtering (warn if the filter leaves nothing to plot)
/// - length check of every plotted series against the axis (error)
/// - size check: a series must be measured at exactly the axis sizes (error)
pub fn build_chart_data(
    aligned: &AlignedResults,
    axis: &AxisConfig,
    options: &ChartOptions,
) -> Result<ChartData> {
    axis.validate()?;
    let x = axis.points();

    let mut series = Vec::new();
    for s in aligned.iter() {
        if let Some(re) = &options.only {
            if !re.is_match(&s.label) {
                continue;
            }
        }

        if s.values.len() != x.len() {
            bail!(
                "label '{}' has {} points but the x-axis has {} ({:?})",
                s.label,
                s.values.len(),
                x.len(),
                x
            );
        }

        if s.sizes != x {
            bail!(
                "label '{}' was measured at sizes {:?} but the x-axis is {:?}",
                s.label,
                s.sizes,
                x
            );
        }

        series.push(SeriesView {
            label: s.label.clone(),
            values: s.values.clone(),
        });
    }

    if series.is_empty() && !aligned.is_empty() {
        if let Some(re) = &options.only {
            diagnostics::warn(format!(
                "label filter {:?} matched none of {} labels",
                re.as_str(),
                aligned.len()
            ));
        }
    }

    Ok(ChartData {
        title: options.title.clone(),
        x_label: options.x_label.clone(),
        y_label: options.y_label.clone(),
        x,
        series,
    })
}
