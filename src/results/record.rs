use std::collections::BTreeMap;

/// A single `<label> <size> <time>` line from the results file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub label: String,
    pub size: i64,
    pub time: i64,
}

/// Size -> time for one label. Ordered by size so alignment is a plain walk.
pub type SizeTimes = BTreeMap<i64, i64>;

/// Time values of one label, ordered by ascending size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedSeries {
    pub label: String,
    /// Sizes the label was measured at; `sizes[i]` pairs with `values[i]`.
    pub sizes: Vec<i64>,
    pub values: Vec<i64>,
}

/// Finalized series for every label, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignedResults {
    series: Vec<AlignedSeries>,
}

impl AlignedResults {
    pub(crate) fn new(series: Vec<AlignedSeries>) -> Self {
        Self { series }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlignedSeries> {
        self.series.iter()
    }
}
