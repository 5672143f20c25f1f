use crate::Result;
use crate::results::record::{AlignedResults, AlignedSeries, Record, SizeTimes};

use anyhow::{Context, bail};
use std::collections::BTreeMap;
use std::fs;

/// Accumulates result records and aligns them per label.
///
/// Records are upserted into a label -> (size -> time) table; a later record
/// for the same (label, size) replaces the earlier one.
#[derive(Debug, Default)]
pub struct ResultAligner {
    table: BTreeMap<String, SizeTimes>,
    /// Labels in first-appearance order.
    order: Vec<String>,
}

impl ResultAligner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one `<label> <size> <time>` line and upsert it.
    pub fn ingest(&mut self, line: &str) -> Result<()> {
        let record = parse_record(line)?;
        self.insert(record);
        Ok(())
    }

    pub fn insert(&mut self, record: Record) {
        let Record { label, size, time } = record;

        if !self.table.contains_key(&label) {
            self.order.push(label.clone());
        }

        self.table.entry(label).or_default().insert(size, time);
    }

    /// Order each label's times by ascending size.
    pub fn finalize(self) -> AlignedResults {
        let Self { mut table, order } = self;

        let series = order
            .into_iter()
            .map(|label| {
                let (sizes, values): (Vec<i64>, Vec<i64>) =
                    table.remove(&label).unwrap_or_default().into_iter().unzip();
                AlignedSeries {
                    label,
                    sizes,
                    values,
                }
            })
            .collect();

        AlignedResults::new(series)
    }
}

/// Split a line on single spaces into a record.
///
/// The label is taken verbatim; fields past the third are ignored.
fn parse_record(line: &str) -> Result<Record> {
    let mut fields = line.split(' ');

    let (Some(label), Some(size), Some(time)) = (fields.next(), fields.next(), fields.next())
    else {
        bail!("expected `<label> <size> <time>`, got {:?}", line);
    };

    let size: i64 = size
        .parse()
        .with_context(|| format!("bad size {:?} in line {:?}", size, line))?;
    let time: i64 = time
        .parse()
        .with_context(|| format!("bad time {:?} in line {:?}", time, line))?;

    Ok(Record {
        label: label.to_string(),
        size,
        time,
    })
}

/// Read a results file and align every label's series.
///
/// The first malformed line aborts the whole parse.
pub fn parse_results_file(path: &str) -> Result<AlignedResults> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read results file {}", path))?;

    let mut aligner = ResultAligner::new();
    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;
        aligner
            .ingest(line)
            .with_context(|| format!("results parse error at {}:{}", path, lno))?;
    }

    Ok(aligner.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn aligned(expected: &[(&str, &[i64])]) -> Vec<(String, Vec<i64>)> {
        expected
            .iter()
            .map(|(label, values)| (label.to_string(), values.to_vec()))
            .collect()
    }

    fn pairs(out: &AlignedResults) -> Vec<(String, Vec<i64>)> {
        out.iter()
            .map(|s| (s.label.clone(), s.values.clone()))
            .collect()
    }

    fn run(input: &str) -> Result<Vec<(String, Vec<i64>)>> {
        Ok(pairs(&align(input)?))
    }

    fn align(input: &str) -> Result<AlignedResults> {
        let mut aligner = ResultAligner::new();
        for line in input.lines() {
            aligner.ingest(line)?;
        }
        Ok(aligner.finalize())
    }

    #[test]
    fn groups_by_label_in_input_order() {
        let out = run("foo 0 10\nfoo 50 20\nbar 0 5\nbar 50 15\n").unwrap();
        assert_eq!(out, aligned(&[("foo", &[10, 20]), ("bar", &[5, 15])]));
    }

    #[test]
    fn sorts_by_size_regardless_of_input_order() {
        let out = run("foo 50 20\nfoo 0 10\n").unwrap();
        assert_eq!(out, aligned(&[("foo", &[10, 20])]));

        let out = run("x 500 3\nx 100 2\nx 0 1\nx 250 9\n").unwrap();
        assert_eq!(out, aligned(&[("x", &[1, 2, 9, 3])]));
    }

    #[test]
    fn later_duplicate_wins() {
        let out = run("foo 0 10\nfoo 0 99\n").unwrap();
        assert_eq!(out, aligned(&[("foo", &[99])]));

        let out = run("foo 0 1\nfoo 50 10\nfoo 50 20\n").unwrap();
        assert_eq!(out, aligned(&[("foo", &[1, 20])]));
    }

    #[test]
    fn keeps_sizes_alongside_values() {
        let out = align("foo 100 3\nfoo 2 1\nfoo 7 2\n").unwrap();
        let series: Vec<&AlignedSeries> = out.iter().collect();
        assert_eq!(series[0].sizes, vec![2, 7, 100]);
        assert_eq!(series[0].values, vec![1, 2, 3]);
    }

    #[test]
    fn overwrite_keeps_single_entry() {
        let out = align("foo 0 10\nfoo 50 20\nfoo 0 99\n").unwrap();
        let series: Vec<&AlignedSeries> = out.iter().collect();
        assert_eq!(series[0].sizes, vec![0, 50]);
        assert_eq!(series[0].values, vec![99, 20]);
    }

    #[test]
    fn reingesting_same_line_is_idempotent() {
        let once = run("foo 0 10\nfoo 50 20\n").unwrap();
        let twice = run("foo 0 10\nfoo 0 10\nfoo 50 20\nfoo 50 20\n").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn label_count_matches_distinct_labels() {
        let out = align("a 0 1\nb 0 2\na 50 3\nc 0 4\nb 50 5\n").unwrap();
        assert_eq!(out.len(), 3);
        let labels: Vec<&str> = out.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn series_length_is_distinct_sizes() {
        let out = run("foo 0 1\nfoo 50 2\nbar 0 3\n").unwrap();
        assert_eq!(out, aligned(&[("foo", &[1, 2]), ("bar", &[3])]));
    }

    #[test]
    fn missing_field_is_an_error() {
        let err = run("foo bar\n").unwrap_err();
        assert!(err.to_string().contains("expected `<label> <size> <time>`"));
    }

    #[test]
    fn non_integer_fields_are_errors() {
        assert!(run("foo x 10\n").is_err());
        assert!(run("foo 0 1.5\n").is_err());
        assert!(run("\n").is_err());
    }

    #[test]
    fn spacing_is_significant() {
        // A doubled space yields an empty size field.
        assert!(run("foo  0 10\n").is_err());
        let out = run("foo 0 10 extra fields\n").unwrap();
        assert_eq!(out, aligned(&[("foo", &[10])]));
    }

    #[test]
    fn accepts_signed_values() {
        let out = run("foo 0 -3\nfoo 50 +4\n").unwrap();
        assert_eq!(out, aligned(&[("foo", &[-3, 4])]));
    }

    #[test]
    fn parse_file_reports_line_and_produces_nothing() {
        let path = std::env::temp_dir().join(format!("results-bad-{}", std::process::id()));
        fs::write(&path, "foo 0 10\nfoo bar\nfoo 50 20\n").unwrap();

        let err = parse_results_file(path.to_str().unwrap()).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains(":2"), "{}", msg);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn parse_file_handles_crlf() {
        let path = std::env::temp_dir().join(format!("results-crlf-{}", std::process::id()));
        fs::write(&path, "foo 50 20\r\nfoo 0 10\r\n").unwrap();

        let out = parse_results_file(path.to_str().unwrap()).unwrap();
        assert_eq!(pairs(&out), aligned(&[("foo", &[10, 20])]));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = parse_results_file("/nonexistent/results_parsed").unwrap_err();
        assert!(err.to_string().contains("read results file"));
    }
}
