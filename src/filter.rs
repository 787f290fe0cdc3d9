//! The streaming read filter: bounds, configuration, and the run itself.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use crate::fastq::{FastqRecord, FastqStream};

/// A closed numeric interval, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub low: f64,
    pub high: f64,
}

impl Bounds {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// A scalar given where an interval is expected means "at most": it
    /// normalizes to `[0, high]`.
    pub fn upper(high: f64) -> Self {
        Self { low: 0.0, high }
    }

    pub fn contains(&self, v: f64) -> bool {
        self.low <= v && v <= self.high
    }
}

/// The three independent thresholds of one filtering run. Note that quality
/// is a single floor, not an interval like the other two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig {
    pub gc_bounds: Bounds,
    pub length_bounds: Bounds,
    pub quality_threshold: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            gc_bounds: Bounds::new(0.0, 100.0),
            length_bounds: Bounds::new(0.0, (1u64 << 32) as f64),
            quality_threshold: 0.0,
        }
    }
}

impl FilterConfig {
    /// Whether a record passes all three predicates. Short-circuits in the
    /// cheapest order: length, then GC, then quality.
    pub fn passes(&self, record: &FastqRecord) -> bool {
        self.length_bounds.contains(record.len() as f64)
            && self.gc_bounds.contains(record.gc_percent())
            && record.phred_quality_avg() >= self.quality_threshold
    }
}

/// Counters for one filtering run. Dropped records are attributed to the
/// first predicate that rejected them.
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct FilterReport {
    pub total_records: usize,
    pub kept_records: usize,
    pub dropped_by_length: usize,
    pub dropped_by_gc: usize,
    pub dropped_by_quality: usize,
    pub malformed_records: usize,
    pub elapsed: f64,
}

/// Streams `input` record-by-record, writing records that pass every
/// predicate to `output` in their original order. The parent directory of
/// `output` is created if missing; the output file is created even when no
/// record passes. I/O failures terminate the run.
pub fn run(input: &Path, output: &Path, config: &FilterConfig) -> Result<FilterReport> {
    info!(
        "Filtering {} into {}",
        input.display(),
        output.display()
    );
    let start = Instant::now();

    let file = File::open(input)
        .with_context(|| format!("unable to open input file {}", input.display()))?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("unable to create output directory {}", parent.display())
            })?;
        }
    }
    let out = File::create(output)
        .with_context(|| format!("unable to create output file {}", output.display()))?;
    let mut writer = BufWriter::new(out);

    let mut report = FilterReport::default();
    let mut stream = FastqStream::new(BufReader::new(file));

    for item in stream.by_ref() {
        let record = item.with_context(|| format!("error reading {}", input.display()))?;
        report.total_records += 1;

        if !config.length_bounds.contains(record.len() as f64) {
            report.dropped_by_length += 1;
            continue;
        }
        if !config.gc_bounds.contains(record.gc_percent()) {
            report.dropped_by_gc += 1;
            continue;
        }
        if record.phred_quality_avg() < config.quality_threshold {
            report.dropped_by_quality += 1;
            continue;
        }

        record
            .write(&mut writer)
            .with_context(|| format!("unable to write to {}", output.display()))?;
        report.kept_records += 1;
    }

    report.malformed_records = stream.skipped();
    writer.flush()?;
    report.elapsed = start.elapsed().as_secs_f64();

    info!("Filtering completed. Output file: {}", output.display());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(seq: &str, qual: &str) -> FastqRecord {
        FastqRecord {
            id: "r1".to_string(),
            seq: seq.to_string(),
            qual: qual.to_string(),
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let b = Bounds::new(5.0, 20.0);
        assert!(b.contains(5.0));
        assert!(b.contains(20.0));
        assert!(!b.contains(4.999));
        assert!(!b.contains(20.001));
    }

    #[test]
    fn scalar_normalizes_to_zero_low() {
        assert_eq!(Bounds::upper(60.0), Bounds::new(0.0, 60.0));
    }

    #[test]
    fn high_gc_read_is_kept() {
        // GC 100%, length 10, quality 40 throughout
        let config = FilterConfig {
            gc_bounds: Bounds::new(50.0, 100.0),
            length_bounds: Bounds::new(5.0, 20.0),
            quality_threshold: 30.0,
        };
        assert!(config.passes(&record("GCGCGCGCGC", "IIIIIIIIII")));
    }

    #[test]
    fn gc_above_the_interval_is_dropped() {
        let config = FilterConfig {
            gc_bounds: Bounds::new(0.0, 40.0),
            length_bounds: Bounds::new(5.0, 20.0),
            quality_threshold: 30.0,
        };
        assert!(!config.passes(&record("GCGCGCGCGC", "IIIIIIIIII")));
    }

    #[test]
    fn quality_is_a_floor_not_an_interval() {
        let config = FilterConfig {
            quality_threshold: 30.0,
            ..FilterConfig::default()
        };
        // mean 40 is far above the floor and must still pass
        assert!(config.passes(&record("ACGT", "IIII")));
        // mean 0 is below the floor
        assert!(!config.passes(&record("ACGT", "!!!!")));
        // a mean exactly at the floor passes
        let exact = FilterConfig {
            quality_threshold: 40.0,
            ..FilterConfig::default()
        };
        assert!(exact.passes(&record("ACGT", "IIII")));
    }

    #[test]
    fn default_config_keeps_everything() {
        let config = FilterConfig::default();
        assert!(config.passes(&record("", "")));
        assert!(config.passes(&record("GATTACA", "IIIIIII")));
    }

    #[test]
    fn length_bounds_apply_to_the_sequence() {
        let config = FilterConfig {
            length_bounds: Bounds::new(5.0, 6.0),
            ..FilterConfig::default()
        };
        assert!(!config.passes(&record("ACGT", "IIII")));
        assert!(config.passes(&record("ACGTA", "IIIII")));
    }
}
