//! Result lines and the results table.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Format one result line: `size = <8 wide>   Mflops = <12 wide, 3 decimals>`
pub fn format_line(size: usize, mflops: f64) -> String {
    format!("size = {size:8}   Mflops = {mflops:12.3}")
}

/// `%+.12E`: signed mantissa, signed exponent of at least two digits
fn sci(value: f64) -> String {
    let formatted = format!("{value:+.12E}");
    match formatted.split_once('E') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => format!("{mantissa}E{exp:+03}"),
            Err(_) => formatted,
        },
        None => formatted,
    }
}

/// What was measured in one round
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Zero-based round number
    pub index: usize,
    /// Transform length
    pub size: usize,
    /// Number of timed FFT calls
    pub repeats: usize,
    /// Total wall-clock time of all calls
    pub elapsed: Duration,
    /// `elapsed / repeats`, in seconds
    pub seconds_per_call: f64,
    /// Throughput estimate
    pub mflops: f64,
}

/// Everything a run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Throughput per round, indexed `rounds - 1 - q`
    ///
    /// With halving sizes this puts the smallest size first. Slots of rounds
    /// that never ran stay at `0.0`.
    pub mflops: Vec<f64>,
    /// Per-round records in execution order
    pub measurements: Vec<Measurement>,
}

impl Report {
    pub(crate) fn with_rounds(rounds: usize) -> Self {
        Self {
            mflops: vec![0.0; rounds],
            measurements: Vec::with_capacity(rounds),
        }
    }

    pub(crate) fn record(&mut self, measurement: Measurement) {
        let slot = self.mflops.len() - 1 - measurement.index;
        self.mflops[slot] = measurement.mflops;
        self.measurements.push(measurement);
    }

    /// Transform sizes of the executed rounds, in execution order
    pub fn sizes(&self) -> Vec<usize> {
        self.measurements.iter().map(|m| m.size).collect()
    }

    /// Repeat counts of the executed rounds, in execution order
    pub fn repeats(&self) -> Vec<usize> {
        self.measurements.iter().map(|m| m.repeats).collect()
    }

    /// Write the results table to `out`: one `size<TAB>mflops` line per
    /// executed round, smallest size first, both columns as C's `%+.12E`.
    pub fn write_table_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        let mut rows: Vec<&Measurement> = self.measurements.iter().collect();
        rows.sort_by_key(|m| m.size);
        for m in rows {
            writeln!(out, "{}\t{}", sci(m.size as f64), sci(m.mflops))?;
        }
        out.flush()
    }

    /// Write the results table to a file, creating parent directories as needed.
    pub fn write_table<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        self.write_table_to(BufWriter::new(file))?;
        tracing::info!(path = %path.display(), rows = self.measurements.len(), "wrote results table");
        Ok(())
    }
}
