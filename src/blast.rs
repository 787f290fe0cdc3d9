//! Scraper for plain-text BLAST reports.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;

const ALIGNMENT_HEADER: &str = "Sequences producing significant alignments:";

/// Collects the first hit description under every
/// "Sequences producing significant alignments:" section of a BLAST text
/// report and writes them out one per line, sorted case-insensitively.
pub fn extract_significant_hits(input: &Path, output: &Path) -> Result<()> {
    let file = File::open(input)
        .with_context(|| format!("unable to open BLAST report {}", input.display()))?;
    let reader = BufReader::new(file);

    let mut proteins = Vec::new();
    let mut lines = reader.lines();
    while let Some(line) = lines.next() {
        let line = line?;
        if !line.starts_with(ALIGNMENT_HEADER) {
            continue;
        }
        // the header is followed by a blank line and a column-caption line;
        // the first description row comes after those
        if let Some(description) = lines.nth(2) {
            let description = description?;
            if let Some(name) = description.split("  ").next() {
                if !name.is_empty() {
                    proteins.push(name.to_string());
                }
            }
        }
    }

    let out = File::create(output)
        .with_context(|| format!("unable to create output file {}", output.display()))?;
    let mut writer = BufWriter::new(out);
    for protein in proteins.into_iter().sorted_by_key(|p| p.to_lowercase()) {
        writeln!(writer, "{protein}")?;
    }
    writer.flush()?;

    Ok(())
}
