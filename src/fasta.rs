//! FASTA reshaping: join multi-line sequences onto single lines.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use needletail::parse_fastx_file;

/// Rewrites a FASTA file so that each record's sequence occupies exactly one
/// line. Headers are preserved verbatim.
pub fn convert_multiline_to_oneline(input: &Path, output: &Path) -> Result<()> {
    let mut reader = parse_fastx_file(input)
        .with_context(|| format!("unable to open FASTA file {}", input.display()))?;

    let out = File::create(output)
        .with_context(|| format!("unable to create output file {}", output.display()))?;
    let mut writer = BufWriter::new(out);

    while let Some(record) = reader.next() {
        let record = record.context("invalid FASTA record")?;
        writer.write_all(b">")?;
        writer.write_all(record.id())?;
        writer.write_all(b"\n")?;
        // seq() strips the internal newlines of a multi-line record
        writer.write_all(&record.seq())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}
