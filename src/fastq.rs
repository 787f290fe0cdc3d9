//! A tolerant, streaming FASTQ reader and the record type it yields.
//!
//! The reader walks the input one line at a time through the usual four-line
//! cycle (header, sequence, separator, quality). Blocks that do not frame
//! correctly are dropped and counted, and the stream resynchronizes at the
//! next header line, so a single dirty block never aborts a whole run. Only
//! genuine I/O errors are surfaced to the caller.

use std::io::{self, BufRead, Write};

use crate::metrics;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    /// Identifier without the leading `@`.
    pub id: String,
    pub seq: String,
    pub qual: String,
}

impl FastqRecord {
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn gc_percent(&self) -> f64 {
        metrics::gc_fraction(&self.seq)
    }

    pub fn phred_quality_avg(&self) -> f64 {
        metrics::mean_quality(&self.qual)
    }

    /// Writes the record as a four-line FASTQ block. The separator line is
    /// recreated as a bare `+`.
    pub fn write(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "@{}\n{}\n+\n{}", self.id, self.seq, self.qual)
    }
}

pub struct FastqStream<R: BufRead> {
    reader: R,
    /// A line read past the end of a malformed block, to be revisited as the
    /// next header candidate.
    pending: Option<String>,
    skipped: usize,
}

impl<R: BufRead> FastqStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
            skipped: 0,
        }
    }

    /// Number of malformed blocks dropped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        if let Some(line) = self.pending.take() {
            return Ok(Some(line));
        }
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }
}

impl<R: BufRead> Iterator for FastqStream<R> {
    type Item = io::Result<FastqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // AWAIT_HEADER: scan forward to the next '@' line. A run of
            // stray lines counts as one dropped block.
            let mut saw_junk = false;
            let header = loop {
                match self.read_line() {
                    Ok(Some(line)) if line.starts_with('@') => break line,
                    Ok(Some(_)) => {
                        if !saw_junk {
                            saw_junk = true;
                            self.skipped += 1;
                        }
                    }
                    Ok(None) => return None,
                    Err(e) => return Some(Err(e)),
                }
            };

            // AWAIT_SEQUENCE
            let seq = match self.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.skipped += 1;
                    return None;
                }
                Err(e) => return Some(Err(e)),
            };

            // AWAIT_SEPARATOR
            let sep = match self.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.skipped += 1;
                    return None;
                }
                Err(e) => return Some(Err(e)),
            };
            if !sep.starts_with('+') {
                self.skipped += 1;
                if sep.starts_with('@') {
                    self.pending = Some(sep);
                }
                continue;
            }

            // AWAIT_QUALITY
            let qual = match self.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.skipped += 1;
                    return None;
                }
                Err(e) => return Some(Err(e)),
            };
            if qual.len() != seq.len() {
                self.skipped += 1;
                if qual.starts_with('@') {
                    self.pending = Some(qual);
                }
                continue;
            }

            return Some(Ok(FastqRecord {
                id: header[1..].to_string(),
                seq,
                qual,
            }));
        }
    }
}
