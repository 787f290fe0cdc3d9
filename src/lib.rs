//! Small bioinformatics utilities: typed DNA/RNA/protein sequences with the
//! usual transforms, a streaming FASTQ read filter, and a pair of FASTA/BLAST
//! text helpers.

pub mod blast;
pub mod cli;
pub mod fasta;
pub mod fastq;
pub mod filter;
pub mod metrics;
pub mod seq;
pub mod tools;
