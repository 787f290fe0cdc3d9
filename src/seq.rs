use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeqError {
    #[error("character '{found}' is not in the {kind} alphabet")]
    InvalidAlphabet { kind: Kind, found: char },

    #[error("{op} is not defined for {kind} sequences")]
    UnsupportedOperation { op: &'static str, kind: Kind },
}

/// The kind of a biological sequence. Each kind carries its own alphabet, and
/// the nucleic-acid kinds additionally carry a Watson-Crick pairing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Dna,
    Rna,
    AminoAcid,
}

impl Kind {
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            Kind::Dna => b"ATCG",
            Kind::Rna => b"AUCG",
            Kind::AminoAcid => b"ACDEFGHIKLMNPQRSTVWY",
        }
    }

    /// The complement pairing table, where defined. Amino-acid sequences have
    /// no complement.
    fn complement_pairs(self) -> Option<&'static [(u8, u8)]> {
        match self {
            Kind::Dna => Some(&[(b'A', b'T'), (b'C', b'G')]),
            Kind::Rna => Some(&[(b'A', b'U'), (b'C', b'G')]),
            Kind::AminoAcid => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Dna => "DNA",
            Kind::Rna => "RNA",
            Kind::AminoAcid => "amino acid",
        };
        f.write_str(name)
    }
}

fn pair_of(pairs: &[(u8, u8)], base: u8) -> u8 {
    for &(x, y) in pairs {
        if base == x {
            return y;
        }
        if base == y {
            return x;
        }
    }
    base
}

/// A validated, immutable sequence. Every character is guaranteed to belong
/// to the alphabet of its kind; transforms return new values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    kind: Kind,
    text: String,
}

impl Sequence {
    pub fn new(kind: Kind, text: impl Into<String>) -> Result<Self, SeqError> {
        let text = text.into();
        if let Some(found) = text
            .chars()
            .find(|c| !c.is_ascii() || !kind.alphabet().contains(&(*c as u8)))
        {
            return Err(SeqError::InvalidAlphabet { kind, found });
        }
        Ok(Self { kind, text })
    }

    pub fn dna(text: impl Into<String>) -> Result<Self, SeqError> {
        Self::new(Kind::Dna, text)
    }

    pub fn rna(text: impl Into<String>) -> Result<Self, SeqError> {
        Self::new(Kind::Rna, text)
    }

    pub fn amino_acid(text: impl Into<String>) -> Result<Self, SeqError> {
        Self::new(Kind::AminoAcid, text)
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Reverses the order of the sequence. Total for every kind.
    pub fn reverse(&self) -> Self {
        Self {
            kind: self.kind,
            text: self.text.chars().rev().collect(),
        }
    }

    /// Substitutes every base with its Watson-Crick partner. Fails for kinds
    /// without a pairing table.
    pub fn complement(&self) -> Result<Self, SeqError> {
        let pairs = self
            .kind
            .complement_pairs()
            .ok_or(SeqError::UnsupportedOperation {
                op: "complement",
                kind: self.kind,
            })?;

        let text = self
            .text
            .bytes()
            .map(|b| char::from(pair_of(pairs, b)))
            .collect();

        Ok(Self {
            kind: self.kind,
            text,
        })
    }

    pub fn reverse_complement(&self) -> Result<Self, SeqError> {
        Ok(self.complement()?.reverse())
    }

    /// Transcribes DNA into RNA by replacing T with U. Defined for DNA only.
    pub fn transcribe(&self) -> Result<Self, SeqError> {
        match self.kind {
            Kind::Dna => Ok(Self {
                kind: Kind::Rna,
                text: self.text.replace('T', "U"),
            }),
            _ => Err(SeqError::UnsupportedOperation {
                op: "transcribe",
                kind: self.kind,
            }),
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
