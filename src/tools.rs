//! Free-function transforms over raw sequence strings, plus the batch
//! dispatch entry point. Unlike the typed [`crate::seq::Sequence`] API, these
//! tolerate lowercase input and pass unrecognized characters through
//! unchanged, which suits quick interactive use on dirty data.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    #[error("unknown procedure '{0}'")]
    UnknownOperation(String),

    #[error("invalid sequence: an input mixes T and U bases")]
    InvalidSequence,
}

/// The result of a [`run_tool`] call: a bare value for a single input, an
/// ordered list otherwise.
#[derive(Debug, PartialEq, Eq)]
pub enum ToolOutput {
    Single(String),
    Many(Vec<String>),
}

/// Returns false if any single input string contains both a T/t and a U/u,
/// i.e. mixes DNA- and RNA-specific bases. A contamination guard, not a full
/// alphabet check.
pub fn valid_sequence<S: AsRef<str>>(seqs: &[S]) -> bool {
    seqs.iter().all(|s| {
        let s = s.as_ref();
        let has_t = s.contains(['T', 't']);
        let has_u = s.contains(['U', 'u']);
        !(has_t && has_u)
    })
}

pub fn transcribe(seq: &str) -> String {
    seq.replace('T', "U").replace('t', "u")
}

pub fn reverse(seq: &str) -> String {
    seq.chars().rev().collect()
}

fn complement_base(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        'a' => 't',
        't' => 'a',
        'g' => 'c',
        'c' => 'g',
        'U' => 'A',
        'u' => 'a',
        other => other,
    }
}

pub fn complement(seq: &str) -> String {
    seq.chars().map(complement_base).collect()
}

pub fn reverse_complement(seq: &str) -> String {
    reverse(&complement(seq))
}

/// Validates all inputs, resolves the procedure name and applies it to each
/// sequence independently. Bad requests come back as classified errors, never
/// a panic.
pub fn run_tool<S: AsRef<str>>(seqs: &[S], procedure: &str) -> Result<ToolOutput, ToolError> {
    if !valid_sequence(seqs) {
        return Err(ToolError::InvalidSequence);
    }

    let op: fn(&str) -> String = match procedure {
        "transcribe" => transcribe,
        "reverse" => reverse,
        "complement" => complement,
        "reverse_complement" => reverse_complement,
        other => return Err(ToolError::UnknownOperation(other.to_string())),
    };

    let mut results: Vec<String> = seqs.iter().map(|s| op(s.as_ref())).collect();

    Ok(if results.len() == 1 {
        ToolOutput::Single(results.remove(0))
    } else {
        ToolOutput::Many(results)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_alphabet_detection() {
        assert!(!valid_sequence(&["ATU"]));
        assert!(valid_sequence(&["ATG"]));
        assert!(valid_sequence(&["AUG"]));
        // mixing across separate inputs is fine; only a single string may
        // not contain both
        assert!(valid_sequence(&["ATG", "AUG"]));
        assert!(!valid_sequence(&["ATG", "aug", "uTa"]));
    }

    #[test]
    fn single_input_gives_single_output() {
        assert_eq!(
            run_tool(&["ATG"], "transcribe"),
            Ok(ToolOutput::Single("AUG".to_string()))
        );
    }

    #[test]
    fn many_inputs_give_ordered_list() {
        assert_eq!(
            run_tool(&["ATG", "GGC"], "reverse"),
            Ok(ToolOutput::Many(vec!["GTA".to_string(), "CGG".to_string()]))
        );
    }

    #[test]
    fn mixed_input_is_a_classified_error() {
        // "UTG" alone contains both T and U
        assert_eq!(
            run_tool(&["ATG", "UTG"], "reverse"),
            Err(ToolError::InvalidSequence)
        );
    }

    #[test]
    fn unknown_procedure_is_a_classified_error() {
        assert_eq!(
            run_tool(&["ATG"], "translate"),
            Err(ToolError::UnknownOperation("translate".to_string()))
        );
    }

    #[test]
    fn lowercase_complement_is_reversible() {
        assert_eq!(complement("AaTtCcGg"), "TtAaGgCc");
        assert_eq!(complement(&complement("aTcG")), "aTcG");
    }

    #[test]
    fn unrecognized_characters_pass_through() {
        assert_eq!(complement("ANT-G"), "TNA-C");
    }

    #[test]
    fn uracil_complements_to_adenine() {
        assert_eq!(complement("AUG"), "TAC");
        assert_eq!(complement("aug"), "tac");
    }

    #[test]
    fn transcription_touches_only_thymine() {
        assert_eq!(transcribe("ATGt"), "AUGu");
        assert_eq!(transcribe("GGCC"), "GGCC");
    }

    #[test]
    fn reverse_complement_composes() {
        assert_eq!(reverse_complement("ATCG"), "CGAT");
    }
}
