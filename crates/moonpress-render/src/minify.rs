//! Short-name generation for local identifiers.
//!
//! Replaces local variable names (`myVariable` → `a`) with the shortest
//! available name that is not a reserved word and does not start with a
//! digit. Within one pass the same original name always maps to the same
//! short name, so every reference to a binding renders identically.

use rustc_hash::FxHashMap;

use crate::error::Error;
use crate::token::keyword_from_str;

/// Symbols used for generated names, in enumeration order.
const NAME_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_";

/// First counter value handed to a fresh generator. Everything below is a
/// single digit symbol, which can never open a name.
const BASE_INDEX: u64 = 10;

/// Assigns short, keyword-safe replacement names to original identifiers.
///
/// One instance covers exactly one render pass. The assignment table is
/// append-only: entries are never cleared or replaced mid-pass. Sharing an
/// instance across documents would leak one document's renames into another.
#[derive(Debug)]
pub struct NameMinifier {
    /// Next candidate index, advanced on every attempt.
    next_index: u64,
    /// Original name → assigned short name.
    assigned: FxHashMap<String, String>,
}

impl NameMinifier {
    pub fn new() -> Self {
        Self {
            next_index: BASE_INDEX,
            assigned: FxHashMap::default(),
        }
    }

    /// Return the short name for `original`, assigning the next free
    /// candidate on first use.
    pub fn shorten(&mut self, original: &str) -> Result<String, Error> {
        if let Some(name) = self.assigned.get(original) {
            return Ok(name.clone());
        }

        loop {
            let candidate = encode_index(self.next_index);
            // Advance on every attempt so no candidate is ever reconsidered.
            self.next_index = self
                .next_index
                .checked_add(1)
                .ok_or(Error::NamesExhausted)?;

            if candidate.as_bytes()[0].is_ascii_digit() || keyword_from_str(&candidate).is_some() {
                continue;
            }

            self.assigned.insert(original.to_owned(), candidate.clone());
            return Ok(candidate);
        }
    }
}

impl Default for NameMinifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a counter value in the name alphabet: the minimum number of
/// symbols that represents `n` in base 63, most significant symbol first.
fn encode_index(n: u64) -> String {
    let base = NAME_ALPHABET.len() as u64;
    // u64 needs at most 11 base-63 symbols.
    let mut indices = [0usize; 11];
    let mut len = 0;
    let mut rest = n;
    loop {
        indices[len] = (rest % base) as usize;
        len += 1;
        rest /= base;
        if rest == 0 {
            break;
        }
    }

    let mut name = String::with_capacity(len);
    for &idx in indices[..len].iter().rev() {
        name.push(NAME_ALPHABET[idx] as char);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_assignment_is_a() {
        let mut names = NameMinifier::new();
        assert_eq!(names.shorten("someLongName").unwrap(), "a");
    }

    #[test]
    fn test_repeated_lookups_are_stable() {
        let mut names = NameMinifier::new();
        let first = names.shorten("counter").unwrap();
        let other = names.shorten("total").unwrap();
        assert_eq!(names.shorten("counter").unwrap(), first);
        assert_eq!(names.shorten("total").unwrap(), other);
        assert_ne!(first, other);
    }

    #[test]
    fn test_single_symbol_names_run_out_at_53() {
        let mut names = NameMinifier::new();
        let generated: Vec<String> = (0..54)
            .map(|i| names.shorten(&format!("v{i}")).unwrap())
            .collect();
        assert_eq!(generated[0], "a");
        assert_eq!(generated[25], "z");
        assert_eq!(generated[26], "A");
        assert_eq!(generated[51], "Z");
        assert_eq!(generated[52], "_");
        // Two-symbol candidates with a digit in the lead are all rejected,
        // so the 54th name lands on `a0`.
        assert_eq!(generated[53], "a0");
    }

    #[test]
    fn test_reserved_word_candidates_are_skipped() {
        let mut names = NameMinifier::new();
        let generated: Vec<String> = (0..300)
            .map(|i| names.shorten(&format!("v{i}")).unwrap())
            .collect();
        // Candidate 843 spells `do`; the counter advances past it.
        assert_eq!(generated[265], "dn");
        assert_eq!(generated[266], "dp");
        for name in &generated {
            assert!(keyword_from_str(name).is_none(), "generated {name}");
            assert!(!name.as_bytes()[0].is_ascii_digit(), "generated {name}");
        }
    }

    #[test]
    fn test_generated_names_are_unique() {
        let mut names = NameMinifier::new();
        let mut seen = std::collections::HashSet::new();
        for i in 0..500 {
            assert!(seen.insert(names.shorten(&format!("v{i}")).unwrap()));
        }
    }

    #[test]
    fn test_counter_exhaustion_is_fatal() {
        let mut names = NameMinifier {
            next_index: u64::MAX,
            assigned: FxHashMap::default(),
        };
        assert!(matches!(
            names.shorten("anything"),
            Err(Error::NamesExhausted)
        ));
    }

    #[test]
    fn test_encode_index_digits() {
        assert_eq!(encode_index(0), "0");
        assert_eq!(encode_index(10), "a");
        assert_eq!(encode_index(62), "_");
        assert_eq!(encode_index(63), "10");
        assert_eq!(encode_index(630), "a0");
        assert_eq!(encode_index(843), "do");
    }
}
