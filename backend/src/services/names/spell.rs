//! Edit-distance spell checking against a corpus of first names.
//!
//! The checker loads `./data/names_corpus.txt` (one name per line, repeats
//! raising the name's frequency) and falls back to a small built-in list when
//! the file is absent. Suggestion generation is CPU-bound over the whole
//! corpus, so callers run it via `tokio::task::spawn_blocking`; the candidate
//! scan itself fans out with rayon.

use rayon::prelude::*;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Fallback vocabulary when no corpus file is shipped.
const DEFAULT_NAMES: [&str; 6] = ["john", "mary", "robert", "jennifer", "michael", "linda"];

/// Maximum edit distance at which a corpus name counts as a candidate.
const MAX_EDIT_DISTANCE: usize = 2;

/// Candidates kept per name part, best frequency first.
const CANDIDATES_PER_PART: usize = 3;

/// Suggestions returned per request.
const MAX_SUGGESTIONS: usize = 5;

pub struct NameSpellChecker {
    word_frequency: HashMap<String, u32>,
}

impl NameSpellChecker {
    /// Loads the corpus from `path`, or the built-in list when unreadable.
    pub fn load(path: &Path) -> NameSpellChecker {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let checker = NameSpellChecker::from_words(
                    contents.lines().map(|l| l.trim()).filter(|l| !l.is_empty()),
                );
                log::info!(
                    "Loaded {} distinct names from {}",
                    checker.word_frequency.len(),
                    path.display()
                );
                checker
            }
            Err(_) => {
                log::warn!(
                    "Names corpus not found at {}; using built-in name list",
                    path.display()
                );
                NameSpellChecker::from_words(DEFAULT_NAMES)
            }
        }
    }

    pub fn from_words<I, S>(words: I) -> NameSpellChecker
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut word_frequency = HashMap::new();
        for word in words {
            let word = word.as_ref().to_lowercase();
            if !word.is_empty() {
                *word_frequency.entry(word).or_insert(0) += 1;
            }
        }
        NameSpellChecker { word_frequency }
    }

    /// Levenshtein distance over characters.
    pub fn edit_distance(a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        if a.is_empty() {
            return b.len();
        }

        let mut previous: Vec<usize> = (0..=b.len()).collect();
        for (i, ca) in a.iter().enumerate() {
            let mut current = vec![i + 1];
            for (j, cb) in b.iter().enumerate() {
                let insertions = previous[j + 1] + 1;
                let deletions = current[j] + 1;
                let substitutions = previous[j] + usize::from(ca != cb);
                current.push(insertions.min(deletions).min(substitutions));
            }
            previous = current;
        }
        previous[b.len()]
    }

    /// Corpus names within [`MAX_EDIT_DISTANCE`] of `word`, ranked by
    /// frequency (ties alphabetically). A word already in the corpus is its
    /// own single candidate.
    fn candidates(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();
        if self.word_frequency.contains_key(&word) {
            return vec![word];
        }

        let mut near: Vec<(&String, u32)> = self
            .word_frequency
            .par_iter()
            .filter(|(known, _)| Self::edit_distance(&word, known) <= MAX_EDIT_DISTANCE)
            .map(|(known, frequency)| (known, *frequency))
            .collect();
        near.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        near.truncate(CANDIDATES_PER_PART);
        near.into_iter().map(|(known, _)| known.clone()).collect()
    }

    /// Suggestions for a full name: each part corrected against the corpus,
    /// recombined and title-cased; a multi-part name with no corrections
    /// still yields its title-cased form.
    pub fn suggestions_for(&self, name: &str) -> Vec<String> {
        if !is_plausible_name(name) {
            return Vec::new();
        }

        let normalized = normalize_name(name);
        let parts: Vec<&str> = normalized.split_whitespace().collect();
        if parts.is_empty() {
            return Vec::new();
        }

        let mut corrected = Vec::with_capacity(parts.len());
        let mut changed = false;
        for part in &parts {
            match self.candidates(part).into_iter().next() {
                Some(best) => {
                    changed |= best != *part;
                    corrected.push(best);
                }
                None => corrected.push((*part).to_string()),
            }
        }

        let mut suggestions = Vec::new();
        if changed {
            suggestions.push(title_case(&corrected.join(" ")));
        }
        if suggestions.is_empty() && parts.len() > 1 {
            suggestions.push(title_case(&normalized));
        }

        suggestions.dedup();
        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}

/// Strips everything but letters and whitespace, lowercases and trims.
pub fn normalize_name(name: &str) -> String {
    let letters_only = Regex::new(r"[^a-zA-Z\s]").unwrap();
    letters_only
        .replace_all(name, "")
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Basic naming conventions: at least two characters and no digits.
pub fn is_plausible_name(name: &str) -> bool {
    name.trim().len() >= 2 && !name.chars().any(|c| c.is_ascii_digit())
}

fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> NameSpellChecker {
        NameSpellChecker::from_words(DEFAULT_NAMES)
    }

    #[test]
    fn edit_distance_counts_single_edits() {
        assert_eq!(NameSpellChecker::edit_distance("john", "john"), 0);
        assert_eq!(NameSpellChecker::edit_distance("jhon", "john"), 2);
        assert_eq!(NameSpellChecker::edit_distance("jon", "john"), 1);
        assert_eq!(NameSpellChecker::edit_distance("", "mary"), 4);
    }

    #[test]
    fn close_typos_are_corrected() {
        let suggestions = checker().suggestions_for("Jhon Doe");
        assert_eq!(suggestions, vec!["John Doe".to_string()]);
    }

    #[test]
    fn known_multi_part_name_yields_title_cased_form() {
        let suggestions = checker().suggestions_for("mary linda");
        assert_eq!(suggestions, vec!["Mary Linda".to_string()]);
    }

    #[test]
    fn implausible_names_yield_nothing() {
        assert!(checker().suggestions_for("J").is_empty());
        assert!(checker().suggestions_for("R2D2").is_empty());
    }

    #[test]
    fn normalization_strips_noise() {
        assert_eq!(normalize_name("  J@ne   D'oe 3 "), "jne doe");
        assert_eq!(normalize_name("John Doe"), "john doe");
    }

    #[test]
    fn distant_words_are_not_candidates() {
        // Nothing in the default corpus is within distance 2 of this.
        let suggestions = checker().suggestions_for("Xqzlurft");
        assert!(suggestions.is_empty());
    }
}
