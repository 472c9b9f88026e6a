//! Recognition of spelled-out cardinal numbers in a fingerprint stream.
//!
//! The parser scans a query's fingerprints from the front and reports
//! every prefix that forms a complete number phrase, so "one hundred
//! twenty" yields matches for 1, 100 and 120. The tokenizer turns each
//! match into a number edge alongside the alias edges at that position.

use ahash::{AHashMap, AHashSet};

use crate::analysis::term_model::{Hash, TermModel};

/// A recognized number phrase: its value and how many fingerprints it
/// consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberMatch {
    pub value: i64,
    pub length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberWord {
    /// "zero"; stands alone.
    Zero,
    /// 1–9.
    Unit(i64),
    /// 10–19.
    Teen(i64),
    /// 20, 30, … 90.
    Tens(i64),
    /// Multiplies the current section by 100.
    Hundred,
    /// Completes a section: thousand, million.
    Scale(i64),
}

const UNIT_WORDS: [(&str, i64); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

const TEEN_WORDS: [(&str, i64); 10] = [
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

const TENS_WORDS: [(&str, i64); 8] = [
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const SCALE_WORDS: [(&str, i64); 2] = [("thousand", 1_000), ("million", 1_000_000)];

/// Scanner for cardinal number phrases over term fingerprints.
pub struct NumberParser {
    words: AHashMap<Hash, NumberWord>,
    surface: Vec<&'static str>,
    own_hashes: AHashSet<Hash>,
}

impl std::fmt::Debug for NumberParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumberParser")
            .field("vocabulary", &self.surface.len())
            .finish()
    }
}

impl NumberParser {
    /// Build the parser's vocabulary through the term model, so its
    /// fingerprints line up with stemmed query terms.
    pub fn new(model: &TermModel) -> Self {
        let mut words = AHashMap::new();
        let mut surface = Vec::new();

        let mut register = |term: &'static str, word: NumberWord| {
            words.insert(model.stem_and_hash(term), word);
            surface.push(term);
        };

        register("zero", NumberWord::Zero);
        for (term, value) in UNIT_WORDS {
            register(term, NumberWord::Unit(value));
        }
        for (term, value) in TEEN_WORDS {
            register(term, NumberWord::Teen(value));
        }
        for (term, value) in TENS_WORDS {
            register(term, NumberWord::Tens(value));
        }
        register("hundred", NumberWord::Hundred);
        for (term, value) in SCALE_WORDS {
            register(term, NumberWord::Scale(value));
        }

        let own_hashes = words.keys().copied().collect();
        NumberParser {
            words,
            surface,
            own_hashes,
        }
    }

    /// Scan a prefix of `hashes` for number phrases, appending a
    /// [`NumberMatch`] for every prefix that is itself a complete
    /// number. Scanning stops at the first fingerprint that cannot
    /// extend the phrase; nothing beyond the longest reported prefix is
    /// consumed.
    pub fn parse(&self, hashes: &[Hash], output: &mut Vec<NumberMatch>) {
        use NumberWord::*;

        let mut total: i64 = 0;
        let mut section: i64 = 0;
        let mut last_scale = i64::MAX;
        let mut prev: Option<NumberWord> = None;

        for (i, hash) in hashes.iter().enumerate() {
            let Some(&word) = self.words.get(hash) else {
                break;
            };

            let valid = match word {
                Zero => prev.is_none(),
                Unit(_) => matches!(prev, None | Some(Tens(_)) | Some(Hundred) | Some(Scale(_))),
                Teen(_) | Tens(_) => matches!(prev, None | Some(Hundred) | Some(Scale(_))),
                Hundred => {
                    section > 0 && section < 100 && matches!(prev, Some(Unit(_)) | Some(Teen(_)))
                }
                Scale(scale) => section > 0 && scale < last_scale,
            };
            if !valid {
                break;
            }

            match word {
                Zero => {}
                Unit(value) | Teen(value) | Tens(value) => section += value,
                Hundred => section *= 100,
                Scale(scale) => {
                    total += section * scale;
                    section = 0;
                    last_scale = scale;
                }
            }

            output.push(NumberMatch {
                value: total + section,
                length: i + 1,
            });
            prev = Some(word);
        }
    }

    /// Fingerprints of every surface term the parser might consume.
    /// The lexicon marks these as downstream for every domain.
    pub fn own_hashed_terms(&self) -> &AHashSet<Hash> {
        &self.own_hashes
    }

    /// Add the parser's surface vocabulary to `set`.
    pub fn add_terms_to_set(&self, set: &mut AHashSet<String>) {
        for term in &self.surface {
            set.insert((*term).to_string());
        }
    }
}
