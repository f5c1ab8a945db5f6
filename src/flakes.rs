//! Wordlist quality checks
//!
//! Scans a finished list for defects ("flakes"): entries that collide
//! once lower-cased, and terms carrying non-ASCII or non-printable
//! characters. Pure analysis over the list lines; nothing is modified.

use ahash::RandomState;
use hashbrown::HashMap;

/// A single defect found in a wordlist.
///
/// Line numbers are 1-based, matching what an editor shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Two entries are identical after lower-casing.
    CaseCollision {
        line_a: usize,
        line_b: usize,
        term: String,
    },
    /// A term contains a character outside the ASCII range.
    NonAsciiChar { line: usize, term: String, ch: char },
    /// A term contains an ASCII control character.
    NonPrintableChar { line: usize, term: String, ch: char },
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Finding::CaseCollision {
                line_a,
                line_b,
                term,
            } => write!(
                f,
                "line {line_b}: {term:?} duplicates line {line_a} up to case"
            ),
            Finding::NonAsciiChar { line, term, ch } => {
                write!(f, "line {line}: {term:?} contains non-ASCII char {ch:?}")
            }
            Finding::NonPrintableChar { line, term, ch } => {
                write!(f, "line {line}: {term:?} contains non-printable char {ch:?}")
            }
        }
    }
}

/// The list entry on a line, which may carry a dice-numeral prefix.
///
/// Numbered lists read `"<numeral> <term>"`; the term is the last
/// whitespace-separated field either way.
fn term_of(line: &str) -> Option<&str> {
    line.split_whitespace().last()
}

/// Scan list lines for flakes.
///
/// Character findings are reported once per term (first offending
/// character); case collisions once per extra occurrence, pointing back
/// at the first.
pub fn check<'a, I>(lines: I) -> Vec<Finding>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut findings = Vec::new();
    let mut first_seen: HashMap<String, usize, RandomState> = HashMap::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let lineno = idx + 1;
        let term = match term_of(line) {
            Some(t) => t,
            None => continue,
        };

        if let Some(ch) = term.chars().find(|c| !c.is_ascii()) {
            findings.push(Finding::NonAsciiChar {
                line: lineno,
                term: term.to_string(),
                ch,
            });
        } else if let Some(ch) = term.chars().find(|c| c.is_ascii_control()) {
            findings.push(Finding::NonPrintableChar {
                line: lineno,
                term: term.to_string(),
                ch,
            });
        }

        match first_seen.entry(term.to_lowercase()) {
            hashbrown::hash_map::Entry::Occupied(entry) => {
                findings.push(Finding::CaseCollision {
                    line_a: *entry.get(),
                    line_b: lineno,
                    term: term.to_string(),
                });
            }
            hashbrown::hash_map::Entry::Vacant(entry) => {
                entry.insert(lineno);
            }
        }
    }
    findings
}
