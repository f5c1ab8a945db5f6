//! Term sources
//!
//! Reads candidate terms from dictionary files (one per line, `-` for
//! stdin) and provides the embedded base lists that can be mixed into
//! any generated list.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Basic terms from the self-baked wordlist kit.
const KIT_TERMS: &str = include_str!("../assets/dicewarekit.txt");

/// The 416-term supplementary list.
const TERMS_416: &str = include_str!("../assets/diceware416.txt");

/// Read candidate terms from `paths`, one term per line.
///
/// Lines are trimmed; empty lines are skipped. The path `-` reads from
/// stdin instead of a file.
pub fn read_terms(paths: &[PathBuf]) -> io::Result<Vec<String>> {
    let mut terms = Vec::new();
    for path in paths {
        if path == Path::new("-") {
            collect_lines(io::stdin().lock(), &mut terms)?;
        } else {
            let file = File::open(path).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
            })?;
            collect_lines(BufReader::new(file), &mut terms)?;
        }
    }
    Ok(terms)
}

fn collect_lines<R: BufRead>(reader: R, out: &mut Vec<String>) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        let term = line.trim();
        if !term.is_empty() {
            out.push(term.to_string());
        }
    }
    Ok(())
}

/// Terms from the embedded base lists.
pub fn base_terms(use_kit: bool, use_416: bool) -> impl Iterator<Item = &'static str> {
    let kit = use_kit.then_some(KIT_TERMS).unwrap_or("");
    let extra = use_416.then_some(TERMS_416).unwrap_or("");
    kit.lines()
        .chain(extra.lines())
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Collect terms from a readable stream, for stdin-shaped inputs.
pub fn read_lines_from<R: Read>(reader: R) -> io::Result<Vec<String>> {
    let mut terms = Vec::new();
    collect_lines(BufReader::new(reader), &mut terms)?;
    Ok(terms)
}
