//! Pipeline orchestration
//!
//! Wires the stages together: normalize and filter raw candidates,
//! deduplicate, select to size, optionally strip prefix collisions, and
//! render the finished lines. Every stage consumes its input and hands a
//! new collection to the next; nothing here touches the filesystem.

use crate::dedup::UniquePool;
use crate::error::WordlistError;
use crate::normalize::Normalizer;
use crate::numbering::{dice_numeral, required_rolls};
use crate::prefix::{reduce_to_target, strip_prefixes, PrefixMode};
use crate::select::select;
use hashbrown::HashSet;
use rand::Rng;

/// Generation parameters, assembled from the command line.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Target list size; `None` keeps every surviving term.
    pub length: Option<usize>,
    /// Prefix dice numerals to each line.
    pub numbered: bool,
    /// Sides of the dice addressed by numbered output.
    pub sides: usize,
    /// Permitted characters; `None` accepts anything printable.
    pub allowed_chars: Option<HashSet<char>>,
    /// Keep original casing instead of lower-casing.
    pub allow_uppercase: bool,
    /// Prefix-collision handling.
    pub prefix: PrefixMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: None,
            numbered: false,
            sides: 6,
            allowed_chars: None,
            allow_uppercase: false,
            prefix: PrefixMode::None,
        }
    }
}

impl GeneratorConfig {
    pub fn for_length(length: usize) -> Self {
        Self {
            length: Some(length),
            ..Self::default()
        }
    }
}

/// Run the full pipeline over raw candidate terms.
///
/// Returns the finished output lines; the caller decides where they go.
/// Fails before producing anything when the pool cannot satisfy the
/// configuration, so no partial list can ever be written.
pub fn generate<I, S, R>(
    config: &GeneratorConfig,
    raw_terms: I,
    rng: &mut R,
) -> Result<Vec<String>, WordlistError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng,
{
    let normalizer = Normalizer::new(config.allowed_chars.clone(), config.allow_uppercase);

    let mut pool = UniquePool::new();
    let mut rejected = 0usize;
    for raw in raw_terms {
        match normalizer.accept(raw.as_ref()) {
            Ok(term) => {
                pool.insert(term);
            }
            Err(reason) => {
                rejected += 1;
                log::debug!("rejected {:?}: {}", raw.as_ref(), reason);
            }
        }
    }
    let stats = pool.stats();
    log::info!(
        "candidate pool: {} unique terms ({} duplicates, {} rejected)",
        stats.unique,
        stats.duplicates,
        rejected
    );

    let terms = pool.into_terms();
    let list = match (config.prefix, config.length) {
        (PrefixMode::None, target) => select(&terms, target, rng)?,
        (mode, Some(target)) => reduce_to_target(&terms, target, mode, rng)?,
        (mode, None) => {
            let mut reduced = strip_prefixes(&terms, mode);
            crate::select::sort_by_width(&mut reduced);
            reduced
        }
    };
    log::info!("selected {} terms", list.len());

    render(&list, config.numbered, config.sides)
}

/// Render the final list as output lines.
///
/// Numbered mode validates the size/sides relation up front; an invalid
/// combination aborts before a single line exists.
fn render(list: &[String], numbered: bool, sides: usize) -> Result<Vec<String>, WordlistError> {
    if !numbered {
        return Ok(list.to_vec());
    }
    let rolls = required_rolls(list.len(), sides)?;
    Ok(list
        .iter()
        .enumerate()
        .map(|(idx, term)| format!("{} {}", dice_numeral(idx, rolls, sides), term))
        .collect())
}
