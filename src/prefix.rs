//! Prefix-free reduction
//!
//! Some decoding schemes concatenate list entries without delimiters, so
//! no entry may be a literal prefix of another. This stage strips
//! prefix-colliding terms from a selection, re-running the selector with
//! a larger request when trimming leaves the list short of its target.

use crate::error::WordlistError;
use crate::select::{select, sort_by_width};
use rand::Rng;

/// How prefix collisions are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixMode {
    /// Keep prefix-colliding terms.
    #[default]
    None,
    /// Keep the shorter term (the prefix), drop its extensions.
    Short,
    /// Keep the longer terms, drop any term that prefixes another.
    Long,
}

/// Whether no entry is a strict prefix of any other entry.
pub fn is_prefix_free(terms: &[String]) -> bool {
    let mut sorted: Vec<&str> = terms.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted
        .windows(2)
        .all(|w| w[0].is_empty() || !w[1].starts_with(w[0]))
}

/// Strip prefix collisions from `terms`.
///
/// Works on an alphabetically sorted copy, where every extension of a
/// term directly follows it. `Short` keeps a term unless the last kept
/// term is its prefix; `Long` keeps a term unless it is a strict prefix
/// of its successor. The result is alphabetically sorted.
pub fn strip_prefixes(terms: &[String], mode: PrefixMode) -> Vec<String> {
    let mut sorted: Vec<String> = terms.to_vec();
    sorted.sort_unstable();
    match mode {
        PrefixMode::None => sorted,
        PrefixMode::Short => {
            let mut kept: Vec<String> = Vec::with_capacity(sorted.len());
            for term in sorted {
                let dominated = kept
                    .last()
                    .is_some_and(|prev| term.starts_with(prev.as_str()) && term != *prev);
                if !dominated {
                    kept.push(term);
                }
            }
            kept
        }
        PrefixMode::Long => {
            let mut kept: Vec<String> = Vec::with_capacity(sorted.len());
            for i in 0..sorted.len() {
                let is_prefix_of_next = sorted
                    .get(i + 1)
                    .map(|next| next.starts_with(sorted[i].as_str()) && *next != sorted[i])
                    .unwrap_or(false);
                if !is_prefix_of_next {
                    kept.push(sorted[i].clone());
                }
            }
            kept
        }
    }
}

/// Produce a prefix-free list of exactly `target` terms.
///
/// The selector is asked for progressively larger selections until the
/// stripped result reaches `target`; the surplus is trimmed from the
/// long end, preserving the (length, alphabetical) ordering contract.
/// Fails with `InsufficientTerms` once even the full pool reduces below
/// `target`.
pub fn reduce_to_target<R: Rng>(
    pool: &[String],
    target: usize,
    mode: PrefixMode,
    rng: &mut R,
) -> Result<Vec<String>, WordlistError> {
    let mut request = target;
    loop {
        if request >= pool.len() {
            // last resort: strip the whole pool
            let mut reduced = strip_prefixes(pool, mode);
            if reduced.len() < target {
                return Err(WordlistError::InsufficientTerms {
                    required: target,
                    available: reduced.len(),
                });
            }
            sort_by_width(&mut reduced);
            reduced.truncate(target);
            return Ok(reduced);
        }
        let picked = select(pool, Some(request), rng)?;
        let mut reduced = strip_prefixes(&picked, mode);
        if reduced.len() >= target {
            sort_by_width(&mut reduced);
            reduced.truncate(target);
            return Ok(reduced);
        }
        log::debug!(
            "prefix trimming left {} of {} requested terms, expanding selection",
            reduced.len(),
            request
        );
        request += target - reduced.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_is_prefix_free() {
        assert!(is_prefix_free(&pool(&["a", "b", "c"])));
        assert!(!is_prefix_free(&pool(&["air", "airborn", "foo"])));
        assert!(is_prefix_free(&pool(&[])));
    }

    #[test]
    fn test_strip_short_keeps_prefixes() {
        let got = strip_prefixes(&pool(&["a", "ab", "abc", "b", "ba"]), PrefixMode::Short);
        assert_eq!(got, pool(&["a", "b"]));
    }

    #[test]
    fn test_strip_long_keeps_extensions() {
        let got = strip_prefixes(&pool(&["a", "ab", "abc", "b", "ba"]), PrefixMode::Long);
        assert_eq!(got, pool(&["abc", "ba"]));
    }

    #[test]
    fn test_strip_none_passes_through() {
        let got = strip_prefixes(&pool(&["b", "a", "ab"]), PrefixMode::None);
        assert_eq!(got, pool(&["a", "ab", "b"]));
    }

    #[test]
    fn test_strip_result_is_prefix_free() {
        let candidates = pool(&["go", "gone", "gong", "top", "topic", "tops", "up"]);
        for mode in [PrefixMode::Short, PrefixMode::Long] {
            assert!(is_prefix_free(&strip_prefixes(&candidates, mode)));
        }
    }

    #[test]
    fn test_reduce_to_target_conflicting_pair() {
        // "a" and "ab" cannot coexist; the result is two non-conflicting terms
        let candidates = pool(&["a", "ab", "abc", "b", "bc"]);
        let got =
            reduce_to_target(&candidates, 2, PrefixMode::Short, &mut StdRng::seed_from_u64(11))
                .unwrap();
        assert_eq!(got.len(), 2);
        assert!(is_prefix_free(&got));
    }

    #[test]
    fn test_reduce_to_target_expands_selection() {
        // first selection of 2 ("a", "ab") strips down to 1, forcing a retry
        let candidates = pool(&["a", "ab", "cd", "ef"]);
        let got =
            reduce_to_target(&candidates, 2, PrefixMode::Short, &mut StdRng::seed_from_u64(5))
                .unwrap();
        assert_eq!(got.len(), 2);
        assert!(is_prefix_free(&got));
        assert!(got.contains(&"a".to_string()));
    }

    #[test]
    fn test_reduce_to_target_exhausted_pool() {
        let candidates = pool(&["a", "ab", "abc"]);
        let err =
            reduce_to_target(&candidates, 2, PrefixMode::Short, &mut StdRng::seed_from_u64(0))
                .unwrap_err();
        assert!(matches!(err, WordlistError::InsufficientTerms { .. }));
    }

    #[test]
    fn test_reduce_is_seed_deterministic() {
        let candidates = pool(&["a", "ab", "ba", "ca", "cb", "cc", "dd", "ee"]);
        let first =
            reduce_to_target(&candidates, 4, PrefixMode::Short, &mut StdRng::seed_from_u64(9))
                .unwrap();
        let second =
            reduce_to_target(&candidates, 4, PrefixMode::Short, &mut StdRng::seed_from_u64(9))
                .unwrap();
        assert_eq!(first, second);
    }
}
