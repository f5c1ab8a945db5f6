//! # Wordlist Gen
//!
//! Generate diceware-style passphrase wordlists from raw dictionaries.
//!
//! ## Features
//!
//! - **Shortest-first selection**: complete length groups are accepted in
//!   ascending order; the boundary group is sampled at random
//! - **Case-insensitive deduplication**: `Apple` and `apple` are one term
//! - **Charset filtering**: restrict terms to a permitted character set
//! - **Prefix-free lists**: discard terms that prefix other terms, for
//!   delimiter-less decoding schemes
//! - **Dice numbering**: annotate entries with base-`sides` roll numerals
//! - **Flakes checking**: validate existing lists for case collisions and
//!   non-printable content
//! - **Remote sources**: download and extract the combined Android
//!   keyboard wordlists
//!
//! ## Usage
//!
//! ```bash
//! # 7776-term list (classic 5-dice size) from a dictionary
//! wordlist-gen 7776 words.txt
//!
//! # numbered, prefix-free, reproducible
//! wordlist-gen -n --prefix --seed 23 1296 words.txt
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wordlist_gen::generate::{generate, GeneratorConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = GeneratorConfig::for_length(3);
//! let mut rng = StdRng::seed_from_u64(23);
//! let lines = generate(&config, ["a", "ab", "abc", "b", "bc"], &mut rng).unwrap();
//! assert_eq!(lines.len(), 3);
//! ```

pub mod cli;
pub mod dedup;
pub mod download;
pub mod error;
pub mod flakes;
pub mod generate;
pub mod input;
pub mod normalize;
pub mod numbering;
pub mod output;
pub mod prefix;
pub mod report;
pub mod select;

pub use error::WordlistError;
pub use generate::{generate, GeneratorConfig};
