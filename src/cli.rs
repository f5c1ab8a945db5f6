//! Command-line interface definition for wordlist-gen
//!
//! Provides argument parsing and validation for the list generator.

use crate::normalize::ascii_charset;
use crate::prefix::PrefixMode;
use clap::{Parser, ValueEnum};
use hashbrown::HashSet;
use std::path::PathBuf;

/// Generate diceware-style passphrase wordlists
///
/// Filter a raw dictionary into a deduplicated, optionally prefix-free
/// list of a given size, annotated with dice numerals on request.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordlist-gen",
    version,
    about = "Generate diceware-style passphrase wordlists",
    long_about = r#"
Generate a wordlist suitable for diceware-style passphrase schemes from
one or more raw dictionaries. Terms are normalized, deduplicated
case-insensitively and selected shortest-first; the terms at the length
boundary are drawn at random so repeated runs sample the whole
dictionary instead of the alphabetically first entries.

EXAMPLES:
    # 7776-term list (classic 5-dice size) from a dictionary
    wordlist-gen -l 7776 /usr/share/dict/words

    # numbered for 6-sided dice
    wordlist-gen -n -l 7776 words.txt

    # ASCII terms only, read from stdin
    cat words.txt | wordlist-gen --ascii -l 1296 -

    # prefix-free list for delimiter-less decoding
    wordlist-gen --prefix -l 1296 words.txt

    # reproducible selection
    wordlist-gen --seed 23 -l 7776 words.txt
"#
)]
pub struct Args {
    /// Desired length of the generated wordlist (omit for all terms)
    #[arg(short, long, value_name = "LENGTH")]
    pub length: Option<usize>,

    /// Dictionary file(s) to read candidate terms from; `-` reads stdin
    #[arg(value_name = "DICTFILE", required = true)]
    pub dictfile: Vec<PathBuf>,

    /// Show dice numerals in output
    #[arg(short, long)]
    pub numbered: bool,

    /// Assume dice with this many sides for numbering
    #[arg(short = 'd', long, value_name = "N", default_value_t = 6)]
    pub sides: usize,

    /// Only accept terms built from these characters
    #[arg(short, long, value_name = "SET")]
    pub chars: Option<String>,

    /// Only accept terms of ASCII letters, digits and punctuation
    #[arg(long)]
    pub ascii: bool,

    /// Keep original casing instead of lower-casing terms
    #[arg(short = 'u', long)]
    pub allow_uppercase: bool,

    /// Discard prefix-colliding terms; bare flag keeps the shorter term
    #[arg(
        long,
        value_enum,
        value_name = "MODE",
        num_args = 0..=1,
        require_equals = true,
        default_value_t = PrefixArg::None,
        default_missing_value = "short"
    )]
    pub prefix: PrefixArg,

    /// Include the basic terms from the wordlist kit
    #[arg(short = 'k', long)]
    pub use_kit: bool,

    /// Include the 416-term supplementary list
    #[arg(long = "use-416")]
    pub use_416: bool,

    /// Seed the boundary draw for reproducible output
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Write the list to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Be verbose (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// CLI spelling of the prefix-collision modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrefixArg {
    None,
    Short,
    Long,
}

impl From<PrefixArg> for PrefixMode {
    fn from(arg: PrefixArg) -> Self {
        match arg {
            PrefixArg::None => PrefixMode::None,
            PrefixArg::Short => PrefixMode::Short,
            PrefixArg::Long => PrefixMode::Long,
        }
    }
}

impl Args {
    /// The permitted character set implied by `--chars`/`--ascii`.
    pub fn charset(&self) -> Option<HashSet<char>> {
        match (&self.chars, self.ascii) {
            (Some(set), _) => Some(set.chars().collect()),
            (None, true) => Some(ascii_charset()),
            (None, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_minimal_invocation() {
        let args = parse(&["wordlist-gen", "-l", "8192", "words.txt"]);
        assert_eq!(args.length, Some(8192));
        assert_eq!(args.dictfile, vec![PathBuf::from("words.txt")]);
        assert_eq!(args.sides, 6);
        assert!(!args.numbered);
    }

    #[test]
    fn test_length_is_optional() {
        let args = parse(&["wordlist-gen", "words.txt"]);
        assert_eq!(args.length, None);
        assert_eq!(args.dictfile, vec![PathBuf::from("words.txt")]);
    }

    #[test]
    fn test_dictfile_required() {
        assert!(Args::try_parse_from(["wordlist-gen"]).is_err());
    }

    #[test]
    fn test_multiple_dictfiles_and_stdin() {
        let args = parse(&["wordlist-gen", "-l", "100", "a.txt", "-", "b.txt"]);
        assert_eq!(args.dictfile.len(), 3);
    }

    #[test]
    fn test_prefix_flag_defaults_to_short() {
        let args = parse(&["wordlist-gen", "--prefix", "words.txt"]);
        assert_eq!(args.prefix, PrefixArg::Short);

        let args = parse(&["wordlist-gen", "--prefix=long", "words.txt"]);
        assert_eq!(args.prefix, PrefixArg::Long);

        let args = parse(&["wordlist-gen", "words.txt"]);
        assert_eq!(args.prefix, PrefixArg::None);
    }

    #[test]
    fn test_charset_precedence() {
        let args = parse(&["wordlist-gen", "--ascii", "-c", "abc", "w.txt"]);
        let set = args.charset().unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&'a'));

        let args = parse(&["wordlist-gen", "--ascii", "w.txt"]);
        assert!(args.charset().unwrap().contains(&'!'));

        let args = parse(&["wordlist-gen", "w.txt"]);
        assert!(args.charset().is_none());
    }

    #[test]
    fn test_verbosity_counts() {
        assert_eq!(parse(&["wordlist-gen", "w.txt"]).verbose, 0);
        assert_eq!(parse(&["wordlist-gen", "-v", "w.txt"]).verbose, 1);
        assert_eq!(parse(&["wordlist-gen", "-vv", "w.txt"]).verbose, 2);
    }

    #[test]
    fn test_seed_and_output() {
        let args = parse(&[
            "wordlist-gen",
            "--seed",
            "23",
            "-o",
            "out.txt",
            "-l",
            "100",
            "w.txt",
        ]);
        assert_eq!(args.seed, Some(23));
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
    }
}
