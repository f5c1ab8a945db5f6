//! Remote word-source fetching
//!
//! Downloads the combined Android keyboard wordlists, which make a rich
//! candidate source for list generation. The upstream gitiles mirror
//! serves files base64-wrapped and gzip-compressed; this module fetches,
//! unwraps, decompresses and parses them into plain terms.
//!
//! Network and archive failures surface as errors to the caller; nothing
//! is retried here.

use crate::error::WordlistError;
use base64::{engine::general_purpose, Engine as _};
use flate2::read::GzDecoder;
use hashbrown::HashMap;
use std::io::Read;
use std::path::Path;

/// Upstream directory of per-language combined wordlists.
const BASE_URL: &str = "https://android.googlesource.com/platform/packages/inputmethods/\
                        LatinIME/+/master/dictionaries/";

/// Whether `possibly_offensive`-flagged words are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffensiveFilter {
    /// Keep every word.
    #[default]
    Keep,
    /// Drop flagged words.
    Drop,
    /// Keep only flagged words.
    Only,
}

/// A downloaded (still compressed) wordlist.
#[derive(Debug, Default)]
pub struct RemoteWordlist {
    gz_data: Vec<u8>,
}

impl RemoteWordlist {
    /// Download URL for a language code like `en` or `de`.
    pub fn url_for_lang(lang: &str) -> String {
        format!("{BASE_URL}{lang}_wordlist.combined.gz?format=TEXT")
    }

    /// Basename the list for `lang` is stored under.
    pub fn basename(lang: &str) -> String {
        format!("{lang}_wordlist.combined.gz")
    }

    /// Fetch the list for a language from upstream.
    ///
    /// The gitiles mirror serves raw files base64-encoded, so the
    /// response body is decoded before use.
    pub fn fetch(lang: &str) -> Result<Self, WordlistError> {
        let url = Self::url_for_lang(lang);
        log::info!("fetching wordlist from {url}");
        let body = reqwest::blocking::get(&url)?.error_for_status()?.text()?;
        let gz_data = general_purpose::STANDARD
            .decode(body.trim())
            .map_err(|e| WordlistError::Archive(format!("invalid base64 payload: {e}")))?;
        Ok(Self { gz_data })
    }

    /// Use an already-downloaded gzip file instead of the network.
    pub fn from_gz_bytes(gz_data: Vec<u8>) -> Self {
        Self { gz_data }
    }

    pub fn gz_data(&self) -> &[u8] {
        &self.gz_data
    }

    /// Save the compressed payload unmodified.
    pub fn save(&self, path: &Path) -> Result<(), WordlistError> {
        std::fs::write(path, &self.gz_data)?;
        Ok(())
    }

    /// Decompress the payload.
    pub fn decompress(&self) -> Result<String, WordlistError> {
        let mut decoder = GzDecoder::new(self.gz_data.as_slice());
        let mut text = String::new();
        decoder
            .read_to_string(&mut text)
            .map_err(|e| WordlistError::Archive(format!("gunzip failed: {e}")))?;
        Ok(text)
    }

    /// Parse the combined-list format into per-line attribute maps.
    ///
    /// Each line is a comma-separated run of `key=value` pairs, e.g.
    /// `word=hello,f=127,flags=,originalFreq=127`.
    pub fn parse_lines(text: &str) -> impl Iterator<Item = HashMap<String, String>> + '_ {
        text.lines().filter(|l| !l.is_empty()).map(|line| {
            line.split(',')
                .filter_map(|field| {
                    field
                        .trim()
                        .split_once('=')
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                })
                .collect()
        })
    }

    /// Extract the plain words, honoring the offensive-word filter.
    pub fn words(text: &str, filter: OffensiveFilter) -> Vec<String> {
        Self::parse_lines(text)
            .filter_map(|attrs| {
                let flagged = attrs.contains_key("possibly_offensive");
                match filter {
                    OffensiveFilter::Drop if flagged => None,
                    OffensiveFilter::Only if !flagged => None,
                    _ => attrs.get("word").cloned(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const SAMPLE: &str = "dictionary=main:en,locale=en,description=English,version=54\n\
                          word=the,f=222\n\
                          word=damn,f=150,possibly_offensive=true\n\
                          word=of,f=211\n";

    fn gzipped(text: &str) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(text.as_bytes()).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_url_for_lang() {
        let url = RemoteWordlist::url_for_lang("de");
        assert!(url.ends_with("de_wordlist.combined.gz?format=TEXT"));
        assert_eq!(RemoteWordlist::basename("de"), "de_wordlist.combined.gz");
    }

    #[test]
    fn test_decompress_round_trip() {
        let wl = RemoteWordlist::from_gz_bytes(gzipped(SAMPLE));
        assert_eq!(wl.decompress().unwrap(), SAMPLE);
    }

    #[test]
    fn test_decompress_rejects_garbage() {
        let wl = RemoteWordlist::from_gz_bytes(b"not a gzip stream".to_vec());
        assert!(matches!(
            wl.decompress(),
            Err(WordlistError::Archive(_))
        ));
    }

    #[test]
    fn test_parse_lines() {
        let meta = RemoteWordlist::parse_lines(SAMPLE).next().unwrap();
        assert_eq!(meta.get("locale").map(String::as_str), Some("en"));
        assert_eq!(meta.get("version").map(String::as_str), Some("54"));
    }

    #[test]
    fn test_words_keep_all() {
        let words = RemoteWordlist::words(SAMPLE, OffensiveFilter::Keep);
        assert_eq!(words, vec!["the", "damn", "of"]);
    }

    #[test]
    fn test_words_drop_offensive() {
        let words = RemoteWordlist::words(SAMPLE, OffensiveFilter::Drop);
        assert_eq!(words, vec!["the", "of"]);
    }

    #[test]
    fn test_words_only_offensive() {
        let words = RemoteWordlist::words(SAMPLE, OffensiveFilter::Only);
        assert_eq!(words, vec!["damn"]);
    }

    #[test]
    fn test_save() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("en_wordlist.combined.gz");
        let wl = RemoteWordlist::from_gz_bytes(gzipped(SAMPLE));
        wl.save(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), wl.gz_data());
    }
}
