//! Term normalization
//!
//! Transliterates special characters, lower-cases terms and rejects
//! candidates that cannot appear in a well-formed wordlist.

use hashbrown::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Characters considered safe for transcription-friendly lists:
/// ASCII letters, digits and punctuation.
pub fn ascii_charset() -> HashSet<char> {
    ('!'..='~').collect()
}

/// Why a candidate term was excluded from the pool.
///
/// Rejections are never fatal; the pipeline logs them and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    Whitespace,
    Control,
    DisallowedChar(char),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Empty => write!(f, "empty term"),
            Rejection::Whitespace => write!(f, "term contains whitespace"),
            Rejection::Control => write!(f, "term contains control characters"),
            Rejection::DisallowedChar(c) => write!(f, "char {:?} not in permitted set", c),
        }
    }
}

/// Per-term validator and case folder.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    /// Permitted characters; `None` disables the charset check.
    pub allowed: Option<HashSet<char>>,
    /// Preserve the original casing of accepted terms. The dedup key is
    /// always the lower-cased form regardless of this setting.
    pub allow_uppercase: bool,
}

impl Normalizer {
    pub fn new(allowed: Option<HashSet<char>>, allow_uppercase: bool) -> Self {
        Self {
            allowed,
            allow_uppercase,
        }
    }

    /// Validate a raw candidate and produce its stored form.
    ///
    /// The charset check runs against the transliterated term, so a
    /// latin-only permitted set still accepts "über" (stored as "ueber").
    pub fn accept(&self, raw: &str) -> Result<String, Rejection> {
        if raw.is_empty() {
            return Err(Rejection::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(Rejection::Whitespace);
        }
        if raw.chars().any(char::is_control) {
            return Err(Rejection::Control);
        }
        let term = transliterate(raw);
        if let Some(ref allowed) = self.allowed {
            if let Some(bad) = term.chars().find(|c| !allowed.contains(c)) {
                return Err(Rejection::DisallowedChar(bad));
            }
        }
        if self.allow_uppercase {
            Ok(term)
        } else {
            Ok(term.to_lowercase())
        }
    }
}

/// Replace special letters by latin equivalents, then strip any
/// remaining combining marks via NFKD decomposition.
pub fn transliterate(text: &str) -> String {
    let mut mapped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'ä' | 'æ' => mapped.push_str("ae"),
            'Ä' | 'Æ' => mapped.push_str("AE"),
            'ö' | 'ø' => mapped.push_str("oe"),
            'Ö' | 'Ø' => mapped.push_str("OE"),
            'ü' => mapped.push_str("ue"),
            'Ü' => mapped.push_str("UE"),
            'ß' => mapped.push_str("ss"),
            'Ð' => mapped.push('D'),
            _ => mapped.push(c),
        }
    }
    mapped.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transliterate_umlauts() {
        assert_eq!(transliterate("ärgern"), "aergern");
        assert_eq!(transliterate("Übung"), "UEbung");
        assert_eq!(transliterate("straße"), "strasse");
        assert_eq!(transliterate("høne"), "hoene");
    }

    #[test]
    fn test_transliterate_strips_accents() {
        assert_eq!(transliterate("café"), "cafe");
        assert_eq!(transliterate("naïve"), "naive");
    }

    #[test]
    fn test_accept_lowercases_by_default() {
        let n = Normalizer::default();
        assert_eq!(n.accept("Apple").unwrap(), "apple");
    }

    #[test]
    fn test_accept_preserves_case_when_asked() {
        let n = Normalizer::new(None, true);
        assert_eq!(n.accept("Apple").unwrap(), "Apple");
    }

    #[test]
    fn test_reject_empty_and_whitespace() {
        let n = Normalizer::default();
        assert_eq!(n.accept(""), Err(Rejection::Empty));
        assert_eq!(n.accept("two words"), Err(Rejection::Whitespace));
        assert_eq!(n.accept("tab\there"), Err(Rejection::Whitespace));
    }

    #[test]
    fn test_reject_control_chars() {
        let n = Normalizer::default();
        assert_eq!(n.accept("bell\u{7}"), Err(Rejection::Control));
    }

    #[test]
    fn test_charset_restriction() {
        let n = Normalizer::new(Some(ascii_charset()), false);
        assert_eq!(n.accept("plain").unwrap(), "plain");
        // transliteration happens before the charset check
        assert_eq!(n.accept("über").unwrap(), "ueber");
        assert_eq!(n.accept("日本"), Err(Rejection::DisallowedChar('日')));
    }

    #[test]
    fn test_custom_charset() {
        let n = Normalizer::new(Some("abc".chars().collect()), false);
        assert_eq!(n.accept("cab").unwrap(), "cab");
        assert_eq!(n.accept("cad"), Err(Rejection::DisallowedChar('d')));
    }
}
