use regex::{Regex, RegexBuilder};
use std::fmt;

use crate::error::RegExpError;

/// Flags in the order they are reported by [`RegExp::flags`].
const FLAG_ORDER: &str = "dgimsuvy";

/// A regular expression value, kept as its source text and flags plus the
/// compiled matcher.
///
/// Only the `i`, `m` and `s` flags change how the pattern matches; the rest are
/// recorded so that a copy carries the same flags as its original.
///
/// Patterns are compiled with the `regex` crate, which guarantees linear-time
/// matching. Lookaround (`(?=`, `(?!`, `(?<=`, `(?<!`) and backreferences
/// (`\1`, `\k<name>`) are not supported and are rejected with
/// [`RegExpError::InvalidPattern`].
///
/// # Examples
///
/// ```
/// use objkit_value::RegExp;
///
/// let re = RegExp::new("^ab+c$", "mi").unwrap();
/// assert_eq!(re.flags(), "im");
/// assert!(re.is_match("ABBC"));
/// assert_eq!(re.to_string(), "/^ab+c$/im");
/// ```
#[derive(Debug, Clone)]
pub struct RegExp {
    source: String,
    flags: String,
    matcher: Regex,
}

impl RegExp {
    pub fn new(source: &str, flags: &str) -> Result<Self, RegExpError> {
        let flags = normalize_flags(flags)?;
        let source = if source.is_empty() { "(?:)" } else { source };
        let matcher = RegexBuilder::new(source)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .build()
            .map_err(|err| RegExpError::InvalidPattern {
                pattern: source.to_string(),
                reason: err.to_string(),
            })?;
        Ok(Self {
            source: source.to_string(),
            flags,
            matcher,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Flags in canonical order (`dgimsuvy`).
    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn global(&self) -> bool {
        self.flags.contains('g')
    }

    pub fn ignore_case(&self) -> bool {
        self.flags.contains('i')
    }

    pub fn multiline(&self) -> bool {
        self.flags.contains('m')
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.matcher.is_match(haystack)
    }

    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }
}

impl PartialEq for RegExp {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl fmt::Display for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

fn normalize_flags(flags: &str) -> Result<String, RegExpError> {
    let mut seen = [false; FLAG_ORDER.len()];
    for ch in flags.chars() {
        let Some(pos) = FLAG_ORDER.find(ch) else {
            return Err(RegExpError::InvalidFlags(flags.to_string()));
        };
        if seen[pos] {
            return Err(RegExpError::InvalidFlags(flags.to_string()));
        }
        seen[pos] = true;
    }
    // `u` and `v` are mutually exclusive.
    if flags.contains('u') && flags.contains('v') {
        return Err(RegExpError::InvalidFlags(flags.to_string()));
    }
    Ok(FLAG_ORDER
        .chars()
        .zip(seen)
        .filter_map(|(ch, on)| on.then_some(ch))
        .collect())
}
