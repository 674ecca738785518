//! Video title normalization
//!
//! Turns a human-authored video title into a query string that a music
//! catalog search is likely to resolve to the right track. The transform is
//! pure and total: it never fails, and an empty result means the title had
//! nothing worth searching for.

use std::sync::OnceLock;

use regex::Regex;

/// Decoration commonly added to music video titles
///
/// Matched as whole words only, so "Left." or "Minecraft." keep their endings.
const NOISE_PATTERN: &str = r"(?i)\b(?:official\s+music\s+video|official\s+lyrics?\s+video|official\s+video|official\s+audio|lyrics?\s+video|lyrics|video\s+clip\s+oficial|video\s+oficial|audio\s+oficial|hd|hq|4k|\d{4}\s+new|featuring)\b|\b(?:feat|ft)\.";

/// Innermost bracketed spans, so nested spans are peeled one level per pass
const BRACKET_PATTERN: &str = r"\[[^\[\]]*\]|\([^()]*\)|\{[^{}]*\}";

const WHITESPACE_PATTERN: &str = r"\s+";

static DEFAULT: OnceLock<TitleNormalizer> = OnceLock::new();

/// Normalize a title with the default normalizer
pub fn normalize(raw_title: &str) -> String {
    DEFAULT.get_or_init(TitleNormalizer::new).normalize(raw_title)
}

/// Regex-based title cleaner
#[derive(Debug, Clone)]
pub struct TitleNormalizer {
    noise: Regex,
    brackets: Regex,
    whitespace: Regex,
}

impl TitleNormalizer {
    pub fn new() -> Self {
        Self {
            noise: Regex::new(NOISE_PATTERN).expect("noise pattern is valid"),
            brackets: Regex::new(BRACKET_PATTERN).expect("bracket pattern is valid"),
            whitespace: Regex::new(WHITESPACE_PATTERN).expect("whitespace pattern is valid"),
        }
    }

    /// Clean a raw title, repeating until the output stops changing
    ///
    /// Every pass either shortens the string or only rewrites whitespace, so
    /// the loop terminates, and stopping at a fixed point makes the result
    /// idempotent.
    pub fn normalize(&self, raw_title: &str) -> String {
        let mut current = self.single_pass(raw_title);
        loop {
            let next = self.single_pass(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn single_pass(&self, title: &str) -> String {
        let without_noise = self.noise.replace_all(title, " ");
        let without_brackets = self.brackets.replace_all(&without_noise, " ");
        let collapsed = self.whitespace.replace_all(&without_brackets, " ");

        collapsed
            .trim_matches(|c: char| c.is_whitespace() || is_dangling_separator(c))
            .to_string()
    }
}

impl Default for TitleNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_dangling_separator(c: char) -> bool {
    matches!(c, '-' | '–' | '—' | '|' | ':')
}
