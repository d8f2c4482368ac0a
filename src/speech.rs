//! Speech-disfluency preprocessing.
//!
//! Transcribed speech is full of filler words ("um", "like"), immediate
//! repetitions ("the the") and stutters ("th-the"). This module removes them
//! from raw text before the text enters a pipeline, or reports them without
//! changing anything.
//!
//! Words are whitespace-separated; the output is re-joined with single
//! spaces.
//!
//! # Examples
//!
//! ```
//! use miniparse::speech::{SpeechOptions, preprocess_speech_input};
//!
//! let options = SpeechOptions {
//!     detect_repetitions: true,
//!     find_stutters: true,
//!     ..SpeechOptions::default()
//! };
//! let cleaned = preprocess_speech_input("um I I want th-the blue one", &options);
//! assert_eq!(cleaned, "I want the blue one");
//! ```

use std::sync::LazyLock;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Words dropped by filler removal, compared lowercased.
const FILLER_WORDS: &[&str] = &[
    "um",
    "umm",
    "uh",
    "uhh",
    "like",
    "so",
    "well",
    "actually",
    "basically",
    "literally",
];

static FILLER_WORDS_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| FILLER_WORDS.iter().copied().collect());

/// Trailing/embedded punctuation ignored when comparing words.
const WORD_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Which disfluencies [`preprocess_speech_input`] removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpeechOptions {
    /// Drop filler words (default: true).
    pub remove_filler_words: bool,

    /// Drop a word immediately repeated by the next one (default: false).
    pub detect_repetitions: bool,

    /// Collapse stutters like `b-because` into the full word (default: false).
    pub find_stutters: bool,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            remove_filler_words: true,
            detect_repetitions: false,
            find_stutters: false,
        }
    }
}

/// Disfluencies found by [`analyze_speech_patterns`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechPatterns {
    /// Filler words, as written, in text order
    pub filler_words: Vec<String>,

    /// Repeated words, deduplicated, in order of first repetition
    pub repetitions: Vec<String>,

    /// Stuttered words, as written, in text order
    pub stutters: Vec<String>,
}

impl SpeechPatterns {
    pub fn is_empty(&self) -> bool {
        self.filler_words.is_empty() && self.repetitions.is_empty() && self.stutters.is_empty()
    }
}

/// Remove the disfluencies enabled in `options` from `text`.
///
/// Filler removal runs first, then repetition removal, then stutter
/// collapsing.
pub fn preprocess_speech_input(text: &str, options: &SpeechOptions) -> String {
    let mut words: Vec<String> = text.split_whitespace().map(str::to_string).collect();

    if options.remove_filler_words {
        words.retain(|word| !is_filler(word));
    }

    if options.detect_repetitions {
        words = remove_repetitions(words);
    }

    if options.find_stutters {
        words = words
            .into_iter()
            .map(|word| stutter_completion(&word).unwrap_or(word))
            .collect();
    }

    words.join(" ")
}

/// Report filler words, repetitions and stutters in `text`.
pub fn analyze_speech_patterns(text: &str) -> SpeechPatterns {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut patterns = SpeechPatterns::default();

    for word in &words {
        if is_filler(word) {
            patterns.filler_words.push(word.to_string());
        }
        if stutter_completion(word).is_some() {
            patterns.stutters.push(word.to_string());
        }
    }

    let mut seen = AHashSet::new();
    for pair in words.windows(2) {
        if is_repetition(pair[0], pair[1]) && seen.insert(pair[0]) {
            patterns.repetitions.push(pair[0].to_string());
        }
    }

    patterns
}

/// Lowercase `word` and strip sentence punctuation from it.
fn normalize_word(word: &str) -> String {
    word.to_lowercase().replace(WORD_PUNCTUATION, "")
}

fn is_filler(word: &str) -> bool {
    FILLER_WORDS_SET.contains(normalize_word(word).as_str())
}

fn is_repetition(word: &str, next: &str) -> bool {
    word.to_lowercase() == next.to_lowercase()
}

fn remove_repetitions(words: Vec<String>) -> Vec<String> {
    let mut result = Vec::with_capacity(words.len());
    let mut iter = words.into_iter().peekable();

    while let Some(word) = iter.next() {
        match iter.peek() {
            Some(next) if is_repetition(&word, next) => continue,
            _ => result.push(word),
        }
    }

    result
}

/// The completed word of a stutter such as `th-the`, if `word` is one.
///
/// A word stutters when its first two hyphen-separated parts are non-empty
/// and one is a prefix of the other; the second part is the completion.
fn stutter_completion(word: &str) -> Option<String> {
    let normalized = normalize_word(word);
    let mut parts = normalized.split('-');
    let (first, second) = (parts.next()?, parts.next()?);

    if first.is_empty() || second.is_empty() {
        return None;
    }
    if second.starts_with(first) || first.starts_with(second) {
        Some(second.to_string())
    } else {
        None
    }
}
