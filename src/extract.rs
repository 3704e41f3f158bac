//! Heuristic extraction of discrete items from free-form analysis text.
//!
//! Turns raw incident notes or generated analysis text into an ordered,
//! deduplicated list of short items (questions and facts) that can be
//! reviewed and adopted into a cause tree. The scanner is total: any
//! input, however malformed, yields a list and never an error.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

// ============================================================================
// Line classification
// ============================================================================

/// Bullet glyphs recognized at the start of a list item.
const BULLET_GLYPHS: &[char] = &['-', '*', '+', '•'];

/// Minimum length (in characters) of a trimmed line worth keeping.
/// Checked before the bullet glyph is stripped, so short bulleted items
/// like "- B" survive while stray one-character lines drop.
const MIN_LINE_CHARS: usize = 3;

/// Pattern for section header lines: a run of '#' followed by whitespace.
/// Interrogative lines are never headers, however they start.
static HEADER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+\s").expect("Invalid regex"));

fn is_section_header(line: &str) -> bool {
    HEADER_PATTERN.is_match(line) && !line.ends_with('?')
}

fn starts_with_bullet(line: &str) -> bool {
    line.chars()
        .next()
        .map(|c| BULLET_GLYPHS.contains(&c))
        .unwrap_or(false)
}

fn strip_bullet(line: &str) -> &str {
    match line.strip_prefix(BULLET_GLYPHS) {
        Some(rest) => rest.trim(),
        None => line.trim(),
    }
}

// ============================================================================
// Extracted items
// ============================================================================

/// Kind of an extracted item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// An open question to investigate.
    Question,

    /// A stated fact or observation.
    Fact,

    /// An item nominated for adoption into the tree as a cause.
    CandidateCause,
}

impl ItemKind {
    /// Get a human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Question => "Open question",
            Self::Fact => "Stated fact",
            Self::CandidateCause => "Candidate cause",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Question => write!(f, "question"),
            Self::Fact => write!(f, "fact"),
            Self::CandidateCause => write!(f, "candidate_cause"),
        }
    }
}

/// A discrete item extracted from analysis text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedItem {
    /// The item text, bullet-stripped and trimmed.
    pub text: String,

    /// What the item is.
    pub kind: ItemKind,
}

impl ExtractedItem {
    /// Create a new item.
    pub fn new(text: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Re-tag the item (builder style).
    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }
}

// ============================================================================
// Extractor
// ============================================================================

/// Heuristic line scanner that extracts discrete items from text.
///
/// A line survives when it is a bulleted entry or ends with a question
/// mark; blank lines, section headers, short noise lines, and plain
/// prose are discarded. Surviving items are deduplicated by their
/// lower-cased text, keeping the first occurrence's casing, and come
/// back in first-occurrence order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextItemExtractor;

impl TextItemExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract ordered, deduplicated item strings from text.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.extract_items(text)
            .into_iter()
            .map(|item| item.text)
            .collect()
    }

    /// Extract typed items, classifying each as question or fact.
    pub fn extract_items(&self, text: &str) -> Vec<ExtractedItem> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut items = Vec::new();

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || is_section_header(trimmed) {
                continue;
            }

            let is_question = trimmed.ends_with('?');
            if !is_question && !starts_with_bullet(trimmed) {
                continue;
            }
            if trimmed.chars().count() < MIN_LINE_CHARS {
                continue;
            }

            let item_text = strip_bullet(trimmed);
            if item_text.is_empty() {
                continue;
            }

            if seen.insert(item_text.to_lowercase()) {
                let kind = if is_question {
                    ItemKind::Question
                } else {
                    ItemKind::Fact
                };
                items.push(ExtractedItem::new(item_text, kind));
            }
        }
        items
    }
}
