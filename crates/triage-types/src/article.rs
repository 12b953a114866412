//! Knowledge-base articles and corpus parsing.
//!
//! Articles are immutable reference entities: the corpus is supplied once
//! at engine construction and never mutated by the engine. Content updates
//! happen in a separate ingestion path.

use serde::{Deserialize, Serialize};

use crate::error::TriageError;

/// A single knowledge-base entry.
///
/// Every field defaults to the empty string so malformed records degrade
/// to zero score contribution instead of failing the load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Opaque unique identifier.
    #[serde(default, alias = "article_id")]
    pub id: String,

    /// Article title.
    #[serde(default)]
    pub title: String,

    /// Article body text.
    #[serde(default, alias = "content")]
    pub body: String,

    /// Comma-delimited free-text labels.
    #[serde(default)]
    pub tags: String,
}

impl Article {
    /// Create an article from its parts.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            tags: tags.into(),
        }
    }

    /// Iterate the individual tag labels (trimmed, empties skipped).
    pub fn tag_list(&self) -> impl Iterator<Item = &str> + '_ {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Word count of the body, used by the confidence length factor.
    pub fn body_word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}

/// Parse a line-delimited JSON corpus into articles.
///
/// Blank lines are skipped. Records with missing fields parse with empty
/// defaults; a line that is not valid JSON is an error, since a truncated
/// corpus should be caught at load time rather than scored as silence.
pub fn parse_corpus(input: &str) -> Result<Vec<Article>, TriageError> {
    let mut articles = Vec::new();
    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        articles.push(serde_json::from_str(line)?);
    }
    Ok(articles)
}
