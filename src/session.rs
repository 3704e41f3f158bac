//! Explicit session state for a cause analysis.
//!
//! A session owns the tree being built, the working text under analysis,
//! and the current list of extracted candidate items. The optional
//! [`TextGenerator`] seam lets a collaborator wire in an external service
//! that writes deeper analysis text; the heuristic extractor is the
//! always-available fallback, so a session is fully functional with
//! nothing configured.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::extract::{ExtractedItem, ItemKind, TextItemExtractor};
use crate::tree::{Category, CauseTree, NodeId};

/// Configuration for an external text-generation service.
///
/// The crate ships no client; this is the surface an implementation
/// reads its credentials from.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// API key for the external service, if any.
    pub api_key: Option<String>,

    /// Model identifier understood by the implementation, if any.
    pub model: Option<String>,
}

impl GeneratorConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("RCA_API_KEY").ok(),
            model: std::env::var("RCA_MODEL").ok(),
        }
    }

    /// Whether an API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// What an external generator should produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The kind of items wanted back.
    pub kind: ItemKind,

    /// The analysis text to work from.
    pub source_text: String,
}

impl GenerationRequest {
    /// Create a request.
    pub fn new(kind: ItemKind, source_text: impl Into<String>) -> Self {
        Self {
            kind,
            source_text: source_text.into(),
        }
    }
}

/// An external service that writes deeper analysis text.
///
/// Implementations typically call a hosted model using the credentials
/// from [`GeneratorConfig`]. The returned text goes through the
/// heuristic extractor, so any line-oriented output works. A failure
/// here never reaches the tree layer: the session absorbs it and falls
/// back to extracting from the working text directly.
pub trait TextGenerator {
    /// Produce analysis text for the request.
    fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// Self-contained state for one analysis: the tree, the working text,
/// and the candidates extracted from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSession {
    /// The tree being built.
    tree: CauseTree,

    /// The working text candidates are extracted from.
    source_text: String,

    /// Candidate items awaiting review.
    candidates: Vec<ExtractedItem>,
}

impl AnalysisSession {
    /// Start a session around a new tree.
    pub fn new(root_label: impl Into<String>) -> Self {
        Self {
            tree: CauseTree::new(root_label),
            source_text: String::new(),
            candidates: Vec::new(),
        }
    }

    /// Start a session around an existing tree.
    pub fn with_tree(tree: CauseTree) -> Self {
        Self {
            tree,
            source_text: String::new(),
            candidates: Vec::new(),
        }
    }

    /// The tree under construction.
    pub fn tree(&self) -> &CauseTree {
        &self.tree
    }

    /// Mutable access to the tree.
    pub fn tree_mut(&mut self) -> &mut CauseTree {
        &mut self.tree
    }

    /// The current working text.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Replace the working text. Candidates stay as they are until the
    /// next refresh.
    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.source_text = text.into();
    }

    /// Candidate items awaiting review.
    pub fn candidates(&self) -> &[ExtractedItem] {
        &self.candidates
    }

    /// Re-extract candidates from the working text with the heuristic
    /// scanner. Returns how many candidates are now listed.
    pub fn refresh_candidates(&mut self) -> usize {
        let extractor = TextItemExtractor::new();
        self.candidates = extractor.extract_items(&self.source_text);
        debug!(count = self.candidates.len(), "refreshed candidates");
        self.candidates.len()
    }

    /// Ask an external generator for deeper analysis text and extract
    /// candidates from what it returns, tagged as candidate causes.
    ///
    /// When the generator fails, the session logs a warning and falls
    /// back to the heuristic path over the working text. Either way the
    /// caller gets a refreshed candidate list; the tree layer never
    /// learns whether the generator was involved.
    pub fn generate_candidates(&mut self, generator: &dyn TextGenerator) -> usize {
        let request = GenerationRequest::new(ItemKind::CandidateCause, self.source_text.clone());
        let extractor = TextItemExtractor::new();

        match generator.generate(&request) {
            Ok(generated) => {
                self.candidates = extractor
                    .extract_items(&generated)
                    .into_iter()
                    .map(|item| item.with_kind(ItemKind::CandidateCause))
                    .collect();
            }
            Err(err) => {
                warn!(error = %err, "text generation failed, falling back to heuristic extraction");
                self.candidates = extractor.extract_items(&self.source_text);
            }
        }
        self.candidates.len()
    }

    /// Promote a candidate into the tree under `parent_id`.
    ///
    /// The adopted item leaves the candidate list. On any error both the
    /// list and the tree are unchanged.
    pub fn adopt(
        &mut self,
        index: usize,
        parent_id: &NodeId,
        category: Option<Category>,
    ) -> Result<NodeId> {
        let item = self
            .candidates
            .get(index)
            .ok_or(Error::CandidateOutOfRange(index))?;

        let id = self.tree.add_node(item.text.clone(), parent_id, category)?;
        self.candidates.remove(index);
        Ok(id)
    }
}
