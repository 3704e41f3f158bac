//! # rca-core
//!
//! A root cause analysis library for building and editing incident cause
//! trees, with heuristic text extraction for mining candidate causes out
//! of investigation notes.
//!
//! ## Core Components
//!
//! - **Tree**: Mutable rooted cause trees with category tagging
//! - **Extract**: Candidate-cause extraction from free-form text
//! - **Session**: An analysis session tying a tree to its source material
//! - **Error**: Crate-wide error and result types
//!
//! ## Example
//!
//! ```rust,ignore
//! use rca_core::{AnalysisSession, Category};
//!
//! let mut session = AnalysisSession::new("Pump room flooded");
//! session.set_source_text(
//!     "## Interview notes\n- Drain valve left open?\n- Alarm panel ignored",
//! );
//!
//! let found = session.refresh_candidates();
//! println!("{} candidate causes", found);
//!
//! // Adopt the first candidate under the incident root
//! let root = session.tree().root_id().clone();
//! session.adopt(0, &root, Some(Category::Human))?;
//!
//! println!("{}", session.tree().to_report());
//! ```

pub mod error;
pub mod extract;
pub mod session;
pub mod tree;

// Re-exports for convenience
pub use error::{Error, Result};
pub use extract::{ExtractedItem, ItemKind, TextItemExtractor};
pub use session::{AnalysisSession, GenerationRequest, GeneratorConfig, TextGenerator};
pub use tree::{Category, CauseEdge, CauseNode, CauseTree, DotConfig, NodeId, TreeStats};
