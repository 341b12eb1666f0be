//! Line-oriented translation of JVS scripts into C#.
//!
//! `jvs2ntk-rewrite` is a textual transducer: it runs an ordered list of
//! pattern rules over each source line. It does not build a syntax tree and
//! does not type-check; inputs outside the recognized patterns pass through
//! more or less untouched.
//!
//! # Architecture
//!
//! ```text
//!  all lines ──> CollectionIndex (built once, read-only)
//!                      │
//!  line 1 ──> rule ─> rule ─> … ─> rule ──> output line 1
//!                 OverrideState │
//!  line 2 ──> rule ─> rule ─> … ─> rule ──> output line 2
//! ```
//!
//! Two catalogs exist, one per [`ConversionMode`]:
//! - `general`: Java-flavored syntax to idiomatic C#.
//! - `domain`: NetToolkit plugins, adding logger rewiring, the `Execute`
//!   entry point and a fixed set of API substitutions.
//!
//! # Example
//!
//! ```
//! use jvs2ntk_rewrite::{ConversionMode, convert};
//!
//! let out = convert(&["for (String s : names) {"], ConversionMode::General).unwrap();
//! assert_eq!(out, vec!["foreach (string s in names) {"]);
//! ```

pub mod annotation;
pub mod conventions;
pub mod domain;
pub mod inference;
pub mod naming;
pub mod pipeline;
pub mod rule;
pub mod structure;
pub mod types;

pub use annotation::OverrideState;
pub use inference::{CollectionBinding, CollectionIndex};
pub use naming::to_pascal_case;
pub use pipeline::{ConversionMode, Pipeline, SourceLine, convert};
pub use rule::{LineContext, LineRule, RewriteError, Rewritten, Rule, TryLineRule};
