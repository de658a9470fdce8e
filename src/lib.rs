//! Matchdiff: shortest-edit-script diffs for assertion failure reporting.
//!
//! The crate provides:
//! - A Myers-style sequence aligner over opaque sequences (`align`)
//! - Character- and line-level edit scripts with semantic cleanup (`script`)
//! - Matcher-aware value normalization (`value`, `normalize`)
//! - Colorized line-oriented rendering (`engine`, `markup`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use matchdiff::engine::{self, DiffOptions};
//! use matchdiff::value::Value;
//!
//! let expected = Value::map([("answer", Value::from(42i64))]);
//! let received = Value::map([("answer", Value::from(54i64))]);
//!
//! let rendered = engine::diff_values(&expected, &received, &DiffOptions::plain());
//! assert!(rendered.contains("- "));
//! assert!(rendered.contains("+ "));
//! ```

pub mod align;
pub mod engine;
pub mod markup;
pub mod normalize;
pub mod script;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;
