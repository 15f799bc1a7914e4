//! Owned stylesheet tree for the fontgate transform pipeline.
//!
//! This crate provides the data model the transforms operate on:
//!
//! - **Rules**: raw selector strings with ordered property/value declarations
//! - **Stylesheet**: an arena-backed rule container with stable ids and
//!   structural edits (insert-after, remove)
//! - **Parsing**: build a tree from CSS text without interpreting values
//! - **Serialization**: write a tree back out as CSS text
//!
//! Declarations and selectors are kept as uninterpreted source text. Nothing
//! here validates CSS; a transform that matches on raw value text needs the
//! text exactly as it was written.
//!
//! # Example
//!
//! ```
//! use fontgate_css::{parse_css, Declaration, Rule};
//!
//! let mut sheet = parse_css(".a { color: red; }").unwrap();
//! let id = sheet.ids().next().unwrap();
//! sheet.insert_after(id, Rule::new(".b", vec![Declaration::new("color", "blue")]));
//! assert_eq!(sheet.len(), 2);
//! ```

pub mod parser;
pub mod rules;

mod error;
mod serialize;

pub use error::{Error, Result};
pub use parser::parse_css;
pub use rules::{Declaration, Rule, RuleId, Stylesheet};
