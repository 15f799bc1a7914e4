//! Gate web font declarations behind a fonts-loaded marker class.
//!
//! Pages that load fonts asynchronously flash unstyled text unless the web
//! font rules are held back until the fonts have actually arrived. The usual
//! fix is a detection script that adds a marker class (e.g. `wf-loaded`) to
//! the document root once loading finishes, plus a stylesheet where every
//! web font rule is scoped behind that class. This crate does the stylesheet
//! half: [`RuleSplitter`] walks a parsed [`Stylesheet`](css::Stylesheet) and
//! moves each matching `font-family` declaration into a gated sibling rule.
//!
//! # Example
//!
//! ```
//! use fontgate::prelude::*;
//!
//! let mut sheet = parse_css(r#".a { font-family: "MyWebFont", sans-serif; }"#).unwrap();
//!
//! let splitter = RuleSplitter::new(SplitterConfig::new(["MyWebFont"]));
//! splitter.transform(&mut sheet);
//!
//! assert_eq!(
//!     sheet.to_css_string(),
//!     ".a {\n}\n\n.wf-loaded .a {\n    font-family: \"MyWebFont\", sans-serif;\n}\n"
//! );
//! ```

mod config;
mod splitter;

pub use config::{DEFAULT_CLASS_NAME, SplitterConfig};
pub use splitter::RuleSplitter;

/// Stylesheet tree, parsing, and serialization.
pub mod css {
    pub use fontgate_css::*;
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::css::{Declaration, Rule, RuleId, Stylesheet, parse_css};
    pub use crate::{DEFAULT_CLASS_NAME, RuleSplitter, SplitterConfig};
}
