//! Raw CSS parsing into the stylesheet tree.

mod css_parser;

pub use css_parser::parse_css;
