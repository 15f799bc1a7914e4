//! Single style rule definition.

/// A raw property/value pair within a rule.
///
/// Both sides are kept as source text. `value` holds everything between the
/// colon and the terminating semicolon, verbatim (quotes, commas, extra
/// whitespace between tokens included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The property name (e.g., "font-family").
    pub property: String,
    /// The raw value text (e.g., `"MyWebFont", sans-serif`).
    pub value: String,
}

impl Declaration {
    /// Create a new declaration.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// A style rule: a raw selector string plus its ordered declarations.
///
/// The selector may be a comma-separated list (e.g., ".a, .b"); it is stored
/// exactly as written and never parsed into parts here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// The selector string (e.g., ".class", "#id", "div > p").
    pub selector: String,
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
}

impl Rule {
    /// Create a new rule.
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selector: selector.into(),
            declarations,
        }
    }

    /// Create a rule with no declarations.
    pub fn empty(selector: impl Into<String>) -> Self {
        Self::new(selector, vec![])
    }

    /// Append a declaration.
    pub fn push_declaration(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    /// Detach the declaration at `index`, shifting later declarations left.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_declaration(&mut self, index: usize) -> Declaration {
        self.declarations.remove(index)
    }

    /// Get the number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Check if the rule has no declarations.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_creation() {
        let rule = Rule::new(".a", vec![Declaration::new("color", "red")]);

        assert_eq!(rule.selector, ".a");
        assert_eq!(rule.len(), 1);
        assert!(!rule.is_empty());
    }

    #[test]
    fn remove_declaration_preserves_order() {
        let mut rule = Rule::new(
            ".a",
            vec![
                Declaration::new("color", "red"),
                Declaration::new("font-family", "serif"),
                Declaration::new("margin", "0"),
            ],
        );

        let removed = rule.remove_declaration(1);

        assert_eq!(removed.property, "font-family");
        assert_eq!(rule.declarations[0].property, "color");
        assert_eq!(rule.declarations[1].property, "margin");
    }

    #[test]
    fn empty_rule() {
        let rule = Rule::empty(".a");
        assert!(rule.is_empty());
        assert_eq!(rule.len(), 0);
    }
}
