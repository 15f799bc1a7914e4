//! Serialization of the stylesheet tree back to CSS text.

use std::fmt;

use crate::rules::{Declaration, Rule, Stylesheet};

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for declaration in &self.declarations {
            writeln!(f, "    {}", declaration)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", rule)?;
        }
        Ok(())
    }
}

impl Stylesheet {
    /// Serialize the whole sheet as CSS text.
    pub fn to_css_string(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::{Declaration, Rule, Stylesheet};

    #[test]
    fn declaration_display() {
        let decl = Declaration::new("font-family", r#""MyWebFont", sans-serif"#);
        assert_eq!(decl.to_string(), r#"font-family: "MyWebFont", sans-serif;"#);
    }

    #[test]
    fn rule_display() {
        let rule = Rule::new(".a", vec![Declaration::new("color", "red")]);
        assert_eq!(rule.to_string(), ".a {\n    color: red;\n}");
    }

    #[test]
    fn empty_rule_display() {
        let rule = Rule::empty(".a");
        assert_eq!(rule.to_string(), ".a {\n}");
    }

    #[test]
    fn stylesheet_display() {
        let mut sheet = Stylesheet::new();
        sheet.push(Rule::new(".a", vec![Declaration::new("color", "red")]));
        sheet.push(Rule::new(".b", vec![Declaration::new("color", "blue")]));

        assert_eq!(
            sheet.to_css_string(),
            ".a {\n    color: red;\n}\n\n.b {\n    color: blue;\n}\n"
        );
    }
}
