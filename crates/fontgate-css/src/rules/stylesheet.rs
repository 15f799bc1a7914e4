//! Stylesheet container with structural edit operations.

use slotmap::{SlotMap, new_key_type};

use crate::rules::Rule;

new_key_type! {
    /// A stable handle to a rule within a [`Stylesheet`].
    ///
    /// `RuleId`s remain valid as sibling rules are inserted or removed around
    /// the rule they point to, so a caller can collect ids during one pass and
    /// apply structural edits relative to them in a later pass.
    pub struct RuleId;
}

/// A stylesheet: rules in document order, addressable by stable id.
///
/// Rules live in an arena; document order is tracked separately so that
/// positional edits (insert-after) resolve against the sheet's *current*
/// order rather than positions captured earlier.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    rules: SlotMap<RuleId, Rule>,
    order: Vec<RuleId>,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule at the end of the document order.
    pub fn push(&mut self, rule: Rule) -> RuleId {
        let id = self.rules.insert(rule);
        self.order.push(id);
        id
    }

    /// Insert a rule immediately after `anchor`.
    ///
    /// The position is resolved against the current document order, so the
    /// new rule lands directly behind the anchor no matter how many siblings
    /// were inserted before this call.
    ///
    /// # Panics
    ///
    /// Panics if `anchor` does not belong to this stylesheet.
    pub fn insert_after(&mut self, anchor: RuleId, rule: Rule) -> RuleId {
        let position = self
            .order
            .iter()
            .position(|id| *id == anchor)
            .unwrap_or_else(|| panic!("insert_after: anchor rule is not in this stylesheet"));
        let id = self.rules.insert(rule);
        self.order.insert(position + 1, id);
        id
    }

    /// Detach a rule from the sheet, returning it if it was present.
    pub fn remove(&mut self, id: RuleId) -> Option<Rule> {
        let rule = self.rules.remove(id)?;
        self.order.retain(|other| *other != id);
        Some(rule)
    }

    /// Get a rule by id.
    pub fn rule(&self, id: RuleId) -> Option<&Rule> {
        self.rules.get(id)
    }

    /// Get a mutable rule by id.
    pub fn rule_mut(&mut self, id: RuleId) -> Option<&mut Rule> {
        self.rules.get_mut(id)
    }

    /// Iterate over rule ids in document order.
    pub fn ids(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.order.iter().copied()
    }

    /// Iterate over rules in document order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.order.iter().map(|id| &self.rules[*id])
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the stylesheet is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Declaration;

    fn rule(selector: &str) -> Rule {
        Rule::new(selector, vec![Declaration::new("color", "red")])
    }

    #[test]
    fn push_keeps_document_order() {
        let mut sheet = Stylesheet::new();
        assert!(sheet.is_empty());

        sheet.push(rule(".a"));
        sheet.push(rule(".b"));
        sheet.push(rule(".c"));

        let selectors: Vec<_> = sheet.rules().map(|r| r.selector.as_str()).collect();
        assert_eq!(selectors, [".a", ".b", ".c"]);
        assert_eq!(sheet.len(), 3);
    }

    #[test]
    fn insert_after_mid_sheet() {
        let mut sheet = Stylesheet::new();
        let a = sheet.push(rule(".a"));
        sheet.push(rule(".c"));

        sheet.insert_after(a, rule(".b"));

        let selectors: Vec<_> = sheet.rules().map(|r| r.selector.as_str()).collect();
        assert_eq!(selectors, [".a", ".b", ".c"]);
    }

    #[test]
    fn repeated_insert_after_same_anchor() {
        // Each insertion lands directly behind the anchor, so the later
        // insertion ends up closer to it.
        let mut sheet = Stylesheet::new();
        let a = sheet.push(rule(".a"));

        sheet.insert_after(a, rule(".first"));
        sheet.insert_after(a, rule(".second"));

        let selectors: Vec<_> = sheet.rules().map(|r| r.selector.as_str()).collect();
        assert_eq!(selectors, [".a", ".second", ".first"]);
    }

    #[test]
    fn ids_stay_valid_across_insertions() {
        let mut sheet = Stylesheet::new();
        let a = sheet.push(rule(".a"));
        let b = sheet.push(rule(".b"));

        sheet.insert_after(a, rule(".x"));

        assert_eq!(sheet.rule(a).unwrap().selector, ".a");
        assert_eq!(sheet.rule(b).unwrap().selector, ".b");
    }

    #[test]
    fn remove_detaches_rule() {
        let mut sheet = Stylesheet::new();
        let a = sheet.push(rule(".a"));
        sheet.push(rule(".b"));

        let removed = sheet.remove(a).unwrap();

        assert_eq!(removed.selector, ".a");
        assert_eq!(sheet.len(), 1);
        assert!(sheet.rule(a).is_none());
        assert!(sheet.remove(a).is_none());
    }

    #[test]
    #[should_panic(expected = "anchor rule is not in this stylesheet")]
    fn insert_after_foreign_anchor_panics() {
        let mut other = Stylesheet::new();
        other.push(rule(".a"));
        let foreign = other.push(rule(".z"));

        let mut sheet = Stylesheet::new();
        sheet.push(rule(".b"));
        sheet.insert_after(foreign, rule(".c"));
    }
}
