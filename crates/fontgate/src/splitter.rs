//! The web font rule-splitting transform.

use fontgate_css::{Declaration, Rule, RuleId, Stylesheet};

use crate::config::SplitterConfig;

/// A web font declaration detached during the collection pass, waiting to be
/// re-attached to a gated sibling rule.
///
/// Created while walking the tree and consumed in collection order once the
/// walk is over; structural edits never happen mid-walk.
struct PendingMove {
    /// The rule the declaration came from.
    rule: RuleId,
    /// The detached declaration.
    declaration: Declaration,
    /// Document-order position of the rule at walk time. Diagnostic only;
    /// insertion resolves against the rule's live position instead.
    index: usize,
}

/// Splits web font rules so their `font-family` declarations only apply once
/// a marker class is present on the document.
///
/// For every rule declaring a configured web font family, the matching
/// declaration is moved into a new sibling rule inserted immediately after
/// the original, with the selector rewritten to require the marker class:
///
/// ```text
/// .a { font-family: "MyWebFont", sans-serif; color: red; }
/// ```
///
/// becomes
///
/// ```text
/// .a { color: red; }
/// .wf-loaded .a { font-family: "MyWebFont", sans-serif; }
/// ```
///
/// A bare `html` selector part is rewritten to `html.wf-loaded` rather than
/// prefixed. Rules emptied by the move are left in place.
///
/// The transform never fails: with no configured families (or no matching
/// declarations) it leaves the sheet untouched. It is not idempotent:
/// applying it twice gates the generated rules a second time.
#[derive(Debug, Clone)]
pub struct RuleSplitter {
    config: SplitterConfig,
}

impl RuleSplitter {
    /// Create a splitter with the given configuration.
    pub fn new(config: SplitterConfig) -> Self {
        Self { config }
    }

    /// Rewrite `sheet` in place.
    pub fn transform(&self, sheet: &mut Stylesheet) {
        let pending = self.collect(sheet);
        for pending_move in pending {
            self.insert(sheet, pending_move);
        }
    }

    /// Collection pass: detach every matching `font-family` declaration and
    /// record where it came from. No sibling rules are touched here.
    fn collect(&self, sheet: &mut Stylesheet) -> Vec<PendingMove> {
        let mut pending = vec![];
        let ids: Vec<RuleId> = sheet.ids().collect();

        for (index, id) in ids.into_iter().enumerate() {
            let Some(rule) = sheet.rule_mut(id) else {
                continue;
            };

            let mut i = 0;
            while i < rule.declarations.len() {
                let declaration = &rule.declarations[i];
                if declaration.property == "font-family"
                    && is_web_font(&declaration.value, &self.config.families)
                {
                    let declaration = rule.remove_declaration(i);
                    tracing::debug!(
                        rule = index,
                        value = %declaration.value,
                        "detached web font declaration"
                    );
                    pending.push(PendingMove {
                        rule: id,
                        declaration,
                        index,
                    });
                } else {
                    i += 1;
                }
            }
        }

        pending
    }

    /// Insertion pass: attach one detached declaration to a new gated rule
    /// placed immediately after its origin.
    fn insert(&self, sheet: &mut Stylesheet, pending_move: PendingMove) {
        let origin = sheet
            .rule(pending_move.rule)
            .unwrap_or_else(|| panic!("pending move references a rule missing from the sheet"));
        let selector = gated_selector(&origin.selector, &self.config.class_name);

        tracing::debug!(
            rule = pending_move.index,
            selector = %selector,
            "inserting gated sibling rule"
        );
        let gated = Rule::new(selector, vec![pending_move.declaration]);
        sheet.insert_after(pending_move.rule, gated);
    }
}

/// Whether a raw `font-family` value names a configured web font.
///
/// The value is split on `,` and a token matches when it contains one of the
/// configured family names as a substring, so `"MyWebFont", sans-serif`
/// matches the family `MyWebFont` quotes and all. An empty family list
/// matches nothing.
fn is_web_font(value: &str, families: &[String]) -> bool {
    value
        .split(',')
        .any(|token| families.iter().any(|family| token.contains(family.as_str())))
}

/// Rewrite a selector so it requires the marker class.
///
/// Each comma-separated part is prefixed with `.<class> `; a part that is
/// exactly `html` becomes `html.<class>` instead. Parts are trimmed and
/// rejoined with bare commas.
fn gated_selector(selector: &str, class_name: &str) -> String {
    selector
        .split(',')
        .map(|part| {
            let part = part.trim();
            if part == "html" {
                format!("html.{class_name}")
            } else {
                format!(".{class_name} {part}")
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
