use tracing::warn;

use crate::placeholder::{self, PlaceholderMatch};
use crate::protocol::{PlaceholderRule, SuggestionSet};

/// What the client does with a suggestion response. The suggestion space
/// collapses to a direct insertion whenever it has exactly one member;
/// otherwise it defers to a facet-selection affordance. Placeholder context
/// always wins over next-token context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do; covers client/server grammar drift.
    None,
    /// Write `value` into the editor.
    Insert { value: String },
    /// General entry point for a blank line, context `"expression"`.
    ExpressionFacets,
    /// Multi-choice value list for the named placeholder rule.
    ValueFacets { rule: String },
    /// Numeric input for the named placeholder rule.
    NumberFacet { rule: String },
    /// Candidate-group list, context `"next_tokens"`.
    NextTokenFacets,
}

/// Routing outcome: the placeholder span to select (when the cursor sits in
/// one) plus the action to take. The span is selected even when the rule
/// name is unknown and the action degrades to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routing {
    pub select: Option<PlaceholderMatch>,
    pub action: Action,
}

/// Decide the next UI step from a decoded suggestion set.
///
/// `trigger_line` is the cursor line as it read when the request was
/// issued; `current_line` is the same line re-read at response time, which
/// may differ if the buffer changed in between. The blank-line check uses
/// the trigger-time content, the placeholder re-scan uses the current
/// content, both at the trigger column.
pub fn route(
    suggestions: &SuggestionSet,
    trigger_line: &str,
    current_line: &str,
    cursor_ch: usize,
) -> Routing {
    if trigger_line.trim().is_empty() {
        return Routing {
            select: None,
            action: Action::ExpressionFacets,
        };
    }

    if let Some(found) = placeholder::find_enclosing_placeholder(current_line, cursor_ch) {
        let action = match suggestions.rules.get(&found.content) {
            Some(PlaceholderRule::Values { values }) if values.len() == 1 => Action::Insert {
                value: values[0].clone(),
            },
            Some(PlaceholderRule::Values { .. }) => Action::ValueFacets {
                rule: found.content.clone(),
            },
            Some(PlaceholderRule::Number(number)) if number.params == "number" => {
                Action::NumberFacet {
                    rule: found.content.clone(),
                }
            }
            Some(_) => Action::None,
            None => {
                warn!(rule = %found.content, "placeholder has no matching rule");
                Action::None
            }
        };
        return Routing {
            select: Some(found),
            action,
        };
    }

    let single = (suggestions.next_tokens.len() == 1)
        .then(|| suggestions.next_tokens.values().next())
        .flatten()
        .filter(|literals| literals.len() == 1)
        .and_then(|literals| literals.first());

    Routing {
        select: None,
        action: match single {
            Some(value) => Action::Insert {
                value: value.clone(),
            },
            None => Action::NextTokenFacets,
        },
    }
}
