use anyhow::Result;
use tracing::debug;

use crate::backend::CompletionBackend;
use crate::editor::{EditorSurface, Position};
use crate::facets::{FacetMode, FacetSink, FacetSource};
use crate::insert::apply_insertion;
use crate::protocol::{self, PlaceholderRule, SuggestionSet};
use crate::router::{Action, route};

/// Drives one autocompletion round per trigger keystroke: build the
/// request, call the backend, route the response into an insertion or a
/// facet handoff.
///
/// The embedding owns the event loop; it calls [`trigger`] from its
/// keystroke handler (with the key's default action suppressed) and this
/// controller mutates the editor and facet collaborator on that turn.
/// `trigger` takes `&mut self`, so rounds on one controller cannot
/// overlap.
///
/// [`trigger`]: AutocompletionController::trigger
pub struct AutocompletionController<E, F, B> {
    editor: E,
    facets: F,
    backend: B,
    engine: String,
}

impl<E, F, B> AutocompletionController<E, F, B>
where
    E: EditorSurface,
    F: FacetSink,
    B: CompletionBackend,
{
    pub fn new(editor: E, facets: F, backend: B, engine: impl Into<String>) -> Self {
        Self {
            editor,
            facets,
            backend,
            engine: engine.into(),
        }
    }

    /// Switch the backend grammar engine for subsequent rounds.
    pub fn update_engine(&mut self, engine: impl Into<String>) {
        self.engine = engine.into();
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    pub fn facets(&self) -> &F {
        &self.facets
    }

    /// Run one autocompletion round and report the action taken.
    ///
    /// Transport and decode failures propagate and leave the editor and
    /// facet state untouched (beyond the initial clear).
    pub async fn trigger(&mut self) -> Result<Action> {
        self.facets.clear_all_facets();

        let cursor = self.editor.cursor();
        let trigger_line = self.editor.line(cursor.line).unwrap_or_default();
        debug!(
            backend = self.backend.backend_name(),
            line = cursor.line,
            ch = cursor.ch,
            "requesting autocompletion"
        );

        let request =
            protocol::build_request(&self.editor.text(), cursor.line, cursor.ch, &self.engine);
        let response = self.backend.complete(&request).await?;
        let suggestions = response.decode()?;

        Ok(self.dispatch(&suggestions, &trigger_line, cursor))
    }

    /// Apply a decoded suggestion set against the live editor state.
    fn dispatch(
        &mut self,
        suggestions: &SuggestionSet,
        trigger_line: &str,
        cursor: Position,
    ) -> Action {
        self.facets.update_patterns(&suggestions.rules);

        // Re-read the line: the buffer may have changed since the request.
        let current_line = self.editor.line(cursor.line).unwrap_or_default();
        let routing = route(suggestions, trigger_line, &current_line, cursor.ch);

        if let Some(span) = &routing.select {
            self.editor.set_selection(
                Position::new(cursor.line, span.start),
                Position::new(cursor.line, span.end + 1),
            );
        }

        match &routing.action {
            Action::None => {}
            Action::Insert { value } => apply_insertion(&mut self.editor, value),
            Action::ExpressionFacets => self.facets.create_facets(
                FacetSource::Rules(&suggestions.rules),
                "expression",
                FacetMode::Patterns,
                false,
                None,
            ),
            Action::ValueFacets { rule } => self.facets.create_facets(
                FacetSource::Rules(&suggestions.rules),
                rule,
                FacetMode::Patterns,
                true,
                None,
            ),
            Action::NumberFacet { rule } => {
                let number = match suggestions.rules.get(rule) {
                    Some(PlaceholderRule::Number(number)) => Some(number),
                    _ => None,
                };
                self.facets.create_facets(
                    FacetSource::Rules(&suggestions.rules),
                    rule,
                    FacetMode::Number,
                    true,
                    number,
                );
            }
            Action::NextTokenFacets => self.facets.create_facets(
                FacetSource::Candidates(&suggestions.next_tokens),
                "next_tokens",
                FacetMode::Patterns,
                false,
                None,
            ),
        }

        routing.action
    }
}
