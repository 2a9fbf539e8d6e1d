use indexmap::IndexMap;
use std::collections::HashMap;

use crate::protocol::{NumberRule, PlaceholderRule};

/// Presentation mode of a facet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetMode {
    /// Enumerable choices.
    Patterns,
    /// Numeric input with a unit label.
    Number,
}

/// What a facet list is built from: placeholder rules or next-token
/// candidate groups.
#[derive(Debug, Clone, Copy)]
pub enum FacetSource<'a> {
    Rules(&'a HashMap<String, PlaceholderRule>),
    Candidates(&'a IndexMap<String, Vec<String>>),
}

/// The facet-selection UI collaborator. Rendering is outside this core;
/// the controller only pushes pattern updates and facet requests through
/// this seam.
pub trait FacetSink {
    /// Refresh the collaborator's pattern registry. Called on every
    /// successful round, whether or not a facet list is shown.
    fn update_patterns(&mut self, rules: &HashMap<String, PlaceholderRule>);

    fn create_facets(
        &mut self,
        source: FacetSource<'_>,
        context_key: &str,
        mode: FacetMode,
        multi: bool,
        number: Option<&NumberRule>,
    );

    fn clear_all_facets(&mut self);
}

/// Owned snapshot of a [`FacetSource`], kept by [`RecordingFacets`].
#[derive(Debug, Clone, PartialEq)]
pub enum FacetPayload {
    Rules(HashMap<String, PlaceholderRule>),
    Candidates(IndexMap<String, Vec<String>>),
}

/// One recorded `create_facets` call.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetCall {
    pub payload: FacetPayload,
    pub context_key: String,
    pub mode: FacetMode,
    pub multi: bool,
    pub number: Option<NumberRule>,
}

/// Facet sink that records every interaction, for tests and headless use.
#[derive(Debug, Default)]
pub struct RecordingFacets {
    pub patterns: HashMap<String, PlaceholderRule>,
    pub created: Vec<FacetCall>,
    pub cleared: usize,
}

impl RecordingFacets {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FacetSink for RecordingFacets {
    fn update_patterns(&mut self, rules: &HashMap<String, PlaceholderRule>) {
        self.patterns = rules.clone();
    }

    fn create_facets(
        &mut self,
        source: FacetSource<'_>,
        context_key: &str,
        mode: FacetMode,
        multi: bool,
        number: Option<&NumberRule>,
    ) {
        let payload = match source {
            FacetSource::Rules(rules) => FacetPayload::Rules(rules.clone()),
            FacetSource::Candidates(groups) => FacetPayload::Candidates(groups.clone()),
        };
        self.created.push(FacetCall {
            payload,
            context_key: context_key.to_string(),
            mode,
            multi,
            number: number.cloned(),
        });
    }

    fn clear_all_facets(&mut self) {
        self.cleared += 1;
    }
}
