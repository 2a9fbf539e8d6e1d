pub mod backend;
pub mod config;
pub mod controller;
pub mod editor;
pub mod facets;
pub mod insert;
pub mod placeholder;
pub mod protocol;
pub mod router;

pub use backend::{BackendError, CompletionBackend, HttpBackend, MockBackend};
pub use config::AssistConfig;
pub use controller::AutocompletionController;
pub use editor::{EditorSurface, Position, TextBuffer};
pub use facets::{FacetMode, FacetSink, FacetSource, RecordingFacets};
pub use insert::apply_insertion;
pub use placeholder::{PlaceholderMatch, find_enclosing_placeholder, has_placeholder};
pub use protocol::{
    CompletionRequest, CompletionResponse, NumberRule, PlaceholderRule, SuggestionSet,
    build_request,
};
pub use router::{Action, Routing, route};
