mod request;
mod response;

pub use request::{CompletionRequest, build_request};
pub use response::{CompletionResponse, NumberRule, PlaceholderRule, SuggestionSet};
