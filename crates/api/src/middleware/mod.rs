//! Request extractors shared by the handlers.

pub mod path_params;
pub mod validated_json;

pub use path_params::PathParams;
pub use validated_json::ValidatedJson;
