pub mod client;
pub mod schema;

pub use client::{generate_with_fallback, MenuApiClient, MenuApiConfig, REMOTE_TIMEOUT_SECS};
pub use schema::{
    build_request, convert_response, extract_constraints, pantry_staples, MenuGenerationRequest,
    MenuGenerationResponse, PriorityHint,
};
