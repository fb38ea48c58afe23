//! Request/response shapes shared with the HTTP layer.

pub mod search_request;
pub mod search_response;

pub use search_request::{JobSearchParams, WorkerSearchParams};
pub use search_response::{JobView, SearchResponse};
