//! Catalog API Bindings
//!
//! Editor-side bindings to the catalog backend, split by concern:
//! - error: failure taxonomy shared by every call
//! - relation: the `RelationApi` seam the editor is written against
//! - http: reqwest implementation of `RelationApi`

mod error;
mod http;
mod relation;

pub use error::{ApiError, ApiResult};
pub use http::HttpRelationApi;
pub use relation::RelationApi;
