//! Commands Layer
//!
//! HTTP route handlers that bridge the admin client to the repositories.

mod auth;
mod page_cmd;
mod parent_cmd;
mod relation_cmd;
mod response;

use axum::middleware;
use axum::routing::get;
use axum::Router;

use crate::AppState;

pub use page_cmd::*;
pub use parent_cmd::*;
pub use relation_cmd::*;
pub use response::{ApiError, ApiResponse, ApiResult};

/// Every catalog route, bearer guarded, to be nested under `/api`
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/coloring-pages", get(list_pages).post(create_page))
        .route(
            "/coloring-pages/{id}",
            get(get_page).put(update_page).delete(delete_page),
        )
        .route("/{parent_type}", get(list_parents))
        .route("/{parent_type}/{id}", get(get_parent))
        .route(
            "/{parent_type}/{id}/coloring-pages",
            get(list_related).post(add_related).delete(remove_related),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_bearer))
        .with_state(state)
}
