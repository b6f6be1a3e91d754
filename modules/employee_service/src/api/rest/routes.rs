//! Route registration

use super::{handlers, openapi};
use crate::domain::Service;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;

/// Register all REST routes. The service reaches handlers as an extension.
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route(
            "/employees",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route(
            "/employees/{id}",
            get(handlers::get_employee)
                .put(handlers::update_employee)
                .delete(handlers::delete_employee),
        )
        .route("/openapi.json", get(openapi::openapi_json))
        .layer(Extension(service))
}
