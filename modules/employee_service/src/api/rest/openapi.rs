//! OpenAPI document for the employee endpoints

use super::{dto::*, handlers};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Employee Service", description = "CRUD over employee records"),
    paths(
        handlers::create_employee,
        handlers::list_employees,
        handlers::get_employee,
        handlers::update_employee,
        handlers::delete_employee,
    ),
    components(schemas(EmployeeDto, CreateEmployeeRequest, ResultResponse, ErrorResponse)),
    tags((name = "employees", description = "Employee records"))
)]
pub struct ApiDoc;

/// Serve the generated document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
