//! HTTP request handlers - thin layer that delegates to domain service

use super::dto::*;
use super::error::{
    ApiError, INVALID_EMPLOYEE_ID, INVALID_PAGE, INVALID_PAGE_SIZE, INVALID_PAYLOAD,
    INVALID_QUERY, INVALID_SIZE,
};
use crate::domain::Service;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Query parameters for listing employees. Parsed by hand so that
/// non-numeric values get their own error messages.
#[derive(Debug, Deserialize)]
pub struct ListEmployeesQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

fn parse_query_number(
    raw: Option<&str>,
    default: i64,
    message: &'static str,
) -> Result<i64, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| ApiError::bad_request(message)),
    }
}

fn employee_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected employee id");
            Err(ApiError::bad_request(INVALID_EMPLOYEE_ID))
        }
    }
}

fn employee_payload(
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<CreateEmployeeRequest, ApiError> {
    match payload {
        Ok(Json(req)) => Ok(req),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected employee payload");
            Err(ApiError::bad_request(INVALID_PAYLOAD))
        }
    }
}

/// Create an employee
#[utoipa::path(
    post,
    path = "/employees",
    tag = "employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeDto),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn create_employee(
    Extension(service): Extension<Arc<Service>>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EmployeeDto>), ApiError> {
    let req = employee_payload(payload)?;

    let employee = service.create(req.into()).await?;

    Ok((StatusCode::CREATED, Json(employee.into())))
}

/// Get an employee by id
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeDto),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn get_employee(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<EmployeeDto>, ApiError> {
    let id = employee_id(path)?;

    let employee = service.get_by_id(id).await?;

    Ok(Json(employee.into()))
}

/// List employees page by page
#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    params(
        ("page" = Option<i64>, Query, description = "Page number, starting at 1 (default 1)"),
        ("size" = Option<i64>, Query, description = "Page size (default 10)"),
    ),
    responses(
        (status = 200, description = "Page of employees", body = [EmployeeDto]),
        (status = 400, description = "Invalid page or size", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_employees(
    Extension(service): Extension<Arc<Service>>,
    query: Result<Query<ListEmployeesQuery>, QueryRejection>,
) -> Result<Json<Vec<EmployeeDto>>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected list query");
        ApiError::bad_request(INVALID_QUERY)
    })?;

    let page = parse_query_number(query.page.as_deref(), DEFAULT_PAGE, INVALID_PAGE)?;
    let size = parse_query_number(query.size.as_deref(), DEFAULT_PAGE_SIZE, INVALID_SIZE)?;
    if page < 1 || size < 1 {
        return Err(ApiError::bad_request(INVALID_PAGE_SIZE));
    }

    let employees = service.list(page as u64, size as u64).await?;

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// Replace an employee's name, position and salary
#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    request_body = CreateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = ResultResponse),
        (status = 400, description = "Invalid id or payload", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn update_employee(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    let id = employee_id(path)?;
    let req = employee_payload(payload)?;

    service.update(id, req.into()).await?;

    Ok(Json(ResultResponse::success()))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee deleted", body = ResultResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn delete_employee(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    let id = employee_id(path)?;

    service.delete(id).await?;

    Ok(Json(ResultResponse::success()))
}
