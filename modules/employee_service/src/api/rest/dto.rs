//! REST DTOs with serde derives for HTTP API

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// Employee response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeDto {
    /// Server-assigned identifier
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "test employee")]
    pub name: String,

    #[schema(example = "software engineer")]
    pub position: String,

    /// Salary, serialized as a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 23000.22)]
    pub salary: Decimal,
}

/// Create/update employee request. Any `id` in the body is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateEmployeeRequest {
    #[schema(example = "test employee")]
    pub name: String,

    #[schema(example = "software engineer")]
    pub position: String,

    /// Defaults to 0.00 when absent or null
    #[serde(default, deserialize_with = "salary_number")]
    #[schema(value_type = Option<f64>, example = 23000.22)]
    pub salary: Decimal,
}

/// Accepts a JSON number or null; strings are a type error.
fn salary_number<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(Decimal::ZERO),
        Some(value) => Decimal::from_str(&value.to_string())
            .map_err(|_| de::Error::invalid_value(de::Unexpected::Float(value), &"a salary")),
    }
}

/// Body of a successful update or delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultResponse {
    #[schema(example = "success")]
    pub result: String,
}

impl ResultResponse {
    pub fn success() -> Self {
        Self {
            result: "success".to_string(),
        }
    }
}

/// Error body returned with every non-2xx status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "employee not found")]
    pub error: String,
}
