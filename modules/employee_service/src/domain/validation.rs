//! Input validation for employee payloads

use crate::contract::{EmployeeError, NewEmployee};
use rust_decimal::{Decimal, RoundingStrategy};

/// Scale of the `salary numeric(10,2)` column
pub const SALARY_SCALE: u32 = 2;

/// Exclusive upper bound on |salary| for `numeric(10,2)`
pub fn max_salary() -> Decimal {
    Decimal::new(100_000_000, 0)
}

/// Validate and normalize an employee payload
///
/// - `name` and `position` must contain a non-whitespace character
/// - `salary` is rounded half away from zero to two decimal places
/// - `salary` must fit `numeric(10,2)`
pub fn validate_new_employee(employee: NewEmployee) -> Result<NewEmployee, EmployeeError> {
    if employee.name.trim().is_empty() {
        return Err(EmployeeError::validation("name must not be empty"));
    }
    if employee.position.trim().is_empty() {
        return Err(EmployeeError::validation("position must not be empty"));
    }

    let salary = employee
        .salary
        .round_dp_with_strategy(SALARY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if salary.abs() >= max_salary() {
        return Err(EmployeeError::validation(format!(
            "salary {} is out of range",
            employee.salary
        )));
    }

    Ok(NewEmployee { salary, ..employee })
}

/// Largest LIMIT/OFFSET PostgreSQL accepts (`bigint`)
const MAX_WINDOW: u64 = i64::MAX as u64;

/// Validate page/size and compute the (limit, offset) window
pub fn page_window(page: u64, size: u64) -> Result<(u64, u64), EmployeeError> {
    if page < 1 || size < 1 || size > MAX_WINDOW {
        return Err(EmployeeError::validation("invalid page/size"));
    }
    let offset = (page - 1)
        .checked_mul(size)
        .filter(|offset| *offset <= MAX_WINDOW)
        .ok_or_else(|| EmployeeError::validation("invalid page/size"))?;
    Ok((size, offset))
}
