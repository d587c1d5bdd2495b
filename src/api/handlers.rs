use crate::core::aggregator::EmployeeAggregator;
use crate::core::{Employee, EmployeeCreateRequest, EmployeeSource};
use crate::utils::error::{FacadeError, Result};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

pub type SharedAggregator<S> = Arc<EmployeeAggregator<S>>;

/// Handler for GET /api/v1/employee
pub async fn list_employees<S: EmployeeSource + 'static>(
    State(aggregator): State<SharedAggregator<S>>,
) -> Result<Json<Vec<Employee>>> {
    Ok(Json(aggregator.list_all().await?))
}

/// Handler for GET /api/v1/employee/search/:search_string
pub async fn search_employees<S: EmployeeSource + 'static>(
    State(aggregator): State<SharedAggregator<S>>,
    Path(search_string): Path<String>,
) -> Result<Json<Vec<Employee>>> {
    Ok(Json(aggregator.search_by_name(&search_string).await?))
}

/// Handler for GET /api/v1/employee/:id
pub async fn get_employee<S: EmployeeSource + 'static>(
    State(aggregator): State<SharedAggregator<S>>,
    Path(id): Path<String>,
) -> Result<Json<Employee>> {
    Ok(Json(aggregator.get_by_id(&id).await?))
}

/// Handler for GET /api/v1/employee/highestSalary
///
/// Answers 204 when there is nobody to compare.
pub async fn highest_salary<S: EmployeeSource + 'static>(
    State(aggregator): State<SharedAggregator<S>>,
) -> Result<Response> {
    let response = match aggregator.highest_salary().await? {
        Some(salary) => Json(salary).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    };
    Ok(response)
}

/// Handler for GET /api/v1/employee/topTenHighestEarningEmployeeNames
pub async fn top_ten_earning_names<S: EmployeeSource + 'static>(
    State(aggregator): State<SharedAggregator<S>>,
) -> Result<Json<Vec<String>>> {
    Ok(Json(aggregator.top_ten_earning_names().await?))
}

/// Handler for POST /api/v1/employee
///
/// Bodies that cannot be read as a create request are rejected the same way
/// as ones that fail field validation.
pub async fn create_employee<S: EmployeeSource + 'static>(
    State(aggregator): State<SharedAggregator<S>>,
    payload: std::result::Result<Json<EmployeeCreateRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(request) =
        payload.map_err(|rejection| FacadeError::validation("body", rejection.body_text()))?;
    let employee = aggregator.create(&request).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for DELETE /api/v1/employee/:id
pub async fn delete_employee<S: EmployeeSource + 'static>(
    State(aggregator): State<SharedAggregator<S>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    aggregator.delete_by_id(&id).await?;
    Ok((
        StatusCode::OK,
        format!("Employee with ID {} deleted successfully.", id),
    ))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
