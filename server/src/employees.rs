//! REST surface for employee records.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use platform_api::{ApiError, ApiResult};
use products_hr::{Employee, HrError, NewEmployee};
use serde::Deserialize;
use tracing::instrument;

use crate::http::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/search", get(search_employees))
        .route(
            "/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

/// Map a domain failure onto the HTTP error envelope.
pub fn api_error(err: HrError) -> ApiError {
    match err {
        HrError::DuplicateResource { .. } => ApiError::DuplicateResource(err.to_string()),
        HrError::Invalid(message) => ApiError::InvalidInput(message),
        HrError::Store(source) => ApiError::internal(source.into()),
    }
}

fn payload<T>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))
}

fn path_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))
}

#[instrument(name = "http.employees.create", skip_all)]
async fn create_employee(
    State(state): State<AppState>,
    body: Result<Json<NewEmployee>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let new_employee = payload(body)?;
    let created = state
        .employees
        .create(new_employee)
        .await
        .map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(name = "http.employees.list", skip_all)]
async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    let employees = state.employees.list_all().await.map_err(api_error)?;
    Ok(Json(employees))
}

#[instrument(name = "http.employees.get", skip_all)]
async fn get_employee(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Response> {
    let id = path_id(path)?;
    let found = state.employees.get_by_id(id).await.map_err(api_error)?;
    Ok(match found {
        Some(employee) => Json(employee).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

#[instrument(name = "http.employees.update", skip_all)]
async fn update_employee(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<NewEmployee>, JsonRejection>,
) -> ApiResult<Response> {
    let id = path_id(path)?;
    let changes = payload(body)?.validated().map_err(api_error)?;
    let Some(mut employee) = state.employees.get_by_id(id).await.map_err(api_error)? else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };
    employee.apply(changes);
    let updated = state.employees.update(employee).await.map_err(api_error)?;
    Ok(Json(updated).into_response())
}

#[instrument(name = "http.employees.delete", skip_all)]
async fn delete_employee(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = path_id(path)?;
    state.employees.delete_by_id(id).await.map_err(api_error)?;
    Ok(StatusCode::OK)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NameQuery {
    first_name: String,
    last_name: String,
}

#[instrument(name = "http.employees.search", skip_all)]
async fn search_employees(
    State(state): State<AppState>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) =
        query.map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))?;
    let found = state
        .employees
        .find_by_name(&query.first_name, &query.last_name)
        .await
        .map_err(api_error)?;
    Ok(match found {
        Some(employee) => Json(employee).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}
