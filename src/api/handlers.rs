//! HTTP request handlers for the shift management API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ShiftResult;
use crate::models::{
    AccountId, AccountSummary, AnalyticAccount, Department, DepartmentId, DepartmentSummary,
    Employee, EmployeeId, EmployeeSummary, NewAccount, NewDepartment, NewEmployee, Shift,
    ShiftAction, ShiftId, ShiftUpdate,
};
use crate::repository::ShiftQuery;

use super::request::{BatchActionRequest, CreateShiftRequest, DepartmentListParams, ScheduleParams};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/accounts", post(create_account_handler))
        .route("/accounts/:id", get(get_account_handler))
        .route("/accounts/:id/employees", get(account_employees_handler))
        .route("/accounts/:id/shifts", get(account_shifts_handler))
        .route(
            "/departments",
            post(create_department_handler).get(list_departments_handler),
        )
        .route("/departments/:id", get(get_department_handler))
        .route(
            "/departments/:id/employees",
            get(department_employees_handler),
        )
        .route("/departments/:id/archive", post(archive_department_handler))
        .route(
            "/departments/:id/unarchive",
            post(unarchive_department_handler),
        )
        .route("/employees", post(create_employee_handler))
        .route("/employees/:id", get(get_employee_handler))
        .route("/employees/:id/schedule", get(employee_schedule_handler))
        .route(
            "/employees/:id/shifts/:shift_id",
            post(assign_shift_handler).delete(unassign_shift_handler),
        )
        .route(
            "/shifts",
            post(create_shift_handler).get(list_shifts_handler),
        )
        .route(
            "/shifts/:id",
            get(get_shift_handler)
                .patch(update_shift_handler)
                .delete(delete_shift_handler),
        )
        .route("/shifts/:id/:action", post(shift_action_handler))
        .route("/shift-actions/:action", post(batch_action_handler))
        .with_state(state)
}

/// Unwraps a JSON body, mapping rejections to API errors.
fn parse_body<T: DeserializeOwned>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> ApiResult<T> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error))
}

/// Unwraps path parameters, mapping rejections to API errors.
fn parse_path<T>(path: Result<Path<T>, PathRejection>, correlation_id: Uuid) -> ApiResult<T> {
    path.map(|Path(value)| value).map_err(|rejection| {
        let body_text = rejection.body_text();
        warn!(
            correlation_id = %correlation_id,
            error = %body_text,
            "Path rejected"
        );
        ApiErrorResponse::bad_request(ApiError::invalid_path(body_text))
    })
}

/// Unwraps a query string, mapping rejections to API errors.
fn parse_query<T>(query: Result<Query<T>, QueryRejection>, correlation_id: Uuid) -> ApiResult<T> {
    query.map(|Query(value)| value).map_err(|rejection| {
        let body_text = rejection.body_text();
        warn!(
            correlation_id = %correlation_id,
            error = %body_text,
            "Query string rejected"
        );
        ApiErrorResponse::bad_request(ApiError::invalid_query(body_text))
    })
}

/// Logs the outcome of a repository call and converts its error.
fn finish<T>(result: ShiftResult<T>, correlation_id: Uuid, operation: &str) -> ApiResult<T> {
    match result {
        Ok(value) => {
            info!(correlation_id = %correlation_id, operation, "Request completed");
            Ok(value)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                operation,
                error = %err,
                "Request failed"
            );
            Err(err.into())
        }
    }
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

// -----------------------------------------------------------------------------
// Analytic accounts
// -----------------------------------------------------------------------------

async fn create_account_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewAccount>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AnalyticAccount>)> {
    let correlation_id = Uuid::new_v4();
    let input = parse_body(payload, correlation_id)?;
    let result = state.repository().write().await.create_account(input);
    let account = finish(result, correlation_id, "create_account")?;
    Ok((StatusCode::CREATED, Json(account)))
}

async fn get_account_handler(
    State(state): State<AppState>,
    path: Result<Path<AccountId>, PathRejection>,
) -> ApiResult<Json<AccountSummary>> {
    let correlation_id = Uuid::new_v4();
    let id = parse_path(path, correlation_id)?;
    let result = state.repository().read().await.account_summary(id);
    finish(result, correlation_id, "get_account").map(Json)
}

async fn account_employees_handler(
    State(state): State<AppState>,
    path: Result<Path<AccountId>, PathRejection>,
) -> ApiResult<Json<Vec<Employee>>> {
    let correlation_id = Uuid::new_v4();
    let id = parse_path(path, correlation_id)?;
    let result = state.repository().read().await.account_employees(id);
    finish(result, correlation_id, "account_employees").map(Json)
}

async fn account_shifts_handler(
    State(state): State<AppState>,
    path: Result<Path<AccountId>, PathRejection>,
) -> ApiResult<Json<Vec<Shift>>> {
    let correlation_id = Uuid::new_v4();
    let id = parse_path(path, correlation_id)?;
    let result = state.repository().read().await.account_shifts(id);
    finish(result, correlation_id, "account_shifts").map(Json)
}

// -----------------------------------------------------------------------------
// Departments
// -----------------------------------------------------------------------------

async fn create_department_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewDepartment>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Department>)> {
    let correlation_id = Uuid::new_v4();
    let input = parse_body(payload, correlation_id)?;
    let result = state.repository().write().await.create_department(input);
    let department = finish(result, correlation_id, "create_department")?;
    Ok((StatusCode::CREATED, Json(department)))
}

async fn list_departments_handler(
    State(state): State<AppState>,
    query: Result<Query<DepartmentListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Department>>> {
    let params = parse_query(query, Uuid::new_v4())?;
    let departments = state
        .repository()
        .read()
        .await
        .list_departments(params.include_archived);
    Ok(Json(departments))
}

async fn get_department_handler(
    State(state): State<AppState>,
    path: Result<Path<DepartmentId>, PathRejection>,
) -> ApiResult<Json<DepartmentSummary>> {
    let correlation_id = Uuid::new_v4();
    let id = parse_path(path, correlation_id)?;
    let result = state.repository().read().await.department_summary(id);
    finish(result, correlation_id, "get_department").map(Json)
}

async fn department_employees_handler(
    State(state): State<AppState>,
    path: Result<Path<DepartmentId>, PathRejection>,
) -> ApiResult<Json<Vec<Employee>>> {
    let correlation_id = Uuid::new_v4();
    let id = parse_path(path, correlation_id)?;
    let result = state.repository().read().await.department_employees(id);
    finish(result, correlation_id, "department_employees").map(Json)
}

async fn archive_department_handler(
    State(state): State<AppState>,
    path: Result<Path<DepartmentId>, PathRejection>,
) -> ApiResult<Json<Department>> {
    let correlation_id = Uuid::new_v4();
    let id = parse_path(path, correlation_id)?;
    let result = state
        .repository()
        .write()
        .await
        .set_department_active(id, false);
    finish(result, correlation_id, "archive_department").map(Json)
}

async fn unarchive_department_handler(
    State(state): State<AppState>,
    path: Result<Path<DepartmentId>, PathRejection>,
) -> ApiResult<Json<Department>> {
    let correlation_id = Uuid::new_v4();
    let id = parse_path(path, correlation_id)?;
    let result = state
        .repository()
        .write()
        .await
        .set_department_active(id, true);
    finish(result, correlation_id, "unarchive_department").map(Json)
}

// -----------------------------------------------------------------------------
// Employees
// -----------------------------------------------------------------------------

async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let correlation_id = Uuid::new_v4();
    let input = parse_body(payload, correlation_id)?;
    let result = state.repository().write().await.create_employee(input);
    let employee = finish(result, correlation_id, "create_employee")?;
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn get_employee_handler(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
) -> ApiResult<Json<EmployeeSummary>> {
    let correlation_id = Uuid::new_v4();
    let id = parse_path(path, correlation_id)?;
    let today = state.today();
    let result = state.repository().read().await.employee_summary(id, today);
    finish(result, correlation_id, "get_employee").map(Json)
}

async fn employee_schedule_handler(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
    query: Result<Query<ScheduleParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Shift>>> {
    let correlation_id = Uuid::new_v4();
    let id = parse_path(path, correlation_id)?;
    let params = parse_query(query, correlation_id)?;
    let today = state.today();
    let repository = state.repository().read().await;
    let result = repository.shift_schedule(id, today, params.start_date, params.end_date);
    finish(result, correlation_id, "employee_schedule").map(Json)
}

async fn assign_shift_handler(
    State(state): State<AppState>,
    path: Result<Path<(EmployeeId, ShiftId)>, PathRejection>,
) -> ApiResult<Json<Shift>> {
    let correlation_id = Uuid::new_v4();
    let (id, shift_id) = parse_path(path, correlation_id)?;
    let result = state.repository().write().await.assign_shift(id, shift_id);
    finish(result, correlation_id, "assign_shift").map(Json)
}

async fn unassign_shift_handler(
    State(state): State<AppState>,
    path: Result<Path<(EmployeeId, ShiftId)>, PathRejection>,
) -> ApiResult<Json<Shift>> {
    let correlation_id = Uuid::new_v4();
    let (id, shift_id) = parse_path(path, correlation_id)?;
    let result = state.repository().write().await.unassign_shift(id, shift_id);
    finish(result, correlation_id, "unassign_shift").map(Json)
}

// -----------------------------------------------------------------------------
// Shifts
// -----------------------------------------------------------------------------

async fn create_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShiftRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Shift>)> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create shift request");

    let request = parse_body(payload, correlation_id)?;
    let input = request.into_new_shift(state.today());
    let company_id = state.config().company_id();
    let result = state
        .repository()
        .write()
        .await
        .create_shift(input, company_id);
    let shift = finish(result, correlation_id, "create_shift")?;
    Ok((StatusCode::CREATED, Json(shift)))
}

async fn list_shifts_handler(
    State(state): State<AppState>,
    query: Result<Query<ShiftQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Shift>>> {
    let query = parse_query(query, Uuid::new_v4())?;
    Ok(Json(state.repository().read().await.list_shifts(&query)))
}

async fn get_shift_handler(
    State(state): State<AppState>,
    path: Result<Path<ShiftId>, PathRejection>,
) -> ApiResult<Json<Shift>> {
    let correlation_id = Uuid::new_v4();
    let id = parse_path(path, correlation_id)?;
    let result = state.repository().read().await.shift(id);
    finish(result, correlation_id, "get_shift").map(Json)
}

async fn update_shift_handler(
    State(state): State<AppState>,
    path: Result<Path<ShiftId>, PathRejection>,
    payload: Result<Json<ShiftUpdate>, JsonRejection>,
) -> ApiResult<Json<Shift>> {
    let correlation_id = Uuid::new_v4();
    let id = parse_path(path, correlation_id)?;
    let update = parse_body(payload, correlation_id)?;
    let result = state.repository().write().await.update_shift(id, update);
    finish(result, correlation_id, "update_shift").map(Json)
}

async fn delete_shift_handler(
    State(state): State<AppState>,
    path: Result<Path<ShiftId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    let id = parse_path(path, correlation_id)?;
    let result = state.repository().write().await.delete_shift(id);
    finish(result, correlation_id, "delete_shift")?;
    Ok(StatusCode::NO_CONTENT)
}

async fn shift_action_handler(
    State(state): State<AppState>,
    path: Result<Path<(ShiftId, ShiftAction)>, PathRejection>,
) -> ApiResult<Json<Shift>> {
    let correlation_id = Uuid::new_v4();
    let (id, action) = parse_path(path, correlation_id)?;
    let result = state.repository().write().await.apply_action(id, action);
    finish(result, correlation_id, "shift_action").map(Json)
}

async fn batch_action_handler(
    State(state): State<AppState>,
    path: Result<Path<ShiftAction>, PathRejection>,
    payload: Result<Json<BatchActionRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<Shift>>> {
    let correlation_id = Uuid::new_v4();
    let action = parse_path(path, correlation_id)?;
    let request = parse_body(payload, correlation_id)?;
    let result = state
        .repository()
        .write()
        .await
        .apply_action_many(&request.ids, action);
    finish(result, correlation_id, "batch_action").map(Json)
}
