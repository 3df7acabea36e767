//! HTTP API module for shift management.
//!
//! This module exposes the records and operations of the crate as a JSON
//! CRUD surface: accounts, departments, employees, shifts and the shift
//! lifecycle actions.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchActionRequest, CreateShiftRequest, DepartmentListParams, ScheduleParams};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
