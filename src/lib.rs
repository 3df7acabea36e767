//! Shift management for HR scheduling.
//!
//! This crate models work shifts booked against analytic accounts, the
//! departments and employees that staff them, and the derived values built on
//! top: shift duration, weekly worked hours and per-employee schedules. An
//! axum JSON API exposes the records over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod locale;
pub mod logging;
pub mod models;
pub mod repository;
pub mod scheduling;
