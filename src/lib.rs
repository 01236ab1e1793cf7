//! Reporting engine for employee business trips.
//!
//! This crate turns flat employee, trip and assignment records into the
//! structures a trips dashboard renders: a flattened trip listing, yearly
//! money-spent and trip-count series, and per-employee summaries.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
