//! Shared settings, errors and types for cardqr.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
