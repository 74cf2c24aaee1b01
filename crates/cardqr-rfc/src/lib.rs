//! vCard construction and payload validation for cardqr.

pub mod error;
pub mod rfc;
