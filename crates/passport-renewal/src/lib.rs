//! Eligibility rules backing the passport renewal intake form.
//!
//! The evaluator lives in [`workflows::passport_renewal`]; the remaining modules carry the
//! configuration, logging, clock and error plumbing shared with the HTTP service.

pub mod clock;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
