//! Application services - the run gate and the check pipeline

mod check_service;
mod run_gate;

pub use check_service::{CheckOutcome, CheckRun, CheckService, DispatchOutcome};
pub use run_gate::{GateDecision, GatePolicy};
