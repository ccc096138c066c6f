//! The requirement-checking engine.
//!
//! This module provides the types a command uses to describe what it needs
//! from the host machine, and the runner that checks them.
//!
//! # Modules
//!
//! - [`requirement`] - [`Requirement`], [`RequirementList`] and [`CommandRequirements`]
//! - [`result`] - per-check and aggregate outcomes
//! - [`processor`] - the concurrent checklist runner
//! - [`context`] - explicit environment passed to built-in checks
//! - [`checks`] - constructors for common checks
//! - [`probe`] - PATH lookup helpers

pub mod checks;
pub mod context;
pub mod probe;
pub mod processor;
pub mod requirement;
pub mod result;

pub use context::CheckContext;
pub use processor::{compose_message, run_requirement, RequirementProcessor};
pub use requirement::{CheckFn, CheckOutcome, CommandRequirements, Requirement, RequirementList};
pub use result::{RequirementCheckResult, RequirementResult};
