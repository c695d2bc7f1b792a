pub mod engine;
pub mod error;
pub mod policy;
pub mod preconditions;
pub mod transition;

pub use engine::WorkflowEngine;
pub use error::{Denial, WorkflowError};
pub use preconditions::FieldViolation;
pub use transition::{TransitionOutcome, TransitionPlan, TransitionRequest};
