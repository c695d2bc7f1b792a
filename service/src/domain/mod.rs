use crate::domain::repository::ContentRepository;
use crate::domain::workflow::WorkflowEngine;

pub mod content;
pub mod repository;
pub mod workflow;

/// The global application state shared between all request handlers.
pub trait AppState: Clone + Send + Sync + 'static {
    type R: ContentRepository;

    fn content_repository(&self) -> &Self::R;
    fn workflow(&self) -> &WorkflowEngine<Self::R>;
}
