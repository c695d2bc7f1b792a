use crate::domain::AppState;
use crate::domain::workflow::WorkflowEngine;
use crate::infrastructure::persistence::PgContentRepository;

pub mod http;
pub mod persistence;
pub mod settings;

/// Application state backed by the Postgres repository. One workflow
/// engine instance is shared by all request handlers.
#[derive(Clone)]
pub struct AppStateImpl {
    repository: PgContentRepository,
    workflow: WorkflowEngine<PgContentRepository>,
}

impl AppStateImpl {
    pub fn new(repository: PgContentRepository) -> Self {
        let workflow = WorkflowEngine::new(repository.clone());
        Self {
            repository,
            workflow,
        }
    }
}

impl AppState for AppStateImpl {
    type R = PgContentRepository;

    fn content_repository(&self) -> &Self::R {
        &self.repository
    }

    fn workflow(&self) -> &WorkflowEngine<Self::R> {
        &self.workflow
    }
}
