//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::domain::repositories::UrlRepository;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>) -> Self {
        Self { url_service }
    }

    /// Builds state over `repository` with the default random code generator.
    pub fn with_repository(repository: Arc<dyn UrlRepository>) -> Self {
        Self::with_generator(repository, Arc::new(RandomCodeGenerator))
    }

    pub fn with_generator(
        repository: Arc<dyn UrlRepository>,
        generator: Arc<dyn CodeGenerator>,
    ) -> Self {
        Self::new(Arc::new(UrlService::new(repository, generator)))
    }
}
