use std::convert::Infallible;
use std::ops::Deref;
use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::ServiceState;

#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("one or more dependencies aren't available")]
    DependencyFailure,
    #[error("service is shutting down")]
    ShuttingDown,
}

/// Anything the readiness probe depends on
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn is_ready(&self) -> Result<(), DataSourceError>;
}

#[derive(Clone)]
pub struct StateDataSource(Arc<dyn DataSource>);

impl StateDataSource {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self(source)
    }
}

impl std::fmt::Debug for StateDataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateDataSource").finish_non_exhaustive()
    }
}

impl Deref for StateDataSource {
    type Target = dyn DataSource;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[async_trait]
impl FromRequestParts<ServiceState> for StateDataSource {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &ServiceState,
    ) -> Result<Self, Self::Rejection> {
        Ok(StateDataSource::new(Arc::new(state.clone())))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) enum MockReadiness {
        Ready,
        DependencyFailure,
        ShuttingDown,
    }

    #[async_trait]
    impl DataSource for MockReadiness {
        async fn is_ready(&self) -> Result<(), DataSourceError> {
            match self {
                MockReadiness::Ready => Ok(()),
                MockReadiness::DependencyFailure => Err(DataSourceError::DependencyFailure),
                MockReadiness::ShuttingDown => Err(DataSourceError::ShuttingDown),
            }
        }
    }
}
