//! HTTP Handlers

pub mod admin;
pub mod vendor;

use std::sync::Arc;

use auth::{AuthConfig, CredentialService, SessionGate, SessionService};

use crate::domain::repository::MarketplaceRepository;

/// Shared state for marketplace handlers
#[derive(Clone)]
pub struct MarketplaceState<R>
where
    R: MarketplaceRepository,
{
    pub repo: Arc<R>,
    pub sessions: Arc<SessionService>,
    pub credentials: Arc<CredentialService>,
}

impl<R> MarketplaceState<R>
where
    R: MarketplaceRepository,
{
    pub fn new(repo: R, config: &AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            sessions: Arc::new(SessionService::new(config)),
            credentials: Arc::new(CredentialService::new(config)),
        }
    }

    /// Authentication gate sharing this state's session service
    pub fn gate(&self) -> SessionGate {
        SessionGate::new(self.sessions.clone())
    }
}
