// ============================================================================
// Portal Infrastructure - In-Memory User Repository
// File: crates/portal-infrastructure/src/directory/memory/user_repo_impl.rs
// ============================================================================

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, error};
use uuid::Uuid;

use portal_core::domain::PortalUser;
use portal_core::error::DomainError;
use portal_core::repositories::UserRepository;

/// User directory held in memory, optionally seeded from a JSON file.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, PortalUser>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<PortalUser>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().map(|u| (u.id, u)).collect()),
        }
    }

    /// Loads a JSON array of users.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            error!("Failed to read user directory {}: {}", path.display(), e);
            DomainError::DirectoryError(format!("{}: {}", path.display(), e))
        })?;
        let users: Vec<PortalUser> = serde_json::from_str(&raw)
            .map_err(|e| DomainError::DirectoryError(format!("{}: {}", path.display(), e)))?;

        info!("Loaded {} users from {}", users.len(), path.display());
        Ok(Self::with_users(users))
    }

    pub async fn insert(&self, user: PortalUser) {
        self.users.write().await.insert(user.id, user);
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<PortalUser>, DomainError> {
        Ok(self.users.read().await.get(id).cloned())
    }
}
