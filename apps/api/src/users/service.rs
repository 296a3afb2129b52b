use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::models::user::User;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence seam for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<(), UserError>;
}

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Creates and persists a user. Name and email are both required.
    pub async fn create_user(&self, name: &str, email: &str) -> Result<User, UserError> {
        if name.trim().is_empty() || email.trim().is_empty() {
            return Err(UserError::Validation(
                "name and email are required".to_string(),
            ));
        }

        let user = User {
            id: Uuid::now_v7(),
            username: name.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };

        self.repo.create(&user).await?;
        info!("Created user {}", user.id);

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct InMemoryRepo {
        users: Mutex<Vec<User>>,
        fail: bool,
    }

    #[async_trait]
    impl UserRepository for InMemoryRepo {
        async fn create(&self, user: &User) -> Result<(), UserError> {
            if self.fail {
                return Err(UserError::Database(sqlx::Error::PoolTimedOut));
            }
            self.users.lock().unwrap().push(user.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_create_user_persists() {
        let repo = Arc::new(InMemoryRepo::default());
        let service = UserService::new(repo.clone());

        let user = service
            .create_user("ada", "ada@example.com")
            .await
            .unwrap();

        assert_eq!(user.username, "ada");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(repo.users.lock().unwrap().as_slice(), &[user]);
    }

    #[tokio::test]
    async fn test_missing_fields_are_rejected_without_persisting() {
        let repo = Arc::new(InMemoryRepo::default());
        let service = UserService::new(repo.clone());

        for (name, email) in [("", "a@b.c"), ("ada", ""), ("  ", "  ")] {
            let err = service.create_user(name, email).await.unwrap_err();
            assert_eq!(err.to_string(), "name and email are required");
        }
        assert!(repo.users.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_unique_v7() {
        let service = UserService::new(Arc::new(InMemoryRepo::default()));

        let first = service.create_user("a", "a@x.io").await.unwrap();
        let second = service.create_user("b", "b@x.io").await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.id.get_version_num(), 7);
    }

    #[tokio::test]
    async fn test_repository_error_propagates() {
        let repo = Arc::new(InMemoryRepo {
            fail: true,
            ..Default::default()
        });
        let service = UserService::new(repo);

        let err = service.create_user("ada", "ada@example.com").await.unwrap_err();
        assert!(matches!(err, UserError::Database(_)));
    }
}
