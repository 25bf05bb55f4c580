use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::User;

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Fails with `DuplicateEmail` if the email is taken.
    async fn create(&self, user: User) -> UserResult<User>;

    /// Get a user by (already normalized) email
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;
}
