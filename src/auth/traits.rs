use crate::error::AuthError;
use crate::models::User;
use async_trait::async_trait;

/// Details collected by the sign-up form
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

/// Common trait for account backends.
///
/// Implementations must apply any side effect only once the call resolves,
/// so a caller can drop the future or wrap it in a timeout safely.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Sign in with email and password
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Create a guest account
    async fn register(&self, registration: Registration) -> Result<User, AuthError>;

    /// Get the name of the backend
    fn backend_name(&self) -> &'static str;
}
