use crate::auth::traits::{Authenticator, Registration};
use crate::error::AuthError;
use crate::models::User;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// In-memory account directory with a simulated network delay
pub struct MockAuthenticator {
    users: RwLock<Vec<User>>,
    delay: Duration,
}

impl MockAuthenticator {
    /// Create a directory holding the demo accounts
    pub fn new(delay: Duration) -> Self {
        Self::with_users(seed_users(), delay)
    }

    /// Create a directory with custom accounts
    pub fn with_users(users: Vec<User>, delay: Duration) -> Self {
        Self {
            users: RwLock::new(users),
            delay,
        }
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

fn require(value: &str, field: &'static str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        return Err(AuthError::MissingField { field });
    }
    Ok(())
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        debug!("Login attempt for {}", email);
        tokio::time::sleep(self.delay).await;

        let users = self.users.read().await;
        match users.iter().find(|u| u.email == email) {
            Some(user) if !password.is_empty() => {
                info!("Signed in {}", user.id);
                Ok(user.clone())
            }
            _ => {
                warn!("Rejected login for {}", email);
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    async fn register(&self, registration: Registration) -> Result<User, AuthError> {
        require(&registration.name, "name")?;
        require(&registration.email, "email")?;
        require(&registration.password, "password")?;

        tokio::time::sleep(self.delay).await;

        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == registration.email) {
            return Err(AuthError::EmailTaken {
                email: registration.email,
            });
        }

        let user = User {
            id: format!("user-{}", Uuid::new_v4().simple()),
            name: registration.name,
            email: registration.email,
            phone: registration.phone,
            avatar: None,
            is_host: false,
            joined_date: Utc::now().date_naive(),
        };
        users.push(user.clone());
        info!("Registered {}", user.id);
        Ok(user)
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}

/// Demo accounts: one guest, one host owning listing "1"
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "user1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: Some("+1 (555) 123-4567".to_string()),
            avatar: Some("https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150".to_string()),
            is_host: false,
            joined_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or(NaiveDate::MIN),
        },
        User {
            id: "host1".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            phone: Some("+1 (555) 987-6543".to_string()),
            avatar: Some("https://images.unsplash.com/photo-1494790108755-2616b332c1b1?w=150".to_string()),
            is_host: true,
            joined_date: NaiveDate::from_ymd_opt(2023, 8, 20).unwrap_or(NaiveDate::MIN),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> MockAuthenticator {
        MockAuthenticator::new(Duration::from_millis(1000))
    }

    fn registration(email: &str) -> Registration {
        Registration {
            name: "Ada".to_string(),
            email: email.to_string(),
            password: "secret".to_string(),
            phone: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn login_known_email_with_password() {
        let user = auth().login("sarah@example.com", "pw").await.unwrap();
        assert_eq!(user.id, "host1");
        assert!(user.is_host);
    }

    #[tokio::test(start_paused = true)]
    async fn login_rejects_unknown_email_or_empty_password() {
        let auth = auth();
        assert_eq!(
            auth.login("nobody@example.com", "pw").await,
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            auth.login("john@example.com", "").await,
            Err(AuthError::InvalidCredentials)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn registered_user_can_log_in() {
        let auth = auth();
        let user = auth.register(registration("ada@example.com")).await.unwrap();
        assert!(user.id.starts_with("user-"));
        assert!(!user.is_host);
        let again = auth.login("ada@example.com", "secret").await.unwrap();
        assert_eq!(again.id, user.id);
    }

    #[tokio::test(start_paused = true)]
    async fn register_rejects_taken_email_and_blank_fields() {
        let auth = auth();
        assert!(matches!(
            auth.register(registration("john@example.com")).await,
            Err(AuthError::EmailTaken { .. })
        ));
        let mut blank = registration("new@example.com");
        blank.name = "  ".to_string();
        assert_eq!(
            auth.register(blank).await,
            Err(AuthError::MissingField { field: "name" })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn abandoned_register_leaves_no_account() {
        let auth = auth();
        let attempt = tokio::time::timeout(
            Duration::from_millis(10),
            auth.register(registration("late@example.com")),
        )
        .await;
        assert!(attempt.is_err());
        assert_eq!(auth.user_count().await, 2);
    }
}
