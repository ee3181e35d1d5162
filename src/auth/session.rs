use crate::auth::traits::{Authenticator, Registration};
use crate::error::AuthError;
use crate::models::User;
use tracing::info;

/// Partial profile edit; `None` fields are left as they are
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

/// The signed-in user for one client
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Sign in. The session changes only if the backend call completes.
    pub async fn login(
        &mut self,
        auth: &dyn Authenticator,
        email: &str,
        password: &str,
    ) -> Result<&User, AuthError> {
        let user = auth.login(email, password).await?;
        let user: &User = self.user.insert(user);
        Ok(user)
    }

    /// Create an account and sign in as it
    pub async fn register(
        &mut self,
        auth: &dyn Authenticator,
        registration: Registration,
    ) -> Result<&User, AuthError> {
        let user = auth.register(registration).await?;
        let user: &User = self.user.insert(user);
        Ok(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Signed out {}", user.id);
        }
    }

    /// Merge an edit into the current user; ignored when signed out
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        let Some(user) = self.user.as_mut() else {
            return;
        };
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if update.phone.is_some() {
            user.phone = update.phone;
        }
        if update.avatar.is_some() {
            user.avatar = update.avatar;
        }
    }
}
