//! Credential container with automatic memory zeroing.
//!
//! The adapter keeps the password only inside `Credentials` and hands it to
//! the execution collaborator once, when the connection handle is built.

use zeroize::{Zeroize, Zeroizing};

/// Username and optional password, zeroed on drop.
///
/// # Example
///
/// ```rust
/// use dbadmin_core::security::Credentials;
///
/// let creds = Credentials::new("SCOTT".to_string(), Some("tiger".to_string()));
/// assert_eq!(creds.username(), "SCOTT");
/// assert!(creds.has_password());
/// assert!(!format!("{:?}", creds).contains("tiger"));
/// ```
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct Credentials {
    username: Zeroizing<String>,
    password: Zeroizing<Option<String>>,
}

impl Credentials {
    /// Creates new credentials with automatic memory zeroing.
    pub fn new(username: String, password: Option<String>) -> Self {
        Self {
            username: Zeroizing::new(username),
            password: Zeroizing::new(password),
        }
    }

    /// Gets the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Checks if a password is present without exposing it.
    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }

    /// Password for handing to a driver.
    ///
    /// Call only at the point where the driver consumes it; never log or
    /// store the returned slice.
    pub fn expose_password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Same credentials with the username replaced.
    pub(crate) fn with_username(&self, username: String) -> Self {
        Self::new(username, (*self.password).clone())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username())
            .field("password", &self.password.as_ref().map(|_| "****"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_new() {
        let creds = Credentials::new("scott".to_string(), Some("tiger".to_string()));
        assert_eq!(creds.username(), "scott");
        assert!(creds.has_password());
        assert_eq!(creds.expose_password(), Some("tiger"));
    }

    #[test]
    fn test_credentials_no_password() {
        let creds = Credentials::new("scott".to_string(), None);
        assert!(!creds.has_password());
        assert!(creds.expose_password().is_none());
    }

    #[test]
    fn test_credentials_debug_masks_password() {
        let creds = Credentials::new("scott".to_string(), Some("tiger".to_string()));
        let debug = format!("{:?}", creds);

        assert!(debug.contains("scott"));
        assert!(debug.contains("****"));
        assert!(!debug.contains("tiger"));
    }

    #[test]
    fn test_credentials_with_username_keeps_password() {
        let creds = Credentials::new("scott".to_string(), Some("tiger".to_string()));
        let upper = creds.with_username("SCOTT".to_string());

        assert_eq!(upper.username(), "SCOTT");
        assert_eq!(upper.expose_password(), Some("tiger"));
    }
}
