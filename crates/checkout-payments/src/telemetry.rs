//! Crash-Reporting Identity
//!
//! Process-wide identity context, attached before any payment call so a
//! failed attempt stays traceable even when the request never completes.
//! Lazily initialized behind an explicit guard rather than a module-level
//! mutable captured by closures.

use std::sync::{OnceLock, RwLock};

/// Sentinel recorded when the contributor has not supplied an email
pub const EMAIL_UNSET: &str = "<email unset>";

/// Identity attached to crash reports
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserIdentity {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserIdentity {
    /// Build from form fields, substituting the sentinel for absent email
    pub fn from_form(email: Option<&str>, first_name: &str, last_name: &str) -> Self {
        Self {
            email: email
                .filter(|e| !e.is_empty())
                .unwrap_or(EMAIL_UNSET)
                .to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

fn store() -> &'static RwLock<Option<UserIdentity>> {
    static IDENTITY: OnceLock<RwLock<Option<UserIdentity>>> = OnceLock::new();
    IDENTITY.get_or_init(|| RwLock::new(None))
}

/// Set the identity attached to subsequent crash reports
pub fn set_user(email: Option<&str>, first_name: &str, last_name: &str) {
    let identity = UserIdentity::from_form(email, first_name, last_name);
    tracing::debug!(email = %identity.email, "crash-reporting identity set");
    if let Ok(mut slot) = store().write() {
        *slot = Some(identity);
    }
}

/// Currently attached identity, if any
pub fn current_user() -> Option<UserIdentity> {
    store().read().ok().and_then(|slot| slot.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_substituted_for_absent_email() {
        let identity = UserIdentity::from_form(None, "Clark", "Kent");
        assert_eq!(identity.email, EMAIL_UNSET);

        let identity = UserIdentity::from_form(Some(""), "Clark", "Kent");
        assert_eq!(identity.email, EMAIL_UNSET);

        let identity = UserIdentity::from_form(Some("ck@dailyplanet.com"), "Clark", "Kent");
        assert_eq!(identity.email, "ck@dailyplanet.com");
    }

    #[test]
    fn test_set_user_is_observable() {
        set_user(Some("someone@example.com"), "A", "B");
        // Other tests may overwrite the identity concurrently; the stable
        // property is that one is attached once any setter has run.
        assert!(current_user().is_some());
    }
}
