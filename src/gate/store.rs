//! Persisted unlock state
//!
//! One key-value entry on the visitor's device holding their first name.
//! The HTTP service keeps it in a cookie; tests use [`MemoryStore`].

use axum::http::{header, HeaderMap, HeaderValue};

/// Device-local storage for the unlock entry
pub trait UnlockStore {
    /// Previously persisted name. Missing or malformed entries read as `None`.
    fn load(&self) -> Option<String>;

    /// Persist the name for future visits
    fn save(&mut self, name: &str);
}

/// In-process store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl UnlockStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone().filter(|v| !v.is_empty())
    }

    fn save(&mut self, name: &str) {
        self.value = Some(name.to_string());
    }
}

/// Attributes of the unlock cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookiePolicy {
    pub key: String,
    pub max_age_secs: u64,
    pub secure: bool,
}

/// Cookie-backed store for a single request/response pair
///
/// `load` reads the request's `Cookie` header; `save` stages a value that
/// [`CookieStore::set_cookie`] turns into a `Set-Cookie` header.
#[derive(Debug, Clone)]
pub struct CookieStore {
    policy: CookiePolicy,
    incoming: Option<String>,
    pending: Option<String>,
}

impl CookieStore {
    pub fn from_headers(policy: CookiePolicy, headers: &HeaderMap) -> Self {
        let incoming = read_cookie(headers, &policy.key);
        Self {
            policy,
            incoming,
            pending: None,
        }
    }

    /// `Set-Cookie` value for a staged save, if any
    pub fn set_cookie(&self) -> Option<HeaderValue> {
        let name = self.pending.as_deref()?;
        let mut cookie = format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            self.policy.key,
            urlencoding::encode(name),
            self.policy.max_age_secs
        );
        if self.policy.secure {
            cookie.push_str("; Secure");
        }
        match HeaderValue::from_str(&cookie) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(error = %e, "Unlock cookie is not a valid header value");
                None
            }
        }
    }
}

impl UnlockStore for CookieStore {
    fn load(&self) -> Option<String> {
        self.pending.clone().or_else(|| self.incoming.clone())
    }

    fn save(&mut self, name: &str) {
        self.pending = Some(name.to_string());
    }
}

/// Find `key` across all `Cookie` headers and URL-decode its value
pub fn read_cookie(headers: &HeaderMap, key: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == key)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
        .filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> CookiePolicy {
        CookiePolicy {
            key: "exo_vault_user".to_string(),
            max_age_secs: 60,
            secure: false,
        }
    }

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load(), None);
        store.save("Jane");
        assert_eq!(store.load(), Some("Jane".to_string()));
    }

    #[test]
    fn test_read_cookie_among_others() {
        let headers = headers("theme=dark; exo_vault_user=Jos%C3%A9; other=1");
        assert_eq!(read_cookie(&headers, "exo_vault_user"), Some("José".to_string()));
    }

    #[test]
    fn test_malformed_cookie_reads_as_absent() {
        assert_eq!(read_cookie(&headers("exo_vault_user="), "exo_vault_user"), None);
        assert_eq!(read_cookie(&headers("exo_vault_user=%FF"), "exo_vault_user"), None);
        assert_eq!(read_cookie(&headers("exo_vault_user"), "exo_vault_user"), None);
        assert_eq!(read_cookie(&HeaderMap::new(), "exo_vault_user"), None);
    }

    #[test]
    fn test_set_cookie_only_after_save() {
        let mut store = CookieStore::from_headers(policy(), &HeaderMap::new());
        assert!(store.set_cookie().is_none());

        store.save("Mary Ann");
        let value = store.set_cookie().unwrap();
        assert_eq!(
            value.to_str().unwrap(),
            "exo_vault_user=Mary%20Ann; Path=/; Max-Age=60; SameSite=Lax"
        );
        assert_eq!(store.load(), Some("Mary Ann".to_string()));
    }

    #[test]
    fn test_secure_attribute() {
        let mut store = CookieStore::from_headers(
            CookiePolicy {
                secure: true,
                ..policy()
            },
            &HeaderMap::new(),
        );
        store.save("Jane");
        assert!(store.set_cookie().unwrap().to_str().unwrap().ends_with("; Secure"));
    }

    #[test]
    fn test_incoming_cookie_loads() {
        let store = CookieStore::from_headers(policy(), &headers("exo_vault_user=Bob"));
        assert_eq!(store.load(), Some("Bob".to_string()));
        assert!(store.set_cookie().is_none());
    }
}
