//! Session Credential
//!
//! Holds the bearer token issued by the login flow. Login itself lives
//! elsewhere; the board only reads the token and drops it when rejected.

use std::sync::{Arc, RwLock};

use wasm_bindgen::JsCast;

/// Cookie the login flow stores the token in
pub const DEFAULT_AUTH_COOKIE: &str = "authToken";

/// Shared handle to the current credential
#[derive(Clone, Debug)]
pub struct Session {
    cookie_name: Arc<str>,
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub fn new(cookie_name: &str, token: Option<String>) -> Self {
        Self {
            cookie_name: Arc::from(cookie_name),
            token: Arc::new(RwLock::new(token)),
        }
    }

    /// Load the token from `document.cookie`
    pub fn from_cookie(cookie_name: &str) -> Self {
        let token = document_cookie().and_then(|header| token_from_cookie_header(&header, cookie_name));
        Self::new(cookie_name, token)
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Drop the in-memory token
    pub fn forget(&self) {
        if let Ok(mut token) = self.token.write() {
            *token = None;
        }
    }

    /// Forget the token and expire its cookie
    pub fn clear(&self) {
        self.forget();
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&format!("{}=; Max-Age=0; path=/", self.cookie_name));
        }
    }
}

fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

fn document_cookie() -> Option<String> {
    html_document()?.cookie().ok()
}

/// Extract a cookie value from a `name=value; other=value` header
///
/// Values are percent-decoded the way browser cookie helpers write them.
pub fn token_from_cookie_header(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            percent_encoding::percent_decode_str(value)
                .decode_utf8_lossy()
                .into_owned()
        })
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_cookie_header() {
        let header = "theme=dark; authToken=eyJhbGciOi.abc.def; lang=en";
        assert_eq!(
            token_from_cookie_header(header, "authToken").as_deref(),
            Some("eyJhbGciOi.abc.def")
        );
    }

    #[test]
    fn test_missing_or_empty_cookie() {
        assert_eq!(token_from_cookie_header("theme=dark", "authToken"), None);
        assert_eq!(token_from_cookie_header("authToken=", "authToken"), None);
        assert_eq!(token_from_cookie_header("", "authToken"), None);
    }

    #[test]
    fn test_cookie_name_must_match_exactly() {
        assert_eq!(token_from_cookie_header("xauthToken=nope", "authToken"), None);
    }

    #[test]
    fn test_cookie_value_is_percent_decoded() {
        assert_eq!(
            token_from_cookie_header("authToken=a%3Db", "authToken").as_deref(),
            Some("a=b")
        );
    }

    #[test]
    fn test_session_token_lifecycle() {
        let session = Session::new(DEFAULT_AUTH_COOKIE, Some("t".into()));
        assert!(session.is_authenticated());
        let shared = session.clone();
        shared.forget();
        assert!(!session.is_authenticated());
    }
}
