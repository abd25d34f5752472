use tracing::{debug, warn};

use crate::CredentialProvider;

/// Cookie the backend issues its anti-forgery token under
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// A token fixed at construction, e.g. from configuration
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    token: String,
}

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl CredentialProvider for StaticCredentials {
    fn anti_forgery_token(&self) -> String {
        self.token.clone()
    }
}

/// Reads the token out of a `Cookie` header value (`a=1; csrftoken=abc`)
#[derive(Debug, Clone, Default)]
pub struct CookieCredentials {
    cookies: String,
    name: String,
}

impl CookieCredentials {
    pub fn new(cookies: impl Into<String>) -> Self {
        Self::with_name(cookies, CSRF_COOKIE_NAME)
    }

    pub fn with_name(cookies: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            cookies: cookies.into(),
            name: name.into(),
        }
    }
}

impl CredentialProvider for CookieCredentials {
    fn anti_forgery_token(&self) -> String {
        match cookie_value(&self.cookies, &self.name) {
            Some(token) => token,
            None => {
                debug!("Cookie {} not present, sending empty token", self.name);
                String::new()
            }
        }
    }
}

/// Value of the first cookie called `name`, percent-decoded.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| match urlencoding::decode(raw) {
            Ok(decoded) => decoded.into_owned(),
            Err(e) => {
                warn!("Cookie {} is not valid percent-encoding: {}", name, e);
                raw.to_string()
            }
        })
}
