//! Build-time configuration for the browser bundle.
//!
//! Values are baked in with `option_env!` when the WASM bundle is compiled,
//! the same way a JS bundler inlines its public env vars. Missing or blank
//! values fall back to the local development defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_OIDC_URL: &str = "http://localhost:8080";
pub const DEFAULT_OIDC_REALM: &str = "reports-realm";
pub const DEFAULT_OIDC_CLIENT_ID: &str = "reports-frontend";

/// Coordinates of the OpenID Connect realm that issues bearer tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Identity server base URL, without trailing slash.
    pub url: String,
    pub realm: String,
    /// Public client registered for this frontend.
    pub client_id: String,
}

impl IdentityConfig {
    fn endpoint(&self, name: &str) -> String {
        format!("{}/realms/{}/protocol/openid-connect/{name}", self.url, self.realm)
    }

    /// Authorization endpoint the browser is redirected to on login.
    #[must_use]
    pub fn auth_endpoint(&self) -> String {
        self.endpoint("auth")
    }

    /// Token endpoint for code exchange and refresh.
    #[must_use]
    pub fn token_endpoint(&self) -> String {
        self.endpoint("token")
    }

    /// End-session endpoint used on logout.
    #[must_use]
    pub fn logout_endpoint(&self) -> String {
        self.endpoint("logout")
    }
}

/// Everything the report page needs to know about its surroundings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL; the listing lives at `{api_url}/reports`.
    pub api_url: String,
    pub identity: IdentityConfig,
}

impl ClientConfig {
    /// Read `REPORTS_API_URL`, `REPORTS_OIDC_URL`, `REPORTS_OIDC_REALM` and
    /// `REPORTS_OIDC_CLIENT_ID` as captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("REPORTS_API_URL"),
            option_env!("REPORTS_OIDC_URL"),
            option_env!("REPORTS_OIDC_REALM"),
            option_env!("REPORTS_OIDC_CLIENT_ID"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        oidc_url: Option<&str>,
        realm: Option<&str>,
        client_id: Option<&str>,
    ) -> Self {
        Self {
            api_url: trim_url(&value_or(api_url, DEFAULT_API_URL)),
            identity: IdentityConfig {
                url: trim_url(&value_or(oidc_url, DEFAULT_OIDC_URL)),
                realm: value_or(realm, DEFAULT_OIDC_REALM),
                client_id: value_or(client_id, DEFAULT_OIDC_CLIENT_ID),
            },
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None)
    }
}

fn value_or(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_owned()
}

fn trim_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}
