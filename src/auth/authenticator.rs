//! Token issuance and user registration against the users-permissions plugin.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::auth::errors::AuthenticationError;
use crate::auth::password::generate_password;
use crate::auth::AuthHeaderProvider;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest};
use crate::config::{ApiToken, StrapiConfig};

const LOGIN_PATH: &str = "api/auth/local";
const ROLES_PATH: &str = "api/users-permissions/roles";
const USERS_PATH: &str = "api/users";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    identifier: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    jwt: String,
}

#[derive(Debug, Deserialize)]
struct RolesResponse {
    roles: Vec<Role>,
}

#[derive(Debug, Deserialize)]
struct Role {
    id: u64,
    #[serde(rename = "type")]
    role_type: String,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
    role: u64,
}

/// Client for the Strapi authentication endpoints.
///
/// The authenticator holds an optional default token. Every request it
/// sends, and every [`auth_header`](AuthHeaderProvider::auth_header) it
/// hands out, carries `Authorization: Bearer <token>` when a token is set.
///
/// # Thread Safety
///
/// The token sits behind an [`RwLock`], so an `Arc<Authenticator>` can be
/// shared with [`StrapiClient`](crate::clients::StrapiClient) instances and
/// updated while they run.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use strapi_api::{StrapiConfig, BaseUrl};
/// use strapi_api::auth::Authenticator;
/// use strapi_api::clients::StrapiClient;
///
/// let config = StrapiConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:1337").unwrap())
///     .build()
///     .unwrap();
///
/// let auth = Arc::new(Authenticator::new(&config));
/// auth.create_token("editor@example.com", "secret", true).await?;
///
/// let client = StrapiClient::new(&config, auth.clone());
/// ```
#[derive(Debug)]
pub struct Authenticator {
    http: HttpClient,
    token: RwLock<Option<ApiToken>>,
}

// Verify Authenticator is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Authenticator>();
};

impl Authenticator {
    /// Creates an authenticator, seeded with the config's API token if any.
    #[must_use]
    pub fn new(config: &StrapiConfig) -> Self {
        Self {
            http: HttpClient::new(config),
            token: RwLock::new(config.api_token().cloned()),
        }
    }

    /// Logs in with local credentials and returns the issued JWT.
    ///
    /// When `set_as_default` is `true`, the JWT also replaces the current
    /// default token.
    ///
    /// # Errors
    ///
    /// - [`AuthenticationError::Status`] if Strapi rejects the credentials
    /// - [`AuthenticationError::UnexpectedResponse`] if the body has no usable `jwt`
    /// - [`AuthenticationError::Http`] on network failure
    pub async fn create_token(
        &self,
        identifier: &str,
        password: &str,
        set_as_default: bool,
    ) -> Result<ApiToken, AuthenticationError> {
        let body = serde_json::to_value(LoginRequest {
            identifier,
            password,
        })
        .map_err(|e| AuthenticationError::UnexpectedResponse {
            message: e.to_string(),
        })?;

        let request = HttpRequest::builder(HttpMethod::Post, LOGIN_PATH)
            .body(body)
            .body_type(DataType::Json)
            .build()
            .map_err(|e| AuthenticationError::Http(e.into()))?;

        let response = self.http.request(request, &self.auth_header()).await?;
        let login: LoginResponse =
            response
                .json()
                .map_err(|e| AuthenticationError::UnexpectedResponse {
                    message: format!("missing jwt in login response: {e}"),
                })?;

        let token =
            ApiToken::new(login.jwt).map_err(|e| AuthenticationError::UnexpectedResponse {
                message: e.to_string(),
            })?;

        tracing::debug!(set_as_default, "Issued Strapi user token");

        if set_as_default {
            self.set_token(token.clone());
        }

        Ok(token)
    }

    /// Replaces the default token.
    pub fn set_token(&self, token: ApiToken) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    /// Removes the default token; subsequent requests are anonymous.
    pub fn clear_token(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Returns `true` if a default token is set.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Registers a user under the role whose type matches `role_type`.
    ///
    /// The role type is compared lowercase. Without a `password`, a random
    /// URL-safe one is generated. The returned object is Strapi's response
    /// with the `password` used added to it.
    ///
    /// # Errors
    ///
    /// - [`AuthenticationError::RoleNotFound`] if no role has that type
    /// - [`AuthenticationError::Status`] if either request is rejected
    /// - [`AuthenticationError::UnexpectedResponse`] if a body has the wrong shape
    /// - [`AuthenticationError::Http`] on network failure
    pub async fn register_user(
        &self,
        username: &str,
        email: &str,
        password: Option<&str>,
        role_type: &str,
    ) -> Result<serde_json::Value, AuthenticationError> {
        let password = password
            .filter(|p| !p.is_empty())
            .map_or_else(generate_password, String::from);
        let role = self.role_id(role_type).await?;

        let body = serde_json::to_value(RegisterRequest {
            username,
            email,
            password: &password,
            role,
        })
        .map_err(|e| AuthenticationError::UnexpectedResponse {
            message: e.to_string(),
        })?;

        let request = HttpRequest::builder(HttpMethod::Post, USERS_PATH)
            .body(body)
            .body_type(DataType::Json)
            .build()
            .map_err(|e| AuthenticationError::Http(e.into()))?;

        let response = self.http.request(request, &self.auth_header()).await?;

        let mut user = match response.body {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(AuthenticationError::UnexpectedResponse {
                    message: format!("expected a user object, got {other}"),
                })
            }
        };
        user.insert("password".to_string(), serde_json::Value::String(password));

        tracing::debug!(username, role, "Registered Strapi user");

        Ok(serde_json::Value::Object(user))
    }

    async fn role_id(&self, role_type: &str) -> Result<u64, AuthenticationError> {
        let request = HttpRequest::builder(HttpMethod::Get, ROLES_PATH)
            .build()
            .map_err(|e| AuthenticationError::Http(e.into()))?;

        let response = self.http.request(request, &self.auth_header()).await?;
        let roles: RolesResponse =
            response
                .json()
                .map_err(|e| AuthenticationError::UnexpectedResponse {
                    message: format!("malformed roles response: {e}"),
                })?;

        let wanted = role_type.to_lowercase();
        roles
            .roles
            .into_iter()
            .find(|role| role.role_type == wanted)
            .map(|role| role.id)
            .ok_or(AuthenticationError::RoleNotFound { role_type: wanted })
    }
}

impl AuthHeaderProvider for Authenticator {
    fn auth_header(&self) -> HashMap<String, String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map_or_else(HashMap::new, AuthHeaderProvider::auth_header)
    }
}
