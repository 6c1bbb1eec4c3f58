//! REST Gateway
//!
//! Backend auth surface over the HTTP adapter. Paths and body shapes
//! are compatibility-relevant and mirror the backend exactly.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use platform::http::ApiClient;

use crate::domain::entity::user::User;
use crate::domain::repository::{AuthGateway, LoginGrant, Registration};
use crate::domain::value_object::{credential::Credential, role::Role};
use crate::error::SessionResult;

const LOGIN_PATH: &str = "/api/v1/auth/login";
const REGISTER_PATH: &str = "/api/v1/auth/register";
const ME_PATH: &str = "/api/v1/auth/me";

/// Login request body
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Login response body
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user_role: String,
}

/// Registration request body (`fullName` per the web client contract)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_name: Option<&'a str>,
    role: Role,
}

/// REST-backed auth gateway sharing the process-wide HTTP adapter
#[derive(Clone)]
pub struct RestAuthGateway {
    api: Arc<ApiClient>,
}

impl RestAuthGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}

impl AuthGateway for RestAuthGateway {
    async fn login(&self, username: &str, password: &str) -> SessionResult<LoginGrant> {
        let token: TokenResponse = self
            .api
            .post(LOGIN_PATH, &LoginRequest { username, password })
            .await?;

        Ok(LoginGrant {
            credential: Credential::new(token.access_token),
            role_hint: Role::from_wire(&token.user_role),
        })
    }

    async fn register(&self, registration: &Registration) -> SessionResult<()> {
        self.api
            .post_unit(
                REGISTER_PATH,
                &RegisterRequest {
                    username: &registration.username,
                    email: &registration.email,
                    password: &registration.password,
                    full_name: registration.full_name.as_deref(),
                    role: registration.role,
                },
            )
            .await?;
        Ok(())
    }

    async fn current_user(&self) -> SessionResult<User> {
        Ok(self.api.get(ME_PATH).await?)
    }

    fn install_credential(&self, credential: Option<&Credential>) {
        self.api
            .set_credential(credential.map(|c| c.as_str().to_string()));
    }
}
