use anyhow::{Context, Result};
use chrono::{Local, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tokio::sync::Mutex;
use tracing::*;

use engine::prelude::*;

pub const DEFAULT_TOKEN_MAX_AGE_MINUTES: i64 = 60;

pub struct Config {
    pub jwt_secret: String,
    pub token_max_age_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let jwt_secret = std::env::var("JWT_SECRET").with_context(|| "JWT_SECRET is required")?;
        let token_max_age_minutes = match std::env::var("TOKEN_MAX_AGE_MINUTES") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("TOKEN_MAX_AGE_MINUTES '{}'", value))?,
            Err(_) => DEFAULT_TOKEN_MAX_AGE_MINUTES,
        };

        Ok(Self {
            jwt_secret,
            token_max_age_minutes,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// Placed in request extensions once a token checks out.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentSession {
    pub id: SessionId,
    pub username: String,
}

#[derive(thiserror::Error, Debug)]
pub enum ServeError {
    #[error(transparent)]
    Dashboard(#[from] DashboardError),
    #[error("Token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error("Serialization: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Not found")]
    NotFound,
}

pub struct AppState {
    dashboard: Mutex<Dashboard>,
    pub env: Config,
}

impl AppState {
    pub fn new(env: Config) -> Self {
        Self {
            dashboard: Mutex::new(Dashboard::new()),
            env,
        }
    }

    /// For the login page, runs in a throwaway session.
    pub async fn perform_anonymous(&self, action: Action) -> Result<JsonValue, ServeError> {
        let mut dashboard = self.dashboard.lock().await;
        let id = dashboard.open_session();
        let performed = dashboard.perform(&id, action, Local::now().date_naive());
        dashboard.close_session(&id)?;

        Ok(performed?.to_tagged_json()?)
    }

    fn token_max_age(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.env.token_max_age_minutes)
    }

    /// Every successful login gets a session of its own that expires along
    /// with its token. Sessions whose tokens have expired are dropped first.
    pub async fn login(&self, username: &str, password: &str) -> Result<CurrentSession, ServeError> {
        let now = Utc::now();
        let mut dashboard = self.dashboard.lock().await;
        dashboard.expire_sessions(now);
        let id = dashboard.open_session();
        debug!(open = dashboard.session_count(), "login");

        match dashboard.login(&id, username, password) {
            Ok(()) => {
                dashboard.set_session_expiry(&id, now + self.token_max_age())?;

                Ok(CurrentSession {
                    id,
                    username: username.to_owned(),
                })
            }
            Err(e) => {
                dashboard.close_session(&id)?;

                Err(e.into())
            }
        }
    }

    pub async fn logout(&self, session: &CurrentSession) -> Result<(), ServeError> {
        let mut dashboard = self.dashboard.lock().await;

        Ok(dashboard.close_session(&session.id)?)
    }

    pub async fn authenticate(&self, token: &str) -> Result<CurrentSession, ServeError> {
        let id = self.decode_token(token)?;
        let mut dashboard = self.dashboard.lock().await;
        if dashboard.session(&id)?.is_expired(Utc::now()) {
            dashboard.close_session(&id)?;

            return Err(DashboardError::UnknownSession(id).into());
        }

        let username = dashboard.current_user(&id)?.to_owned();

        Ok(CurrentSession { id, username })
    }

    /// Tagged reply JSON, a `notFound` reply becomes [`ServeError::NotFound`].
    pub async fn perform(
        &self,
        session: &CurrentSession,
        action: Action,
    ) -> Result<JsonValue, ServeError> {
        let value = {
            let mut dashboard = self.dashboard.lock().await;
            let reply = dashboard.perform(&session.id, action, Local::now().date_naive())?;
            reply.to_tagged_json()?
        };

        if value.get("simpleReply") == Some(&json!("notFound")) {
            return Err(ServeError::NotFound);
        }

        Ok(value)
    }

    #[cfg(test)]
    pub async fn open_sessions(&self) -> usize {
        self.dashboard.lock().await.session_count()
    }

    pub async fn report(&self, session: &CurrentSession) -> Result<Vec<u8>, ServeError> {
        let dashboard = self.dashboard.lock().await;

        match dashboard.latest_record(&session.id)? {
            Some(record) => Ok(report_bytes(record)),
            None => Err(ServeError::NotFound),
        }
    }

    pub fn issue_token(&self, id: &SessionId) -> Result<String, ServeError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = (now + self.token_max_age()).timestamp() as usize;
        let claims = TokenClaims {
            sub: id.to_string(),
            iat,
            exp,
        };

        debug!(session = %id, exp, "issuing token");

        Ok(jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.env.jwt_secret.as_bytes()),
        )?)
    }

    pub fn decode_token(&self, token: &str) -> Result<SessionId, ServeError> {
        let claims = jsonwebtoken::decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.env.jwt_secret.as_bytes()),
            &Validation::default(),
        )?
        .claims;

        Ok(SessionId::from(claims.sub.as_str()))
    }
}
