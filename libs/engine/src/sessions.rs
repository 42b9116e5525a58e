use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display};
use tracing::*;

use crate::DashboardError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(nanoid::nanoid!())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// The state of one interaction with the dashboard. Logging in sets the
/// current user, there is no other way to change it. Sessions without an
/// expiry live until they're closed.
#[derive(Debug, Clone)]
pub struct SessionContext {
    id: SessionId,
    current_user: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            current_user: None,
            expires_at: None,
        }
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(false, |expires_at| expires_at <= now)
    }

    pub(crate) fn set_expires_at(&mut self, expires_at: DateTime<Utc>) {
        self.expires_at = Some(expires_at);
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub(crate) fn set_current_user(&mut self, username: &str) {
        self.current_user = Some(username.to_owned());
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct Sessions {
    contexts: HashMap<SessionId, SessionContext>,
}

impl Sessions {
    pub fn open(&mut self) -> SessionId {
        let context = SessionContext::new();
        let id = context.id().clone();

        debug!(session = %id, "session-open");

        self.contexts.insert(id.clone(), context);

        id
    }

    pub fn get(&self, id: &SessionId) -> Result<&SessionContext, DashboardError> {
        self.contexts
            .get(id)
            .ok_or_else(|| DashboardError::UnknownSession(id.clone()))
    }

    pub fn get_mut(&mut self, id: &SessionId) -> Result<&mut SessionContext, DashboardError> {
        self.contexts
            .get_mut(id)
            .ok_or_else(|| DashboardError::UnknownSession(id.clone()))
    }

    pub fn close(&mut self, id: &SessionId) -> Result<SessionContext, DashboardError> {
        debug!(session = %id, "session-close");

        self.contexts
            .remove(id)
            .ok_or_else(|| DashboardError::UnknownSession(id.clone()))
    }

    /// Drops every session whose expiry has passed, returning how many went.
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.contexts.len();

        self.contexts.retain(|_, context| !context.is_expired(now));

        let expired = before - self.contexts.len();
        if expired > 0 {
            debug!(expired, remaining = self.contexts.len(), "session-expire");
        }

        expired
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use chrono::Duration;

    #[test]
    fn it_opens_logged_out_sessions_with_distinct_ids() -> Result<()> {
        let mut sessions = Sessions::default();

        let first = sessions.open();
        let second = sessions.open();

        assert_ne!(first, second);
        assert_eq!(sessions.len(), 2);
        assert!(!sessions.get(&first)?.is_logged_in());
        assert!(!sessions.get(&second)?.is_logged_in());

        Ok(())
    }

    #[test]
    fn it_forgets_closed_sessions() -> Result<()> {
        let mut sessions = Sessions::default();
        let id = sessions.open();

        sessions.close(&id)?;

        assert!(sessions.is_empty());
        assert_eq!(
            sessions.get(&id).err(),
            Some(DashboardError::UnknownSession(id.clone()))
        );
        assert!(sessions.close(&id).is_err());

        Ok(())
    }

    #[test]
    fn it_expires_only_sessions_past_their_expiry() -> Result<()> {
        let now = Utc::now();
        let mut sessions = Sessions::default();
        let forever = sessions.open();
        let stale = sessions.open();
        let fresh = sessions.open();

        sessions.get_mut(&stale)?.set_expires_at(now - Duration::minutes(1));
        sessions.get_mut(&fresh)?.set_expires_at(now + Duration::minutes(1));

        assert_eq!(sessions.expire(now), 1);
        assert_eq!(sessions.len(), 2);
        assert!(sessions.get(&forever).is_ok());
        assert!(sessions.get(&fresh).is_ok());
        assert!(sessions.get(&stale).is_err());

        assert_eq!(sessions.expire(now + Duration::minutes(1)), 1);
        assert_eq!(sessions.len(), 1);
        assert!(sessions.get(&forever).is_ok());

        Ok(())
    }
}
