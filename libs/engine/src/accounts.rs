use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::*;

use crate::{sessions::SessionContext, DashboardError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub date: NaiveDate,
    pub score: f64,
    pub future_score: f64,
}

impl ScoreRecord {
    pub fn new(date: NaiveDate, score: f64, future_score: f64) -> Self {
        Self {
            date,
            score,
            future_score,
        }
    }
}

/// Passwords are kept and compared verbatim, there is no hashing.
#[derive(Debug, Clone)]
pub struct Account {
    username: String,
    password: String,
    history: Vec<ScoreRecord>,
}

impl Account {
    fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_owned(),
            password: password.to_owned(),
            history: Vec::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn history(&self) -> &[ScoreRecord] {
        &self.history
    }

    pub fn latest(&self) -> Option<&ScoreRecord> {
        self.history.last()
    }

    fn matches(&self, password: &str) -> bool {
        self.password == password
    }
}

#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: HashMap<String, Account>,
}

impl AccountStore {
    /// Registering an existing username replaces that account, history and
    /// all.
    pub fn register(&mut self, username: &str, password: &str) -> Result<&Account, DashboardError> {
        if username.is_empty() || password.is_empty() {
            return Err(DashboardError::Validation);
        }

        let account = Account::new(username, password);
        if self.accounts.insert(username.to_owned(), account).is_some() {
            warn!(%username, "registration replaced existing account");
        }

        self.find(username)
    }

    pub fn login(
        &self,
        session: &mut SessionContext,
        username: &str,
        password: &str,
    ) -> Result<(), DashboardError> {
        match self.accounts.get(username) {
            Some(account) if account.matches(password) => {
                session.set_current_user(account.username());

                Ok(())
            }
            _ => Err(DashboardError::Auth),
        }
    }

    pub fn append_record(&mut self, username: &str, record: ScoreRecord) -> Result<(), DashboardError> {
        let account = self
            .accounts
            .get_mut(username)
            .ok_or_else(|| DashboardError::UnknownAccount(username.to_owned()))?;

        account.history.push(record);

        Ok(())
    }

    pub fn find(&self, username: &str) -> Result<&Account, DashboardError> {
        self.accounts
            .get(username)
            .ok_or_else(|| DashboardError::UnknownAccount(username.to_owned()))
    }

    pub fn history(&self, username: &str) -> Result<&[ScoreRecord], DashboardError> {
        Ok(self.find(username)?.history())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
    }

    #[test]
    fn it_refuses_empty_username_or_password() {
        let mut store = AccountStore::default();

        assert_eq!(
            store.register("", "secret").err(),
            Some(DashboardError::Validation)
        );
        assert_eq!(
            store.register("jacob", "").err(),
            Some(DashboardError::Validation)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn it_registers_with_empty_history() -> Result<()> {
        let mut store = AccountStore::default();

        let account = store.register("jacob", "secret")?;

        assert_eq!(account.username(), "jacob");
        assert!(account.history().is_empty());
        assert_eq!(store.len(), 1);

        Ok(())
    }

    #[test]
    fn it_overwrites_account_when_registering_same_username() -> Result<()> {
        let mut store = AccountStore::default();
        store.register("jacob", "first")?;
        store.append_record("jacob", ScoreRecord::new(today(), 38.0, 48.0))?;

        store.register("jacob", "second")?;

        assert_eq!(store.len(), 1);
        assert!(store.history("jacob")?.is_empty());

        let mut session = SessionContext::new();
        assert_eq!(
            store.login(&mut session, "jacob", "first"),
            Err(DashboardError::Auth)
        );
        store.login(&mut session, "jacob", "second")?;
        assert_eq!(session.current_user(), Some("jacob"));

        Ok(())
    }

    #[test]
    fn it_leaves_session_logged_out_on_wrong_password() -> Result<()> {
        let mut store = AccountStore::default();
        store.register("jacob", "secret")?;

        let mut session = SessionContext::new();
        assert_eq!(
            store.login(&mut session, "jacob", "Secret"),
            Err(DashboardError::Auth)
        );
        assert_eq!(session.current_user(), None);

        Ok(())
    }

    #[test]
    fn it_refuses_login_for_unknown_username() {
        let store = AccountStore::default();

        let mut session = SessionContext::new();
        assert_eq!(
            store.login(&mut session, "nobody", "secret"),
            Err(DashboardError::Auth)
        );
        assert!(!session.is_logged_in());
    }

    #[test]
    fn it_appends_records_in_insertion_order() -> Result<()> {
        let mut store = AccountStore::default();
        store.register("jacob", "secret")?;

        store.append_record("jacob", ScoreRecord::new(today(), 38.0, 38.0))?;
        store.append_record("jacob", ScoreRecord::new(today(), 40.0, 50.0))?;

        let history = store.history("jacob")?;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].score, 38.0);
        assert_eq!(history[1].future_score, 50.0);
        assert_eq!(store.find("jacob")?.latest(), Some(&history[1]));

        Ok(())
    }

    #[test]
    fn it_reports_unknown_account_on_append() {
        let mut store = AccountStore::default();

        assert_eq!(
            store.append_record("nobody", ScoreRecord::new(today(), 1.0, 1.0)),
            Err(DashboardError::UnknownAccount("nobody".to_owned()))
        );
    }
}
