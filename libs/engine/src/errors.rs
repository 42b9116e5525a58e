use crate::{routine::Section, sessions::SessionId};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// A required registration field was empty.
    #[error("Please enter valid details!")]
    Validation,
    /// Unknown username or wrong password.
    #[error("Invalid username or password!")]
    Auth,
    #[error("Please login to access the features!")]
    NotLoggedIn,
    #[error("No such session '{0}'")]
    UnknownSession(SessionId),
    #[error("No such account '{0}'")]
    UnknownAccount(String),
    #[error("No such checklist item '{1}' in {0:?}")]
    UnknownChecklistItem(Section, String),
}
