use crate::{content::Feature, routine::RoutineAnswers, scoring::LifestyleInputs};

/// Everything a user can ask of the dashboard.
#[derive(Debug, Clone)]
pub enum Action {
    Register { username: String, password: String },
    Login { username: String, password: String },
    Logout,
    Menu,
    Help,
    AnalysisForm,
    Analyze(LifestyleInputs),
    History,
    Report,
    Points,
    DailyTips,
    NumberedTips,
    Questions,
    Ask(String),
    Checklists,
    CheckRoutine(RoutineAnswers),
    Advice,
    ComingSoon(Feature),
}

impl Action {
    /// Only the login page is reachable without an authenticated session.
    pub fn requires_login(&self) -> bool {
        !matches!(
            self,
            Action::Register { .. } | Action::Login { .. } | Action::Menu | Action::Help
        )
    }
}
