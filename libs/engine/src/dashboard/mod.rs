use chrono::{DateTime, NaiveDate, Utc};
use tracing::*;

use replies::{Reply, SimpleReply};

use crate::{
    accounts::{AccountStore, ScoreRecord},
    actions::Action,
    content,
    points::{PointsLedger, ANALYSIS_POINTS},
    replying,
    routine::{self, RoutineAnswers, RoutineScore},
    scoring::LifestyleInputs,
    sessions::{SessionContext, SessionId, Sessions},
    DashboardError,
};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub record: ScoreRecord,
    pub points: i64,
}

/// Owns every account, session and points tally. Operations that need a
/// logged in user take the session they're acting on behalf of.
#[derive(Debug, Default)]
pub struct Dashboard {
    accounts: AccountStore,
    sessions: Sessions,
    points: PointsLedger,
}

impl Dashboard {
    pub fn new() -> Self {
        info!("dashboard-new");

        Self::default()
    }

    pub fn open_session(&mut self) -> SessionId {
        self.sessions.open()
    }

    pub fn close_session(&mut self, id: &SessionId) -> Result<(), DashboardError> {
        let closed = self.sessions.close(id)?;

        if let Some(username) = closed.current_user() {
            info!(%username, "logged out");
        }

        Ok(())
    }

    /// The session is forgotten by [`Dashboard::expire_sessions`] once `expires_at`
    /// has passed.
    pub fn set_session_expiry(
        &mut self,
        id: &SessionId,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DashboardError> {
        self.sessions.get_mut(id)?.set_expires_at(expires_at);

        Ok(())
    }

    pub fn expire_sessions(&mut self, now: DateTime<Utc>) -> usize {
        let expired = self.sessions.expire(now);
        if expired > 0 {
            info!(expired, open = self.sessions.len(), "sessions expired");
        }

        expired
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn session(&self, id: &SessionId) -> Result<&SessionContext, DashboardError> {
        self.sessions.get(id)
    }

    pub fn register(&mut self, username: &str, password: &str) -> Result<(), DashboardError> {
        match self.accounts.register(username, password) {
            Ok(_) => {
                info!(%username, accounts = self.accounts.len(), "registered");

                Ok(())
            }
            Err(e) => {
                warn!(%username, "registration refused: {}", e);

                Err(e)
            }
        }
    }

    pub fn login(
        &mut self,
        id: &SessionId,
        username: &str,
        password: &str,
    ) -> Result<(), DashboardError> {
        let session = self.sessions.get_mut(id)?;

        match self.accounts.login(session, username, password) {
            Ok(()) => {
                info!(%username, session = %id, "logged in");

                Ok(())
            }
            Err(e) => {
                warn!(%username, session = %id, "login refused");

                Err(e)
            }
        }
    }

    pub fn current_user(&self, id: &SessionId) -> Result<&str, DashboardError> {
        self.sessions
            .get(id)?
            .current_user()
            .ok_or(DashboardError::NotLoggedIn)
    }

    /// Records today's score for the session's user and awards them points.
    pub fn analyze(
        &mut self,
        id: &SessionId,
        inputs: &LifestyleInputs,
        today: NaiveDate,
    ) -> Result<Analysis, DashboardError> {
        let username = self.current_user(id)?.to_owned();
        let score = inputs.score();
        let record = ScoreRecord::new(today, score.current, score.future);

        self.accounts.append_record(&username, record.clone())?;
        let points = self.points.award(&username, ANALYSIS_POINTS);

        info!(%username, score = record.score, future = record.future_score, points, "analyzed");

        Ok(Analysis { record, points })
    }

    pub fn history(&self, id: &SessionId) -> Result<&[ScoreRecord], DashboardError> {
        let username = self.current_user(id)?;

        self.accounts.history(username)
    }

    pub fn latest_record(&self, id: &SessionId) -> Result<Option<&ScoreRecord>, DashboardError> {
        Ok(self.history(id)?.last())
    }

    pub fn points(&self, id: &SessionId) -> Result<i64, DashboardError> {
        let username = self.current_user(id)?;

        Ok(self.points.points(username))
    }

    pub fn check_routine(
        &self,
        id: &SessionId,
        answers: &RoutineAnswers,
    ) -> Result<RoutineScore, DashboardError> {
        self.current_user(id)?;

        Ok(routine::evaluate(answers))
    }

    pub fn perform(
        &mut self,
        id: &SessionId,
        action: Action,
        today: NaiveDate,
    ) -> Result<Box<dyn Reply>, DashboardError> {
        debug!(session = %id, ?action, "perform");

        if action.requires_login() {
            self.current_user(id)?;
        }

        match action {
            Action::Register { username, password } => {
                self.register(&username, &password)?;

                Ok(Box::new(replies::RegisteredReply { username }))
            }
            Action::Login { username, password } => {
                self.login(id, &username, &password)?;

                Ok(Box::new(replies::WelcomeReply {
                    points: self.points(id)?,
                    username,
                }))
            }
            Action::Logout => {
                self.close_session(id)?;

                Ok(Box::new(SimpleReply::LoggedOut))
            }
            Action::Menu => Ok(Box::new(replying::menu())),
            Action::Help => Ok(Box::new(replying::help())),
            Action::AnalysisForm => Ok(Box::new(replying::analysis_form())),
            Action::Analyze(inputs) => {
                let analysis = self.analyze(id, &inputs, today)?;

                Ok(Box::new(replying::score_reply(
                    &analysis.record,
                    self.history(id)?,
                    analysis.points,
                )))
            }
            Action::History => Ok(Box::new(replies::HistoryReply {
                username: self.current_user(id)?.to_owned(),
                records: replying::observe_history(self.history(id)?),
            })),
            Action::Report => match self.latest_record(id)? {
                Some(record) => Ok(Box::new(replying::report_reply(record))),
                None => Ok(Box::new(SimpleReply::NotFound)),
            },
            Action::Points => Ok(Box::new(replies::PointsReply {
                points: self.points(id)?,
            })),
            Action::DailyTips => Ok(Box::new(replying::daily_tips())),
            Action::NumberedTips => Ok(Box::new(replying::numbered_tips())),
            Action::Questions => Ok(Box::new(replying::questions())),
            Action::Ask(question) => match content::faq_answer(&question) {
                Some(answer) => Ok(Box::new(replies::AnswerReply {
                    answer: answer.to_owned(),
                    question,
                })),
                None => Ok(Box::new(SimpleReply::NotFound)),
            },
            Action::Checklists => Ok(Box::new(replying::checklists())),
            Action::CheckRoutine(answers) => Ok(Box::new(replies::RoutineReply::from(
                self.check_routine(id, &answers)?,
            ))),
            Action::Advice => Ok(Box::new(replying::advice())),
            Action::ComingSoon(feature) => Ok(Box::new(replying::coming_soon(feature))),
        }
    }
}
