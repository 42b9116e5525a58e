use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::*;

use engine::prelude::*;
use replies::{ErrorReply, Reply, SimpleReply};

use crate::text::Renderer;

/// One person typing commands at the dashboard. Logging out leaves the
/// terminal with a fresh anonymous session.
pub struct Terminal {
    dashboard: Dashboard,
    session: SessionId,
    renderer: Renderer,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let mut dashboard = Dashboard::new();
        let session = dashboard.open_session();

        Ok(Self {
            dashboard,
            session,
            renderer: Renderer::new()?,
        })
    }

    pub fn evaluate(&mut self, line: &str) -> Result<String> {
        self.evaluate_on(line, Local::now().date_naive())
    }

    pub fn evaluate_on(&mut self, line: &str, today: NaiveDate) -> Result<String> {
        let reply = self.perform(line, today);

        self.renderer.render_reply(reply.as_ref())
    }

    fn perform(&mut self, line: &str, today: NaiveDate) -> Box<dyn Reply> {
        let Some(action) = parse_action(line) else {
            return Box::new(SimpleReply::What);
        };

        let logging_out = matches!(action, Action::Logout);

        match self.dashboard.perform(&self.session, action, today) {
            Ok(reply) => {
                if logging_out {
                    self.session = self.dashboard.open_session();
                }

                reply
            }
            Err(e) => {
                debug!("refused: {}", e);

                Box::new(ErrorReply::new(e.to_string()))
            }
        }
    }
}
