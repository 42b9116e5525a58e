mod errors;
mod replying;

pub mod accounts;
pub mod actions;
pub mod content;
pub mod dashboard;
pub mod parser;
pub mod points;
pub mod report;
pub mod routine;
pub mod scoring;
pub mod sessions;

pub use accounts::*;
pub use actions::*;
pub use dashboard::*;
pub use errors::*;
pub use parser::parse_action;
pub use sessions::*;

pub mod prelude {
    pub use crate::accounts::{Account, AccountStore, ScoreRecord};
    pub use crate::actions::Action;
    pub use crate::content::Feature;
    pub use crate::dashboard::{Analysis, Dashboard};
    pub use crate::errors::DashboardError;
    pub use crate::parser::parse_action;
    pub use crate::report::{render_report, report_bytes, REPORT_CONTENT_TYPE, REPORT_FILE_NAME};
    pub use crate::routine::{Answer, RoutineAnswers, RoutineScore, Section, Verdict};
    pub use crate::scoring::{compute_score, LifestyleInputs, Score, SkinType};
    pub use crate::sessions::{SessionContext, SessionId};
}

#[cfg(test)]
#[ctor::ctor]
fn initialize_tests() {
    // log_test()
}

#[cfg(test)]
#[allow(dead_code)]
fn log_test() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "engine=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
