use anyhow::Result;
use chrono::{Duration, NaiveDate, Utc};
use replies::ToJson;
use serde_json::json;

use super::*;
use crate::{content::Feature, routine::Answer};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

fn inputs(exercise_days: i32) -> LifestyleInputs {
    LifestyleInputs {
        sleep_hours: 7,
        water_litres: 2.0,
        stress_level: 5,
        diet_quality: 5,
        exercise_days,
        ..Default::default()
    }
}

fn logged_in(dashboard: &mut Dashboard, username: &str) -> Result<SessionId> {
    dashboard.register(username, "secret")?;
    let id = dashboard.open_session();
    dashboard.login(&id, username, "secret")?;
    Ok(id)
}

#[test]
fn it_refuses_analysis_when_logged_out() {
    let mut dashboard = Dashboard::new();
    let id = dashboard.open_session();

    assert_eq!(
        dashboard.analyze(&id, &inputs(3), today()),
        Err(DashboardError::NotLoggedIn)
    );
}

#[test]
fn it_records_one_score_and_ten_points_per_analysis() -> Result<()> {
    let mut dashboard = Dashboard::new();
    let id = logged_in(&mut dashboard, "jacob")?;

    let first = dashboard.analyze(&id, &inputs(3), today())?;

    assert_eq!(first.record, ScoreRecord::new(today(), 38.0, 38.0));
    assert_eq!(first.points, 10);
    assert_eq!(dashboard.history(&id)?.len(), 1);

    let second = dashboard.analyze(&id, &inputs(4), today())?;

    assert_eq!(second.record, ScoreRecord::new(today(), 38.0, 48.0));
    assert_eq!(second.points, 20);
    assert_eq!(dashboard.points(&id)?, 20);
    assert_eq!(dashboard.history(&id)?.len(), 2);
    assert_eq!(dashboard.latest_record(&id)?, Some(&second.record));

    Ok(())
}

#[test]
fn it_awards_points_regardless_of_score() -> Result<()> {
    let mut dashboard = Dashboard::new();
    let id = logged_in(&mut dashboard, "jacob")?;

    let terrible = LifestyleInputs {
        sleep_hours: 0,
        water_litres: -5.0,
        stress_level: 10,
        diet_quality: 1,
        ..Default::default()
    };
    let analysis = dashboard.analyze(&id, &terrible, today())?;

    assert!(analysis.record.score < 0.0);
    assert_eq!(analysis.points, 10);

    Ok(())
}

#[test]
fn it_keeps_sessions_apart() -> Result<()> {
    let mut dashboard = Dashboard::new();
    let jacob = logged_in(&mut dashboard, "jacob")?;
    let carla = logged_in(&mut dashboard, "carla")?;
    let anonymous = dashboard.open_session();

    dashboard.analyze(&jacob, &inputs(3), today())?;
    dashboard.analyze(&jacob, &inputs(3), today())?;
    dashboard.analyze(&carla, &inputs(3), today())?;

    assert_eq!(dashboard.current_user(&jacob)?, "jacob");
    assert_eq!(dashboard.current_user(&carla)?, "carla");
    assert_eq!(
        dashboard.current_user(&anonymous),
        Err(DashboardError::NotLoggedIn)
    );
    assert_eq!(dashboard.points(&jacob)?, 20);
    assert_eq!(dashboard.points(&carla)?, 10);
    assert_eq!(dashboard.history(&carla)?.len(), 1);

    Ok(())
}

#[test]
fn it_leaves_session_unchanged_after_failed_login() -> Result<()> {
    let mut dashboard = Dashboard::new();
    dashboard.register("jacob", "secret")?;
    let id = dashboard.open_session();

    assert_eq!(
        dashboard.login(&id, "jacob", "wrong"),
        Err(DashboardError::Auth)
    );
    assert_eq!(dashboard.session(&id)?.current_user(), None);

    Ok(())
}

#[test]
fn it_loses_history_but_keeps_points_on_reregistration() -> Result<()> {
    let mut dashboard = Dashboard::new();
    let id = logged_in(&mut dashboard, "jacob")?;
    dashboard.analyze(&id, &inputs(3), today())?;

    dashboard.register("jacob", "another")?;

    assert!(dashboard.history(&id)?.is_empty());
    assert_eq!(dashboard.points(&id)?, 10);

    Ok(())
}

#[test]
fn it_scores_routines_without_touching_points() -> Result<()> {
    let mut dashboard = Dashboard::new();
    let id = logged_in(&mut dashboard, "jacob")?;

    let score = dashboard.check_routine(&id, &RoutineAnswers::all(Answer::No))?;

    assert_eq!(score.score, -75);
    assert_eq!(dashboard.points(&id)?, 0);
    assert!(dashboard.history(&id)?.is_empty());

    Ok(())
}

#[test]
fn it_forgets_user_after_logout() -> Result<()> {
    let mut dashboard = Dashboard::new();
    let id = logged_in(&mut dashboard, "jacob")?;

    dashboard.close_session(&id)?;

    assert_eq!(
        dashboard.current_user(&id),
        Err(DashboardError::UnknownSession(id.clone()))
    );

    Ok(())
}

#[test]
fn it_performs_login_page_actions_while_logged_out() -> Result<()> {
    let mut dashboard = Dashboard::new();
    let id = dashboard.open_session();

    let menu = dashboard.perform(&id, Action::Menu, today())?;
    assert_eq!(
        menu.to_tagged_json()?["menuReply"]["entries"][0],
        json!("Login / Register")
    );

    dashboard.perform(
        &id,
        Action::Register {
            username: "jacob".to_owned(),
            password: "secret".to_owned(),
        },
        today(),
    )?;

    let welcome = dashboard.perform(
        &id,
        Action::Login {
            username: "jacob".to_owned(),
            password: "secret".to_owned(),
        },
        today(),
    )?;
    assert_eq!(
        welcome.to_tagged_json()?,
        json!({ "welcomeReply": { "username": "jacob", "points": 0 } })
    );

    Ok(())
}

#[test]
fn it_gates_features_behind_login() {
    let mut dashboard = Dashboard::new();
    let id = dashboard.open_session();

    for action in [
        Action::DailyTips,
        Action::Points,
        Action::Ask("Is sunscreen important?".to_owned()),
        Action::ComingSoon(Feature::ArTryOn),
        Action::Analyze(LifestyleInputs::default()),
    ] {
        assert_eq!(
            dashboard.perform(&id, action, today()).err(),
            Some(DashboardError::NotLoggedIn)
        );
    }
}

#[test]
fn it_performs_analysis_with_history_and_recommendations() -> Result<()> {
    let mut dashboard = Dashboard::new();
    let id = logged_in(&mut dashboard, "jacob")?;

    dashboard.perform(&id, Action::Analyze(inputs(3)), today())?;
    let reply = dashboard.perform(&id, Action::Analyze(inputs(4)), today())?;
    let value = reply.to_tagged_json()?;

    assert_eq!(value["scoreReply"]["score"], json!(38.0));
    assert_eq!(value["scoreReply"]["futureScore"], json!(48.0));
    assert_eq!(value["scoreReply"]["points"], json!(20));
    assert_eq!(
        value["scoreReply"]["recommendations"]
            .as_array()
            .map(|r| r.len()),
        Some(4)
    );
    assert_eq!(
        value["scoreReply"]["history"],
        json!([
            { "date": "2026-10-19", "score": 38.0, "futureScore": 38.0 },
            { "date": "2026-10-19", "score": 38.0, "futureScore": 48.0 },
        ])
    );

    Ok(())
}

#[test]
fn it_performs_report_for_latest_record() -> Result<()> {
    let mut dashboard = Dashboard::new();
    let id = logged_in(&mut dashboard, "jacob")?;

    let missing = dashboard.perform(&id, Action::Report, today())?;
    assert_eq!(
        missing.to_tagged_json()?,
        json!({ "simpleReply": "notFound" })
    );

    dashboard.analyze(&id, &inputs(4), today())?;
    let report = dashboard.perform(&id, Action::Report, today())?;
    let value = report.to_tagged_json()?;

    assert_eq!(value["reportReply"]["fileName"], json!("skin_report.pdf"));
    assert_eq!(value["reportReply"]["contentType"], json!("application/pdf"));
    assert_eq!(
        value["reportReply"]["text"],
        json!("Skin Report\nDate: 2026-10-19\nCurrent Score: 38.0\nFuture Score: 48.0")
    );

    Ok(())
}

#[test]
fn it_performs_faq_lookup() -> Result<()> {
    let mut dashboard = Dashboard::new();
    let id = logged_in(&mut dashboard, "jacob")?;

    let answer = dashboard.perform(&id, Action::Ask("Best diet for skin?".to_owned()), today())?;
    assert_eq!(
        answer.to_tagged_json()?,
        json!({
            "answerReply": {
                "question": "Best diet for skin?",
                "answer": "Fruits, vegetables, omega-3, nuts."
            }
        })
    );

    let unknown = dashboard.perform(&id, Action::Ask("Best diet?".to_owned()), today())?;
    assert_eq!(
        unknown.to_tagged_json()?,
        json!({ "simpleReply": "notFound" })
    );

    Ok(())
}

#[test]
fn it_expires_sessions_but_keeps_accounts() -> Result<()> {
    let mut dashboard = Dashboard::new();
    let id = logged_in(&mut dashboard, "jacob")?;
    let terminal = dashboard.open_session();
    dashboard.analyze(&id, &inputs(3), today())?;

    let now = Utc::now();
    dashboard.set_session_expiry(&id, now)?;

    assert_eq!(dashboard.expire_sessions(now - Duration::seconds(1)), 0);
    assert_eq!(dashboard.expire_sessions(now), 1);
    assert_eq!(dashboard.session_count(), 1);
    assert!(dashboard.session(&terminal).is_ok());
    assert_eq!(
        dashboard.current_user(&id),
        Err(DashboardError::UnknownSession(id.clone()))
    );

    let again = dashboard.open_session();
    dashboard.login(&again, "jacob", "secret")?;
    assert_eq!(dashboard.history(&again)?.len(), 1);
    assert_eq!(dashboard.points(&again)?, 10);

    Ok(())
}
