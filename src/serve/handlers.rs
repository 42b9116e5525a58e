use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::{Cookie, SameSite};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;
use tracing::*;

use engine::prelude::*;
use replies::{SimpleReply, ToJson};

use super::state::{AppState, CurrentSession, ServeError};

pub(crate) type ApiError = (StatusCode, Json<JsonValue>);

impl ServeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServeError::Dashboard(
                DashboardError::Validation
                | DashboardError::Auth
                | DashboardError::UnknownChecklistItem(_, _),
            ) => StatusCode::BAD_REQUEST,
            ServeError::Dashboard(DashboardError::NotLoggedIn | DashboardError::UnknownSession(_))
            | ServeError::Token(_) => StatusCode::UNAUTHORIZED,
            ServeError::NotFound => StatusCode::NOT_FOUND,
            ServeError::Dashboard(DashboardError::UnknownAccount(_))
            | ServeError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServeError> for (StatusCode, Json<JsonValue>) {
    fn from(value: ServeError) -> Self {
        let status = value.status_code();
        if status.is_server_error() {
            warn!(%status, "{}", value);
        }

        let error_response = json!({
            "status": "fail",
            "message": value.to_string(),
        });

        (status, Json(error_response))
    }
}

#[derive(Deserialize)]
pub(crate) struct Credentials {
    pub(crate) username: String,
    pub(crate) password: String,
}

#[derive(Deserialize)]
pub(crate) struct CredentialsWrapper {
    pub(crate) user: Credentials,
}

#[derive(Deserialize)]
pub(crate) struct Question {
    pub(crate) question: String,
}

#[derive(Deserialize)]
pub(crate) struct ChecklistAnswer {
    pub(crate) section: Section,
    pub(crate) item: String,
    pub(crate) answer: Answer,
}

/// Items left out count as done.
#[derive(Deserialize)]
pub(crate) struct RoutineForm {
    #[serde(default)]
    pub(crate) answers: Vec<ChecklistAnswer>,
}

fn send_user_token(
    state: &AppState,
    session: &CurrentSession,
) -> Result<impl IntoResponse, ApiError> {
    let token = state.issue_token(&session.id)?;

    let cookie = Cookie::build("token", token.to_owned())
        .path("/")
        .max_age(::time::Duration::minutes(state.env.token_max_age_minutes))
        .same_site(SameSite::Lax)
        .http_only(true)
        .finish();

    Ok((
        [(header::SET_COOKIE, cookie.to_string())],
        Json(json!({ "user": { "token": token, "username": session.username } })),
    ))
}

async fn perform(
    state: &AppState,
    session: &CurrentSession,
    action: Action,
) -> Result<Json<JsonValue>, ApiError> {
    Ok(Json(state.perform(session, action).await?))
}

pub(crate) async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({})))
}

pub(crate) async fn menu_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<JsonValue>, ApiError> {
    Ok(Json(state.perform_anonymous(Action::Menu).await?))
}

pub(crate) async fn register_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<CredentialsWrapper>,
) -> Result<impl IntoResponse, ApiError> {
    info!("register");

    let Credentials { username, password } = payload.user;
    let reply = state
        .perform_anonymous(Action::Register { username, password })
        .await?;

    Ok((StatusCode::CREATED, Json(reply)))
}

pub(crate) async fn login_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<CredentialsWrapper>,
) -> Result<impl IntoResponse, ApiError> {
    info!("login");

    let session = state
        .login(&payload.user.username, &payload.user.password)
        .await?;

    send_user_token(&state, &session)
}

pub(crate) async fn logout_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<impl IntoResponse, ApiError> {
    state.logout(&session).await?;

    let cookie = Cookie::build("token", "")
        .path("/")
        .max_age(::time::Duration::ZERO)
        .same_site(SameSite::Lax)
        .http_only(true)
        .finish();

    let reply = SimpleReply::LoggedOut
        .to_tagged_json()
        .map_err(ServeError::from)?;

    Ok(([(header::SET_COOKIE, cookie.to_string())], Json(reply)))
}

pub(crate) async fn user_handler(
    Extension(session): Extension<CurrentSession>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(json!({ "user": { "username": session.username } })))
}

pub(crate) async fn form_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Json<JsonValue>, ApiError> {
    perform(&state, &session, Action::AnalysisForm).await
}

pub(crate) async fn analyze_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
    Json(inputs): Json<LifestyleInputs>,
) -> Result<Json<JsonValue>, ApiError> {
    perform(&state, &session, Action::Analyze(inputs)).await
}

pub(crate) async fn history_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Json<JsonValue>, ApiError> {
    perform(&state, &session, Action::History).await
}

pub(crate) async fn report_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<impl IntoResponse, ApiError> {
    let bytes = state.report(&session).await?;

    Ok((
        [
            (header::CONTENT_TYPE, REPORT_CONTENT_TYPE.to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", REPORT_FILE_NAME),
            ),
        ],
        bytes,
    ))
}

pub(crate) async fn points_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Json<JsonValue>, ApiError> {
    perform(&state, &session, Action::Points).await
}

pub(crate) async fn tips_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Json<JsonValue>, ApiError> {
    perform(&state, &session, Action::DailyTips).await
}

pub(crate) async fn numbered_tips_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Json<JsonValue>, ApiError> {
    perform(&state, &session, Action::NumberedTips).await
}

pub(crate) async fn questions_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Json<JsonValue>, ApiError> {
    perform(&state, &session, Action::Questions).await
}

pub(crate) async fn ask_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
    Json(payload): Json<Question>,
) -> Result<Json<JsonValue>, ApiError> {
    perform(&state, &session, Action::Ask(payload.question)).await
}

pub(crate) async fn checklists_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Json<JsonValue>, ApiError> {
    perform(&state, &session, Action::Checklists).await
}

pub(crate) async fn routine_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
    Json(form): Json<RoutineForm>,
) -> Result<Json<JsonValue>, ApiError> {
    let mut answers = RoutineAnswers::default();
    for answered in form.answers {
        answers
            .answer(answered.section, &answered.item, answered.answer)
            .map_err(ServeError::from)?;
    }

    perform(&state, &session, Action::CheckRoutine(answers)).await
}

pub(crate) async fn advice_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Json<JsonValue>, ApiError> {
    perform(&state, &session, Action::Advice).await
}

pub(crate) async fn feature_handler(
    Extension(state): Extension<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
    Path(name): Path<String>,
) -> Result<Json<JsonValue>, ApiError> {
    let feature = name.parse::<Feature>().map_err(|_| ServeError::NotFound)?;

    perform(&state, &session, Action::ComingSoon(feature)).await
}
