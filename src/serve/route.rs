use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use super::{handlers::*, jwt_auth, state::AppState};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://127.0.0.1:8080"),
            HeaderValue::from_static("http://127.0.0.1:5000"),
        ])
        .allow_methods([Method::GET, Method::POST])
        .allow_credentials(true)
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE]);

    let auth = || middleware::from_fn_with_state(app_state.clone(), jwt_auth::auth);

    Router::new()
        .route("/health", get(health_handler))
        .route("/menu", get(menu_handler))
        .route(
            "/user",
            get(user_handler)
                .route_layer(auth())
                .post(register_handler),
        )
        .route("/user/login", post(login_handler))
        .route("/user/logout", post(logout_handler).route_layer(auth()))
        .route(
            "/analyze",
            get(form_handler).post(analyze_handler).route_layer(auth()),
        )
        .route("/history", get(history_handler).route_layer(auth()))
        .route("/report", get(report_handler).route_layer(auth()))
        .route("/points", get(points_handler).route_layer(auth()))
        .route("/tips", get(tips_handler).route_layer(auth()))
        .route("/tips/numbered", get(numbered_tips_handler).route_layer(auth()))
        .route(
            "/faq",
            get(questions_handler).post(ask_handler).route_layer(auth()),
        )
        .route(
            "/routine",
            get(checklists_handler)
                .post(routine_handler)
                .route_layer(auth()),
        )
        .route("/advice", get(advice_handler).route_layer(auth()))
        .route("/features/:name", get(feature_handler).route_layer(auth()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .layer(Extension(app_state.clone()))
}
