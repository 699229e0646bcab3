use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use warp::Filter;
use warp::http::StatusCode;

use crate::session_manager::SessionManager;
use game_types::{GameError, NewUserResponse, ShareResponse, SubmitGuessRequest};

pub mod config;
pub mod remote;
pub mod session_manager;

#[derive(Deserialize)]
struct PlayersQuery {
    q: Option<String>,
    limit: Option<usize>,
}

pub fn create_routes(
    session_manager: Arc<SessionManager>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let manager_filter = warp::any().map({
        let session_manager = session_manager.clone();
        move || session_manager.clone()
    });

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    let new_user = warp::path("users")
        .and(warp::path::end())
        .and(warp::post())
        .and(manager_filter.clone())
        .map(|manager: Arc<SessionManager>| {
            warp::reply::with_status(
                warp::reply::json(&NewUserResponse {
                    user_id: manager.new_user(),
                }),
                StatusCode::OK,
            )
        });

    let session = warp::path!("session" / String)
        .and(warp::get())
        .and(manager_filter.clone())
        .and_then(handle_session_request);

    let submit_guess = warp::path("submit-guess")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json::<SubmitGuessRequest>())
        .and(manager_filter.clone())
        .and_then(handle_submit_guess);

    let stats = warp::path!("stats" / String)
        .and(warp::get())
        .and(manager_filter.clone())
        .and_then(handle_stats_request);

    let share = warp::path!("share" / String)
        .and(warp::get())
        .and(manager_filter.clone())
        .and_then(handle_share_request);

    let players = warp::path("players")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<PlayersQuery>())
        .and(manager_filter.clone())
        .map(|query: PlayersQuery, manager: Arc<SessionManager>| {
            let names = manager.suggest(query.q.as_deref().unwrap_or(""), query.limit);
            warp::reply::with_status(warp::reply::json(&names), StatusCode::OK)
        });

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST"]);

    health
        .or(new_user)
        .or(session)
        .or(submit_guess)
        .or(stats)
        .or(share)
        .or(players)
        .with(cors)
        .with(warp::log("russell"))
}

type JsonReply = warp::reply::WithStatus<warp::reply::Json>;

fn status_for(err: &GameError) -> StatusCode {
    match err {
        GameError::UnknownPlayer { .. } | GameError::InvalidAttemptCount { .. } => {
            StatusCode::BAD_REQUEST
        }
        GameError::SessionComplete
        | GameError::GuessLimitReached
        | GameError::SubmissionInProgress => StatusCode::CONFLICT,
        GameError::TargetUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        GameError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_reply(err: GameError) -> JsonReply {
    warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": err,
            "message": err.to_string(),
        })),
        status_for(&err),
    )
}

fn json_reply<T: serde::Serialize>(result: Result<T, GameError>) -> JsonReply {
    match result {
        Ok(body) => warp::reply::with_status(warp::reply::json(&body), StatusCode::OK),
        Err(err) => error_reply(err),
    }
}

fn invalid_user_id() -> JsonReply {
    warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": "Invalid user ID format"
        })),
        StatusCode::BAD_REQUEST,
    )
}

fn is_valid_user_id(user_id: &str) -> bool {
    Uuid::parse_str(user_id).is_ok()
}

async fn handle_session_request(
    user_id: String,
    session_manager: Arc<SessionManager>,
) -> Result<JsonReply, warp::Rejection> {
    if !is_valid_user_id(&user_id) {
        return Ok(invalid_user_id());
    }

    Ok(json_reply(session_manager.session_view(&user_id).await))
}

async fn handle_submit_guess(
    request: SubmitGuessRequest,
    session_manager: Arc<SessionManager>,
) -> Result<JsonReply, warp::Rejection> {
    if !is_valid_user_id(&request.user_id) {
        return Ok(invalid_user_id());
    }

    Ok(json_reply(
        session_manager
            .submit_guess(&request.user_id, &request.guess)
            .await,
    ))
}

async fn handle_stats_request(
    user_id: String,
    session_manager: Arc<SessionManager>,
) -> Result<JsonReply, warp::Rejection> {
    if !is_valid_user_id(&user_id) {
        return Ok(invalid_user_id());
    }

    Ok(json_reply(session_manager.stats(&user_id).await))
}

async fn handle_share_request(
    user_id: String,
    session_manager: Arc<SessionManager>,
) -> Result<JsonReply, warp::Rejection> {
    if !is_valid_user_id(&user_id) {
        return Ok(invalid_user_id());
    }

    let text = session_manager.share_text(&user_id).await;
    Ok(json_reply(text.map(|text| ShareResponse { text })))
}
