//! Stateless HTTP API over the engine.
//!
//! Every request carries the state it acts on, so handlers share nothing
//! and concurrent games never touch each other.

use axum::{
    Json, Router,
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use derive_more::{Display, Error};
use liquid_tictactoe::{
    Board, GameState, Mark, MoveError, MoveScore, Position, Status, analyze, apply_move,
    compute_best_move, evaluate_status, new_game,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tracing::{debug, info, instrument, warn};

/// Request body for `POST /games`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGameRequest {
    /// Mark that opens the game.
    #[serde(default = "default_first")]
    pub first: Mark,
}

fn default_first() -> Mark {
    Mark::X
}

/// Request body for `POST /moves`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// State to move from.
    pub state: GameState,
    /// Board index, 0-8.
    pub position: i64,
}

/// Request body for `POST /best-move` and `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Board in 9-character notation.
    pub board: Board,
    /// Mark to find a move for.
    pub mover: Mark,
}

/// Response body for `POST /best-move`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestMoveResponse {
    /// Board index, 0-8.
    pub position: usize,
    /// Position label.
    pub label: String,
}

/// Response body for `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Score of every legal move, in board order.
    pub scores: Vec<MoveScore>,
}

/// Request body for `POST /status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRequest {
    /// Board in 9-character notation.
    pub board: Board,
    /// Mark that moved last.
    pub last: Mark,
}

/// Response body for `POST /status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Evaluated status.
    pub status: Status,
}

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
    /// Stable machine-readable kind.
    pub kind: String,
}

/// Error returned by a handler.
#[derive(Debug, Clone, Display, Error)]
pub enum ApiError {
    /// The engine rejected a move.
    #[display("{}", _0)]
    Move(MoveError),

    /// The board has no move left to search.
    #[display("No move available: the game is already over")]
    NoMove,
}

impl From<MoveError> for ApiError {
    fn from(err: MoveError) -> Self {
        ApiError::Move(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            ApiError::Move(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.kind()),
            ApiError::NoMove => (StatusCode::CONFLICT, "no_move"),
        };
        warn!(%status, kind, error = %self, "Request rejected");
        let body = ErrorBody {
            error: self.to_string(),
            kind: kind.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Builds the API router.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/games", post(create_game))
        .route("/moves", post(make_move))
        .route("/best-move", post(best_move))
        .route("/analyze", post(analyze_moves))
        .route("/status", post(status))
}

/// Serves the API until the process exits.
#[instrument]
pub async fn serve(host: String, port: u16) -> std::io::Result<()> {
    let logging = ServiceBuilder::new().map_request(|req: Request<Body>| {
        info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
        req
    });
    let app = router().layer(logging);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Server ready at http://{}:{}/", host, port);
    axum::serve(listener, app).await
}

async fn health() -> &'static str {
    "ok"
}

#[instrument(skip(req), fields(first = %req.first))]
async fn create_game(Json(req): Json<NewGameRequest>) -> Json<GameState> {
    Json(new_game(req.first))
}

#[instrument(skip(req), fields(position = req.position, board = %req.state.board()))]
async fn make_move(Json(req): Json<MoveRequest>) -> Result<Json<GameState>, ApiError> {
    let state = apply_move(&req.state, req.position)?;
    debug!(status = %state.status(), "Move applied");
    Ok(Json(state))
}

#[instrument(skip(req), fields(board = %req.board, mover = %req.mover))]
async fn best_move(Json(req): Json<SearchRequest>) -> Result<Json<BestMoveResponse>, ApiError> {
    let pos: Position = compute_best_move(&req.board, req.mover, req.mover.opponent())
        .ok_or(ApiError::NoMove)?;
    Ok(Json(BestMoveResponse {
        position: pos.to_index(),
        label: pos.label().to_string(),
    }))
}

#[instrument(skip(req), fields(board = %req.board, mover = %req.mover))]
async fn analyze_moves(Json(req): Json<SearchRequest>) -> Result<Json<AnalyzeResponse>, ApiError> {
    let scores = analyze(&req.board, req.mover, req.mover.opponent());
    if scores.is_empty() {
        return Err(ApiError::NoMove);
    }
    Ok(Json(AnalyzeResponse { scores }))
}

#[instrument(skip(req), fields(board = %req.board, last = %req.last))]
async fn status(Json(req): Json<StatusRequest>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: evaluate_status(&req.board, req.last),
    })
}
