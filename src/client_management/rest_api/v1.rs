use crate::{knight_moves, Candidate, Coordinate, PathError, Route};

use actix_web::{
    error::{InternalError, PathError as SegmentError},
    web::{Json, Path},
    HttpRequest, HttpResponse,
};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathRequest {
    pub start: Candidate,
    pub target: Candidate,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PathResponse {
    pub path: Vec<Coordinate>,
    pub moves: usize,
}

impl From<Route> for PathResponse {
    fn from(route: Route) -> Self {
        let moves = route.moves();
        Self {
            path: route.into_path(),
            moves,
        }
    }
}

#[derive(Deserialize)]
pub struct SquareSelector {
    row: i32,
    col: i32,
}

#[derive(Serialize)]
struct SelectorError {
    error: &'static str,
    message: String,
}

/// Answers unparsable `{row}/{col}` segments with 400 instead of actix's 404.
pub fn square_selector_error(err: SegmentError, _request: &HttpRequest) -> actix_web::Error {
    debug!("rejecting square selector: {}", err);
    let body = SelectorError {
        error: "invalid_square",
        message: err.to_string(),
    };
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

fn error_response(err: PathError) -> HttpResponse {
    let mut response = match err {
        PathError::OffBoard { .. } => HttpResponse::BadRequest(),
        PathError::NoPath { .. } => HttpResponse::UnprocessableEntity(),
        PathError::SearchLimit { .. } => HttpResponse::InternalServerError(),
    };
    response.json(err)
}

pub async fn find_path(body: Json<PathRequest>) -> HttpResponse {
    let PathRequest { start, target } = body.into_inner();
    debug!("path request {:?} -> {:?}", start, target);
    match crate::find_path(start, target) {
        Ok(route) => HttpResponse::Ok().json(PathResponse::from(route)),
        Err(err) => error_response(err),
    }
}

pub async fn get_moves(path: Path<SquareSelector>) -> HttpResponse {
    let SquareSelector { row, col } = path.into_inner();
    debug!("moves request ({}, {})", row, col);
    match Coordinate::new(row, col) {
        Some(from) => HttpResponse::Ok().json(knight_moves(from)),
        None => error_response(PathError::OffBoard { row, col }),
    }
}
