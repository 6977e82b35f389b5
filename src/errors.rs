use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

use crate::search::SearchError;

#[derive(Debug)]
pub enum AppError {
    Template(askama::Error),
    Search(SearchError),
    BadRequest(String),
    Forbidden(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Search(e) => write!(f, "{e}"),
            AppError::BadRequest(e) => write!(f, "Bad request: {e}"),
            AppError::Forbidden(e) => write!(f, "Forbidden: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(e) => HttpResponse::BadRequest().body(e.clone()),
            AppError::Forbidden(e) => HttpResponse::Forbidden().body(e.clone()),
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        AppError::Search(e)
    }
}

/// Render a template into a 200 HTML response.
pub fn render<T: Template>(tmpl: T) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(tmpl.render()?))
}
