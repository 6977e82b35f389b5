use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::AppError;
use crate::session::{self, csrf};

#[derive(Deserialize)]
pub struct LanguageForm {
    pub language: String,
    pub next: Option<String>,
    pub csrf_token: String,
}

/// POST /language
/// Store the interface language preference and return to the page the
/// form was submitted from.
pub async fn set_language(
    session: Session,
    form: web::Form<LanguageForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    if !session::set_language(&session, &form.language) {
        log::warn!("Ignoring unsupported language code: {}", form.language);
        session::add_flash(
            &session,
            &format!("Unsupported language: {}", form.language),
        );
    }

    let next = form
        .next
        .as_deref()
        .filter(|n| is_local_path(n))
        .unwrap_or("/search");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", next.to_string()))
        .finish())
}

/// Only same-origin absolute paths are allowed as redirect targets.
fn is_local_path(next: &str) -> bool {
    next.starts_with('/') && !next.starts_with("//")
}
