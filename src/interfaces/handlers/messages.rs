use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::message::NewMessage, errors::AppError, AppState};

// Messages are write-once from the public site: only create and list are routed.

#[instrument(skip(state, form))]
pub async fn create_message(
    state: web::Data<AppState>,
    form: web::Json<NewMessage>,
) -> Result<impl Responder, AppError> {
    let response = state.message_handler
        .create(form.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(state))]
pub async fn get_messages(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let messages = state.message_handler.list().await?;

    Ok(HttpResponse::Ok().json(messages))
}
