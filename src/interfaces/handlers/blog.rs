use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::blog::{BlogPatch, NewBlog}, errors::AppError, AppState};

#[instrument(skip(state, data))]
pub async fn create_blog(
    state: web::Data<AppState>,
    data: web::Json<NewBlog>,
) -> Result<impl Responder, AppError> {
    let response = state.blog_handler
        .create(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(state))]
pub async fn get_blogs(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let blogs = state.blog_handler.list().await?;

    Ok(HttpResponse::Ok().json(blogs))
}

#[instrument(skip(state, data))]
pub async fn update_blog(
    blog_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<BlogPatch>,
) -> Result<impl Responder, AppError> {
    let response = state.blog_handler
        .update(&blog_id, &data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(state))]
pub async fn delete_blog(
    blog_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let response = state.blog_handler.delete(&blog_id).await?;

    Ok(HttpResponse::Ok().json(response))
}
