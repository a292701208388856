//! Blog post handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::PostInput;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.posts.find_all().await)
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.find_by_id(&path).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostInput>,
) -> AppResult<HttpResponse> {
    let fields = body.into_inner().into_fields().inspect_err(|errors| {
        tracing::warn!(%errors, "Rejected new post");
    })?;

    let post = state.posts.create(fields).await;
    tracing::info!(post_id = %post.id, "Created blog post");

    Ok(HttpResponse::Created().json(post))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostInput>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let patch = body.into_inner().into_patch(&id).inspect_err(|errors| {
        tracing::warn!(post_id = %id, %errors, "Rejected post update");
    })?;

    tracing::info!(post_id = %id, "Updating blog post");
    let post = state.posts.update(&id, patch).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete(&path).await?;
    tracing::info!(post_id = %path, "Deleted blog post");

    Ok(HttpResponse::NoContent().finish())
}
