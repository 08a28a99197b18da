//! Posts Router
//!
//! Every route requires a valid bearer token.

use axum::Router;
use axum::middleware;
use axum::routing::get;
use std::sync::Arc;

use platform::token::TokenService;

use accounts::presentation::middleware::{AuthLayerState, require_auth};

use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{
    PostAppState, create_post, delete_post, get_post, list_posts, update_post,
};

/// Build the posts router backed by PostgreSQL
pub fn posts_router(repo: PgPostRepository, tokens: Arc<TokenService>) -> Router {
    posts_router_generic(Arc::new(repo), tokens)
}

/// Build the posts router over any repository implementation
pub fn posts_router_generic<R>(repo: Arc<R>, tokens: Arc<TokenService>) -> Router
where
    R: PostRepository + Send + Sync + 'static,
{
    let state = Arc::new(PostAppState::new(repo));
    let auth = AuthLayerState { tokens };

    Router::new()
        .route("/posts", get(list_posts::<R>).post(create_post::<R>))
        .route(
            "/posts/{postId}",
            get(get_post::<R>)
                .put(update_post::<R>)
                .delete(delete_post::<R>),
        )
        .route_layer(middleware::from_fn_with_state(auth, require_auth))
        .with_state(state)
}
