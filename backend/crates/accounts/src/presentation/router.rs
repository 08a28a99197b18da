//! Accounts Router
//!
//! `/register` and `/login` are public; everything under `/profile` sits
//! behind the bearer-token middleware.

use axum::Router;
use axum::middleware;
use axum::routing::{get, post, put};
use std::sync::Arc;

use platform::token::TokenService;

use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{
    AccountAppState, delete_profile, get_profile, login, register, update_profile,
    update_profile_picture,
};
use crate::presentation::middleware::{AuthLayerState, require_auth};

/// Build the accounts router backed by PostgreSQL
pub fn accounts_router(repo: PgUserRepository, tokens: Arc<TokenService>) -> Router {
    accounts_router_generic(Arc::new(repo), tokens)
}

/// Build the accounts router over any repository implementation
pub fn accounts_router_generic<R>(repo: Arc<R>, tokens: Arc<TokenService>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let state = Arc::new(AccountAppState::new(repo, Arc::clone(&tokens)));
    let auth = AuthLayerState { tokens };

    let protected = Router::new()
        .route(
            "/profile",
            get(get_profile::<R>)
                .put(update_profile::<R>)
                .delete(delete_profile::<R>),
        )
        .route("/profile/picture", put(update_profile_picture::<R>))
        .route_layer(middleware::from_fn_with_state(auth, require_auth));

    Router::new()
        .route("/register", post(register::<R>))
        .route("/login", post(login::<R>))
        .merge(protected)
        .with_state(state)
}
