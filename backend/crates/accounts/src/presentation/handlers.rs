//! HTTP Handlers
//!
//! Thin adapters from HTTP to the use cases. Every success is a 200; error
//! mapping lives on `AccountError`.

use axum::Json;
use axum::extract::{Extension, Multipart, State};
use std::sync::Arc;

use platform::token::TokenService;

use crate::application::{
    LoginInput, LoginUseCase, ProfileUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AccountResult;
use crate::presentation::dto::{
    LoginRequest, MessageResponse, PictureForm, ProfileForm, RegisterForm, TokenResponse,
    UserResponse,
};
use crate::presentation::middleware::AuthenticatedUser;

/// Shared handler state
pub struct AccountAppState<R>
where
    R: UserRepository,
{
    pub register: RegisterUseCase<R>,
    pub login: LoginUseCase<R>,
    pub profile: ProfileUseCase<R>,
}

impl<R> AccountAppState<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self {
            register: RegisterUseCase::new(Arc::clone(&repo)),
            login: LoginUseCase::new(Arc::clone(&repo), tokens),
            profile: ProfileUseCase::new(repo),
        }
    }
}

/// POST /register
pub async fn register<R>(
    State(state): State<Arc<AccountAppState<R>>>,
    multipart: Multipart,
) -> AccountResult<Json<MessageResponse>>
where
    R: UserRepository,
{
    let form = RegisterForm::from_multipart(multipart).await?;

    state
        .register
        .execute(RegisterInput {
            email: form.email,
            password: form.password,
            name: form.name,
            address: form.address,
            profile_picture: form.profile_picture,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "User registered successfully",
    }))
}

/// POST /login
pub async fn login<R>(
    State(state): State<Arc<AccountAppState<R>>>,
    Json(request): Json<LoginRequest>,
) -> AccountResult<Json<TokenResponse>>
where
    R: UserRepository,
{
    let output = state
        .login
        .execute(LoginInput {
            email: request.email,
            password: request.password,
        })
        .await?;

    Ok(Json(TokenResponse {
        token: output.token,
    }))
}

/// GET /profile
pub async fn get_profile<R>(
    State(state): State<Arc<AccountAppState<R>>>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> AccountResult<Json<UserResponse>>
where
    R: UserRepository,
{
    let user = state.profile.get(&caller.0).await?;

    Ok(Json(UserResponse::from(user)))
}

/// PUT /profile
pub async fn update_profile<R>(
    State(state): State<Arc<AccountAppState<R>>>,
    Extension(caller): Extension<AuthenticatedUser>,
    multipart: Multipart,
) -> AccountResult<Json<UserResponse>>
where
    R: UserRepository,
{
    let form = ProfileForm::from_multipart(multipart).await?;

    let user = state.profile.update(&caller.0, form.into_patch()).await?;

    Ok(Json(UserResponse::from(user)))
}

/// PUT /profile/picture
pub async fn update_profile_picture<R>(
    State(state): State<Arc<AccountAppState<R>>>,
    Extension(caller): Extension<AuthenticatedUser>,
    multipart: Multipart,
) -> AccountResult<Json<UserResponse>>
where
    R: UserRepository,
{
    let form = PictureForm::from_multipart(multipart).await?;

    let user = state
        .profile
        .update_picture(&caller.0, form.profile_picture)
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// DELETE /profile
pub async fn delete_profile<R>(
    State(state): State<Arc<AccountAppState<R>>>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> AccountResult<Json<MessageResponse>>
where
    R: UserRepository,
{
    state.profile.delete(&caller.0).await?;

    Ok(Json(MessageResponse {
        message: "User Deleted Successfully",
    }))
}
