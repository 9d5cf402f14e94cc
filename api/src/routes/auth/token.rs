use actix_web::{web, HttpRequest, HttpResponse};

use crate::cookies::{access_cookie_name, refresh_token_from, token_cookie};
use crate::dto::SuccessResponse;
use crate::handlers::ApiError;
use crate::state::AppState;

/// POST /api/refresh-token
///
/// Takes the refresh token from either role's cookie or a Bearer header and
/// sets a fresh access cookie for the token's role.
pub async fn refresh(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let token = refresh_token_from(&req);
    let session = state.auth.refresh_token(token.as_deref()).await?;

    let cookie = token_cookie(access_cookie_name(session.role), session.access_token, &state.cookies);
    Ok(HttpResponse::Created()
        .cookie(cookie)
        .json(SuccessResponse { success: true }))
}
