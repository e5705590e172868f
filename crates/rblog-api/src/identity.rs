//! # Request Identity
//!
//! Resolves the session cookie into a `Requester` once per request; the
//! result is passed explicitly into every core call. Gated routes redirect
//! anonymous visitors to the login form before any logic runs.

use crate::handlers::AppState;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header::LOCATION;
use actix_web::{HttpRequest, HttpResponse};
use rblog_core::models::Requester;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "rblog_session";

/// Cookie → token → user id → user row. Any break in the chain means
/// Anonymous; a stale or forged cookie is not an error.
pub async fn current_requester(req: &HttpRequest, state: &AppState) -> Requester {
    let Some(cookie) = req.cookie(SESSION_COOKIE) else {
        return Requester::Anonymous;
    };
    let Some(user_id) = state.auth.verify_session(cookie.value()) else {
        return Requester::Anonymous;
    };
    match state.repo.find_user_by_id(user_id).await {
        Ok(Some(user)) => Requester::User {
            id: user.id,
            username: user.username,
            is_staff: user.is_staff,
        },
        _ => Requester::Anonymous,
    }
}

/// The authenticated (id, username), or the login redirect to return as-is.
pub fn require_login(requester: &Requester) -> Result<(Uuid, String), HttpResponse> {
    match requester {
        Requester::User { id, username, .. } => Ok((*id, username.clone())),
        Requester::Anonymous => Err(redirect("/auth/login/")),
    }
}

/// 303 See Other, the redirect used after every mutation.
pub fn redirect(to: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, to.to_string()))
        .finish()
}

pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

/// An expired blank cookie; browsers drop the session on sight.
pub fn clear_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}
