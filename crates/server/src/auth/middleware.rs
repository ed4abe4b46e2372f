use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::jwt::{self, validate_session_token};

/// Permissive session middleware that handles authentication and cookie management.
///
/// On each request:
/// 1. Validates the session token from cookies (or Bearer header fallback)
///    and inserts `Claims` into request extensions on success
/// 2. Inserts a `CookieSlot` so server functions can schedule cookie changes
/// 3. After the handler runs, applies any pending cookie action to the response
///
/// Does NOT reject unauthenticated requests — downstream handlers decide authorization.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    let headers = req.headers().clone();

    if let Some(token) = cookies::extract_session_token(&headers) {
        match validate_session_token(&token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
            }
            Err(e) => {
                tracing::debug!(%e, "Rejected session token");
            }
        }
    }

    // Insert the slot so server functions can schedule cookie changes
    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    // Apply any cookie action scheduled by server functions
    if let Some(action) = cookie_slot.0.lock().unwrap().take() {
        match action {
            PendingCookieAction::Set { token } => {
                response.headers_mut().append(
                    header::SET_COOKIE,
                    cookies::build_session_cookie(&token, jwt::session_expiry_minutes()),
                );
            }
            PendingCookieAction::Clear => {
                response
                    .headers_mut()
                    .append(header::SET_COOKIE, cookies::build_clear_cookie());
            }
        }
    }

    response
}
