// Server-only auth helpers for server functions.
// These are shared across all api/* modules.

use dioxus::prelude::*;
use shared_types::{AuthUser, UserProfile, UserRole};

use crate::db::get_db;
use crate::error_convert::{AppErrorExt, SqlxErrorExt};

/// Extract the caller's validated claims from the current request, if any.
/// Checks middleware-injected Claims first, falls back to cookie parsing.
/// Never errors — absent or invalid auth yields `None`.
pub(crate) fn current_claims() -> Option<crate::auth::jwt::Claims> {
    use crate::auth::{cookies, jwt};

    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    // Primary: Claims already validated by the session middleware
    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Some(claims.clone());
    }

    // Fallback: parse the session token from cookies/Bearer header
    let headers = parts.headers.clone();
    let token = cookies::extract_session_token(&headers)?;
    jwt::validate_session_token(&token).ok()
}

/// Extract and validate the caller's identity from the current request.
/// Returns the validated Claims or an "Authentication required" error.
pub(crate) fn require_auth() -> Result<crate::auth::jwt::Claims, ServerFnError> {
    use shared_types::AppError;

    current_claims()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())
}

/// Require the caller to hold exactly the given role. Admins get no pass:
/// every portal is scoped to its own role, matching the route guards.
pub(crate) fn require_role(
    required: UserRole,
) -> Result<crate::auth::jwt::Claims, ServerFnError> {
    use shared_types::AppError;

    let claims = require_auth()?;
    let role = UserRole::from_str_or_default(&claims.role);
    if role != required {
        return Err(AppError::forbidden(format!(
            "{} role required",
            required.as_str()
        ))
        .into_server_fn_error());
    }
    Ok(claims)
}

/// Map a `users` row onto an AuthUser. The query must select
/// id, username, display_name, email, avatar_url and email_verified.
pub(crate) fn auth_user_from_row(row: &sqlx::postgres::PgRow) -> Result<AuthUser, sqlx::Error> {
    use sqlx::Row;

    Ok(AuthUser {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        display_name: row.try_get("display_name")?,
        email: row.try_get("email")?,
        avatar_url: row.try_get("avatar_url")?,
        email_verified: row.try_get("email_verified")?,
    })
}

/// Fetch a full AuthUser by user ID.
/// Returns None and clears the session cookie if the user no longer exists.
pub(crate) async fn fetch_auth_user(user_id: i64) -> Result<Option<AuthUser>, ServerFnError> {
    let db = get_db().await;
    let row = sqlx::query(
        "SELECT id, username, display_name, email, avatar_url, email_verified
         FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    match row {
        Some(row) => {
            let user = auth_user_from_row(&row)
                .map_err(|e| e.into_app_error().into_server_fn_error())?;
            Ok(Some(user))
        }
        None => {
            // User no longer exists — clear the stale session cookie to prevent
            // the client from getting stuck in a broken authenticated state
            crate::auth::cookies::schedule_clear_cookie();
            tracing::warn!(
                user_id,
                "Session token references non-existent user, clearing cookie"
            );
            Ok(None)
        }
    }
}

/// Load the profile row for a user. Profiles are provisioned alongside
/// accounts but may lag behind for externally-created users, so absence
/// is an expected state, not an error.
pub(crate) async fn load_profile(user_id: i64) -> Result<Option<UserProfile>, ServerFnError> {
    use sqlx::Row;

    let db = get_db().await;
    let row = sqlx::query(
        "SELECT user_id, role, phone_number, onboarded FROM profiles WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    row.map(|row| {
        Ok(UserProfile {
            user_id: row.try_get("user_id")?,
            role: row.try_get("role")?,
            phone_number: row.try_get("phone_number")?,
            onboarded: row.try_get("onboarded")?,
        })
    })
    .transpose()
    .map_err(|e: sqlx::Error| e.into_app_error().into_server_fn_error())
}
