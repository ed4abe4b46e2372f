use dioxus::prelude::*;
use shared_types::{AuthUser, FeatureFlags, MessageResponse, SessionSnapshot, UserProfile};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, SqlxErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use super::auth::*;

/// Expose the server's feature flags so the client can adapt its UI
/// (e.g. hide the registration link when self-service signup is off).
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// Register a new guardian account. Sets the HTTP-only session cookie on
/// success. New accounts always start with a parent profile; staff roles
/// are assigned by an administrator afterwards.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn register(
    username: String,
    email: String,
    password: String,
    display_name: String,
) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{cookies, jwt, password as pw};
    use shared_types::{AppError, RegisterRequest};

    if !crate::config::feature_flags().registration {
        return Err(
            AppError::forbidden("Self-service registration is disabled").into_server_fn_error()
        );
    }

    let req = RegisterRequest {
        username: username.clone(),
        email: email.clone(),
        password: password.clone(),
        display_name: display_name.clone(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let password_hash = pw::hash_password(&password)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let db = get_db().await;
    let row = sqlx::query(
        "INSERT INTO users (username, email, password_hash, display_name)
         VALUES ($1, $2, $3, $4)
         RETURNING id, username, display_name, email, avatar_url, email_verified",
    )
    .bind(&username)
    .bind(&email)
    .bind(&password_hash)
    .bind(&display_name)
    .fetch_one(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let user = auth_user_from_row(&row).map_err(|e| e.into_app_error().into_server_fn_error())?;

    // Provision the profile in the same breath — the shell treats a session
    // without a profile as still loading, so don't leave a gap.
    sqlx::query("INSERT INTO profiles (user_id, role) VALUES ($1, 'parent')")
        .bind(user.id)
        .execute(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let role =
        crate::auth::maybe_promote_admin(db, user.id, &user.email, "parent".to_string()).await;

    let token = jwt::create_session_token(user.id, &user.email, &role)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    // Schedule the cookie to be set by the middleware
    cookies::schedule_session_cookie(&token);

    tracing::info!(user_id = user.id, "Registered new account");
    Ok(user)
}

/// Login with email and password. Sets the HTTP-only session cookie on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{cookies, jwt, password as pw};
    use shared_types::{AppError, LoginRequest};
    use sqlx::Row;

    let req = LoginRequest {
        email: email.clone(),
        password: password.clone(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    let row = sqlx::query(
        "SELECT id, username, display_name, email, password_hash, avatar_url, email_verified
         FROM users WHERE email = $1",
    )
    .bind(&email)
    .fetch_optional(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?
    .ok_or_else(|| AppError::unauthorized("Invalid email or password").into_server_fn_error())?;

    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let valid = pw::verify_password(&password, &password_hash)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    if !valid {
        return Err(AppError::unauthorized("Invalid email or password").into_server_fn_error());
    }

    let user = auth_user_from_row(&row).map_err(|e| e.into_app_error().into_server_fn_error())?;

    let role: Option<String> = sqlx::query_scalar("SELECT role FROM profiles WHERE user_id = $1")
        .bind(user.id)
        .fetch_optional(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;
    let role = role.unwrap_or_else(|| "parent".to_string());
    let role = crate::auth::maybe_promote_admin(db, user.id, &user.email, role).await;

    let token = jwt::create_session_token(user.id, &user.email, &role)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    cookies::schedule_session_cookie(&token);

    tracing::info!(user_id = user.id, "Login successful");
    Ok(user)
}

/// Log out the current session by clearing the session cookie.
/// Succeeds whether or not the caller was authenticated.
#[server]
pub async fn logout() -> Result<MessageResponse, ServerFnError> {
    use crate::auth::cookies;

    cookies::schedule_clear_cookie();
    Ok(MessageResponse {
        message: "Logged out".to_string(),
    })
}

/// Resolve the caller's session. Anonymous, expired or tampered credentials
/// all yield an empty snapshot — this function never errors for lack of auth,
/// the shell relies on that to decide between the app and the sign-in view.
#[server]
pub async fn get_session() -> Result<SessionSnapshot, ServerFnError> {
    use shared_types::SessionInfo;

    let Some(claims) = current_claims() else {
        return Ok(SessionSnapshot::default());
    };

    match fetch_auth_user(claims.sub).await? {
        Some(user) => Ok(SessionSnapshot {
            session: Some(SessionInfo {
                token_id: claims.jti.clone(),
                expires_at: claims.exp,
            }),
            user: Some(user),
        }),
        None => Ok(SessionSnapshot::default()),
    }
}

/// Fetch the caller's profile. `None` when unauthenticated or when the
/// profile row hasn't been provisioned yet.
#[server]
pub async fn get_user_profile() -> Result<Option<UserProfile>, ServerFnError> {
    let Some(claims) = current_claims() else {
        return Ok(None);
    };

    load_profile(claims.sub).await
}
