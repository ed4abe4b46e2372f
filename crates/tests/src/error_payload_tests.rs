use pretty_assertions::assert_eq;
use server::error_convert::{app_error_to_server_fn_error, sqlx_to_app_error};
use shared_types::{AppError, AppErrorKind};

#[test]
fn row_not_found_maps_to_not_found() {
    let err = sqlx_to_app_error(sqlx::Error::RowNotFound);
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn app_error_survives_the_server_fn_boundary() {
    let original = AppError::forbidden("staff role required");
    let sfn_err = app_error_to_server_fn_error(original.clone());

    // The client only ever sees the stringified error
    let parsed = AppError::from_server_error(&sfn_err.to_string())
        .expect("JSON payload should be recoverable from the error string");
    assert_eq!(parsed.kind, original.kind);
    assert_eq!(parsed.message, original.message);
}

#[test]
fn friendly_message_prefers_the_embedded_payload() {
    let err = app_error_to_server_fn_error(AppError::unauthorized("Invalid email or password"));
    assert_eq!(
        AppError::friendly_message(&err.to_string()),
        "Invalid email or password"
    );
}

#[test]
fn friendly_message_falls_back_on_opaque_errors() {
    assert_eq!(
        AppError::friendly_message("connection reset by peer"),
        "Something went wrong. Please try again."
    );
}

#[test]
fn field_errors_round_trip() {
    let mut fields = std::collections::HashMap::new();
    fields.insert("email".to_string(), "Valid email is required".to_string());
    let err = app_error_to_server_fn_error(AppError::validation("Validation failed", fields));

    let parsed = AppError::parse_field_errors(&err.to_string());
    assert_eq!(
        parsed.get("email").map(String::as_str),
        Some("Valid email is required")
    );
}
