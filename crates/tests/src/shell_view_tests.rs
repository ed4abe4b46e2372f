use pretty_assertions::assert_eq;
use shared_types::ShellView;

#[test]
fn loading_wins_over_everything() {
    // Even with a full session present, an in-flight check renders the spinner
    assert_eq!(
        ShellView::resolve(true, true, true, true),
        ShellView::Loading
    );
    assert_eq!(
        ShellView::resolve(true, false, false, false),
        ShellView::Loading
    );
}

#[test]
fn missing_session_or_user_means_sign_in() {
    assert_eq!(
        ShellView::resolve(false, false, false, false),
        ShellView::SignIn
    );
    // Session cookie present but the user row is gone
    assert_eq!(
        ShellView::resolve(false, true, false, false),
        ShellView::SignIn
    );
    // User without a session never happens in practice, but reads as signed out
    assert_eq!(
        ShellView::resolve(false, false, true, true),
        ShellView::SignIn
    );
}

#[test]
fn authenticated_without_profile_stays_loading() {
    // Profile provisioning lags the session — don't bounce to sign-in
    assert_eq!(
        ShellView::resolve(false, true, true, false),
        ShellView::Loading
    );
}

#[test]
fn fully_resolved_session_shows_the_app() {
    assert_eq!(ShellView::resolve(false, true, true, true), ShellView::App);
}
