use serde::{Deserialize, Serialize};

/// Authorization role carried on the user profile.
///
/// - `Parent` — guardian of one or more students. Also the graceful
///   fallback for unknown role strings.
/// - `Teacher` — class rosters and grading.
/// - `Admin` — school administration.
/// - `Staff` — bursary/finance office.
/// - `Driver` — bus transport.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    Parent,
    Teacher,
    Admin,
    Staff,
    Driver,
}

impl UserRole {
    /// Parse a stored role string. Unknown values (including empty) default
    /// to Parent so a corrupt or missing role never locks a user out.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "teacher" => UserRole::Teacher,
            "admin" => UserRole::Admin,
            "staff" => UserRole::Staff,
            "driver" => UserRole::Driver,
            _ => UserRole::Parent,
        }
    }

    /// Lowercase string for database and JWT storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Parent => "parent",
            UserRole::Teacher => "teacher",
            UserRole::Admin => "admin",
            UserRole::Staff => "staff",
            UserRole::Driver => "driver",
        }
    }
}

/// Top-level view selected by the role dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    Parent,
    Teacher,
    Admin,
    Finance,
    Driver,
}

impl DashboardView {
    /// The role→view table. Total by construction: unknown role strings
    /// were already absorbed to `UserRole::Parent` at parse time.
    pub fn for_role(role: &UserRole) -> Self {
        match role {
            UserRole::Parent => DashboardView::Parent,
            UserRole::Teacher => DashboardView::Teacher,
            UserRole::Admin => DashboardView::Admin,
            UserRole::Staff => DashboardView::Finance,
            UserRole::Driver => DashboardView::Driver,
        }
    }
}

/// What the shell renders while auth state settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellView {
    /// Spinner — auth still resolving, or profile not yet arrived.
    Loading,
    /// Unauthenticated layout (sign-in).
    SignIn,
    /// The routed application.
    App,
}

impl ShellView {
    /// Decide the shell view from the four auth inputs. Evaluation order
    /// matters: loading wins, then session/user, then profile.
    pub fn resolve(is_loading: bool, has_session: bool, has_user: bool, has_profile: bool) -> Self {
        if is_loading {
            ShellView::Loading
        } else if !has_session || !has_user {
            ShellView::SignIn
        } else if !has_profile {
            ShellView::Loading
        } else {
            ShellView::App
        }
    }
}

/// Outcome of a role-restricted portal check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalAccess {
    Granted,
    RedirectHome,
}

/// Portal isolation: a restricted portal admits only its exact role.
/// Admins are not exempt — `/teacher` redirects an admin to `/` too.
pub fn portal_access(role: &UserRole, required: &UserRole) -> PortalAccess {
    if role == required {
        PortalAccess::Granted
    } else {
        PortalAccess::RedirectHome
    }
}

/// Evidence of an active authenticated browser session. Opaque to the
/// shell — presence is all that matters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionInfo {
    pub token_id: String,
    /// Unix timestamp (seconds) when the session token expires.
    pub expires_at: i64,
}

/// Authenticated identity, distinct from profile data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
}

/// Extended user record carrying the authorization role. Provisioned
/// asynchronously — the client must tolerate its absence while a session
/// and user already exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub user_id: i64,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub onboarded: bool,
}

impl UserProfile {
    pub fn role_parsed(&self) -> UserRole {
        UserRole::from_str_or_default(&self.role)
    }
}

/// Session and user state in one fetch. Both `None` means "not signed in";
/// the server never errors for an anonymous caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
}

/// Generic success payload for operations with no data to return.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_known_values() {
        assert_eq!(UserRole::from_str_or_default("parent"), UserRole::Parent);
        assert_eq!(UserRole::from_str_or_default("teacher"), UserRole::Teacher);
        assert_eq!(UserRole::from_str_or_default("Admin"), UserRole::Admin);
        assert_eq!(UserRole::from_str_or_default("STAFF"), UserRole::Staff);
        assert_eq!(UserRole::from_str_or_default("driver"), UserRole::Driver);
    }

    #[test]
    fn unknown_role_falls_back_to_parent() {
        assert_eq!(UserRole::from_str_or_default(""), UserRole::Parent);
        assert_eq!(UserRole::from_str_or_default("principal"), UserRole::Parent);
        assert_eq!(UserRole::from_str_or_default("superuser"), UserRole::Parent);
    }

    #[test]
    fn role_as_str_roundtrip() {
        for role in [
            UserRole::Parent,
            UserRole::Teacher,
            UserRole::Admin,
            UserRole::Staff,
            UserRole::Driver,
        ] {
            assert_eq!(UserRole::from_str_or_default(role.as_str()), role);
        }
    }

    #[test]
    fn dispatch_table_is_exact() {
        assert_eq!(DashboardView::for_role(&UserRole::Parent), DashboardView::Parent);
        assert_eq!(DashboardView::for_role(&UserRole::Teacher), DashboardView::Teacher);
        assert_eq!(DashboardView::for_role(&UserRole::Admin), DashboardView::Admin);
        assert_eq!(DashboardView::for_role(&UserRole::Staff), DashboardView::Finance);
        assert_eq!(DashboardView::for_role(&UserRole::Driver), DashboardView::Driver);
    }

    #[test]
    fn shell_loading_wins_over_everything() {
        assert_eq!(ShellView::resolve(true, true, true, true), ShellView::Loading);
        assert_eq!(ShellView::resolve(true, false, false, false), ShellView::Loading);
    }

    #[test]
    fn shell_missing_session_or_user_signs_in() {
        assert_eq!(ShellView::resolve(false, false, true, true), ShellView::SignIn);
        assert_eq!(ShellView::resolve(false, true, false, true), ShellView::SignIn);
        assert_eq!(ShellView::resolve(false, false, false, false), ShellView::SignIn);
    }

    #[test]
    fn shell_missing_profile_keeps_loading() {
        assert_eq!(ShellView::resolve(false, true, true, false), ShellView::Loading);
    }

    #[test]
    fn shell_all_present_renders_app() {
        assert_eq!(ShellView::resolve(false, true, true, true), ShellView::App);
    }

    #[test]
    fn portal_admits_exact_role_only() {
        assert_eq!(
            portal_access(&UserRole::Admin, &UserRole::Admin),
            PortalAccess::Granted
        );
        assert_eq!(
            portal_access(&UserRole::Teacher, &UserRole::Admin),
            PortalAccess::RedirectHome
        );
        // Admin gets no special treatment on other portals
        assert_eq!(
            portal_access(&UserRole::Admin, &UserRole::Teacher),
            PortalAccess::RedirectHome
        );
    }

    #[test]
    fn session_snapshot_defaults_to_anonymous() {
        let snap = SessionSnapshot::default();
        assert!(snap.session.is_none());
        assert!(snap.user.is_none());
    }

    #[test]
    fn auth_user_deserializes_without_optional_fields() {
        let json = r#"{"id": 7, "username": "amara", "display_name": "Amara O.", "email": "amara@example.com"}"#;
        let user: AuthUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert!(user.avatar_url.is_none());
        assert!(!user.email_verified);
    }

    #[test]
    fn profile_role_parsed_tolerates_garbage() {
        let profile = UserProfile {
            user_id: 1,
            role: "registrar".into(),
            phone_number: None,
            onboarded: true,
        };
        assert_eq!(profile.role_parsed(), UserRole::Parent);
    }
}
