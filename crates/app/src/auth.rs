use dioxus::prelude::*;
use shared_types::{AuthUser, SessionInfo, UserProfile, UserRole};

/// Global authentication state.
///
/// Session and user arrive together from the session snapshot; the profile
/// arrives separately and may lag behind for freshly provisioned accounts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Option<SessionInfo>>,
    pub current_user: Signal<Option<AuthUser>>,
    pub profile: Signal<Option<UserProfile>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
            current_user: Signal::new(None),
            profile: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some() && self.current_user.read().is_some()
    }

    pub fn set_signed_in(
        &mut self,
        session: SessionInfo,
        user: AuthUser,
        profile: Option<UserProfile>,
    ) {
        self.session.set(Some(session));
        self.current_user.set(Some(user));
        self.profile.set(profile);
    }

    pub fn clear_auth(&mut self) {
        self.session.set(None);
        self.current_user.set(None);
        self.profile.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Get the current user's role. Profiles store the role as free text, so
/// unknown values collapse to the parent role; so does a missing profile.
pub fn use_user_role() -> UserRole {
    let auth = use_auth();
    let binding = auth.profile.read();
    binding
        .as_ref()
        .map(|p| p.role_parsed())
        .unwrap_or_default()
}
