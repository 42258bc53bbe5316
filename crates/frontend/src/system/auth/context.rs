use contracts::shared::api_error::ApiError;
use contracts::system::auth::{LoginResponse, SessionState, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// Handle to the process-wide session. Cheap to copy into closures and async
/// blocks.
#[derive(Clone, Copy)]
pub struct Session {
    pub state: RwSignal<SessionState>,
}

impl Session {
    pub fn user(&self) -> Option<UserInfo> {
        self.state.with(|s| s.user().cloned())
    }

    /// Reactive permission check.
    pub fn can(&self, permission: &str) -> bool {
        self.state.with(|s| s.can(permission))
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.token().is_some())
    }

    pub fn sign_in(&self, response: LoginResponse) {
        storage::save_token(&response.token);
        log::info!("Signed in as {}", response.user.username);
        self.state.set(SessionState::sign_in(response));
    }

    /// Drop the token and return to the anonymous state. Gates redirect to
    /// the login page from there.
    pub fn teardown(&self) {
        storage::clear_token();
        let _ = self.state.try_set(SessionState::teardown());
    }

    /// Route an API failure: a 401 anywhere ends the session.
    pub fn report(&self, error: &ApiError) {
        if error.is_unauthorized() {
            log::warn!("Session expired, signing out");
            self.teardown();
        }
    }

    pub fn logout(&self) {
        let session = *self;
        spawn_local(async move {
            if let Err(e) = api::logout().await {
                log::debug!("Logout request failed: {}", e);
            }
            session.teardown();
        });
    }
}

/// Session provider component. Restores a stored token on mount.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let (initial, to_verify) = SessionState::init(storage::get_token());
    let session = Session {
        state: RwSignal::new(initial),
    };

    if let Some(token) = to_verify {
        spawn_local(async move {
            match api::me(&token).await {
                Ok(user) => {
                    log::debug!("Restored session for {}", user.username);
                    session.state.set(SessionState::verified(token, user));
                }
                Err(e) => {
                    log::info!("Stored token rejected: {}", e);
                    session.teardown();
                }
            }
        });
    }

    provide_context(session);

    children()
}

/// Hook to access the session
pub fn use_session() -> Session {
    use_context::<Session>().expect("SessionProvider not found in component tree")
}
