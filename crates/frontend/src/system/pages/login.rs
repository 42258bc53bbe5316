use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use thaw::*;

use crate::system::auth::api;
use crate::system::auth::context::use_session;

fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized => "Invalid username or password".to_string(),
        other => format!("Login failed: {}", other),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let submit = move || {
        if is_loading.get_untracked() {
            return;
        }
        let username_val = username.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if username_val.is_empty() || password_val.is_empty() {
            error_message.set(Some("Enter username and password".to_string()));
            return;
        }

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(response) => {
                    // The redirect below takes over once the session is set
                    session.sign_in(response);
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    let _ = error_message.try_set(Some(login_error_message(&e)));
                    let _ = is_loading.try_set(false);
                }
            }
        });
    };

    view! {
        <Show
            when=move || !session.is_authenticated()
            fallback=|| view! { <Redirect path="/" /> }
        >
            <div class="login-container">
                <div class="login-box">
                    <h1>"Inventory Console"</h1>
                    <h2>"Sign in"</h2>

                    {move || error_message.get().map(|message| view! {
                        <div class="alert alert--error">{message}</div>
                    })}

                    <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit();
                    }>
                        <div class="form-group">
                            <label class="form-group__label" for="username">"Username"</label>
                            <Input
                                value=username
                                placeholder="admin"
                                disabled=is_loading
                                attr:id="username"
                                attr:autocomplete="username"
                            />
                        </div>

                        <div class="form-group">
                            <label class="form-group__label" for="password">"Password"</label>
                            <Input
                                value=password
                                input_type=InputType::Password
                                disabled=is_loading
                                attr:id="password"
                                attr:autocomplete="current-password"
                            />
                        </div>

                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Submit
                            disabled=is_loading
                        >
                            {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                        </Button>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_message() {
        assert_eq!(
            login_error_message(&ApiError::Unauthorized),
            "Invalid username or password"
        );
        assert!(login_error_message(&ApiError::Transport("offline".into())).starts_with("Login failed"));
    }
}
