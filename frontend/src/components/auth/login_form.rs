use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;
use shared::auth::authenticate;
use crate::hooks::form_state::use_form_state;
use crate::hooks::use_session;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub on_success: Callback<()>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let form_state = use_form_state();
    let session = use_session();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();

    let onsubmit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let handle_error = form_state.handle_error.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let read = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let username = read(&username_ref);
            let password = read(&password_ref);

            match authenticate(&username, &password) {
                Ok(()) => {
                    log::info!("User {} logged in", username);
                    if let Some(session) = &session {
                        session.on_login.emit(username);
                    }
                    on_success.emit(());
                }
                Err(e) => handle_error.emit(e.message().to_string()),
            }
        })
    };

    html! {
        <div class={styles::AUTH_CARD}>
            <div class={styles::AUTH_HEADER}>
                <h2 class={styles::TEXT_H2}>{"Welcome Back"}</h2>
                <p class={styles::TEXT_SMALL}>{"Log in to spin the wheel"}</p>
            </div>

            if let Some(error) = form_state.error() {
                <div class={classes!(styles::CARD_ERROR, "error-message")}>{error}</div>
            }

            <form onsubmit={onsubmit} class={styles::FORM}>
                <div>
                    <label for="username" class={styles::TEXT_LABEL}>{"Username"}</label>
                    <input
                        id="username"
                        type="text"
                        ref={username_ref}
                        autocomplete="username"
                        placeholder="Enter your username"
                        class={styles::INPUT}
                    />
                </div>

                <div>
                    <label for="password" class={styles::TEXT_LABEL}>{"Password"}</label>
                    <input
                        id="password"
                        type="password"
                        ref={password_ref}
                        autocomplete="current-password"
                        placeholder="Enter your password"
                        class={styles::INPUT}
                    />
                </div>

                <p class={styles::TEXT_HINT}>{"Try demo / demo"}</p>

                <button type="submit" class={styles::AUTH_BUTTON}>{"Log In"}</button>
            </form>
        </div>
    }
}
