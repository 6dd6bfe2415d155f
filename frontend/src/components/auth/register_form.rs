use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::prelude::*;
use shared::constants::{REGISTRATION_DELAY_MS, REGISTRATION_REDIRECT_MS, REGISTRATION_SUCCESS};
use shared::validation::{validate_registration, RegistrationForm};
use crate::hooks::form_state::use_form_state;
use crate::hooks::validation::{
    use_email_validation, use_password_validation, use_username_validation,
    EmailRequirements, PasswordRequirements, UsernameRequirements,
};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
    pub on_success: Callback<()>,
}

#[function_component(RegisterForm)]
pub fn register_form(props: &RegisterFormProps) -> Html {
    let form = use_state(RegistrationForm::default);
    let loading = use_state(|| false);
    let form_state = use_form_state();

    let (username_validation, validate_username) = use_username_validation();
    let (email_validation, validate_email) = use_email_validation();
    let (password_validation, validate_password) = use_password_validation();

    let on_username = {
        let form = form.clone();
        let validate = validate_username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            validate.emit(value.clone());
            form.set(RegistrationForm { username: value, ..(*form).clone() });
        })
    };

    let on_email = {
        let form = form.clone();
        let validate = validate_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            validate.emit(value.clone());
            form.set(RegistrationForm { email: value, ..(*form).clone() });
        })
    };

    let on_password = {
        let form = form.clone();
        let validate = validate_password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            validate.emit((value.clone(), form.confirm_password.clone()));
            form.set(RegistrationForm { password: value, ..(*form).clone() });
        })
    };

    let on_confirm = {
        let form = form.clone();
        let validate = validate_password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            validate.emit((form.password.clone(), value.clone()));
            form.set(RegistrationForm { confirm_password: value, ..(*form).clone() });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let loading = loading.clone();
        let handle_error = form_state.handle_error.clone();
        let handle_success = form_state.handle_success.clone();
        let clear = form_state.clear.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *loading {
                return;
            }

            if let Err(err) = validate_registration(&form) {
                handle_error.emit(err.message());
                return;
            }

            loading.set(true);
            clear.emit(());

            let username = form.username.clone();
            let loading = loading.clone();
            let handle_success = handle_success.clone();
            let on_success = on_success.clone();

            spawn_local(async move {
                TimeoutFuture::new(REGISTRATION_DELAY_MS).await;
                log::info!("Registered user {}", username);
                handle_success.emit(REGISTRATION_SUCCESS.to_string());
                loading.set(false);

                TimeoutFuture::new(REGISTRATION_REDIRECT_MS).await;
                on_success.emit(());
            });
        })
    };


    html! {
        <div class={styles::AUTH_CARD}>
            <div class={styles::AUTH_HEADER}>
                <h2 class={styles::TEXT_H2}>{"Create an Account"}</h2>
                <p class={styles::TEXT_SMALL}>{"Sign up to get started"}</p>
            </div>

            if let Some(error) = form_state.error() {
                <div class={classes!(styles::CARD_ERROR, "error-message")}>{error}</div>
            }

            if let Some(success) = form_state.success() {
                <div class={styles::CARD_SUCCESS}>
                    <div class="flex items-center">
                        <svg class="w-5 h-5 mr-2 text-green-500" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7"></path>
                        </svg>
                        <span>{success}</span>
                    </div>
                </div>
            } else {
                <form onsubmit={onsubmit} class={styles::FORM}>
                    <div>
                        <label for="username" class={styles::TEXT_LABEL}>{"Username"}</label>
                        <input
                            id="username"
                            type="text"
                            value={form.username.clone()}
                            disabled={*loading}
                            placeholder="Choose a username"
                            class={styles::INPUT}
                            oninput={on_username}
                        />
                        <UsernameRequirements validation={(*username_validation).clone()} />
                    </div>

                    <div>
                        <label for="email" class={styles::TEXT_LABEL}>{"Email"}</label>
                        <input
                            id="email"
                            type="email"
                            value={form.email.clone()}
                            disabled={*loading}
                            placeholder="Enter your email"
                            class={styles::INPUT}
                            oninput={on_email}
                        />
                        <EmailRequirements validation={(*email_validation).clone()} />
                    </div>

                    <div>
                        <label for="password" class={styles::TEXT_LABEL}>{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            value={form.password.clone()}
                            disabled={*loading}
                            placeholder="Choose a password"
                            class={styles::INPUT}
                            oninput={on_password}
                        />
                    </div>

                    <div>
                        <label for="confirm-password" class={styles::TEXT_LABEL}>{"Confirm Password"}</label>
                        <input
                            id="confirm-password"
                            type="password"
                            value={form.confirm_password.clone()}
                            disabled={*loading}
                            placeholder="Repeat your password"
                            class={styles::INPUT}
                            oninput={on_confirm}
                        />
                        <PasswordRequirements validation={(*password_validation).clone()} />
                    </div>

                    <button type="submit" disabled={*loading} class={styles::AUTH_BUTTON}>
                        {
                            if *loading {
                                html! {
                                    <span class="flex items-center justify-center">
                                        <svg class="animate-spin -ml-1 mr-2 h-4 w-4 text-white" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                                            <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                                            <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
                                        </svg>
                                        {"Creating Account..."}
                                    </span>
                                }
                            } else {
                                html! { "Create Account" }
                            }
                        }
                    </button>
                </form>
            }
        </div>
    }
}
