use yew::prelude::*;
use shared::constants::{MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH};
use shared::validation::{EmailChecks, PasswordChecks, UsernameChecks};

#[hook]
pub fn use_username_validation() -> (UseStateHandle<UsernameChecks>, Callback<String>) {
    let validation = use_state_eq(UsernameChecks::default);

    let validate = {
        let validation = validation.clone();
        Callback::from(move |username: String| {
            validation.set(UsernameChecks::evaluate(&username));
        })
    };

    (validation, validate)
}

#[hook]
pub fn use_email_validation() -> (UseStateHandle<EmailChecks>, Callback<String>) {
    let validation = use_state_eq(EmailChecks::default);

    let validate = {
        let validation = validation.clone();
        Callback::from(move |email: String| {
            validation.set(EmailChecks::evaluate(&email));
        })
    };

    (validation, validate)
}

/// Takes `(password, confirmation)` so the match check stays live while either field changes.
#[hook]
pub fn use_password_validation() -> (UseStateHandle<PasswordChecks>, Callback<(String, String)>) {
    let validation = use_state_eq(PasswordChecks::default);

    let validate = {
        let validation = validation.clone();
        Callback::from(move |(password, confirmation): (String, String)| {
            validation.set(PasswordChecks::evaluate(&password, &confirmation));
        })
    };

    (validation, validate)
}

pub fn validation_style(valid: bool) -> &'static str {
    if valid {
        "flex items-center text-xs text-green-600 dark:text-green-400"
    } else {
        "flex items-center text-xs text-gray-500 dark:text-gray-400"
    }
}

pub fn validation_icon(valid: bool) -> &'static str {
    if valid { "✓" } else { "•" }
}

fn requirement(met: bool, label: String) -> Html {
    html! {
        <div class={validation_style(met)}>
            <span class="mr-2">{validation_icon(met)}</span>
            {label}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ValidationProps<T: PartialEq> {
    pub validation: T,
}

#[function_component(UsernameRequirements)]
pub fn username_requirements(props: &ValidationProps<UsernameChecks>) -> Html {
    let checks = &props.validation;
    html! {
        <div class="mt-2 space-y-1">
            {requirement(checks.has_min_length, format!("At least {} characters", MIN_USERNAME_LENGTH))}
            {requirement(checks.has_max_length, format!("At most {} characters", MAX_USERNAME_LENGTH))}
            {requirement(checks.valid_characters, "Only letters, numbers and underscores".to_string())}
        </div>
    }
}

#[function_component(EmailRequirements)]
pub fn email_requirements(props: &ValidationProps<EmailChecks>) -> Html {
    let checks = &props.validation;
    html! {
        <div class="mt-2 space-y-1">
            {requirement(checks.has_at_symbol, "Contains @".to_string())}
            {requirement(checks.has_domain, "Domain has a dot".to_string())}
            {requirement(checks.valid_format, "Looks like name@host.tld".to_string())}
        </div>
    }
}

#[function_component(PasswordRequirements)]
pub fn password_requirements(props: &ValidationProps<PasswordChecks>) -> Html {
    let checks = &props.validation;
    html! {
        <div class="mt-2 space-y-1">
            {requirement(checks.has_min_length, format!("At least {} characters", MIN_PASSWORD_LENGTH))}
            {requirement(checks.matches_confirmation, "Both passwords match".to_string())}
        </div>
    }
}
