use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

/// Logged-in user plus the callbacks that change it, provided once by `App`.
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub username: Option<String>,
    pub on_login: Callback<String>,
    pub on_logout: Callback<()>,
}

#[hook]
pub fn use_session() -> Option<SessionContext> {
    use_context::<SessionContext>()
}

#[hook]
pub fn use_auth_state() -> bool {
    use_session().map_or(false, |session| session.username.is_some())
}

#[hook]
pub fn use_auth_check() {
    let navigator = use_navigator();
    let logged_in = use_auth_state();

    use_effect_with(logged_in, move |logged_in| {
        if !*logged_in {
            if let Some(navigator) = navigator {
                navigator.push(&Route::Login);
            }
        }
        || ()
    });
}
