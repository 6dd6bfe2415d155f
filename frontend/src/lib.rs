pub mod base;
pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod config;
pub mod storage;
pub mod telemetry;

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;
use shared::telemetry::{report_best_effort, Breadcrumb};
use crate::hooks::SessionContext;
use crate::pages::{
    auth::{Auth, AuthMode},
    lucky_wheel::LuckyWheelPage,
};
use crate::storage::browser_session;
use crate::telemetry::SentryBridge;

const LOAD_METRIC_DELAY_MS: u32 = 1000;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/login")] Login,
    #[at("/register")] Register,
    #[not_found]
    #[at("/404")] NotFound,
}

fn page_load_time() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0.0, |performance| performance.now())
}

#[function_component(App)]
pub fn app() -> Html {
    let username = use_state(|| browser_session().current_user());

    {
        use_effect_with((), move |_| {
            let timeout = Timeout::new(LOAD_METRIC_DELAY_MS, || {
                report_best_effort(Some(&SentryBridge), &Breadcrumb::app_loaded(page_load_time()));
            });
            move || drop(timeout)
        });
    }

    let on_login = {
        let username = username.clone();
        Callback::from(move |name: String| {
            browser_session().login(&name);
            username.set(Some(name));
        })
    };

    let on_logout = {
        let username = username.clone();
        Callback::from(move |_: ()| {
            browser_session().logout();
            username.set(None);
        })
    };

    let context = SessionContext {
        username: (*username).clone(),
        on_login,
        on_logout,
    };

    html! {
        <ContextProvider<SessionContext> {context}>
            <BrowserRouter>
                <div class="min-h-screen w-full">
                    <div class="mx-auto">
                        <Switch<Route> render={switch} />
                    </div>
                </div>
            </BrowserRouter>
        </ContextProvider<SessionContext>>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <LuckyWheelPage /> },
        Route::Login => html! { <Auth mode={AuthMode::Login} /> },
        Route::Register => html! { <Auth mode={AuthMode::Register} /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}
