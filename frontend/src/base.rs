use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;
use crate::hooks::use_session;
use crate::storage::{apply_theme, load_dark_mode};
use crate::{styles, Route};

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

fn is_theme_shortcut(event: &KeyboardEvent) -> bool {
    event.meta_key() && event.shift_key() && event.key().eq_ignore_ascii_case("l")
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let dark_mode = use_state(load_dark_mode);
    let show_dropdown = use_state(|| false);
    let navigator = use_navigator();
    let session = use_session();
    let username = session.as_ref().and_then(|s| s.username.clone());

    {
        let dark_mode = dark_mode.clone();
        use_effect_with(*dark_mode, move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, "keydown", move |event: &Event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if is_theme_shortcut(event) {
                        event.prevent_default();
                        let new_mode = !*dark_mode;
                        apply_theme(new_mode);
                        dark_mode.set(new_mode);
                    }
                })
            });
            move || drop(listener)
        });
    }

    {
        let show_dropdown = show_dropdown.clone();
        use_effect_with((), move |_| {
            let listener = window().and_then(|w| w.document()).map(|document| {
                EventListener::new(&document, "click", move |event: &Event| {
                    let outside = event
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                        .and_then(|element| element.matches(".dropdown-container, .dropdown-container *").ok())
                        .map_or(false, |inside| !inside);
                    if outside {
                        show_dropdown.set(false);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let toggle_dropdown = {
        let show_dropdown = show_dropdown.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_dropdown.set(!*show_dropdown);
        })
    };

    let toggle_theme = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let new_mode = !*dark_mode;
            apply_theme(new_mode);
            dark_mode.set(new_mode);
        })
    };

    let handle_logout = {
        let session = session.clone();
        let show_dropdown = show_dropdown.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(session) = &session {
                session.on_logout.emit(());
            }
            show_dropdown.set(false);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let theme_icon = if *dark_mode { "☀️" } else { "🌙" };

    html! {
        <div class={if *dark_mode { "dark h-full bg-gray-900" } else { "h-full bg-gray-50" }}>
            <nav class={styles::NAV}>
                <div class="w-full mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="h-16 flex items-center justify-between relative">
                        <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>{"Lucky Draw"}</Link<Route>>

                        <div class={styles::NAV_ITEMS}>
                            if let Some(name) = username {
                                <div class="relative dropdown-container">
                                    <button onclick={toggle_dropdown} class={styles::NAV_LINK}>
                                        {name}
                                    </button>
                                    if *show_dropdown {
                                        <div class={classes!(styles::DROPDOWN, "min-w-[140px]", "top-full", "mt-2")}>
                                            <button onclick={handle_logout}
                                                class={classes!(
                                                    styles::DROPDOWN_BUTTON,
                                                    "flex",
                                                    "justify-center",
                                                    "text-red-700",
                                                    "dark:text-red-400",
                                                    "hover:bg-red-50",
                                                    "dark:hover:bg-red-900/20"
                                                )}>
                                                {"Log out"}
                                            </button>
                                        </div>
                                    }
                                </div>
                            } else {
                                <Link<Route> to={Route::Login} classes={styles::NAV_LINK}>{"Login"}</Link<Route>>
                                <Link<Route> to={Route::Register} classes={styles::NAV_LINK}>{"Register"}</Link<Route>>
                            }
                            <button onclick={toggle_theme} class={styles::BUTTON_ICON}>{theme_icon}</button>
                        </div>
                    </div>
                </div>
            </nav>
            <main class="pt-16">{props.children.clone()}</main>
        </div>
    }
}
