mod wheel_canvas;
mod wheel_widgets;

use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;
use shared::animation::{interpolate, SpringEasing};
use shared::draw::DrawEngine;
use shared::prize::Prize;
use shared::shared_lucky_wheel::{LuckyWheel, SpinPlan};
use shared::telemetry::{report_best_effort, Breadcrumb};
use shared::LotteryError;
use crate::base::Base;
use crate::components::GradientBackground;
use crate::config::load_lottery_config;
use crate::hooks::{use_auth_check, use_session};
use crate::styles;
use crate::telemetry::SentryBridge;
use wheel_canvas::WheelCanvas;
use wheel_widgets::{PrizeList, ResultDisplay, SpinButton};

const MIN_LOADING_MS: u32 = 800;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Everything a spin needs, built once per page visit.
struct WheelSession {
    wheel: LuckyWheel,
    engine: DrawEngine,
    easing: SpringEasing,
}

impl WheelSession {
    fn init() -> Result<Self, LotteryError> {
        let config = load_lottery_config();
        Ok(Self {
            wheel: LuckyWheel::new(&config)?,
            engine: DrawEngine::from_entropy()?,
            easing: SpringEasing::new(config.spring)?,
        })
    }
}

/// Schedules the next frame; `false` when no frame will ever run.
fn request_frame(callback: &FrameCallback) -> bool {
    let Some(window) = window() else {
        log::warn!("No window to animate the spin in");
        return false;
    };
    let borrowed = callback.borrow();
    let Some(closure) = borrowed.as_ref() else {
        return false;
    };
    if window.request_animation_frame(closure.as_ref().unchecked_ref()).is_err() {
        log::warn!("requestAnimationFrame rejected the spin callback");
        return false;
    }
    true
}

/// Drops the frame closure once the current frame has returned; it cannot be
/// freed from inside its own invocation.
fn release_frame(callback: &FrameCallback) {
    let callback = callback.clone();
    spawn_local(async move {
        callback.borrow_mut().take();
    });
}

fn animate_spin(
    plan: SpinPlan,
    easing: SpringEasing,
    rotation: UseStateHandle<f64>,
    cancelled: Rc<RefCell<bool>>,
    on_finish: Callback<()>,
    on_abort: Callback<()>,
) {
    let started = js_sys::Date::now();
    let duration = f64::from(plan.duration_ms);
    let abort = on_abort.clone();

    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if *cancelled.borrow() {
            release_frame(&f);
            return;
        }

        let elapsed = js_sys::Date::now() - started;
        rotation.set(interpolate(&easing, plan.from, plan.to, elapsed, duration));

        if elapsed < duration {
            if !request_frame(&f) {
                on_abort.emit(());
                release_frame(&f);
            }
        } else {
            on_finish.emit(());
            release_frame(&f);
        }
    }) as Box<dyn FnMut()>));

    if !request_frame(&g) {
        abort.emit(());
        release_frame(&g);
    }
}

#[function_component(LuckyWheelPage)]
pub fn lucky_wheel_page() -> Html {
    use_auth_check();
    let username = use_session().and_then(|session| session.username);

    let session = use_mut_ref(|| None::<WheelSession>);
    let cancelled = use_mut_ref(|| false);
    let prizes = use_state(Vec::<Prize>::new);
    let loading = use_state(|| true);
    let init_error = use_state(|| None::<String>);
    let rotation = use_state(|| 0.0_f64);
    let is_spinning = use_state(|| false);
    let result = use_state(|| None::<Prize>);
    let error_message = use_state(String::new);

    {
        let session = session.clone();
        let cancelled = cancelled.clone();
        let prizes = prizes.clone();
        let loading = loading.clone();
        let init_error = init_error.clone();

        use_effect_with((), move |_| {
            let setup = session.clone();
            spawn_local(async move {
                let ready = WheelSession::init();
                TimeoutFuture::new(MIN_LOADING_MS).await;

                match ready {
                    Ok(ready) => {
                        prizes.set(ready.wheel.prizes().to_vec());
                        *setup.borrow_mut() = Some(ready);
                    }
                    Err(e) => {
                        log::error!("Lottery engine failed to initialise: {}", e);
                        if let Some(window) = window() {
                            let _ = window.alert_with_message(e.user_message());
                        }
                        init_error.set(Some(e.user_message().to_string()));
                    }
                }
                loading.set(false);
            });

            move || {
                *cancelled.borrow_mut() = true;
                if let Some(active) = session.borrow_mut().as_mut() {
                    active.wheel.cancel_spin();
                }
            }
        });
    }

    let on_finish = {
        let session = session.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let result = result.clone();
        let username = username.clone();

        Callback::from(move |_: ()| {
            let mut guard = session.borrow_mut();
            let Some(active) = guard.as_mut() else {
                return;
            };
            let Some(prize) = active.wheel.complete_spin().cloned() else {
                return;
            };

            rotation.set(active.wheel.rotation());
            is_spinning.set(false);
            log::info!("Spin landed on {}", prize.name);

            let player = username.as_deref().unwrap_or("anonymous");
            report_best_effort(Some(&SentryBridge), &Breadcrumb::draw(player, &prize));
            result.set(Some(prize));
        })
    };

    let on_abort = {
        let session = session.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();

        Callback::from(move |_: ()| {
            let mut guard = session.borrow_mut();
            let Some(active) = guard.as_mut() else {
                return;
            };
            log::warn!("Spin animation stopped, returning the wheel to {:.1}", active.wheel.rotation());
            active.wheel.cancel_spin();
            rotation.set(active.wheel.rotation());
            is_spinning.set(false);
        })
    };

    let on_spin = {
        let session = session.clone();
        let cancelled = cancelled.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let result = result.clone();
        let error_message = error_message.clone();

        Callback::from(move |_: MouseEvent| {
            let (plan, easing) = {
                let mut guard = session.borrow_mut();
                let Some(active) = guard.as_mut() else {
                    return;
                };

                let started = js_sys::Date::now();
                let requested = active.wheel.request_spin(&mut active.engine);
                log::debug!("Draw took {:.3} ms", js_sys::Date::now() - started);

                match requested {
                    Ok(plan) => (plan, active.easing),
                    Err(LotteryError::AnimationInterrupted) => {
                        log::debug!("Spin requested while the wheel is turning");
                        return;
                    }
                    Err(e) => {
                        log::error!("Spin failed: {}", e);
                        error_message.set(e.user_message().to_string());
                        return;
                    }
                }
            };

            log::debug!("Spinning from {:.1} to {:.1} for prize #{}", plan.from, plan.to, plan.winner);
            error_message.set(String::new());
            result.set(None);
            is_spinning.set(true);
            animate_spin(
                plan,
                easing,
                rotation.clone(),
                cancelled.clone(),
                on_finish.clone(),
                on_abort.clone(),
            );
        })
    };

    let welcome = match &username {
        Some(name) => format!("Welcome, {}! Spin the wheel to try your luck.", name),
        None => "Spin the wheel to try your luck.".to_string(),
    };

    html! {
        <Base>
            <GradientBackground>
                <div class={styles::CONTAINER_LG}>
                    <div class="text-center mb-8">
                        <h1 class={styles::TEXT_H1}>{"Lucky Draw"}</h1>
                        <p class={classes!(styles::TEXT_BODY, "mt-2")}>{welcome}</p>
                    </div>

                    if let Some(err) = &*init_error {
                        <div class={classes!(styles::CARD_ERROR, "mb-6")}>{err}</div>
                    }

                    if !error_message.is_empty() {
                        <div class={classes!(styles::CARD_ERROR, "mb-6")}>{&*error_message}</div>
                    }

                    <div class={classes!(styles::CARD, "max-w-2xl", "mx-auto")}>
                        if *loading {
                            <div class="flex items-center justify-center py-24">
                                <svg class={styles::LOADING_SPINNER} xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                                    <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                                    <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
                                </svg>
                                <span class={classes!(styles::TEXT_SECONDARY, "ml-3")}>{"Loading..."}</span>
                            </div>
                        } else {
                            <div class="flex flex-col items-center">
                                <WheelCanvas
                                    prizes={(*prizes).clone()}
                                    rotation={*rotation}
                                    is_spinning={*is_spinning}
                                />
                                <div class="w-full max-w-[300px] mt-6">
                                    <SpinButton
                                        is_spinning={*is_spinning}
                                        disabled={init_error.is_some()}
                                        onclick={on_spin}
                                    />
                                </div>
                            </div>
                            <ResultDisplay prize={(*result).clone()} />
                            <PrizeList prizes={(*prizes).clone()} />
                        }
                    </div>
                </div>
            </GradientBackground>
        </Base>
    }
}
