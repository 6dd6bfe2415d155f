use yew::prelude::*;
use shared::prize::{shares, Prize};

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let is_disabled = props.is_spinning || props.disabled;

    let button_class = if is_disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={is_disabled}
            class={classes!(
                "w-full", "px-8", "py-4", "rounded-full", "font-bold", "text-lg",
                "text-white", "transition-all", "duration-300", button_class
            )}
        >
            <span class={if props.is_spinning { "inline-block mr-2 animate-spin" } else { "hidden" }}>{"⟳"}</span>
            {if props.is_spinning { "Spinning..." } else { "Spin" }}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub prize: Option<Prize>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(prize) = &props.prize else {
        return html! {};
    };

    let (gradient, animation) = if prize.is_reward() {
        ("from-orange-400 to-pink-500 border-orange-300", "animate-bounce")
    } else {
        ("from-slate-400 to-slate-600 border-slate-300", "animate-pulse")
    };

    html! {
        <div class={classes!(
            "mt-6", "p-5", "rounded-xl", "border", "text-center", "text-white",
            "font-semibold", "shadow-lg", "bg-gradient-to-r", gradient
        )}>
            <span class={classes!("inline-block", "mr-2", animation)}>
                {if prize.is_reward() { "🎉" } else { "🍀" }}
            </span>
            {prize.announcement()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PrizeListProps {
    pub prizes: Vec<Prize>,
}

#[function_component(PrizeList)]
pub fn prize_list(props: &PrizeListProps) -> Html {
    let shares = shares(&props.prizes);

    html! {
        <div class="mt-8 bg-gray-50 dark:bg-gray-700/30 p-6 rounded-xl shadow-sm">
            <h3 class="font-bold text-lg mb-3 text-gray-800 dark:text-gray-200 text-center">{"Prizes"}</h3>
            <ul class="grid grid-cols-1 md:grid-cols-2 gap-3">
                { for props.prizes.iter().zip(shares).map(|(prize, share)| html! {
                    <li key={prize.id} class="bg-white dark:bg-gray-800 p-3 rounded-lg shadow-sm flex justify-between">
                        <span class="font-medium text-gray-900 dark:text-white">
                            {format!("{}: {}", prize.name, prize.value)}
                        </span>
                        <span class="text-xs text-gray-500 dark:text-gray-400">
                            {format!("{:.1}%", share)}
                        </span>
                    </li>
                }) }
            </ul>
        </div>
    }
}
