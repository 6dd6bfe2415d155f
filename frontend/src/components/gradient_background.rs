use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GradientBackgroundProps {
    #[prop_or_default]
    pub children: Html,
}

/// Page backdrop shared by the auth pages and the wheel page.
#[function_component(GradientBackground)]
pub fn gradient_background(props: &GradientBackgroundProps) -> Html {
    html! {
        <div class="relative min-h-screen">
            <div class="fixed inset-0 bg-gradient-to-br from-amber-50 via-white to-rose-50 dark:from-gray-950 dark:via-gray-900 dark:to-gray-950 -z-50"></div>
            <div class="relative z-0">
                {props.children.clone()}
            </div>
        </div>
    }
}
