use yew::prelude::*;

use crate::i18n::current::common as t;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    /// Text shown under the ring.
    #[prop_or(AttrValue::Static(t::LOADING))]
    pub label: AttrValue,
}

/// Centered ring used while a listing or detail has nothing to show yet.
#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    html! {
        <div class="flex flex-col items-center gap-3 py-16 text-gray-500" role="status" aria-live="polite">
            <span class="h-10 w-10 rounded-full border-4 border-orange-200 border-t-orange-600 animate-spin" />
            <p class="text-sm">{ props.label.clone() }</p>
        </div>
    }
}
