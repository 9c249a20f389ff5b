use yew::prelude::*;

use crate::i18n::current::load_more as t;

#[derive(Properties, PartialEq)]
pub struct LoadMoreButtonProps {
    pub has_more: bool,
    #[prop_or(false)]
    pub loading: bool,
    pub on_click: Callback<()>,
}

/// Hidden once there is nothing left to load.
#[function_component(LoadMoreButton)]
pub fn load_more_button(props: &LoadMoreButtonProps) -> Html {
    if !props.has_more {
        return Html::default();
    }
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(()))
    };

    html! {
        <div class="flex justify-center mt-10">
            <button
                type="button"
                class="btn-primary px-8 py-3 rounded-lg disabled:opacity-60"
                disabled={props.loading}
                onclick={onclick}
            >
                { if props.loading { t::LOADING } else { t::LABEL } }
            </button>
        </div>
    }
}
