use wtp_shared::{card::CardContext, DataOrigin};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        content_card::render_card,
        loading_spinner::LoadingSpinner,
        toast::Toast,
    },
    hooks::{use_content_view_model, use_scroll_to_top},
    i18n::current::{header, home as t},
    router::Route,
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_scroll_to_top();
    let (view_model, state) = use_content_view_model();

    {
        let view_model = view_model.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                view_model.load_recent().await;
            });
            || ()
        });
    }

    let dismiss = {
        let view_model = view_model.clone();
        Callback::from(move |_| view_model.dismiss_notification())
    };

    let recent = if state.loading && state.items.is_empty() {
        html! { <LoadingSpinner label={t::LOADING} /> }
    } else if state.items.is_empty() {
        html! { <p class="text-center text-gray-500">{ t::EMPTY }</p> }
    } else {
        html! {
            <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                { for state.items.iter().map(|item| render_card(item, CardContext::Homepage)) }
            </div>
        }
    };

    html! {
        <main>
            <section class="bg-gradient-to-r from-primary to-secondary text-white py-20">
                <div class="container mx-auto px-4 text-center">
                    <h1 class="text-4xl md:text-5xl font-extrabold mb-4">{ t::HERO_TITLE }</h1>
                    <p class="text-lg opacity-90 mb-8">{ t::HERO_SUBTITLE }</p>
                    <div class="flex justify-center gap-4">
                        <Link<Route> to={Route::Stories} classes={classes!("bg-white", "text-primary", "px-6", "py-3", "rounded-lg", "font-semibold")}>
                            { header::NAV_STORIES }
                        </Link<Route>>
                        <Link<Route> to={Route::ShareStory} classes={classes!("border", "border-white", "px-6", "py-3", "rounded-lg", "font-semibold")}>
                            { header::NAV_SHARE_STORY }
                        </Link<Route>>
                    </div>
                </div>
            </section>
            <section class="container mx-auto px-4 py-16">
                <div class="flex items-end justify-between mb-8">
                    <h2 class="text-3xl font-bold">{ t::RECENT_TITLE }</h2>
                    <Link<Route> to={Route::Blog} classes={classes!("text-primary", "font-semibold")}>
                        { t::VIEW_ALL }
                    </Link<Route>>
                </div>
                if state.origin == DataOrigin::Fallback {
                    <p class="mb-6 text-sm text-yellow-700 bg-yellow-50 rounded-lg px-4 py-2">{ t::SAMPLE_NOTICE }</p>
                }
                { recent }
            </section>
            <Toast
                notification={state.notification.clone()}
                on_close={dismiss}
                duration_ms={view_model.config().notification_duration_ms}
            />
        </main>
    }
}
