use wtp_shared::{card::CardContext, DataOrigin};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        category_filter::CategoryFilter,
        content_card::render_card,
        featured_item::FeaturedItem,
        load_more_button::LoadMoreButton,
        loading_spinner::LoadingSpinner,
        toast::Toast,
    },
    config::site_config,
    forms::target_value,
    hooks::{use_scroll_to_top, use_stories_view_model},
    i18n::current::{share_story, stories_page as t},
    router::Route,
};

#[function_component(StoriesPage)]
pub fn stories_page() -> Html {
    use_scroll_to_top();
    let (view_model, state) = use_stories_view_model();

    {
        let view_model = view_model.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                view_model.load().await;
            });
            || ()
        });
    }

    // Filtering is local, so no debounce is needed.
    let on_search = {
        let view_model = view_model.clone();
        Callback::from(move |event: InputEvent| view_model.set_search(Some(target_value(&event))))
    };

    let on_category = {
        let view_model = view_model.clone();
        Callback::from(move |category: Option<String>| view_model.set_category(category))
    };

    let on_load_more = {
        let view_model = view_model.clone();
        Callback::from(move |_| {
            view_model.load_more();
        })
    };

    let dismiss = {
        let view_model = view_model.clone();
        Callback::from(move |_| view_model.dismiss_notification())
    };

    let categories: Vec<String> = share_story::CATEGORIES.iter().map(|c| c.to_string()).collect();
    let visible = state.visible();

    let content = if state.loading && state.stories.is_empty() {
        html! { <LoadingSpinner label={t::LOADING} /> }
    } else {
        html! {
            <>
                if let Some(featured) = state.featured().cloned() {
                    <FeaturedItem item={featured} label={AttrValue::from(t::FEATURED_LABEL)} />
                }
                <CategoryFilter
                    categories={categories}
                    active={state.category.clone()}
                    on_select={on_category}
                />
                if visible.is_empty() {
                    <p class="text-center text-gray-500 py-16">{ t::EMPTY }</p>
                } else {
                    <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                        { for visible.iter().map(|story| render_card(story, CardContext::Listing)) }
                    </div>
                }
                <LoadMoreButton has_more={state.has_more()} on_click={on_load_more} />
            </>
        }
    };

    html! {
        <main class="container mx-auto px-4 py-12">
            <div class="flex flex-col md:flex-row md:items-end md:justify-between gap-4 mb-8">
                <div>
                    <h1 class="text-4xl font-extrabold">{ t::TITLE }</h1>
                    <p class="text-gray-600 mt-2">{ t::SUBTITLE }</p>
                </div>
                <Link<Route> to={Route::ShareStory} classes={classes!("btn-primary", "px-6", "py-3", "rounded-lg")}>
                    { t::SHARE_CTA }
                </Link<Route>>
            </div>
            <input
                type="search"
                class="w-full md:w-96 mb-6 px-4 py-3 rounded-lg border border-gray-300"
                placeholder={t::SEARCH_PLACEHOLDER}
                oninput={on_search}
            />
            if state.origin == DataOrigin::Fallback {
                <p class="mb-6 text-sm text-yellow-700 bg-yellow-50 rounded-lg px-4 py-2">{ t::SAMPLE_NOTICE }</p>
            }
            { content }
            <Toast
                notification={state.notification.clone()}
                on_close={dismiss}
                duration_ms={site_config().notification_duration_ms}
            />
        </main>
    }
}
