use wtp_shared::{card::CardContext, config::blog_categories};
use yew::prelude::*;

use crate::{
    components::{
        category_filter::CategoryFilter,
        content_card::render_card,
        featured_item::FeaturedItem,
        load_more_button::LoadMoreButton,
        loading_spinner::LoadingSpinner,
        toast::Toast,
    },
    forms::target_value,
    hooks::{use_content_view_model, use_scroll_to_top},
    i18n::{current::blog_page as t, fill_one},
};

#[function_component(BlogPage)]
pub fn blog_page() -> Html {
    use_scroll_to_top();
    let (view_model, state) = use_content_view_model();
    let categories = use_state(|| blog_categories().map(str::to_string).collect::<Vec<_>>());
    let search_text = use_state(|| state.filters.search.clone().unwrap_or_default());

    {
        let view_model = view_model.clone();
        let categories = categories.clone();
        let search_text = search_text.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                view_model.restore_from_url().await;
                if let Some(search) = view_model.state().filters.search {
                    search_text.set(search);
                }
                // Server categories win when there are any; the built-in
                // list stays otherwise.
                match view_model.api().get_blog_categories().await {
                    Ok(response) if !response.data.is_empty() => categories.set(response.data),
                    Ok(_) => {},
                    Err(err) => web_sys::console::warn_1(
                        &format!("Failed to fetch categories: {err}").into(),
                    ),
                }
            });
            || ()
        });
    }

    let on_search = {
        let view_model = view_model.clone();
        let search_text = search_text.clone();
        Callback::from(move |event: InputEvent| {
            let term = target_value(&event);
            search_text.set(term.clone());
            let view_model = view_model.clone();
            wasm_bindgen_futures::spawn_local(async move {
                view_model.search(&term).await;
            });
        })
    };

    let on_category = {
        let view_model = view_model.clone();
        Callback::from(move |category: Option<String>| {
            let view_model = view_model.clone();
            wasm_bindgen_futures::spawn_local(async move {
                view_model.filter_by_category(category).await;
            });
        })
    };

    let on_load_more = {
        let view_model = view_model.clone();
        Callback::from(move |_| {
            let view_model = view_model.clone();
            wasm_bindgen_futures::spawn_local(async move {
                view_model.load_more().await;
            });
        })
    };

    let dismiss = {
        let view_model = view_model.clone();
        Callback::from(move |_| view_model.dismiss_notification())
    };

    let featured_id = state.featured.as_ref().map(|item| item.id.clone());
    let grid_items: Vec<_> = state
        .items
        .iter()
        .filter(|item| Some(&item.id) != featured_id.as_ref())
        .collect();

    let listing = if state.loading && state.items.is_empty() {
        html! { <LoadingSpinner /> }
    } else if state.items.is_empty() {
        html! { <p class="text-center text-gray-500 py-16">{ t::EMPTY }</p> }
    } else {
        html! {
            <>
                if let Some(featured) = state.featured.clone() {
                    <FeaturedItem item={featured} />
                }
                <p class="text-sm text-gray-500 mb-4">
                    { fill_one(t::RESULT_COUNT_TEMPLATE, state.pagination.total_count) }
                </p>
                <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                    { for grid_items.into_iter().map(|item| render_card(item, CardContext::Listing)) }
                </div>
                <LoadMoreButton
                    has_more={state.has_more()}
                    loading={state.loading}
                    on_click={on_load_more}
                />
            </>
        }
    };

    html! {
        <main class="container mx-auto px-4 py-12">
            <h1 class="text-4xl font-extrabold mb-8">{ t::TITLE }</h1>
            <input
                type="search"
                class="w-full md:w-96 mb-6 px-4 py-3 rounded-lg border border-gray-300"
                placeholder={t::SEARCH_PLACEHOLDER}
                aria-label={t::SEARCH_ARIA}
                value={(*search_text).clone()}
                oninput={on_search}
            />
            <CategoryFilter
                categories={(*categories).clone()}
                active={state.filters.category.clone()}
                on_select={on_category}
            />
            { listing }
            <Toast
                notification={state.notification.clone()}
                on_close={dismiss}
                duration_ms={view_model.config().notification_duration_ms}
            />
        </main>
    }
}
