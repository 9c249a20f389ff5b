use wtp_shared::{card::CardContext, config::category_style, messages, query::DetailQuery};
use yew::prelude::*;
use yew_router::prelude::{use_location, Link};

use crate::{
    components::{
        content_card::{image_fallback, render_card},
        loading_spinner::LoadingSpinner,
        tag_list::TagList,
        toast::Toast,
    },
    hooks::{use_scroll_to_top, use_stories_view_model},
    config::site_config,
    i18n::{current::story_detail as t, fill_one},
    router::Route,
};

/// Stories are looked up in the loaded list; there is no single-story
/// endpoint.
#[function_component(StoryDetailPage)]
pub fn story_detail_page() -> Html {
    use_scroll_to_top();
    let (view_model, state) = use_stories_view_model();
    let location = use_location();
    let query = location
        .as_ref()
        .and_then(|location| location.query::<DetailQuery>().ok())
        .unwrap_or_default();

    {
        let view_model = view_model.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                view_model.load().await;
            });
            || ()
        });
    }

    let dismiss = {
        let view_model = view_model.clone();
        Callback::from(move |_| view_model.dismiss_notification())
    };

    let back = html! {
        <Link<Route> to={Route::Stories} classes={classes!("text-primary", "text-sm", "font-semibold")}>
            { t::BACK }
        </Link<Route>>
    };

    let found = query.identifier().map(|id| state.story(id));
    let body = match found {
        _ if state.loading && state.stories.is_empty() => {
            html! { <LoadingSpinner /> }
        },
        Some(Ok(story)) => {
            let style = category_style(&story.category);
            let details = story.story.clone().unwrap_or_default();
            let related = state.related(&story);
            html! {
                <>
                    <article class="max-w-3xl mx-auto">
                        { back }
                        <img
                            src={story.image_url.clone()}
                            alt={story.title.clone()}
                            class="w-full rounded-2xl my-8 max-h-[28rem] object-cover"
                            onerror={image_fallback(wtp_shared::config::defaults::STORY_IMAGE)}
                        />
                        <span class={classes!(
                            "inline-block", "px-3", "py-1", "rounded-full",
                            "text-xs", "font-semibold", "text-white", style.class
                        )}>
                            { &story.category }
                        </span>
                        <h1 class="text-4xl font-extrabold mt-4 mb-4">{ &story.title }</h1>
                        <div class="flex flex-wrap gap-4 text-sm text-gray-600 mb-8">
                            <span class="font-semibold text-gray-900">{ &story.author.name }</span>
                            <span>{ &story.author.bio }</span>
                            <span>{ &details.location }</span>
                            if let Some(age) = details.author_age.as_ref() {
                                <span>{ fill_one(t::AGE_TEMPLATE, age) }</span>
                            }
                            <span>{ story.date_label() }</span>
                        </div>
                        <div class="prose max-w-none whitespace-pre-line">{ &story.body_html }</div>
                        if !details.impact.is_empty() {
                            <section class="mt-8 p-6 bg-blue-50 rounded-xl">
                                <h2 class="font-bold mb-2">{ t::IMPACT }</h2>
                                <p>{ &details.impact }</p>
                            </section>
                        }
                        if !details.inspiration.is_empty() {
                            <section class="mt-6 p-6 bg-green-50 rounded-xl">
                                <h2 class="font-bold mb-2">{ t::INSPIRATION }</h2>
                                <p>{ &details.inspiration }</p>
                            </section>
                        }
                        <TagList tags={story.tags.clone()} />
                    </article>
                    if !related.is_empty() {
                        <section class="max-w-5xl mx-auto mt-16">
                            <h2 class="text-2xl font-bold mb-6">{ t::RELATED_TITLE }</h2>
                            <div class="grid gap-6 md:grid-cols-3">
                                { for related.iter().map(|item| render_card(item, CardContext::Related)) }
                            </div>
                        </section>
                    }
                </>
            }
        },
        Some(Err(err)) => html! {
            <div class="text-center py-24">
                <p class="text-gray-600 mb-8">{ err.user_message() }</p>
                { back }
            </div>
        },
        None => html! {
            <div class="text-center py-24">
                <p class="text-gray-600 mb-8">{ messages::errors::STORY_NOT_FOUND }</p>
                { back }
            </div>
        },
    };

    html! {
        <main class="container mx-auto px-4 py-12">
            { body }
            <Toast
                notification={state.notification.clone()}
                on_close={dismiss}
                duration_ms={site_config().notification_duration_ms}
            />
        </main>
    }
}
