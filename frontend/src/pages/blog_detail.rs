use wtp_shared::{card::CardContext, config::category_style};
use yew::prelude::*;
use yew_router::prelude::{use_location, Link};

use crate::{
    components::{
        content_card::{image_fallback, render_card},
        loading_spinner::LoadingSpinner,
        raw_html::RawHtml,
        tag_list::TagList,
        toast::Toast,
    },
    hooks::{use_content_view_model, use_scroll_to_top},
    i18n::current::blog_detail as t,
    router::Route,
};

#[function_component(BlogDetailPage)]
pub fn blog_detail_page() -> Html {
    use_scroll_to_top();
    let (view_model, state) = use_content_view_model();
    let location = use_location();
    let query_key = location
        .as_ref()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();

    {
        let view_model = view_model.clone();
        use_effect_with(query_key, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                view_model.load_detail().await;
            });
            || ()
        });
    }

    let dismiss = {
        let view_model = view_model.clone();
        Callback::from(move |_| view_model.dismiss_notification())
    };

    let body = match (state.current_detail.as_ref(), state.loading) {
        (None, true) => html! { <LoadingSpinner /> },
        (None, false) => html! {
            <div class="text-center py-24">
                <h1 class="text-3xl font-bold mb-4">{ t::NOT_FOUND_TITLE }</h1>
                <p class="text-gray-600 mb-8">{ t::NOT_FOUND_BODY }</p>
                <Link<Route> to={Route::Blog} classes={classes!("text-primary", "font-semibold")}>
                    { t::BACK }
                </Link<Route>>
            </div>
        },
        (Some(blog), _) => {
            let style = category_style(&blog.category);
            html! {
                <article class="max-w-3xl mx-auto">
                    <Link<Route> to={Route::Blog} classes={classes!("text-primary", "text-sm", "font-semibold")}>
                        { t::BACK }
                    </Link<Route>>
                    <span class={classes!(
                        "inline-block", "mt-6", "px-3", "py-1", "rounded-full",
                        "text-xs", "font-semibold", "text-white", style.class
                    )}>
                        { &blog.category }
                    </span>
                    <h1 class="text-4xl font-extrabold mt-4 mb-6">{ &blog.title }</h1>
                    <div class="flex items-center gap-3 mb-8 text-sm text-gray-600">
                        <img
                            src={wtp_shared::card::author_avatar(&blog.author)}
                            alt={blog.author.name.clone()}
                            class="w-12 h-12 rounded-full object-cover"
                        />
                        <div>
                            <p class="font-semibold text-gray-900">{ &blog.author.name }</p>
                            <p>{ format!("{} · {}", blog.date_label(), blog.read_time_label) }</p>
                        </div>
                    </div>
                    <img
                        src={blog.image_url.clone()}
                        alt={blog.title.clone()}
                        class="w-full rounded-2xl mb-10"
                        onerror={image_fallback(wtp_shared::config::defaults::BLOG_IMAGE)}
                    />
                    <RawHtml html={AttrValue::from(blog.body_html.clone())} class={classes!("prose", "max-w-none")} />
                    <TagList tags={blog.tags.clone()} />
                </article>
            }
        },
    };

    html! {
        <main class="container mx-auto px-4 py-12">
            { body }
            if !state.related.is_empty() {
                <section class="max-w-5xl mx-auto mt-16">
                    <h2 class="text-2xl font-bold mb-6">{ t::RELATED_TITLE }</h2>
                    <div class="grid gap-6 md:grid-cols-3">
                        { for state.related.iter().map(|item| render_card(item, CardContext::Related)) }
                    </div>
                </section>
            }
            <Toast
                notification={state.notification.clone()}
                on_close={dismiss}
                duration_ms={view_model.config().notification_duration_ms}
            />
        </main>
    }
}
