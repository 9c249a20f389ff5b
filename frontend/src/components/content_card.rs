use web_sys::HtmlImageElement;
use wtp_shared::{
    card::{CardContext, CardView},
    query::DetailQuery,
    ContentItem, ContentKind,
};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{components::tag_list::TagList, i18n::current::common as t, router::Route};

pub fn detail_route(kind: ContentKind) -> Route {
    match kind {
        ContentKind::Blog => Route::BlogDetail,
        ContentKind::Story => Route::StoryDetail,
    }
}

/// Swap a broken image for the card's placeholder, once.
pub fn image_fallback(fallback: &'static str) -> Callback<Event> {
    Callback::from(move |event: Event| {
        if let Some(image) = event.target_dyn_into::<HtmlImageElement>() {
            if !image.src().ends_with(fallback) {
                image.set_src(fallback);
            }
        }
    })
}

pub fn render_card(item: &ContentItem, context: CardContext) -> Html {
    html! { <ContentCard key={item.id.clone()} item={item.clone()} context={context} /> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ContentCardProps {
    pub item: ContentItem,
    #[prop_or(CardContext::Listing)]
    pub context: CardContext,
}

#[function_component(ContentCard)]
pub fn content_card(props: &ContentCardProps) -> Html {
    let view = CardView::build(&props.item, props.context);
    let route = detail_route(view.kind);
    let query = Some(DetailQuery::by_id(view.id.clone()));
    let compact = view.context == CardContext::Related;

    html! {
        <article class={classes!(
            "bg-white", "rounded-xl", "shadow-md", "overflow-hidden",
            "flex", "flex-col", "transition", "hover:shadow-xl"
        )}>
            <Link<Route, DetailQuery> to={route.clone()} query={query.clone()} classes={classes!("block", "relative")}>
                <img
                    src={view.image_url.clone()}
                    alt={view.title.clone()}
                    loading="lazy"
                    class={classes!("w-full", "object-cover", if compact { "h-36" } else { "h-48" })}
                    onerror={image_fallback(view.fallback_image)}
                />
                <span class={classes!(
                    "absolute", "top-3", "left-3", "px-3", "py-1", "rounded-full",
                    "text-xs", "font-semibold", "text-white", view.category_class
                )}>
                    { &view.category }
                </span>
            </Link<Route, DetailQuery>>
            <div class="p-5 flex flex-col flex-1">
                <div class="flex items-center gap-3 text-xs text-gray-500 mb-2">
                    if !view.date_label.is_empty() {
                        <span>{ &view.date_label }</span>
                    }
                    if !view.read_time_label.is_empty() {
                        <span>{ &view.read_time_label }</span>
                    }
                    if let Some(location) = view.location.as_ref() {
                        <span>{ location }</span>
                    }
                </div>
                <h3 class="text-lg font-bold text-gray-900 mb-2">
                    <Link<Route, DetailQuery> to={route.clone()} query={query.clone()}>
                        { &view.title }
                    </Link<Route, DetailQuery>>
                </h3>
                <p class="text-gray-600 text-sm flex-1">{ &view.excerpt }</p>
                if !compact {
                    <TagList tags={view.tags.clone()} limit={3} />
                }
                <div class="flex items-center justify-between mt-4">
                    <div class="flex items-center gap-2">
                        <img
                            src={view.author_avatar.clone()}
                            alt={view.author_name.clone()}
                            class="w-8 h-8 rounded-full object-cover"
                            onerror={image_fallback(wtp_shared::config::defaults::AUTHOR_IMAGE)}
                        />
                        <div class="text-xs">
                            <p class="font-semibold text-gray-800">{ &view.author_name }</p>
                            <p class="text-gray-500">{ &view.author_bio }</p>
                        </div>
                    </div>
                    <Link<Route, DetailQuery> to={route} query={query} classes={classes!("text-primary", "text-sm", "font-semibold")}>
                        { format!("{} {}", t::READ_MORE, t::ARROW_RIGHT) }
                    </Link<Route, DetailQuery>>
                </div>
            </div>
        </article>
    }
}
