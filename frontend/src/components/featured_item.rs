use wtp_shared::{
    card::{CardContext, CardView},
    query::DetailQuery,
    ContentItem,
};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::content_card::{detail_route, image_fallback},
    i18n::current::common as t,
    router::Route,
};

#[derive(Properties, PartialEq)]
pub struct FeaturedItemProps {
    pub item: ContentItem,
    /// Small caption above the title, e.g. "Featured Story".
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

/// Wide lead block for the first item of a listing.
#[function_component(FeaturedItem)]
pub fn featured_item(props: &FeaturedItemProps) -> Html {
    let view = CardView::build(&props.item, CardContext::Featured);
    let route = detail_route(view.kind);
    let query = Some(DetailQuery::by_id(view.id.clone()));

    html! {
        <section class="bg-white rounded-2xl shadow-lg overflow-hidden grid md:grid-cols-2 mb-10">
            <img
                src={view.image_url.clone()}
                alt={view.title.clone()}
                class="w-full h-64 md:h-full object-cover"
                onerror={image_fallback(view.fallback_image)}
            />
            <div class="p-8 flex flex-col justify-center">
                if let Some(label) = props.label.clone() {
                    <p class="text-xs uppercase tracking-widest text-secondary mb-2">{ label }</p>
                }
                <span class={classes!(
                    "self-start", "px-3", "py-1", "rounded-full", "text-xs",
                    "font-semibold", "text-white", "mb-4", view.category_class
                )}>
                    { &view.category }
                </span>
                <h2 class="text-2xl md:text-3xl font-bold text-gray-900 mb-4">{ &view.title }</h2>
                <p class="text-gray-600 mb-6">{ &view.excerpt }</p>
                <div class="flex items-center gap-3 mb-6">
                    <img src={view.author_avatar.clone()} alt={view.author_name.clone()} class="w-10 h-10 rounded-full object-cover" />
                    <div class="text-sm">
                        <p class="font-semibold">{ &view.author_name }</p>
                        <p class="text-gray-500">
                            { &view.date_label }
                            if !view.read_time_label.is_empty() {
                                { format!(" · {}", view.read_time_label) }
                            }
                        </p>
                    </div>
                </div>
                <Link<Route, DetailQuery> to={route} query={query} classes={classes!("btn-primary", "self-start")}>
                    { format!("{} {}", t::READ_MORE, t::ARROW_RIGHT) }
                </Link<Route, DetailQuery>>
            </div>
        </section>
    }
}
