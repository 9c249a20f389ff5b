use yew::prelude::*;
use yew_router::prelude::*;

use crate::{i18n::current::header as t, router::Route};

const NAV_ITEMS: &[(Route, &str)] = &[
    (Route::Home, t::NAV_HOME),
    (Route::Blog, t::NAV_BLOG),
    (Route::Stories, t::NAV_STORIES),
    (Route::SubmitBlog, t::NAV_SUBMIT_BLOG),
];

/// Detail pages highlight their listing.
fn section_of(route: &Route) -> Route {
    match route {
        Route::BlogDetail => Route::Blog,
        Route::StoryDetail | Route::ShareStory => Route::Stories,
        other => other.clone(),
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let mobile_menu_open = use_state(|| false);
    let route = use_route::<Route>();
    let active = route.as_ref().map(section_of);

    {
        let mobile_menu_open = mobile_menu_open.clone();
        use_effect_with(route.clone(), move |_| {
            mobile_menu_open.set(false);
            || ()
        });
    }

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(!*mobile_menu_open))
    };

    let nav_links = |extra: Classes| {
        html! {
            <>
            { for NAV_ITEMS.iter().map(|(target, label)| {
                let is_active = active.as_ref() == Some(target);
                html! {
                    <Link<Route>
                        to={target.clone()}
                        classes={classes!(
                            extra.clone(),
                            "font-medium",
                            if is_active { "text-primary" } else { "text-gray-700 hover:text-primary" }
                        )}
                    >
                        { *label }
                    </Link<Route>>
                }
            }) }
            </>
        }
    };

    html! {
        <header class="sticky top-0 z-40 bg-white/95 shadow-sm backdrop-blur">
            <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                <Link<Route> to={Route::Home} classes={classes!("text-xl", "font-extrabold", "text-primary")}>
                    { t::BRAND_NAME }
                </Link<Route>>
                <nav class="hidden md:flex items-center gap-8" aria-label={t::NAV_MAIN_ARIA}>
                    { nav_links(classes!("py-2")) }
                    <Link<Route> to={Route::ShareStory} classes={classes!("btn-primary", "px-4", "py-2", "rounded-lg")}>
                        { t::NAV_SHARE_STORY }
                    </Link<Route>>
                </nav>
                <button
                    type="button"
                    class="md:hidden text-2xl"
                    aria-label={t::OPEN_MENU_ARIA}
                    aria-expanded={(*mobile_menu_open).to_string()}
                    onclick={toggle_mobile_menu}
                >
                    {"☰"}
                </button>
            </div>
            if *mobile_menu_open {
                <nav class="md:hidden flex flex-col px-4 pb-4 gap-2 bg-white">
                    { nav_links(classes!("py-2", "border-b", "border-gray-100")) }
                    <Link<Route> to={Route::ShareStory} classes={classes!("py-2", "font-semibold", "text-primary")}>
                        { t::NAV_SHARE_STORY }
                    </Link<Route>>
                </nav>
            }
        </header>
    }
}
