use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="container mx-auto px-4 py-24 text-center">
            <h2 class="text-3xl font-bold mb-4">{ t::TITLE }</h2>
            <p class="text-gray-600 mb-8">{ t::BODY }</p>
            <Link<Route> to={Route::Home} classes={classes!("btn-primary", "px-6", "py-3", "rounded-lg")}>
                { t::HOME_LINK }
            </Link<Route>>
        </main>
    }
}
