use yew::prelude::*;

use crate::i18n::current::{footer as t, header};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gray-900 text-gray-300 py-8 mt-16">
            <div class="container mx-auto px-4 text-center space-y-2">
                <p class="font-bold text-white">{ header::BRAND_NAME }</p>
                <p class="text-sm">{ t::TAGLINE }</p>
                <p class="text-xs text-gray-500">{ t::COPYRIGHT }</p>
            </div>
        </footer>
    }
}
