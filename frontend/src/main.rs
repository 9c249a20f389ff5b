//! Browser app for the community site: blog listing and detail pages,
//! community stories and the two submission forms.
//!
//! All state handling lives in `wtp-shared`; this crate wires it to
//! `gloo-net`, `gloo-timers` and the History API and renders with `yew`.

mod api;
mod components;
mod config;
mod forms;
pub mod hooks;
mod i18n;
mod pages;
mod platform;
mod router;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
