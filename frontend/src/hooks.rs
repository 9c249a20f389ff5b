use std::rc::Rc;

use web_sys::{ScrollBehavior, ScrollToOptions};
use wtp_shared::{ContentViewModel, PageState, StoriesState, StoriesViewModel};
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::{
    api::api_service,
    config::site_config,
    platform::{BrowserUrl, GlooSleeper},
};

/// One [`ContentViewModel`] per mounted page, plus the latest state it
/// rendered.
///
/// The view-model outlives re-renders; its render scheduler pushes each
/// committed snapshot into a `use_state` handle, which is what makes yew
/// re-render and diff.
///
/// ```ignore
/// #[function_component(BlogPage)]
/// fn blog_page() -> Html {
///     let (view_model, state) = use_content_view_model();
///     use_effect_with((), move |_| {
///         wasm_bindgen_futures::spawn_local(async move {
///             view_model.restore_from_url().await;
///         });
///     });
///     html! { <p>{ state.items.len() }</p> }
/// }
/// ```
#[hook]
pub fn use_content_view_model() -> (Rc<ContentViewModel>, PageState) {
    let view_model: Rc<ContentViewModel> = use_memo((), |_| {
        ContentViewModel::new(
            api_service(),
            site_config(),
            Rc::new(BrowserUrl),
            Rc::new(GlooSleeper),
        )
    });
    let state = use_state(|| view_model.state());

    {
        let view_model = view_model.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let subscription = view_model.subscribe(move |snapshot| state.set(snapshot.clone()));
            move || drop(subscription)
        });
    }

    (view_model, (*state).clone())
}

/// Same as [`use_content_view_model`] for the stories pages.
#[hook]
pub fn use_stories_view_model() -> (Rc<StoriesViewModel>, StoriesState) {
    let view_model: Rc<StoriesViewModel> =
        use_memo((), |_| StoriesViewModel::new(api_service(), &site_config()));
    let state = use_state(|| view_model.state());

    {
        let view_model = view_model.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let subscription = view_model.subscribe(move |snapshot| state.set(snapshot.clone()));
            move || drop(subscription)
        });
    }

    (view_model, (*state).clone())
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
