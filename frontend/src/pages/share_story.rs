use wtp_shared::submission::StorySubmissionForm;
use yew::prelude::*;

use crate::{
    components::toast::Toast,
    config::site_config,
    forms::{bind_change, bind_input, read_files, selected_files},
    hooks::{use_scroll_to_top, use_stories_view_model},
    i18n::current::share_story as t,
};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-gray-300";

#[function_component(ShareStoryPage)]
pub fn share_story_page() -> Html {
    use_scroll_to_top();
    let (view_model, state) = use_stories_view_model();
    let form = use_state(StorySubmissionForm::default);
    let submitting = use_state(|| false);
    let media_ref = use_node_ref();

    let onsubmit = {
        let view_model = view_model.clone();
        let form = form.clone();
        let submitting = submitting.clone();
        let media_ref = media_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);
            let snapshot = (*form).clone();
            let files = media_ref
                .cast::<web_sys::HtmlInputElement>()
                .map(|input| selected_files(&input))
                .unwrap_or_default();
            let view_model = view_model.clone();
            let form = form.clone();
            let submitting = submitting.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let media = read_files(&files, "media").await;
                // The view-model raises the toast either way.
                if view_model.submit(snapshot, media).await.is_ok() {
                    form.set(StorySubmissionForm::default());
                }
                submitting.set(false);
            });
        })
    };

    let toggle_anonymous = {
        let form = form.clone();
        Callback::from(move |_: Event| {
            let mut next = (*form).clone();
            next.is_anonymous = !next.is_anonymous;
            form.set(next);
        })
    };

    let dismiss = {
        let view_model = view_model.clone();
        Callback::from(move |_| view_model.dismiss_notification())
    };

    html! {
        <main class="container mx-auto px-4 py-12 max-w-3xl">
            <h1 class="text-4xl font-extrabold mb-8">{ t::TITLE }</h1>
            <form class="space-y-5 bg-white p-8 rounded-2xl shadow" onsubmit={onsubmit} novalidate=true>
                <label class="block">
                    <span class="text-sm font-medium">{ t::STORY_TITLE }</span>
                    <input class={INPUT_CLASS} value={form.title.clone()}
                        oninput={bind_input(&form, |f, v| f.title = v)} />
                </label>
                <label class="block">
                    <span class="text-sm font-medium">{ t::CATEGORY }</span>
                    <select class={INPUT_CLASS} onchange={bind_change(&form, |f, v| f.category = v)}>
                        <option value="" selected={form.category.is_empty()}>{"—"}</option>
                        { for t::CATEGORIES.iter().map(|category| html! {
                            <option value={*category} selected={form.category == *category}>{ *category }</option>
                        }) }
                    </select>
                </label>
                <label class="block">
                    <span class="text-sm font-medium">{ t::DESCRIPTION }</span>
                    <textarea class={INPUT_CLASS} rows="8" value={form.description.clone()}
                        oninput={bind_input(&form, |f, v| f.description = v)} />
                </label>
                <label class="flex items-center gap-2">
                    <input type="checkbox" checked={form.is_anonymous} onchange={toggle_anonymous} />
                    <span class="text-sm">{ t::ANONYMOUS }</span>
                </label>
                if !form.is_anonymous {
                    <div class="grid gap-5 md:grid-cols-2">
                        <label class="block">
                            <span class="text-sm font-medium">{ t::NAME }</span>
                            <input class={INPUT_CLASS} value={form.name.clone()}
                                oninput={bind_input(&form, |f, v| f.name = v)} />
                        </label>
                        <label class="block">
                            <span class="text-sm font-medium">{ t::EMAIL }</span>
                            <input type="email" class={INPUT_CLASS} value={form.email.clone()}
                                oninput={bind_input(&form, |f, v| f.email = v)} />
                        </label>
                        <label class="block">
                            <span class="text-sm font-medium">{ t::ROLE }</span>
                            <input class={INPUT_CLASS} value={form.role.clone()}
                                oninput={bind_input(&form, |f, v| f.role = v)} />
                        </label>
                        <label class="block">
                            <span class="text-sm font-medium">{ t::AGE }</span>
                            <input type="number" min="1" class={INPUT_CLASS} value={form.age.clone()}
                                oninput={bind_input(&form, |f, v| f.age = v)} />
                        </label>
                    </div>
                }
                <label class="block">
                    <span class="text-sm font-medium">{ t::LOCATION }</span>
                    <input class={INPUT_CLASS} value={form.location.clone()}
                        oninput={bind_input(&form, |f, v| f.location = v)} />
                </label>
                <label class="block">
                    <span class="text-sm font-medium">{ t::IMPACT }</span>
                    <textarea class={INPUT_CLASS} rows="3" value={form.impact.clone()}
                        oninput={bind_input(&form, |f, v| f.impact = v)} />
                </label>
                <label class="block">
                    <span class="text-sm font-medium">{ t::INSPIRATION }</span>
                    <textarea class={INPUT_CLASS} rows="3" value={form.inspiration.clone()}
                        oninput={bind_input(&form, |f, v| f.inspiration = v)} />
                </label>
                <label class="block">
                    <span class="text-sm font-medium">{ t::MEDIA }</span>
                    <input ref={media_ref} type="file" multiple=true accept="image/*,video/*" class="block mt-2" />
                </label>
                <button type="submit" class="btn-primary w-full py-3 rounded-lg disabled:opacity-60" disabled={*submitting}>
                    { if *submitting { t::SUBMITTING } else { t::SUBMIT } }
                </button>
            </form>
            <Toast
                notification={state.notification.clone()}
                on_close={dismiss}
                duration_ms={site_config().notification_duration_ms}
            />
        </main>
    }
}
