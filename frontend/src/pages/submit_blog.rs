use wtp_shared::{
    config::blog_categories,
    notification::NotificationKind,
    submission::{blog_failure_message, submit_blog, BlogSubmissionForm},
};
use yew::prelude::*;

use crate::{
    components::toast::Toast,
    forms::{bind_change, bind_input, read_file, selected_files},
    hooks::{use_content_view_model, use_scroll_to_top},
    i18n::current::submit_blog as t,
};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-gray-300";

#[function_component(SubmitBlogPage)]
pub fn submit_blog_page() -> Html {
    use_scroll_to_top();
    let (view_model, state) = use_content_view_model();
    let form = use_state(BlogSubmissionForm::default);
    let submitting = use_state(|| false);
    let image_ref = use_node_ref();

    let onsubmit = {
        let view_model = view_model.clone();
        let form = form.clone();
        let submitting = submitting.clone();
        let image_ref = image_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);
            let snapshot = (*form).clone();
            let files = image_ref
                .cast::<web_sys::HtmlInputElement>()
                .map(|input| selected_files(&input))
                .unwrap_or_default();
            let view_model = view_model.clone();
            let form = form.clone();
            let submitting = submitting.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let image = match files.first() {
                    Some(file) => match read_file(file, "image").await {
                        Ok(part) => Some(part),
                        Err(err) => {
                            web_sys::console::error_1(&err.into());
                            None
                        },
                    },
                    None => None,
                };
                match submit_blog(view_model.api(), &snapshot, image).await {
                    Ok(message) => {
                        view_model.notify(NotificationKind::Success, message);
                        form.set(BlogSubmissionForm::default());
                    },
                    Err(err) => view_model.notify(NotificationKind::Error, blog_failure_message(&err)),
                }
                submitting.set(false);
            });
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
                <div class="grid gap-5 md:grid-cols-2">
                    <label class="block">
                        <span class="text-sm font-medium">{ t::AUTHOR_NAME }</span>
                        <input class={INPUT_CLASS} value={form.author_name.clone()}
                            oninput={bind_input(&form, |f, v| f.author_name = v)} />
                    </label>
                    <label class="block">
                        <span class="text-sm font-medium">{ t::AUTHOR_EMAIL }</span>
                        <input type="email" class={INPUT_CLASS} value={form.author_email.clone()}
                            oninput={bind_input(&form, |f, v| f.author_email = v)} />
                    </label>
                </div>
                <label class="block">
                    <span class="text-sm font-medium">{ t::AUTHOR_BIO }</span>
                    <input class={INPUT_CLASS} value={form.author_bio.clone()}
                        oninput={bind_input(&form, |f, v| f.author_bio = v)} />
                </label>
                <label class="block">
                    <span class="text-sm font-medium">{ t::BLOG_TITLE }</span>
                    <input class={INPUT_CLASS} value={form.blog_title.clone()}
                        oninput={bind_input(&form, |f, v| f.blog_title = v)} />
                </label>
                <div class="grid gap-5 md:grid-cols-2">
                    <label class="block">
                        <span class="text-sm font-medium">{ t::CATEGORY }</span>
                        <select class={INPUT_CLASS} onchange={bind_change(&form, |f, v| f.blog_category = v)}>
                            <option value="" selected={form.blog_category.is_empty()}>{"—"}</option>
                            { for blog_categories().map(|category| html! {
                                <option value={category} selected={form.blog_category == category}>{ category }</option>
                            }) }
                        </select>
                    </label>
                    <label class="block">
                        <span class="text-sm font-medium">{ t::READ_TIME }</span>
                        <input class={INPUT_CLASS} placeholder="5 min read" value={form.read_time.clone()}
                            oninput={bind_input(&form, |f, v| f.read_time = v)} />
                    </label>
                </div>
                <label class="block">
                    <span class="text-sm font-medium">{ t::SUMMARY }</span>
                    <textarea class={INPUT_CLASS} rows="3" value={form.blog_summary.clone()}
                        oninput={bind_input(&form, |f, v| f.blog_summary = v)} />
                </label>
                <label class="block">
                    <span class="text-sm font-medium">{ t::CONTENT }</span>
                    <textarea class={INPUT_CLASS} rows="12" value={form.blog_content.clone()}
                        oninput={bind_input(&form, |f, v| f.blog_content = v)} />
                </label>
                <label class="block">
                    <span class="text-sm font-medium">{ t::TAGS }</span>
                    <input class={INPUT_CLASS} value={form.tags.clone()}
                        oninput={bind_input(&form, |f, v| f.tags = v)} />
                </label>
                <label class="block">
                    <span class="text-sm font-medium">{ t::IMAGE }</span>
                    <input ref={image_ref} type="file" accept="image/*" class="block mt-2" />
                </label>
                <button type="submit" class="btn-primary w-full py-3 rounded-lg disabled:opacity-60" disabled={*submitting}>
                    { if *submitting { t::SUBMITTING } else { t::SUBMIT } }
                </button>
            </form>
            <Toast
                notification={state.notification.clone()}
                on_close={dismiss}
                duration_ms={view_model.config().notification_duration_ms}
            />
        </main>
    }
}
