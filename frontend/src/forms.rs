//! Small helpers shared by the two submission forms.

use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use wtp_shared::transport::FilePart;
use yew::prelude::*;

/// Current value of whichever form control fired the event.
pub fn target_value(event: &Event) -> String {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
        return area.value();
    }
    event
        .target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}

/// `oninput` handler writing one field of a form held in `use_state`.
pub fn bind_input<T: Clone + 'static>(
    form: &UseStateHandle<T>,
    apply: fn(&mut T, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |event: InputEvent| {
        let mut next = (*form).clone();
        apply(&mut next, target_value(&event));
        form.set(next);
    })
}

/// `onchange` variant for `<select>`.
pub fn bind_change<T: Clone + 'static>(
    form: &UseStateHandle<T>,
    apply: fn(&mut T, String),
) -> Callback<Event> {
    let form = form.clone();
    Callback::from(move |event: Event| {
        let mut next = (*form).clone();
        apply(&mut next, target_value(&event));
        form.set(next);
    })
}

/// Selected files of an `<input type="file">`.
pub fn selected_files(input: &HtmlInputElement) -> Vec<File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|index| list.get(index)).collect()
}

/// Read a browser `File` into an upload part. `field` is overridden by
/// the API call that sends it.
pub async fn read_file(file: &File, field: &str) -> Result<FilePart, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read {}: {e:?}", file.name()))?;
    Ok(FilePart {
        field: field.to_string(),
        file_name: file.name(),
        content_type: file.type_(),
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}

pub async fn read_files(files: &[File], field: &str) -> Vec<FilePart> {
    let mut parts = Vec::with_capacity(files.len());
    for file in files {
        match read_file(file, field).await {
            Ok(part) => parts.push(part),
            Err(err) => web_sys::console::error_1(&err.into()),
        }
    }
    parts
}
