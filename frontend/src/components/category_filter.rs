use yew::prelude::*;

use crate::i18n::current::common as t;

#[derive(Properties, PartialEq)]
pub struct CategoryFilterProps {
    pub categories: Vec<String>,
    /// `None` means "All".
    pub active: Option<String>,
    pub on_select: Callback<Option<String>>,
}

#[function_component(CategoryFilter)]
pub fn category_filter(props: &CategoryFilterProps) -> Html {
    let button = |label: String, value: Option<String>| {
        let selected = props
            .active
            .as_deref()
            .map(str::to_lowercase)
            == value.as_deref().map(str::to_lowercase);
        let on_select = props.on_select.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_select.emit(value.clone()));
        html! {
            <button
                key={label.clone()}
                type="button"
                aria-pressed={selected.to_string()}
                class={classes!(
                    "px-4", "py-2", "rounded-full", "text-sm", "font-medium", "transition",
                    if selected { "bg-primary text-white" } else { "bg-white text-gray-700 hover:bg-gray-100" }
                )}
                onclick={onclick}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="flex flex-wrap gap-2 mb-8">
            { button(t::ALL_CATEGORIES.to_string(), None) }
            { for props.categories.iter().map(|category| button(category.clone(), Some(category.clone()))) }
        </div>
    }
}
