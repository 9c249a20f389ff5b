use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TagListProps {
    pub tags: Vec<String>,
    /// Show at most this many tags.
    #[prop_or_default]
    pub limit: Option<usize>,
}

#[function_component(TagList)]
pub fn tag_list(props: &TagListProps) -> Html {
    if props.tags.is_empty() {
        return Html::default();
    }
    let limit = props.limit.unwrap_or(props.tags.len());

    html! {
        <ul class="flex flex-wrap gap-2 mt-3">
            { for props.tags.iter().take(limit).map(|tag| html! {
                <li key={tag.clone()} class="px-2 py-0.5 rounded-full bg-gray-100 text-gray-600 text-xs">
                    { format!("#{tag}") }
                </li>
            }) }
        </ul>
    }
}
