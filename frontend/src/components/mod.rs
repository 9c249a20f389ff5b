// Reusable components live here.

pub mod category_filter;
pub mod content_card;
pub mod featured_item;
pub mod footer;
pub mod header;
pub mod load_more_button;
pub mod loading_spinner;
pub mod raw_html;
pub mod tag_list;
pub mod toast;
