pub mod blog;
pub mod blog_detail;
pub mod home;
pub mod not_found;
pub mod share_story;
pub mod stories;
pub mod story_detail;
pub mod submit_blog;
