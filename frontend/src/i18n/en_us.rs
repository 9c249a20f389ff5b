pub mod common {
    pub const LOADING: &str = "Loading...";
    pub const READ_MORE: &str = "Read More";
    pub const ARROW_RIGHT: &str = "→";
    pub const ALL_CATEGORIES: &str = "All";
}

pub mod header {
    pub const BRAND_NAME: &str = "We The People";
    pub const NAV_HOME: &str = "Home";
    pub const NAV_BLOG: &str = "Blog";
    pub const NAV_STORIES: &str = "Stories";
    pub const NAV_SUBMIT_BLOG: &str = "Write a Blog";
    pub const NAV_SHARE_STORY: &str = "Share Your Story";
    pub const NAV_MAIN_ARIA: &str = "Main navigation";
    pub const OPEN_MENU_ARIA: &str = "Open menu";
}

pub mod footer {
    pub const TAGLINE: &str = "A people's movement for accountable governance.";
    pub const COPYRIGHT: &str = "© 2025 We The People. All rights reserved.";
}

pub mod toast {
    pub const CLOSE_ARIA: &str = "Dismiss notification";
}

pub mod load_more {
    pub const LABEL: &str = "Load More";
    pub const LOADING: &str = "Loading...";
}

pub mod home {
    pub const LOADING: &str = "Loading recent posts...";
    pub const HERO_TITLE: &str = "Voices of Change";
    pub const HERO_SUBTITLE: &str =
        "Stories, reports and ideas from citizens building better governance.";
    pub const RECENT_TITLE: &str = "Latest from the Blog";
    pub const VIEW_ALL: &str = "View all posts";
    pub const SAMPLE_NOTICE: &str = "Showing sample posts while the server is unavailable.";
    pub const EMPTY: &str = "No posts yet.";
}

pub mod blog_page {
    pub const TITLE: &str = "Movement Blog";
    pub const SEARCH_PLACEHOLDER: &str = "Search articles...";
    pub const SEARCH_ARIA: &str = "Search articles";
    pub const EMPTY: &str = "No articles match your filters.";
    pub const RESULT_COUNT_TEMPLATE: &str = "{} articles";
}

pub mod blog_detail {
    pub const BACK: &str = "← Back to Blog";
    pub const RELATED_TITLE: &str = "Related Articles";
    pub const NOT_FOUND_TITLE: &str = "Article not found";
    pub const NOT_FOUND_BODY: &str =
        "The article you are looking for does not exist or has been removed.";
}

pub mod stories_page {
    pub const LOADING: &str = "Loading community stories...";
    pub const TITLE: &str = "Community Stories";
    pub const SUBTITLE: &str = "Real people, real change across Bihar.";
    pub const SEARCH_PLACEHOLDER: &str = "Search stories...";
    pub const FEATURED_LABEL: &str = "Featured Story";
    pub const EMPTY: &str = "No stories match your filters.";
    pub const SAMPLE_NOTICE: &str = "Showing sample stories while the server is unavailable.";
    pub const SHARE_CTA: &str = "Share Your Story";
}

pub mod story_detail {
    pub const BACK: &str = "← Back to Stories";
    pub const IMPACT: &str = "Impact";
    pub const INSPIRATION: &str = "What inspired this";
    pub const RELATED_TITLE: &str = "More Stories";
    pub const AGE_TEMPLATE: &str = "Age {}";
}

pub mod submit_blog {
    pub const TITLE: &str = "Write for the Movement";
    pub const AUTHOR_NAME: &str = "Your Name *";
    pub const AUTHOR_EMAIL: &str = "Email *";
    pub const AUTHOR_BIO: &str = "Short Bio";
    pub const BLOG_TITLE: &str = "Blog Title *";
    pub const CATEGORY: &str = "Category *";
    pub const READ_TIME: &str = "Read Time *";
    pub const SUMMARY: &str = "Summary *";
    pub const CONTENT: &str = "Content *";
    pub const TAGS: &str = "Tags (comma separated)";
    pub const IMAGE: &str = "Featured Image";
    pub const SUBMIT: &str = "Submit for Review";
    pub const SUBMITTING: &str = "Submitting...";
}

pub mod share_story {
    pub const TITLE: &str = "Share Your Story";
    pub const STORY_TITLE: &str = "Story Title *";
    pub const DESCRIPTION: &str = "Your Story *";
    pub const CATEGORY: &str = "Category *";
    pub const NAME: &str = "Name";
    pub const EMAIL: &str = "Email";
    pub const ROLE: &str = "Role";
    pub const AGE: &str = "Age";
    pub const LOCATION: &str = "Location";
    pub const IMPACT: &str = "Impact";
    pub const INSPIRATION: &str = "Inspiration";
    pub const ANONYMOUS: &str = "Submit anonymously";
    pub const MEDIA: &str = "Photos or videos";
    pub const SUBMIT: &str = "Submit Story";
    pub const SUBMITTING: &str = "Submitting...";
    pub const CATEGORIES: &[&str] =
        &["Community", "Education", "Healthcare", "Justice", "Youth", "Environment", "Women"];
}

pub mod not_found {
    pub const TITLE: &str = "404 - Page Not Found";
    pub const BODY: &str = "Sorry, the page you are looking for does not exist.";
    pub const HOME_LINK: &str = "Go home";
}
