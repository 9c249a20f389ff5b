//! User-facing notification texts raised by the view-models.

/// Failure texts.
pub mod errors {
    pub const NETWORK: &str = "Network error. Please check your connection and try again.";
    pub const SERVER_UNREACHABLE: &str =
        "Unable to connect to server. Please ensure the backend is running.";
    pub const BLOG_NOT_FOUND: &str = "Blog post not found.";
    pub const STORY_NOT_FOUND: &str = "Story not found.";
    pub const SUBMISSION_FAILED: &str = "Failed to submit blog. Please try again.";
    pub const STORY_SUBMISSION_FAILED: &str = "Failed to submit story. Please try again.";
    pub const UPLOAD_FAILED: &str = "Failed to upload image. Please try again.";
    pub const VALIDATION_FAILED: &str = "Please fill in all required fields correctly.";
    pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
}

/// Confirmation texts.
pub mod success {
    pub const BLOG_SUBMITTED: &str =
        "Blog submitted successfully! It will be reviewed before publication.";
    pub const STORY_SUBMITTED: &str =
        "Story submitted successfully and is pending verification!";
    pub const SUBSCRIPTION: &str =
        "Thank you for subscribing! You will receive updates about our movement.";
}
