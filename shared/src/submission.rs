//! Community blog and story submission forms.
//!
//! Validation is local and runs before anything touches the network.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    api::ApiService,
    error::{ContentError, ValidationError},
    messages,
    transport::{FilePart, MultipartForm},
    utils,
};

/// Raw values of the "submit a blog" form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogSubmissionForm {
    pub author_name: String,
    pub author_email: String,
    pub author_bio: String,
    pub blog_title: String,
    pub blog_category: String,
    pub read_time: String,
    pub blog_summary: String,
    pub blog_content: String,
    /// Comma-separated.
    pub tags: String,
}

/// Body of `POST /submissions`. Submissions always start as drafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubmission {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author_name: String,
    pub author_email: String,
    pub author_bio: String,
    pub read_time: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
}

fn missing(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

impl BlogSubmissionForm {
    pub fn validate(&self) -> Result<NewSubmission, ValidationError> {
        let missing = missing(&[
            ("authorName", self.author_name.as_str()),
            ("authorEmail", self.author_email.as_str()),
            ("blogTitle", self.blog_title.as_str()),
            ("blogCategory", self.blog_category.as_str()),
            ("readTime", self.read_time.as_str()),
            ("blogSummary", self.blog_summary.as_str()),
            ("blogContent", self.blog_content.as_str()),
        ]);
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        if !utils::is_valid_email(&self.author_email) {
            return Err(ValidationError::InvalidEmail(self.author_email.trim().to_string()));
        }

        Ok(NewSubmission {
            title: self.blog_title.trim().to_string(),
            content: self.blog_content.clone(),
            excerpt: self.blog_summary.trim().to_string(),
            category: self.blog_category.trim().to_string(),
            tags: utils::parse_tags(&self.tags),
            author_name: self.author_name.trim().to_string(),
            author_email: self.author_email.trim().to_string(),
            author_bio: self.author_bio.trim().to_string(),
            read_time: self.read_time.trim().to_string(),
            status: "draft".to_string(),
            featured_image: None,
        })
    }
}

/// Raw values of the "share your story" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorySubmissionForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub age: String,
    pub location: String,
    pub impact: String,
    pub inspiration: String,
    pub is_anonymous: bool,
}

impl StorySubmissionForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = missing(&[
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("category", self.category.as_str()),
        ]);
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        if !self.email.trim().is_empty() && !utils::is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail(self.email.trim().to_string()));
        }
        Ok(())
    }

    /// Validated multipart body; every file goes under a `media` field.
    /// Anonymous submissions drop the identifying fields.
    pub fn into_multipart(self, media: Vec<FilePart>) -> Result<MultipartForm, ValidationError> {
        self.validate()?;
        let mut form = MultipartForm::new()
            .text("title", self.title.trim())
            .text("description", self.description)
            .text("category", self.category.trim())
            .text("isAnonymous", self.is_anonymous.to_string());
        let mut optional = vec![
            ("location", self.location),
            ("impact", self.impact),
            ("inspiration", self.inspiration),
        ];
        if !self.is_anonymous {
            optional.extend([
                ("name", self.name),
                ("email", self.email),
                ("role", self.role),
                ("age", self.age),
            ]);
        }
        for (name, value) in optional {
            if !value.trim().is_empty() {
                form = form.text(name, value.trim());
            }
        }
        for file in media {
            form = form.file(FilePart {
                field: "media".to_string(),
                ..file
            });
        }
        Ok(form)
    }
}

/// Validate, upload the optional cover image, then post the submission.
///
/// An image that fails to upload is logged and left out; the text still
/// goes through. Returns the confirmation text.
pub async fn submit_blog(
    api: &ApiService,
    form: &BlogSubmissionForm,
    image: Option<FilePart>,
) -> Result<String, ContentError> {
    let mut submission = form.validate()?;
    if let Some(image) = image.filter(|image| !image.bytes.is_empty()) {
        match api.upload_image(image).await {
            Ok(uploaded) => submission.featured_image = Some(uploaded.data),
            Err(err) => warn!(error = %err, "cover image upload failed, submitting without it"),
        }
    }
    let response = api.create_submission(&submission).await?;
    info!(title = %submission.title, "blog submitted for review");
    Ok(response
        .message
        .unwrap_or_else(|| messages::success::BLOG_SUBMITTED.to_string()))
}

/// Toast text for a failed blog submission.
pub fn blog_failure_message(err: &ContentError) -> String {
    match err {
        ContentError::Validation(_) => err.user_message(),
        _ => messages::errors::SUBMISSION_FAILED.to_string(),
    }
}

/// Toast text for a failed story submission. Server explanations and the
/// unreachable-server hint are passed through.
pub fn story_failure_message(err: &ContentError) -> String {
    match err {
        ContentError::Validation(_) | ContentError::Rejected(_) | ContentError::NetworkUnreachable(_) => {
            err.user_message()
        },
        _ => messages::errors::STORY_SUBMISSION_FAILED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BlogSubmissionForm {
        BlogSubmissionForm {
            author_name: "Anita".to_string(),
            author_email: "anita@patna.org".to_string(),
            author_bio: String::new(),
            blog_title: " Clean Ganga Ghats ".to_string(),
            blog_category: "Environment".to_string(),
            read_time: "5 min read".to_string(),
            blog_summary: "Volunteers cleaned three ghats.".to_string(),
            blog_content: "<p>Every Sunday...</p>".to_string(),
            tags: "environment, river ,, volunteers".to_string(),
        }
    }

    #[test]
    fn valid_form_becomes_draft_submission() {
        let submission = filled().validate().unwrap();
        assert_eq!(submission.status, "draft");
        assert_eq!(submission.title, "Clean Ganga Ghats");
        assert_eq!(submission.tags, vec!["environment", "river", "volunteers"]);
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["authorEmail"], "anita@patna.org");
        assert!(json.get("featuredImage").is_none());
    }

    #[test]
    fn missing_fields_are_reported_in_form_order() {
        let form = BlogSubmissionForm {
            blog_title: "  ".to_string(),
            read_time: String::new(),
            ..filled()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingFields(vec!["blogTitle", "readTime"]))
        );
    }

    #[test]
    fn email_is_checked_after_required_fields() {
        let form = BlogSubmissionForm {
            author_email: "anita at patna".to_string(),
            ..filled()
        };
        assert!(matches!(form.validate(), Err(ValidationError::InvalidEmail(_))));
    }

    #[test]
    fn anonymous_story_omits_identity() {
        let form = StorySubmissionForm {
            title: "Hand pumps".to_string(),
            description: "We lobbied for water.".to_string(),
            category: "Community".to_string(),
            name: "Rekha".to_string(),
            email: "rekha@example.org".to_string(),
            is_anonymous: true,
            ..StorySubmissionForm::default()
        };
        let photo = FilePart {
            field: "file".to_string(),
            file_name: "pump.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![1],
        };
        let multipart = form.into_multipart(vec![photo.clone(), photo]).unwrap();
        assert_eq!(multipart.field("isAnonymous"), Some("true"));
        assert_eq!(multipart.field("name"), None);
        assert!(multipart.files.iter().all(|file| file.field == "media"));
        assert_eq!(multipart.files.len(), 2);
    }

    #[test]
    fn story_email_is_optional_but_checked() {
        let mut form = StorySubmissionForm {
            title: "t".to_string(),
            description: "d".to_string(),
            category: "Youth".to_string(),
            ..StorySubmissionForm::default()
        };
        assert!(form.validate().is_ok());
        form.email = "nope".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn failure_messages_stay_friendly() {
        let err = ContentError::Http {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(blog_failure_message(&err), messages::errors::SUBMISSION_FAILED);
        assert_eq!(story_failure_message(&err), messages::errors::STORY_SUBMISSION_FAILED);
        let rejected = ContentError::Rejected("Duplicate story".to_string());
        assert_eq!(story_failure_message(&rejected), "Duplicate story");
    }
}
