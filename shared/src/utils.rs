use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

const TAG_KEYWORDS: &[&str] = &[
    "community",
    "change",
    "impact",
    "development",
    "empowerment",
    "justice",
    "education",
    "health",
];

/// Parse the timestamp shapes the backend and sample data use.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    for format in ["%Y-%m-%d", "%B %d, %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// "2025-01-15T00:00:00Z" -> "January 15, 2025". Unparseable input is
/// returned unchanged.
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Cut to `max_chars` characters and append "...".
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim())
}

pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ' || *c == '-')
        .collect();
    let mut slug = String::with_capacity(kept.len());
    for c in kept.chars() {
        let c = if c == ' ' { '-' } else { c };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    slug.trim_matches('-').to_string()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Drop markup and decode the handful of entities rich-text editors emit.
pub fn strip_html(html: &str) -> String {
    TAG_RE
        .replace_all(html, "")
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Absolute URLs pass through; for local paths only the file name is
/// percent-encoded so directory separators survive.
pub fn image_url(path: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        return String::new();
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    match path.rsplit_once('/') {
        Some((dir, file)) => format!("{dir}/{}", urlencoding::encode(file)),
        None => urlencoding::encode(path).into_owned(),
    }
}

/// Split a comma-separated tag list, trimming and dropping empties.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Plain-text excerpt of a rich-text description.
pub fn generate_excerpt(description: &str) -> String {
    truncate_text(strip_html(description).trim(), 150)
}

/// Category plus any keyword the description mentions, at most four.
pub fn generate_tags(category: &str, description: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let category = category.trim().to_lowercase();
    if !category.is_empty() {
        tags.push(category);
    }
    let lowered = description.to_lowercase();
    for keyword in TAG_KEYWORDS {
        if lowered.contains(*keyword) && !tags.iter().any(|tag| tag.as_str() == *keyword) {
            tags.push((*keyword).to_string());
        }
    }
    tags.truncate(4);
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_handles_iso_and_plain_dates() {
        assert_eq!(format_date("2025-01-15T00:00:00Z"), "January 15, 2025");
        assert_eq!(format_date("2025-03-05"), "March 5, 2025");
        assert_eq!(format_date("March 15, 2025"), "March 15, 2025");
        assert_eq!(format_date("someday"), "someday");
    }

    #[test]
    fn truncate_text_counts_characters() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("hello world again", 6), "hello...");
        assert_eq!(truncate_text("पटना बिहार", 4), "पटना...");
    }

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(
            generate_slug("Youth for Bihar: The New Generation!"),
            "youth-for-bihar-the-new-generation"
        );
        assert_eq!(generate_slug("  Ward -- Level  "), "ward-level");
    }

    #[test]
    fn email_validation_matches_simple_shape() {
        assert!(is_valid_email("volunteer@patna.org"));
        assert!(!is_valid_email("volunteer@patna"));
        assert!(!is_valid_email("two words@patna.org"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn image_url_encodes_only_the_file_name() {
        assert_eq!(image_url("assets/images/neta g.jpg"), "assets/images/neta%20g.jpg");
        assert_eq!(
            image_url("https://images.example.com/a b.jpg"),
            "https://images.example.com/a b.jpg"
        );
        assert_eq!(image_url(""), "");
    }

    #[test]
    fn excerpt_strips_markup() {
        let excerpt = generate_excerpt("<p>Clean &amp; green <b>streets</b></p>");
        assert_eq!(excerpt, "Clean & green streets");
    }

    #[test]
    fn generated_tags_start_with_category_and_cap_at_four() {
        let tags = generate_tags(
            "Education",
            "Community health and education drives brought change and real impact",
        );
        assert_eq!(tags, vec!["education", "community", "change", "impact"]);
    }

    #[test]
    fn parse_tags_trims_and_filters_empty() {
        assert_eq!(parse_tags(" reform, youth, ,traffic ,,"), vec!["reform", "youth", "traffic"]);
    }
}
