use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Tailwind background for the toast.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "bg-blue-500",
            Self::Success => "bg-green-500",
            Self::Warning => "bg-yellow-500",
            Self::Error => "bg-red-500",
        }
    }
}

/// A dismissible toast. `id` increases per raised notification so the UI
/// can tell a repeated message from the one already on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(id: u64, kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_toast_is_red() {
        let toast = Notification::new(1, NotificationKind::Error, "boom");
        assert!(toast.is_error());
        assert_eq!(toast.kind.css_class(), "bg-red-500");
    }
}
