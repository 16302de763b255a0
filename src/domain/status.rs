use serde::Serialize;

/// Visual category of a lot status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Success,
    Destructive,
    Warning,
    Secondary,
}

impl BadgeVariant {
    /// Classify a free-form status label. Total over all inputs.
    pub fn for_status(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "active" => Self::Success,
            "closed" => Self::Destructive,
            "pending" => Self::Warning,
            _ => Self::Secondary,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Destructive => "destructive",
            Self::Warning => "warning",
            Self::Secondary => "secondary",
        }
    }
}
