/// Banner severity, mapped onto the page's `alert-*` stylesheet hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Info,
}

impl Level {
    pub fn css_class(self) -> &'static str {
        match self {
            Level::Success => "alert alert-success mb-4",
            Level::Error => "alert alert-error mb-4",
            Level::Info => "alert alert-info mb-4",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_their_alert_classes() {
        assert_eq!(Level::Success.css_class(), "alert alert-success mb-4");
        assert_eq!(Level::Error.css_class(), "alert alert-error mb-4");
        assert_eq!(Level::Info.css_class(), "alert alert-info mb-4");
    }
}
