/// Frontend configuration, fixed at mount. There is no environment to read
/// in the browser; embedders construct a custom value instead.
#[derive(Clone, Debug)]
pub struct Config {
    /// Path prefix for every API request, joined to the page origin.
    pub api_base: String,
    /// Route the default unauthorized policy navigates to.
    pub login_path: String,
    /// How long a notification banner stays up, in milliseconds.
    pub banner_dismiss_ms: i32,
    /// Prompt for the blocking delete confirmation.
    pub confirm_delete: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            login_path: "/login".to_string(),
            banner_dismiss_ms: 3000,
            confirm_delete: "Are you sure you want to delete this activity?".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_service_conventions() {
        let config = Config::default();
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.banner_dismiss_ms, 3000);
    }
}
