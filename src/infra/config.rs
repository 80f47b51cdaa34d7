//! YAML configuration for user-visible strings, embedded at compile time.
use serde::Deserialize;
use std::sync::LazyLock;

// ============================================================================
// UI Configuration
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct UiConfig {
    pub landing: LandingStrings,
    pub form: FormStrings,
    pub result: ResultStrings,
    pub notices: NoticeStrings,
    pub status: StatusStrings,
}

#[derive(Debug, Deserialize)]
pub struct LandingStrings {
    pub logo: String,
    pub title: String,
    pub subtitle: String,
    pub start_button: String,
    pub start_hint: String,
}

#[derive(Debug, Deserialize)]
pub struct FormStrings {
    pub back: String,
    pub heading: String,
    pub subheading: String,
    pub name_label: String,
    pub name_placeholder: String,
    pub symptoms_label: String,
    pub symptoms_placeholder: String,
    pub diagnose_button: String,
    pub diagnosing_button: String,
}

#[derive(Debug, Deserialize)]
pub struct ResultStrings {
    pub title: String,
    pub diagnosis_label: String,
    pub suggestion_label: String,
}

#[derive(Debug, Deserialize)]
pub struct NoticeStrings {
    pub title: String,
    pub validation: String,
    pub connectivity: String,
    pub dismiss_hint: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusStrings {
    pub ready: String,
    pub requesting: String,
    pub landing_hints: String,
    pub form_hints: String,
}

// ============================================================================
// Loading
// ============================================================================

fn parse_yaml<T: for<'de> Deserialize<'de>>(name: &str, content: &str) -> T {
    serde_yaml::from_str(content).unwrap_or_else(|e| panic!("Failed to parse {}: {}", name, e))
}

pub static UI: LazyLock<UiConfig> = LazyLock::new(|| parse_yaml("ui.yaml", include_str!("../../yamls/ui.yaml")));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_ui_yaml_parses() {
        assert_eq!(UI.landing.title, "HealthBridge AI");
        assert!(!UI.notices.validation.is_empty());
        assert!(!UI.notices.connectivity.is_empty());
    }

    #[test]
    fn notices_are_distinct() {
        assert_ne!(UI.notices.validation, UI.notices.connectivity);
    }
}
