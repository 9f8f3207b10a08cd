use serde::Serialize;

use crate::label_wrap::DEFAULT_WRAP_WIDTH;

pub const DEFAULT_CLICK_HOOK: &str = "onNodeClick";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeVariables {
    pub font_size: String,
    pub font_family: String,
    pub primary_color: String,
    pub primary_text_color: String,
    pub primary_border_color: String,
    pub line_color: String,
    pub secondary_color: String,
    pub tertiary_color: String,
}

impl Default for ThemeVariables {
    fn default() -> Self {
        Self {
            font_size: "14px".into(),
            font_family: "Inter, system-ui, sans-serif".into(),
            primary_color: "#3b82f6".into(),
            primary_text_color: "#ffffff".into(),
            primary_border_color: "#1d4ed8".into(),
            line_color: "#64748b".into(),
            secondary_color: "#8b5cf6".into(),
            tertiary_color: "#f1f5f9".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub wrap_width: usize,
    /// Callback name bound to every node by the `click` statements.
    pub click_hook: String,
    pub theme_variables: ThemeVariables,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            click_hook: DEFAULT_CLICK_HOOK.into(),
            theme_variables: ThemeVariables::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub fill: &'static str,
    pub stroke: &'static str,
}

const SWATCHES: [(&str, Swatch); 7] = [
    ("primary", Swatch { fill: "#3b82f6", stroke: "#1d4ed8" }),
    ("accent", Swatch { fill: "#8b5cf6", stroke: "#6d28d9" }),
    ("secondary", Swatch { fill: "#64748b", stroke: "#334155" }),
    ("success", Swatch { fill: "#22c55e", stroke: "#15803d" }),
    ("warning", Swatch { fill: "#f59e0b", stroke: "#b45309" }),
    ("error", Swatch { fill: "#ef4444", stroke: "#b91c1c" }),
    ("info", Swatch { fill: "#06b6d4", stroke: "#0e7490" }),
];

pub const NEUTRAL_SWATCH: Swatch = Swatch {
    fill: "#9ca3af",
    stroke: "#4b5563",
};

/// Resolve a legend swatch key, falling back to neutral gray.
pub fn swatch(key: &str) -> Swatch {
    SWATCHES
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(NEUTRAL_SWATCH, |(_, swatch)| *swatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        assert_eq!(swatch("success").fill, "#22c55e");
        assert_eq!(swatch("error").stroke, "#b91c1c");
    }

    #[test]
    fn unknown_key_is_neutral() {
        assert_eq!(swatch("chartreuse"), NEUTRAL_SWATCH);
        assert_eq!(swatch("Primary"), NEUTRAL_SWATCH);
    }

    #[test]
    fn theme_variables_use_mermaid_key_names() {
        let json = serde_json::to_string(&ThemeVariables::default()).unwrap();
        assert!(json.contains(r#""fontSize":"14px""#), "got: {json}");
        assert!(json.contains(r#""primaryBorderColor":"#), "got: {json}");
    }
}
