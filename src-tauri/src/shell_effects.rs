use serde::Serialize;

use crate::SITE_LOGO;

const EFFECTS_TEMPLATE: &str = include_str!("../scripts/shell_effects.js");
const CONFIG_PLACEHOLDER: &str = "__QUARTERMASTER_EFFECT_CONFIG__";

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EffectSettings {
    pub typing_speed_ms: u64,
    pub typing_start_delay_ms: u64,
    pub default_typing_text: String,
    pub reveal_threshold: f64,
    pub reveal_selector: String,
    pub parallax_factor: f64,
    pub back_to_top_threshold_px: u32,
    pub cursor_dot_easing: f64,
    pub cursor_follower_easing: f64,
    pub cursor_hover_selector: String,
    pub zoom_fade_ms: u64,
    pub theme_dropdown_hide_delay_ms: u64,
    pub fallback_image: String,
    pub notify_command: String,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            typing_speed_ms: 50,
            typing_start_delay_ms: 500,
            default_typing_text: "Welcome to the Unknown's Quartermaster".to_string(),
            reveal_threshold: 0.1,
            reveal_selector:
                ".glass-card, section, .page-header, .showcase-card, .stat-box, .medal-card"
                    .to_string(),
            parallax_factor: 0.5,
            back_to_top_threshold_px: 500,
            cursor_dot_easing: 0.25,
            cursor_follower_easing: 0.1,
            cursor_hover_selector:
                "a, button, .glass-card, input, select, textarea, .reg-card, .showcase-card"
                    .to_string(),
            zoom_fade_ms: 400,
            theme_dropdown_hide_delay_ms: 300,
            fallback_image: SITE_LOGO.to_string(),
            notify_command: crate::shell_commands::NOTIFY_COMMAND.to_string(),
        }
    }
}

pub fn render_effects_script(settings: &EffectSettings) -> Result<String, String> {
    let config = serde_json::to_string(settings)
        .map_err(|error| format!("Failed to serialize effect settings: {error}"))?;
    Ok(EFFECTS_TEMPLATE.replace(CONFIG_PLACEHOLDER, &config))
}
