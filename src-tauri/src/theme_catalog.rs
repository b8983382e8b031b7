use serde::Serialize;

use crate::{preferences::PreferenceStore, DEFAULT_THEME_KEY, PREF_SITE_THEME};

#[derive(Debug)]
pub struct Theme {
    pub key: &'static str,
    pub name: &'static str,
    pub preview: &'static str,
    pub variables: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSummary {
    pub key: &'static str,
    pub name: &'static str,
    pub preview: &'static str,
}

pub const THEMES: &[Theme] = &[
    Theme {
        key: "royal",
        name: "Royal Blue",
        preview: "#001a4d",
        variables: &[
            ("--primary-royal-blue", "#001a4d"),
            ("--royal-blue-deep", "#000d26"),
            ("--primary-scarlet", "#8b0000"),
            ("--accent-gold", "#c9a227"),
            (
                "--body-bg",
                "radial-gradient(ellipse 120% 80% at 50% -10%, #001a4d 0%, #000d26 40%, #020408 100%)",
            ),
        ],
    },
    Theme {
        key: "scarlet",
        name: "Imperial Scarlet",
        preview: "#8b0000",
        variables: &[
            ("--primary-royal-blue", "#4d0000"),
            ("--royal-blue-deep", "#260000"),
            ("--primary-scarlet", "#ff1a1a"),
            ("--accent-gold", "#ffcc00"),
            (
                "--body-bg",
                "radial-gradient(ellipse 120% 80% at 50% -10%, #4d0000 0%, #260000 40%, #080202 100%)",
            ),
        ],
    },
    Theme {
        key: "emerald",
        name: "Emerald Guard",
        preview: "#004d1a",
        variables: &[
            ("--primary-royal-blue", "#003311"),
            ("--royal-blue-deep", "#001a09"),
            ("--primary-scarlet", "#006622"),
            ("--accent-gold", "#99ffbb"),
            (
                "--body-bg",
                "radial-gradient(ellipse 120% 80% at 50% -10%, #003311 0%, #001a09 40%, #020804 100%)",
            ),
        ],
    },
    Theme {
        key: "midnight",
        name: "Midnight Onyx",
        preview: "#111111",
        variables: &[
            ("--primary-royal-blue", "#111111"),
            ("--royal-blue-deep", "#000000"),
            ("--primary-scarlet", "#333333"),
            ("--accent-gold", "#ffffff"),
            (
                "--body-bg",
                "radial-gradient(ellipse 120% 80% at 50% -10%, #1a1a1a 0%, #0a0a0a 40%, #000000 100%)",
            ),
        ],
    },
    Theme {
        key: "navy",
        name: "Navy Guard",
        preview: "#000080",
        variables: &[
            ("--primary-royal-blue", "#000080"),
            ("--royal-blue-deep", "#000033"),
            ("--primary-scarlet", "#ff0000"),
            ("--accent-gold", "#ffd700"),
            (
                "--body-bg",
                "radial-gradient(ellipse 120% 80% at 50% -10%, #000080 0%, #000033 40%, #00001a 100%)",
            ),
        ],
    },
    Theme {
        key: "purple",
        name: "Royal Purple",
        preview: "#4b0082",
        variables: &[
            ("--primary-royal-blue", "#4b0082"),
            ("--royal-blue-deep", "#2e004d"),
            ("--primary-scarlet", "#9400d3"),
            ("--accent-gold", "#daa520"),
            (
                "--body-bg",
                "radial-gradient(ellipse 120% 80% at 50% -10%, #4b0082 0%, #2e004d 40%, #1a0029 100%)",
            ),
        ],
    },
    Theme {
        key: "forest",
        name: "Royal Forest",
        preview: "#013220",
        variables: &[
            ("--primary-royal-blue", "#013220"),
            ("--royal-blue-deep", "#001a09"),
            ("--primary-scarlet", "#8b0000"),
            ("--accent-gold", "#c5b358"),
            (
                "--body-bg",
                "radial-gradient(ellipse 120% 80% at 50% -10%, #013220 0%, #001a09 40%, #000a04 100%)",
            ),
        ],
    },
];

pub fn resolve_theme(key: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.key == key)
}

/// The persisted theme key, or the default when absent or unrecognised.
pub fn saved_theme_key(prefs: &dyn PreferenceStore) -> &'static str {
    prefs
        .get(PREF_SITE_THEME)
        .and_then(|key| resolve_theme(key.trim()))
        .map(|theme| theme.key)
        .unwrap_or(DEFAULT_THEME_KEY)
}

pub fn theme_summaries() -> Vec<ThemeSummary> {
    THEMES
        .iter()
        .map(|theme| ThemeSummary {
            key: theme.key,
            name: theme.name,
            preview: theme.preview,
        })
        .collect()
}
