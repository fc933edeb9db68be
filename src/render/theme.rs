use crate::models::Tier;

/// Visual palette for one card theme. Fields are named for the part of the
/// card they paint.
pub struct ThemePalette {
    pub bg: &'static str,
    pub bg_dark: &'static str,
    pub card: &'static str,
    pub card_edge: &'static str,
    pub panel: &'static str,
    pub panel_edge: &'static str,
    pub glow: &'static str,
    pub title_text: &'static str,
    pub text: &'static str,
    pub meta_text: &'static str,
    pub accent_text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    DarkHighContrast,
    ClassicGamer,
}

impl Theme {
    /// Resolve a requested identifier. Unknown values fall back to the
    /// default dark theme instead of failing the render.
    pub fn parse(id: &str) -> Self {
        match id {
            "classic_gamer" => Theme::ClassicGamer,
            _ => Theme::DarkHighContrast,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Theme::DarkHighContrast => "dark_high_contrast",
            Theme::ClassicGamer => "classic_gamer",
        }
    }

    pub fn palette(self) -> ThemePalette {
        match self {
            Theme::DarkHighContrast => ThemePalette {
                bg: "#0d1117",
                bg_dark: "#010409",
                card: "#161b22",
                card_edge: "#30363d",
                panel: "#21262d",
                panel_edge: "#484f58",
                glow: "#00d4ff",
                title_text: "#e6edf3",
                text: "#c9d1d9",
                meta_text: "#8b949e",
                accent_text: "#79c0ff",
            },
            Theme::ClassicGamer => ThemePalette {
                bg: "#081018",
                bg_dark: "#04080c",
                card: "#0f1a24",
                card_edge: "#203040",
                panel: "#0b151b",
                panel_edge: "#304050",
                glow: "#00d4ff",
                title_text: "#e6eef8",
                text: "#e6eef8",
                meta_text: "#9fb4c8",
                accent_text: "#ffd166",
            },
        }
    }
}

/// Accent pair used for the medal, the grade chip and the XP gradient end.
pub struct TierStyle {
    pub color: &'static str,
    pub edge: &'static str,
}

impl TierStyle {
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Mythic => TierStyle {
                color: "#FF6347",
                edge: "#CC3311",
            },
            Tier::Legendary => TierStyle {
                color: "#FFD700",
                edge: "#C4A000",
            },
            Tier::Gold => TierStyle {
                color: "#FFC72C",
                edge: "#D4A017",
            },
            Tier::Silver => TierStyle {
                color: "#C0C0C0",
                edge: "#999999",
            },
            Tier::Iron => TierStyle {
                color: "#95A5A6",
                edge: "#6C7A89",
            },
        }
    }
}
