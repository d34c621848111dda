// Static lookup tables: decoration kinds, globe backgrounds, theme colours
// and landing page feature cards. Entity records only ever hold the enum ids;
// everything renderable lives here.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecorationKind {
    Tree,
    House,
    Snowman,
    Deer,
    Gift,
    Star,
    Castle,
    Rabbit,
    Mushroom,
    Flower,
}

impl DecorationKind {
    pub const ALL: [DecorationKind; 10] = [
        DecorationKind::Tree,
        DecorationKind::House,
        DecorationKind::Snowman,
        DecorationKind::Deer,
        DecorationKind::Gift,
        DecorationKind::Star,
        DecorationKind::Castle,
        DecorationKind::Rabbit,
        DecorationKind::Mushroom,
        DecorationKind::Flower,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DecorationKind::Tree => "tree",
            DecorationKind::House => "house",
            DecorationKind::Snowman => "snowman",
            DecorationKind::Deer => "deer",
            DecorationKind::Gift => "gift",
            DecorationKind::Star => "star",
            DecorationKind::Castle => "castle",
            DecorationKind::Rabbit => "rabbit",
            DecorationKind::Mushroom => "mushroom",
            DecorationKind::Flower => "flower",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecorationDescriptor {
    pub label: &'static str,
    pub glyph: &'static str,
}

pub fn decoration(kind: DecorationKind) -> DecorationDescriptor {
    let (label, glyph) = match kind {
        DecorationKind::Tree => ("Pine Tree", "🌲"),
        DecorationKind::House => ("House", "🏠"),
        DecorationKind::Snowman => ("Snowman", "⛄"),
        DecorationKind::Deer => ("Bird", "🐦"),
        DecorationKind::Gift => ("Gift", "🎁"),
        DecorationKind::Star => ("Star", "⭐"),
        DecorationKind::Castle => ("Castle", "🏰"),
        DecorationKind::Rabbit => ("Rabbit", "🐇"),
        DecorationKind::Mushroom => ("Cherry", "🍒"),
        DecorationKind::Flower => ("Flower", "🌸"),
    };
    DecorationDescriptor { label, glyph }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackgroundId {
    #[default]
    Winter,
    City,
    Fantasy,
    Sunset,
}

impl BackgroundId {
    pub const ALL: [BackgroundId; 4] =
        [BackgroundId::Winter, BackgroundId::City, BackgroundId::Fantasy, BackgroundId::Sunset];

    pub fn key(self) -> &'static str {
        match self {
            BackgroundId::Winter => "winter",
            BackgroundId::City => "city",
            BackgroundId::Fantasy => "fantasy",
            BackgroundId::Sunset => "sunset",
        }
    }

    /// Resolves a stored key, falling back to the first background for
    /// anything unknown.
    pub fn resolve(key: &str) -> Self {
        Self::ALL.into_iter().find(|b| b.key() == key).unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackgroundDescriptor {
    pub name: &'static str,
    pub light_style: &'static str,
    pub dark_style: &'static str,
}

impl BackgroundDescriptor {
    pub fn style(&self, theme: Theme) -> &'static str {
        match theme {
            Theme::Light => self.light_style,
            Theme::Dark => self.dark_style,
        }
    }
}

pub fn background(id: BackgroundId) -> BackgroundDescriptor {
    match id {
        BackgroundId::Winter => BackgroundDescriptor {
            name: "Winter Forest",
            light_style: "background:linear-gradient(135deg, #f0f9ff 0%, #e0f2fe 50%, #bae6fd 100%);",
            dark_style: "background:linear-gradient(135deg, #1e3a8a 0%, #1e40af 50%, #2563eb 100%);",
        },
        BackgroundId::City => BackgroundDescriptor {
            name: "City Lights",
            light_style: "background:linear-gradient(135deg, #fdf4ff 0%, #f3e8ff 50%, #e9d5ff 100%);",
            dark_style: "background:linear-gradient(135deg, #581c87 0%, #7c3aed 50%, #8b5cf6 100%);",
        },
        BackgroundId::Fantasy => BackgroundDescriptor {
            name: "Enchanted",
            light_style: "background:linear-gradient(135deg, #f0fdf4 0%, #dcfce7 50%, #bbf7d0 100%);",
            dark_style: "background:linear-gradient(135deg, #14532d 0%, #166534 50%, #15803d 100%);",
        },
        BackgroundId::Sunset => BackgroundDescriptor {
            name: "Golden Hour",
            light_style: "background:linear-gradient(135deg, #fffbeb 0%, #fef3c7 50%, #fed7aa 100%);",
            dark_style: "background:linear-gradient(135deg, #ea580c 0%, #f97316 50%, #fb923c 100%);",
        },
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Colours shared by every panel for a given theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeColors {
    pub page: &'static str,
    pub panel: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub snow: &'static str,
}

pub fn colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Light => ThemeColors {
            page: "linear-gradient(135deg, #fffbeb 0%, #fff7ed 50%, #fefce8 100%)",
            panel: "rgba(255,251,235,0.6)",
            border: "#000000",
            text: "#78350f",
            muted: "#b45309",
            accent: "#b45309",
            accent_text: "#fffbeb",
            snow: "#94a3b8",
        },
        Theme::Dark => ThemeColors {
            page: "linear-gradient(135deg, #0f172a 0%, #111827 50%, #1e293b 100%)",
            panel: "rgba(15,23,42,0.55)",
            border: "rgba(51,65,85,0.6)",
            text: "#e2e8f0",
            muted: "#94a3b8",
            accent: "#334155",
            accent_text: "#f1f5f9",
            snow: "#cbd5e1",
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        glyph: "🎨",
        title: "Stunning Backgrounds",
        description: "Choose from magical themed environments including winter forests, city lights, enchanted realms, and golden sunsets.",
    },
    FeatureCard {
        glyph: "✨",
        title: "Interactive Objects",
        description: "Drag and drop from our collection of animated objects to create your perfect winter wonderland scene.",
    },
    FeatureCard {
        glyph: "☁",
        title: "Realistic Snow Physics",
        description: "Experience mesmerizing snowfall effects with realistic physics and beautiful particle animations.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoration_keys_are_unique() {
        let mut keys: Vec<_> = DecorationKind::ALL.iter().map(|k| k.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), DecorationKind::ALL.len());
    }

    #[test]
    fn unknown_background_falls_back_to_first() {
        assert_eq!(BackgroundId::resolve("sunset"), BackgroundId::Sunset);
        assert_eq!(BackgroundId::resolve("nebula"), BackgroundId::ALL[0]);
        assert_eq!(BackgroundId::resolve(""), BackgroundId::Winter);
    }

    #[test]
    fn every_background_has_both_styles() {
        for id in BackgroundId::ALL {
            let d = background(id);
            assert!(d.style(Theme::Light).starts_with("background:"));
            assert!(d.style(Theme::Dark).starts_with("background:"));
            assert_ne!(d.light_style, d.dark_style);
        }
    }

    #[test]
    fn theme_toggles_back_and_forth() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
