use std::collections::BTreeMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::models::{
    BackgroundColors, BorderColors, BrandScale, GeneratedTheme, StatusColors, TextColors,
    ThemeColors, TradingColors,
};
use crate::services::color::{darken, hex_or_black, lighten, luminance, rotate_hue, Rgb};

/// Generates the full semantic palette for a seed color.
///
/// Never fails: a seed that does not parse as `#RRGGBB` degrades to a
/// black-based theme. Callers that need strict validation should go
/// through [`crate::services::color::parse_hex_strict`] first.
pub fn generate_theme(seed_hex: &str, name: &str) -> GeneratedTheme {
    let primary = hex_or_black(seed_hex).to_hex();

    let primary_light = lighten(&primary, 0.2);
    let primary_dark = darken(&primary, 0.2);

    // complementary secondary, analogous accent
    let secondary = rotate_hue(&primary, 180.0);
    let secondary_light = lighten(&secondary, 0.2);
    let secondary_dark = darken(&secondary, 0.2);
    let accent = lighten(&rotate_hue(&primary, 30.0), 0.3);

    let primary_luminance = luminance(&primary);
    let is_dark = primary_luminance < 0.5;

    debug!(
        seed = seed_hex,
        name,
        luminance = primary_luminance,
        "generating theme"
    );

    let background = BackgroundColors {
        primary: "#ffffff".to_string(),
        secondary: "#eef3f7".to_string(),
        tertiary: "#eff3f9".to_string(),
    };

    let text = TextColors {
        primary: "#1A202C".to_string(),
        secondary: "#4A5568".to_string(),
        tertiary: "#718096".to_string(),
        inverse: if is_dark {
            "#FFFFFF".to_string()
        } else {
            primary.clone()
        },
    };

    // Percentage lightening underperforms on near-black seeds, so the
    // darkest tier blends toward white with a fixed additive offset.
    let (border_primary, border_secondary) = if primary_luminance < 0.15 {
        let rgb = hex_or_black(&primary);
        (additive_blend(rgb, 180), additive_blend(rgb, 140))
    } else if primary_luminance < 0.3 {
        (lighten(&primary, 0.55), lighten(&primary, 0.45))
    } else {
        (lighten(&primary, 0.85), lighten(&primary, 0.75))
    };

    let border = BorderColors {
        primary: border_primary,
        secondary: border_secondary,
        focus: primary.clone(),
    };

    GeneratedTheme {
        name: name.to_string(),
        colors: ThemeColors {
            primary,
            primary_light,
            primary_dark,
            secondary,
            secondary_light,
            secondary_dark,
            accent,
            background,
            text,
            border,
            status: StatusColors::default(),
            trading: TradingColors::default(),
        },
    }
}

fn additive_blend(rgb: Rgb, offset: u8) -> String {
    Rgb::new(
        rgb.r.saturating_add(offset),
        rgb.g.saturating_add(offset),
        rgb.b.saturating_add(offset),
    )
    .to_hex()
}

/// Expands a theme's primary color into the 9-step brand scale.
///
/// Very dark seeds get more aggressive lightening on the upper steps so
/// the scale stays visually distinct.
pub fn brand_palette(theme: &GeneratedTheme) -> BrandScale {
    let primary = &theme.colors.primary;
    let is_very_dark = luminance(primary) < 0.2;

    BrandScale {
        step_50: lighten(primary, if is_very_dark { 0.75 } else { 0.9 }),
        step_100: lighten(primary, if is_very_dark { 0.6 } else { 0.7 }),
        step_200: lighten(primary, if is_very_dark { 0.45 } else { 0.5 }),
        step_300: lighten(primary, 0.3),
        step_400: lighten(primary, if is_very_dark { 0.15 } else { 0.1 }),
        step_500: primary.clone(),
        step_600: darken(primary, 0.1),
        step_700: darken(primary, 0.3),
        step_800: darken(primary, 0.5),
        step_900: darken(primary, 0.7),
    }
}

static PREDEFINED_THEMES: LazyLock<BTreeMap<&'static str, GeneratedTheme>> =
    LazyLock::new(|| {
        // Seeds are kept exactly as the product ships them; the three
        // RGBA-style seeds fail the 6-digit parse and yield black-based
        // themes, matching shipped behavior.
        BTreeMap::from([
            ("coffee", generate_theme("#753a0f", "coffee")),
            ("burgundy", generate_theme("#800020", "burgundy")),
            ("ocean", generate_theme("#005e94c1", "ocean")),
            ("forest", generate_theme("#357035a1", "forest")),
            ("sunset", generate_theme("#cc4514", "sunset")),
            ("midnight", generate_theme("#191970", "midnight")),
            ("gold", generate_theme("#ffd9007b", "gold")),
            ("purple", generate_theme("#4d3e70", "purple")),
        ])
    });

/// The product's built-in theme table, computed once on first use.
pub fn predefined_themes() -> &'static BTreeMap<&'static str, GeneratedTheme> {
    &PREDEFINED_THEMES
}
