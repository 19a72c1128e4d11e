/// Theme generation end-to-end tests: palette derivation, luminance-tier
/// border selection, fixed indicator colors, and the predefined table.
use globalcoffee_core::services::color::{lighten, luminance, parse_hex, rotate_hue};
use globalcoffee_core::{brand_palette, generate_theme, predefined_themes, AppError, ThemeManager};

// ---------------------------------------------------------------------------
// Palette derivation
// ---------------------------------------------------------------------------

#[test]
fn test_same_seed_gives_identical_themes() {
    assert_eq!(
        generate_theme("#8b4513", "custom"),
        generate_theme("#8b4513", "custom")
    );
}

#[test]
fn test_saddle_brown_seed_end_to_end() {
    let theme = generate_theme("#8B4513", "custom");

    // luminance ≈ 0.330, so borders come from the standard lighten tier
    assert!(luminance("#8B4513") > 0.3);
    assert_eq!(theme.colors.border.primary, lighten("#8b4513", 0.85));
    assert_eq!(theme.colors.border.secondary, lighten("#8b4513", 0.75));

    // still a dark color overall, so inverse text is white
    assert_eq!(theme.colors.text.inverse, "#FFFFFF");

    // indicator colors never follow the seed
    assert_eq!(theme.colors.status.success, "#48BB78");
    assert_eq!(theme.colors.trading.negative, "#F56565");
}

#[test]
fn test_status_and_trading_are_seed_invariant() {
    let seeds = ["#753a0f", "#800020", "#191970", "#cccccc", "#000000"];
    let reference = generate_theme(seeds[0], "t");
    for seed in &seeds[1..] {
        let theme = generate_theme(seed, "t");
        assert_eq!(theme.colors.status, reference.colors.status, "seed {seed}");
        assert_eq!(theme.colors.trading, reference.colors.trading, "seed {seed}");
    }
}

#[test]
fn test_border_tiers_across_luminance_buckets() {
    // black: additive blend branch
    let noir = generate_theme("#000000", "t");
    assert_eq!(noir.colors.border.primary, "#b4b4b4");
    assert_eq!(noir.colors.border.secondary, "#8c8c8c");

    // coffee seed sits in the 0.15..0.30 tier
    let coffee = generate_theme("#753a0f", "t");
    assert_eq!(coffee.colors.border.primary, lighten("#753a0f", 0.55));

    // light grey uses the standard tier
    let grey = generate_theme("#cccccc", "t");
    assert_eq!(grey.colors.border.primary, lighten("#cccccc", 0.85));
}

#[test]
fn test_hue_rotation_round_trip() {
    for seed in ["#8b4513", "#753a0f", "#cc4514", "#4d3e70"] {
        let back = rotate_hue(&rotate_hue(seed, 180.0), 180.0);
        let a = parse_hex(seed).unwrap();
        let b = parse_hex(&back).unwrap();
        assert!((a.r as i32 - b.r as i32).abs() <= 1);
        assert!((a.g as i32 - b.g as i32).abs() <= 1);
        assert!((a.b as i32 - b.b as i32).abs() <= 1);
    }
}

#[test]
fn test_focus_border_is_the_seed_itself() {
    let theme = generate_theme("#753a0f", "t");
    assert_eq!(theme.colors.border.focus, "#753a0f");
}

// ---------------------------------------------------------------------------
// Predefined table and brand scale
// ---------------------------------------------------------------------------

#[test]
fn test_predefined_rgba_seeds_degrade_to_black() {
    let themes = predefined_themes();
    let black = generate_theme("#000000", "ocean");
    // the shipped ocean seed is an 8-digit RGBA string and fails the parse
    assert_eq!(themes["ocean"].colors, black.colors);
    assert_eq!(themes["ocean"].name, "ocean");
}

#[test]
fn test_brand_scale_shape() {
    let theme = generate_theme("#753a0f", "coffee");
    let scale = brand_palette(&theme);

    assert_eq!(scale.step_500, "#753a0f");
    // monotone: step 50 is lighter than 900 on every channel
    let light = parse_hex(&scale.step_50).unwrap();
    let dark = parse_hex(&scale.step_900).unwrap();
    assert!(light.r > dark.r && light.g > dark.g && light.b >= dark.b);
}

// ---------------------------------------------------------------------------
// Theme manager
// ---------------------------------------------------------------------------

#[test]
fn test_manager_switches_and_validates() {
    let mut manager = ThemeManager::new();
    assert_eq!(manager.current_name(), "coffee");

    manager.set_theme("sunset").unwrap();
    assert_eq!(manager.current().colors.primary, "#cc4514");

    assert!(matches!(
        manager.set_theme("latte"),
        Err(AppError::UnknownTheme(_))
    ));
    assert!(matches!(
        manager.set_custom_theme("sienna", None),
        Err(AppError::InvalidColor(_))
    ));
    // failed switches leave the active theme alone
    assert_eq!(manager.current_name(), "sunset");
}

#[test]
fn test_manager_serializes_theme_in_product_shape() {
    let manager = ThemeManager::new();
    let json = serde_json::to_value(manager.current()).unwrap();

    assert_eq!(json["name"], "coffee");
    assert_eq!(json["colors"]["primary"], "#753a0f");
    assert_eq!(json["colors"]["primaryLight"], lighten("#753a0f", 0.2));
    assert_eq!(json["colors"]["status"]["successLight"], "#9AE6B4");
    assert_eq!(json["colors"]["trading"]["neutralBg"], "#d0d9e0ed");
}
