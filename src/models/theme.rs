use serde::{Deserialize, Serialize};

/// A complete semantic palette derived from one seed color.
///
/// Computed once per seed change and never mutated afterwards. Every field
/// except the status and trading groups is a pure function of the seed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedTheme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub primary_light: String,
    pub primary_dark: String,
    pub secondary: String,
    pub secondary_light: String,
    pub secondary_dark: String,
    pub accent: String,
    pub background: BackgroundColors,
    pub text: TextColors,
    pub border: BorderColors,
    pub status: StatusColors,
    pub trading: TradingColors,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackgroundColors {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub inverse: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BorderColors {
    pub primary: String,
    pub secondary: String,
    pub focus: String,
}

/// Fixed indicator colors. Semantic meaning (success = green, error = red)
/// must never shift with the brand color, so these are constants rather
/// than functions of the seed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusColors {
    pub success: String,
    pub success_light: String,
    pub success_bg: String,
    pub warning: String,
    pub warning_light: String,
    pub warning_bg: String,
    pub error: String,
    pub error_light: String,
    pub error_bg: String,
    pub info: String,
    pub info_light: String,
    pub info_bg: String,
}

impl Default for StatusColors {
    fn default() -> Self {
        Self {
            success: "#48BB78".to_string(),
            success_light: "#9AE6B4".to_string(),
            success_bg: "#F0FFF4".to_string(),
            warning: "#ED8936".to_string(),
            warning_light: "#FBD38D".to_string(),
            warning_bg: "#FFFDF7".to_string(),
            error: "#F56565".to_string(),
            error_light: "#FEB2B2".to_string(),
            error_bg: "#FFF5F5".to_string(),
            info: "#4299E1".to_string(),
            info_light: "#90CDF4".to_string(),
            info_bg: "#ffffff".to_string(),
        }
    }
}

/// Fixed market-movement colors, following the universal green-up /
/// red-down convention. Seed-independent for the same reason as
/// [`StatusColors`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradingColors {
    pub positive: String,
    pub positive_light: String,
    pub positive_bg: String,
    pub negative: String,
    pub negative_light: String,
    pub negative_bg: String,
    pub neutral: String,
    pub neutral_light: String,
    pub neutral_bg: String,
}

impl Default for TradingColors {
    fn default() -> Self {
        Self {
            positive: "#48BB78".to_string(),
            positive_light: "#9AE6B4".to_string(),
            positive_bg: "#F0FFF4".to_string(),
            negative: "#F56565".to_string(),
            negative_light: "#FEB2B2".to_string(),
            negative_bg: "#FFF5F5".to_string(),
            neutral: "#718096".to_string(),
            neutral_light: "#919faf".to_string(),
            neutral_bg: "#d0d9e0ed".to_string(),
        }
    }
}

/// Nine-step brand scale (50 lightest .. 900 darkest) built around the
/// theme's primary color at step 500.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandScale {
    #[serde(rename = "50")]
    pub step_50: String,
    #[serde(rename = "100")]
    pub step_100: String,
    #[serde(rename = "200")]
    pub step_200: String,
    #[serde(rename = "300")]
    pub step_300: String,
    #[serde(rename = "400")]
    pub step_400: String,
    #[serde(rename = "500")]
    pub step_500: String,
    #[serde(rename = "600")]
    pub step_600: String,
    #[serde(rename = "700")]
    pub step_700: String,
    #[serde(rename = "800")]
    pub step_800: String,
    #[serde(rename = "900")]
    pub step_900: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_constants() {
        let status = StatusColors::default();
        assert_eq!(status.success, "#48BB78");
        assert_eq!(status.error, "#F56565");
        assert_eq!(status.warning, "#ED8936");
        assert_eq!(status.info, "#4299E1");
    }

    #[test]
    fn test_trading_constants_match_market_convention() {
        let trading = TradingColors::default();
        let status = StatusColors::default();
        assert_eq!(trading.positive, status.success);
        assert_eq!(trading.negative, status.error);
    }

    #[test]
    fn test_brand_scale_serializes_numeric_keys() {
        let scale = BrandScale {
            step_50: "#ffffff".to_string(),
            step_100: "#eeeeee".to_string(),
            step_200: "#dddddd".to_string(),
            step_300: "#cccccc".to_string(),
            step_400: "#bbbbbb".to_string(),
            step_500: "#aaaaaa".to_string(),
            step_600: "#999999".to_string(),
            step_700: "#888888".to_string(),
            step_800: "#777777".to_string(),
            step_900: "#666666".to_string(),
        };
        let json = serde_json::to_value(&scale).unwrap();
        assert_eq!(json["500"], "#aaaaaa");
        assert_eq!(json["50"], "#ffffff");
    }
}
