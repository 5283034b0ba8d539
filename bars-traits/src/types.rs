//! Wire types shared between the service façade and platform controllers.
//!
//! Field names serialize in the camelCase / SCREAMING_SNAKE_CASE shapes the
//! JavaScript callers send (`statusBar`, `"DARK"`, `isAndroid35Plus`, ...), so
//! a request object can round-trip through `serde_json` unchanged.

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// Icon/text contrast of a bar, independent of its background color.
///
/// `Dark` means dark bar content (light icons on Android), `Light` means
/// light bar content, `Default` defers to the platform theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BarStyle {
    Light,
    Dark,
    Default,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self::Default
    }
}

/// A validated `#RRGGBB` or `#AARRGGBB` color literal.
///
/// Construction goes through [`BarColor::parse`]; any other format is a
/// caller contract violation and is rejected at this boundary. Absence of a
/// color means "leave the bar unchanged" (or, on Android 15+, "not
/// applicable" for the navigation bar).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BarColor(String);

impl BarColor {
    /// Validate and wrap a hex color literal.
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        let digits = match value.strip_prefix('#') {
            Some(digits) => digits,
            None => {
                return Err(ColorParseError {
                    value: value.to_string(),
                })
            }
        };

        let valid_len = digits.len() == 6 || digits.len() == 8;
        if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError {
                value: value.to_string(),
            });
        }

        Ok(Self(value.to_string()))
    }

    /// The literal as given by the caller, including the leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decomposed (alpha, red, green, blue) components. Alpha is `0xFF` for
    /// the six-digit form.
    pub fn argb(&self) -> (u8, u8, u8, u8) {
        let digits = &self.0[1..];
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).unwrap_or(0)
        };

        if digits.len() == 8 {
            (byte(0..2), byte(2..4), byte(4..6), byte(6..8))
        } else {
            (0xFF, byte(0..2), byte(2..4), byte(4..6))
        }
    }
}

impl TryFrom<String> for BarColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BarColor> for String {
    fn from(color: BarColor) -> Self {
        color.0
    }
}

impl std::fmt::Display for BarColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolved (and also per-bar requested) instruction for one bar.
///
/// Zero, one, or two fields may be set; an unset field means the
/// corresponding platform setter is skipped and the existing native value is
/// left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BarStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<BarColor>,
}

impl BarConfig {
    /// True when neither field is set, i.e. no native call is implied.
    pub fn is_empty(&self) -> bool {
        self.style.is_none() && self.color.is_none()
    }
}

/// A request to change the status bar, the navigation bar, or both.
///
/// Top-level `style`/`color` are shorthands applying to BOTH bars and, when
/// present, unconditionally override the corresponding field of the per-bar
/// configs. The same shape doubles as the `restore` payload of an
/// exit-fullscreen call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemBarsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BarStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<BarColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_bar: Option<BarConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_bar: Option<BarConfig>,
}

/// Point-in-time read of window insets and bar visibility.
///
/// Values are in dp (CSS px), not hardware pixels. This is a query result,
/// not an entity: nothing holds on to it past the call that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsetsSnapshot {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
    pub status_bar_visible: bool,
    pub navigation_bar_visible: bool,
}

/// Immutable facts about the device, established once at initialization and
/// read-only for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCapabilities {
    /// Platform API level (0 on the web).
    pub api_level: u32,
    /// Whether the new edge-to-edge/overlay semantics apply.
    pub is_android_35_plus: bool,
    /// Whether the device supports edge-to-edge natively.
    pub supports_edge_to_edge: bool,
    /// Whether the WindowInsets API is available.
    pub supports_window_insets: bool,
    /// Default status bar height in hardware pixels.
    pub status_bar_height: u32,
    /// Default navigation bar height in hardware pixels.
    pub navigation_bar_height: u32,
}

/// Fullscreen variants, differing in how a swipe temporarily reveals the
/// hidden bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FullscreenMode {
    Immersive,
    Lean,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_accepts_rrggbb() {
        let color = BarColor::parse("#111827").unwrap();
        assert_eq!(color.as_str(), "#111827");
        assert_eq!(color.argb(), (0xFF, 0x11, 0x18, 0x27));
    }

    #[test]
    fn color_accepts_aarrggbb() {
        let color = BarColor::parse("#80FF0000").unwrap();
        assert_eq!(color.argb(), (0x80, 0xFF, 0x00, 0x00));
    }

    #[test]
    fn color_rejects_malformed_literals() {
        for bad in ["111827", "#fff", "#11182", "#1118271", "#GG1827", "", "#"] {
            assert!(BarColor::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn request_deserializes_wire_shape() {
        let request: SystemBarsRequest = serde_json::from_str(
            r##"{
                "style": "DARK",
                "statusBar": { "style": "LIGHT", "color": "#ffffff" },
                "navigationBar": { "color": "#111827" }
            }"##,
        )
        .unwrap();

        assert_eq!(request.style, Some(BarStyle::Dark));
        assert_eq!(request.color, None);
        assert_eq!(
            request.status_bar.as_ref().unwrap().style,
            Some(BarStyle::Light)
        );
        assert_eq!(
            request.navigation_bar.unwrap().color.unwrap().as_str(),
            "#111827"
        );
    }

    #[test]
    fn request_rejects_malformed_color() {
        let result: Result<SystemBarsRequest, _> =
            serde_json::from_str(r#"{ "color": "red" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_request_has_empty_fields() {
        let request: SystemBarsRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, SystemBarsRequest::default());
    }

    #[test]
    fn capabilities_serialize_wire_keys() {
        let caps = DeviceCapabilities {
            api_level: 35,
            is_android_35_plus: true,
            supports_edge_to_edge: true,
            supports_window_insets: true,
            status_bar_height: 66,
            navigation_bar_height: 132,
        };

        let json = serde_json::to_value(&caps).unwrap();
        assert_eq!(json["apiLevel"], 35);
        assert_eq!(json["isAndroid35Plus"], true);
        assert_eq!(json["statusBarHeight"], 66);
    }

    #[test]
    fn fullscreen_mode_uses_screaming_case() {
        assert_eq!(
            serde_json::to_string(&FullscreenMode::Immersive).unwrap(),
            "\"IMMERSIVE\""
        );
        assert_eq!(
            serde_json::from_str::<FullscreenMode>("\"LEAN\"").unwrap(),
            FullscreenMode::Lean
        );
    }
}
