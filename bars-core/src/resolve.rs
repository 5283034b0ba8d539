//! Style resolution: the one piece of real logic in this workspace.
//!
//! A [`SystemBarsRequest`] carries at most four effective fields: a
//! shorthand style, a shorthand color, and two per-bar configs. Resolution
//! turns that into exactly two [`BarConfig`] values, one per bar, applying
//! shorthand-overrides-individual precedence independently per field and per
//! bar. The exit-fullscreen restore payload has the identical shape and goes
//! through the same function.

use bars_traits::types::{BarConfig, SystemBarsRequest};

/// The two resolved bar instructions produced from one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedBars {
    pub status: BarConfig,
    pub navigation: BarConfig,
}

impl ResolvedBars {
    /// True when neither bar has anything to apply: no native calls are
    /// issued for such a request.
    pub fn is_empty(&self) -> bool {
        self.status.is_empty() && self.navigation.is_empty()
    }
}

/// Resolve a request into concrete per-bar configs.
///
/// Per field (style, color) and per bar, independently:
///
/// 1. A top-level shorthand, if present, wins for both bars.
/// 2. Otherwise the per-bar config supplies the field, if it carries it.
/// 3. Otherwise the field stays unset and the platform setter is skipped.
///
/// Pure function; malformed values cannot reach it (the type boundary
/// rejects them) and it has no error conditions of its own.
pub fn resolve(request: &SystemBarsRequest) -> ResolvedBars {
    ResolvedBars {
        status: resolve_bar(request, request.status_bar.as_ref()),
        navigation: resolve_bar(request, request.navigation_bar.as_ref()),
    }
}

fn resolve_bar(request: &SystemBarsRequest, per_bar: Option<&BarConfig>) -> BarConfig {
    BarConfig {
        style: request.style.or_else(|| per_bar.and_then(|bar| bar.style)),
        color: request
            .color
            .clone()
            .or_else(|| per_bar.and_then(|bar| bar.color.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bars_traits::types::{BarColor, BarStyle};

    fn color(literal: &str) -> BarColor {
        BarColor::parse(literal).unwrap()
    }

    #[test]
    fn empty_request_resolves_to_empty_bars() {
        let resolved = resolve(&SystemBarsRequest::default());
        assert!(resolved.is_empty());
        assert_eq!(resolved.status, BarConfig::default());
        assert_eq!(resolved.navigation, BarConfig::default());
    }

    #[test]
    fn shorthand_applies_to_both_bars() {
        let request = SystemBarsRequest {
            style: Some(BarStyle::Dark),
            color: Some(color("#111827")),
            ..Default::default()
        };

        let resolved = resolve(&request);
        for bar in [&resolved.status, &resolved.navigation] {
            assert_eq!(bar.style, Some(BarStyle::Dark));
            assert_eq!(bar.color.as_ref().unwrap().as_str(), "#111827");
        }
    }

    #[test]
    fn per_bar_fields_stay_independent() {
        let request = SystemBarsRequest {
            status_bar: Some(BarConfig {
                style: Some(BarStyle::Light),
                color: None,
            }),
            navigation_bar: Some(BarConfig {
                style: Some(BarStyle::Dark),
                color: Some(color("#111827")),
            }),
            ..Default::default()
        };

        let resolved = resolve(&request);
        assert_eq!(resolved.status.style, Some(BarStyle::Light));
        assert_eq!(resolved.status.color, None);
        assert_eq!(resolved.navigation.style, Some(BarStyle::Dark));
        assert_eq!(
            resolved.navigation.color.as_ref().unwrap().as_str(),
            "#111827"
        );
    }

    #[test]
    fn shorthand_overrides_per_bar_value() {
        let request = SystemBarsRequest {
            style: Some(BarStyle::Light),
            navigation_bar: Some(BarConfig {
                style: Some(BarStyle::Dark),
                color: None,
            }),
            ..Default::default()
        };

        let resolved = resolve(&request);
        assert_eq!(resolved.navigation.style, Some(BarStyle::Light));
        assert_eq!(resolved.status.style, Some(BarStyle::Light));
    }

    #[test]
    fn override_is_per_field_not_per_bar() {
        // Shorthand style wins, but the per-bar color still applies because
        // no shorthand color was given.
        let request = SystemBarsRequest {
            style: Some(BarStyle::Dark),
            status_bar: Some(BarConfig {
                style: Some(BarStyle::Light),
                color: Some(color("#ffffff")),
            }),
            ..Default::default()
        };

        let resolved = resolve(&request);
        assert_eq!(resolved.status.style, Some(BarStyle::Dark));
        assert_eq!(resolved.status.color.as_ref().unwrap().as_str(), "#ffffff");
        // The other bar is unaffected by fields not addressed to it.
        assert_eq!(resolved.navigation.style, Some(BarStyle::Dark));
        assert_eq!(resolved.navigation.color, None);
    }

    #[test]
    fn shorthand_color_overrides_both_per_bar_colors() {
        let request = SystemBarsRequest {
            color: Some(color("#000000")),
            status_bar: Some(BarConfig {
                style: None,
                color: Some(color("#ffffff")),
            }),
            navigation_bar: Some(BarConfig {
                style: None,
                color: Some(color("#ff0000")),
            }),
            ..Default::default()
        };

        let resolved = resolve(&request);
        assert_eq!(resolved.status.color.as_ref().unwrap().as_str(), "#000000");
        assert_eq!(
            resolved.navigation.color.as_ref().unwrap().as_str(),
            "#000000"
        );
        assert_eq!(resolved.status.style, None);
    }
}
