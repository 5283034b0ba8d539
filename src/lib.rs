//! Workspace facade crate.
//!
//! Host applications depend on `sysbars` and enable the feature matching
//! their platform instead of wiring the workspace crates individually:
//!
//! - `headless-shims` (default) pulls in the in-memory
//!   [`bars_headless::HeadlessController`] for development hosts and tests.
//! - `web` pulls in `bars-web` and the `#[wasm_bindgen]` surface in
//!   [`wasm`], for browsers without real system bars.
//!
//! Android hosts inject their own [`SystemBarsController`] through
//! [`SystemBarsConfig::builder`].

pub use bars_core::{
    config::{SystemBarsConfig, SystemBarsConfigBuilder},
    logging::{init_logging, LogFormat, LogLevel, LoggingConfig},
    resolve, Error, ResolvedBars, Result, SystemBars,
};
pub use bars_traits::{
    BarColor, BarConfig, BarStyle, BridgeError, DeviceCapabilities, FullscreenMode,
    InsetsSnapshot, SystemBarsController, SystemBarsRequest,
};

#[cfg(feature = "headless-shims")]
pub use bars_headless::{DeviceProfile, HeadlessController};

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use bars_web::WebController;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod wasm;

/// Convenience bootstrapper for development hosts.
///
/// Builds a [`SystemBars`] service on top of a fresh in-memory controller and
/// runs `initialize`, so callers get a ready service plus the capability
/// snapshot in one step.
///
/// ```
/// # async fn example() -> sysbars::Result<()> {
/// let (bars, caps) = sysbars::bootstrap_headless().await?;
/// assert!(caps.is_android_35_plus);
/// bars.hide_status_bar().await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "headless-shims")]
pub async fn bootstrap_headless() -> Result<(SystemBars, DeviceCapabilities)> {
    let config = SystemBarsConfig::builder().build()?;
    let bars = SystemBars::new(config);
    let caps = bars.initialize().await?;
    Ok((bars, caps))
}

/// Convenience bootstrapper for browser hosts.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub async fn bootstrap_web() -> Result<(SystemBars, DeviceCapabilities)> {
    use std::sync::Arc;

    let config = SystemBarsConfig::builder()
        .controller(Arc::new(WebController::new()))
        .build()?;
    let bars = SystemBars::new(config);
    let caps = bars.initialize().await?;
    Ok((bars, caps))
}

#[cfg(all(test, feature = "headless-shims"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bootstrap_yields_initialized_service() {
        let (bars, caps) = bootstrap_headless().await.unwrap();

        assert_eq!(caps.api_level, 35);
        assert_eq!(bars.capabilities(), Some(caps));
    }

    #[tokio::test]
    async fn facade_reexports_cover_the_bridge_surface() {
        let (bars, _) = bootstrap_headless().await.unwrap();

        let request: SystemBarsRequest =
            serde_json::from_str(r##"{ "style": "DARK", "color": "#111827" }"##).unwrap();
        bars.set_system_bars_style(&request).await.unwrap();

        bars.enter_fullscreen(FullscreenMode::Immersive)
            .await
            .unwrap();
        assert!(bars.is_fullscreen_active().await.unwrap());
        bars.exit_fullscreen(None).await.unwrap();
        assert!(!bars.is_fullscreen_active().await.unwrap());
    }
}
