//! # System-Bars Core Service
//!
//! Turns JavaScript-shaped option objects into the minimal set of platform
//! controller calls. The service owns no window state of its own: device
//! capabilities are an immutable snapshot taken once at initialization, and
//! fullscreen state lives in the platform controller, which is its sole
//! authority.
//!
//! ## Overview
//!
//! - [`resolve`](resolve::resolve) - the pure style-resolution function
//! - [`SystemBars`] - the bridge method surface exposed to host shells
//! - [`config::SystemBarsConfig`] - builder-style wiring of the controller
//! - [`logging`] - `tracing` bootstrap shared by the workspace

pub mod config;
pub mod error;
pub mod logging;
pub mod resolve;

pub use config::SystemBarsConfig;
pub use error::{Error, Result};
pub use resolve::{resolve, ResolvedBars};

use std::sync::{Arc, OnceLock};

use bars_traits::{
    types::{BarConfig, DeviceCapabilities, FullscreenMode, InsetsSnapshot, SystemBarsRequest},
    SystemBarsController,
};
use tracing::debug;

/// The bridge method surface.
///
/// Every method is a single request/response exchange with the platform
/// collaborator; there are no retries, no queued transitions and no caching
/// beyond the [`DeviceCapabilities`] snapshot.
#[derive(Clone)]
pub struct SystemBars {
    controller: Arc<dyn SystemBarsController>,
    initial_style: Option<SystemBarsRequest>,
    reapply_on_resume: bool,
    capabilities: Arc<OnceLock<DeviceCapabilities>>,
}

impl SystemBars {
    /// Create a service from a full configuration.
    pub fn new(config: SystemBarsConfig) -> Self {
        Self {
            controller: config.controller,
            initial_style: config.initial_style,
            reapply_on_resume: config.reapply_on_resume,
            capabilities: Arc::new(OnceLock::new()),
        }
    }

    /// Convenience constructor wrapping a bare controller with defaults.
    pub fn with_controller(controller: Arc<dyn SystemBarsController>) -> Self {
        Self {
            controller,
            initial_style: None,
            reapply_on_resume: true,
            capabilities: Arc::new(OnceLock::new()),
        }
    }

    /// Establish the device capability snapshot and apply the configured
    /// initial style, if any. Idempotent: repeated calls return the snapshot
    /// taken on first success.
    pub async fn initialize(&self) -> Result<DeviceCapabilities> {
        let caps = match self.capabilities.get() {
            Some(caps) => *caps,
            None => {
                let caps = self.controller.initialize().await?;
                *self.capabilities.get_or_init(|| caps)
            }
        };

        if let Some(initial) = &self.initial_style {
            self.set_system_bars_style(initial).await?;
        }

        debug!(api_level = caps.api_level, "system bars initialized");
        Ok(caps)
    }

    /// The capability snapshot, if `initialize` has run.
    pub fn capabilities(&self) -> Option<DeviceCapabilities> {
        self.capabilities.get().copied()
    }

    /// Apply a unified or per-bar style/color request to both bars.
    ///
    /// Resolution happens in [`resolve`]; only non-empty resolved configs
    /// produce controller calls, so `{}` is a complete no-op.
    pub async fn set_system_bars_style(&self, request: &SystemBarsRequest) -> Result<()> {
        self.apply_resolved(&resolve(request)).await
    }

    /// Apply a config to the status bar only.
    pub async fn set_status_bar_style(&self, config: &BarConfig) -> Result<()> {
        if config.is_empty() {
            return Ok(());
        }
        Ok(self.controller.apply_status_bar(config).await?)
    }

    /// Apply a config to the navigation bar only.
    pub async fn set_navigation_bar_style(&self, config: &BarConfig) -> Result<()> {
        if config.is_empty() {
            return Ok(());
        }
        Ok(self.controller.apply_navigation_bar(config).await?)
    }

    pub async fn hide_status_bar(&self) -> Result<()> {
        Ok(self.controller.hide_status_bar().await?)
    }

    pub async fn show_status_bar(&self) -> Result<()> {
        Ok(self.controller.show_status_bar().await?)
    }

    pub async fn hide_navigation_bar(&self) -> Result<()> {
        Ok(self.controller.hide_navigation_bar().await?)
    }

    pub async fn show_navigation_bar(&self) -> Result<()> {
        Ok(self.controller.show_navigation_bar().await?)
    }

    /// Enter fullscreen in the given variant.
    pub async fn enter_fullscreen(&self, mode: FullscreenMode) -> Result<()> {
        Ok(self.controller.enter_fullscreen(mode).await?)
    }

    /// Leave fullscreen, then restore bar appearance.
    ///
    /// With a restore payload, restoration is exactly a
    /// [`set_system_bars_style`](Self::set_system_bars_style) of that payload.
    /// Without one, the controller applies its own system defaults and the
    /// resolver is not involved at all.
    pub async fn exit_fullscreen(&self, restore: Option<&SystemBarsRequest>) -> Result<()> {
        self.controller.exit_fullscreen().await?;

        match restore {
            Some(request) => self.apply_resolved(&resolve(request)).await,
            None => Ok(self.controller.apply_system_defaults().await?),
        }
    }

    /// Whether fullscreen is active right now, straight from the platform.
    pub async fn is_fullscreen_active(&self) -> Result<bool> {
        Ok(self.controller.is_fullscreen_active().await?)
    }

    /// Unconditional recovery path out of fullscreen, valid from any state.
    /// Used when the normal exit failed or state is unknown (e.g. after an
    /// interrupted lifecycle event).
    pub async fn force_exit_fullscreen(&self) -> Result<()> {
        Ok(self.controller.force_exit_fullscreen().await?)
    }

    /// Toggle overlay mode. The controller rejects this below API 35.
    pub async fn set_overlay(&self, overlay: bool) -> Result<()> {
        Ok(self.controller.set_overlay(overlay).await?)
    }

    /// Current insets and bar visibility.
    pub async fn get_insets(&self) -> Result<InsetsSnapshot> {
        Ok(self.controller.insets().await?)
    }

    /// Host lifecycle: the app moved to the background.
    pub async fn handle_pause(&self) -> Result<()> {
        Ok(self.controller.on_app_pause().await?)
    }

    /// Host lifecycle: the app returned to the foreground. Forwarded to the
    /// controller so it can re-apply state lost across suspension; disabled
    /// via [`SystemBarsConfig::reapply_on_resume`].
    pub async fn handle_resume(&self) -> Result<()> {
        if !self.reapply_on_resume {
            return Ok(());
        }
        Ok(self.controller.on_app_resume().await?)
    }

    async fn apply_resolved(&self, resolved: &ResolvedBars) -> Result<()> {
        if !resolved.status.is_empty() {
            self.controller.apply_status_bar(&resolved.status).await?;
        }
        if !resolved.navigation.is_empty() {
            self.controller
                .apply_navigation_bar(&resolved.navigation)
                .await?;
        }
        Ok(())
    }
}

/// Legacy single-bar aliases, kept functionally identical to their
/// replacements for backward compatibility.
impl SystemBars {
    #[deprecated(note = "use set_status_bar_style")]
    pub async fn set_style(&self, config: &BarConfig) -> Result<()> {
        self.set_status_bar_style(config).await
    }

    #[deprecated(note = "use hide_status_bar")]
    pub async fn hide(&self) -> Result<()> {
        self.hide_status_bar().await
    }

    #[deprecated(note = "use show_status_bar")]
    pub async fn show(&self) -> Result<()> {
        self.show_status_bar().await
    }
}
