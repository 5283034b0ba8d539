//! The platform collaborator trait.
//!
//! One implementation exists per host platform. The core service resolves
//! option objects into concrete per-bar instructions and hands them to a
//! `SystemBarsController`; everything below this trait is the operating
//! system's problem, UI-thread scheduling included (the platform serializes
//! its own window mutations).

use crate::{
    error::Result,
    platform::PlatformSendSync,
    types::{BarConfig, DeviceCapabilities, FullscreenMode, InsetsSnapshot},
};

/// Window controller for one host platform.
///
/// # Contract
///
/// - `apply_status_bar` / `apply_navigation_bar` are only called with a
///   non-empty [`BarConfig`]; the controller applies the fields that are set
///   and leaves the rest of the bar untouched.
/// - On API 35+ the navigation bar is mandatorily transparent: a controller
///   on such a device silently ignores a requested navigation-bar color.
///   This is platform policy, not resolver logic; the resolver still
///   reports "color requested".
/// - The controller is the sole authority on fullscreen state. Callers never
///   cache `is_fullscreen_active`.
/// - `force_exit_fullscreen` is the recovery path for a stuck or unknown
///   fullscreen state: it transitions to normal from ANY state and must not
///   fail meaningfully.
///
/// # Example
///
/// ```ignore
/// use bars_traits::{BarConfig, BarStyle, SystemBarsController};
///
/// async fn darken(controller: &dyn SystemBarsController) -> bars_traits::Result<()> {
///     let config = BarConfig { style: Some(BarStyle::Dark), color: None };
///     controller.apply_status_bar(&config).await
/// }
/// ```
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait SystemBarsController: PlatformSendSync {
    /// Establish the immutable device capability snapshot. Called once per
    /// session, before any other method.
    async fn initialize(&self) -> Result<DeviceCapabilities>;

    /// Apply the set fields of `config` to the status bar.
    async fn apply_status_bar(&self, config: &BarConfig) -> Result<()>;

    /// Apply the set fields of `config` to the navigation bar.
    async fn apply_navigation_bar(&self, config: &BarConfig) -> Result<()>;

    async fn hide_status_bar(&self) -> Result<()>;

    async fn show_status_bar(&self) -> Result<()>;

    async fn hide_navigation_bar(&self) -> Result<()>;

    async fn show_navigation_bar(&self) -> Result<()>;

    /// Hide both bars and enter the given fullscreen variant.
    async fn enter_fullscreen(&self, mode: FullscreenMode) -> Result<()>;

    /// Leave fullscreen and show both bars again. Restoration of styles is
    /// the caller's job (it follows up with `apply_*` calls or
    /// [`apply_system_defaults`](Self::apply_system_defaults)).
    async fn exit_fullscreen(&self) -> Result<()>;

    /// Unconditional transition to the normal state, from any state.
    async fn force_exit_fullscreen(&self) -> Result<()>;

    /// Whether fullscreen is currently active. Pure observer.
    async fn is_fullscreen_active(&self) -> Result<bool>;

    /// Reset both bars to the platform's own defaults. Used when an
    /// exit-fullscreen call carries no restore payload.
    async fn apply_system_defaults(&self) -> Result<()>;

    /// Toggle overlay (edge-to-edge) mode. Android 35+ only; controllers on
    /// older API levels fail with `PlatformUnsupported`.
    async fn set_overlay(&self, overlay: bool) -> Result<()>;

    /// Current window insets and bar visibility.
    async fn insets(&self) -> Result<InsetsSnapshot>;

    /// The host application moved to the background.
    async fn on_app_pause(&self) -> Result<()> {
        Ok(())
    }

    /// The host application returned to the foreground. Controllers that
    /// lose window state across suspension re-apply it here.
    async fn on_app_resume(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        Controller {}

        #[async_trait]
        impl SystemBarsController for Controller {
            async fn initialize(&self) -> Result<DeviceCapabilities>;
            async fn apply_status_bar(&self, config: &BarConfig) -> Result<()>;
            async fn apply_navigation_bar(&self, config: &BarConfig) -> Result<()>;
            async fn hide_status_bar(&self) -> Result<()>;
            async fn show_status_bar(&self) -> Result<()>;
            async fn hide_navigation_bar(&self) -> Result<()>;
            async fn show_navigation_bar(&self) -> Result<()>;
            async fn enter_fullscreen(&self, mode: FullscreenMode) -> Result<()>;
            async fn exit_fullscreen(&self) -> Result<()>;
            async fn force_exit_fullscreen(&self) -> Result<()>;
            async fn is_fullscreen_active(&self) -> Result<bool>;
            async fn apply_system_defaults(&self) -> Result<()>;
            async fn set_overlay(&self, overlay: bool) -> Result<()>;
            async fn insets(&self) -> Result<InsetsSnapshot>;
        }
    }

    #[tokio::test]
    async fn lifecycle_hooks_default_to_no_ops() {
        // Mocking only the required methods leaves the trait defaults in
        // place for the lifecycle hooks.
        let controller = MockController::new();
        assert!(controller.on_app_pause().await.is_ok());
        assert!(controller.on_app_resume().await.is_ok());
    }

    #[tokio::test]
    async fn trait_objects_dispatch_through_the_seam() {
        let mut controller = MockController::new();
        controller
            .expect_is_fullscreen_active()
            .return_once(|| Ok(true));

        let controller: Box<dyn SystemBarsController> = Box::new(controller);
        assert!(controller.is_fullscreen_active().await.unwrap());
    }
}
