//! Service configuration.
//!
//! A [`SystemBarsConfig`] holds the platform controller plus the few knobs
//! the service honours. The builder enforces fail-fast validation: missing a
//! required controller produces an actionable error instead of a panic deep
//! inside the first call.
//!
//! When the `headless-shims` feature is enabled, an in-memory
//! [`bars_headless::HeadlessController`] is injected automatically if no
//! controller is provided, which is what development hosts and tests want.
//!
//! ```ignore
//! use bars_core::config::SystemBarsConfig;
//! use std::sync::Arc;
//!
//! let config = SystemBarsConfig::builder()
//!     .controller(Arc::new(MyController))
//!     .reapply_on_resume(true)
//!     .build()?;
//! ```

use std::sync::Arc;

use bars_traits::{SystemBarsController, SystemBarsRequest};

use crate::error::{Error, Result};

/// Configuration for a [`SystemBars`](crate::SystemBars) service instance.
#[derive(Clone)]
pub struct SystemBarsConfig {
    /// Platform window controller (required; defaulted by `headless-shims`).
    pub controller: Arc<dyn SystemBarsController>,

    /// Style request applied right after `initialize` succeeds, so a host can
    /// declare its startup theme instead of issuing a separate call.
    pub initial_style: Option<SystemBarsRequest>,

    /// Forward app-resume events to the controller so it can re-apply window
    /// state lost across suspension.
    pub reapply_on_resume: bool,
}

impl std::fmt::Debug for SystemBarsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemBarsConfig")
            .field("controller", &"SystemBarsController { ... }")
            .field("initial_style", &self.initial_style)
            .field("reapply_on_resume", &self.reapply_on_resume)
            .finish()
    }
}

impl SystemBarsConfig {
    pub fn builder() -> SystemBarsConfigBuilder {
        SystemBarsConfigBuilder::default()
    }
}

#[cfg(feature = "headless-shims")]
fn provide_default_controller() -> Result<Arc<dyn SystemBarsController>> {
    use bars_headless::HeadlessController;

    Ok(Arc::new(HeadlessController::new()))
}

#[cfg(not(feature = "headless-shims"))]
fn provide_default_controller() -> Result<Arc<dyn SystemBarsController>> {
    Err(Error::CapabilityMissing {
        capability: "SystemBarsController".to_string(),
        message: "A SystemBarsController implementation is required. \
                 Development: enable the 'headless-shims' feature to use the in-memory HeadlessController. \
                 Android: inject the window-insets controller adapter. \
                 Web: inject bars_web::WebController."
            .to_string(),
    })
}

/// Builder for [`SystemBarsConfig`].
pub struct SystemBarsConfigBuilder {
    controller: Option<Arc<dyn SystemBarsController>>,
    initial_style: Option<SystemBarsRequest>,
    reapply_on_resume: bool,
}

impl Default for SystemBarsConfigBuilder {
    fn default() -> Self {
        Self {
            controller: None,
            initial_style: None,
            reapply_on_resume: true,
        }
    }
}

impl SystemBarsConfigBuilder {
    /// Sets the platform controller.
    pub fn controller(mut self, controller: Arc<dyn SystemBarsController>) -> Self {
        self.controller = Some(controller);
        self
    }

    /// Sets the style request applied after initialization.
    pub fn initial_style(mut self, request: SystemBarsRequest) -> Self {
        self.initial_style = Some(request);
        self
    }

    /// Enables re-applying window state when the app resumes.
    ///
    /// Default: true (matching what Android hosts need after screen unlock).
    pub fn reapply_on_resume(mut self, enabled: bool) -> Self {
        self.reapply_on_resume = enabled;
        self
    }

    /// Builds the final config, injecting the headless default controller
    /// when the feature allows and none was provided.
    pub fn build(self) -> Result<SystemBarsConfig> {
        let controller = match self.controller {
            Some(controller) => controller,
            None => provide_default_controller()?,
        };

        Ok(SystemBarsConfig {
            controller,
            initial_style: self.initial_style,
            reapply_on_resume: self.reapply_on_resume,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bars_traits::{
        types::{BarConfig, DeviceCapabilities, FullscreenMode, InsetsSnapshot},
        BridgeError,
    };

    struct NullController;

    #[async_trait]
    impl SystemBarsController for NullController {
        async fn initialize(&self) -> std::result::Result<DeviceCapabilities, BridgeError> {
            Ok(DeviceCapabilities {
                api_level: 30,
                is_android_35_plus: false,
                supports_edge_to_edge: false,
                supports_window_insets: true,
                status_bar_height: 0,
                navigation_bar_height: 0,
            })
        }

        async fn apply_status_bar(
            &self,
            _config: &BarConfig,
        ) -> std::result::Result<(), BridgeError> {
            Ok(())
        }

        async fn apply_navigation_bar(
            &self,
            _config: &BarConfig,
        ) -> std::result::Result<(), BridgeError> {
            Ok(())
        }

        async fn hide_status_bar(&self) -> std::result::Result<(), BridgeError> {
            Ok(())
        }

        async fn show_status_bar(&self) -> std::result::Result<(), BridgeError> {
            Ok(())
        }

        async fn hide_navigation_bar(&self) -> std::result::Result<(), BridgeError> {
            Ok(())
        }

        async fn show_navigation_bar(&self) -> std::result::Result<(), BridgeError> {
            Ok(())
        }

        async fn enter_fullscreen(
            &self,
            _mode: FullscreenMode,
        ) -> std::result::Result<(), BridgeError> {
            Ok(())
        }

        async fn exit_fullscreen(&self) -> std::result::Result<(), BridgeError> {
            Ok(())
        }

        async fn force_exit_fullscreen(&self) -> std::result::Result<(), BridgeError> {
            Ok(())
        }

        async fn is_fullscreen_active(&self) -> std::result::Result<bool, BridgeError> {
            Ok(false)
        }

        async fn apply_system_defaults(&self) -> std::result::Result<(), BridgeError> {
            Ok(())
        }

        async fn set_overlay(&self, _overlay: bool) -> std::result::Result<(), BridgeError> {
            Ok(())
        }

        async fn insets(&self) -> std::result::Result<InsetsSnapshot, BridgeError> {
            Ok(InsetsSnapshot::default())
        }
    }

    #[test]
    fn builder_accepts_explicit_controller() {
        let config = SystemBarsConfig::builder()
            .controller(Arc::new(NullController))
            .build()
            .unwrap();

        assert!(config.initial_style.is_none());
        assert!(config.reapply_on_resume);
    }

    #[cfg(feature = "headless-shims")]
    #[test]
    fn builder_falls_back_to_headless_default() {
        let config = SystemBarsConfig::builder().build();
        assert!(config.is_ok());
    }

    #[cfg(not(feature = "headless-shims"))]
    #[test]
    fn builder_requires_controller_without_shims() {
        let result = SystemBarsConfig::builder().build();
        let err = result.err().expect("controller should be required");
        assert!(err.to_string().contains("SystemBarsController"));
    }

    #[test]
    fn builder_keeps_initial_style() {
        let request = SystemBarsRequest {
            style: Some(bars_traits::BarStyle::Dark),
            ..Default::default()
        };

        let config = SystemBarsConfig::builder()
            .controller(Arc::new(NullController))
            .initial_style(request.clone())
            .reapply_on_resume(true)
            .build()
            .unwrap();

        assert_eq!(config.initial_style, Some(request));
        assert!(config.reapply_on_resume);
    }
}
