//! Browser-backed controller.

use async_trait::async_trait;
use bars_traits::{
    error::{BridgeError, Result},
    types::{BarConfig, DeviceCapabilities, FullscreenMode, InsetsSnapshot},
    SystemBarsController,
};
use tracing::debug;

use crate::error::js_error;

fn document() -> Result<web_sys::Document> {
    let window =
        web_sys::window().ok_or_else(|| BridgeError::OperationFailed("no window".into()))?;
    window
        .document()
        .ok_or_else(|| BridgeError::OperationFailed("no document".into()))
}

/// Web fallback [`SystemBarsController`].
///
/// Stateless: the browser itself is the authority on fullscreen (queried via
/// `document.fullscreenElement`), and everything else the plugin controls on
/// a device simply does not exist here.
#[derive(Debug, Clone, Default)]
pub struct WebController;

impl WebController {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl SystemBarsController for WebController {
    async fn initialize(&self) -> Result<DeviceCapabilities> {
        // Not applicable for web: no API level, no bars, no insets.
        Ok(DeviceCapabilities {
            api_level: 0,
            is_android_35_plus: false,
            supports_edge_to_edge: false,
            supports_window_insets: false,
            status_bar_height: 0,
            navigation_bar_height: 0,
        })
    }

    async fn apply_status_bar(&self, config: &BarConfig) -> Result<()> {
        debug!(?config, "apply_status_bar called on web platform");
        Ok(())
    }

    async fn apply_navigation_bar(&self, config: &BarConfig) -> Result<()> {
        debug!(?config, "apply_navigation_bar called on web platform");
        Ok(())
    }

    async fn hide_status_bar(&self) -> Result<()> {
        debug!("hide_status_bar called on web platform");
        Ok(())
    }

    async fn show_status_bar(&self) -> Result<()> {
        debug!("show_status_bar called on web platform");
        Ok(())
    }

    async fn hide_navigation_bar(&self) -> Result<()> {
        debug!("hide_navigation_bar called on web platform");
        Ok(())
    }

    async fn show_navigation_bar(&self) -> Result<()> {
        Err(BridgeError::Unimplemented(
            "show_navigation_bar is not available on web".into(),
        ))
    }

    async fn enter_fullscreen(&self, mode: FullscreenMode) -> Result<()> {
        // Browsers have a single fullscreen variant; the mode is advisory.
        debug!(?mode, "entering browser fullscreen");
        let root = document()?
            .document_element()
            .ok_or_else(|| BridgeError::OperationFailed("no document element".into()))?;
        root.request_fullscreen()
            .map_err(|err| js_error("requestFullscreen", err))
    }

    async fn exit_fullscreen(&self) -> Result<()> {
        let doc = document()?;
        if doc.fullscreen_element().is_some() {
            doc.exit_fullscreen();
        }
        Ok(())
    }

    async fn force_exit_fullscreen(&self) -> Result<()> {
        // Recovery path: never fails, even without a document.
        if let Ok(doc) = document() {
            if doc.fullscreen_element().is_some() {
                doc.exit_fullscreen();
            }
        }
        Ok(())
    }

    async fn is_fullscreen_active(&self) -> Result<bool> {
        Ok(document()?.fullscreen_element().is_some())
    }

    async fn apply_system_defaults(&self) -> Result<()> {
        debug!("apply_system_defaults called on web platform");
        Ok(())
    }

    async fn set_overlay(&self, overlay: bool) -> Result<()> {
        debug!(overlay, "set_overlay called on web platform");
        Ok(())
    }

    async fn insets(&self) -> Result<InsetsSnapshot> {
        // No system bars on the web: everything zero, nothing visible.
        Ok(InsetsSnapshot::default())
    }
}
