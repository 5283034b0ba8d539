//! WASM bindings for the system-bars service.
//!
//! Exposes the bridge method surface to JavaScript/TypeScript. Option objects
//! cross the boundary in their documented wire shape (`statusBar`, `"DARK"`,
//! `"#RRGGBB"`, ...) and are deserialized with `serde-wasm-bindgen`, so
//! malformed payloads are rejected at the boundary rather than deep inside a
//! platform call.

use bars_core::SystemBars;
use bars_traits::{BarConfig, FullscreenMode, SystemBarsRequest};
use std::sync::Arc;
use wasm_bindgen::prelude::*;

fn to_js_error<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JavaScript-accessible system-bars service, backed by the web fallback
/// controller.
#[wasm_bindgen(js_name = SystemBars)]
pub struct JsSystemBars {
    inner: SystemBars,
}

#[wasm_bindgen(js_class = SystemBars)]
impl JsSystemBars {
    /// Create a service wired to the browser fallback controller.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<JsSystemBars, JsValue> {
        let config = bars_core::config::SystemBarsConfig::builder()
            .controller(Arc::new(bars_web::WebController::new()))
            .build()
            .map_err(to_js_error)?;

        Ok(Self {
            inner: SystemBars::new(config),
        })
    }

    /// Initialize and return the device capability snapshot.
    pub async fn initialize(&self) -> Result<JsValue, JsValue> {
        let caps = self.inner.initialize().await.map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&caps).map_err(to_js_error)
    }

    /// Apply a unified or per-bar style request.
    #[wasm_bindgen(js_name = setSystemBarsStyle)]
    pub async fn set_system_bars_style(&self, options: JsValue) -> Result<(), JsValue> {
        let request: SystemBarsRequest =
            serde_wasm_bindgen::from_value(options).map_err(to_js_error)?;
        self.inner
            .set_system_bars_style(&request)
            .await
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = setStatusBarStyle)]
    pub async fn set_status_bar_style(&self, options: JsValue) -> Result<(), JsValue> {
        let config: BarConfig = serde_wasm_bindgen::from_value(options).map_err(to_js_error)?;
        self.inner
            .set_status_bar_style(&config)
            .await
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = setNavigationBarStyle)]
    pub async fn set_navigation_bar_style(&self, options: JsValue) -> Result<(), JsValue> {
        let config: BarConfig = serde_wasm_bindgen::from_value(options).map_err(to_js_error)?;
        self.inner
            .set_navigation_bar_style(&config)
            .await
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = hideStatusBar)]
    pub async fn hide_status_bar(&self) -> Result<(), JsValue> {
        self.inner.hide_status_bar().await.map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = showStatusBar)]
    pub async fn show_status_bar(&self) -> Result<(), JsValue> {
        self.inner.show_status_bar().await.map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = hideNavigationBar)]
    pub async fn hide_navigation_bar(&self) -> Result<(), JsValue> {
        self.inner.hide_navigation_bar().await.map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = showNavigationBar)]
    pub async fn show_navigation_bar(&self) -> Result<(), JsValue> {
        self.inner.show_navigation_bar().await.map_err(to_js_error)
    }

    /// Enter fullscreen. `mode` is `"IMMERSIVE"` (default) or `"LEAN"`.
    #[wasm_bindgen(js_name = enterFullscreen)]
    pub async fn enter_fullscreen(&self, mode: JsValue) -> Result<(), JsValue> {
        let mode = if mode.is_undefined() || mode.is_null() {
            FullscreenMode::Immersive
        } else {
            serde_wasm_bindgen::from_value(mode).map_err(to_js_error)?
        };
        self.inner.enter_fullscreen(mode).await.map_err(to_js_error)
    }

    /// Exit fullscreen, optionally restoring a style request afterwards.
    #[wasm_bindgen(js_name = exitFullscreen)]
    pub async fn exit_fullscreen(&self, restore: JsValue) -> Result<(), JsValue> {
        let restore: Option<SystemBarsRequest> = if restore.is_undefined() || restore.is_null() {
            None
        } else {
            Some(serde_wasm_bindgen::from_value(restore).map_err(to_js_error)?)
        };
        self.inner
            .exit_fullscreen(restore.as_ref())
            .await
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = isFullscreenActive)]
    pub async fn is_fullscreen_active(&self) -> Result<bool, JsValue> {
        self.inner.is_fullscreen_active().await.map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = forceExitFullscreen)]
    pub async fn force_exit_fullscreen(&self) -> Result<(), JsValue> {
        self.inner
            .force_exit_fullscreen()
            .await
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = setOverlay)]
    pub async fn set_overlay(&self, overlay: bool) -> Result<(), JsValue> {
        self.inner.set_overlay(overlay).await.map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = getInsets)]
    pub async fn get_insets(&self) -> Result<JsValue, JsValue> {
        let insets = self.inner.get_insets().await.map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&insets).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = handlePause)]
    pub async fn handle_pause(&self) -> Result<(), JsValue> {
        self.inner.handle_pause().await.map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = handleResume)]
    pub async fn handle_resume(&self) -> Result<(), JsValue> {
        self.inner.handle_resume().await.map_err(to_js_error)
    }

    /// Deprecated alias of [`setStatusBarStyle`](Self::set_status_bar_style).
    #[wasm_bindgen(js_name = setStyle)]
    pub async fn set_style(&self, options: JsValue) -> Result<(), JsValue> {
        self.set_status_bar_style(options).await
    }

    /// Deprecated alias of [`hideStatusBar`](Self::hide_status_bar).
    pub async fn hide(&self) -> Result<(), JsValue> {
        self.hide_status_bar().await
    }

    /// Deprecated alias of [`showStatusBar`](Self::show_status_bar).
    pub async fn show(&self) -> Result<(), JsValue> {
        self.show_status_bar().await
    }
}
