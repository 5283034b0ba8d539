//! Browser tests for the web fallback controller.

#![cfg(target_arch = "wasm32")]

use bars_traits::{BarConfig, BarStyle, BridgeError, SystemBarsController};
use bars_web::WebController;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn initialize_reports_zeroed_capabilities() {
    let controller = WebController::new();
    let caps = controller.initialize().await.unwrap();

    assert_eq!(caps.api_level, 0);
    assert!(!caps.is_android_35_plus);
    assert!(!caps.supports_edge_to_edge);
    assert!(!caps.supports_window_insets);
    assert_eq!(caps.status_bar_height, 0);
    assert_eq!(caps.navigation_bar_height, 0);
}

#[wasm_bindgen_test]
async fn insets_are_zeroed_with_no_bars_visible() {
    let controller = WebController::new();
    let insets = controller.insets().await.unwrap();

    assert_eq!((insets.top, insets.bottom, insets.left, insets.right), (0, 0, 0, 0));
    assert!(!insets.status_bar_visible);
    assert!(!insets.navigation_bar_visible);
}

#[wasm_bindgen_test]
async fn style_and_visibility_operations_degrade_to_no_ops() {
    let controller = WebController::new();
    let config = BarConfig {
        style: Some(BarStyle::Dark),
        color: None,
    };

    controller.apply_status_bar(&config).await.unwrap();
    controller.apply_navigation_bar(&config).await.unwrap();
    controller.hide_status_bar().await.unwrap();
    controller.show_status_bar().await.unwrap();
    controller.hide_navigation_bar().await.unwrap();
    controller.set_overlay(true).await.unwrap();
    controller.apply_system_defaults().await.unwrap();
}

#[wasm_bindgen_test]
async fn show_navigation_bar_is_unimplemented() {
    let controller = WebController::new();
    let err = controller.show_navigation_bar().await.unwrap_err();
    assert!(matches!(err, BridgeError::Unimplemented(_)));
}

#[wasm_bindgen_test]
async fn fullscreen_state_is_read_from_the_document() {
    let controller = WebController::new();

    // Test pages start windowed; exit paths must still succeed.
    assert!(!controller.is_fullscreen_active().await.unwrap());
    controller.exit_fullscreen().await.unwrap();
    controller.force_exit_fullscreen().await.unwrap();
    assert!(!controller.is_fullscreen_active().await.unwrap());
}
