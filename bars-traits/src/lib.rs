//! # System-Bars Controller Traits
//!
//! Platform abstraction for system-bar (status bar / navigation bar) control.
//!
//! ## Overview
//!
//! This crate defines the contract between the core service and the
//! platform-specific window controller. The operating system's window-insets
//! and system-bar APIs are an external collaborator: every adapter translates
//! the calls here into whatever its host platform offers (WindowInsetsController
//! on Android, the Fullscreen API in browsers, an in-memory window model for
//! headless development).
//!
//! ## Contents
//!
//! - [`SystemBarsController`](controller::SystemBarsController) - the platform
//!   collaborator trait
//! - Wire types: [`BarStyle`](types::BarStyle), [`BarColor`](types::BarColor),
//!   [`BarConfig`](types::BarConfig), [`SystemBarsRequest`](types::SystemBarsRequest),
//!   [`InsetsSnapshot`](types::InsetsSnapshot),
//!   [`DeviceCapabilities`](types::DeviceCapabilities),
//!   [`FullscreenMode`](types::FullscreenMode)
//! - [`BridgeError`](error::BridgeError) - the shared error type
//!
//! ## Adapters
//!
//! | Platform | Implementation Crate |
//! |----------|---------------------|
//! | Headless / native dev | `bars-headless` |
//! | Web (wasm32)          | `bars-web`      |
//!
//! ## Thread Safety
//!
//! On native targets the controller trait requires `Send + Sync` so it can be
//! shared across async tasks. WebAssembly builds run single-threaded and the
//! bound relaxes to nothing; see [`platform`].

pub mod controller;
pub mod error;
pub mod platform;
pub mod types;

pub use controller::SystemBarsController;
pub use error::{BridgeError, ColorParseError, Result};
pub use types::{
    BarColor, BarConfig, BarStyle, DeviceCapabilities, FullscreenMode, InsetsSnapshot,
    SystemBarsRequest,
};
