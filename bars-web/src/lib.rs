//! # Web System-Bars Fallback
//!
//! WebAssembly implementation of [`bars_traits::SystemBarsController`] for
//! browser hosts. Browsers have no system bars, so most operations degrade to
//! logged no-ops; the exceptions are the fullscreen operations, which map to
//! the browser Fullscreen API, and `show_navigation_bar`, which has no web
//! counterpart at all and fails with `Unimplemented`.
//!
//! # Platform Support
//!
//! This crate is designed exclusively for the `wasm32-unknown-unknown`
//! target. On any other target it compiles to an empty crate.
//!
//! # Degradation table
//!
//! | Operation | Web behavior |
//! |---|---|
//! | `initialize` | Zeroed capabilities (`api_level` 0, all flags false) |
//! | `apply_*`, `set_overlay`, hide/show | Logged no-op |
//! | `show_navigation_bar` | `Unimplemented` |
//! | `enter_fullscreen` | `document.documentElement.requestFullscreen()` |
//! | `exit_fullscreen` / `force_exit_fullscreen` | `document.exitFullscreen()` |
//! | `is_fullscreen_active` | `document.fullscreenElement != null` |
//! | `insets` | Zeroed snapshot, both bars reported not visible |

#![cfg(target_arch = "wasm32")]

mod controller;
mod error;

pub use controller::WebController;
pub use error::js_error;
