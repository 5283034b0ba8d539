//! # Headless System-Bars Controller
//!
//! An in-memory implementation of [`bars_traits::SystemBarsController`] that
//! models an Android window at a configurable API level. It exists for
//! development hosts and tests: the real window-insets APIs live in the
//! mobile shell, but the contract (which setters fire, what gets ignored on
//! API 35+, how visibility feeds back into insets) can be exercised without
//! a device.
//!
//! Every platform call is recorded in a journal, so tests can assert the
//! minimal-call property ("an empty request issues zero native calls")
//! directly against what "the platform" saw.
//!
//! ## Usage
//!
//! ```ignore
//! use bars_headless::{DeviceProfile, HeadlessController};
//!
//! let controller = HeadlessController::with_profile(DeviceProfile::api_30());
//! ```

mod controller;

pub use controller::{
    AppliedCall, BarSnapshot, DeviceProfile, HeadlessController, WindowSnapshot,
};
