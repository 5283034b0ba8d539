//! The simulated window model.

use async_trait::async_trait;
use bars_traits::{
    error::{BridgeError, Result},
    types::{BarColor, BarConfig, BarStyle, DeviceCapabilities, FullscreenMode, InsetsSnapshot},
    SystemBarsController,
};
use tokio::sync::RwLock;
use tracing::debug;

/// Static facts about the simulated device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceProfile {
    /// Android API level the simulation reports and gates on.
    pub api_level: u32,
    /// Hardware pixels per dp, used when converting insets.
    pub density: f32,
    /// Status bar height in hardware pixels.
    pub status_bar_height: u32,
    /// Navigation bar height in hardware pixels.
    pub navigation_bar_height: u32,
}

impl DeviceProfile {
    /// Profile with the given API level and the platform fallback bar
    /// heights (24dp status, 48dp navigation) at 2x density.
    pub fn with_api_level(api_level: u32) -> Self {
        let density = 2.0;
        Self {
            api_level,
            density,
            status_bar_height: (24.0 * density) as u32,
            navigation_bar_height: (48.0 * density) as u32,
        }
    }

    /// Edge-to-edge era device (mandatorily transparent bars).
    pub fn api_35() -> Self {
        Self::with_api_level(35)
    }

    /// WindowInsets-capable device below the edge-to-edge mandate.
    pub fn api_30() -> Self {
        Self::with_api_level(30)
    }

    /// Legacy system-UI-flags device.
    pub fn api_24() -> Self {
        Self::with_api_level(24)
    }

    fn capabilities(&self) -> DeviceCapabilities {
        DeviceCapabilities {
            api_level: self.api_level,
            is_android_35_plus: self.api_level >= 35,
            supports_edge_to_edge: self.api_level >= 35,
            supports_window_insets: self.api_level >= 30,
            status_bar_height: self.status_bar_height,
            navigation_bar_height: self.navigation_bar_height,
        }
    }

    fn px_to_dp(&self, px: u32) -> u32 {
        (px as f32 / self.density).round() as u32
    }
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self::api_35()
    }
}

/// One platform setter invocation, as the simulated window saw it.
#[derive(Debug, Clone, PartialEq)]
pub enum AppliedCall {
    StatusBarAppearance(BarStyle),
    StatusBarColor(BarColor),
    NavigationBarAppearance(BarStyle),
    NavigationBarColor(BarColor),
    StatusBarVisibility(bool),
    NavigationBarVisibility(bool),
    EnterFullscreen(FullscreenMode),
    ExitFullscreen,
    ForceExitFullscreen,
    SystemDefaults,
    Overlay(bool),
}

/// Observed state of one bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSnapshot {
    pub style: BarStyle,
    pub color: Option<BarColor>,
    pub visible: bool,
}

impl Default for BarSnapshot {
    fn default() -> Self {
        Self {
            style: BarStyle::Default,
            color: None,
            visible: true,
        }
    }
}

/// Full observed window state, for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSnapshot {
    pub status: BarSnapshot,
    pub navigation: BarSnapshot,
    pub fullscreen: Option<FullscreenMode>,
    pub overlay: bool,
}

#[derive(Default)]
struct WindowState {
    status: BarSnapshot,
    navigation: BarSnapshot,
    fullscreen: Option<FullscreenMode>,
    overlay: bool,
    in_background: bool,
    journal: Vec<AppliedCall>,
}

/// In-memory [`SystemBarsController`].
pub struct HeadlessController {
    profile: DeviceProfile,
    state: RwLock<WindowState>,
}

impl HeadlessController {
    /// Controller simulating the default (API 35) device.
    pub fn new() -> Self {
        Self::with_profile(DeviceProfile::default())
    }

    /// Controller simulating the given device.
    pub fn with_profile(profile: DeviceProfile) -> Self {
        Self {
            profile,
            state: RwLock::new(WindowState::default()),
        }
    }

    /// The profile this controller simulates.
    pub fn profile(&self) -> DeviceProfile {
        self.profile
    }

    /// Every platform call recorded so far, in order.
    pub async fn journal(&self) -> Vec<AppliedCall> {
        self.state.read().await.journal.clone()
    }

    /// Clear the recorded call journal.
    pub async fn clear_journal(&self) {
        self.state.write().await.journal.clear();
    }

    /// Current observed window state.
    pub async fn snapshot(&self) -> WindowSnapshot {
        let state = self.state.read().await;
        WindowSnapshot {
            status: state.status.clone(),
            navigation: state.navigation.clone(),
            fullscreen: state.fullscreen,
            overlay: state.overlay,
        }
    }
}

impl Default for HeadlessController {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SystemBarsController for HeadlessController {
    async fn initialize(&self) -> Result<DeviceCapabilities> {
        debug!(api_level = self.profile.api_level, "headless window ready");
        Ok(self.profile.capabilities())
    }

    async fn apply_status_bar(&self, config: &BarConfig) -> Result<()> {
        let mut state = self.state.write().await;
        if let Some(style) = config.style {
            state.status.style = style;
            state.journal.push(AppliedCall::StatusBarAppearance(style));
        }
        if let Some(color) = &config.color {
            state.status.color = Some(color.clone());
            state.journal.push(AppliedCall::StatusBarColor(color.clone()));
        }
        Ok(())
    }

    async fn apply_navigation_bar(&self, config: &BarConfig) -> Result<()> {
        let mut state = self.state.write().await;
        if let Some(style) = config.style {
            state.navigation.style = style;
            state
                .journal
                .push(AppliedCall::NavigationBarAppearance(style));
        }
        if let Some(color) = &config.color {
            if self.profile.api_level >= 35 {
                // Navigation bar is mandatorily transparent on 35+; the
                // color request is acknowledged and dropped.
                debug!(color = %color, "ignoring navigation bar color on API 35+");
            } else {
                state.navigation.color = Some(color.clone());
                state
                    .journal
                    .push(AppliedCall::NavigationBarColor(color.clone()));
            }
        }
        Ok(())
    }

    async fn hide_status_bar(&self) -> Result<()> {
        let mut state = self.state.write().await;
        state.status.visible = false;
        state.journal.push(AppliedCall::StatusBarVisibility(false));
        Ok(())
    }

    async fn show_status_bar(&self) -> Result<()> {
        let mut state = self.state.write().await;
        state.status.visible = true;
        state.journal.push(AppliedCall::StatusBarVisibility(true));
        Ok(())
    }

    async fn hide_navigation_bar(&self) -> Result<()> {
        let mut state = self.state.write().await;
        state.navigation.visible = false;
        state
            .journal
            .push(AppliedCall::NavigationBarVisibility(false));
        Ok(())
    }

    async fn show_navigation_bar(&self) -> Result<()> {
        let mut state = self.state.write().await;
        state.navigation.visible = true;
        state
            .journal
            .push(AppliedCall::NavigationBarVisibility(true));
        Ok(())
    }

    async fn enter_fullscreen(&self, mode: FullscreenMode) -> Result<()> {
        let mut state = self.state.write().await;
        state.fullscreen = Some(mode);
        state.status.visible = false;
        state.navigation.visible = false;
        state.journal.push(AppliedCall::EnterFullscreen(mode));
        debug!(?mode, "entered fullscreen");
        Ok(())
    }

    async fn exit_fullscreen(&self) -> Result<()> {
        let mut state = self.state.write().await;
        state.fullscreen = None;
        state.status.visible = true;
        state.navigation.visible = true;
        state.journal.push(AppliedCall::ExitFullscreen);
        debug!("exited fullscreen");
        Ok(())
    }

    async fn force_exit_fullscreen(&self) -> Result<()> {
        // Unconditional: valid from any state, including "already normal".
        let mut state = self.state.write().await;
        state.fullscreen = None;
        state.status.visible = true;
        state.navigation.visible = true;
        state.journal.push(AppliedCall::ForceExitFullscreen);
        Ok(())
    }

    async fn is_fullscreen_active(&self) -> Result<bool> {
        Ok(self.state.read().await.fullscreen.is_some())
    }

    async fn apply_system_defaults(&self) -> Result<()> {
        let mut state = self.state.write().await;
        state.status.style = BarStyle::Default;
        state.status.color = None;
        state.navigation.style = BarStyle::Default;
        state.navigation.color = None;
        state.journal.push(AppliedCall::SystemDefaults);
        Ok(())
    }

    async fn set_overlay(&self, overlay: bool) -> Result<()> {
        if self.profile.api_level < 35 {
            return Err(BridgeError::PlatformUnsupported {
                capability: "overlay mode".to_string(),
                required_api: 35,
                actual_api: self.profile.api_level,
            });
        }

        let mut state = self.state.write().await;
        state.overlay = overlay;
        state.journal.push(AppliedCall::Overlay(overlay));
        debug!(overlay, "overlay mode updated");
        Ok(())
    }

    async fn insets(&self) -> Result<InsetsSnapshot> {
        let state = self.state.read().await;
        let top = if state.status.visible {
            self.profile.px_to_dp(self.profile.status_bar_height)
        } else {
            0
        };
        let bottom = if state.navigation.visible {
            self.profile.px_to_dp(self.profile.navigation_bar_height)
        } else {
            0
        };

        Ok(InsetsSnapshot {
            top,
            bottom,
            left: 0,
            right: 0,
            status_bar_visible: state.status.visible,
            navigation_bar_visible: state.navigation.visible,
        })
    }

    async fn on_app_pause(&self) -> Result<()> {
        self.state.write().await.in_background = true;
        Ok(())
    }

    async fn on_app_resume(&self) -> Result<()> {
        let mut state = self.state.write().await;
        if !state.in_background {
            return Ok(());
        }
        state.in_background = false;

        // A suspended window loses its flags; re-issue what we know.
        if let Some(mode) = state.fullscreen {
            state.journal.push(AppliedCall::EnterFullscreen(mode));
            debug!(?mode, "re-applied fullscreen after resume");
            return Ok(());
        }

        let status_style = state.status.style;
        let status_color = state.status.color.clone();
        let nav_style = state.navigation.style;
        let nav_color = state.navigation.color.clone();

        state
            .journal
            .push(AppliedCall::StatusBarAppearance(status_style));
        if let Some(color) = status_color {
            state.journal.push(AppliedCall::StatusBarColor(color));
        }
        state
            .journal
            .push(AppliedCall::NavigationBarAppearance(nav_style));
        if let Some(color) = nav_color {
            state.journal.push(AppliedCall::NavigationBarColor(color));
        }

        debug!("re-applied bar state after resume");
        Ok(())
    }
}
