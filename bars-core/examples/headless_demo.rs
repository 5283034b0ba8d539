//! System-bars walkthrough against the in-memory controller.
//!
//! Run with:
//! ```bash
//! # Pretty format (default in debug)
//! cargo run -p bars-core --example headless_demo
//!
//! # JSON format
//! cargo run -p bars-core --example headless_demo -- json
//! ```

use std::env;
use std::sync::Arc;

use bars_core::logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
use bars_core::{config::SystemBarsConfig, SystemBars};
use bars_headless::{DeviceProfile, HeadlessController};
use bars_traits::{BarColor, BarConfig, BarStyle, FullscreenMode, SystemBarsRequest};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let format = match env::args().nth(1).as_deref() {
        Some("json") => LogFormat::Json,
        Some("compact") => LogFormat::Compact,
        _ => LogFormat::default(),
    };

    let config = LoggingConfig::default()
        .with_format(format)
        .with_level(LogLevel::Debug);
    init_logging(config)?;

    let controller = Arc::new(HeadlessController::with_profile(DeviceProfile::api_35()));
    let bars = SystemBars::new(
        SystemBarsConfig::builder()
            .controller(controller.clone())
            .build()?,
    );

    let caps = bars.initialize().await?;
    info!(
        api_level = caps.api_level,
        edge_to_edge = caps.supports_edge_to_edge,
        "initialized"
    );

    // Unified request: dark content everywhere, status bar tinted. The
    // navigation color would be dropped on this API 35 profile anyway.
    bars.set_system_bars_style(&SystemBarsRequest {
        style: Some(BarStyle::Dark),
        status_bar: Some(BarConfig {
            style: None,
            color: Some(BarColor::parse("#111827")?),
        }),
        ..Default::default()
    })
    .await?;

    let insets = bars.get_insets().await?;
    info!(top = insets.top, bottom = insets.bottom, "insets before fullscreen");

    bars.enter_fullscreen(FullscreenMode::Immersive).await?;
    info!(
        active = bars.is_fullscreen_active().await?,
        "entered fullscreen"
    );

    bars.exit_fullscreen(Some(&SystemBarsRequest {
        style: Some(BarStyle::Light),
        ..Default::default()
    }))
    .await?;

    let insets = bars.get_insets().await?;
    info!(top = insets.top, bottom = insets.bottom, "insets after restore");

    info!(calls = controller.journal().await.len(), "platform calls issued");
    Ok(())
}
