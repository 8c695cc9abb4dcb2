#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! Kiosk Slideshow
//!
//! Desktop shell around the slideshow settings form. Tries the wgpu renderer
//! first and falls back to glow (OpenGL) on machines where it fails.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kiosk_slideshow::app::KioskApp;

const APP_TITLE: &str = "Kiosk Slideshow";

fn main() -> Result<()> {
    // File logging
    let file_appender = tracing_appender::rolling::never(".", "kiosk.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Starting {}", APP_TITLE);

    let next = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("Application panic: {}", info);
        next(info);
    }));

    tracing::info!("Attempting to start with wgpu renderer");
    let wgpu_err = match run_with_renderer(eframe::Renderer::Wgpu) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };
    tracing::warn!("wgpu renderer failed: {}. Trying glow (OpenGL) fallback...", wgpu_err);

    if let Err(glow_err) = run_with_renderer(eframe::Renderer::Glow) {
        tracing::error!("Both wgpu and glow renderers failed");
        tracing::error!("wgpu error: {}", wgpu_err);
        tracing::error!("glow error: {}", glow_err);

        show_graphics_error(&wgpu_err.to_string(), &glow_err.to_string());
        return Err(anyhow::anyhow!("No graphics renderer could be initialized"));
    }

    Ok(())
}

/// Run the application with the specified renderer
fn run_with_renderer(renderer: eframe::Renderer) -> Result<()> {
    let renderer_name = match renderer {
        eframe::Renderer::Wgpu => "wgpu",
        eframe::Renderer::Glow => "glow",
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([640.0, 420.0])
            .with_title(APP_TITLE),
        renderer,
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |cc| {
            setup_egui_style(cc);
            tracing::info!("Successfully initialized {} renderer", renderer_name);
            let app: KioskApp = KioskApp::new(cc);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
}

fn setup_egui_style(cc: &eframe::CreationContext<'_>) {
    egui_extras::install_image_loaders(&cc.egui_ctx);

    let mut style = (*cc.egui_ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);

    use egui::CornerRadius;
    style.visuals.widgets.inactive.corner_radius = CornerRadius::same(6);
    style.visuals.widgets.hovered.corner_radius = CornerRadius::same(6);
    style.visuals.widgets.active.corner_radius = CornerRadius::same(6);
    style.visuals.window_corner_radius = CornerRadius::same(10);

    cc.egui_ctx.set_style(style);
}

/// Native error dialog for when no renderer starts
fn show_graphics_error(wgpu_err: &str, glow_err: &str) {
    let message = format!(
        "{} could not initialize a graphics renderer.\n\n\
        wgpu (DirectX 12 / Vulkan / Metal): {}\n\
        glow (OpenGL 2.0+): {}\n\n\
        Details were written to kiosk.log.",
        APP_TITLE,
        truncate_error(wgpu_err, 80),
        truncate_error(glow_err, 80),
    );
    eprintln!("{}", message);

    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(format!("{} - Graphics Error", APP_TITLE))
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// Truncate on a char boundary
fn truncate_error(err: &str, max_chars: usize) -> String {
    match err.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &err[..idx]),
        None => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_error() {
        assert_eq!(truncate_error("short", 10), "short");
        assert_eq!(truncate_error("abcdefghij", 4), "abcd...");
        assert_eq!(truncate_error("ñññññ", 2), "ññ...");
    }
}
