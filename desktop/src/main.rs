mod app;
mod config;

use app::MultitainmentApp;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("multitainment=info,mt_core=info")),
        )
        .init();

    let config = config::load_or_default();
    tracing::info!(
        min = config.quiz.range.min(),
        max = config.quiz.range.max(),
        count = config.quiz.count.get(),
        seeded = config.seed.is_some(),
        "starting"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 480.0])
            .with_min_inner_size([350.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Multitainment",
        options,
        Box::new(move |cc| Ok(Box::new(MultitainmentApp::new(cc, config)))),
    )
}
