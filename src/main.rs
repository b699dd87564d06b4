use eframe::egui;

use showreel::config::PageConfig;

mod app;
mod ui;

use app::PortfolioApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = PageConfig::for_build();
    log::info!("starting showreel for {}", config.site_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Eyal Moskovitch | Motion Designer",
        options,
        Box::new(|_cc| Ok(Box::new(PortfolioApp::new(config)))),
    )
}
