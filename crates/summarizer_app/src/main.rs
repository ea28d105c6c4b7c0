mod app;
mod effects;
mod logging;
mod ui;

fn main() -> eframe::Result<()> {
    logging::initialize(logging::LogDestination::File);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([560.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Discharge Report Summarizer",
        options,
        Box::new(|_cc| Ok(Box::new(app::SummarizerApp::new()))),
    )
}
