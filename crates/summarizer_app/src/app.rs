use std::time::Duration;

use summarizer_core::{update, AppState, Msg};
use summarizer_engine::UploadSettings;

use crate::effects::EffectRunner;
use crate::ui;

pub struct SummarizerApp {
    state: AppState,
    runner: EffectRunner,
}

impl SummarizerApp {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
            runner: EffectRunner::new(UploadSettings::default()),
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);
    }
}

impl eframe::App for SummarizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Settlements arrive from the engine thread between frames.
        while let Some(msg) = self.runner.poll() {
            self.dispatch(msg);
        }

        let view = self.state.view();
        for msg in ui::render(ctx, &view) {
            self.dispatch(msg);
        }

        if self.state.consume_dirty() {
            ctx.request_repaint();
        }
        // Keep frames coming while an upload is outstanding, so the spinner
        // animates and the settlement event is picked up promptly.
        if self.state.in_flight() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
