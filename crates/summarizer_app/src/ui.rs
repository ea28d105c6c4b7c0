use summarizer_core::{AppViewModel, Msg, PdfSelection};

/// Renders the single upload form and returns the messages the user's
/// interactions produced this frame.
pub fn render(ctx: &egui::Context, view: &AppViewModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Discharge Report Summarizer");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Choose PDF…").clicked() {
                if let Some(file) = pick_pdf() {
                    msgs.push(Msg::FileSelected(file));
                }
            }
            match &view.selected_file_name {
                Some(name) => ui.label(name),
                None => ui.weak("No file selected"),
            };
        });

        ui.add_space(4.0);
        if view.in_flight {
            // The submit control is replaced by a spinner until settlement.
            ui.add(egui::Spinner::new());
        } else if ui.button("Upload & Summarize").clicked() {
            msgs.push(Msg::SubmitClicked);
        }

        if let Some(validation) = &view.validation {
            ui.colored_label(ui.visuals().warn_fg_color, validation);
        }

        if let Some(error) = &view.error {
            ui.add_space(8.0);
            ui.colored_label(ui.visuals().error_fg_color, error);
        }

        if let Some(summary) = &view.summary {
            ui.add_space(8.0);
            ui.separator();
            ui.heading("Summary");
            egui::ScrollArea::vertical().show(ui, |ui| {
                // Plain text, verbatim: no markup rendering.
                ui.label(summary);
            });
        }
    });

    msgs
}

fn pick_pdf() -> Option<PdfSelection> {
    let path = rfd::FileDialog::new()
        .add_filter("PDF documents", &["pdf"])
        .pick_file()?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.pdf".to_string());
    Some(PdfSelection { path, file_name })
}
