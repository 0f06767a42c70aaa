// src/gui/components/crawl_bar.rs
//
// Bottom bar: saved page + champion name → background crawl, then status.

use eframe::egui::{self, widgets::Spinner};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(2.0);
    ui.horizontal(|ui| {
        ui.label("HTML:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.crawl_html_path)
                .hint_text("saved page .html")
                .font(egui::TextStyle::Monospace)
                .desired_width(260.0),
        );
        ui.label("Champion:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.crawl_champion)
                .desired_width(120.0),
        );

        ui.checkbox(&mut app.state.options.extract.classifier.summarize, "Summarize");

        let crawl = ui.add_enabled(!app.running, egui::Button::new("Crawl"));
        if crawl.clicked() {
            let ctx = ui.ctx().clone();
            app.start_crawl(&ctx);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
            ui.ctx().request_repaint_after(std::time::Duration::from_millis(100));
        }
    });
    ui.label(app.status_text());
    ui.add_space(2.0);
}
