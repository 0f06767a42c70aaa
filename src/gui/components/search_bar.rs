// src/gui/components/search_bar.rs
//
// Top bar: lookup field, lookup button, store reload.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("챔피언:");
        let field = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.query)
                .hint_text("이름 입력")
                .desired_width(220.0),
        );
        let enter = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("조회").clicked() || enter {
            let query = app.state.gui.query.clone();
            app.lookup(&query);
        }

        ui.separator();

        if ui.button("⟳").on_hover_text("Reload store file").clicked() {
            logf!("UI: reload {}", app.cache.path().display());
            app.reload();
        }
        ui.label(
            egui::RichText::new(app.cache.path().display().to_string())
                .monospace()
                .weak(),
        );
    });
}
