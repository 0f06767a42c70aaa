// src/gui/components/champion_list.rs
//
// Left panel: filterable list of store keys. Clicking a key shows it.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Champions");

    ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.list_filter)
            .hint_text("filter"),
    );
    ui.separator();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let filter = app.state.gui.list_filter.trim().to_lowercase();
    let mut clicked: Option<String> = None;

    egui::ScrollArea::vertical()
        .id_salt("champion_list_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for key in app.keys.iter().filter(|k| filter.is_empty() || k.to_lowercase().contains(&filter)) {
                let selected = app.state.gui.selected.as_deref() == Some(key.as_str());
                if ui.selectable_label(selected, key).clicked() {
                    clicked = Some(key.clone());
                }
            }
        });

    if let Some(key) = clicked {
        logd!("UI: list click '{}'", key);
        app.state.gui.query = key.clone();
        app.lookup(&key);
    }
}
