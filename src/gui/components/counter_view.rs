// src/gui/components/counter_view.rs
//
// Central panel: one record. Hard counters as a two-column table, general
// counters as a wrapped line.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::NO_INFO, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(selected) = app.state.gui.selected.clone() else {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("왼쪽 목록에서 챔피언을 선택하세요").weak());
        });
        return;
    };

    let Some(rec) = app.shown.clone() else {
        ui.heading(format!("챔피언: {}", selected));
        ui.label(format!("'{}'에 대한 정보가 없습니다.", selected));
        return;
    };

    ui.heading(format!("챔피언: {}", selected));
    if rec.champion != selected {
        ui.label(RichText::new(format!("→ {}", rec.champion)).weak());
    }
    ui.add_space(6.0);

    ui.label(RichText::new("하드 카운터").strong());
    if rec.hard_counters.is_empty() {
        ui.label(NO_INFO);
    } else {
        let row_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
        TableBuilder::new(ui)
            .id_salt(("hard_counters", rec.champion.as_str()))
            .striped(true)
            .max_scroll_height(280.0)
            .column(Column::initial(110.0).at_least(60.0).resizable(true).clip(true))
            .column(Column::remainder().clip(true))
            .header(22.0, |mut header| {
                header.col(|ui| { ui.strong("이름"); });
                header.col(|ui| { ui.strong("이유"); });
            })
            .body(|mut body| {
                for hc in &rec.hard_counters {
                    body.row(row_h, |mut row| {
                        row.col(|ui| { ui.label(&hc.name); });
                        row.col(|ui| {
                            ui.label(&hc.reason).on_hover_text(&hc.reason);
                        });
                    });
                }
            });
    }

    ui.add_space(8.0);
    ui.separator();

    ui.label(RichText::new("일반 카운터").strong());
    if rec.general_counters.is_empty() {
        ui.label(NO_INFO);
    } else {
        ui.horizontal_wrapped(|ui| {
            ui.label(rec.general_counters.join(", "));
        });
    }
}
