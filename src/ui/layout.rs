use crate::TrainerApp;
use crate::model::FilterMode;
use crate::ui::write_through;
use eframe::Frame;
use egui::{Align, Button, ComboBox, Context, Layout, TopBottomPanel, Ui};

pub fn top_panel(app: &mut TrainerApp, ctx: &Context) {
    TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(app.progress().label());
            ui.separator();

            let mut only_unanswered = app.filter_mode == FilterMode::UnansweredOnly;
            if ui
                .checkbox(&mut only_unanswered, "Show only unanswered")
                .changed()
            {
                let mode = if only_unanswered {
                    FilterMode::UnansweredOnly
                } else {
                    FilterMode::All
                };
                app.set_filter_mode(mode);
            }

            // Selector de preguntas a la derecha
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                question_selector(app, ui);
            });
        });
    });
}

fn question_selector(app: &mut TrainerApp, ui: &mut Ui) {
    let rows = app.selector_rows();
    let selected = rows
        .get(app.current_index)
        .map(|row| row.label())
        .unwrap_or_else(|| "No questions left!".to_owned());

    ComboBox::from_id_salt("question_selector")
        .selected_text(selected)
        .width(240.0)
        .show_ui(ui, |ui| {
            for row in &rows {
                if ui
                    .selectable_label(row.idx == app.current_index, row.label())
                    .clicked()
                {
                    app.jump_to(row.idx);
                }
            }
        });
}

// ----------- PANEL INFERIOR: TEMA OSCURO O CLARO -----------
pub fn bottom_panel(app: &mut TrainerApp, ctx: &Context, frame: &mut Frame) {
    TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let mut dark = app.dark_mode;
            if ui.checkbox(&mut dark, "🌙 Dark mode").changed() {
                app.set_dark_mode(dark);
                app.apply_theme(ctx);
                write_through(app, frame);
            }
        });
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho
/// dado. Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        // espacio para centrar la fila en su panel
        ui.add_space((ui.available_width() - panel_width) / 2.0);
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}
