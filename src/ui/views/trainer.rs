use crate::TrainerApp;
use crate::ui::layout::two_button_row;
use crate::ui::write_through;
use eframe::Frame;
use egui::{
    CentralPanel, Color32, Context, CornerRadius, Margin, RichText, ScrollArea, TextEdit,
};

pub fn ui_trainer(app: &mut TrainerApp, ctx: &Context, frame: &mut Frame) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let estimated_h = 460.0;
        let extra_space = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(extra_space / 2.0);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(Margin::symmetric(24, 16))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_width(panel_width);

                    let question = app.current_question();
                    let is_answered = app.current_is_answered();

                    // Cabecera: id + tema
                    ui.horizontal(|ui| {
                        if !question.is_placeholder() {
                            ui.heading(&question.id);
                        }
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| topic_badge(ui, question.topic_label()),
                        );
                    });
                    ui.add_space(6.0);

                    // Enunciado con scroll acotado
                    ScrollArea::vertical()
                        .id_salt("question_prompt")
                        .max_height(150.0)
                        .show(ui, |ui| {
                            ui.with_layout(
                                egui::Layout::top_down(egui::Align::Min),
                                |ui| {
                                    ui.label(
                                        RichText::new(question.question.trim_end()).size(16.0),
                                    );
                                },
                            );
                        });

                    ui.add_space(8.0);

                    // Borrador del usuario; no se persiste
                    ui.add(
                        TextEdit::multiline(&mut app.draft_answer)
                            .hint_text("Write your answer here...")
                            .desired_rows(6)
                            .desired_width(panel_width),
                    );

                    ui.add_space(8.0);

                    let reveal_label = if is_answered {
                        "View Again"
                    } else {
                        "Show Solution"
                    };
                    let (reveal, next) =
                        two_button_row(ui, panel_width, reveal_label, "Next Question");

                    if reveal && app.mark_current_answered() {
                        write_through(app, frame);
                    }
                    if next {
                        app.advance();
                    }

                    // Tras las acciones la pregunta actual puede haber cambiado
                    let current = app.current_question();
                    if app.current_is_answered() {
                        ui.add_space(10.0);
                        solution_panel(ui, app.dark_mode, &current.solution);
                    }
                });
            });

        ui.add_space(extra_space / 2.0);
    });
}

fn topic_badge(ui: &mut egui::Ui, topic: &str) {
    let (fill, text) = if ui.visuals().dark_mode {
        (Color32::from_rgb(30, 58, 95), Color32::from_rgb(170, 200, 240))
    } else {
        (Color32::from_rgb(191, 219, 254), Color32::from_rgb(30, 64, 140))
    };
    egui::Frame::default()
        .fill(fill)
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(RichText::new(topic).small().strong().color(text));
        });
}

fn solution_panel(ui: &mut egui::Ui, dark_mode: bool, solution: &str) {
    let fill = if dark_mode {
        Color32::from_rgb(22, 58, 28)
    } else {
        Color32::from_rgb(234, 248, 235)
    };
    egui::Frame::default()
        .fill(fill)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                ui.label(RichText::new("Solution:").strong());
                ui.add_space(4.0);
                ui.label(solution.trim_end());
            });
        });
}
