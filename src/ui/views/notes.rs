use crate::QuizApp;
use crate::ui::layout::simple_panel;
use egui::{Context, ScrollArea};

pub fn ui_notes(app: &mut QuizApp, ctx: &Context) {
    simple_panel(ctx, 650.0, |ui| {
        let panel_width = ui.available_width();
        let bank_name = app
            .session
            .selected_bank
            .clone()
            .unwrap_or_else(|| "?".to_string());

        ui.vertical_centered(|ui| {
            ui.heading(format!("📖 Study Notes: {bank_name}"));
        });
        ui.add_space(10.0);

        ScrollArea::vertical().show(ui, |ui| {
            for card in app.note_cards() {
                ui.group(|ui| {
                    ui.set_width(panel_width - 24.0);
                    ui.strong(format!("Q{}: {}", card.index + 1, card.question_english));
                    if let Some(hindi) = &card.question_hindi {
                        ui.weak(hindi);
                    }
                    ui.add_space(4.0);
                    for row in &card.options {
                        ui.label(row.label());
                    }
                    ui.add_space(4.0);
                    if card.revealed {
                        ui.colored_label(
                            egui::Color32::LIGHT_GREEN,
                            format!("💡 Answer: {}", card.answer_label),
                        );
                    } else if ui.button("Reveal answer").clicked() {
                        app.reveal_option(card.index);
                    }
                });
                ui.add_space(6.0);
            }
        });

        ui.add_space(10.0);
        if ui.button("🏠 Return to Home").clicked() {
            app.leave_notes();
        }
    });
}
