use crate::QuizApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::simple_panel;
use egui::{Context, ScrollArea};

pub fn ui_home(app: &mut QuizApp, ctx: &Context) {
    simple_panel(ctx, 650.0, |ui| {
        let panel_width = ui.available_width();
        ui.vertical_centered(|ui| {
            ui.heading("✈ Airport Test Prep");
        });
        ui.add_space(10.0);

        ui.collapsing("➕ Add New Test", |ui| {
            ui.horizontal(|ui| {
                ui.label("Test Name:");
                ui.text_edit_singleline(&mut app.add_bank_form.name);
            });
            ui.horizontal(|ui| {
                ui.label("CSV file path:");
                ui.text_edit_singleline(&mut app.add_bank_form.csv_path);
            });
            if ui.button("📤 Add Test").clicked() {
                app.add_bank();
            }
        });

        ui.add_space(10.0);
        ui.strong("Available Tests");
        ui.add_space(5.0);

        ScrollArea::vertical().show(ui, |ui| {
            for card in app.bank_cards() {
                ui.group(|ui| {
                    ui.set_width(panel_width - 24.0);
                    ui.label(&card.name);
                    ui.horizontal(|ui| {
                        let btn_w = (panel_width - 48.0) / 3.0;
                        if big_list_button(ui, "▶ Take Quiz".to_string(), btn_w, 32.0, true) {
                            app.take_quiz(&card.name);
                        }
                        if big_list_button(ui, "📖 Study Notes".to_string(), btn_w, 32.0, true) {
                            app.study_notes(&card.name);
                        }
                        if big_list_button(
                            ui,
                            "🗑 Delete".to_string(),
                            btn_w,
                            32.0,
                            card.deletable,
                        ) {
                            app.remove_bank(&card.name);
                        }
                    });
                });
                ui.add_space(6.0);
            }
        });

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });
}
