use crate::QuizApp;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::Context;

pub fn ui_setup(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 320.0, 600.0, |ui| {
        let panel_width = ui.available_width();
        let bank_name = app
            .session
            .selected_bank
            .clone()
            .unwrap_or_else(|| "?".to_string());
        let total = app.active_bank_size();
        let min_q = app.min_question_count(total);
        let max_q = app.max_question_count(total);

        ui.vertical_centered(|ui| {
            ui.heading("Test Setup");
            ui.add_space(6.0);
            ui.label(format!("Configure: {bank_name} ({total} questions)"));
        });
        ui.add_space(12.0);

        ui.checkbox(&mut app.setup.enable_timer, "Enable Timer?");
        if app.setup.enable_timer {
            ui.add(
                egui::Slider::new(&mut app.setup.timer_minutes, 1..=120)
                    .text("Test Duration (minutes)"),
            );
        }

        ui.add_space(6.0);
        ui.add(
            egui::Slider::new(&mut app.setup.question_count, min_q..=max_q)
                .text("Number of Questions"),
        );

        ui.add_space(16.0);
        let (start, back) = two_button_row(ui, panel_width, "🚀 Start Test", "🏠 Back to Home");
        if start {
            app.confirm_launch();
        }
        if back {
            app.cancel_setup();
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });
}
