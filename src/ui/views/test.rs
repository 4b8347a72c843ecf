use crate::QuizApp;
use crate::ui::layout::{simple_panel, two_button_row};
use egui::{Context, ProgressBar, ScrollArea};
use std::time::Instant;

fn timer_line(app: &QuizApp, ui: &mut egui::Ui) {
    if app.session.timer_minutes == 0 {
        return;
    }
    if let Some(remaining) = app.session.remaining_seconds(Instant::now()) {
        let total = app.session.timer_minutes as u64 * 60;
        let (mins, secs) = (remaining / 60, remaining % 60);
        ui.add(ProgressBar::new(remaining as f32 / total as f32));
        ui.label(format!("⏳ Time remaining: {mins:02}:{secs:02}"));
    }
}

pub fn ui_test(app: &mut QuizApp, ctx: &Context) {
    simple_panel(ctx, 650.0, |ui| {
        let panel_width = ui.available_width();
        let current = app.session.current_question;
        let total = app.session.total_questions();

        let Some(record) = app.current_record().cloned() else {
            ui.label("No test data available");
            if ui.button("🏠 Back to Home").clicked() {
                app.new_session();
            }
            return;
        };

        ui.horizontal(|ui| {
            ui.strong(format!("Question: {}/{total}", current + 1));
        });
        timer_line(app, ui);
        ui.add_space(8.0);

        ui.group(|ui| {
            ui.set_width(panel_width - 24.0);
            ui.strong(&record.question.english);
            if let Some(hindi) = &record.question.hindi {
                ui.weak(hindi);
            }
        });
        ui.add_space(8.0);

        ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
            let selected = app.current_answer();
            for row in app.current_option_rows() {
                if ui
                    .radio(selected == Some(row.letter), row.label())
                    .clicked()
                {
                    app.select_answer(row.letter);
                }
            }
        });

        ui.add_space(12.0);
        let last = app.on_last_question();
        let submit_label = if last { "✅ Submit Test" } else { "Next ➡" };
        let (previous, forward) = two_button_row(ui, panel_width, "⬅ Previous", submit_label);
        if previous && current > 0 {
            app.navigate(-1);
        }
        if forward {
            if last {
                app.submit_test();
            } else {
                app.navigate(1);
            }
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });
}
