use crate::QuizApp;
use crate::ui::layout::simple_panel;
use egui::{Color32, Context, ProgressBar, ScrollArea};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    simple_panel(ctx, 650.0, |ui| {
        let panel_width = ui.available_width();
        let Some(report) = app.score_report() else {
            ui.label("No test data available");
            if ui.button("🏠 Back to Home").clicked() {
                app.new_session();
            }
            return;
        };

        ui.vertical_centered(|ui| {
            ui.heading("📊 Test Results");
        });
        ui.add_space(10.0);

        ui.group(|ui| {
            ui.set_width(panel_width - 24.0);
            ui.strong("Test Summary");
            ui.horizontal(|ui| {
                ui.label(format!("Total Questions: {}", report.total));
                ui.separator();
                ui.label(format!("Correct Answers: {}", report.correct_count));
                ui.separator();
                ui.label(format!("Your Score: {:.1}%", report.percentage()));
            });
            ui.add(ProgressBar::new(report.percentage() / 100.0));
        });

        ui.add_space(10.0);
        ui.strong("Detailed Review");
        ui.add_space(5.0);

        ScrollArea::vertical().show(ui, |ui| {
            for row in app.review_rows() {
                ui.group(|ui| {
                    ui.set_width(panel_width - 24.0);
                    ui.strong(format!("Q{}: {}", row.number_1based, row.question_english));
                    if let Some(hindi) = &row.question_hindi {
                        ui.weak(hindi);
                    }
                    if row.is_correct {
                        ui.colored_label(
                            Color32::LIGHT_GREEN,
                            format!("✔ Your Answer: {}", row.user_label),
                        );
                    } else {
                        ui.colored_label(
                            Color32::LIGHT_RED,
                            format!("❌ Your Answer: {}", row.user_label),
                        );
                        ui.colored_label(
                            Color32::LIGHT_BLUE,
                            format!("💡 Correct Answer: {}", row.correct_label),
                        );
                    }
                });
                ui.add_space(6.0);
            }
        });

        ui.add_space(10.0);
        if ui.button("🏠 Take Another Test").clicked() {
            app.new_session();
        }
    });
}
