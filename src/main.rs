use airport_quiz::QuizApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Airport Test Prep",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new()?))),
    )
}
