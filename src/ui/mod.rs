mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::Screen;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::{Duration, Instant};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // The timer is polled on every repaint; expiry routes to Results
        // exactly like a manual submit, and the view below picks that up
        // within the same frame.
        if self.session.screen == Screen::Test {
            self.poll_timer(Instant::now());
            if self.session.timer_minutes > 0 && !self.session.submitted {
                ctx.request_repaint_after(Duration::from_secs(1));
            }
        }

        // ABORT BUTTON (only visible while a test is running)
        if self.session.screen == Screen::Test {
            top_panel(self, ctx);
        }

        // BOTTOM PANEL: dark or light theme
        bottom_panel(ctx);

        // Dispatch by screen to the view functions
        match self.session.screen {
            Screen::Home => views::home::ui_home(self, ctx),
            Screen::Setup => views::setup::ui_setup(self, ctx),
            Screen::Test => views::test::ui_test(self, ctx),
            Screen::Notes => views::notes::ui_notes(self, ctx),
            Screen::Results => views::results::ui_results(self, ctx),
        }
    }
}
