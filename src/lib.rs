pub mod answer;
pub mod app;
pub mod model;
pub mod sampler;
pub mod scorer;
pub mod session;
pub mod storage;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
