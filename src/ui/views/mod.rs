pub mod home;
pub mod notes;
pub mod results;
pub mod setup;
pub mod test;
