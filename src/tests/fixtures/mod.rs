pub mod clock;
pub mod commands;
pub mod projects;
pub mod ratings;
pub mod state;
