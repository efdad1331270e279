pub mod event;
pub mod main;
pub mod render;
pub mod run_effect;
