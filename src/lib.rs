pub mod app;
pub mod data;
pub mod export;
pub mod sample;
pub mod state;
pub mod theme;
pub mod ui;
