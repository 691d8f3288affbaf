pub mod booking;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod route;
pub mod trace;
pub mod ui;
