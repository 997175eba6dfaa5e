//! Dineboard: a terminal navigation shell for restaurant analytics dashboards

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod modules;
pub mod store;
pub mod ui;
