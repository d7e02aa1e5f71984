//! Application service layer - sizing use case, config, export, delivery

pub mod app;
pub mod config;
pub mod delivery;
pub mod export;
pub mod repository;
