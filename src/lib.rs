pub mod catalog;
pub mod config;
pub mod db;
pub mod defaults;
pub mod doc;
pub mod dto;
pub mod entity;
pub mod error;
pub mod models;
pub mod normalize;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod validation;
