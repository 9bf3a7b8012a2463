//! Tray utility that lists the droplets on a DigitalOcean account and opens
//! the first one's control panel page when clicked.
//!
//! The flow is: [`config::Config::load`] → [`api::DropletClient::authenticate`]
//! → [`api::list_all`] → [`app::run`] with a [`tray::Tray`].

pub mod api;
pub mod app;
pub mod config;
pub mod menu;
pub mod models;
pub mod region;
pub mod tray;
pub mod utils;
