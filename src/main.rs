use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use log::info;
use std::sync::Arc;

mod booking;
mod booking_client;
mod commands;
mod components;
mod config;
mod dialog_state;
mod error;
mod notifications;
mod phone;

use booking_client::{BookingBackend, HttpBookingClient};
use components::App;
use config::BookingConfig;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    env_logger::init();

    info!("Starting booking client");

    let config = BookingConfig::from_env()?;
    let client = HttpBookingClient::new(&config)?;
    info!("Bookings go to {}", client.endpoint());
    let backend: Arc<dyn BookingBackend> = Arc::new(client);

    // Launch the Dioxus desktop application
    LaunchBuilder::desktop()
        .with_cfg(
            Config::default()
                .with_window(WindowBuilder::new().with_title("Book an Appointment"))
                .with_menu(None),
        )
        .with_context(config)
        .with_context(backend)
        .launch(App);

    Ok(())
}
