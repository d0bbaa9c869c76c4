//! DevQnA Desktop Application
//!
//! A Stack-Overflow-style question-and-answer client backed by a remote BaaS.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod format;
mod hooks;
mod services;
mod state;
mod views;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("devqna=debug".parse().expect("valid directive")),
        )
        .init();

    tracing::info!("Starting DevQnA...");

    dioxus::launch(app::App);
}
