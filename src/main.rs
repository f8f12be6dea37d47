#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use theme::Theme;

/// Theme the app launches in, set from the command line
static INITIAL_THEME: OnceLock<Theme> = OnceLock::new();

/// Get the launch theme (set from command line or default light)
pub fn initial_theme() -> Theme {
    INITIAL_THEME.get().copied().unwrap_or(Theme::Light)
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ThemeArg {
    Light,
    Dark,
}

/// Folio - Eugene Musebe's portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - personal portfolio with a pointer-reactive dock")]
struct Args {
    /// Theme to launch in
    #[arg(long, value_enum, default_value = "light")]
    theme: ThemeArg,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let theme = match args.theme {
        ThemeArg::Light => Theme::Light,
        ThemeArg::Dark => Theme::Dark,
    };
    let _ = INITIAL_THEME.set(theme);

    tracing::info!("Starting folio in {:?} theme", theme);

    // Wide enough to land on the desktop layout (vertical dock) by default
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Eugene Musebe - Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
