mod app;
mod components;
mod config;
mod content;
mod error;
mod message;
mod model;
mod views;

use crate::app::Flags;

pub fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let offline = args.contains("--offline");
    let image = args
        .finish()
        .into_iter()
        .next()
        .map(std::path::PathBuf::from);

    app::run(Flags { image, offline })
}
