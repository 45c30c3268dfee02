use ballistic_trajectory::logging;
use clap::Parser;
use macroquad::prelude::Conf;

mod app;
mod canvas;
mod constants;
mod controls;
mod settings;
mod state;

use settings::ViewerSettings;

fn window_conf() -> Conf {
    app::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    let settings = ViewerSettings::parse();
    logging::init(settings.verbose);
    app::run(settings).await;
}
