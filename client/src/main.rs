use std::{env, io, time::Duration};

use anyhow::Context;
use config::Config;
use liblife::{render::RenderStyle, Game};
use sleeper::Sleeper;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod frame;
mod sleeper;

const FRAME_INTERVAL: Duration = Duration::from_secs(1);

fn main() -> anyhow::Result<()> {
    let max_level = if env::var_os("LIFE_LOG_DEBUG").is_some() {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // Logs go to stderr so stdout only carries boards.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match env::args().nth(1) {
        Some(config_path) => Config::load(config_path)?,
        None => Config::default(),
    };

    let seed = config.seed_or_now();
    info!(?config, seed, "Starting simulation");

    let mut game = Game::new_seeded(&config.game, seed);
    let style = if config.color {
        RenderStyle::Colored
    } else {
        RenderStyle::Plain
    };

    let mut sleeper = Sleeper::new(FRAME_INTERVAL);
    let mut stdout = io::stdout().lock();

    loop {
        frame::write_next_frame(&mut game, style, &mut stdout)
            .with_context(|| format!("Couldn't print generation {}", game.generation()))?;

        sleeper.sleep();
    }
}
