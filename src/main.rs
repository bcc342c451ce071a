use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use sl::{
    art,
    cli::Cli,
    player::{Player, PlayerConfig},
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    sl::logging::init();

    for word in cli.acknowledgments() {
        println!("{word}");
    }

    let mut player = Player::new(art::d51(), PlayerConfig::default());
    player.play()?;

    info!(
        phase = ?player.state().phase(),
        offset = player.state().offset(),
        "animation over"
    );
    Ok(())
}
