pub mod art;
pub mod cli;
pub mod engine;
pub mod logging;
pub mod player;
pub mod renderer;
pub mod types;
