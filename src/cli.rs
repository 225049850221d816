// cli.rs - Command-line interface configuration
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneChoice {
    /// Hedge rows across a walkway
    Courtyard,
    /// Two crates on the camera's sight line
    Stacked,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "topdown-demo")]
#[command(about = "Headless top-down player and camera simulation", long_about = None)]
pub struct Cli {
    /// JSON settings file; defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 300)]
    pub frames: u64,

    /// Fixed frame time in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Follow the wall clock instead of a fixed frame time
    #[arg(long, default_value = "false")]
    pub realtime: bool,

    /// Disable occlusion fading
    #[arg(long = "no-fade", default_value = "false")]
    pub no_fade: bool,

    /// Hold the run modifier while walking
    #[arg(long, default_value = "false")]
    pub run: bool,

    #[arg(long, value_enum, default_value_t = SceneChoice::Courtyard)]
    pub scene: SceneChoice,
}
