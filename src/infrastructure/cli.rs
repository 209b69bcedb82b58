use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 60.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "URL",
        help = "Base address of the contact backend (overrides the config file)",
        env = "FOLIO_BACKEND_URL"
    )]
    pub backend_url: Option<String>,

    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Load portfolio content from a JSON5 file instead of the built-in set"
    )]
    pub content: Option<PathBuf>,
}
