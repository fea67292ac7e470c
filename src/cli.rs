// Author: Dustin Pilgrim
// License: MIT

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "torpor",
    version = env!("CARGO_PKG_VERSION"),
    about = "Torpor power menu daemon"
)]
pub struct Args {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, action)]
    pub verbose: bool,

    #[arg(long, action)]
    pub no_console: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(about = "Tell the daemon the power menu was opened")]
    Open,

    #[command(about = "Tell the daemon the power menu was closed")]
    Close,

    #[command(about = "Activate a power button by name")]
    Click {
        action: String,
    },

    #[command(
        about = "Answer an open confirmation dialog",
        disable_help_flag = true
    )]
    Answer {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    #[command(about = "Report the session mode (user, locked or greeter)")]
    Mode {
        mode: String,
    },

    #[command(about = "Report whether the orientation lock button is shown or hidden")]
    Orientation {
        state: String,
    },

    #[command(about = "Display current menu and capability state")]
    Status {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Re-enable a disabled menu")]
    Enable,

    #[command(about = "Disable the menu and hide every button")]
    Disable,

    #[command(about = "Reload the configuration without restarting Torpor")]
    Reload,

    #[command(about = "Stop the running Torpor daemon")]
    Stop,
}
