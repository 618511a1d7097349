use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Command {
    /// Print the glyph tag of each action.
    Resolve {
        /// The last used device, e.g. "/XInputControllerWindows"
        #[clap(short, long)]
        device: Option<String>,
        /// The secondary device in co-op play
        #[clap(short, long)]
        secondary: Option<String>,
        /// Force the control type with this exact device pattern
        #[clap(long)]
        control_type: Option<String>,
        /// Action keys, e.g. "Fire" or "Player/Fire"
        #[clap(required = true)]
        actions: Vec<String>,
    },
    /// Replace `{Action}` placeholders in a text with glyph tags.
    Render {
        /// The last used device
        #[clap(short, long)]
        device: Option<String>,
        /// Force the control type with this exact device pattern
        #[clap(long)]
        control_type: Option<String>,
        /// The text to render
        text: String,
    },
    /// Read device ids from stdin, one per line, and re-render the text on
    /// every device or config change.
    Watch {
        /// The text to render
        text: String,
    },
    /// Report authoring problems in the config.
    Check,
    /// Resolve every action under every control type and list control paths
    /// without a glyph.
    Missing {
        /// Store the missing list in the config file. Comments in the file
        /// are not preserved.
        #[clap(short, long)]
        write: bool,
    },
}

/// Context-correct button glyphs for input actions.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Turn debugging information on
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The hints file [default: ~/.config/inputhints/hints.yaml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to run
    #[clap(subcommand)]
    pub command: Command,
}
