use clap::{ArgGroup, Parser};

use crate::config::{Settings, StartView};

/// Terminal landing page and decorative music player.
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(name = "vinyl", version)]
#[command(group(ArgGroup::new("view").args(["player", "landing"])))]
pub struct Cli {
    /// Start on the music player.
    #[arg(long)]
    pub player: bool,

    /// Start on the landing page (default).
    #[arg(long)]
    pub landing: bool,

    /// Print the default settings as TOML and exit.
    #[arg(long)]
    pub print_default_config: bool,
}

impl Cli {
    /// View requested on the command line, if any.
    pub fn start_view(&self) -> Option<StartView> {
        match (self.player, self.landing) {
            (true, _) => Some(StartView::Player),
            (_, true) => Some(StartView::Landing),
            _ => None,
        }
    }
}

/// Command-line flags win over the config file and environment.
pub fn apply_cli(settings: &mut Settings, cli: &Cli) {
    if let Some(view) = cli.start_view() {
        settings.ui.start_view = view;
    }
}
