use std::path::Path;

use tn_core::{Game, GameConfig};
use tn_tui::app::TuiApp;
use tn_tui::feedback::{Feedback, Silent, TerminalBell};

pub fn run(
    catalog: Option<&Path>,
    tries: u32,
    share_url: Option<String>,
    mute: bool,
    seed: u64,
) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;

    let mut config = GameConfig::default().with_tries(tries);
    if let Some(url) = share_url {
        config = config.with_page_url(url);
    }

    let feedback: Box<dyn Feedback> = if mute {
        Box::new(Silent)
    } else {
        Box::new(TerminalBell::stdout())
    };

    let app = TuiApp::new(Game::new(catalog, config), feedback, seed);
    tn_tui::terminal::run(app)
}
