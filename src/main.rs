mod app;
mod art;
mod cli;
mod color;
mod db;
mod error;
mod event;
mod logging;
mod render;
mod theme;
mod tui;
mod types;
mod ui;

use anyhow::Result;
use clap::Parser;

const DEFAULT_TITLE: &str = "Untitled";

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let title = match cli_opts.command {
        None => None,
        Some(cli::Command::Preview { title }) => title,
        Some(command) => {
            logging::init_stderr();
            return cli::run(command);
        }
    };

    logging::init_file()?;
    let conn = db::init(&db::default_db_path())?;
    let mut app = app::App::new(conn, title.unwrap_or_else(|| DEFAULT_TITLE.to_string()))?;
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
