use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};

use course_registration::storage::DEFAULT_FILE_NAME;
use course_registration::{logging, Session, TerminalConsole};

#[derive(Parser)]
#[command(name = "register")]
#[command(version)]
#[command(about = "Course Registration - register students for courses", long_about = None)]
struct Cli {
    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,

    #[arg(long, help = "Disable colored output")]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color || !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    logging::init_logging(cli.verbose)?;
    logging::log_system_info();

    let console = TerminalConsole::new()?;

    let mut session = Session::start(console, DEFAULT_FILE_NAME);
    let end = session.run();
    tracing::debug!(?end, records = session.records().len(), "Session finished");

    Ok(())
}
