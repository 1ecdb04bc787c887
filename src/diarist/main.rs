use clap::Parser;
use diarist::config::DiaristConfig;
use diarist::error::Result;
use diarist::logging;
use diarist::render::TerminalView;
use diarist::router::{Session, SessionOptions};
use diarist::store::FsBackend;
use diarist::theme::SystemColorScheme;
use std::io::{self, BufRead};
use std::rc::Rc;

mod host;
use host::{Cli, Command};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let data_dir = host::resolve_data_dir(cli.data_dir, std::env::var_os(host::HOME_ENV))?;
    tracing::debug!(data_dir = %data_dir.display(), "starting session");

    let config = DiaristConfig::load(&data_dir).unwrap_or_else(|err| {
        tracing::warn!(%err, "unusable config, falling back to defaults");
        DiaristConfig::default()
    });

    let use_color = !cli.no_color && console::Term::stdout().features().colors_supported();
    let view = TerminalView::new(io::stdout(), config.line_width, use_color)?;
    let backend = Rc::new(FsBackend::new(data_dir));
    let mut session = Session::new(
        backend,
        view,
        &SessionOptions::from(&config),
        &SystemColorScheme,
    );
    session.start();

    for line in io::stdin().lock().lines() {
        let line = line?;
        match host::parse_line(&line) {
            Command::Event(event) => {
                let outcome = session.handle(event);
                if let Some(message) = host::describe(&outcome) {
                    eprintln!("{}", message);
                }
            }
            Command::List => session.render_all(),
            Command::Help => println!("{}", host::HELP),
            Command::Quit => break,
            Command::Nothing => {}
            Command::Invalid(message) => eprintln!("{}", message),
        }
    }
    Ok(())
}
