use std::fs::{self, OpenOptions};
use std::process;

use anyhow::{Context, Result, bail};
use env_logger::{Env, Target};

use folio::{
    app::App,
    config::{Config, config_dir},
    host::TerminalHost,
    interpreter::{CommandTable, Terminal, scrollback::Line},
    profile::PROFILE,
    session::Session,
    sound::SoundBoard,
    store::Store,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

const RUN_USAGE: &str = "folio [run]";
const EXEC_USAGE: &str = "folio exec <command...>";
const PLAY_USAGE: &str = "folio play";

fn run() -> Result<()> {
    init_logging();
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        None | Some("run") => interactive(false),
        Some("play") => interactive(true),
        Some("exec") => {
            let words: Vec<String> = args.collect();
            if words.is_empty() {
                bail!("Missing command\n\nUsage:\n  {EXEC_USAGE}");
            }
            exec(&words.join(" "))
        }
        Some(other) => bail!(
            "Unknown subcommand '{other}'\n\nfolio, an interactive terminal portfolio\n\nUsage:\n  {RUN_USAGE}\n  {EXEC_USAGE}\n  {PLAY_USAGE}"
        ),
    }
}

/// The TUI owns the terminal, so log lines go to a file next to the config.
/// Without a writable config dir logging is simply off.
fn init_logging() {
    let dir = config_dir();
    let file = fs::create_dir_all(&dir).and_then(|()| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("folio.log"))
    });
    let Ok(file) = file else {
        return;
    };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init();
}

fn interactive(play_arcade: bool) -> Result<()> {
    let mut app = App::new(Config::load()).context("Failed to start the terminal UI")?;
    app.run(play_arcade)
}

/// Run one line through the interpreter and print the scrollback.
fn exec(line: &str) -> Result<()> {
    let config = Config::load();
    let store = Store::open(config_dir().join("state.json"));
    let mut host = TerminalHost::new(config.download_dir());
    let mut session = Session::new(SoundBoard::new(&config.sound), store.theme);
    let mut terminal = Terminal::new(CommandTable::new(&PROFILE));

    terminal.submit(line, &mut session, &mut host);

    for line in terminal.scrollback().lines() {
        match line {
            Line::Echo(text) => println!("$ {text}"),
            Line::Output(text) => println!("{text}"),
        }
    }
    if let Some(status) = &session.status {
        println!("{status}");
    }
    Ok(())
}
