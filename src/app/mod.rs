mod input;
pub mod state;
mod ui;
pub mod view;

use std::io::{self, Write};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{cursor, event, execute, terminal};

use crate::config::{Config, config_dir};
use crate::effects::FRAME;
use crate::github::{self, GitHubStats, StatsView};
use crate::host::TerminalHost;
use crate::profile::PROFILE;
use crate::screen::Screen;
use crate::store::Store;
use crate::types::Cue;

use input::Action;
use state::AppState;

pub struct App {
    state: AppState,
    host: TerminalHost,
    screen: Screen,
    stats: Option<Receiver<Result<GitHubStats>>>,
}

impl App {
    /// Load persisted state, count this visit and size everything to the
    /// current terminal.
    pub fn new(config: Config) -> Result<Self> {
        let mut store = Store::open(config_dir().join("state.json"));
        let visits = store.record_visit();
        if let Err(e) = store.save() {
            log::warn!("could not record visit: {e:#}");
        }
        log::info!("visit #{visits}");

        let (w, h) = terminal::size()?;
        let host = TerminalHost::new(config.download_dir());
        let stats = (!config.offline).then(|| github::spawn_fetch(PROFILE.github_user));
        Ok(App {
            state: AppState::new(config, store, w, h),
            host,
            screen: Screen::new(),
            stats,
        })
    }

    /// Take over the terminal until the user quits. With `play_arcade` the
    /// game is already open on the first frame.
    pub fn run(&mut self, play_arcade: bool) -> Result<()> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )?;

        if play_arcade {
            self.state.launch_arcade();
        }
        let result = self.main_loop(&mut stdout);

        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();

        result
    }

    fn main_loop(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        let game_frame = Duration::from_millis(self.state.config.arcade.frame_millis.max(1));
        let now = Instant::now();
        let mut next_type = now;
        let mut next_game = now + game_frame;
        let mut next_effects = now + FRAME;

        loop {
            self.draw(stdout)?;

            let deadline = next_type.min(next_game).min(next_effects);
            let timeout = deadline.saturating_duration_since(Instant::now());
            if event::poll(timeout)? {
                let event = event::read()?;
                match input::handle_event(&mut self.state, event, &mut self.host) {
                    Action::Continue => {}
                    Action::Repaint => self.screen.invalidate(),
                    Action::Quit => break,
                }
            }

            let now = Instant::now();
            if now >= next_type {
                let step = self.state.typewriter.advance();
                if step.keystroke && self.state.session.sound.typewriter_clicks() {
                    self.state.session.cue(Cue::Typing, &mut self.host);
                }
                next_type = now + step.delay;
            }
            if now >= next_game {
                let report = self.state.arcade.frame(&mut self.state.rng);
                for _ in 0..report.kills {
                    self.state.session.cue(Cue::Success, &mut self.host);
                }
                next_game = now + game_frame;
            }
            if now >= next_effects {
                self.state.effects.step(&mut self.state.rng);
                next_effects = now + FRAME;
            }

            self.poll_stats();
            for kind in self.host.take_celebrations() {
                log::debug!("celebrate {kind:?}");
                self.state.effects.start(kind, &mut self.state.rng);
            }
            self.state.persist_theme();
        }

        Ok(())
    }

    /// Pick up the GitHub fetch once it has answered.
    fn poll_stats(&mut self) {
        let Some(rx) = &self.stats else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(anyhow::anyhow!("stats fetch thread exited")),
        };
        self.state.stats = StatsView::from_result(result);
        self.stats = None;
    }

    fn draw(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        let canvas = view::compose(&self.state);
        self.screen.present(stdout, canvas.rasterize())?;
        if self.host.take_bell() {
            stdout.write_all(b"\x07")?;
            stdout.flush()?;
        }
        Ok(())
    }
}
