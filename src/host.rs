//! Host — the outward-facing side effects folio can ask for.
//!
//! The interpreter, palette and arcade never touch the outside world
//! directly; they go through a `Host`. `TerminalHost` is the real one used by
//! the app and by `folio exec`.

use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};

use crate::types::{Celebration, Cue};

pub trait Host {
    /// Open `url` in whatever the platform considers the default handler.
    fn open_link(&mut self, url: &str) -> Result<()>;
    /// Write a file for the user and return where it landed.
    fn save_file(&mut self, file_name: &str, contents: &str) -> Result<PathBuf>;
    fn play(&mut self, cue: Cue);
    fn celebrate(&mut self, kind: Celebration);
}

pub struct TerminalHost {
    download_dir: PathBuf,
    bell: bool,
    celebrations: Vec<Celebration>,
}

impl TerminalHost {
    pub fn new(download_dir: PathBuf) -> Self {
        TerminalHost {
            download_dir,
            bell: false,
            celebrations: Vec::new(),
        }
    }

    /// True once per batch of cues played since the last call.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }

    pub fn take_celebrations(&mut self) -> Vec<Celebration> {
        std::mem::take(&mut self.celebrations)
    }
}

impl Host for TerminalHost {
    fn open_link(&mut self, url: &str) -> Result<()> {
        launch(opener_command(url))
            .with_context(|| format!("Failed to launch a handler for {url}"))?;
        log::info!("opened {url}");
        Ok(())
    }

    fn save_file(&mut self, file_name: &str, contents: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.download_dir)
            .with_context(|| format!("Failed to create {}", self.download_dir.display()))?;
        let path = self.download_dir.join(file_name);
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("saved {}", path.display());
        Ok(path)
    }

    fn play(&mut self, cue: Cue) {
        log::trace!("cue {cue:?}");
        self.bell = true;
    }

    fn celebrate(&mut self, kind: Celebration) {
        self.celebrations.push(kind);
    }
}

/// Start `cmd` detached from the terminal and reap it from a helper thread
/// so it never lingers as a zombie.
fn launch(mut cmd: Command) -> Result<JoinHandle<io::Result<ExitStatus>>> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    let mut child = cmd.spawn()?;
    Ok(thread::spawn(move || child.wait()))
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

/// A host that records every request instead of performing it.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Default)]
    pub struct Recorder {
        pub links: Vec<String>,
        pub files: Vec<(String, String)>,
        pub cues: Vec<Cue>,
        pub celebrations: Vec<Celebration>,
        pub fail_links: bool,
    }

    impl Host for Recorder {
        fn open_link(&mut self, url: &str) -> Result<()> {
            if self.fail_links {
                anyhow::bail!("no handler for {url}");
            }
            self.links.push(url.to_string());
            Ok(())
        }

        fn save_file(&mut self, file_name: &str, contents: &str) -> Result<PathBuf> {
            self.files.push((file_name.to_string(), contents.to_string()));
            Ok(PathBuf::from(file_name))
        }

        fn play(&mut self, cue: Cue) {
            self.cues.push(cue);
        }

        fn celebrate(&mut self, kind: Celebration) {
            self.celebrations.push(kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_is_consumed_once() {
        let mut host = TerminalHost::new(std::env::temp_dir());
        assert!(!host.take_bell());
        host.play(Cue::Typing);
        host.play(Cue::Success);
        assert!(host.take_bell());
        assert!(!host.take_bell());
    }

    #[cfg(unix)]
    #[test]
    fn launched_handler_is_reaped() {
        let handle = launch(Command::new("true")).unwrap();
        let status = handle.join().unwrap().unwrap();
        assert!(status.success());
    }

    #[test]
    fn missing_handler_is_an_error() {
        assert!(launch(Command::new("folio-no-such-opener")).is_err());
    }

    #[test]
    fn save_file_writes_into_download_dir() {
        let dir = std::env::temp_dir().join(format!("folio-host-{}", std::process::id()));
        let mut host = TerminalHost::new(dir.clone());
        let path = host.save_file("resume.txt", "hello").unwrap();
        assert_eq!(path, dir.join("resume.txt"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }
}
