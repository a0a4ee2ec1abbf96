//! folio — an interactive terminal portfolio.
//!
//! A fake shell answers a fixed set of commands about one person, a command
//! palette offers shortcuts, and a small arcade game hides behind the Konami
//! code. Everything outward-facing goes through [`host::Host`].

pub mod app;
pub mod arcade;
pub mod canvas;
pub mod config;
pub mod effects;
pub mod filters;
pub mod github;
pub mod host;
pub mod interpreter;
pub mod konami;
pub mod menubar;
pub mod palette;
pub mod profile;
pub mod screen;
pub mod session;
pub mod sound;
pub mod store;
pub mod typewriter;
pub mod types;
