//! Interpreter — the terminal pane's command language.
//!
//! A submitted line is normalized (trimmed, lower-cased) and looked up as a
//! whole in a fixed `CommandTable`. There is no tokenizing: `"open 2"` is a
//! key of its own and `"open"` alone is unknown.

pub mod scrollback;

use std::collections::BTreeMap;

use crate::host::Host;
use crate::profile::Profile;
use crate::session::Session;
use crate::types::{Celebration, Cue, Download, Effect, Theme};
use scrollback::Scrollback;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fixed text, rendered once when the table is built.
    Text(String),
    Clear,
    Date,
    HireMe,
    Resume,
    Link {
        url: &'static str,
        label: &'static str,
    },
}

/// What a command produced: text for the scrollback and/or one effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub display: Option<String>,
    pub effect: Option<Effect>,
}

pub struct CommandTable {
    profile: &'static Profile,
    commands: BTreeMap<String, Command>,
}

pub fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}

pub fn not_found(input: &str) -> String {
    format!("Command not found: {input}. Type 'help'.")
}

impl CommandTable {
    pub fn new(profile: &'static Profile) -> Self {
        let mut commands = BTreeMap::new();
        let mut text = |name: &str, body: String| {
            commands.insert(name.to_string(), Command::Text(body));
        };

        text("help", help_text(profile));
        text("about", about_text(profile));
        text("skills", skills_text(profile));
        text("projects", projects_text(profile));
        text("contact", contact_text(profile));
        text(
            "whoami",
            format!("root@aws-devops:~$ {} - {}", profile.name, profile.role),
        );
        text("location", format!("{} 📍", profile.location));

        commands.insert("clear".into(), Command::Clear);
        commands.insert("date".into(), Command::Date);
        commands.insert("sudo hire me".into(), Command::HireMe);
        commands.insert("resume".into(), Command::Resume);
        commands.insert(
            "linkedin".into(),
            Command::Link {
                url: profile.linkedin_url,
                label: "LinkedIn",
            },
        );
        commands.insert(
            "github".into(),
            Command::Link {
                url: profile.github_url,
                label: "GitHub",
            },
        );
        for (i, project) in profile.projects.iter().enumerate() {
            commands.insert(
                format!("open {}", i + 1),
                Command::Link {
                    url: project.url,
                    label: project.label,
                },
            );
        }

        CommandTable { profile, commands }
    }

    pub fn get(&self, line: &str) -> Option<&Command> {
        self.commands.get(line)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Run one already-normalized line.
    pub fn execute(&self, line: &str) -> Outcome {
        let Some(command) = self.get(line) else {
            return Outcome {
                display: Some(not_found(line)),
                effect: None,
            };
        };

        match command {
            Command::Text(body) => Outcome {
                display: Some(body.clone()),
                effect: None,
            },
            Command::Clear => Outcome {
                display: None,
                effect: Some(Effect::ClearScrollback),
            },
            Command::Date => Outcome {
                display: Some(
                    chrono::Local::now()
                        .format("%a %b %d %Y %H:%M:%S GMT%z")
                        .to_string(),
                ),
                effect: None,
            },
            Command::HireMe => Outcome {
                display: Some(format!(
                    "🎉 SUDO ACCESS GRANTED! 🎉\n\
                     [████████████████████████] 100% Complete\n\
                     Status: Ready to join your team!\n\
                     Contact: {}",
                    self.profile.email
                )),
                effect: Some(Effect::Celebrate(Celebration::Confetti)),
            },
            Command::Resume => Outcome {
                display: Some("Downloading resume...".into()),
                effect: Some(Effect::Download(Download {
                    file_name: self.profile.resume_file,
                    contents: self.profile.resume,
                })),
            },
            Command::Link { url, label } => Outcome {
                display: Some(format!("Opening {label}...")),
                effect: Some(Effect::OpenLink(*url)),
            },
        }
    }
}

fn help_text(profile: &Profile) -> String {
    let themes: Vec<_> = Theme::ALL.iter().map(|t| t.name()).collect();
    format!(
        "Available commands:\n\
         - help, about, skills, projects, contact, clear, whoami\n\
         - sudo hire me, date, location, resume, linkedin, github\n\
         - open 1..{}\n\
         Themes (Ctrl-k): {}",
        profile.projects.len(),
        themes.join(", ")
    )
}

fn about_text(p: &Profile) -> String {
    format!(
        "Name: {}\nRole: {}\nExperience: {}\nPassion: {}\nStatus: {}",
        p.name, p.role, p.experience, p.passion, p.status
    )
}

fn skills_text(p: &Profile) -> String {
    let mut out = String::from("Technical Skills:");
    for (area, list) in p.skills {
        out.push_str(&format!("\n- {area}: {list}"));
    }
    out
}

fn projects_text(p: &Profile) -> String {
    let mut out = String::from("Recent Projects:");
    for (i, project) in p.projects.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", i + 1, project.title));
    }
    out.push_str("\nType 'open [project-number]' to view");
    out
}

fn contact_text(p: &Profile) -> String {
    let strip = |url: &'static str| {
        url.trim_start_matches("https://")
            .trim_start_matches("www.")
            .trim_end_matches('/')
    };
    format!(
        "Contact:\nEmail: {}\nPhone: {}\nLinkedIn: {}\nGitHub: {}\nLocation: {}",
        p.email,
        p.phone,
        strip(p.linkedin_url),
        strip(p.github_url),
        p.location.replace(", Maharashtra", ""),
    )
}

// ---------------------------------------------------------------------------
// Terminal pane
// ---------------------------------------------------------------------------

/// The command table plus the scrollback it writes to.
pub struct Terminal {
    table: CommandTable,
    scrollback: Scrollback,
}

impl Terminal {
    pub fn new(table: CommandTable) -> Self {
        Terminal {
            table,
            scrollback: Scrollback::default(),
        }
    }

    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    /// Handle one submitted line: echo it, run it, append its output and
    /// carry out its effect.
    ///
    /// Returns an effect the terminal could not carry out itself (such as
    /// launching the arcade), for the caller to handle.
    pub fn submit(
        &mut self,
        raw: &str,
        session: &mut Session,
        host: &mut dyn Host,
    ) -> Option<Effect> {
        let line = normalize(raw);
        self.scrollback.echo(&line);

        let outcome = self.table.execute(&line);
        if let Some(text) = outcome.display.as_deref().filter(|t| !t.is_empty()) {
            self.scrollback.output(text);
        }

        let mut leftover = None;
        if let Some(effect) = outcome.effect {
            match session.apply(effect, host) {
                Some(Effect::ClearScrollback) => self.scrollback.clear(),
                other => leftover = other,
            }
        }

        session.cue(Cue::Typing, host);
        leftover
    }
}
