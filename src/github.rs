//! GitHub stats for the stats section.
//!
//! Two unauthenticated requests against the public API: the user (for the
//! follower count) and their repositories (count, summed stars and forks).
//! The fetch runs once on a background thread; until it answers, or if it
//! fails, the section shows the fixed fallback numbers.

use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::profile::GITHUB_FALLBACK_STATS;

const API: &str = "https://api.github.com";
const TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GitHubStats {
    pub repos: usize,
    pub stars: u64,
    pub forks: u64,
    pub followers: u64,
}

#[derive(Deserialize)]
struct User {
    #[serde(default)]
    followers: u64,
}

#[derive(Deserialize)]
struct Repo {
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
}

/// Aggregate the two API bodies.
pub fn parse(user_json: &str, repos_json: &str) -> Result<GitHubStats> {
    let user: User = serde_json::from_str(user_json).context("Failed to parse GitHub user")?;
    let repos: Vec<Repo> =
        serde_json::from_str(repos_json).context("Failed to parse GitHub repositories")?;
    Ok(GitHubStats {
        repos: repos.len(),
        stars: repos.iter().map(|r| r.stargazers_count).sum(),
        forks: repos.iter().map(|r| r.forks_count).sum(),
        followers: user.followers,
    })
}

fn get(agent: &ureq::Agent, url: &str) -> Result<String> {
    let body = agent
        .get(url)
        .set("Accept", "application/vnd.github+json")
        .set("User-Agent", concat!("folio/", env!("CARGO_PKG_VERSION")))
        .call()
        .with_context(|| format!("GET {url} failed"))?
        .into_string()
        .with_context(|| format!("Failed to read {url}"))?;
    Ok(body)
}

/// Blocking fetch for `user`.
pub fn fetch(user: &str) -> Result<GitHubStats> {
    let agent = ureq::AgentBuilder::new().timeout(TIMEOUT).build();
    let user_json = get(&agent, &format!("{API}/users/{user}"))?;
    let repos_json = get(&agent, &format!("{API}/users/{user}/repos"))?;
    parse(&user_json, &repos_json)
}

/// Run `fetch` on a background thread; the result arrives on the receiver.
pub fn spawn_fetch(user: &'static str) -> Receiver<Result<GitHubStats>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(fetch(user));
    });
    rx
}

/// What the stats section shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatsView {
    #[default]
    Loading,
    Live(GitHubStats),
    Fallback,
}

impl StatsView {
    /// Settle on the fetch result. Failures are logged and fall back.
    pub fn from_result(result: Result<GitHubStats>) -> Self {
        match result {
            Ok(stats) => {
                log::info!("github stats: {} repos, {} stars", stats.repos, stats.stars);
                StatsView::Live(stats)
            }
            Err(e) => {
                log::warn!("github stats unavailable: {e:#}");
                StatsView::Fallback
            }
        }
    }

    /// Label/value rows for display.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        match self {
            StatsView::Live(s) => vec![
                ("Repositories", s.repos.to_string()),
                ("Stars", s.stars.to_string()),
                ("Forks", s.forks.to_string()),
                ("Followers", s.followers.to_string()),
                // The API has no cheap total; same placeholder as the fallback.
                ("Commits", "500+".to_string()),
            ],
            StatsView::Loading | StatsView::Fallback => GITHUB_FALLBACK_STATS
                .iter()
                .map(|(label, value)| (*label, value.to_string()))
                .collect(),
        }
    }
}
