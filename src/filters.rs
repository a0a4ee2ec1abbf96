//! Filters for the section pane: a category filter over the projects and a
//! free-text search over the skills.

use crate::profile::{Category, Project};

/// Which projects the projects section shows. Cycles
/// all → AWS → DevOps → Python → all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(Category),
}

impl ProjectFilter {
    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Only(category) => category.name(),
        }
    }

    pub fn next(self) -> ProjectFilter {
        let pos = match self {
            ProjectFilter::All => 0,
            ProjectFilter::Only(c) => Category::ALL.iter().position(|x| *x == c).map_or(0, |i| i + 1),
        };
        match Category::ALL.get(pos) {
            Some(c) => ProjectFilter::Only(*c),
            None => ProjectFilter::All,
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(c) => project.categories.contains(&c),
        }
    }

    /// Matching projects with their 1-based number in the full list, so
    /// `open N` still lines up with what is shown.
    pub fn apply(self, projects: &'static [Project]) -> Vec<(usize, &'static Project)> {
        projects
            .iter()
            .enumerate()
            .filter(|(_, p)| self.matches(p))
            .map(|(i, p)| (i + 1, p))
            .collect()
    }
}

/// Incremental search over `(area, skills)` rows.
#[derive(Debug, Default)]
pub struct SkillSearch {
    active: bool,
    query: String,
}

impl SkillSearch {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    /// Stop taking keys. The query stays applied.
    pub fn finish(&mut self) {
        self.active = false;
    }

    /// Stop taking keys and drop the query.
    pub fn cancel(&mut self) {
        self.active = false;
        self.query.clear();
    }

    pub fn push(&mut self, ch: char) {
        self.query.push(ch);
    }

    pub fn backspace(&mut self) {
        self.query.pop();
    }

    /// Rows whose area or skill list contains the query, ignoring case.
    pub fn apply(
        &self,
        skills: &'static [(&'static str, &'static str)],
    ) -> Vec<(&'static str, &'static str)> {
        let q = self.query.to_lowercase();
        skills
            .iter()
            .filter(|(area, list)| {
                area.to_lowercase().contains(&q) || list.to_lowercase().contains(&q)
            })
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::PROFILE;

    #[test]
    fn project_filter_cycles_through_every_category() {
        let mut f = ProjectFilter::default();
        let mut seen = vec![f.label()];
        for _ in 0..Category::ALL.len() + 1 {
            f = f.next();
            seen.push(f.label());
        }
        assert_eq!(seen, ["All", "AWS", "DevOps", "Python", "All"]);
    }

    #[test]
    fn project_filter_keeps_original_numbers() {
        let shown: Vec<_> = ProjectFilter::Only(Category::Python)
            .apply(PROFILE.projects)
            .iter()
            .map(|(n, p)| (*n, p.label))
            .collect();
        assert_eq!(shown, [(2, "Face Recognition"), (3, "Expense Tracker")]);
        assert_eq!(ProjectFilter::All.apply(PROFILE.projects).len(), 4);
    }

    #[test]
    fn project_with_several_categories_matches_each() {
        let hosting = &PROFILE.projects[3];
        assert!(ProjectFilter::Only(Category::Aws).matches(hosting));
        assert!(ProjectFilter::Only(Category::DevOps).matches(hosting));
        assert!(!ProjectFilter::Only(Category::Python).matches(hosting));
    }

    #[test]
    fn skill_search_is_case_insensitive_substring() {
        let mut s = SkillSearch::default();
        s.start();
        for ch in "DOCKER".chars() {
            s.push(ch);
        }
        let areas: Vec<_> = s.apply(PROFILE.skills).iter().map(|(a, _)| *a).collect();
        assert_eq!(areas, ["DevOps"]);
    }

    #[test]
    fn skill_search_matches_area_names_and_empty_query_shows_all() {
        let mut s = SkillSearch::default();
        assert_eq!(s.apply(PROFILE.skills).len(), PROFILE.skills.len());
        s.push('o');
        s.push('s');
        let areas: Vec<_> = s.apply(PROFILE.skills).iter().map(|(a, _)| *a).collect();
        assert_eq!(areas, ["OS"]);
    }

    #[test]
    fn finish_keeps_query_and_cancel_drops_it() {
        let mut s = SkillSearch::default();
        s.start();
        s.push('x');
        s.finish();
        assert!(!s.is_active());
        assert_eq!(s.query(), "x");
        s.start();
        s.cancel();
        assert_eq!(s.query(), "");
        assert!(s.apply(PROFILE.skills).len() == PROFILE.skills.len());
    }
}
