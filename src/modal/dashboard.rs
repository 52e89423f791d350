// CLASSIFICATION: COMMUNITY
// Filename: dashboard.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-10-14

//! Project dashboard: summary metrics, tech filter, sort order, focus.

use std::cmp::Ordering;

use crate::content::Project;

pub const ALL_TECH: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Default,
    DateAsc,
    DateDesc,
    AccuracyAsc,
    AccuracyDesc,
}

impl SortOrder {
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Default => "Default",
            SortOrder::DateAsc => "Date (Oldest First)",
            SortOrder::DateDesc => "Date (Newest First)",
            SortOrder::AccuracyAsc => "Accuracy (Low to High)",
            SortOrder::AccuracyDesc => "Accuracy (High to Low)",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SortOrder::Default => SortOrder::DateAsc,
            SortOrder::DateAsc => SortOrder::DateDesc,
            SortOrder::DateDesc => SortOrder::AccuracyAsc,
            SortOrder::AccuracyAsc => SortOrder::AccuracyDesc,
            SortOrder::AccuracyDesc => SortOrder::Default,
        }
    }

    fn compare(self, a: &Project, b: &Project) -> Ordering {
        let accuracy = |p: &Project| p.metric("accuracy").unwrap_or(0.0);
        match self {
            SortOrder::Default => Ordering::Equal,
            SortOrder::DateAsc => a.date.cmp(&b.date),
            SortOrder::DateDesc => b.date.cmp(&a.date),
            SortOrder::AccuracyAsc => accuracy(a).total_cmp(&accuracy(b)),
            SortOrder::AccuracyDesc => accuracy(b).total_cmp(&accuracy(a)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    projects: Vec<Project>,
    tech: Vec<String>,
    filter: usize,
    sort: SortOrder,
    focus: Option<usize>,
}

impl Dashboard {
    pub fn new(projects: Vec<Project>) -> Self {
        let mut tech = vec![ALL_TECH.to_string()];
        for t in projects.iter().flat_map(|p| p.tech.iter()) {
            if !tech.contains(t) {
                tech.push(t.clone());
            }
        }
        Self {
            projects,
            tech,
            filter: 0,
            sort: SortOrder::Default,
            focus: None,
        }
    }

    /// `All` followed by each tech in first-seen order.
    pub fn tech_stacks(&self) -> &[String] {
        &self.tech
    }

    pub fn filter(&self) -> &str {
        &self.tech[self.filter]
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn set_filter(&mut self, tech: &str) -> bool {
        match self.tech.iter().position(|t| t == tech) {
            Some(i) => {
                self.filter = i;
                self.focus = None;
                true
            }
            None => false,
        }
    }

    pub fn cycle_filter(&mut self) {
        self.filter = (self.filter + 1) % self.tech.len();
        self.focus = None;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.focus = None;
    }

    pub fn cycle_sort(&mut self) {
        self.set_sort(self.sort.next());
    }

    /// Projects after sorting then filtering.
    pub fn visible(&self) -> Vec<&Project> {
        let mut list: Vec<&Project> = self.projects.iter().collect();
        list.sort_by(|a, b| self.sort.compare(a, b));
        if self.filter != 0 {
            let tech = &self.tech[self.filter];
            list.retain(|p| p.tech.contains(tech));
        }
        list
    }

    /// `Avg <metric>` over all projects for each metric of the first project.
    pub fn summary(&self) -> Vec<(String, f64)> {
        let Some(first) = self.projects.first() else {
            return Vec::new();
        };
        let total = self.projects.len() as f64;
        first
            .metrics
            .keys()
            .map(|name| {
                let sum: f64 = self
                    .projects
                    .iter()
                    .map(|p| p.metric(name).unwrap_or(0.0))
                    .sum();
                (format!("Avg {}", name), sum / total)
            })
            .collect()
    }

    /// Move focus forward, wrapping to the first project.
    pub fn focus_next(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        self.focus = Some(match self.focus {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    /// Move focus back, wrapping to the last project.
    pub fn focus_prev(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        self.focus = Some(match self.focus {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        });
    }

    pub fn focused(&self) -> Option<&Project> {
        self.focus.and_then(|i| self.visible().get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    fn dashboard() -> Dashboard {
        Dashboard::new(Content::builtin().unwrap().projects)
    }

    fn ids(d: &Dashboard) -> Vec<&str> {
        d.visible().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn tech_list_is_first_seen_order() {
        let d = dashboard();
        assert_eq!(
            d.tech_stacks(),
            ["All", "Python", "Scikit-learn", "TensorFlow", "React", "Node.js"]
        );
    }

    #[test]
    fn sorts_then_filters() {
        let mut d = dashboard();
        d.set_sort(SortOrder::AccuracyDesc);
        assert_eq!(ids(&d)[0], "project_iveims");
        assert!(d.set_filter("Node.js"));
        assert_eq!(ids(&d), ["project_iveims", "project_quantiq"]);
        d.set_sort(SortOrder::DateDesc);
        assert_eq!(ids(&d), ["project_quantiq", "project_iveims"]);
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut d = dashboard();
        d.focus_prev();
        assert_eq!(d.focus(), Some(4));
        d.focus_next();
        assert_eq!(d.focus(), Some(0));
        assert_eq!(d.focused().map(|p| p.id.as_str()), Some("project_amazon_reviews"));
    }

    #[test]
    fn summary_averages_metrics() {
        let d = dashboard();
        let summary = d.summary();
        assert_eq!(summary[0].0, "Avg accuracy");
        assert!((summary[0].1 - 0.866).abs() < 1e-9);
    }
}
