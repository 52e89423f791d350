// CLASSIFICATION: COMMUNITY
// Filename: types.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-10-09

//! Serde models for the static portfolio content files.

use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;

use super::ordered::OrderedMap;

/// `about.json`
#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub name: String,
    #[serde(default)]
    pub title: String,
    pub bio: String,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub target_roles: Vec<String>,
    pub contact: Contact,
}

impl About {
    /// Lowercased first word of the name, used for the prompt.
    pub fn handle(&self) -> String {
        self.name
            .split_whitespace()
            .next()
            .unwrap_or("guest")
            .to_lowercase()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub phone: Vec<String>,
    #[serde(default)]
    pub email: Vec<String>,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: Vec<String>,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub kaggle: String,
    #[serde(default)]
    pub w3schools: String,
    #[serde(default)]
    pub portfolio: String,
}

/// `skills.json`: category name to skill list, in document order.
pub type Skills = OrderedMap<Vec<String>>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub period: String,
    pub description: String,
}

/// A statistic as written in `stats.json`; counts may also be free text such as `3+`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Count(u64),
    Decimal(f64),
    Text(String),
}

impl Default for StatValue {
    fn default() -> Self {
        StatValue::Count(0)
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Count(n) => write!(f, "{}", n),
            StatValue::Decimal(n) => write!(f, "{}", n),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

/// `stats.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub github_projects: StatValue,
    pub years_of_experience: StatValue,
    pub certifications: StatValue,
    pub projects_completed: StatValue,
    pub freelance_clients: StatValue,
    pub open_source_contributions: StatValue,
}

/// Chart style a project's metrics are drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Scatter,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub chart: ChartKind,
    #[serde(default)]
    pub metrics: OrderedMap<f64>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl Project {
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

/// One canned question/answer pair for the assistant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_values_accept_numbers_and_text() {
        let stats: Stats =
            serde_json::from_str(r#"{"github_projects": 7, "years_of_experience": "3+"}"#).unwrap();
        assert_eq!(stats.github_projects.to_string(), "7");
        assert_eq!(stats.years_of_experience.to_string(), "3+");
        assert_eq!(stats.freelance_clients, StatValue::Count(0));
    }

    #[test]
    fn project_date_is_optional() {
        let p: Project = serde_json::from_str(
            r#"{"id":"p","title":"P","description":"d","chart":"scatter","metrics":{"accuracy":0.5}}"#,
        )
        .unwrap();
        assert_eq!(p.chart, ChartKind::Scatter);
        assert_eq!(p.date, None);
        assert_eq!(p.metric("accuracy"), Some(0.5));
    }
}
