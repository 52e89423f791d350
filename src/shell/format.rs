// CLASSIFICATION: COMMUNITY
// Filename: format.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-10-15

//! Output formatting for the informational commands.

use crate::content::{Certification, Contact, Education, Experience, Skills, Stats};

pub const HELP: &str = "Commands: cd, ls, open, clear, help, run, view, dashboard, analyze, history, exit, contact, skills, certs, exp, socials, education, stats, download <filename>, downloadCV, theme, sql";

pub fn socials(contact: &Contact) -> Vec<String> {
    vec![
        format!("LinkedIn: {}", contact.linkedin),
        format!("GitHub: {}", contact.github.join(", ")),
        format!("Twitter: {}", contact.twitter),
        format!("Kaggle: {}", contact.kaggle),
        format!("W3Schools: {}", contact.w3schools),
        format!("Portfolio: {}", contact.portfolio),
    ]
}

pub fn contact(contact: &Contact) -> Vec<String> {
    let mut lines = vec![
        "Contact Information:".to_string(),
        format!("Phone: {}", contact.phone.join(", ")),
        format!("Email: {}", contact.email.join(", ")),
        format!("WhatsApp: {}", contact.whatsapp),
    ];
    lines.extend(socials(contact));
    lines
}

/// `DATA SCIENCE:` heading (first underscore only), items, blank separator.
pub fn skills(skills: &Skills) -> Vec<String> {
    let mut lines = Vec::new();
    for (category, items) in skills.iter() {
        lines.push(format!("{}:", category.replacen('_', " ", 1).to_uppercase()));
        lines.extend(items.iter().map(|item| format!("- {}", item)));
        lines.push(String::new());
    }
    lines
}

/// Skills of the category a `skill_<category>` leaf id names.
pub fn skill_category(skills: &Skills, leaf_id: &str) -> Vec<String> {
    let key = leaf_id.split('_').skip(1).collect::<Vec<_>>().join("_");
    skills
        .get(&key)
        .map(|items| items.iter().map(|item| format!("- {}", item)).collect())
        .unwrap_or_default()
}

pub fn certifications(certs: &[Certification]) -> Vec<String> {
    certs
        .iter()
        .map(|c| format!("{} - {}", c.title, c.issuer))
        .collect()
}

/// One entry per job; each entry spans several display lines.
pub fn experience(jobs: &[Experience]) -> Vec<String> {
    jobs.iter()
        .map(|j| format!("{} ({})\n{}\n", j.title, j.period, j.description))
        .collect()
}

pub fn education(entries: &[Education]) -> Vec<String> {
    entries
        .iter()
        .map(|e| format!("{} - {} ({})", e.degree, e.institution, e.period))
        .collect()
}

pub fn stats(stats: &Stats) -> Vec<String> {
    vec![
        format!("GitHub Projects: {}", stats.github_projects),
        format!("Years of Experience: {}", stats.years_of_experience),
        format!("Certifications: {}", stats.certifications),
        format!("Projects Completed: {}", stats.projects_completed),
        format!("Freelance Clients: {}", stats.freelance_clients),
        format!("Open Source Contributions: {}", stats.open_source_contributions),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    #[test]
    fn skill_headings_replace_first_underscore() {
        let mut map = Skills::new();
        map.insert("web_dev_tools", vec!["Vite".to_string()]);
        assert_eq!(skills(&map), ["WEB DEV_TOOLS:", "- Vite", ""]);
    }

    #[test]
    fn skill_category_strips_prefix() {
        let content = Content::builtin().unwrap();
        assert_eq!(
            skill_category(&content.skills, "skill_data_science"),
            ["- Pandas", "- Scikit-learn", "- TensorFlow"]
        );
        assert!(skill_category(&content.skills, "skill_unknown").is_empty());
    }
}
