//! Content tables for the portfolio: the built-in defaults, or a
//! user-provided YAML file selected through configuration.

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use tokio::fs;

use crate::domain::models::BlogPost;
use crate::domain::models::ContactLink;
use crate::domain::models::Content;
use crate::domain::models::Profile;
use crate::domain::models::Project;
use crate::domain::models::ProjectStatus;

pub struct ContentManager {}

impl ContentManager {
    /// Load the content tables. An empty path selects the built-in defaults;
    /// otherwise the file is deserialized and validated. Either way the
    /// result is immutable for the rest of the session.
    pub async fn load(content_file: &str) -> Result<Content> {
        if content_file.is_empty() {
            return Ok(builtin());
        }

        let raw = fs::read_to_string(content_file)
            .await
            .with_context(|| format!("failed to read content file {content_file}"))?;
        let content: Content = serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse content file {content_file}"))?;

        if content.profile.names.is_empty() {
            bail!("content file {content_file} must provide at least one profile name");
        }

        tracing::debug!(
            projects = content.projects.len(),
            posts = content.posts.len(),
            "content loaded"
        );

        return Ok(content);
    }
}

fn builtin() -> Content {
    return Content {
        profile: Profile {
            names: vec!["Aryan".to_string(), "Aryaman Gupta".to_string()],
            location: "I'm based in San Ramon and College Park.".to_string(),
            currently: vec![
                "studying computer science at the University of Maryland \u{1f422}".to_string(),
                "interested in systems programming and would like to dip my toes into compiler \
                 development and machine learning"
                    .to_string(),
            ],
            previously: vec![
                "was a student at Quarry Lane School".to_string(),
                "a McDonald's line cook reject".to_string(),
            ],
        },
        projects: vec![
            Project {
                name: "rash".to_string(),
                description: "a shell that aims to make zsh usable with reproducible shell \
                              scripts in rust"
                    .to_string(),
                tech: vec!["rust".to_string(), "crossterm".to_string()],
                link: Some("https://github.com/aryamangupta/rash".to_string()),
                status: ProjectStatus::Wip,
            },
            Project {
                name: "gpt2-repro".to_string(),
                description: "a reproduction of GPT-2 in python".to_string(),
                tech: vec!["python".to_string(), "pytorch".to_string()],
                link: None,
                status: ProjectStatus::Active,
            },
        ],
        posts: vec![
            BlogPost {
                title: "Making zsh scripts reproducible".to_string(),
                date: "2025-06-02".to_string(),
                slug: "reproducible-zsh".to_string(),
                preview: "Why shell scripts rot, and what a shell would have to pin down to \
                          stop it."
                    .to_string(),
                tags: vec!["shells".to_string(), "rust".to_string()],
            },
            BlogPost {
                title: "Reading the GPT-2 paper as an undergrad".to_string(),
                date: "2025-03-14".to_string(),
                slug: "gpt2-notes".to_string(),
                preview: "Notes from reimplementing the architecture before touching the \
                          training loop."
                    .to_string(),
                tags: vec!["ml".to_string()],
            },
        ],
        contact: vec![
            ContactLink {
                label: "email".to_string(),
                target: "aryamangupta52@gmail.com".to_string(),
            },
            ContactLink {
                label: "academic".to_string(),
                target: "agupta52@terpmail.umd.edu".to_string(),
            },
            ContactLink {
                label: "linkedin".to_string(),
                target: "https://www.linkedin.com/in/aryaman-gupta-541b61341/".to_string(),
            },
            ContactLink {
                label: "github".to_string(),
                target: "https://github.com/aryamangupta".to_string(),
            },
            ContactLink {
                label: "twitter/x".to_string(),
                target: "https://x.com/aryamangupta".to_string(),
            },
        ],
    };
}
