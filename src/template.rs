//! Clone-URL templates.
//!
//! A template is a URL containing the placeholders `{{username}}` and
//! `{{repo}}`. The username is substituted once, before the run starts; the
//! resulting [`CloneUrlTemplate`] is reused for every repository by
//! substituting `{{repo}}`.

use crate::config::GithubMode;
use crate::error::{Error, Result};
use regex::Regex;

/// Placeholder replaced by the configured GitHub user.
pub const USERNAME_TOKEN: &str = "{{username}}";

/// Placeholder replaced by each repository name.
pub const REPO_TOKEN: &str = "{{repo}}";

const SSH_TEMPLATE: &str = "git@github.com:{{username}}/{{repo}}.git";
const HTTPS_TEMPLATE: &str = "https://github.com/{{username}}/{{repo}}.git";

/// A clone-URL template with the username already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneUrlTemplate {
    template: String,
}

impl CloneUrlTemplate {
    /// Resolves the effective template for a run.
    ///
    /// `custom_url` wins over the built-in template for `mode`. Any
    /// `{{token}}` other than `{{repo}}` left after substituting the username
    /// is rejected.
    pub fn resolve(custom_url: Option<&str>, mode: GithubMode, user: &str) -> Result<Self> {
        let raw = custom_url.unwrap_or(match mode {
            GithubMode::Ssh => SSH_TEMPLATE,
            GithubMode::Https => HTTPS_TEMPLATE,
        });
        let template = raw.replace(USERNAME_TOKEN, user);

        let unknown = unknown_tokens(&template)?;
        if !unknown.is_empty() {
            return Err(Error::Configuration {
                message: format!(
                    "Clone URL template '{}' contains unknown placeholders: {}",
                    raw,
                    unknown.join(", ")
                ),
                hint: Some("Only {{username}} and {{repo}} are supported".to_string()),
            });
        }

        Ok(Self { template })
    }

    /// Returns the clone URL for one repository.
    pub fn url_for(&self, repo: &str) -> String {
        self.template.replace(REPO_TOKEN, repo)
    }

    /// Whether the template varies per repository.
    pub fn has_repo_token(&self) -> bool {
        self.template.contains(REPO_TOKEN)
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }
}

fn unknown_tokens(template: &str) -> Result<Vec<String>> {
    let re = Regex::new(r"\{\{\s*([^{}]*?)\s*\}\}")?;
    Ok(re
        .captures_iter(template)
        .filter(|caps| &caps[0] != REPO_TOKEN)
        .map(|caps| caps[0].to_string())
        .collect())
}
