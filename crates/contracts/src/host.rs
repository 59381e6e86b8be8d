//! Host (DA library panel) context shared by the tools.

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_DA_ORIGIN: &str = "https://admin.da.live";
pub const DEFAULT_TAGGING_PATH: &str = "/docs/library/tagging.json";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("host SDK is not available: {0}")]
    Unavailable(String),
    #[error("host context is missing `{0}`")]
    MissingField(&'static str),
    #[error("host action `{action}` failed: {message}")]
    Action {
        action: &'static str,
        message: String,
    },
}

/// The part of the SDK `context` object the tools read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HostContext {
    #[serde(default)]
    pub org: String,
    #[serde(default)]
    pub repo: String,
    #[serde(rename = "ref", default)]
    pub git_ref: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

impl HostContext {
    pub fn new(org: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            repo: repo.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), HostError> {
        if self.org.trim().is_empty() {
            return Err(HostError::MissingField("org"));
        }
        if self.repo.trim().is_empty() {
            return Err(HostError::MissingField("repo"));
        }
        Ok(())
    }
}

/// Source URL of the tagging sheet for the current site.
///
/// `sheet_path` must start with `/`.
pub fn tagging_source_url(origin: &str, ctx: &HostContext, sheet_path: &str) -> String {
    format!(
        "{}/source/{}/{}{}",
        origin.trim_end_matches('/'),
        ctx.org,
        ctx.repo,
        sheet_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_sdk_json() {
        let ctx: HostContext =
            serde_json::from_str(r#"{"org":"o","repo":"r","ref":"main","path":"/index"}"#).unwrap();
        assert_eq!(ctx.org, "o");
        assert_eq!(ctx.git_ref.as_deref(), Some("main"));
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_fields() {
        assert_eq!(
            HostContext::new("", "r").validate(),
            Err(HostError::MissingField("org"))
        );
        assert_eq!(
            HostContext::new("o", " ").validate(),
            Err(HostError::MissingField("repo"))
        );
    }

    #[test]
    fn test_tagging_source_url() {
        let ctx = HostContext::new("o", "r");
        assert_eq!(
            tagging_source_url(DEFAULT_DA_ORIGIN, &ctx, DEFAULT_TAGGING_PATH),
            "https://admin.da.live/source/o/r/docs/library/tagging.json"
        );
        assert_eq!(
            tagging_source_url("https://stage.da.live/", &ctx, "/tags.json"),
            "https://stage.da.live/source/o/r/tags.json"
        );
    }
}
