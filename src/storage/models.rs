use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Explicit tag stored beside every target
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LinkKind {
    /// Plain redirect target (raw URL or derived map-search URL)
    Url,
    /// Structured JSON document rendered as-is
    Profile,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LinkTarget {
    Url(String),
    Profile(serde_json::Value),
}

impl LinkTarget {
    pub fn kind(&self) -> LinkKind {
        match self {
            LinkTarget::Url(_) => LinkKind::Url,
            LinkTarget::Profile(_) => LinkKind::Profile,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub slug: String,
    pub target: LinkTarget,
}

impl Link {
    pub fn url(slug: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            target: LinkTarget::Url(url.into()),
        }
    }

    pub fn profile(slug: impl Into<String>, document: serde_json::Value) -> Self {
        Self {
            slug: slug.into(),
            target: LinkTarget::Profile(document),
        }
    }

    pub fn kind(&self) -> LinkKind {
        self.target.kind()
    }
}
