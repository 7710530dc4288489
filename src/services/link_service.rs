//! Link registration and resolution
//!
//! Every registration endpoint funnels into [`LinkService`], which validates
//! the request, derives the stored target and performs one upsert.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::{Result, SluglinkError};
use crate::storage::{Link, LinkStore};
use crate::utils::{build_map_search_url, is_valid_slug, validate_url};

/// Default base for address links
pub const DEFAULT_MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

// ============ Request DTOs ============

/// Body of `POST /api/shortener`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShortenRequest {
    pub url: Option<String>,
    pub slug: Option<String>,
}

/// Body of `POST /api/address`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressRequest {
    pub address: Option<String>,
    pub slug: Option<String>,
}

/// Body of `POST /api/profile`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileRequest {
    pub slug: Option<String>,
    /// Any JSON value; absent or `null` is stored as `{}`
    #[serde(default)]
    pub profile: Option<serde_json::Value>,
}

/// Trimmed value, or `None` when missing or blank
fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_slug(slug: &str) -> Result<()> {
    if is_valid_slug(slug) {
        Ok(())
    } else {
        Err(SluglinkError::validation(format!("invalid slug: {}", slug)))
    }
}

// ============ Service ============

pub struct LinkService {
    storage: Arc<LinkStore>,
    map_search_base: String,
}

impl LinkService {
    pub fn new(storage: Arc<LinkStore>) -> Self {
        Self {
            storage,
            map_search_base: DEFAULT_MAP_SEARCH_BASE.to_string(),
        }
    }

    pub fn with_map_search_base(mut self, base: impl Into<String>) -> Self {
        self.map_search_base = base.into();
        self
    }

    /// Map a slug to a raw URL.
    pub async fn shorten(&self, req: ShortenRequest) -> Result<Link> {
        let (Some(url), Some(slug)) = (required(req.url), required(req.slug)) else {
            return Err(SluglinkError::validation("missing url or slug"));
        };
        check_slug(&slug)?;
        let parsed = validate_url(&url)
            .map_err(|e| SluglinkError::validation(format!("invalid url: {}", e)))?;

        // Location 头只能携带可见 ASCII，其余输入改存规范化形式
        let header_safe = url.bytes().all(|b| (0x20..0x7f).contains(&b));
        let target = if header_safe { url } else { parsed.into() };
        let link = Link::url(slug, target);
        self.storage.upsert(&link).await?;
        Ok(link)
    }

    /// Map a slug to a map-search URL for a free-text address.
    pub async fn register_address(&self, req: AddressRequest) -> Result<Link> {
        let (Some(address), Some(slug)) = (required(req.address), required(req.slug)) else {
            return Err(SluglinkError::validation("missing address or slug"));
        };
        check_slug(&slug)?;

        let map_url = build_map_search_url(&self.map_search_base, &address).map_err(|e| {
            SluglinkError::config(format!(
                "map search base '{}' is not a valid URL: {}",
                self.map_search_base, e
            ))
        })?;
        debug!("Address for {} encoded as {}", slug, map_url);

        let link = Link::url(slug, map_url);
        self.storage.upsert(&link).await?;
        Ok(link)
    }

    /// Map a slug to a JSON document.
    pub async fn register_profile(&self, req: ProfileRequest) -> Result<Link> {
        let Some(slug) = required(req.slug) else {
            return Err(SluglinkError::validation("slug required"));
        };
        check_slug(&slug)?;

        let document = req
            .profile
            .unwrap_or_else(|| serde_json::Value::Object(Default::default()));

        let link = Link::profile(slug, document);
        self.storage.upsert(&link).await?;
        Ok(link)
    }

    /// Look a slug up. Malformed slugs resolve to `None` without a query.
    pub async fn resolve(&self, slug: &str) -> Result<Option<Link>> {
        if !is_valid_slug(slug) {
            return Ok(None);
        }

        let link = self.storage.lookup(slug).await?;
        if let Some(ref link) = link {
            info!("Resolved {} -> {}", slug, link.kind());
        }
        Ok(link)
    }
}
