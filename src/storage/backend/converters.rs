use std::str::FromStr;

use crate::errors::{Result, SluglinkError};
use crate::storage::{Link, LinkKind, LinkTarget};
use migration::entities::link;

/// 将 Sea-ORM Model 转换为 Link
///
/// The `kind` column decides how `target` is read; an unknown tag or a profile
/// that no longer parses is reported as a corrupt record.
pub fn model_to_link(model: link::Model) -> Result<Link> {
    let kind = LinkKind::from_str(&model.kind).map_err(|_| {
        SluglinkError::corrupt_record(format!(
            "unknown link kind '{}' for slug '{}'",
            model.kind, model.slug
        ))
    })?;

    let target = match kind {
        LinkKind::Url => LinkTarget::Url(model.target),
        LinkKind::Profile => {
            let document = serde_json::from_str(&model.target).map_err(|e| {
                SluglinkError::corrupt_record(format!(
                    "profile for slug '{}' is not valid JSON: {}",
                    model.slug, e
                ))
            })?;
            LinkTarget::Profile(document)
        }
    };

    Ok(Link {
        slug: model.slug,
        target,
    })
}

/// 将 Link 转换为 ActiveModel（用于 upsert）
pub fn link_to_active_model(link: &Link) -> Result<link::ActiveModel> {
    use sea_orm::ActiveValue::Set;

    let target = match &link.target {
        LinkTarget::Url(url) => url.clone(),
        LinkTarget::Profile(document) => serde_json::to_string(document)?,
    };

    Ok(link::ActiveModel {
        slug: Set(link.slug.clone()),
        kind: Set(link.kind().to_string()),
        target: Set(target),
    })
}
