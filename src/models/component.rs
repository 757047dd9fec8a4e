use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

/// A concrete implementation of a component: code plus metadata. Variants are
/// embedded in their parent component's `variants` array and never exist as
/// standalone records; a variant id is unique within that array only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub code: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub deployed_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_commands: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A named UI element (e.g. "Button") owning an ordered array of variants.
/// `category` is a plain name reference, not a foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub description: String,
    pub variants: Json<Vec<Variant>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}], {} variant(s)",
            self.name,
            self.category,
            self.variants.0.len()
        )
    }
}
