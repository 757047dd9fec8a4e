use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

use crate::models;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VariantForm {
    #[validate(min_length = 1)]
    pub name: String,
    pub description: Option<String>,
    #[validate(min_length = 1)]
    pub code: String,
    pub author: Option<String>,
    pub deployed_link: Option<String>,
    pub package_commands: Option<String>,
    pub image_url: Option<String>,
}

impl Into<models::Variant> for VariantForm {
    fn into(self) -> models::Variant {
        let now = Utc::now();
        let author = match self.author {
            Some(author) if !author.is_empty() => author,
            _ => "Anonymous".to_string(),
        };

        models::Variant {
            id: Uuid::new_v4(),
            name: self.name,
            description: self.description.unwrap_or_default(),
            code: self.code,
            author,
            deployed_link: self.deployed_link.unwrap_or_default(),
            package_commands: self.package_commands,
            image_url: self.image_url,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update addressed at one embedded variant. `None` leaves a field
/// untouched; empty strings are valid explicit values for `description` and
/// `deployed_link` only. An empty `author` falls back to the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VariantUpdateForm {
    #[validate(min_length = 1)]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(min_length = 1)]
    pub code: Option<String>,
    pub author: Option<String>,
    pub deployed_link: Option<String>,
    pub package_commands: Option<String>,
    pub image_url: Option<String>,
}

impl VariantUpdateForm {
    pub fn apply_to(self, variant: &mut models::Variant) {
        if let Some(name) = self.name {
            variant.name = name;
        }
        if let Some(description) = self.description {
            variant.description = description;
        }
        if let Some(code) = self.code {
            variant.code = code;
        }
        if let Some(author) = self.author {
            if !author.is_empty() {
                variant.author = author;
            }
        }
        if let Some(deployed_link) = self.deployed_link {
            variant.deployed_link = deployed_link;
        }
        if let Some(package_commands) = self.package_commands {
            variant.package_commands = Some(package_commands);
        }
        if let Some(image_url) = self.image_url {
            variant.image_url = Some(image_url);
        }
        variant.updated_at = Utc::now();
    }
}
