use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use sqlx::types::Json;

use crate::forms::VariantForm;
use crate::models;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ComponentForm {
    #[validate(min_length = 1)]
    pub name: String,
    #[validate(min_length = 1)]
    pub category: String,
    pub description: Option<String>,
    #[validate]
    pub variants: Option<Vec<VariantForm>>,
}

impl Into<models::Component> for ComponentForm {
    fn into(self) -> models::Component {
        let now = Utc::now();
        let variants = self
            .variants
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect();

        models::Component {
            id: 0,
            name: self.name,
            category: self.category,
            description: self.description.unwrap_or_default(),
            variants: Json(variants),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update: `None` means "leave the field unchanged". An explicitly
/// empty `description` is valid and clears the stored value; an empty `name`
/// or `category` is rejected by validation instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ComponentUpdateForm {
    #[validate(min_length = 1)]
    pub name: Option<String>,
    #[validate(min_length = 1)]
    pub category: Option<String>,
    pub description: Option<String>,
}

impl ComponentUpdateForm {
    pub fn apply_to(self, component: &mut models::Component) {
        if let Some(name) = self.name {
            component.name = name;
        }
        if let Some(category) = self.category {
            component.category = category;
        }
        if let Some(description) = self.description {
            component.description = description;
        }
    }
}
