use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub name: String,
}
