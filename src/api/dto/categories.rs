//! DTO for the fixed category list.

use serde::Serialize;

use crate::domain::entities::Category;

/// One event category with its display attributes.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            icon: category.icon,
            color: category.color,
        }
    }
}
