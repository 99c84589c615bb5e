use crate::domain::category::{Category, CategoryWithCount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub post_count: u64,
}

impl CategoryDto {
    pub fn with_count(category: Category, post_count: u64) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            description: category.description.map(|d| d.into_inner()),
            post_count,
        }
    }
}

impl From<CategoryWithCount> for CategoryDto {
    fn from(value: CategoryWithCount) -> Self {
        Self::with_count(value.category, value.post_count)
    }
}
