use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::entities::document::{ensure_not_empty, merge_field, Document, FieldValues, Fields, UnknownCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlogCategory {
    Technology,
    Lifestyle,
    Health,
    Education,
    Business,
}

impl BlogCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlogCategory::Technology => "Technology",
            BlogCategory::Lifestyle => "Lifestyle",
            BlogCategory::Health => "Health",
            BlogCategory::Education => "Education",
            BlogCategory::Business => "Business",
        }
    }
}

impl FromStr for BlogCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Technology" => Ok(BlogCategory::Technology),
            "Lifestyle" => Ok(BlogCategory::Lifestyle),
            "Health" => Ok(BlogCategory::Health),
            "Education" => Ok(BlogCategory::Education),
            "Business" => Ok(BlogCategory::Business),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

impl TryFrom<String> for BlogCategory {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image: String,
    #[sqlx(try_from = "String")]
    pub category: BlogCategory,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBlog {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: String,
    pub category: BlogCategory,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_blog_patch"))]
pub struct BlogPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<BlogCategory>,
}

fn validate_blog_patch(patch: &BlogPatch) -> Result<(), ValidationError> {
    ensure_not_empty(patch)
}

impl Fields for NewBlog {
    fn field_values(&self) -> FieldValues {
        vec![
            ("title", self.title.clone()),
            ("content", self.content.clone()),
            ("image", self.image.clone()),
            ("category", self.category.as_str().to_string()),
        ]
    }
}

impl Fields for BlogPatch {
    fn field_values(&self) -> FieldValues {
        let mut values = Vec::new();
        if let Some(v) = &self.title { values.push(("title", v.clone())); }
        if let Some(v) = &self.content { values.push(("content", v.clone())); }
        if let Some(v) = &self.image { values.push(("image", v.clone())); }
        if let Some(v) = &self.category { values.push(("category", v.as_str().to_string())); }
        values
    }
}

impl Document for Blog {
    const COLLECTION: &'static str = "blogs";
    const LABEL: &'static str = "Blog";

    type New = NewBlog;
    type Patch = BlogPatch;

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_new(id: Uuid, new: NewBlog, created_at: DateTime<Utc>) -> Self {
        Blog {
            id,
            title: new.title,
            content: new.content,
            image: new.image,
            category: new.category,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: &BlogPatch) -> bool {
        merge_field(&mut self.title, &patch.title)
            | merge_field(&mut self.content, &patch.content)
            | merge_field(&mut self.image, &patch.image)
            | merge_field(&mut self.category, &patch.category)
    }

    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }
}
