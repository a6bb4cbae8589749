use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::entities::document::{ensure_not_empty, merge_field, Document, FieldValues, Fields, UnknownCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectCategory {
    Frontend,
    Backend,
    #[serde(rename = "Full Stack")]
    FullStack,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Frontend => "Frontend",
            ProjectCategory::Backend => "Backend",
            ProjectCategory::FullStack => "Full Stack",
        }
    }
}

impl FromStr for ProjectCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Frontend" => Ok(ProjectCategory::Frontend),
            "Backend" => Ok(ProjectCategory::Backend),
            "Full Stack" => Ok(ProjectCategory::FullStack),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

impl TryFrom<String> for ProjectCategory {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub image: String,
    pub live: String,
    pub code: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub category: ProjectCategory,
    pub created_at: DateTime<Utc>,
}

// ───── Input Requests ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub live: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
    pub category: ProjectCategory,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_project_patch"))]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ProjectCategory>,
}

fn validate_project_patch(patch: &ProjectPatch) -> Result<(), ValidationError> {
    ensure_not_empty(patch)
}

// ───── Conversions ──────────────────────────────────────────────────

impl Fields for NewProject {
    fn field_values(&self) -> FieldValues {
        vec![
            ("title", self.title.clone()),
            ("image", self.image.clone()),
            ("live", self.live.clone()),
            ("code", self.code.clone()),
            ("description", self.description.clone()),
            ("category", self.category.as_str().to_string()),
        ]
    }
}

impl Fields for ProjectPatch {
    fn field_values(&self) -> FieldValues {
        let mut values = Vec::new();
        if let Some(v) = &self.title { values.push(("title", v.clone())); }
        if let Some(v) = &self.image { values.push(("image", v.clone())); }
        if let Some(v) = &self.live { values.push(("live", v.clone())); }
        if let Some(v) = &self.code { values.push(("code", v.clone())); }
        if let Some(v) = &self.description { values.push(("description", v.clone())); }
        if let Some(v) = &self.category { values.push(("category", v.as_str().to_string())); }
        values
    }
}

impl Document for Project {
    const COLLECTION: &'static str = "projects";
    const LABEL: &'static str = "Project";

    type New = NewProject;
    type Patch = ProjectPatch;

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_new(id: Uuid, new: NewProject, created_at: DateTime<Utc>) -> Self {
        Project {
            id,
            title: new.title,
            image: new.image,
            live: new.live,
            code: new.code,
            description: new.description,
            category: new.category,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: &ProjectPatch) -> bool {
        // Non-short-circuiting `|` so every supplied field is merged.
        merge_field(&mut self.title, &patch.title)
            | merge_field(&mut self.image, &patch.image)
            | merge_field(&mut self.live, &patch.live)
            | merge_field(&mut self.code, &patch.code)
            | merge_field(&mut self.description, &patch.description)
            | merge_field(&mut self.category, &patch.category)
    }

    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }
}
