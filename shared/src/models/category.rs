//! Category Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::form::{FormField, ImageUpload, MultipartForm, push_image};
use super::record::{int_field, opaque_record, str_field};
use crate::types::EntityId;

/// Collection path of the category endpoint.
pub const CATEGORY_PATH: &str = "category";

/// Category record, kept exactly as the backend sent it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(Value);

opaque_record!(Category);

impl Category {
    pub fn id(&self) -> Option<EntityId> {
        int_field(&self.0, "id")
    }

    pub fn name(&self) -> Option<&str> {
        str_field(&self.0, "name")
    }

    pub fn description(&self) -> Option<&str> {
        str_field(&self.0, "description")
    }

    /// Image reference, relative to the client's image path
    pub fn image(&self) -> Option<&str> {
        str_field(&self.0, "image")
    }
}

/// Create/update category payload
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
    pub image: Option<ImageUpload>,
}

impl CategoryForm {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }
}

impl MultipartForm for CategoryForm {
    fn fields(&self) -> Vec<FormField> {
        let mut fields = vec![
            FormField::text("name", &self.name),
            FormField::text("description", &self.description),
        ];
        push_image(&mut fields, self.image.as_ref());
        fields
    }
}
