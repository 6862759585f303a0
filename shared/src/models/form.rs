//! Multipart form payloads
//!
//! Create and update requests are sent as `multipart/form-data`. Each form
//! type lists its fields in wire order; the HTTP layer turns the list into
//! parts. Absent optional fields are left out of the list entirely.

use std::fs;
use std::path::Path;

/// A binary file sent as one multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Create an upload, guessing the content type from the file name.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            content_type,
            bytes: bytes.into(),
        }
    }

    /// Override the guessed content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Read an image from disk.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        Ok(Self::new(file_name, bytes))
    }
}

/// Value of a single multipart field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File(ImageUpload),
}

/// Named multipart field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub value: FieldValue,
}

impl FormField {
    pub fn text(name: &'static str, value: impl ToString) -> Self {
        Self {
            name,
            value: FieldValue::Text(value.to_string()),
        }
    }

    pub fn file(name: &'static str, upload: ImageUpload) -> Self {
        Self {
            name,
            value: FieldValue::File(upload),
        }
    }
}

/// A payload that can be encoded as a multipart body.
pub trait MultipartForm {
    /// Fields in the order they are appended to the body.
    fn fields(&self) -> Vec<FormField>;

    /// Field names, in wire order.
    fn field_names(&self) -> Vec<&'static str> {
        self.fields().iter().map(|f| f.name).collect()
    }
}

/// Push the image field only when one is attached.
pub(crate) fn push_image(fields: &mut Vec<FormField>, image: Option<&ImageUpload>) {
    if let Some(image) = image {
        fields.push(FormField::file("image", image.clone()));
    }
}
