//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::form::{FormField, ImageUpload, MultipartForm, push_image};
use super::record::{decimal_field, int_field, opaque_record, str_field};
use crate::types::EntityId;

/// Collection path of the product endpoint.
pub const PRODUCT_PATH: &str = "product";

/// Product record, kept exactly as the backend sent it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product(Value);

opaque_record!(Product);

impl Product {
    pub fn id(&self) -> Option<EntityId> {
        int_field(&self.0, "id")
    }

    pub fn name(&self) -> Option<&str> {
        str_field(&self.0, "name")
    }

    /// Unit price, from a JSON number or a numeric string
    pub fn price(&self) -> Option<Decimal> {
        decimal_field(&self.0, "price")
    }

    pub fn description(&self) -> Option<&str> {
        str_field(&self.0, "description")
    }

    pub fn image(&self) -> Option<&str> {
        str_field(&self.0, "image")
    }

    /// Category reference (`categoryId`)
    pub fn category_id(&self) -> Option<EntityId> {
        int_field(&self.0, "categoryId")
    }
}

/// Create/update product payload
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub image: Option<ImageUpload>,
    pub category_id: EntityId,
}

impl ProductForm {
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        description: impl Into<String>,
        category_id: EntityId,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
            image: None,
            category_id,
        }
    }

    pub fn with_image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }
}

impl MultipartForm for ProductForm {
    fn fields(&self) -> Vec<FormField> {
        let mut fields = vec![
            FormField::text("name", &self.name),
            FormField::text("price", self.price),
            FormField::text("description", &self.description),
        ];
        push_image(&mut fields, self.image.as_ref());
        fields.push(FormField::text("categoryId", self.category_id));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldValue;

    #[test]
    fn test_form_fields_order() {
        let form = ProductForm::new("Cola", Decimal::new(250, 2), "33cl can", 4)
            .with_image(ImageUpload::new("cola.jpg", vec![0xFF, 0xD8]));

        assert_eq!(
            form.field_names(),
            vec!["name", "price", "description", "image", "categoryId"]
        );
        let fields = form.fields();
        assert_eq!(fields[1].value, FieldValue::Text("2.50".into()));
        assert_eq!(fields[4].value, FieldValue::Text("4".into()));
    }

    #[test]
    fn test_form_fields_skip_missing_image() {
        let form = ProductForm::new("Cola", Decimal::new(25, 1), "", 4);
        assert_eq!(
            form.field_names(),
            vec!["name", "price", "description", "categoryId"]
        );
    }

    #[test]
    fn test_product_price_from_number() {
        let json = serde_json::json!({"id": 1, "name": "Cola", "price": 2.5, "categoryId": 4});
        let product: Product = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(product.price(), Some(Decimal::new(25, 1)));
        assert_eq!(product.category_id(), Some(4));
        assert_eq!(serde_json::to_value(&product).unwrap(), json);
    }

    #[test]
    fn test_integer_price_stays_integer() {
        let product: Product = serde_json::from_str(r#"{"id":1,"name":"Water","price":3}"#).unwrap();
        assert_eq!(product.price(), Some(Decimal::new(3, 0)));
        assert_eq!(serde_json::to_string(&product).unwrap(), r#"{"id":1,"name":"Water","price":3}"#);
    }
}
