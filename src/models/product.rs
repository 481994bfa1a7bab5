use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::validation::{parse_price, validate_required};

/// ID asignado por el servidor
pub type ProductId = u32;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String, // URL de la imagen
}

/// Producto sin ID: cuerpo de POST y PUT
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProductDraft {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl Product {
    pub fn formatted_price(&self) -> String {
        format_price(self.price)
    }
}

#[cfg(test)]
impl Product {
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            title: self.title.clone(),
            price: self.price,
            description: self.description.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
        }
    }

    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            title: draft.title,
            price: draft.price,
            description: draft.description,
            category: draft.category,
            image: draft.image,
        }
    }
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Campos del formulario de producto, en orden de render
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum ProductField {
    Title,
    Price,
    Description,
    Category,
    Image,
}

impl ProductField {
    pub const ALL: [ProductField; 5] = [
        ProductField::Title,
        ProductField::Price,
        ProductField::Description,
        ProductField::Category,
        ProductField::Image,
    ];

    /// ID del input en el DOM
    pub fn id(&self) -> &'static str {
        match self {
            ProductField::Title => "title",
            ProductField::Price => "price",
            ProductField::Description => "description",
            ProductField::Category => "category",
            ProductField::Image => "image",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductField::Title => "Title",
            ProductField::Price => "Price",
            ProductField::Description => "Description",
            ProductField::Category => "Category",
            ProductField::Image => "Image URL",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            ProductField::Price => "number",
            _ => "text",
        }
    }
}

pub type ProductFormErrors = BTreeMap<ProductField, String>;

/// Valores crudos del formulario (tal cual los escribe el usuario)
#[derive(Clone, PartialEq, Debug)]
pub struct ProductForm {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            price: "0".to_string(),
            description: String::new(),
            category: String::new(),
            image: String::new(),
        }
    }
}

impl ProductForm {
    /// Formulario pre-rellenado para editar un producto existente
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
        }
    }

    pub fn value(&self, field: ProductField) -> &str {
        match field {
            ProductField::Title => &self.title,
            ProductField::Price => &self.price,
            ProductField::Description => &self.description,
            ProductField::Category => &self.category,
            ProductField::Image => &self.image,
        }
    }

    pub fn set_value(&mut self, field: ProductField, value: String) {
        match field {
            ProductField::Title => self.title = value,
            ProductField::Price => self.price = value,
            ProductField::Description => self.description = value,
            ProductField::Category => self.category = value,
            ProductField::Image => self.image = value,
        }
    }

    /// Valida todos los campos y construye el draft.
    /// Todos son obligatorios; el precio debe ser un número >= 0.
    pub fn validate(&self) -> Result<ProductDraft, ProductFormErrors> {
        let mut errors = ProductFormErrors::new();

        for field in ProductField::ALL {
            if field == ProductField::Price {
                continue;
            }
            if let Some(message) = validate_required(self.value(field)) {
                errors.insert(field, message);
            }
        }

        let price = match parse_price(&self.price) {
            Ok(price) => price,
            Err(message) => {
                errors.insert(ProductField::Price, message);
                0.0
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProductDraft {
            title: self.title.clone(),
            price,
            description: self.description.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
        })
    }
}
