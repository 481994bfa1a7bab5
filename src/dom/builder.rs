// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos fácilmente
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};
use crate::dom::{append_child, create_element, on_click, set_attribute, set_text_content};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Establecer class name (reemplaza todas las clases)
    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    /// Establecer ID
    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, "id", id)?;
        Ok(self)
    }

    /// Establecer text content
    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    /// Agregar hijo
    pub fn child(self, child: &Element) -> Result<Self, JsValue> {
        append_child(&self.element, child)?;
        Ok(self)
    }

    /// Agregar varios hijos en orden
    pub fn children(self, children: &[Element]) -> Result<Self, JsValue> {
        for child in children {
            append_child(&self.element, child)?;
        }
        Ok(self)
    }

    /// Establecer atributo
    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    /// Registrar handler de click
    pub fn on_click<F>(self, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        on_click(&self.element, handler)?;
        Ok(self)
    }

    /// Construir y retornar elemento
    pub fn build(self) -> Element {
        self.element
    }
}

/// Botón con clases y texto (type="button" salvo que se cambie)
pub fn button(class: &str, text: &str) -> Result<ElementBuilder, JsValue> {
    ElementBuilder::new("button")?
        .attr("type", "button")
        .map(|b| b.class(class).text(text))
}
