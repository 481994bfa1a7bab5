// ============================================================================
// PRODUCTS STATE - Cache de la query de productos + diálogos
// ============================================================================
// La lista nunca se parchea localmente: tras cada mutación se invalida y se
// vuelve a pedir entera al servidor.
// ============================================================================

use crate::models::product::{Product, ProductField, ProductForm, ProductFormErrors, ProductId};
use crate::state::reactivity::ReactiveState;

/// Snapshot de la query "products"
#[derive(Clone, PartialEq, Debug)]
pub struct ProductQuery {
    pub data: Option<Vec<Product>>,
    pub error: Option<String>,
    pub is_fetching: bool,
    /// Debe volver a pedirse en el próximo render
    pub stale: bool,
    /// Número del último fetch iniciado
    pub generation: u64,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_fetching: false,
            stale: true,
            generation: 0,
        }
    }
}

/// Qué debe mostrar la vista de productos
#[derive(Clone, PartialEq, Debug)]
pub enum ProductListDisplay {
    Loading,
    Error(String),
    Ready(Vec<Product>),
}

impl ProductQuery {
    pub fn needs_fetch(&self) -> bool {
        self.stale && !self.is_fetching
    }

    /// Orden: cargando (sin datos todavía) -> error -> lista.
    /// Con error nunca se devuelven datos viejos.
    pub fn display(&self) -> ProductListDisplay {
        if self.data.is_none() && self.error.is_none() {
            return ProductListDisplay::Loading;
        }
        if let Some(error) = &self.error {
            return ProductListDisplay::Error(error.clone());
        }
        ProductListDisplay::Ready(self.data.clone().unwrap_or_default())
    }
}

/// Lo que el usuario lleva escrito en el diálogo de crear/editar.
/// Vive en el estado para sobrevivir a los re-renders completos.
#[derive(Clone, PartialEq, Debug)]
pub struct ProductEditor {
    pub form: ProductForm,
    pub errors: ProductFormErrors,
}

impl ProductEditor {
    pub fn new(form: ProductForm) -> Self {
        Self {
            form,
            errors: ProductFormErrors::new(),
        }
    }
}

/// Diálogo abierto. Como mucho uno a la vez; editar/eliminar llevan el producto seleccionado.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum ActiveDialog {
    #[default]
    Closed,
    Create(ProductEditor),
    Edit(Product, ProductEditor),
    Delete(Product),
}

/// Identidad de un diálogo (tipo + producto), sin su contenido
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DialogKind {
    Closed,
    Create,
    Edit(ProductId),
    Delete(ProductId),
}

impl ActiveDialog {
    pub fn kind(&self) -> DialogKind {
        match self {
            ActiveDialog::Closed => DialogKind::Closed,
            ActiveDialog::Create(_) => DialogKind::Create,
            ActiveDialog::Edit(product, _) => DialogKind::Edit(product.id),
            ActiveDialog::Delete(product) => DialogKind::Delete(product.id),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ActiveDialog::Closed)
    }

    fn editor_mut(&mut self) -> Option<&mut ProductEditor> {
        match self {
            ActiveDialog::Create(editor) | ActiveDialog::Edit(_, editor) => Some(editor),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct ProductsState {
    pub query: ReactiveState<ProductQuery>,
    pub dialog: ReactiveState<ActiveDialog>,
}

impl ProductsState {
    pub fn new() -> Self {
        Self {
            query: ReactiveState::new(ProductQuery::default()),
            dialog: ReactiveState::new(ActiveDialog::Closed),
        }
    }

    pub fn snapshot(&self) -> ProductQuery {
        self.query.get()
    }

    /// Marcar el inicio de un fetch. Devuelve su generación.
    pub fn begin_fetch(&self) -> u64 {
        self.query.update(|query| {
            query.generation += 1;
            query.is_fetching = true;
            query.stale = false;
            query.generation
        })
    }

    /// Aplicar el resultado de un fetch. Los resultados de un fetch
    /// superado por otro más reciente se descartan (devuelve false).
    pub fn finish_fetch(&self, generation: u64, result: Result<Vec<Product>, String>) -> bool {
        let current = self.query.with(|query| query.generation);
        if generation != current {
            log::debug!(
                "⏭️ [PRODUCTS] Resultado del fetch #{} descartado (último: #{})",
                generation,
                current
            );
            return false;
        }

        self.query.update(|query| {
            query.is_fetching = false;
            match result {
                Ok(products) => {
                    query.data = Some(products);
                    query.error = None;
                }
                Err(error) => {
                    query.error = Some(error);
                }
            }
        });
        true
    }

    /// Invalidar la cache: el próximo render (o quien llame) vuelve a pedir la lista
    pub fn invalidate(&self) {
        self.query.update(|query| query.stale = true);
    }

    pub fn dialog(&self) -> ActiveDialog {
        self.dialog.get()
    }

    pub fn open_create(&self) {
        self.dialog
            .set(ActiveDialog::Create(ProductEditor::new(ProductForm::default())));
    }

    pub fn open_edit(&self, product: Product) {
        let editor = ProductEditor::new(ProductForm::from_product(&product));
        self.dialog.set(ActiveDialog::Edit(product, editor));
    }

    pub fn open_delete(&self, product: Product) {
        self.dialog.set(ActiveDialog::Delete(product));
    }

    /// Cerrar cualquier diálogo y limpiar el producto seleccionado
    pub fn close_dialog(&self) {
        if self.dialog.with(ActiveDialog::is_open) {
            self.dialog.set(ActiveDialog::Closed);
        }
    }

    /// Cerrar solo si sigue abierto el diálogo indicado. Devuelve si se cerró.
    pub fn close_dialog_if(&self, kind: DialogKind) -> bool {
        if kind == DialogKind::Closed || self.dialog.with(ActiveDialog::kind) != kind {
            return false;
        }
        self.dialog.set(ActiveDialog::Closed);
        true
    }

    /// Guardar lo tecleado en el formulario abierto (sin re-render)
    pub fn edit_form_field(&self, field: ProductField, value: String) {
        self.dialog.update_silent(|dialog| {
            if let Some(editor) = dialog.editor_mut() {
                editor.form.set_value(field, value);
            }
        });
    }

    /// Guardar los errores mostrados (sin re-render; la vista ya los pintó)
    pub fn set_form_errors(&self, errors: ProductFormErrors) {
        self.dialog.update_silent(|dialog| {
            if let Some(editor) = dialog.editor_mut() {
                editor.errors = errors;
            }
        });
    }

    pub fn editor(&self) -> Option<ProductEditor> {
        self.dialog.with(|dialog| match dialog {
            ActiveDialog::Create(editor) | ActiveDialog::Edit(_, editor) => Some(editor.clone()),
            _ => None,
        })
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + Clone + 'static,
    {
        self.query.subscribe(callback.clone());
        self.dialog.subscribe(callback);
    }
}

impl Default for ProductsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 10.0,
            description: String::new(),
            category: "electronics".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn initial_query_is_loading_and_stale() {
        let state = ProductsState::new();
        let query = state.snapshot();
        assert!(query.needs_fetch());
        assert_eq!(query.display(), ProductListDisplay::Loading);

        state.begin_fetch();
        assert!(!state.snapshot().needs_fetch());
        assert_eq!(state.snapshot().display(), ProductListDisplay::Loading);
    }

    #[test]
    fn failed_fetch_never_shows_old_data() {
        let state = ProductsState::new();
        let first = state.begin_fetch();
        state.finish_fetch(first, Ok(vec![product(1, "Mouse")]));

        state.invalidate();
        let second = state.begin_fetch();
        // Durante el refetch se sigue mostrando la lista
        assert_eq!(
            state.snapshot().display(),
            ProductListDisplay::Ready(vec![product(1, "Mouse")])
        );

        state.finish_fetch(second, Err("Network Error: offline".to_string()));
        assert_eq!(
            state.snapshot().display(),
            ProductListDisplay::Error("Network Error: offline".to_string())
        );
    }

    #[test]
    fn superseded_fetch_is_discarded() {
        let state = ProductsState::new();
        let old = state.begin_fetch();
        let new = state.begin_fetch();

        assert!(state.finish_fetch(new, Ok(vec![product(2, "Keyboard")])));
        assert!(!state.finish_fetch(old, Ok(vec![product(1, "Mouse")])));

        let query = state.snapshot();
        assert_eq!(query.data, Some(vec![product(2, "Keyboard")]));
        assert!(!query.is_fetching);
    }

    #[test]
    fn superseded_fetch_does_not_clear_in_flight_flag() {
        let state = ProductsState::new();
        let old = state.begin_fetch();
        let _new = state.begin_fetch();
        state.finish_fetch(old, Ok(vec![]));
        assert!(state.snapshot().is_fetching);
    }

    #[test]
    fn success_after_error_clears_error() {
        let state = ProductsState::new();
        let first = state.begin_fetch();
        state.finish_fetch(first, Err("Request failed with status code 500".to_string()));
        let second = state.begin_fetch();
        state.finish_fetch(second, Ok(vec![product(3, "Ring")]));
        assert_eq!(
            state.snapshot().display(),
            ProductListDisplay::Ready(vec![product(3, "Ring")])
        );
    }

    #[test]
    fn dialogs_track_single_selected_product() {
        let state = ProductsState::new();
        state.open_edit(product(7, "Jacket"));
        assert_eq!(state.dialog().kind(), DialogKind::Edit(7));

        state.open_delete(product(8, "Shirt"));
        assert_eq!(state.dialog().kind(), DialogKind::Delete(8));
        assert!(state.editor().is_none());

        state.close_dialog();
        assert_eq!(state.dialog(), ActiveDialog::Closed);

        state.open_create();
        assert_eq!(state.dialog().kind(), DialogKind::Create);
        assert_eq!(state.editor().map(|e| e.form), Some(ProductForm::default()));
    }

    #[test]
    fn typed_values_survive_list_refresh() {
        let state = ProductsState::new();
        let renders = std::rc::Rc::new(std::cell::Cell::new(0));
        {
            let renders = renders.clone();
            state.subscribe(move || renders.set(renders.get() + 1));
        }

        state.open_edit(product(4, "Lamp"));
        let generation = state.begin_fetch();
        let before = renders.get();

        state.edit_form_field(ProductField::Title, "Desk lamp".to_string());
        state.edit_form_field(ProductField::Price, "12.".to_string());
        let mut errors = ProductFormErrors::new();
        errors.insert(ProductField::Category, "Please fill out this field.".to_string());
        state.set_form_errors(errors.clone());
        assert_eq!(renders.get(), before);

        state.finish_fetch(generation, Ok(vec![product(4, "Lamp")]));
        assert_eq!(renders.get(), before + 1);

        let editor = state.editor().expect("el diálogo de edición sigue abierto");
        assert_eq!(editor.form.title, "Desk lamp");
        assert_eq!(editor.form.price, "12.");
        assert_eq!(editor.errors, errors);
        assert_eq!(state.dialog().kind(), DialogKind::Edit(4));
    }

    #[test]
    fn close_if_only_closes_the_matching_dialog() {
        let state = ProductsState::new();
        state.open_delete(product(5, "Bag"));

        assert!(!state.close_dialog_if(DialogKind::Create));
        assert!(!state.close_dialog_if(DialogKind::Delete(6)));
        assert_eq!(state.dialog().kind(), DialogKind::Delete(5));

        assert!(state.close_dialog_if(DialogKind::Delete(5)));
        assert_eq!(state.dialog(), ActiveDialog::Closed);
        assert!(!state.close_dialog_if(DialogKind::Closed));
    }
}
