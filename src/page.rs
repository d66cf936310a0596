use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, PoisonError};

pub const CART_COUNT_CLASS: &str = "cart-count";
pub const ADD_TO_CART_CLASS: &str = "add-to-cart";
pub const MESSAGE_ID: &str = "cart-message";
pub const MESSAGE_CLASS: &str = "cart-message";
pub const VISIBLE_CLASS: &str = "show";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(usize);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: BTreeSet<String>,
    pub data: BTreeMap<String, String>,
    pub text: String,
    pub disabled: bool,
    pub parent: Option<ElementId>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.data.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

#[derive(Debug, Default)]
pub struct Page {
    elements: Vec<Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, parent: Option<ElementId>, mut element: Element) -> ElementId {
        element.parent = parent;
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        (0..self.elements.len()).map(ElementId)
    }

    pub fn children(&self, parent: Option<ElementId>) -> Vec<ElementId> {
        self.ids()
            .filter(|id| self.elements[id.0].parent == parent)
            .collect()
    }

    pub fn query_class(&self, class: &str) -> Vec<ElementId> {
        self.ids()
            .filter(|id| self.elements[id.0].has_class(class))
            .collect()
    }

    pub fn find_by_id(&self, dom_id: &str) -> Option<ElementId> {
        self.ids()
            .find(|id| self.elements[id.0].id.as_deref() == Some(dom_id))
    }

    pub fn find_add_button(&self, upc: &str) -> Option<ElementId> {
        self.ids().find(|id| {
            let element = &self.elements[id.0];
            element.has_class(ADD_TO_CART_CLASS)
                && element.data.get("upc").map(String::as_str) == Some(upc)
        })
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.text = text.into();
        }
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.classes.insert(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.classes.remove(class);
        }
    }

    pub fn set_disabled(&mut self, id: ElementId, disabled: bool) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.disabled = disabled;
        }
    }

    pub fn is_disabled(&self, id: ElementId) -> bool {
        self.element(id).is_some_and(|element| element.disabled)
    }

    pub fn set_cart_count(&mut self, text: &str) {
        for id in self.query_class(CART_COUNT_CLASS) {
            self.set_text(id, text);
        }
    }

    pub fn cart_count_texts(&self) -> Vec<String> {
        self.query_class(CART_COUNT_CLASS)
            .into_iter()
            .map(|id| self.elements[id.0].text.clone())
            .collect()
    }

    pub fn ensure_message_element(&mut self) -> ElementId {
        if let Some(id) = self.find_by_id(MESSAGE_ID) {
            return id;
        }
        self.append(
            None,
            Element::new("div").with_id(MESSAGE_ID).with_class(MESSAGE_CLASS),
        )
    }
}

#[derive(Clone, Default)]
pub struct SharedPage(Arc<Mutex<Page>>);

impl SharedPage {
    pub fn new(page: Page) -> Self {
        Self(Arc::new(Mutex::new(page)))
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut Page) -> R) -> R {
        let mut page = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut page)
    }

    /// Disables `button` until the returned lock is dropped. Returns `None`
    /// when the button is already disabled.
    pub fn lock_button(&self, button: ElementId) -> Option<ButtonLock> {
        self.with(|page| {
            if page.is_disabled(button) {
                return None;
            }
            page.set_disabled(button, true);
            Some(ButtonLock {
                page: self.clone(),
                button,
            })
        })
    }
}

pub struct ButtonLock {
    page: SharedPage,
    button: ElementId,
}

impl Drop for ButtonLock {
    fn drop(&mut self) {
        self.page.with(|page| page.set_disabled(self.button, false));
    }
}
