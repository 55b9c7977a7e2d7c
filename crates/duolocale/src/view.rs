use std::sync::{Arc, RwLock};

/// A host view whose key-tagged elements this crate rewrites.
///
/// Implementations walk their own element tree: for every element tagged
/// with a translation key they call `translate` and replace the element's
/// visible text when it returns `Some`. Untagged elements, and tagged
/// elements whose key the active dictionary does not cover, keep their
/// current text. Only text is ever touched, never structure.
pub trait TranslatableView: Send + Sync {
    /// Visits every tagged element, replacing its text where `translate`
    /// produces a value for its key.
    fn apply_translations(&mut self, translate: &mut dyn FnMut(&str) -> Option<String>);

    /// Records the active language tag on the view root.
    fn set_language_tag(&mut self, tag: &str);
}

#[derive(Clone, Debug)]
struct Element {
    key: Option<String>,
    text: String,
}

#[derive(Debug, Default)]
struct PageState {
    elements: Vec<Element>,
    language_tag: Option<String>,
}

/// An in-memory [`TranslatableView`] for tests, demos and headless hosts.
///
/// Clones share the same underlying page, so a host can hand one handle to
/// an applier and keep another to inspect what got rendered.
#[derive(Clone, Debug, Default)]
pub struct InMemoryPage {
    state: Arc<RwLock<PageState>>,
}

impl InMemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element carrying a translation key and fallback text.
    pub fn push_tagged(&self, key: impl Into<String>, fallback: impl Into<String>) {
        self.state
            .write()
            .expect("lock poisoned")
            .elements
            .push(Element {
                key: Some(key.into()),
                text: fallback.into(),
            });
    }

    /// Appends an element without a translation key.
    pub fn push_text(&self, text: impl Into<String>) {
        self.state
            .write()
            .expect("lock poisoned")
            .elements
            .push(Element {
                key: None,
                text: text.into(),
            });
    }

    /// Returns the current text of the first element tagged with `key`.
    pub fn text_of(&self, key: &str) -> Option<String> {
        self.state
            .read()
            .expect("lock poisoned")
            .elements
            .iter()
            .find(|element| element.key.as_deref() == Some(key))
            .map(|element| element.text.clone())
    }

    /// Returns every element's current text, in insertion order.
    pub fn texts(&self) -> Vec<String> {
        self.state
            .read()
            .expect("lock poisoned")
            .elements
            .iter()
            .map(|element| element.text.clone())
            .collect()
    }

    /// Returns the language tag recorded by the last apply, if any.
    pub fn language_tag(&self) -> Option<String> {
        self.state.read().expect("lock poisoned").language_tag.clone()
    }
}

impl TranslatableView for InMemoryPage {
    fn apply_translations(&mut self, translate: &mut dyn FnMut(&str) -> Option<String>) {
        let mut state = self.state.write().expect("lock poisoned");
        for element in &mut state.elements {
            if let Some(key) = &element.key
                && let Some(text) = translate(key)
            {
                element.text = text;
            }
        }
    }

    fn set_language_tag(&mut self, tag: &str) {
        self.state.write().expect("lock poisoned").language_tag = Some(tag.to_owned());
    }
}
