use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Content, Tag};
use crate::types::Style;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,
    pub class: Option<String>,

    /// Plain attributes (`data-*`, `role`, `aria-*`).
    pub attrs: BTreeMap<String, String>,

    // Inline style
    pub style: Style,

    // Content
    pub content: Content,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.name()),
            tag,
            class: None,
            attrs: BTreeMap::new(),
            style: Style::default(),
            content: Content::None,
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn table() -> Self {
        Self::new(Tag::Table)
    }

    pub fn caption(text: impl Into<String>) -> Self {
        Self::new(Tag::Caption).text(text)
    }

    pub fn colgroup() -> Self {
        Self::new(Tag::Colgroup)
    }

    pub fn col() -> Self {
        Self::new(Tag::Col)
    }

    pub fn thead() -> Self {
        Self::new(Tag::Thead)
    }

    pub fn tbody() -> Self {
        Self::new(Tag::Tbody)
    }

    pub fn tfoot() -> Self {
        Self::new(Tag::Tfoot)
    }

    pub fn tr() -> Self {
        Self::new(Tag::Tr)
    }

    pub fn th(text: impl Into<String>) -> Self {
        Self::new(Tag::Th).text(text)
    }

    pub fn td(text: impl Into<String>) -> Self {
        Self::new(Tag::Td).text(text)
    }

    /// An element with a caller-defined tag name.
    pub fn custom(name: impl AsRef<str>) -> Self {
        Self::new(Tag::from_name(name.as_ref()))
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    // Style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Child elements, empty for text and empty content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Deep copy with every id in the subtree suffixed, so the copy can live
    /// in the same document as the original.
    pub fn with_id_suffix(&self, suffix: &str) -> Element {
        let content = match &self.content {
            Content::Children(children) => Content::Children(
                children.iter().map(|c| c.with_id_suffix(suffix)).collect(),
            ),
            other => other.clone(),
        };

        Element {
            id: format!("{}{suffix}", self.id),
            content,
            ..self.clone_shallow()
        }
    }

    /// Copy of this element without its content.
    pub fn clone_shallow(&self) -> Element {
        Element {
            id: self.id.clone(),
            tag: self.tag.clone(),
            class: self.class.clone(),
            attrs: self.attrs.clone(),
            style: self.style.clone(),
            content: Content::None,
        }
    }
}
