//! Categories: named sub-boards mapping pictograms to what they say.

use crate::constants::IMAGE_NOT_FOUND;
use crate::models::OrderedMap;
use serde::{Deserialize, Serialize};

/// What a pictogram does when it is selected.
///
/// Every pictogram speaks its text. `Opens` additionally marks it as the
/// trigger for the category registered under the same image location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Pictogram {
    /// Speaks the text and stays on the current board
    Speak(String),
    /// Speaks the text and opens the sub-board keyed by this image
    Opens(String),
}

impl Pictogram {
    /// Text spoken when the pictogram is selected.
    pub fn text(&self) -> &str {
        match self {
            Self::Speak(text) | Self::Opens(text) => text,
        }
    }

    /// Returns true for category-opening pictograms.
    pub const fn opens_category(&self) -> bool {
        matches!(self, Self::Opens(_))
    }
}

/// A named set of pictograms and the text each one speaks.
///
/// The empty name is reserved for the root board. Images keep the order in
/// which they were first added; re-adding an image only replaces its text.
#[derive(Debug, Clone, Default)]
pub struct Category {
    name: String,
    items: OrderedMap<String, Pictogram>,
}

impl Category {
    /// Creates an empty category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: OrderedMap::new(),
        }
    }

    /// Creates the unnamed root category.
    pub const fn root() -> Self {
        Self {
            name: String::new(),
            items: OrderedMap::new(),
        }
    }

    /// Display name of the category (empty for root).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Changes the display name, keeping every image.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Maps `image` to spoken `text`, overwriting any previous mapping.
    pub fn add_item(&mut self, image: impl Into<String>, text: impl Into<String>) {
        self.items.set(image.into(), Pictogram::Speak(text.into()));
    }

    /// Maps `image` to a category-opening pictogram that speaks `text`.
    pub fn add_link(&mut self, image: impl Into<String>, text: impl Into<String>) {
        self.items.set(image.into(), Pictogram::Opens(text.into()));
    }

    /// Image locations in the order they were first added.
    pub fn images(&self) -> Vec<String> {
        self.items.keys_in_order()
    }

    /// Text for `image`, or `"Image not found"` when it is not on this board.
    pub fn text(&self, image: &str) -> String {
        match self.items.get(image) {
            Ok(pictogram) => pictogram.text().to_string(),
            Err(_) => IMAGE_NOT_FOUND.to_string(),
        }
    }

    /// Tagged entry for `image`, if present.
    pub fn pictogram(&self, image: &str) -> Option<&Pictogram> {
        self.items.get(image).ok()
    }

    /// Returns true if `image` is on this board.
    pub fn has_image(&self, image: &str) -> bool {
        self.items.has_key(image)
    }

    /// Iterates over `(image, pictogram)` pairs in board order.
    pub fn pictograms(&self) -> impl Iterator<Item = (&String, &Pictogram)> + '_ {
        self.items.iter()
    }

    /// Number of images on this board.
    pub fn len(&self) -> usize {
        self.items.size()
    }

    /// Returns true if no images have been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
