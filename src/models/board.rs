//! Board navigation state: the category registry and the open category.
//!
//! A board is a root category plus any number of sub-boards. Each sub-board
//! is registered under the image location of the pictogram that opens it.
//! Selecting such a pictogram moves the board into that category; `reset`
//! is the only way back to root.

use crate::constants::ITEM_PREFIX;
use crate::models::{Category, OrderedMap};
use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

/// Registry key of the root category.
pub const ROOT_KEY: &str = "";

/// Fallback returned if the registry ever loses its root entry.
static DETACHED_ROOT: Category = Category::root();

/// Checks that `image` fits on a board file line as a pictogram location.
pub fn validate_image_location(image: &str) -> Result<()> {
    if image.is_empty() {
        anyhow::bail!("Image location cannot be empty");
    }
    if image.chars().any(char::is_whitespace) {
        anyhow::bail!("Image location '{image}' cannot contain whitespace");
    }
    Ok(())
}

/// Checks that `image` can be written as a category header.
///
/// Header keys must also not start with the item prefix, or the loader
/// would read the header back as a pictogram line.
pub fn validate_category_key(image: &str) -> Result<()> {
    validate_image_location(image)?;
    if image.starts_with(ITEM_PREFIX) {
        anyhow::bail!(
            "Category trigger image location '{image}' cannot start with '{ITEM_PREFIX}'"
        );
    }
    Ok(())
}

/// Checks that `text` fits on a single board file line.
pub fn validate_text(text: &str) -> Result<()> {
    if text.contains(['\n', '\r']) {
        anyhow::bail!("Text {text:?} cannot contain line breaks");
    }
    Ok(())
}

/// Image locations that open a category when added to a board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerSet {
    images: Vec<String>,
}

impl TriggerSet {
    /// Builds a trigger set, dropping duplicates and entries that cannot be
    /// written as a category header.
    pub fn new<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for image in images {
            let image = image.into();
            if let Err(err) = validate_category_key(&image) {
                debug!("Ignoring trigger: {}", err);
                continue;
            }
            if !set.contains(&image) {
                set.images.push(image);
            }
        }
        set
    }

    /// Returns true if `image` is a configured trigger.
    pub fn contains(&self, image: &str) -> bool {
        self.images.iter().any(|candidate| candidate == image)
    }

    /// Configured triggers in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.images.iter().map(String::as_str)
    }

    /// Number of configured triggers.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if no triggers are configured.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Result of registering a category under a trigger image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// A new, empty category was registered
    Created,
    /// The key was already registered; its category was renamed and kept
    /// its images
    Renamed {
        /// Name before the rename
        previous: String,
    },
    /// The key was already registered under the same name
    Unchanged,
}

/// Navigation state for one AAC session.
///
/// The registry is the sole owner of every [`Category`]. The open category
/// is tracked by its registry key and resolved through the registry on each
/// access.
#[derive(Debug, Clone)]
pub struct BoardState {
    registry: OrderedMap<String, Category>,
    current: String,
    triggers: TriggerSet,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(TriggerSet::default())
    }
}

impl BoardState {
    /// Creates a board containing only the empty root category.
    pub fn new(triggers: TriggerSet) -> Self {
        let mut registry = OrderedMap::new();
        registry.set(ROOT_KEY.to_string(), Category::root());

        Self {
            registry,
            current: ROOT_KEY.to_string(),
            triggers,
        }
    }

    /// Configured trigger images.
    pub fn triggers(&self) -> &TriggerSet {
        &self.triggers
    }

    /// Returns true if selecting `image` should open a category.
    ///
    /// An image is a trigger when it appears in the configured trigger set
    /// or when a category is already registered under it.
    pub fn is_category_trigger(&self, image: &str) -> bool {
        if image == ROOT_KEY {
            return false;
        }
        self.triggers.contains(image) || self.registry.has_key(image)
    }

    /// Adds a pictogram to the open category.
    ///
    /// Trigger images are stored as category-opening pictograms and also
    /// register a category named `text` under `image`. Returns the
    /// registration outcome for triggers and `None` for plain pictograms.
    pub fn add(
        &mut self,
        image: impl Into<String>,
        text: impl Into<String>,
    ) -> Option<Registration> {
        let image = image.into();
        let text = text.into();

        if self.is_category_trigger(&image) {
            self.current_category_mut().add_link(image.clone(), text.clone());
            Some(self.register(image, text))
        } else {
            debug!("Adding '{}' to category '{}'", image, self.current);
            self.current_category_mut().add_item(image, text);
            None
        }
    }

    /// Adds a category-opening pictogram regardless of the trigger set.
    ///
    /// Fails without changing the board if `image` cannot be written as a
    /// category header or `text` spans more than one line.
    pub fn add_category(
        &mut self,
        image: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Registration> {
        let image = image.into();
        let text = text.into();

        validate_category_key(&image)?;
        validate_text(&text)?;

        self.current_category_mut().add_link(image.clone(), text.clone());
        Ok(self.register(image, text))
    }

    // Keys reaching here passed `validate_category_key`, either through
    // `add_category` or through `TriggerSet::new`.
    fn register(&mut self, image: String, text: String) -> Registration {
        if !self.registry.has_key(image.as_str()) {
            info!("Registering category '{}' under '{}'", text, image);
            self.registry.set(image, Category::new(text));
            return Registration::Created;
        }

        let Ok(existing) = self.registry.get_mut(image.as_str()) else {
            return Registration::Unchanged;
        };
        if existing.name() == text {
            return Registration::Unchanged;
        }

        let previous = existing.name().to_string();
        info!(
            "Renaming category under '{}' from '{}' to '{}'",
            image, previous, text
        );
        existing.rename(text);
        Registration::Renamed { previous }
    }

    /// Image locations on the open category, in board order.
    pub fn images_in_current_category(&self) -> Vec<String> {
        self.current_category().images()
    }

    /// Returns the text for `image` and follows it if it opens a category.
    ///
    /// Selecting a trigger whose category has not been registered yet
    /// speaks the text and leaves the board where it is.
    pub fn select(&mut self, image: &str) -> String {
        let text = self.current_category().text(image);

        if self.is_category_trigger(image) {
            if self.registry.has_key(image) {
                debug!("Opening category '{}'", image);
                self.current = image.to_string();
            } else {
                debug!("No category registered for trigger '{}'", image);
            }
        }

        text
    }

    /// Returns the board to the root category.
    pub fn reset(&mut self) {
        self.current = ROOT_KEY.to_string();
    }

    /// The open category.
    pub fn current_category(&self) -> &Category {
        self.registry
            .get(self.current.as_str())
            .or_else(|_| self.registry.get(ROOT_KEY))
            .unwrap_or(&DETACHED_ROOT)
    }

    fn current_category_mut(&mut self) -> &mut Category {
        if !self.registry.has_key(self.current.as_str()) {
            self.current = ROOT_KEY.to_string();
        }
        let key = self.current.clone();
        self.registry.get_or_insert_with(key, Category::root)
    }

    /// Display name of the open category (empty at root).
    pub fn current_category_name(&self) -> &str {
        self.current_category().name()
    }

    /// Registry key of the open category (empty at root).
    pub fn current_category_key(&self) -> &str {
        &self.current
    }

    /// Returns true when the root category is open.
    pub fn is_at_root(&self) -> bool {
        self.current == ROOT_KEY
    }

    /// Looks up a registered category by key.
    pub fn category(&self, key: &str) -> Option<&Category> {
        self.registry.get(key).ok()
    }

    /// Mutable access to a registered category by key.
    pub fn category_mut(&mut self, key: &str) -> Option<&mut Category> {
        self.registry.get_mut(key).ok()
    }

    /// Iterates over `(key, category)` pairs in registration order, root first.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &Category)> + '_ {
        self.registry
            .iter()
            .map(|(key, category)| (key.as_str(), category))
    }

    /// Number of registered categories, including root.
    pub fn category_count(&self) -> usize {
        self.registry.size()
    }

    /// Writes every non-root category to `destination`, replacing the file.
    pub fn export(&self, destination: &Path) -> Result<()> {
        crate::parser::save_board(self, destination)
    }
}
