//! This module models the closet the engine works over: the items in it, the categories they're
//! browsed by, and loading a whole catalog from CSV.
//!
//! The engine itself only needs two things from an item, an id and (maybe) a color, and asks for
//! them through the [`Wearable`] trait. [`ClosetItem`] is the record the rest of the product stores,
//! but any type that can answer those two questions can be classified.

use std::collections::HashSet;
use std::convert::TryFrom;
use std::io;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::harmony::{HarmonyEngine, RecommendationSet};
use crate::palette::normalize_color_tag;

/// Anything that can be put in a closet and classified by color.
pub trait Wearable {
    /// A unique identifier. Two items with the same id are the same item.
    fn id(&self) -> &str;
    /// The item's main color as a hex code, if it has one. The engine reads malformed codes as hue 0
    /// rather than rejecting them.
    fn primary_color(&self) -> Option<&str>;
}

/// The kinds of clothing a closet is browsed by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Category {
    /// Shirts, sweaters, blouses.
    Top,
    /// Pants, skirts, shorts.
    Bottom,
    /// Footwear.
    Shoe,
}

/// An unrecognized category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0:?}")]
pub struct CategoryParseError(pub String);

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Accepts singular or plural, in any case: "top", "Tops", and "TOP" are all [`Category::Top`].
    fn from_str(s: &str) -> Result<Category, CategoryParseError> {
        match s.trim().to_lowercase().as_str() {
            "top" | "tops" => Ok(Category::Top),
            "bottom" | "bottoms" => Ok(Category::Bottom),
            "shoe" | "shoes" => Ok(Category::Shoe),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = CategoryParseError;

    fn try_from(s: String) -> Result<Category, CategoryParseError> {
        s.parse()
    }
}

/// Which part of the closet to show.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Everything, including items without a category.
    All,
    /// Only items of one category.
    Only(Category),
}

impl Default for CategoryFilter {
    fn default() -> CategoryFilter {
        CategoryFilter::All
    }
}

impl CategoryFilter {
    /// Whether an item is shown under this filter.
    pub fn matches(&self, item: &ClosetItem) -> bool {
        match *self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == Some(category),
        }
    }
}

/// A single piece of clothing as stored in the catalog. Only the id is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosetItem {
    /// Unique id.
    pub id: String,
    /// Display name, e.g. "Orange Skirt".
    #[serde(default)]
    pub name: Option<String>,
    /// What kind of clothing this is.
    #[serde(default)]
    pub category: Option<Category>,
    /// The main color, normally a `#RRGGBB` hex code. Stored under the key `color`.
    #[serde(default, rename = "color")]
    pub primary_color: Option<String>,
    /// Brand, if known.
    #[serde(default)]
    pub brand: Option<String>,
}

impl ClosetItem {
    /// An item with an id and a color and nothing else.
    pub fn new<S: Into<String>, C: Into<String>>(id: S, color: C) -> ClosetItem {
        ClosetItem {
            primary_color: Some(color.into()),
            ..ClosetItem::uncolored(id)
        }
    }

    /// An item with only an id.
    pub fn uncolored<S: Into<String>>(id: S) -> ClosetItem {
        ClosetItem {
            id: id.into(),
            name: None,
            category: None,
            primary_color: None,
            brand: None,
        }
    }

    /// Sets the display name.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> ClosetItem {
        self.name = Some(name.into());
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: Category) -> ClosetItem {
        self.category = Some(category);
        self
    }

    /// Sets the brand.
    pub fn with_brand<S: Into<String>>(mut self, brand: S) -> ClosetItem {
        self.brand = Some(brand.into());
        self
    }
}

impl Wearable for ClosetItem {
    fn id(&self) -> &str {
        &self.id
    }

    // an empty string is how the add-item form leaves an untouched color field; anything else,
    // padded or not, goes to the engine as stored
    fn primary_color(&self) -> Option<&str> {
        self.primary_color
            .as_ref()
            .map(|c| c.as_str())
            .filter(|c| !c.is_empty())
    }
}

/// Errors from loading a catalog or changing the items in a closet.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The CSV couldn't be read or a row didn't fit the item shape.
    #[error("could not read catalog: {0}")]
    Csv(#[from] csv::Error),
    /// Two items had the same id.
    #[error("duplicate item id {0:?}")]
    DuplicateId(String),
    /// No item with this id is in the closet.
    #[error("no item with id {0:?}")]
    UnknownId(String),
    /// An item being added or edited was missing a required field.
    #[error("item {id:?} is missing a {field}")]
    MissingField {
        /// The id of the rejected item.
        id: String,
        /// Which field was missing: `name` or `category`.
        field: &'static str,
    },
}

// the add and edit forms won't save an item without a name and a category
fn validate_item(item: &ClosetItem) -> Result<(), CatalogError> {
    let blank_name = item.name.as_ref().map_or(true, |name| name.trim().is_empty());
    if blank_name {
        return Err(CatalogError::MissingField {
            id: item.id.clone(),
            field: "name",
        });
    }
    if item.category.is_none() {
        return Err(CatalogError::MissingField {
            id: item.id.clone(),
            field: "category",
        });
    }
    Ok(())
}

fn normalize_item(mut item: ClosetItem) -> ClosetItem {
    item.primary_color = item
        .primary_color
        .as_ref()
        .and_then(|c| normalize_color_tag(c));
    item
}

/// A user's whole collection of clothes, in the order they were added.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Closet {
    /// The items, in catalog order.
    pub items: Vec<ClosetItem>,
}

impl From<Vec<ClosetItem>> for Closet {
    fn from(items: Vec<ClosetItem>) -> Closet {
        Closet { items }
    }
}

impl Closet {
    /// Reads a catalog from CSV with a header row. The `id` column is required; `name`,
    /// `category`, `color`, and `brand` are optional, and empty cells mean "not set". Colors are
    /// run through [`normalize_color_tag`] so that names like "navy" become hex codes.
    ///
    /// # Errors
    /// [`CatalogError::Csv`] for unreadable input or rows that don't deserialize (including unknown
    /// categories), [`CatalogError::DuplicateId`] if an id appears twice.
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Closet, CatalogError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for result in rdr.deserialize() {
            let item: ClosetItem = result?;
            if !seen.insert(item.id.clone()) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            items.push(normalize_item(item));
        }
        debug!("loaded {} closet items", items.len());
        Ok(Closet { items })
    }

    /// Reads a CSV catalog from a file. See [`from_csv_reader`](#method.from_csv_reader).
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Closet, CatalogError> {
        let file = std::fs::File::open(path).map_err(csv::Error::from)?;
        Closet::from_csv_reader(file)
    }

    /// Adds a new item to the end of the closet, normalizing its color tag.
    ///
    /// # Errors
    /// [`CatalogError::MissingField`] if the item has no name or no category,
    /// [`CatalogError::DuplicateId`] if its id is already taken.
    pub fn add(&mut self, item: ClosetItem) -> Result<&ClosetItem, CatalogError> {
        validate_item(&item)?;
        if self.get(&item.id).is_some() {
            return Err(CatalogError::DuplicateId(item.id));
        }
        debug!("adding item {}", item.id);
        self.items.push(normalize_item(item));
        let last = self.items.len() - 1;
        Ok(&self.items[last])
    }

    /// Replaces the item with the same id, keeping its place in the closet.
    ///
    /// # Errors
    /// [`CatalogError::MissingField`] as for [`add`](#method.add), [`CatalogError::UnknownId`] if no
    /// item has this id.
    pub fn update(&mut self, item: ClosetItem) -> Result<&ClosetItem, CatalogError> {
        validate_item(&item)?;
        let index = self
            .position(&item.id)
            .ok_or_else(|| CatalogError::UnknownId(item.id.clone()))?;
        debug!("updating item {}", item.id);
        self.items[index] = normalize_item(item);
        Ok(&self.items[index])
    }

    /// Takes an item out of the closet and hands it back.
    ///
    /// # Errors
    /// [`CatalogError::UnknownId`] if no item has this id.
    pub fn remove(&mut self, id: &str) -> Result<ClosetItem, CatalogError> {
        let index = self
            .position(id)
            .ok_or_else(|| CatalogError::UnknownId(id.to_string()))?;
        debug!("removing item {}", id);
        Ok(self.items.remove(index))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Looks an item up by id.
    pub fn get(&self, id: &str) -> Option<&ClosetItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The items shown under a filter, in catalog order.
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&ClosetItem> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    /// Recommendations for the item with the given id, drawn from the rest of the closet. `None` if
    /// no such item exists; an empty set if it exists but has no color.
    pub fn recommend(
        &self,
        engine: &HarmonyEngine,
        base_id: &str,
    ) -> Option<RecommendationSet<'_, ClosetItem>> {
        let base = self.get(base_id)?;
        Some(engine.classify(base, &self.items))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` if the closet has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
