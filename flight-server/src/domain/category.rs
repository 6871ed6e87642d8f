//! Fare categories and the category table.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Error returned when parsing an invalid category identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid category id: {reason}")]
pub struct InvalidCategoryId {
    reason: &'static str,
}

/// A fare category identifier such as `economy` or `first`.
///
/// Identifiers are lowercase ASCII letters, digits, `-` or `_`.
///
/// # Examples
///
/// ```
/// use flight_server::domain::CategoryId;
///
/// let id = CategoryId::parse("business").unwrap();
/// assert_eq!(id.as_str(), "business");
///
/// // Uppercase is rejected by the strict parser...
/// assert!(CategoryId::parse("Business").is_err());
/// // ...but accepted by the normalizing one
/// assert_eq!(CategoryId::parse_normalized(" Business ").unwrap(), id);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

impl CategoryId {
    /// Parse a category id, rejecting anything that is not already canonical.
    pub fn parse(s: &str) -> Result<Self, InvalidCategoryId> {
        if s.is_empty() {
            return Err(InvalidCategoryId {
                reason: "must not be empty",
            });
        }

        if !s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
        {
            return Err(InvalidCategoryId {
                reason: "must be lowercase ASCII letters, digits, '-' or '_'",
            });
        }

        Ok(CategoryId(s.to_string()))
    }

    /// Parse a category id after trimming and lower-casing the input.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidCategoryId> {
        Self::parse(&s.trim().to_ascii_lowercase())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryId({})", self.0)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CategoryId {
    type Error = InvalidCategoryId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CategoryId::parse(&value)
    }
}

impl From<CategoryId> for String {
    fn from(id: CategoryId) -> Self {
        id.0
    }
}

/// Descriptive profile of a fare category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryProfile {
    pub id: CategoryId,
    pub display_name: String,
    pub description: String,
    /// Benefits in display order.
    pub benefits: Vec<String>,
}

impl CategoryProfile {
    pub fn new(
        id: CategoryId,
        display_name: impl Into<String>,
        description: impl Into<String>,
        benefits: Vec<String>,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            description: description.into(),
            benefits,
        }
    }
}

/// Ordered table of fare categories.
///
/// The table is never empty and its ids are unique. Order matters: the
/// first entry is the category shown when the user has not picked one.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    profiles: Vec<CategoryProfile>,
}

impl CategoryTable {
    /// Build a table from profiles in display order.
    pub fn new(profiles: Vec<CategoryProfile>) -> Result<Self, DomainError> {
        if profiles.is_empty() {
            return Err(DomainError::EmptyCategoryTable);
        }

        for (i, profile) in profiles.iter().enumerate() {
            if profiles[..i].iter().any(|p| p.id == profile.id) {
                return Err(DomainError::DuplicateCategory(profile.id.clone()));
            }
        }

        Ok(Self { profiles })
    }

    /// The economy / business / first table used by the site.
    pub fn standard() -> Self {
        let profile = |id: &str, name: &str, description: &str, benefits: [&str; 3]| {
            CategoryProfile::new(
                CategoryId(id.to_string()),
                name,
                description,
                benefits.iter().map(|b| b.to_string()).collect(),
            )
        };

        Self {
            profiles: vec![
                profile(
                    "economy",
                    "Economy",
                    "Affordable and comfortable seating.",
                    ["Free WiFi", "Snacks included", "Standard legroom"],
                ),
                profile(
                    "business",
                    "Business",
                    "Premium service with extra comfort.",
                    ["Priority boarding", "Extra legroom", "Free meals"],
                ),
                profile(
                    "first",
                    "First Class",
                    "Ultimate luxury and privacy.",
                    ["Private cabin", "Gourmet meals", "VIP service"],
                ),
            ],
        }
    }

    /// The category used when none has been selected.
    pub fn default_category(&self) -> &CategoryProfile {
        // Non-empty by construction
        &self.profiles[0]
    }

    /// Look up a profile by id.
    pub fn get(&self, id: &CategoryId) -> Option<&CategoryProfile> {
        self.profiles.iter().find(|p| &p.id == id)
    }

    /// Look up a profile from user input, ignoring case and surrounding
    /// whitespace.
    pub fn lookup(&self, raw: &str) -> Option<&CategoryProfile> {
        let id = CategoryId::parse_normalized(raw).ok()?;
        self.get(&id)
    }

    /// Iterate profiles in table order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryProfile> {
        self.profiles.iter()
    }

    /// Iterate ids in table order.
    pub fn ids(&self) -> impl Iterator<Item = &CategoryId> {
        self.profiles.iter().map(|p| &p.id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Always false; kept alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::standard()
    }
}
