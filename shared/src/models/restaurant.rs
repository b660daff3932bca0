//! Restaurant model, write payloads, and filter semantics

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::util::split_tags;

/// A restaurant row hydrated with its price symbol and cuisine names,
/// as produced by the aggregating list query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RestaurantListing {
    pub restaurant_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub street_address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: String,
    pub phone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_active: bool,
    /// Price symbol, absent when the restaurant has no pricing association
    pub price_symbol: Option<String>,
    /// Assigned cuisine names, alphabetical; empty when none assigned
    pub cuisines: Vec<String>,
}

impl RestaurantListing {
    /// Flattened, comma-joined cuisine names for table display
    pub fn cuisine_list(&self) -> String {
        self.cuisines.join(", ")
    }
}

/// Create/update payload for a restaurant
///
/// Update is a full replace: scalars are overwritten and both association
/// sets are replaced with the ones given here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    pub street_address: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    pub zip_code: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// At most one pricing association
    #[serde(default)]
    pub price_range_id: Option<i64>,
    /// Zero or more cuisine associations
    #[serde(default)]
    pub cuisine_ids: Vec<i64>,
}

impl RestaurantInput {
    /// Required-field validation, run before any store interaction.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::required_field("name"));
        }
        if self.street_address.trim().is_empty() {
            return Err(AppError::required_field("street_address"));
        }
        if self.zip_code.trim().is_empty() {
            return Err(AppError::required_field("zip_code"));
        }
        Ok(())
    }
}

/// Visibility scope for catalog reads
///
/// Search and map views show active rows only; the manage views show all
/// rows with their status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    #[default]
    ActiveOnly,
    All,
}

/// In-memory filter predicates applied on top of a scoped catalog read
///
/// All present filters AND together; the cuisine set ORs internally
/// (set intersection).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantFilter {
    /// Case-insensitive substring match on the name
    pub name: Option<String>,
    /// Exact price symbol match
    pub price: Option<String>,
    /// Matches when it intersects the restaurant's cuisine set
    pub cuisines: Vec<String>,
}

impl RestaurantFilter {
    /// Build a filter from raw query parameters.
    ///
    /// Blank name disables the name filter; a price of "All" (any case)
    /// disables the price filter; cuisines arrive comma-separated.
    pub fn from_params(
        name: Option<&str>,
        price: Option<&str>,
        cuisines: Option<&str>,
    ) -> Self {
        let name = name
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let price = price
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"))
            .map(str::to_string);
        let cuisines = cuisines.map(split_tags).unwrap_or_default();
        Self {
            name,
            price,
            cuisines,
        }
    }

    /// Whether no filter is active
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.cuisines.is_empty()
    }

    /// Apply the filter to one hydrated row.
    pub fn matches(&self, row: &RestaurantListing) -> bool {
        if let Some(needle) = &self.name
            && !row.name.to_lowercase().contains(&needle.to_lowercase())
        {
            return false;
        }
        if let Some(price) = &self.price
            && row.price_symbol.as_deref() != Some(price.as_str())
        {
            return false;
        }
        if !self.cuisines.is_empty() {
            // A restaurant with no cuisines never matches a cuisine filter.
            let hit = row
                .cuisines
                .iter()
                .any(|c| self.cuisines.iter().any(|f| f == c));
            if !hit {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(name: &str, price: Option<&str>, cuisines: &[&str]) -> RestaurantListing {
        RestaurantListing {
            restaurant_id: 1,
            name: name.to_string(),
            description: None,
            website: None,
            street_address: "100 Main St".to_string(),
            city: Some("Dallas".to_string()),
            state: Some("TX".to_string()),
            zip_code: "75201".to_string(),
            phone: None,
            latitude: None,
            longitude: None,
            is_active: true,
            price_symbol: price.map(str::to_string),
            cuisines: cuisines.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn input(name: &str, street: &str, zip: &str) -> RestaurantInput {
        RestaurantInput {
            name: name.to_string(),
            description: None,
            website: None,
            street_address: street.to_string(),
            city: None,
            state: None,
            zip_code: zip.to_string(),
            phone: None,
            latitude: None,
            longitude: None,
            price_range_id: None,
            cuisine_ids: vec![],
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let f = RestaurantFilter::default();
        assert!(f.is_empty());
        assert!(f.matches(&listing("Joe's Pizza", Some("$"), &["Pizza"])));
        assert!(f.matches(&listing("Nameless", None, &[])));
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let f = RestaurantFilter::from_params(Some("pizza"), None, None);
        assert!(f.matches(&listing("Joe's PIZZA Palace", None, &[])));
        assert!(!f.matches(&listing("Burger Barn", None, &[])));
    }

    #[test]
    fn price_filter_is_exact_equality() {
        let f = RestaurantFilter::from_params(None, Some("$$"), None);
        assert!(f.matches(&listing("A", Some("$$"), &[])));
        assert!(!f.matches(&listing("B", Some("$"), &[])));
        // No pricing association never matches a price filter
        assert!(!f.matches(&listing("C", None, &[])));
    }

    #[test]
    fn price_all_disables_the_filter() {
        let f = RestaurantFilter::from_params(None, Some("All"), None);
        assert!(f.price.is_none());
        assert!(f.matches(&listing("A", None, &[])));
    }

    #[test]
    fn cuisine_filter_is_set_intersection() {
        let f = RestaurantFilter::from_params(None, None, Some("Italian,Pizza"));
        assert!(f.matches(&listing("A", None, &["Pizza"])));
        assert!(f.matches(&listing("B", None, &["Italian", "Seafood"])));
        assert!(!f.matches(&listing("C", None, &["Mexican"])));
    }

    #[test]
    fn restaurant_without_cuisines_never_matches_cuisine_filter() {
        let f = RestaurantFilter::from_params(None, None, Some("Pizza"));
        assert!(!f.matches(&listing("A", Some("$"), &[])));
    }

    #[test]
    fn active_filters_and_together() {
        let f = RestaurantFilter::from_params(Some("joe"), Some("$"), Some("Pizza"));
        assert!(f.matches(&listing("Joe's Pizza", Some("$"), &["Italian", "Pizza"])));
        // Fails the price leg only
        assert!(!f.matches(&listing("Joe's Pizza", Some("$$"), &["Pizza"])));
        // Fails the name leg only
        assert!(!f.matches(&listing("Maria's", Some("$"), &["Pizza"])));
    }

    #[test]
    fn blank_params_produce_an_empty_filter() {
        let f = RestaurantFilter::from_params(Some("  "), Some(""), Some(" , ,"));
        assert!(f.is_empty());
    }

    #[test]
    fn cuisine_list_is_comma_joined() {
        let row = listing("A", None, &["Italian", "Pizza"]);
        assert_eq!(row.cuisine_list(), "Italian, Pizza");
    }

    #[test]
    fn validate_rejects_blank_required_fields() {
        assert!(input("Joe's", "100 Main St", "75201").validate().is_ok());
        assert!(input("", "100 Main St", "75201").validate().is_err());
        assert!(input("Joe's", "   ", "75201").validate().is_err());
        assert!(input("Joe's", "100 Main St", "").validate().is_err());
    }
}
