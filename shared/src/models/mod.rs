//! Domain models for the restaurant catalog

pub mod reference;
pub mod restaurant;
pub mod review;

pub use reference::{CuisineType, PriceRange};
pub use restaurant::{RestaurantFilter, RestaurantInput, RestaurantListing, Scope};
pub use review::{Review, ReviewCreate};
