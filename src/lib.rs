//! Browse and search cocktail recipes from TheCocktailDB API.
//!
//! The interesting part of this crate is the normalization layer that turns
//! the API's loosely-typed, sparsely-populated records into stable,
//! renderable structures:
//!
//! - [`normalize_ingredients`] discovers the open-ended `strIngredientN` /
//!   `strMeasureN` field family and pairs them up in numeric slot order.
//! - [`segment_instructions`] splits a free-text instructions blob into
//!   display steps, tolerating the API's mixed formatting conventions.
//! - [`paginate()`] slices a capped, fetched result set into pages, clamping
//!   whatever page number a query string delivers.
//!
//! All three are pure functions: malformed input yields a smaller (possibly
//! empty) result, never an error. [`CocktailApi`] is the upstream client,
//! behind the [`DrinkSource`] trait so callers can substitute their own.

pub mod api;
pub mod config;
pub mod error;
pub mod instructions;
pub mod model;
pub mod normalize;
pub mod paginate;
pub mod query;
pub mod render;

pub use api::{CocktailApi, DrinkSource, FilterKind};
pub use config::AppConfig;
pub use error::CocktailError;
pub use instructions::segment_instructions;
pub use model::{DrinkRecord, DrinksResponse, IngredientLine};
pub use normalize::normalize_ingredients;
pub use paginate::{paginate, PageView};
pub use query::{back_to_search_url, page_from_query, SearchFilter};
