use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use crate::config::AppConfig;
use crate::error::CocktailError;
use crate::model::{DrinkRecord, DrinksResponse};

/// The two filter families the search dropdown offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Alcoholic / Non alcoholic / Optional alcohol
    AlcoholType,
    /// Ordinary Drink, Cocktail, Shot, ...
    Category,
}

impl FilterKind {
    /// Query parameter used by the upstream filter.php/list.php endpoints.
    pub fn api_param(self) -> &'static str {
        match self {
            FilterKind::AlcoholType => "a",
            FilterKind::Category => "c",
        }
    }

    /// Query parameter used in this app's own /search URLs.
    pub fn query_param(self) -> &'static str {
        match self {
            FilterKind::AlcoholType => "type",
            FilterKind::Category => "category",
        }
    }

    /// Drinks in a list.php response carry the option value in a
    /// kind-specific field.
    fn option_value(self, drink: &DrinkRecord) -> Option<String> {
        let value = match self {
            FilterKind::AlcoholType => drink.alcoholic.as_deref(),
            FilterKind::Category => drink.category.as_deref(),
        };
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}

/// The drink lookup operations the presentation layer consumes.
///
/// `CocktailApi` is the real implementation; tests and previews can
/// substitute a canned source.
#[async_trait]
pub trait DrinkSource {
    /// Fetch one random drink. Errors if the transport call fails or the
    /// response carries no drink.
    async fn random_drink(&self) -> Result<DrinkRecord, CocktailError>;

    /// Look up a drink by id. `Ok(None)` when the id does not resolve.
    async fn drink_by_id(&self, id: &str) -> Result<Option<DrinkRecord>, CocktailError>;

    /// Fetch drinks matching a filter value, truncated to `max_results`.
    /// Empty vec when nothing matches.
    async fn drinks_by_filter(
        &self,
        kind: FilterKind,
        value: &str,
        max_results: usize,
    ) -> Result<Vec<DrinkRecord>, CocktailError>;

    /// Enumerate the selectable values for a filter dropdown.
    async fn filter_options(&self, kind: FilterKind) -> Result<Vec<String>, CocktailError>;
}

/// Client for TheCocktailDB JSON API.
pub struct CocktailApi {
    client: Client,
    base_url: String,
}

impl CocktailApi {
    /// Create a client from configuration.
    pub fn new(config: &AppConfig) -> Result<Self, CocktailError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(CocktailApi {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        CocktailApi {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_drinks(&self, path_and_query: &str) -> Result<Vec<DrinkRecord>, CocktailError> {
        let url = format!("{}/{}", self.base_url, path_and_query);
        debug!("GET {}", url);

        let response: DrinksResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.into_drinks())
    }
}

#[async_trait]
impl DrinkSource for CocktailApi {
    async fn random_drink(&self) -> Result<DrinkRecord, CocktailError> {
        let mut drinks = self.get_drinks("random.php").await?;
        if drinks.is_empty() {
            warn!("random.php returned no drink");
            return Err(CocktailError::EmptyResponse);
        }
        Ok(drinks.swap_remove(0))
    }

    async fn drink_by_id(&self, id: &str) -> Result<Option<DrinkRecord>, CocktailError> {
        let query = format!("lookup.php?i={}", urlencoding::encode(id.trim()));
        let mut drinks = self.get_drinks(&query).await?;
        if drinks.is_empty() {
            Ok(None)
        } else {
            Ok(Some(drinks.swap_remove(0)))
        }
    }

    async fn drinks_by_filter(
        &self,
        kind: FilterKind,
        value: &str,
        max_results: usize,
    ) -> Result<Vec<DrinkRecord>, CocktailError> {
        let query = format!(
            "filter.php?{}={}",
            kind.api_param(),
            urlencoding::encode(value.trim())
        );
        let mut drinks = self.get_drinks(&query).await?;
        if drinks.len() > max_results {
            debug!(
                "capping {} matches for {:?}={} to {}",
                drinks.len(),
                kind,
                value,
                max_results
            );
            drinks.truncate(max_results);
        }
        Ok(drinks)
    }

    async fn filter_options(&self, kind: FilterKind) -> Result<Vec<String>, CocktailError> {
        let query = format!("list.php?{}=list", kind.api_param());
        let drinks = self.get_drinks(&query).await?;
        Ok(drinks
            .iter()
            .filter_map(|drink| kind.option_value(drink))
            .collect())
    }
}
