use thiserror::Error;

/// Errors that can occur while talking to the cocktail API
///
/// A drink id that does not resolve is not an error; lookups return
/// `Ok(None)` and the caller renders a not-found page. Malformed drink
/// records are never an error either: normalization simply yields fewer
/// ingredient pairs or instruction steps.
#[derive(Error, Debug)]
pub enum CocktailError {
    /// Transport failure or non-success status from the upstream API
    #[error("Cocktail API request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The API answered but the response carried no drink
    #[error("Cocktail API returned no drink")]
    EmptyResponse,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
