//! Layer configuration management.

use std::env;

use anyhow::{Context, Result};

/// Tunables for the GraphQL layer, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct GraphQlConfig {
    /// Page size applied when a connection query supplies neither `first`
    /// nor `last`.
    pub default_page_size: usize,
}

impl Default for GraphQlConfig {
    fn default() -> Self {
        Self {
            default_page_size: 100,
        }
    }
}

impl GraphQlConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let default_page_size = match env::var("GRAPHQL_DEFAULT_PAGE_SIZE") {
            Ok(raw) => raw.parse().context("Invalid GRAPHQL_DEFAULT_PAGE_SIZE")?,
            Err(_) => Self::default().default_page_size,
        };

        Ok(Self { default_page_size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_size_is_100() {
        assert_eq!(GraphQlConfig::default().default_page_size, 100);
    }
}
