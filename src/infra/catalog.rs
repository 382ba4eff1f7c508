//! Startup loading of the article catalog.

use std::path::Path;

use tracing::info;

use crate::domain::catalog::Catalog;

use super::error::InfraError;

/// Load the catalog from `path`, or fall back to the built-in posts.
pub async fn load(path: Option<&Path>) -> Result<Catalog, InfraError> {
    let Some(path) = path else {
        let catalog = Catalog::builtin();
        info!(
            target = "folio::catalog",
            posts = catalog.len(),
            "Using built-in catalog"
        );
        return Ok(catalog);
    };

    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| InfraError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = Catalog::from_toml_str(&source).map_err(|source| InfraError::CatalogInvalid {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        target = "folio::catalog",
        path = %path.display(),
        posts = catalog.len(),
        "Loaded catalog"
    );
    Ok(catalog)
}
