use tracing::{debug, warn};

use crate::error::Result;
use crate::sources::CategorySource;
use crate::tree::build_tree;
use crate::types::{DisplayNode, RawCategory};

/// Fetches the raw catalog payload from `source` and maps it into the
/// display tree.
///
/// A malformed payload (`data` missing, not an array, or with records that do
/// not fit the category shape) is recovered locally into an empty tree; a
/// failed fetch propagates to the caller unchanged.
pub async fn category_tree(source: &dyn CategorySource) -> Result<Vec<DisplayNode>> {
    let response = source.fetch_categories().await?;

    let Some(data) = response.get("data") else {
        warn!(source = source.source_name(), "payload has no data field");
        return Ok(Vec::new());
    };
    if !data.is_array() {
        warn!(source = source.source_name(), "payload data is not an array");
        return Ok(Vec::new());
    }

    let categories: Vec<RawCategory> = match serde_json::from_value(data.clone()) {
        Ok(categories) => categories,
        Err(err) => {
            warn!(
                source = source.source_name(),
                error = %err,
                "category records do not fit the expected shape"
            );
            return Ok(Vec::new());
        }
    };

    debug!(
        source = source.source_name(),
        count = categories.len(),
        "building category tree"
    );
    Ok(build_tree(&categories))
}
