use crate::shared::api_utils::catalog_client;
use contracts::domain::a001_catalog_item::{ShapedRequest, SubmitError};

/// Create the item on the backend
pub async fn publish(request: &ShapedRequest) -> Result<(), SubmitError> {
    catalog_client().create_item(request).await
}
