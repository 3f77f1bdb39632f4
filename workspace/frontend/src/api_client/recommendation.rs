use common::{ProfileSubmission, RECOMMEND_ENDPOINT, RecommendError, RecommendResponse, RecommendationItem};

use crate::api_client;

/// Request scholarship recommendations for a submitted profile
pub async fn recommend(profile: &ProfileSubmission) -> Result<Vec<RecommendationItem>, RecommendError> {
    log::debug!("Requesting recommendations for profile with {} fields", profile.len());
    let result = api_client::post::<RecommendResponse, _>(RECOMMEND_ENDPOINT, profile)
        .await
        .map(RecommendResponse::into_items);
    match &result {
        Ok(items) => log::info!("Fetched {} recommendations", items.len()),
        Err(e) => log::error!("Failed to fetch recommendations: {:?}", e),
    }
    result
}
