//! GraphQL resolvers for videos

use async_graphql::{Context, ErrorExtensions, Object, Result};
use axum_helpers::AppError;

use crate::models::VideoResponse;
use crate::service::VideoService;

/// Query fields contributed by the videos domain.
///
/// Expects a [`VideoService`] in the schema data.
#[derive(Default)]
pub struct VideoQuery;

#[Object]
impl VideoQuery {
    /// All stored videos
    async fn videos(&self, ctx: &Context<'_>) -> Result<Vec<VideoResponse>> {
        let service = ctx.data::<VideoService>()?;
        service
            .list_videos()
            .await
            .map_err(|e| AppError::from(e).extend())
    }
}
