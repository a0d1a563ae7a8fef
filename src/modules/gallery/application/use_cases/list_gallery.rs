use async_trait::async_trait;

use crate::gallery::application::ports::outgoing::gallery_query::{
    GalleryImageView, GalleryQuery, GalleryQueryError,
};
use crate::shared::api::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListGalleryError {
    #[error("Gallery query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IListGalleryUseCase: Send + Sync {
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<GalleryImageView>, ListGalleryError>;
}

pub struct ListGalleryUseCase<Q>
where
    Q: GalleryQuery,
{
    query: Q,
}

impl<Q> ListGalleryUseCase<Q>
where
    Q: GalleryQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListGalleryUseCase for ListGalleryUseCase<Q>
where
    Q: GalleryQuery + Send + Sync,
{
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<GalleryImageView>, ListGalleryError> {
        self.query
            .list(page)
            .await
            .map_err(|e| ListGalleryError::QueryFailed(e.to_string()))
    }
}
