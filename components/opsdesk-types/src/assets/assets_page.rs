use crate::assets::Asset;
use serde::Serialize;
use utoipa::ToSchema;

/// A single page of assets.
#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetsPage {
    /// Assets on the requested page, newest first.
    pub assets: Vec<Asset>,
    /// Total number of pages for the requested page size.
    pub total_pages: usize,
    /// 1-based number of the returned page.
    pub current_page: usize,
    /// Total number of assets that match the filter.
    pub total_assets: usize,
}
