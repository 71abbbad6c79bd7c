use crate::{api::Api, assets::database_ext::AssetsDatabaseExt, error::Error as OpsdeskError};
use anyhow::bail;
use opsdesk_types::assets::{
    Asset, AssetCreateParams, AssetUpdateParams, AssetsListParams, AssetsPage,
};
use std::net::IpAddr;
use time::OffsetDateTime;
use tracing::{debug, info};

/// Message of the error returned when referenced asset doesn't exist.
pub const ASSET_NOT_FOUND_MESSAGE: &str = "Asset not found";

/// Defines the maximum length of the asset name, hostname, and location.
const MAX_ASSET_FIELD_LENGTH: usize = 255;

pub struct AssetsApiExt<'a> {
    api: &'a Api,
    assets: AssetsDatabaseExt<'a>,
}

impl<'a> AssetsApiExt<'a> {
    /// Creates Assets API.
    pub fn new(api: &'a Api) -> Self {
        Self {
            api,
            assets: api.db.assets(),
        }
    }

    /// Returns a single page of assets, newest first.
    pub async fn get_assets(&self, params: AssetsListParams) -> anyhow::Result<AssetsPage> {
        let config = &self.api.config.assets;
        let page = params.page.unwrap_or(1);
        let limit = params.limit.unwrap_or(config.default_page_size);
        if page == 0 {
            bail!(OpsdeskError::client("Page number should be greater than 0."));
        }
        if limit == 0 || limit > config.max_page_size {
            bail!(OpsdeskError::client(format!(
                "Page size should be between 1 and {}.",
                config.max_page_size
            )));
        }

        let assets = self.assets.get_assets(params.asset_type).await?;
        let total_assets = assets.len();
        Ok(AssetsPage {
            assets: assets
                .into_iter()
                .skip((page - 1).saturating_mul(limit))
                .take(limit)
                .collect(),
            total_pages: total_assets.div_ceil(limit),
            current_page: page,
            total_assets,
        })
    }

    /// Returns all assets that match the specified query.
    pub async fn search_assets(&self, query: Option<&str>) -> anyhow::Result<Vec<Asset>> {
        match query {
            Some(query) if !query.is_empty() => self.assets.search_assets(query).await,
            _ => bail!(OpsdeskError::client("Query parameter is required")),
        }
    }

    /// Returns asset by its ID.
    pub async fn get_asset(&self, id: u64) -> anyhow::Result<Asset> {
        let Some(asset) = self.assets.get_asset(id).await? else {
            bail!(OpsdeskError::not_found(ASSET_NOT_FOUND_MESSAGE));
        };

        Ok(asset)
    }

    /// Creates a new asset.
    pub async fn create_asset(&self, params: AssetCreateParams) -> anyhow::Result<Asset> {
        let non_empty = |value: Option<String>| value.filter(|value| !value.is_empty());
        let (Some(name), Some(hostname), Some(asset_type), Some(ip_address)) = (
            non_empty(params.name),
            non_empty(params.hostname),
            params.asset_type,
            non_empty(params.ip_address),
        ) else {
            bail!(OpsdeskError::client(
                "Name, hostname, type and IP address are required"
            ));
        };

        Self::validate_length("name", &name)?;
        Self::validate_length("hostname", &hostname)?;
        Self::validate_ip_address(&ip_address)?;
        if let Some(ref location) = params.location {
            Self::validate_length("location", location)?;
        }

        let created_at = OffsetDateTime::now_utc();
        let unique_hostname = hostname.clone();
        let asset = self
            .assets
            .insert_asset(&unique_hostname, |id| Asset {
                id,
                name,
                hostname,
                asset_type,
                status: params.status.unwrap_or_default(),
                ip_address,
                description: params.description,
                location: params.location,
                owner_id: params.owner_id,
                specifications: params.specifications,
                created_at,
                updated_at: created_at,
            })
            .await?;

        info!(
            asset.id = asset.id,
            asset.hostname = asset.hostname,
            "Created asset."
        );

        Ok(asset)
    }

    /// Updates existing asset. Properties that aren't provided are left unchanged.
    pub async fn update_asset(&self, id: u64, params: AssetUpdateParams) -> anyhow::Result<Asset> {
        let is_empty = |value: &Option<String>| value.as_ref().is_some_and(|value| value.is_empty());
        if is_empty(&params.name) || is_empty(&params.hostname) || is_empty(&params.ip_address) {
            bail!(OpsdeskError::client(
                "Name, hostname and IP address cannot be empty"
            ));
        }

        if let Some(ref name) = params.name {
            Self::validate_length("name", name)?;
        }
        if let Some(ref hostname) = params.hostname {
            Self::validate_length("hostname", hostname)?;
        }
        if let Some(ref ip_address) = params.ip_address {
            Self::validate_ip_address(ip_address)?;
        }
        if let Some(ref location) = params.location {
            Self::validate_length("location", location)?;
        }

        let updated_at = OffsetDateTime::now_utc();
        let asset = self
            .assets
            .update_asset(id, |asset| {
                if let Some(name) = params.name {
                    asset.name = name;
                }
                if let Some(hostname) = params.hostname {
                    asset.hostname = hostname;
                }
                if let Some(asset_type) = params.asset_type {
                    asset.asset_type = asset_type;
                }
                if let Some(status) = params.status {
                    asset.status = status;
                }
                if let Some(ip_address) = params.ip_address {
                    asset.ip_address = ip_address;
                }
                if params.description.is_some() {
                    asset.description = params.description;
                }
                if params.location.is_some() {
                    asset.location = params.location;
                }
                if params.owner_id.is_some() {
                    asset.owner_id = params.owner_id;
                }
                if params.specifications.is_some() {
                    asset.specifications = params.specifications;
                }
                asset.updated_at = updated_at;
            })
            .await?;

        let Some(asset) = asset else {
            bail!(OpsdeskError::not_found(ASSET_NOT_FOUND_MESSAGE));
        };

        debug!(asset.id = asset.id, asset.hostname = asset.hostname, "Updated asset.");

        Ok(asset)
    }

    /// Removes existing asset.
    pub async fn remove_asset(&self, id: u64) -> anyhow::Result<()> {
        if !self.assets.remove_asset(id).await? {
            bail!(OpsdeskError::not_found(ASSET_NOT_FOUND_MESSAGE));
        }

        info!(asset.id = id, "Removed asset.");

        Ok(())
    }

    fn validate_length(field: &str, value: &str) -> anyhow::Result<()> {
        if value.chars().count() > MAX_ASSET_FIELD_LENGTH {
            bail!(OpsdeskError::client(format!(
                "Asset {field} cannot be longer than {MAX_ASSET_FIELD_LENGTH} characters."
            )));
        }

        Ok(())
    }

    fn validate_ip_address(ip_address: &str) -> anyhow::Result<()> {
        if ip_address.parse::<IpAddr>().is_err() {
            bail!(OpsdeskError::client(format!(
                "Asset IP address ('{ip_address}') is not valid."
            )));
        }

        Ok(())
    }
}

impl Api {
    /// Returns an API to work with assets.
    pub fn assets(&self) -> AssetsApiExt<'_> {
        AssetsApiExt::new(self)
    }
}
