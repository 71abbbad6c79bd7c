use crate::{
    database::{Database, Record, Table},
    error::Error as OpsdeskError,
};
use anyhow::{anyhow, bail};
use opsdesk_types::assets::{Asset, AssetType};
use tokio::sync::RwLock;

impl Record for Asset {
    fn id(&self) -> u64 {
        self.id
    }
}

/// A database extension for the assets-related operations.
pub struct AssetsDatabaseExt<'db> {
    table: &'db RwLock<Table<Asset>>,
}

impl<'db> AssetsDatabaseExt<'db> {
    pub fn new(table: &'db RwLock<Table<Asset>>) -> Self {
        Self { table }
    }

    /// Retrieves all assets, newest first. If `asset_type` is specified, only assets of this type
    /// are returned.
    pub async fn get_assets(&self, asset_type: Option<AssetType>) -> anyhow::Result<Vec<Asset>> {
        Ok(self
            .table
            .read()
            .await
            .rows()
            .iter()
            .rev()
            .filter(|asset| asset_type.map_or(true, |asset_type| asset.asset_type == asset_type))
            .cloned()
            .collect())
    }

    /// Retrieves assets whose name, hostname, IP address, or description contain the specified
    /// query, ignoring case.
    pub async fn search_assets(&self, query: &str) -> anyhow::Result<Vec<Asset>> {
        let query = query.to_lowercase();
        let matches = |value: &str| value.to_lowercase().contains(&query);
        Ok(self
            .table
            .read()
            .await
            .rows()
            .iter()
            .filter(|asset| {
                matches(&asset.name)
                    || matches(&asset.hostname)
                    || matches(&asset.ip_address)
                    || asset.description.as_deref().is_some_and(matches)
            })
            .cloned()
            .collect())
    }

    /// Retrieves asset with the specified ID.
    pub async fn get_asset(&self, id: u64) -> anyhow::Result<Option<Asset>> {
        Ok(self.table.read().await.get(id).cloned())
    }

    /// Inserts an asset built for the next available ID. Fails if there is already an asset with
    /// the same hostname.
    pub async fn insert_asset<F>(&self, hostname: &str, build: F) -> anyhow::Result<Asset>
    where
        F: FnOnce(u64) -> Asset,
    {
        let mut table = self.table.write().await;
        if table.rows().iter().any(|asset| asset.hostname == hostname) {
            bail!(OpsdeskError::client_with_root_cause(anyhow!(
                "Asset with such hostname ('{hostname}') already exists."
            )));
        }

        Ok(table.insert_with(build).clone())
    }

    /// Updates asset with the specified ID in place and returns the updated asset, or `None` if
    /// the asset doesn't exist. Fails if the updated hostname is already used by another asset.
    pub async fn update_asset<F>(&self, id: u64, update: F) -> anyhow::Result<Option<Asset>>
    where
        F: FnOnce(&mut Asset),
    {
        let mut table = self.table.write().await;
        let Some(mut asset) = table.get(id).cloned() else {
            return Ok(None);
        };

        update(&mut asset);

        if table
            .rows()
            .iter()
            .any(|other| other.id != id && other.hostname == asset.hostname)
        {
            bail!(OpsdeskError::client_with_root_cause(anyhow!(
                "Asset with such hostname ('{}') already exists.",
                asset.hostname
            )));
        }

        Ok(table.get_mut(id).map(|row| {
            *row = asset;
            row.clone()
        }))
    }

    /// Removes asset with the specified ID, returns `false` if the asset doesn't exist.
    pub async fn remove_asset(&self, id: u64) -> anyhow::Result<bool> {
        Ok(self.table.write().await.remove(id).is_some())
    }
}

impl Database {
    /// Returns a database extension for the assets-related operations.
    pub fn assets(&self) -> AssetsDatabaseExt<'_> {
        AssetsDatabaseExt::new(&self.assets)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        database::Database,
        error::{Error as OpsdeskError, ErrorKind},
        tests::MockAssetBuilder,
    };
    use insta::assert_snapshot;
    use opsdesk_types::assets::AssetType;

    #[tokio::test]
    async fn can_add_and_retrieve_assets() -> anyhow::Result<()> {
        let db = Database::create();
        let assets = db.assets();
        assert!(assets.get_assets(None).await?.is_empty());

        let asset_one = assets
            .insert_asset("web-01", |id| {
                MockAssetBuilder::create(id, "Web Server 1", "web-01")
                    .unwrap()
                    .build()
            })
            .await?;
        let asset_two = assets
            .insert_asset("db-01", |id| {
                MockAssetBuilder::create(id, "Database Server", "db-01")
                    .unwrap()
                    .with_ip_address("10.0.0.2")
                    .build()
            })
            .await?;
        assert_eq!(asset_one.id, 1);
        assert_eq!(asset_two.id, 2);

        assert_eq!(assets.get_asset(1).await?, Some(asset_one.clone()));
        assert_eq!(assets.get_asset(2).await?, Some(asset_two.clone()));
        assert_eq!(assets.get_asset(3).await?, None);
        assert_eq!(
            assets.get_assets(None).await?,
            vec![asset_two.clone(), asset_one.clone()]
        );
        assert_eq!(
            assets.get_assets(Some(AssetType::Server)).await?,
            vec![asset_two, asset_one]
        );
        assert!(assets.get_assets(Some(AssetType::Router)).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn fails_to_insert_asset_with_duplicate_hostname() -> anyhow::Result<()> {
        let db = Database::create();
        let assets = db.assets();

        assets
            .insert_asset("web-01", |id| {
                MockAssetBuilder::create(id, "Web Server 1", "web-01")
                    .unwrap()
                    .build()
            })
            .await?;

        let err = OpsdeskError::from(
            assets
                .insert_asset("web-01", |id| {
                    MockAssetBuilder::create(id, "Web Server 2", "web-01")
                        .unwrap()
                        .build()
                })
                .await
                .unwrap_err(),
        );
        assert_eq!(err.kind(), ErrorKind::ClientError);
        assert_snapshot!(err, @"Asset with such hostname ('web-01') already exists.");
        assert_eq!(assets.get_assets(None).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn can_search_assets() -> anyhow::Result<()> {
        let db = Database::create();
        let assets = db.assets();

        let web_server = assets
            .insert_asset("web-01", |id| {
                MockAssetBuilder::create(id, "Web Server 1", "web-01")
                    .unwrap()
                    .build()
            })
            .await?;
        let db_server = assets
            .insert_asset("db-01", |id| {
                MockAssetBuilder::create(id, "Database Server", "db-01")
                    .unwrap()
                    .with_ip_address("192.168.1.20")
                    .with_description("Primary PostgreSQL instance")
                    .build()
            })
            .await?;

        assert_eq!(assets.search_assets("WEB").await?, vec![web_server.clone()]);
        assert_eq!(assets.search_assets("192.168").await?, vec![db_server.clone()]);
        assert_eq!(assets.search_assets("postgres").await?, vec![db_server.clone()]);
        assert_eq!(
            assets.search_assets("server").await?,
            vec![web_server, db_server]
        );
        assert!(assets.search_assets("router").await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn can_update_asset() -> anyhow::Result<()> {
        let db = Database::create();
        let assets = db.assets();

        let asset = assets
            .insert_asset("web-01", |id| {
                MockAssetBuilder::create(id, "Web Server 1", "web-01")
                    .unwrap()
                    .build()
            })
            .await?;

        let updated_asset = assets
            .update_asset(asset.id, |asset| asset.hostname = "web-02".to_string())
            .await?;
        assert_eq!(
            updated_asset.as_ref().map(|asset| asset.hostname.as_str()),
            Some("web-02")
        );
        assert_eq!(assets.get_asset(asset.id).await?, updated_asset);

        // Asset can keep its own hostname.
        assert!(assets
            .update_asset(asset.id, |asset| asset.name = "Web Server".to_string())
            .await?
            .is_some());

        assert_eq!(
            assets
                .update_asset(2, |asset| asset.name = "Unknown".to_string())
                .await?,
            None
        );

        Ok(())
    }

    #[tokio::test]
    async fn fails_to_update_asset_with_duplicate_hostname() -> anyhow::Result<()> {
        let db = Database::create();
        let assets = db.assets();

        assets
            .insert_asset("web-01", |id| {
                MockAssetBuilder::create(id, "Web Server 1", "web-01")
                    .unwrap()
                    .build()
            })
            .await?;
        let asset = assets
            .insert_asset("db-01", |id| {
                MockAssetBuilder::create(id, "Database Server", "db-01")
                    .unwrap()
                    .build()
            })
            .await?;

        let err = OpsdeskError::from(
            assets
                .update_asset(asset.id, |asset| asset.hostname = "web-01".to_string())
                .await
                .unwrap_err(),
        );
        assert_eq!(err.kind(), ErrorKind::ClientError);
        assert_snapshot!(err, @"Asset with such hostname ('web-01') already exists.");
        assert_eq!(assets.get_asset(asset.id).await?, Some(asset));

        Ok(())
    }

    #[tokio::test]
    async fn can_remove_asset() -> anyhow::Result<()> {
        let db = Database::create();
        let assets = db.assets();

        let asset = assets
            .insert_asset("web-01", |id| {
                MockAssetBuilder::create(id, "Web Server 1", "web-01")
                    .unwrap()
                    .build()
            })
            .await?;

        assert!(assets.remove_asset(asset.id).await?);
        assert!(!assets.remove_asset(asset.id).await?);
        assert_eq!(assets.get_asset(asset.id).await?, None);

        Ok(())
    }
}
