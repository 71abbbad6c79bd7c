use crate::assets::{AssetStatus, AssetType};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Managed IT asset (server, workstation, network device, etc.).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique sequential asset id.
    pub id: u64,
    /// Human-readable name of the asset.
    pub name: String,
    /// Unique hostname of the asset.
    pub hostname: String,
    /// Kind of the asset.
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    /// Lifecycle status of the asset.
    pub status: AssetStatus,
    /// IPv4 or IPv6 address of the asset.
    pub ip_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Physical location of the asset (e.g. data center rack).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// ID of the user that owns the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,
    /// Arbitrary hardware or software specifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub specifications: Option<serde_json::Value>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use crate::tests::MockAssetBuilder;
    use insta::assert_json_snapshot;
    use serde_json::json;

    #[test]
    fn serialization() -> anyhow::Result<()> {
        let asset = MockAssetBuilder::create(1, "Web Server 1", "web-01")?.build();
        assert_json_snapshot!(asset, @r###"
        {
          "id": 1,
          "name": "Web Server 1",
          "hostname": "web-01",
          "type": "server",
          "status": "active",
          "ipAddress": "10.0.0.1",
          "createdAt": "2000-01-01T10:00:00Z",
          "updatedAt": "2000-01-01T10:00:10Z"
        }
        "###);

        let asset = MockAssetBuilder::create(2, "Database Server", "db-01")?
            .with_ip_address("2001:db8::1")
            .with_location("DC1 / Rack 4")
            .with_owner_id(7)
            .with_specifications(json!({ "cpu": "16 cores", "ram": "64 GiB" }))
            .build();
        assert_json_snapshot!(asset, @r###"
        {
          "id": 2,
          "name": "Database Server",
          "hostname": "db-01",
          "type": "server",
          "status": "active",
          "ipAddress": "2001:db8::1",
          "location": "DC1 / Rack 4",
          "ownerId": 7,
          "specifications": {
            "cpu": "16 cores",
            "ram": "64 GiB"
          },
          "createdAt": "2000-01-01T10:00:00Z",
          "updatedAt": "2000-01-01T10:00:10Z"
        }
        "###);

        Ok(())
    }
}
