use crate::{ClientError, GraphqlClient};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use vitrine_models::{
    Asset, AssetsOrderBy, Collection, CollectionKey, CollectionsOrderBy, Notification, PageInfo,
    PageResult, OwnershipsOrderBy,
};

const FETCH_COLLECTIONS: &str = r#"
query FetchCollections($filter: CollectionFilter, $orderBy: [CollectionsOrderBy!], $limit: Int!, $offset: Int!) {
  collections(filter: $filter, orderBy: $orderBy, first: $limit, offset: $offset) {
    nodes {
      chainId
      address
      name
      image
      cover
      description
      totalVolume
      floorPrice
    }
    pageInfo {
      hasNextPage
      hasPreviousPage
    }
    totalCount
  }
}"#;

const FETCH_OWNED_ASSETS: &str = r#"
query FetchOwnedAssets($address: Address!, $orderBy: [OwnershipsOrderBy!], $limit: Int!, $offset: Int!) {
  owned: ownerships(filter: { ownerAddress: { equalTo: $address } }, orderBy: $orderBy, first: $limit, offset: $offset) {
    nodes {
      asset {
        id
        chainId
        collectionAddress
        tokenId
        name
        image
        animationUrl
        creatorAddress
        ownerAddress
        quantity
        createdAt
      }
    }
    pageInfo {
      hasNextPage
      hasPreviousPage
    }
    totalCount
  }
}"#;

const FETCH_CREATED_ASSETS: &str = r#"
query FetchCreatedAssets($address: Address!, $orderBy: [AssetsOrderBy!], $limit: Int!, $offset: Int!) {
  assets(filter: { creatorAddress: { equalTo: $address } }, orderBy: $orderBy, first: $limit, offset: $offset) {
    nodes {
      id
      chainId
      collectionAddress
      tokenId
      name
      image
      animationUrl
      creatorAddress
      ownerAddress
      quantity
      createdAt
    }
    pageInfo {
      hasNextPage
      hasPreviousPage
    }
    totalCount
  }
}"#;

const GET_NOTIFICATIONS: &str = r#"
query GetNotifications($address: Address!, $limit: Int!, $offset: Int!) {
  notifications(filter: { accountAddress: { equalTo: $address } }, orderBy: CREATED_AT_DESC, first: $limit, offset: $offset) {
    nodes {
      id
      action
      accountAddress
      assetId
      assetName
      assetImage
      createdAt
    }
    pageInfo {
      hasNextPage
      hasPreviousPage
    }
    totalCount
  }
}"#;

impl GraphqlClient {
    /// Fetch collections matching the given keys. Used by the home grid;
    /// the caller reorders the result to the configured key order.
    pub async fn fetch_collections_by_keys(
        &self,
        keys: &[CollectionKey],
        limit: u32,
    ) -> Result<PageResult<Collection>, ClientError> {
        let clauses: Vec<Value> = keys
            .iter()
            .map(|key| {
                json!({
                    "chainId": { "equalTo": key.chain_id },
                    "address": { "equalTo": key.address },
                })
            })
            .collect();
        let variables = json!({
            "filter": { "or": clauses },
            "orderBy": null,
            "limit": limit,
            "offset": 0,
        });
        let data = self.execute(FETCH_COLLECTIONS, variables).await?;
        page_from_value(&data, "collections")
    }

    pub async fn fetch_collections(
        &self,
        order_by: CollectionsOrderBy,
        limit: u32,
        offset: u32,
    ) -> Result<PageResult<Collection>, ClientError> {
        let variables = json!({
            "filter": null,
            "orderBy": [order_by.as_str()],
            "limit": limit,
            "offset": offset,
        });
        let data = self.execute(FETCH_COLLECTIONS, variables).await?;
        page_from_value(&data, "collections")
    }

    pub async fn fetch_owned_assets(
        &self,
        address: &str,
        order_by: OwnershipsOrderBy,
        limit: u32,
        offset: u32,
    ) -> Result<PageResult<Asset>, ClientError> {
        let variables = json!({
            "address": address,
            "orderBy": [order_by.as_str()],
            "limit": limit,
            "offset": offset,
        });
        let data = self.execute(FETCH_OWNED_ASSETS, variables).await?;
        ownership_page_from_value(&data, "owned")
    }

    pub async fn fetch_created_assets(
        &self,
        address: &str,
        order_by: AssetsOrderBy,
        limit: u32,
        offset: u32,
    ) -> Result<PageResult<Asset>, ClientError> {
        let variables = json!({
            "address": address,
            "orderBy": [order_by.as_str()],
            "limit": limit,
            "offset": offset,
        });
        let data = self.execute(FETCH_CREATED_ASSETS, variables).await?;
        page_from_value(&data, "assets")
    }

    pub async fn fetch_notifications(
        &self,
        address: &str,
        limit: u32,
        offset: u32,
    ) -> Result<PageResult<Notification>, ClientError> {
        let variables = json!({
            "address": address,
            "limit": limit,
            "offset": offset,
        });
        let data = self.execute(GET_NOTIFICATIONS, variables).await?;
        page_from_value(&data, "notifications")
    }
}

/// Decode one `{ nodes, pageInfo, totalCount }` connection from a `data`
/// object.
fn page_from_value<T: DeserializeOwned>(
    data: &Value,
    field: &str,
) -> Result<PageResult<T>, ClientError> {
    let connection = data
        .get(field)
        .filter(|v| !v.is_null())
        .ok_or_else(|| ClientError::Decode(format!("missing '{field}' in response")))?;

    let nodes = connection
        .get("nodes")
        .and_then(Value::as_array)
        .ok_or_else(|| ClientError::Decode(format!("missing '{field}.nodes'")))?
        .iter()
        .cloned()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| ClientError::Decode(e.to_string()))?;

    Ok(PageResult {
        nodes,
        page_info: decode_page_info(connection)?,
        total_count: connection.get("totalCount").and_then(Value::as_u64),
    })
}

/// Ownership connections wrap each asset one level deeper
/// (`nodes[].asset`); entries whose asset is null are skipped rather than
/// failing the whole page.
fn ownership_page_from_value(data: &Value, field: &str) -> Result<PageResult<Asset>, ClientError> {
    let connection = data
        .get(field)
        .filter(|v| !v.is_null())
        .ok_or_else(|| ClientError::Decode(format!("missing '{field}' in response")))?;

    let nodes = connection
        .get("nodes")
        .and_then(Value::as_array)
        .ok_or_else(|| ClientError::Decode(format!("missing '{field}.nodes'")))?
        .iter()
        .filter_map(|node| node.get("asset").filter(|a| !a.is_null()).cloned())
        .map(serde_json::from_value)
        .collect::<Result<Vec<Asset>, _>>()
        .map_err(|e| ClientError::Decode(e.to_string()))?;

    Ok(PageResult {
        nodes,
        page_info: decode_page_info(connection)?,
        total_count: connection.get("totalCount").and_then(Value::as_u64),
    })
}

fn decode_page_info(connection: &Value) -> Result<PageInfo, ClientError> {
    connection
        .get("pageInfo")
        .cloned()
        .map(serde_json::from_value)
        .transpose()
        .map_err(|e| ClientError::Decode(e.to_string()))?
        .ok_or_else(|| ClientError::Decode("missing 'pageInfo'".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset_json(id: &str) -> Value {
        json!({
            "id": id,
            "chainId": 1,
            "collectionAddress": "0xcafe",
            "tokenId": "42",
            "name": "Test Asset",
            "image": null,
            "animationUrl": null,
            "creatorAddress": "0xbeef",
            "ownerAddress": "0xbeef",
            "quantity": "1",
            "createdAt": "2024-05-01T12:00:00Z",
        })
    }

    #[test]
    fn connection_decodes_nodes_and_page_info() {
        let data = json!({
            "assets": {
                "nodes": [asset_json("a"), asset_json("b")],
                "pageInfo": { "hasNextPage": true, "hasPreviousPage": false },
                "totalCount": 30,
            }
        });
        let page: PageResult<Asset> = page_from_value(&data, "assets").expect("page");
        assert_eq!(page.nodes.len(), 2);
        assert!(page.page_info.has_next_page);
        assert!(!page.page_info.has_previous_page);
        assert_eq!(page.total_count, Some(30));
    }

    #[test]
    fn ownership_nodes_with_null_assets_are_skipped() {
        let data = json!({
            "owned": {
                "nodes": [
                    { "asset": asset_json("a") },
                    { "asset": null },
                    { "asset": asset_json("c") },
                ],
                "pageInfo": { "hasNextPage": false, "hasPreviousPage": true },
                "totalCount": 3,
            }
        });
        let page = ownership_page_from_value(&data, "owned").expect("page");
        assert_eq!(page.nodes.len(), 2);
        assert_eq!(page.nodes[0].id, "a");
        assert_eq!(page.nodes[1].id, "c");
    }

    #[test]
    fn missing_connection_is_a_decode_error() {
        let err = page_from_value::<Asset>(&json!({}), "assets").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
