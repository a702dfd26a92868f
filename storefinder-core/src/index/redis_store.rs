//! Redis-backed geospatial index

use super::{GeoIndex, GeoIndexEntry, IndexResult};
use crate::error::IndexError;
use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::Client;
use std::time::Duration;
use tokio::sync::OnceCell;

/// Default connection URL: host `redis`, port 6379, database 0
pub const DEFAULT_REDIS_URL: &str = "redis://redis:6379/0";

/// Retries after a failed connect. Any retry sleeps on the manager's
/// exponential backoff (one second minimum), which would outlast a request,
/// so a failed connect is reported at once and the next write tries again.
const CONNECT_RETRIES: usize = 0;

/// Bound on establishing a single connection
const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// Index that issues `GEOADD` against a Redis server.
///
/// The client is opened eagerly but no connection is made until the first
/// write. The resulting `ConnectionManager` is shared by every request and
/// reconnects on its own after a dropped connection.
pub struct RedisGeoIndex {
    client: Client,
    connection: OnceCell<ConnectionManager>,
}

impl RedisGeoIndex {
    /// Create an index for the given `redis://` URL
    pub fn open(url: &str) -> IndexResult<Self> {
        let client = Client::open(url).map_err(|e| IndexError::Connection(e.to_string()))?;
        Ok(Self {
            client,
            connection: OnceCell::new(),
        })
    }

    async fn connection(&self) -> IndexResult<ConnectionManager> {
        // A failed connect leaves the cell empty so the next call tries again
        let manager = self
            .connection
            .get_or_try_init(|| async {
                tracing::debug!("Connecting to geospatial index");
                let config = ConnectionManagerConfig::new()
                    .set_number_of_retries(CONNECT_RETRIES)
                    .set_connection_timeout(CONNECT_TIMEOUT);
                ConnectionManager::new_with_config(self.client.clone(), config).await
            })
            .await
            .map_err(|e| IndexError::Connection(e.to_string()))?;
        Ok(manager.clone())
    }
}

impl std::fmt::Debug for RedisGeoIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisGeoIndex")
            .field("addr", &self.client.get_connection_info().addr)
            .field("connected", &self.connection.initialized())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl GeoIndex for RedisGeoIndex {
    async fn geo_add(&self, set: &str, entry: GeoIndexEntry) -> IndexResult<()> {
        let mut conn = self.connection().await?;

        let added: i64 = redis::cmd("GEOADD")
            .arg(set)
            .arg(entry.longitude)
            .arg(entry.latitude)
            .arg(entry.member)
            .query_async(&mut conn)
            .await
            .map_err(|e| IndexError::Command(e.to_string()))?;

        tracing::debug!("GEOADD {} added {} member(s)", set, added);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_open_default_url_is_lazy() {
        let index = RedisGeoIndex::open(DEFAULT_REDIS_URL).unwrap();
        assert!(!index.connection.initialized());
        assert_eq!(index.name(), "redis");
    }

    #[test]
    fn test_open_rejects_bad_url() {
        let err = RedisGeoIndex::open("not a redis url").unwrap_err();
        assert!(matches!(err, IndexError::Connection(_)));
    }

    fn entry() -> GeoIndexEntry {
        GeoIndexEntry {
            longitude: 2.5,
            latitude: 1.5,
            member: "{}".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connection_error() {
        // Port 1 on loopback refuses connections
        let index = RedisGeoIndex::open("redis://127.0.0.1:1/0").unwrap();

        let err = index.geo_add("stores", entry()).await.unwrap_err();
        assert!(matches!(err, IndexError::Connection(_)));
        assert!(!index.connection.initialized());
    }

    #[tokio::test]
    async fn test_unreachable_server_fails_fast() {
        let index = RedisGeoIndex::open("redis://127.0.0.1:1/0").unwrap();

        // Both attempts must finish well inside the default 2s request bound
        let started = Instant::now();
        assert!(index.geo_add("stores", entry()).await.is_err());
        assert!(index.geo_add("stores", entry()).await.is_err());
        assert!(started.elapsed() < Duration::from_millis(500));
    }
}
