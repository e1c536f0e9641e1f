//! Common test infrastructure for Redis integration tests.

use quill_config::RedisConfig;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::redis::{Redis, REDIS_PORT};

/// Test Redis container wrapper.
///
/// Keeps the container alive for as long as the test holds it.
pub struct TestRedis {
    _container: ContainerAsync<Redis>,
    config: RedisConfig,
}

impl TestRedis {
    /// Starts a fresh Redis container.
    pub async fn new() -> Self {
        let container = Redis::default()
            .start()
            .await
            .expect("Failed to start Redis container");

        let port = container
            .get_host_port_ipv4(REDIS_PORT)
            .await
            .expect("Failed to get Redis port");

        let config = RedisConfig {
            url: format!("redis://127.0.0.1:{}", port),
            prefix: "quill:it".to_string(),
            pool_size: 4,
            connect_timeout_secs: 10,
            enabled: true,
        };

        Self {
            _container: container,
            config,
        }
    }

    /// Configuration pointing at the container.
    pub fn config(&self) -> &RedisConfig {
        &self.config
    }
}
