use anyhow::Result;
use deadpool_redis::{Pool, Runtime};
use redis::{Client, Connection, RedisResult};
use tracing::info;

#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub db: u8,
    pub password: Option<String>,
}

impl RedisConfig {
    pub fn new(host: String, port: u16, db: u8, password: Option<String>) -> Self {
        Self {
            host,
            port,
            db,
            password,
        }
    }

    pub fn url(&self) -> String {
        match &self.password {
            Some(pw) => format!("redis://:{}@{}:{}/{}", pw, self.host, self.port, self.db),
            None => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }
}

#[derive(Clone)]
pub struct RedisClient {
    pub client: Client,
    pub pool: Pool,
}

impl RedisClient {
    pub async fn new(config: &RedisConfig) -> Result<Self> {
        info!("Creating redis client");

        let url = config.url();

        let client = Client::open(url.clone())?;

        let pool = deadpool_redis::Config::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| anyhow::anyhow!("Failed to create redis pool: {e}"))?;

        Ok(Self { client, pool })
    }

    pub fn get_connection(&self) -> RedisResult<Connection> {
        self.client.get_connection()
    }

    pub fn ping(&self) -> Result<()> {
        let mut conn = self.get_connection()?;

        info!("Pinging redis");

        let _: () = redis::cmd("PING").query(&mut conn)?;

        Ok(())
    }
}
