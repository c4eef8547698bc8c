use anyhow::Result;
use std::env;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST")?,
            port: env::var("DATABASE_PORT")?.parse()?,
            username: env::var("DATABASE_USERNAME")?,
            password: env::var("DATABASE_PASSWORD")?,
            database: env::var("DATABASE_NAME")?,
        };
        let redis = RedisConfig {
            host: env::var("REDIS_HOST")?,
            port: env::var("REDIS_PORT")?.parse()?,
        };
        let auth = AuthConfig {
            ttl: env::var("AUTH_TOKEN_TTL")?.parse()?,
        };
        Ok(Self {
            database,
            redis,
            auth,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct AuthConfig {
    // アクセストークンの有効期間（秒）
    pub ttl: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_built_from_environment_variables() {
        env::set_var("DATABASE_HOST", "localhost");
        env::set_var("DATABASE_PORT", "5432");
        env::set_var("DATABASE_USERNAME", "app");
        env::set_var("DATABASE_PASSWORD", "passwd");
        env::set_var("DATABASE_NAME", "app");
        env::set_var("REDIS_HOST", "localhost");
        env::set_var("REDIS_PORT", "6379");
        env::set_var("AUTH_TOKEN_TTL", "86400");

        let config = AppConfig::new().unwrap();
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.redis.port, 6379);
        assert_eq!(config.auth.ttl, 86400);
    }
}
