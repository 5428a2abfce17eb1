use std::env;

/// Longest accepted token lifetime: ten years, in seconds
pub const MAX_TOKEN_EXPIRES_IN: i64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    // Database
    pub database_url: String,

    // Token
    pub jwt_secret: String,
    pub token_expires_in: i64,

    // Bootstrap admin account
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,

    // Chat
    pub default_response: String,

    // Logging
    pub log_json: bool,

    // Server
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if exists

        Ok(Self {
            // Database
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://wechatterbot.db?mode=rwc".to_string()),

            // Token
            jwt_secret: env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?,
            token_expires_in: parse_expires_in(
                &env::var("TOKEN_EXPIRES_IN").unwrap_or_else(|_| "3600".to_string()),
            )?,

            // Bootstrap admin account
            admin_username: non_empty_var("ADMIN_USERNAME"),
            admin_password: non_empty_var("ADMIN_PASSWORD"),

            // Chat
            default_response: env::var("DEFAULT_RESPONSE")
                .unwrap_or_else(|_| "我还不知道该怎么回答".to_string()),

            // Logging
            log_json: env::var("LOG_FORMAT")
                .map(|format| format.eq_ignore_ascii_case("json"))
                .unwrap_or(false),

            // Server
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
        })
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Token lifetime in seconds, in `1..=MAX_TOKEN_EXPIRES_IN`
fn parse_expires_in(value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse()
        .ok()
        .filter(|secs: &i64| (1..=MAX_TOKEN_EXPIRES_IN).contains(secs))
        .ok_or(ConfigError::Invalid("TOKEN_EXPIRES_IN"))
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expires_in() {
        assert_eq!(parse_expires_in("3600").unwrap(), 3600);
        assert_eq!(
            parse_expires_in(&MAX_TOKEN_EXPIRES_IN.to_string()).unwrap(),
            MAX_TOKEN_EXPIRES_IN
        );
    }

    #[test]
    fn test_parse_expires_in_rejects_out_of_range() {
        for value in ["0", "-60", "abc", "4611686018427387903"] {
            assert!(matches!(
                parse_expires_in(value),
                Err(ConfigError::Invalid("TOKEN_EXPIRES_IN"))
            ));
        }
        let too_long = (MAX_TOKEN_EXPIRES_IN + 1).to_string();
        assert!(parse_expires_in(&too_long).is_err());
    }
}
