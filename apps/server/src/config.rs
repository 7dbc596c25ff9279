//! Environment-driven server configuration.

use summit_ai::AdvisorConfig;

/// Password auth settings; absent means the server runs open.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Account email; the login form must match it.
    pub email: String,
    /// Argon2 PHC string for the account password.
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    pub static_dir: String,
    /// HS256 signing secret for session tokens.
    pub session_secret: String,
    pub auth: Option<AuthConfig>,
    pub advisor: AdvisorConfig,
    /// Checkout-session endpoint of the payment processor.
    pub checkout_url: Option<String>,
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let auth = env_opt("SUMMIT_AUTH_PASSWORD_HASH").map(|password_hash| AuthConfig {
            email: env_opt("SUMMIT_AUTH_EMAIL").unwrap_or_else(|| "owner@localhost".to_string()),
            password_hash,
        });

        let advisor = AdvisorConfig {
            provider_id: env_opt("SUMMIT_AI_PROVIDER").unwrap_or_else(|| "openai".to_string()),
            model: env_opt("SUMMIT_AI_MODEL").unwrap_or_else(|| "gpt-4o".to_string()),
            api_key: env_opt("SUMMIT_AI_API_KEY").or_else(|| env_opt("OPENAI_API_KEY")),
            provider_url: env_opt("SUMMIT_AI_URL"),
        };

        Config {
            listen_addr: env_opt("SUMMIT_LISTEN_ADDR").unwrap_or_else(|| "0.0.0.0:8181".to_string()),
            db_path: env_opt("SUMMIT_DB_PATH").unwrap_or_else(|| "./data/summit.db".to_string()),
            static_dir: env_opt("SUMMIT_STATIC_DIR").unwrap_or_else(|| "./dist".to_string()),
            session_secret: env_opt("SUMMIT_SECRET_KEY").unwrap_or_else(random_secret),
            auth,
            advisor,
            checkout_url: env_opt("SUMMIT_CHECKOUT_URL"),
        }
    }
}

/// Fallback secret for setups that never configured one; sessions signed
/// with it do not survive a restart.
fn random_secret() -> String {
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine as _;
    use rand::RngCore;

    let mut bytes = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    BASE64.encode(bytes)
}
