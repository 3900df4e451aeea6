use std::env;

use crate::auth::Credentials;

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: String,
    pub service_name: String,
    pub credentials: Credentials,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            bind_addr: env::var("BIND_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8000".to_string()),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "auth-api".to_string()),
            credentials: Credentials {
                username: env::var("AUTH_USERNAME")
                    .unwrap_or_else(|_| "admin".to_string()),
                password: env::var("AUTH_PASSWORD")
                    .unwrap_or_else(|_| "1234".to_string()),
            },
        }
    }
}
