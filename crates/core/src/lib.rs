pub mod catalog;
pub mod domain;
pub mod planner;

pub mod config {
    use anyhow::Context;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub port: u16,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let port = match std::env::var("PORT") {
                Ok(v) => v.parse().context("PORT must be a valid port number")?,
                Err(_) => 8080,
            };

            Ok(Self {
                port,
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            })
        }
    }
}
