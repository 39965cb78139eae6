use anyhow::Result;

pub struct AppConfig {
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let server = ServerConfig {
            port: std::env::var("PORT")
                .ok()
                .map(|port| port.parse())
                .transpose()?
                .unwrap_or(8080),
        };
        Ok(Self { server })
    }
}

pub struct ServerConfig {
    pub port: u16,
}
