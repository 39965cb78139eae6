/// Environment variable that selects the runtime environment.
pub const ENV_KEY: &str = "ENV";

pub enum Environment {
    Development,
    Production,
}

/// Defaults to the build profile when ENV is not set.
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match std::env::var(ENV_KEY) {
        Err(_) => default_env,
        Ok(v) => match v.as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        },
    }
}
