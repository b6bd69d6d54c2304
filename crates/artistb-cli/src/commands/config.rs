use anyhow::{Context, Result};
use artistb_infrastructure::ConfigService;
use artistb_infrastructure::config_service::{KEY_ENV_VARS, URL_ENV_VARS};

pub fn run(service: &ConfigService) -> Result<()> {
    match service.config_path() {
        Some(path) if path.exists() => println!("Config file: {}", path.display()),
        Some(path) => println!("Config file: {} (not found)", path.display()),
        None => println!("Config file: none"),
    }

    let config = service
        .resolve()
        .context("Failed to load configuration")?;

    match &config.backend {
        Some(backend) => println!("Backend: configured ({})", backend.url),
        None => println!(
            "Backend: not configured (set {} and {})",
            URL_ENV_VARS[0], KEY_ENV_VARS[0]
        ),
    }
    println!("Artwork limit: {}", config.loader.artwork_limit);
    println!("Exhibition limit: {}", config.loader.exhibition_limit);

    Ok(())
}
