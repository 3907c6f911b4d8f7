use anyhow::Result;

use ballup_core::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
