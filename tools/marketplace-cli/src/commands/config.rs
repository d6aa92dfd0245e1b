//! Configuration commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Path => path(ctx),
        ConfigCommand::Init { force } => init(force, ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    print!("{}", toml::to_string_pretty(&ctx.config)?);
    Ok(())
}

fn path(ctx: &Context) -> Result<()> {
    match &ctx.config_path {
        Some(path) => println!("{}", path.display()),
        None => ctx.output.info("No config file found; using defaults."),
    }
    Ok(())
}

fn init(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.default_config_path();

    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    // The commented template when nothing was overridden, else the
    // effective settings (e.g. a `--store` directory).
    if ctx.config == CliConfig::default() {
        std::fs::write(&path, generate_default_config())?;
    } else {
        ctx.config.save(&path)?;
    }
    ctx.output
        .success(&format!("Wrote {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_template() {
        let dir = TempDir::new().unwrap();
        let mut ctx = Context::for_dir(dir.path());
        ctx.config = CliConfig::default();

        init(false, &ctx).unwrap();

        let written = std::fs::read_to_string(ctx.default_config_path()).unwrap();
        assert!(written.starts_with("# Marketplace cart configuration"));
        assert!(init(false, &ctx).is_err());
        init(true, &ctx).unwrap();
    }

    #[test]
    fn test_init_saves_overridden_settings() {
        let dir = TempDir::new().unwrap();
        let ctx = Context::for_dir(dir.path());

        init(false, &ctx).unwrap();

        let saved = CliConfig::load(&ctx.default_config_path()).unwrap();
        assert_eq!(saved, ctx.config);
        assert_eq!(saved.storage.path, dir.path().join("storage"));
    }
}
