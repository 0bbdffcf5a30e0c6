use anyhow::Context;
use clap::Parser;
use cos_upload_provider::config::cli::Command;
use cos_upload_provider::config::toml_config::TomlConfig;
use cos_upload_provider::utils::logger;
use cos_upload_provider::utils::validation::Validate;
use cos_upload_provider::{
    init, provider_schema, CliConfig, CosProvider, FileDescriptor, ProviderConfig, RawConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let toml_config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => TomlConfig::default(),
    };

    // 初始化日誌
    let logging = toml_config.logging.clone().unwrap_or_default();
    let directive = match (cli.verbose, logging.level.as_deref()) {
        (true, _) => logger::VERBOSE_DIRECTIVE.to_string(),
        (false, Some(level)) => format!("cos_upload_provider={},warn", level),
        (false, None) => logger::DEFAULT_DIRECTIVE.to_string(),
    };
    if cli.json_logs || logging.json.unwrap_or(false) {
        logger::init_json_logger(&directive);
    } else {
        logger::init_cli_logger_with(&directive);
    }

    match cli.command {
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&provider_schema().to_json()?)?);
        }
        Command::Upload {
            file,
            hash,
            path,
            mime,
        } => {
            let provider = build_provider(&toml_config)?;
            let buffer = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let hash = match hash {
                Some(hash) => hash,
                None => file
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .map(str::to_string)
                    .context("Cannot derive a hash from the file name; pass --hash")?,
            };
            let ext = file
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| format!(".{}", e))
                .unwrap_or_default();

            let mut descriptor = FileDescriptor::new(buffer, hash, ext);
            descriptor.path = path;
            descriptor.mime = mime;

            let result = provider.upload(&descriptor).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Delete { hash, ext, path } => {
            let provider = build_provider(&toml_config)?;
            let mut descriptor = FileDescriptor::new(Vec::<u8>::new(), hash, ext);
            descriptor.path = path;
            provider.delete(&descriptor).await?;
            println!("✅ Deleted {}", descriptor.storage_key());
        }
    }

    Ok(())
}

fn build_provider(toml_config: &TomlConfig) -> anyhow::Result<CosProvider> {
    // 設定檔優先，缺的欄位再從環境變數補
    let raw = toml_config.cos.clone().or(RawConfig::from_env());
    tracing::debug!("Resolved raw config: {:?}", raw);

    let config = ProviderConfig::try_from(raw).context("Invalid COS configuration")?;
    if let Err(e) = config.validate() {
        tracing::warn!("Configuration looks suspicious: {}", e);
    }

    Ok(init(config)?)
}
