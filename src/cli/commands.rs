use anyhow::{Context, Result};
use tokio::fs;

use crate::cli::options::Commands;
use crate::modules::files::{copy_tree, ensure_dir, file_exists, Template};
use crate::modules::{require_auth_token, Logger, AUTH_TOKEN_VAR};

impl Commands {
    pub async fn run(self, logger: &Logger) -> Result<()> {
        match self {
            Self::Copy { src, dst } => {
                copy_tree(&src, &dst, logger).await?;
                logger.debug(format_args!("Copied {} into {}", src.display(), dst.display()));
            }
            Self::Mkdir { path } => ensure_dir(&path, logger).await?,
            Self::Exists { path } => {
                println!("{}", file_exists(&path, logger).await?);
            }
            Self::Render {
                template,
                data: data_path,
            } => {
                let source = fs::read_to_string(&template)
                    .await
                    .with_context(|| format!("Failed to read template {}", template.display()))?;
                let data = fs::read_to_string(&data_path).await.with_context(|| {
                    format!("Failed to read template data {}", data_path.display())
                })?;
                let data: serde_json::Value =
                    serde_json::from_str(&data).context("Template data is not valid JSON")?;

                let name = template
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| template.display().to_string());
                let rendered = Template::parse(name, &source)?.render(&data)?;
                print!("{rendered}");
            }
            Self::Token => {
                let token = require_auth_token()?;
                println!("${AUTH_TOKEN_VAR} is set ({} characters)", token.len());
            }
        }

        Ok(())
    }
}
