use std::{fs, path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use lbl_core::LabelConfig;
use lbl_html::{CatalogLocalizer, HtmlLabels};
use lbl_model::{FieldName, LabelArg, LabelOptions};
use lbl_observe::{LogConfig, LogFormat, LogLevel, init_logging};

/// Render the label of a form field.
#[derive(Debug, Parser)]
#[command(name = "lbl", version)]
struct Cli {
    /// Field the label describes (e.g. `title`).
    #[arg(long)]
    field: String,

    /// Explicit label text.
    #[arg(long)]
    text: Option<String>,

    /// Label options as a JSON object, e.g. '{"required": true, "class": "big"}'.
    #[arg(long)]
    options: Option<String>,

    /// Form object name (`post`, `post[author_attributes]`).
    #[arg(long)]
    object: Option<String>,

    /// Current action, for action-scoped translations.
    #[arg(long)]
    action: Option<String>,

    /// JSON translation catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// JSON label configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print only the resolved text, without markup.
    #[arg(long)]
    text_only: bool,

    #[arg(long, default_value = "warn")]
    log_level: LogLevel,

    #[arg(long, default_value = "text")]
    log_format: LogFormat,
}

impl Cli {
    fn label_arg(&self) -> anyhow::Result<LabelArg> {
        let options = match &self.options {
            Some(raw) => {
                let value: serde_json::Value =
                    serde_json::from_str(raw).context("--options is not valid JSON")?;
                Some(LabelOptions::from_json(&value)?)
            }
            None => None,
        };

        Ok(match (self.text.clone(), options) {
            (Some(text), Some(options)) => LabelArg::TextWithOptions(text, options),
            (Some(text), None) => LabelArg::Text(text),
            (None, options) => LabelArg::from(options),
        })
    }

    fn labels(&self) -> anyhow::Result<HtmlLabels> {
        let mut labels = HtmlLabels::new();

        if let Some(path) = &self.config {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let config: LabelConfig = serde_json::from_str(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?;
            labels = labels.with_config(config);
        }

        if let Some(path) = &self.catalog {
            let catalog = CatalogLocalizer::from_path(path)
                .with_context(|| format!("loading catalog {}", path.display()))?;
            debug!(entries = catalog.len(), "catalog ready");
            labels = labels.with_catalog(Arc::new(catalog));
        }
        if let Some(object) = &self.object {
            labels = labels.for_object(object.as_str());
        }
        if let Some(action) = &self.action {
            labels = labels.with_action(action.as_str());
        }
        Ok(labels)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&LogConfig {
        format: cli.log_format,
        level: cli.log_level.clone(),
        ..Default::default()
    })?;

    let field = FieldName::new(cli.field.as_str());
    let arg = cli.label_arg()?;
    let builder = cli.labels()?.build();

    let out = if cli.text_only {
        builder.label_text(&field, arg).unwrap_or_default()
    } else {
        builder.label(&field, arg)?
    };

    info!(field = %field, bytes = out.len(), "label rendered");
    println!("{out}");
    Ok(())
}
