use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use frame_metadata::{FrameDescription, FrameRenderer, MetaTagRenderer, RenderConfig, Wrapper};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "frame-metadata")]
#[command(about = "Render frame descriptions into fc:frame meta tags", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the meta tags as an HTML head fragment.
    Render {
        #[command(flatten)]
        source: SourceArgs,
        /// Wrap the tags in an element with this tag name.
        #[arg(long, value_name = "TAG")]
        wrapper: Option<String>,
        /// `id` attribute of the wrapper element; implies `--wrapper div`.
        #[arg(long, value_name = "ID")]
        wrapper_id: Option<String>,
    },
    /// Print the ordered tag list as JSON.
    Tags {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Frame description file (.json, .yaml, .yml) or `-` for JSON on stdin.
    #[arg(long, value_name = "FRAME")]
    frame: PathBuf,
    /// Value of the `fc:frame` version tag.
    #[arg(long, value_name = "VERSION")]
    frame_version: Option<String>,
    /// Skip the `fc:frame` version tag.
    #[arg(long)]
    no_version_tag: bool,
}

impl SourceArgs {
    fn config(&self) -> Result<RenderConfig> {
        let mut config = RenderConfig::from_env();
        if let Some(version) = &self.frame_version {
            config.version = version.clone();
        }
        if self.no_version_tag {
            config.emit_version_tag = false;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render {
            source,
            wrapper,
            wrapper_id,
        } => {
            let mut frame = read_frame(&source.frame)?;
            if let Some(wrapper) = build_wrapper(wrapper, wrapper_id) {
                frame = frame.with_wrapper(wrapper);
            }
            let node = MetaTagRenderer::new(source.config()?).render(&frame);
            println!("{}", frame_metadata::to_html(&node));
        }
        Command::Tags { source } => {
            let frame = read_frame(&source.frame)?;
            let tags = MetaTagRenderer::new(source.config()?).render_tags(&frame);
            println!("{}", serde_json::to_string_pretty(&tags)?);
        }
    }
    Ok(())
}

fn build_wrapper(tag: Option<String>, id: Option<String>) -> Option<Wrapper> {
    if tag.is_none() && id.is_none() {
        return None;
    }
    let tag = tag.unwrap_or_else(|| "div".to_string());
    Some(Wrapper::element(tag, id.map(|id| ("id", id))))
}

fn read_frame(path: &Path) -> Result<FrameDescription> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("read frame from stdin")?;
        return FrameDescription::from_json(&buf).context("parse frame JSON from stdin");
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("read frame file {}", path.display()))?;
    debug!(path = %path.display(), "loaded frame description");
    if is_yaml(path) {
        serde_yaml_bw::from_str(&text).with_context(|| format!("parse frame YAML {}", path.display()))
    } else {
        FrameDescription::from_json(&text)
            .with_context(|| format!("parse frame JSON {}", path.display()))
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    )
}
