use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{io, parsing::parse_document, render_fragment};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "markdown-sitegen")]
#[command(version, about = "Build a static site from a directory of markdown", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Clean the public directory, copy static files and generate every page
    Build(BuildArgs),

    /// Print the HTML fragment for one markdown file
    Render {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Config file (defaults to ./sitegen.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Tag wrapping the rendered blocks (overrides the config)
        #[arg(long)]
        root_tag: Option<String>,

        /// Escape text and attribute values
        #[arg(long)]
        escape: bool,
    },

    /// Print each block of a markdown file and its classification as JSON lines
    Blocks {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(clap::Args, Default)]
struct BuildArgs {
    /// Config file (defaults to ./sitegen.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_name = "DIR")]
    content: Option<PathBuf>,

    #[arg(long = "static", value_name = "DIR")]
    static_dir: Option<PathBuf>,

    #[arg(long, value_name = "DIR")]
    public: Option<PathBuf>,

    #[arg(long, value_name = "PATH")]
    template: Option<PathBuf>,
}

impl BuildArgs {
    /// Command-line paths win over the config file.
    fn apply_to(self, mut config: Config) -> Config {
        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(public) = self.public {
            config.public_dir = public;
        }
        if let Some(template) = self.template {
            config.template_path = template;
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    match Cli::parse().command {
        Command::Build(args) => build(args),
        Command::Render {
            file,
            config,
            root_tag,
            escape,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(root_tag) = root_tag {
                config.root_tag = root_tag;
            }
            config.escape_html |= escape;
            render(&file, &config)
        }
        Command::Blocks { file } => blocks(&file),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file '{}' not found", path.display()),
        },
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::info!(
                    "No {} found, using defaults",
                    Config::config_path().display()
                );
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn build(args: BuildArgs) -> Result<()> {
    let config_path = args.config.clone();
    let config = args.apply_to(load_config(config_path.as_deref())?);

    io::validate_content_dir(&config.content_dir)
        .with_context(|| format!("Content path '{}' is invalid", config.content_dir.display()))?;

    io::clean_dir(&config.public_dir)?;

    let copied = if config.static_dir.is_dir() {
        log::info!("Copying static files from {}", config.static_dir.display());
        io::copy_static_recursive(&config.static_dir, &config.public_dir)?
    } else {
        log::warn!(
            "Static directory {} not found, skipping",
            config.static_dir.display()
        );
        0
    };

    let pages = io::generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.public_dir,
        &config.page_settings(),
    )
    .context("Failed to generate pages")?;

    println!(
        "Built {} pages and copied {} static files into {}",
        pages.len(),
        copied,
        config.public_dir.display()
    );
    Ok(())
}

fn render(file: &Path, config: &Config) -> Result<()> {
    let markdown = io::read_file(file)?;
    let html = render_fragment(&markdown, &config.root_tag, &config.render_options())
        .with_context(|| format!("Failed to render {}", file.display()))?;
    println!("{html}");
    Ok(())
}

fn blocks(file: &Path) -> Result<()> {
    let markdown = io::read_file(file)?;
    for node in parse_document(&markdown).blocks {
        println!("{}", serde_json::to_string(&node)?);
    }
    Ok(())
}
