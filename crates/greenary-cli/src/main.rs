use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use greenary_core::hero::VariantSelector;
use greenary_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "greenary")]
#[command(author, version, about = "Greenary Organics storefront in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Open a single product story (disables switching)
    #[arg(long, global = true, conflicts_with = "link")]
    id: Option<String>,

    /// Page link to take the story id from, e.g. "index.html?id=mint"
    #[arg(long, global = true)]
    link: Option<String>,

    /// Base URL or directory the frame images are served from
    #[arg(long, global = true)]
    frames: Option<String>,

    /// Run without the frame canvas
    #[arg(long, global = true)]
    no_animation: bool,

    /// Configuration file to use instead of ~/.config/greenary/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Print the product catalog
    Catalog,
    /// List the frame addresses of a hero variant
    Frames {
        /// Variant id
        variant: String,
    },
    /// Load every frame of a hero variant and report what settled
    Preload {
        /// Variant id
        variant: String,
    },
    /// Show or change the saved theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Print contact details and the WhatsApp link
    Contact,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the effective theme
    Show,
    /// Switch between light and dark
    Toggle,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if let Some(frames) = &cli.frames {
        config.hero.frame_base = frames.clone();
    }
    let config = Arc::new(config);

    let interactive = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, interactive)?;

    let selector = match (&cli.link, &cli.id) {
        (Some(link), _) => VariantSelector::from_link(link)?,
        (None, Some(id)) => VariantSelector::from_id(id.clone()),
        (None, None) => VariantSelector::first(),
    };

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, selector, !cli.no_animation).await,
        Some(Commands::Catalog) => commands::catalog::run(&config),
        Some(Commands::Frames { variant }) => commands::frames::run(&config, &variant),
        Some(Commands::Preload { variant }) => commands::preload::run(&config, &variant).await,
        Some(Commands::Theme { action }) => match action {
            Some(ThemeAction::Toggle) => commands::theme::toggle(&config),
            Some(ThemeAction::Show) | None => commands::theme::show(&config),
        },
        Some(Commands::Contact) => commands::contact::run(&config),
    }
}

/// The TUI owns the terminal, so its logs go to a file; everything else logs to stderr
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_tui() {
        let cli = Cli::try_parse_from(["greenary", "--id", "mint"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.id.as_deref(), Some("mint"));
        assert!(!cli.no_animation);
    }

    #[test]
    fn test_id_and_link_conflict() {
        assert!(Cli::try_parse_from(["greenary", "--id", "a", "--link", "?id=b"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["greenary", "preload", "mint", "--frames", "/srv/site"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Preload { ref variant }) if variant == "mint"));
        assert_eq!(cli.frames.as_deref(), Some("/srv/site"));
    }

    #[test]
    fn test_theme_action_optional() {
        let cli = Cli::try_parse_from(["greenary", "theme"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Theme { action: None })));
        let cli = Cli::try_parse_from(["greenary", "theme", "toggle"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Theme { action: Some(ThemeAction::Toggle) })
        ));
    }
}
