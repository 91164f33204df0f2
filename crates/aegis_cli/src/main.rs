//! AEGIS CLI
//!
//! Inspect the theme catalog, apply and persist a theme, and export the
//! generated stylesheet.

mod config;

use aegis_core::{Document, ScopeRoot};
use aegis_theme::navigation;
use aegis_theme::{
    catalog, stylesheet, themes_for_domain, try_resolve, FileStorage, MemoryStorage, PersistOutcome,
    ThemeConfig, ThemeContext, ThemeId, ThemeScope,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::AegisConfig;

#[derive(Parser)]
#[command(name = "aegis")]
#[command(author, version, about = "AEGIS dashboard theme tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file or directory containing aegis.toml
    #[arg(short, long, global = true, default_value = ".")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List available themes
    List {
        /// Only themes recommended for this domain
        #[arg(short, long)]
        domain: Option<String>,
    },

    /// Print the CSS variables and marker classes of a theme
    Show {
        /// Theme identifier (e.g. crimson-ember-light)
        theme: String,
    },

    /// Apply a theme and persist it
    Apply {
        /// Theme identifier; unknown identifiers fall back to the default
        theme: String,
    },

    /// Switch the current theme between its light and dark variant
    Toggle,

    /// Show the persisted theme and scope
    Current,

    /// Show or set the theme scope
    Scope {
        /// `global` or `page`
        value: Option<String>,
    },

    /// Show the theme a navigation domain maps to
    Domain {
        /// Domain key (e.g. finance-operations)
        key: String,
    },

    /// Print the navigation tree
    Nav,

    /// Generate a stylesheet with one block per theme
    Stylesheet {
        /// Themes to include (default: all)
        themes: Vec<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Forget the persisted theme and scope
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let config = AegisConfig::load(&cli.config)?;

    match cli.command {
        Commands::List { domain } => cmd_list(domain.as_deref()),
        Commands::Show { theme } => cmd_show(&theme),
        Commands::Apply { theme } => cmd_apply(&config, &theme).await,
        Commands::Toggle => cmd_toggle(&config).await,
        Commands::Current => cmd_current(&config),
        Commands::Scope { value } => cmd_scope(&config, value.as_deref()),
        Commands::Domain { key } => cmd_domain(&config, &key),
        Commands::Nav => cmd_nav(),
        Commands::Stylesheet { themes, output } => cmd_stylesheet(&themes, output),
        Commands::Reset => cmd_reset(&config).await,
    }
}

fn open_context(config: &AegisConfig) -> ThemeContext {
    let storage = Arc::new(FileStorage::new(config.storage.path.clone()));
    ThemeContext::new(config.theme.clone(), storage)
}

fn cmd_list(domain: Option<&str>) -> Result<()> {
    let defs: Vec<_> = match domain {
        Some(domain) => themes_for_domain(domain).collect(),
        None => catalog().iter().collect(),
    };

    if defs.is_empty() {
        warn!("no themes recommended for `{}`", domain.unwrap_or_default());
        return Ok(());
    }

    for def in defs {
        println!(
            "{:<24} {:<22} {}  [{}]",
            def.id.as_str(),
            def.name,
            def.tokens.accent,
            def.domains.join(", ")
        );
    }
    Ok(())
}

fn cmd_show(theme: &str) -> Result<()> {
    let def = try_resolve(theme)?;

    let mut themes = ThemeContext::new(ThemeConfig::default(), Arc::new(MemoryStorage::new()))
        .with_document(Document::new());
    themes.apply_theme(def.id, false);

    let doc = themes
        .detach_document()
        .context("style scope missing after apply")?;

    println!("/* {} - {} */", def.name, def.description);
    let theme_class = def.id.class_name();
    for root in ScopeRoot::ALL {
        let classes: Vec<&str> = [def.id.scheme().class_name(), theme_class.as_str()]
            .into_iter()
            .filter(|class| doc.has_class(root, class))
            .collect();
        println!("/* {root:?} classes: {} */", classes.join(" "));
    }

    let mut css = String::from(":root {\n");
    for name in aegis_theme::css::PROPERTY_NAMES {
        if let Some(value) = doc.property(name) {
            let _ = writeln!(css, "  --{name}: {value};");
        }
    }
    css.push_str("}\n");
    print!("{css}");
    Ok(())
}

async fn cmd_apply(config: &AegisConfig, theme: &str) -> Result<()> {
    let mut themes = open_context(config).with_document(Document::new());
    let previous = themes.current();
    let def = themes.apply(theme, true);

    if def.id.as_str() != theme {
        warn!("unknown theme `{theme}`, applied {} instead", def.id);
    }

    report_persist(themes.flush().await.outcome)?;
    info!("{previous} -> {}", def.id);
    println!("{}", def.id);
    Ok(())
}

async fn cmd_toggle(config: &AegisConfig) -> Result<()> {
    let mut themes = open_context(config).with_document(Document::new());
    let def = themes.toggle_scheme();
    report_persist(themes.flush().await.outcome)?;
    println!("{}", def.id);
    Ok(())
}

fn report_persist(outcome: PersistOutcome) -> Result<()> {
    match outcome {
        PersistOutcome::Failed { reason } => bail!("failed to persist theme: {reason}"),
        other => {
            tracing::debug!("persist outcome: {other:?}");
            Ok(())
        }
    }
}

fn cmd_current(config: &AegisConfig) -> Result<()> {
    let themes = open_context(config);
    let def = themes.current_definition();
    println!("theme: {} ({})", def.id, def.name);
    println!("scope: {}", themes.scope());
    Ok(())
}

fn cmd_scope(config: &AegisConfig, value: Option<&str>) -> Result<()> {
    let mut themes = open_context(config);
    match value {
        Some(value) => {
            let scope: ThemeScope = value.parse()?;
            themes.set_scope(scope);
            info!("theme scope set to {scope}");
        }
        None => println!("{}", themes.scope()),
    }
    Ok(())
}

fn cmd_domain(config: &AegisConfig, key: &str) -> Result<()> {
    let themes = open_context(config);
    let Some(mapped) = aegis_theme::theme_for_domain(key) else {
        bail!("no theme mapped for domain `{key}`");
    };

    let resolved = themes.theme_for_domain(key);
    println!("{key}: {mapped} (with current scheme: {resolved})");
    if themes.should_use_global_theme() {
        println!("scope is global; {} stays active", themes.current());
    }
    Ok(())
}

fn cmd_nav() -> Result<()> {
    for domain in navigation::domains() {
        let theme = aegis_theme::theme_for_domain(domain.key)
            .map(ThemeId::as_str)
            .unwrap_or("-");
        println!("{} ({}) -> {theme}", domain.label, domain.key);
        for view in domain.views {
            match view.badge {
                Some(badge) => println!("  {} [{badge}]", view.label),
                None => println!("  {}", view.label),
            }
        }
    }
    Ok(())
}

fn cmd_stylesheet(themes: &[String], output: Option<PathBuf>) -> Result<()> {
    let ids = if themes.is_empty() {
        ThemeId::ALL.to_vec()
    } else {
        themes
            .iter()
            .map(|t| t.parse::<ThemeId>())
            .collect::<Result<Vec<_>, _>>()?
    };

    let css = stylesheet(&ids);
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, css)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("wrote {} themes to {}", ids.len(), path.display());
        }
        None => print!("{css}"),
    }
    Ok(())
}

async fn cmd_reset(config: &AegisConfig) -> Result<()> {
    let mut themes = open_context(config);
    themes.reset();
    report_persist(themes.flush().await.outcome)?;
    println!("{}", themes.current());
    Ok(())
}
