use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use snipdiff::areas::session::{Session, default_dir};
use snipdiff::artifacts::core::PagerWriter;
use snipdiff::artifacts::diff::DEFAULT_CONTEXT;
use snipdiff::artifacts::diff::format::RenderMode;
use snipdiff::artifacts::diff::tree_diff::ChangeFilter;
use snipdiff::commands::porcelain::diff::DiffOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "snipdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare snippet package versions",
    long_about = "Compares working trees, local builds and published images of a snippet package. \
    Published images are first checked by layer digest; only when the digests disagree \
    are both sides extracted and compared file by file.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Compare package versions",
        long_about = "Without arguments, compares the build named by snip.json against the working tree. \
        With one reference, compares that build against the working tree; with two, compares them with each other. \
        With --remote, compares a local build against a published image."
    )]
    Diff {
        #[arg(long, help = "Compare against a published image")]
        remote: bool,
        #[arg(long, help = "Show a compact M/A/D listing only")]
        summary: bool,
        #[arg(short = 'U', long, default_value_t = DEFAULT_CONTEXT, help = "Lines of context around each change")]
        context: usize,
        #[arg(long, value_parser = parse_filter, help = "List only changes of the given kinds (A, D, M)")]
        diff_filter: Option<ChangeFilter>,
        #[arg(long, env = "SNIPDIFF_CACHE_DIR", help = "Local package cache")]
        cache_dir: Option<PathBuf>,
        #[arg(long, env = "SNIPDIFF_REGISTRY_DIR", help = "Registry mirror")]
        registry_dir: Option<PathBuf>,
        #[arg(num_args = 0..=2, help = "References to compare")]
        refs: Vec<String>,
    },
}

fn parse_filter(s: &str) -> Result<ChangeFilter, String> {
    ChangeFilter::try_parse(s).ok_or_else(|| format!("invalid diff filter: {s}"))
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SNIPDIFF_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Diff {
            remote,
            summary,
            context,
            diff_filter,
            cache_dir,
            registry_dir,
            refs,
        } => {
            let cache_dir = match cache_dir {
                Some(dir) => dir,
                None => default_dir("cache")?,
            };
            let registry_dir = match registry_dir {
                Some(dir) => dir,
                None => default_dir("registry")?,
            };

            let is_terminal = std::io::stdout().is_terminal();
            let use_pager = is_terminal && std::env::var_os("NO_PAGER").is_none();

            let options = DiffOptions {
                refs,
                remote,
                mode: if summary {
                    RenderMode::Summary
                } else {
                    RenderMode::Unified
                },
                context,
                filter: diff_filter.unwrap_or_default(),
                styled: is_terminal,
            };

            let pwd = std::env::current_dir()?;
            if use_pager {
                let pager = Pager::new();
                let session = Session::new(
                    &pwd,
                    &cache_dir,
                    &registry_dir,
                    Box::new(PagerWriter::new(pager.clone())),
                )?;

                session.diff(&options)?;
                minus::page_all(pager)?;
            } else {
                let session =
                    Session::new(&pwd, &cache_dir, &registry_dir, Box::new(std::io::stdout()))?;

                session.diff(&options)?;
            }
        }
    }

    Ok(())
}
