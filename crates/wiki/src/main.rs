#![allow(clippy::print_stderr, clippy::print_stdout)]
mod check;
mod export;
mod inspect;
mod logging;
mod serve;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use wiki_web::{content, Wiki};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "chilling-wiki", version, about, long_about = None)]
pub struct Options {
    /// Control colored output (auto, always, never).
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub color: ColorChoice,
    /// Log at debug level, ignoring RUST_LOG.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Args)]
pub struct ContentArgs {
    /// Wiki content JSON file. Defaults to the bundled Chilling SMP content.
    #[arg(long, value_name = "FILE")]
    pub content: Option<Utf8PathBuf>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Export the static site (index.html and wiki.json).
    Build {
        #[command(flatten)]
        content: ContentArgs,
        /// Output directory.
        #[arg(short, long, default_value = "site")]
        out: Utf8PathBuf,
        /// Built viewer package (wasm-pack output) to copy into `<out>/pkg`.
        #[arg(long, value_name = "DIR", conflicts_with = "pkg_url")]
        pkg_dir: Option<Utf8PathBuf>,
        /// Where the page loads the viewer package from, when not copied.
        #[arg(long, value_name = "URL", default_value = "./pkg")]
        pkg_url: String,
    },
    /// Serve the wiki locally with a JSON API.
    Serve {
        #[command(flatten)]
        content: ContentArgs,
        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to listen on.
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
        /// Built viewer package to serve under `/pkg`.
        #[arg(long, value_name = "DIR")]
        pkg_dir: Option<Utf8PathBuf>,
    },
    /// List the pages matching a search query.
    Search {
        /// Free-text query (case-insensitive substring).
        query: String,
        #[command(flatten)]
        content: ContentArgs,
    },
    /// Validate content and print a summary.
    Check {
        #[command(flatten)]
        content: ContentArgs,
    },
    /// Show what a location fragment such as `#plugins~claims` displays.
    Route {
        fragment: String,
        #[command(flatten)]
        content: ContentArgs,
    },
    /// Generate shell completion scripts.
    Completion {
        /// Shell to generate completions for
        #[arg(value_name = "shell")]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let opts = Options::parse();
    apply_color(opts.color);
    logging::setup_subscriber(opts.verbose);
    logging::setup_panic_hook();

    if let Err(err) = run(&opts) {
        eprintln!("{} {err:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn apply_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Auto => colored::control::unset_override(),
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
    }
}

pub fn run(opts: &Options) -> anyhow::Result<()> {
    match &opts.command {
        Command::Build {
            content,
            out,
            pkg_dir,
            pkg_url,
        } => {
            let wiki = load_content(content)?;
            export::build(&wiki, out, pkg_dir.as_deref(), pkg_url)
        }
        Command::Serve {
            content,
            host,
            port,
            pkg_dir,
        } => {
            let wiki = load_content(content)?;
            let config = serve::ServerConfig {
                host: host.clone(),
                port: *port,
                pkg_dir: pkg_dir.as_ref().map(|dir| dir.as_std_path().to_path_buf()),
            };
            let rt = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
            rt.block_on(serve::serve(wiki, config))
        }
        Command::Search { query, content } => {
            let wiki = load_content(content)?;
            print!("{}", inspect::render_search(&wiki, query));
            Ok(())
        }
        Command::Check { content } => {
            let wiki = load_content(content)?;
            check::check(&wiki);
            Ok(())
        }
        Command::Route { fragment, content } => {
            let wiki = load_content(content)?;
            println!("{}", inspect::render_route(&wiki, fragment));
            Ok(())
        }
        Command::Completion { shell } => {
            clap_complete::generate(
                *shell,
                &mut Options::command(),
                "chilling-wiki",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

fn load_content(args: &ContentArgs) -> anyhow::Result<Wiki> {
    let path = args.content.as_deref().map(Utf8Path::as_std_path);
    let wiki = content::load(path).with_context(|| match &args.content {
        Some(path) => format!("failed to load wiki content from {path}"),
        None => "bundled wiki content is invalid".to_string(),
    })?;
    tracing::debug!(pages = wiki.pages.len(), "content loaded");
    Ok(wiki)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Options::command().debug_assert();
    }

    #[test]
    fn build_defaults() {
        let opts = Options::try_parse_from(["chilling-wiki", "build"]).unwrap();
        match opts.command {
            Command::Build {
                out,
                pkg_dir,
                pkg_url,
                content,
            } => {
                assert_eq!(out, "site");
                assert_eq!(pkg_dir, None);
                assert_eq!(pkg_url, "./pkg");
                assert!(content.content.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn pkg_dir_conflicts_with_pkg_url() {
        let result = Options::try_parse_from([
            "chilling-wiki",
            "build",
            "--pkg-dir",
            "pkg",
            "--pkg-url",
            "/cdn",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn serve_defaults() {
        let opts = Options::try_parse_from(["chilling-wiki", "serve", "--port", "3000"]).unwrap();
        match opts.command {
            Command::Serve { host, port, .. } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 3000);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let opts =
            Options::try_parse_from(["chilling-wiki", "search", "vein", "--color", "never", "-v"])
                .unwrap();
        assert_eq!(opts.color, ColorChoice::Never);
        assert!(opts.verbose);
    }
}
