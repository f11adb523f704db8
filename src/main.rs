use clap::{Parser, Subcommand};
use masonry_gal::{config, generate, output, source};
use std::path::PathBuf;

/// `CARGO_PKG_VERSION` on a release tag, otherwise `dev@<short hash>`.
fn version_string() -> &'static str {
    version_for(
        env!("MASONRY_GAL_RELEASE_TAG") == "true",
        env!("MASONRY_GAL_GIT_HASH"),
    )
}

fn version_for(on_release_tag: bool, hash: &str) -> &'static str {
    if on_release_tag {
        env!("CARGO_PKG_VERSION")
    } else if hash.is_empty() {
        "dev@unknown"
    } else {
        // Leaked once at startup
        Box::leak(format!("dev@{hash}").into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "masonry-gal")]
#[command(about = "Render a masonry gallery page from a posts manifest")]
#[command(long_about = "\
Render a masonry gallery page from a posts manifest

The posts manifest is JSON produced by your content pipeline:

  {
    \"cover\": { \"src\": \"/images/cover.jpg\" },
    \"posts\": [
      { \"id\": \"a1\", \"path\": \"/tiny-paintings/koala/\", \"title\": \"Koala\",
        \"date\": \"2019-03-02\", \"categories\": [\"tiny-paintings\"],
        \"image\": { \"src\": \"/images/koala.jpg\" },
        \"thumbnail\": { \"src\": \"/images/koala-thumb.jpg\" } }
    ]
  }

Posts are filtered by [source] category and shown newest first. The page
starts with [reveal] initial_count posts and a \"Load more\" button.

Run 'masonry-gal gen-config' to generate a documented config file.")]
#[command(version = version_string())]
struct Cli {
    /// Posts manifest (JSON)
    #[arg(long, default_value = "posts.json", global = true)]
    posts: PathBuf,

    /// Gallery config (TOML). Stock defaults when the file is absent.
    #[arg(long, default_value = "gallery.toml", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the gallery page
    Build,
    /// Validate config and manifest without writing anything
    Check,
    /// Print a stock config with all options documented
    GenConfig,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Build => {
            let page = generate::build(&cli.config, &cli.posts, &cli.output)?;
            output::print_build_output(&page);
        }
        Command::Check => {
            let config_found = cli.config.exists();
            let site_config = config::load_config(&cli.config)?;
            let manifest = source::load_manifest(&cli.posts)?;
            let selected =
                source::select_posts(&manifest.posts, site_config.source.category.as_deref());
            output::print_check_output(
                &site_config,
                &cli.config,
                config_found,
                &selected,
                manifest.posts.len(),
            );
            println!("==> Config and manifest are valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
