//! arraykit - Classic Array Algorithms
//!
//! CLI entry point for running the demo driver, browsing the algorithm
//! catalog and executing individual algorithms.

use anyhow::{bail, Context, Result};
use arraykit::catalog::{self, Tier};
use arraykit::config::{ArrayKitConfig, OutputFormat, CONFIG_FILE};
use arraykit::generate::InputGenerator;
use arraykit::runner::{self, Input};
use arraykit::{demo, logging};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "arraykit")]
#[command(version)]
#[command(about = "Classic array algorithms with a demo driver", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: nearest arraykit.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    // Commands sorted alphabetically for easier navigation
    /// Show or initialize configuration
    Config {
        /// Show the config file path in use
        #[arg(long)]
        path: bool,

        /// Write a default arraykit.toml in the current directory
        #[arg(long)]
        init: bool,
    },

    /// Run the demo driver over fixed sample arrays
    Demo {
        /// Section to run (repeatable; default from config)
        #[arg(short, long = "section", value_name = "TIER")]
        sections: Vec<Tier>,
    },

    /// List catalogued algorithms
    List {
        /// Only show one tier
        #[arg(long)]
        tier: Option<Tier>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run one algorithm
    Run {
        /// Algorithm name (see `arraykit list`)
        algorithm: String,

        /// Comma-separated input values
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        values: Vec<i32>,

        /// Generate N random values shaped for the algorithm instead
        /// (N defaults to the configured length)
        #[arg(long, value_name = "N", conflicts_with = "values")]
        random: Option<Option<usize>>,

        /// Seed for --random (default from config)
        #[arg(long)]
        seed: Option<u64>,

        /// Target value or sum
        #[arg(long, allow_hyphen_values = true)]
        target: Option<i64>,

        /// Window size or rotation amount
        #[arg(short, long)]
        k: Option<usize>,

        /// Number of valid elements in the primary array (merge-sorted-in-place)
        #[arg(short, long)]
        m: Option<usize>,

        /// Upper bound of the range 0..=n (find-missing)
        #[arg(short, long)]
        n: Option<u64>,

        /// Range start (reverse-range)
        #[arg(long)]
        start: Option<usize>,

        /// Range end, inclusive (reverse-range)
        #[arg(long)]
        end: Option<usize>,

        /// Comma-separated second array
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        other: Vec<i32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Config { path, init } => cmd_config(cli.config.as_deref(), &config, path, init),
        Commands::Demo { sections } => cmd_demo(&config, sections),
        Commands::List { tier, json } => cmd_list(&config, tier, json),
        Commands::Run {
            algorithm,
            values,
            random,
            seed,
            target,
            k,
            m,
            n,
            start,
            end,
            other,
            json,
        } => {
            let input = Input {
                values,
                other,
                target,
                k,
                m,
                n,
                start,
                end,
            };
            cmd_run(&config, &algorithm, input, random, seed, json)
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<ArrayKitConfig> {
    match explicit {
        Some(path) => ArrayKitConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => ArrayKitConfig::load_from_cwd().context("Failed to load config"),
    }
}

fn use_json(config: &ArrayKitConfig, flag: bool) -> bool {
    flag || config.output.format == OutputFormat::Json
}

fn cmd_config(explicit: Option<&Path>, config: &ArrayKitConfig, path: bool, init: bool) -> Result<()> {
    if init {
        let target = PathBuf::from(CONFIG_FILE);
        if target.exists() {
            bail!("{} already exists", target.display());
        }
        ArrayKitConfig::default()
            .save(&target)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        info!(path = %target.display(), "wrote default config");
        println!("Created {}", target.display());
        return Ok(());
    }

    if path {
        let found = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => {
                let cwd = std::env::current_dir().context("Failed to read current directory")?;
                ArrayKitConfig::find(&cwd)
            }
        };
        match found {
            Some(p) => println!("{}", p.display()),
            None => println!("No {} found; using defaults", CONFIG_FILE),
        }
        return Ok(());
    }

    print!("{}", config.to_toml().context("Failed to render config")?);
    Ok(())
}

fn cmd_demo(config: &ArrayKitConfig, sections: Vec<Tier>) -> Result<()> {
    let sections = if sections.is_empty() {
        config.demo.sections.clone()
    } else {
        sections
    };
    debug!(?sections, "demo sections");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&mut out, &sections).context("Demo failed")?;
    out.flush()?;
    Ok(())
}

fn cmd_list(config: &ArrayKitConfig, tier: Option<Tier>, json: bool) -> Result<()> {
    let algorithms: Vec<_> = catalog::all()
        .iter()
        .filter(|info| tier.map_or(true, |t| info.tier == t))
        .collect();

    if use_json(config, json) {
        println!("{}", serde_json::to_string_pretty(&algorithms)?);
        return Ok(());
    }

    let mut current: Option<Tier> = None;
    for info in algorithms {
        if current != Some(info.tier) {
            if current.is_some() {
                println!();
            }
            println!("{}:", info.tier);
            current = Some(info.tier);
        }
        let params = if info.params.is_empty() {
            String::new()
        } else {
            format!(" [{}]", info.params.join(", "))
        };
        println!(
            "  {:<27} {:<9} {:<46}{}",
            info.name, info.time, info.summary, params
        );
    }
    Ok(())
}

fn cmd_run(
    config: &ArrayKitConfig,
    algorithm: &str,
    mut input: Input,
    random: Option<Option<usize>>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    if let Some(len) = random {
        let len = len.unwrap_or(config.random.len);
        let info = catalog::find(algorithm)
            .with_context(|| format!("Unknown algorithm: {}", algorithm))?;
        let seed = seed.unwrap_or(config.random.seed);
        let mut generator = InputGenerator::new(seed);
        input.values = generator.shaped(info.input, len, config.random.range());
        debug!(seed, len, shape = ?info.input, "generated input");
    }

    let report = runner::run(algorithm, &input)
        .with_context(|| format!("Failed to run {}", algorithm))?;

    if use_json(config, json) {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
