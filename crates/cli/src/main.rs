use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use designmap_catalog::Catalog;
use designmap_graph::{GraphSnapshot, RelationResolver};
use designmap_registry::DesignRegistry;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "designmap")]
#[command(about = "Design system metadata registry and relationship graph tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a catalog and report unresolved relationship references
    Validate(ValidateArgs),

    /// Component and registry statistics
    Stats(StatsArgs),

    /// Search components by name, description or feature tags
    Search(SearchArgs),

    /// Print the renderer-ready graph snapshot as JSON
    Graph(GraphArgs),

    /// Print the JSON Schema of an external document
    Schema(SchemaArgs),

    /// Print the bundled demo catalog (a ready-made seed file)
    Demo,
}

#[derive(Args)]
struct ValidateArgs {
    /// Catalog file (JSON or TOML)
    catalog: PathBuf,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct StatsArgs {
    /// Catalog file (JSON or TOML)
    catalog: PathBuf,

    /// Emit stats as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SearchArgs {
    /// Catalog file (JSON or TOML)
    catalog: PathBuf,

    /// Search query
    query: String,

    /// Fuzzy-ranked search instead of exact substring matching
    #[arg(long)]
    ranked: bool,

    /// Maximum number of results
    #[arg(long, default_value_t = 10)]
    limit: usize,

    /// Emit results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct GraphArgs {
    /// Catalog file (JSON or TOML)
    catalog: PathBuf,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,

    /// Write the snapshot to a file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct SchemaArgs {
    /// Which document schema to print
    #[arg(long, value_enum, default_value = "catalog")]
    doc: SchemaDoc,
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemaDoc {
    /// Catalog input document
    Catalog,
    /// Graph snapshot output document
    Snapshot,
}

fn main() {
    let cli = Cli::parse();

    // Keep stdout clean for JSON consumers
    let json_output = match &cli.command {
        Commands::Validate(args) => args.json,
        Commands::Stats(args) => args.json,
        Commands::Search(args) => args.json,
        Commands::Graph(_) | Commands::Schema(_) | Commands::Demo => true,
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet || json_output {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Stats(args) => run_stats(&args),
        Commands::Search(args) => run_search(&args),
        Commands::Graph(args) => run_graph(&args),
        Commands::Schema(args) => run_schema(&args),
        Commands::Demo => print_stdout(Catalog::builtin_demo_source().trim_end()),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn load_registry(path: &Path) -> Result<DesignRegistry> {
    let catalog = Catalog::from_path(path)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;
    Ok(DesignRegistry::from_catalog(catalog))
}

fn run_validate(args: &ValidateArgs) -> Result<()> {
    let registry = load_registry(&args.catalog)?;
    let report = RelationResolver::new(&registry).audit();

    if args.json {
        print_stdout(&serde_json::to_string_pretty(&report)?)?;
    } else {
        print_stdout(&format!("{} references resolved", report.resolved))?;
        for miss in &report.unresolved {
            print_stdout(&format!(
                "unresolved {} reference '{}' declared by {}",
                miss.kind, miss.reference, miss.origin
            ))?;
        }
    }

    if !report.is_clean() {
        eprintln!(
            "Error: {} unresolved reference(s) in {}",
            report.unresolved.len(),
            args.catalog.display()
        );
        std::process::exit(1);
    }
    Ok(())
}

fn run_stats(args: &StatsArgs) -> Result<()> {
    let registry = load_registry(&args.catalog)?;
    let stats = registry.component_stats();
    let totals = registry.totals();

    if args.json {
        let body = serde_json::json!({ "components": stats, "totals": totals });
        print_stdout(&serde_json::to_string_pretty(&body)?)?;
    } else {
        print_stdout(&format!(
            "{} components ({} atomic, {} molecular, {} organism)",
            stats.total, stats.atomic, stats.molecular, stats.organism
        ))?;
        print_stdout(&format!(
            "status: {} stable, {} beta, {} planned",
            stats.stable, stats.beta, stats.planned
        ))?;
        print_stdout(&format!(
            "registry: {} utilities, {} hooks, {} pages",
            totals.utilities, totals.hooks, totals.pages
        ))?;
    }
    Ok(())
}

fn run_search(args: &SearchArgs) -> Result<()> {
    let registry = load_registry(&args.catalog)?;

    let mut results: Vec<_> = if args.ranked {
        registry
            .rank_components(&args.query, args.limit)
            .into_iter()
            .map(|(component, _)| component)
            .collect()
    } else {
        registry.search_components(&args.query)
    };
    results.truncate(args.limit);

    if args.json {
        print_stdout(&serde_json::to_string_pretty(&results)?)?;
    } else if results.is_empty() {
        print_stdout(&format!("no components match '{}'", args.query))?;
    } else {
        for component in &results {
            print_stdout(&format!(
                "{} ({}, {}): {}",
                component.name, component.category, component.status, component.description
            ))?;
        }
    }
    Ok(())
}

fn run_graph(args: &GraphArgs) -> Result<()> {
    let registry = load_registry(&args.catalog)?;
    let snapshot = GraphSnapshot::build(&registry);

    let body = if args.pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };

    match &args.out {
        Some(path) => {
            std::fs::write(path, &body)
                .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
            log::info!("Wrote graph snapshot to {}", path.display());
        }
        None => print_stdout(&body)?,
    }
    Ok(())
}

fn run_schema(args: &SchemaArgs) -> Result<()> {
    let schema = match args.doc {
        SchemaDoc::Catalog => schemars::schema_for!(Catalog),
        SchemaDoc::Snapshot => schemars::schema_for!(GraphSnapshot),
    };
    print_stdout(&serde_json::to_string_pretty(&schema)?)
}
