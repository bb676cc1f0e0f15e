//! Folio CLI — run the retrieval sandbox and browse the portfolio from the terminal.
//!
//! Calls `folio-core` directly; steps are printed as they are revealed.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use folio_core::carousel::Carousel;
use folio_core::config::RetrieverKind;
use folio_core::knowledge::DEFAULT_SIZE;
use folio_core::sandbox::{result_heading, NO_RESULTS_MESSAGE};
use folio_core::types::{Project, RetrievalStep};
use folio_core::{Catalog, FolioConfig, Sandbox, SandboxView, SearchState};

/// Folio CLI — the portfolio's retrieval sandbox from the terminal.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Directory containing folio.toml (default: current directory)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Directory containing the catalog JSON files (overrides folio.toml)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum RetrieverArg {
    Simulated,
    Scored,
}

impl From<RetrieverArg> for RetrieverKind {
    fn from(arg: RetrieverArg) -> Self {
        match arg {
            RetrieverArg::Simulated => RetrieverKind::Simulated,
            RetrieverArg::Scored => RetrieverKind::Scored,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run one sandbox search: reveal the retrieval path, then list matching projects
    Search {
        /// Search query (used as typed; only the blank check trims it)
        query: String,

        /// Retriever that produces the retrieval path
        #[arg(long, value_enum)]
        retriever: Option<RetrieverArg>,

        /// Delay between revealed steps, in milliseconds
        #[arg(long)]
        pacing_ms: Option<u64>,
    },
    /// List every project in the catalog
    Projects,
    /// Show one insight from the carousel
    Insights {
        /// Carousel position (wraps around)
        #[arg(long, default_value = "0")]
        index: usize,
    },
    /// Show the knowledge stack with node positions on a square canvas
    Knowledge {
        /// Canvas edge length
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: f64,
    },
    /// Show catalog and sandbox configuration
    Status,
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn load_config(cli: &Cli) -> FolioConfig {
    let dir = match &cli.config_dir {
        Some(d) => d.clone(),
        None => std::env::current_dir()
            .unwrap_or_else(|e| fail(format!("Could not determine current directory: {e}"))),
    };
    let mut config = FolioConfig::load(&dir).unwrap_or_else(|e| fail(e));
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = Some(data_dir.clone());
    }
    debug!(
        source = ?config.source,
        retriever = config.retriever.as_str(),
        pacing_ms = config.pacing.as_millis() as u64,
        "Config loaded"
    );
    config
}

fn print_step(index: usize, step: &RetrievalStep) {
    println!("{}. {} (Score: {}%)", index + 1, step.node, step.percent());
    println!("   {}", step.reason);
}

fn print_project(p: &Project) {
    println!("{} {}  [{}]", p.icon, p.title, p.accent().as_str());
    println!("   {}", p.description);
    if !p.tags.is_empty() {
        println!("   tags: {}", p.tags.join(", "));
    }
    if let Some(url) = &p.github_url {
        println!("   code: {url}");
    }
    if let Some(url) = &p.live_url {
        println!("   demo: {url}");
    }
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(format!("Could not serialize output: {e}")),
    }
}

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("folio=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = load_config(&cli);
    let catalog = Catalog::load(&config).unwrap_or_else(|e| fail(e));

    match cli.command {
        Commands::Search { query, retriever, pacing_ms } => {
            if let Some(r) = retriever {
                config.retriever = r.into();
            }
            if let Some(ms) = pacing_ms {
                config.pacing = Duration::from_millis(ms);
            }
            let sandbox = Sandbox::from_config(catalog, &config);

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .unwrap_or_else(|e| fail(format!("Could not start runtime: {e}")));

            let mut state = SearchState::new();
            state.set_query(query.clone());
            let json = cli.json;
            let outcome = runtime.block_on(sandbox.run(&mut state, |s| {
                if json {
                    return;
                }
                if let Some(step) = s.revealed_steps().last() {
                    print_step(s.revealed_steps().len() - 1, step);
                    let _ = std::io::stdout().flush();
                }
            }));

            match outcome {
                Ok(None) => fail("Query is empty"),
                Ok(Some(_)) => {}
                Err(e) => {
                    if json {
                        print_json(&serde_json::json!({ "query": query, "error": e.to_string() }));
                    }
                    fail(format!("Search failed: {e}"));
                }
            }

            if json {
                print_json(&serde_json::json!({
                    "query": query,
                    "retriever": sandbox.retriever_name(),
                    "steps": state.revealed_steps(),
                    "results": state.results(),
                }));
                if state.results().is_empty() {
                    std::process::exit(1);
                }
                return;
            }

            match state.view() {
                SandboxView::Completed { results, .. } => {
                    println!("\n{}\n", result_heading(results.len()));
                    for p in results {
                        print_project(p);
                    }
                }
                SandboxView::NoResults { .. } => fail(format!("\n{NO_RESULTS_MESSAGE}")),
                SandboxView::Failed { message } => fail(message),
                SandboxView::Idle | SandboxView::Searching { .. } => {}
            }
        }
        Commands::Projects => {
            if cli.json {
                print_json(&serde_json::json!(catalog.projects()));
            } else {
                for p in catalog.projects() {
                    print_project(p);
                }
                eprintln!("\n{} projects", catalog.projects().len());
            }
        }
        Commands::Insights { index } => {
            let carousel = Carousel::at(catalog.insights().len(), index);
            let Some(i) = carousel.current() else {
                fail("No insights in catalog");
            };
            let insight = &catalog.insights()[i];

            if cli.json {
                print_json(&serde_json::json!({
                    "index": i,
                    "total": carousel.len(),
                    "insight": insight,
                }));
            } else {
                let avatar = match (&insight.avatar, insight.initial()) {
                    (Some(url), _) => url.clone(),
                    (None, Some(c)) => format!("({c})"),
                    (None, None) => String::new(),
                };
                println!("{avatar} {}  {}", insight.author, insight.date);
                println!("   {}", insight.excerpt);
                if let Some(url) = &insight.read_more_url {
                    println!("   Read More → {url}");
                }
                if carousel.has_controls() {
                    eprintln!("\n{} of {}", i + 1, carousel.len());
                }
            }
        }
        Commands::Knowledge { size } => {
            let Some(stack) = catalog.knowledge() else {
                fail("No knowledge stack in catalog");
            };
            let layout = stack.layout(size);

            if cli.json {
                print_json(&serde_json::json!(layout));
            } else {
                let c = &layout.central;
                println!("{}  ({:.0}, {:.0})  [{}]", c.label, c.x, c.y, c.accent.as_str());
                for (node, source) in layout.nodes.iter().zip(&stack.nodes) {
                    println!("   {}  ({:.0}, {:.0})  [{}]", node.label, node.x, node.y, node.accent.as_str());
                    let linked: Vec<&str> = source
                        .connections
                        .iter()
                        .filter(|id| **id != stack.central.id)
                        .filter_map(|id| stack.nodes.iter().find(|n| n.id == *id))
                        .map(|n| n.label.as_str())
                        .collect();
                    if !linked.is_empty() {
                        println!("      linked: {}", linked.join(", "));
                    }
                }
                eprintln!("\n{} nodes, {} edges", layout.nodes.len(), layout.edges.len());
            }
        }
        Commands::Status => {
            let sandbox = Sandbox::from_config(catalog, &config);
            let source = config
                .source
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "defaults".to_string());
            let data = config
                .data_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string());
            let pacing_ms = sandbox.sequencer().pacing().as_millis() as u64;

            if cli.json {
                print_json(&serde_json::json!({
                    "config": source,
                    "data": data,
                    "projects": sandbox.catalog().projects().len(),
                    "insights": sandbox.catalog().insights().len(),
                    "knowledge_nodes": sandbox.catalog().knowledge().map_or(0, |k| k.nodes.len()),
                    "retriever": sandbox.retriever_name(),
                    "pacing_ms": pacing_ms,
                    "top_k": config.top_k,
                }));
            } else {
                println!("Config:     {source}");
                println!("Data:       {data}");
                println!("Projects:   {}", sandbox.catalog().projects().len());
                println!("Insights:   {}", sandbox.catalog().insights().len());
                if let Some(stack) = sandbox.catalog().knowledge() {
                    println!("Knowledge:  {} nodes", stack.nodes.len());
                }
                println!("Retriever:  {}", sandbox.retriever_name());
                println!("Pacing:     {pacing_ms}ms");
                if config.retriever == RetrieverKind::Scored {
                    println!("Top k:      {}", config.top_k);
                }
            }
        }
    }
}
