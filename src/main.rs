use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::fmt::time::ChronoLocal;

use quotebook::cli::{
    handle_budgets_command, handle_contractors_command, handle_providers_command,
    handle_quote_command, handle_rut_command, BudgetArgs, ContractorArgs, ProviderArgs, QuoteArgs,
    RutArgs,
};
use quotebook::config::{paths::QuotebookPaths, settings::Settings};
use quotebook::storage::DataSource;

#[derive(Parser)]
#[command(
    name = "quotebook",
    version,
    about = "Pricing and list queries for construction-services budgets",
    long_about = "Quotebook prices budget rows (net, utility, tax) and lists \
                  contractors, providers and issued budgets with search, \
                  filters, sorting and summary stats."
)]
struct Cli {
    /// Base directory for config.json and data/ (overrides QUOTEBOOK_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List contractors
    #[command(alias = "contratistas")]
    Contractors(ContractorArgs),

    /// List providers
    #[command(alias = "proveedores")]
    Providers(ProviderArgs),

    /// List issued budgets
    #[command(alias = "presupuestos")]
    Budgets(BudgetArgs),

    /// Price the rows of a budget file
    Quote(QuoteArgs),

    /// Validate a RUT and show its person type
    Rut(RutArgs),

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => QuotebookPaths::with_base_dir(dir),
        None => QuotebookPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let source = DataSource::new(paths.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Contractors(args) => handle_contractors_command(&source, &settings, args, &mut out)?,
        Commands::Providers(args) => handle_providers_command(&source, &settings, args, &mut out)?,
        Commands::Budgets(args) => handle_budgets_command(&source, &settings, args, &mut out)?,
        Commands::Quote(args) => handle_quote_command(&settings, args, &mut out)?,
        Commands::Rut(args) => handle_rut_command(args, &mut out)?,
        Commands::Config => {
            writeln!(out, "Quotebook Configuration")?;
            writeln!(out, "=======================")?;
            writeln!(out, "Base directory:  {}", paths.base_dir().display())?;
            writeln!(out, "Data directory:  {}", paths.data_dir().display())?;
            writeln!(out, "Settings file:   {}", paths.settings_file().display())?;
            writeln!(out)?;
            writeln!(out, "Settings:")?;
            writeln!(out, "  Default tax:     {}%", settings.default_tax_percent)?;
            writeln!(out, "  Amount decimals: {}", settings.amount_decimals)?;
            writeln!(out, "  Date format:     {}", settings.date_format)?;
            writeln!(out, "  Page size:       {}", settings.page_size)?;
        }
    }

    out.flush()?;
    Ok(())
}
