use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use wealthwise::cli::{
    handle_alert_command, handle_category_command, handle_export_command, handle_goal_command,
    handle_import_command, handle_income_command, handle_log_command, handle_month_command,
    handle_overview_command, handle_recommend_command, AlertCommands, CategoryCommands, FormatArg,
    GoalCommands, MonthCommands,
};
use wealthwise::config::{Settings, WealthPaths};
use wealthwise::storage::{init::initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "wealthwise",
    version,
    about = "Personal budget tracking from the command line",
    long_about = "WealthWise keeps your budget categories, savings goals, alerts and \
                  monthly history in one place, and can export or import the whole \
                  budget as a JSON snapshot."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new budget
    Init,

    /// Show current configuration and paths
    Config,

    /// Show the budget overview
    Overview {
        /// Write the category table as CSV instead of printing
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Alert commands
    #[command(subcommand)]
    Alert(AlertCommands),

    /// Monthly history commands
    #[command(subcommand)]
    Month(MonthCommands),

    /// Show or set monthly income and savings rate
    Income {
        /// Monthly income
        #[arg(short, long)]
        amount: Option<String>,
        /// Savings rate in percent (0-100)
        #[arg(short, long)]
        savings_rate: Option<u8>,
    },

    /// Export the budget as a snapshot file
    Export {
        /// Output file (defaults to the export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Json)]
        format: FormatArg,
    },

    /// Import a JSON snapshot file
    Import {
        /// Path to the snapshot
        file: PathBuf,
    },

    /// Recommend an allocation for the current income
    Recommend,

    /// Show recent changes from the audit log
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = WealthPaths::new()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing WealthWise at: {}", paths.base_dir().display());
            let created = initialize_storage(&paths)?;
            if created {
                let settings = Settings::load_or_create(&paths)?;
                if settings.seed_demo_data {
                    println!("A demo budget has been created.");
                } else {
                    println!("An empty budget has been created.");
                }
            } else {
                println!("Existing budget found; nothing changed.");
            }
            println!();
            println!("Run 'wealthwise overview' to see your budget.");
        }
        Some(Commands::Config) => {
            let settings = Settings::load_or_create(&paths)?;
            println!("WealthWise Configuration");
            println!("========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Budget file:      {}", paths.budget_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Alert threshold: {}%", settings.alert_threshold);
            println!("  Pretty exports:  {}", settings.export_pretty);
            println!("  Seed demo data:  {}", settings.seed_demo_data);
        }
        Some(command) => {
            let storage = Storage::open(paths)?;
            run(&storage, command)?;
        }
        None => {
            println!("WealthWise - personal budget tracking");
            println!();
            println!("Run 'wealthwise --help' for usage information.");
        }
    }

    Ok(())
}

fn run(storage: &Storage, command: Commands) -> Result<()> {
    match command {
        Commands::Overview { csv } => handle_overview_command(storage, csv.as_deref())?,
        Commands::Category(cmd) => handle_category_command(storage, cmd)?,
        Commands::Goal(cmd) => handle_goal_command(storage, cmd)?,
        Commands::Alert(cmd) => handle_alert_command(storage, cmd)?,
        Commands::Month(cmd) => handle_month_command(storage, cmd)?,
        Commands::Income {
            amount,
            savings_rate,
        } => handle_income_command(storage, amount, savings_rate)?,
        Commands::Export { output, format } => {
            handle_export_command(storage, output.as_deref(), format)?
        }
        Commands::Import { file } => handle_import_command(storage, &file)?,
        Commands::Recommend => handle_recommend_command(storage)?,
        Commands::Log { count } => handle_log_command(storage, count)?,
        Commands::Init | Commands::Config => {}
    }
    Ok(())
}
