use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for stavlog
/// CLI application for small construction businesses: finances, attendance,
/// site diaries and tasks on top of SQLite
#[derive(Parser)]
#[command(
    name = "stavlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Construction business ledger: finances, attendance, site diaries and tasks over SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage organizations (tenants)
    Org {
        #[command(subcommand)]
        action: OrgAction,
    },

    /// Manage construction sites
    Site {
        #[command(subcommand)]
        action: SiteAction,
    },

    /// Manage workers
    Worker {
        #[command(subcommand)]
        action: WorkerAction,
    },

    /// Record and list worker attendance
    Att {
        #[command(subcommand)]
        action: AttAction,
    },

    /// Record and manage invoices and expenses
    Tx {
        #[command(subcommand)]
        action: TxAction,
    },

    /// Record fuel purchases
    Fuel {
        #[command(subcommand)]
        action: FuelAction,
    },

    /// Record material purchases
    Material {
        #[command(subcommand)]
        action: MaterialAction,
    },

    /// Site diary: one record per site and day
    Diary {
        #[command(subcommand)]
        action: DiaryAction,
    },

    /// Manage tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Unified finance ledger with summary and category breakdown
    Finance {
        /// YYYY, YYYY-MM, YYYY-MM-DD, FROM:TO or "all" (default: current month)
        #[arg(long, short)]
        period: Option<String>,

        /// Filter by entry type
        #[arg(long = "type", value_parser = ["income", "expense"])]
        entry_type: Option<String>,

        /// Filter by site id
        #[arg(long)]
        site: Option<i64>,

        /// Filter by category (exact match)
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive substring search in descriptions
        #[arg(long)]
        search: Option<String>,

        /// Number of visible pages (each page adds `page_size` rows)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Export ledger or diary data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "PERIOD",
            help = "Filter export by year/month/day or a custom range"
        )]
        period: Option<String>,

        /// Export the site diary instead of the finance ledger
        #[arg(long)]
        diary: bool,

        /// Site id (required with --diary)
        #[arg(long, requires = "diary")]
        site: Option<i64>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}

#[derive(Subcommand)]
pub enum OrgAction {
    /// Create a new organization (starts a 14-day trial)
    Add { name: String },

    /// List all organizations
    List,

    /// Switch the active organization
    Use { id: i64 },
}

#[derive(Subcommand)]
pub enum SiteAction {
    /// Add a construction site
    Add { name: String },

    /// List sites
    List {
        #[arg(long, help = "Include completed sites")]
        all: bool,
    },

    /// Mark a site as completed
    Complete { id: i64 },

    /// Reopen a completed site
    Reopen { id: i64 },
}

#[derive(Subcommand)]
pub enum WorkerAction {
    /// Add a worker
    Add {
        name: String,

        #[arg(long, default_value_t = 0.0)]
        rate: f64,

        #[arg(long, help = "Create with the admin role")]
        admin: bool,

        #[arg(long = "job-title")]
        job_title: Option<String>,
    },

    /// List workers
    List {
        #[arg(long, help = "Include archived workers")]
        all: bool,
    },

    /// Change a worker's hourly rate
    Rate { id: i64, rate: f64 },

    /// Archive a worker (history is kept)
    Archive { id: i64 },

    /// Restore an archived worker
    Restore { id: i64 },
}

#[derive(Subcommand)]
pub enum AttAction {
    /// Log a day of work for a worker on a site
    Add {
        #[arg(long)]
        worker: i64,

        #[arg(long)]
        site: i64,

        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long, default_value_t = 0.0)]
        hours: f64,

        /// Fixed pay for the day instead of hourly
        #[arg(long)]
        fixed: Option<f64>,

        #[arg(long, default_value = "")]
        desc: String,
    },

    /// List attendance logs
    List {
        #[arg(long, short)]
        period: Option<String>,

        #[arg(long)]
        site: Option<i64>,
    },
}

#[derive(Subcommand)]
pub enum TxAction {
    /// Add an invoice or expense
    Add {
        amount: f64,

        #[arg(long, value_parser = ["invoice", "expense"], default_value = "expense")]
        kind: String,

        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Category: Réžia, Materiál, Mzdy, PHM or Iné
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        paid: bool,

        #[arg(long)]
        site: Option<i64>,

        #[arg(long, default_value = "")]
        desc: String,
    },

    /// List transactions
    List {
        #[arg(long, short)]
        period: Option<String>,
    },

    /// Toggle the paid flag of a transaction
    Paid { id: i64 },

    /// Delete a transaction
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum FuelAction {
    /// Add a fuel purchase
    Add {
        amount: f64,

        #[arg(long, default_value_t = 0.0)]
        liters: f64,

        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        site: i64,

        #[arg(long, default_value = "")]
        desc: String,
    },

    /// List fuel purchases
    List {
        #[arg(long, short)]
        period: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum MaterialAction {
    /// Add a material purchase
    Add {
        amount: f64,

        #[arg(long, default_value_t = 0.0)]
        quantity: f64,

        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        site: i64,

        #[arg(long, default_value = "")]
        desc: String,
    },

    /// List material purchases
    List {
        #[arg(long, short)]
        period: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum DiaryAction {
    /// Create or update the diary record for a site and day
    Add {
        #[arg(long)]
        site: i64,

        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        weather: Option<String>,

        #[arg(long = "temp-morning")]
        temp_morning: Option<f64>,

        #[arg(long = "temp-noon")]
        temp_noon: Option<f64>,

        #[arg(long)]
        equipment: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Show the diary record for a site and day
    Show {
        #[arg(long)]
        site: i64,

        #[arg(long)]
        date: Option<String>,
    },

    /// Sign the diary record, locking it against edits
    Sign {
        #[arg(long)]
        site: i64,

        #[arg(long)]
        date: Option<String>,
    },

    /// Unlock a signed diary record
    Unlock {
        #[arg(long)]
        site: i64,

        #[arg(long)]
        date: Option<String>,
    },

    /// Month overview: diary status, hours and work lines per day
    Month {
        #[arg(long)]
        site: i64,

        /// YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        title: String,

        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        site: Option<i64>,

        #[arg(long)]
        worker: Option<i64>,

        #[arg(long, default_value = "")]
        category: String,

        /// Mark as priority; priority tasks sort first
        #[arg(long)]
        priority: bool,
    },

    /// List tasks (priority first)
    List {
        #[arg(long, help = "Include finished tasks")]
        all: bool,
    },

    /// Mark a task as done
    Done { id: i64 },

    /// Reopen a finished task
    Reopen { id: i64 },
}
