use clap::{Arg, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "shelfz",
    bin_name = "shelfz",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Browse a product catalog by owner, category and text", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding users.json, categories.json and products.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub fixtures: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Combine filters instead of letting the latest one replace the others
    #[arg(long, global = true, help_heading = "Options")]
    pub combine: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Browse,
    Catalog,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Browse => "Browse Commands:",
            CommandGroup::Catalog => "Catalog Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "browse" => Some(CommandGroup::Browse),
            "users" | "categories" => Some(CommandGroup::Catalog),
            "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Browse,
            CommandGroup::Catalog,
            CommandGroup::Misc,
        ]
    }
}

pub fn get_grouped_help() -> String {
    let mut cmd = Cli::command();
    // Building adds the generated --version flag to the argument list.
    cmd.build();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("shelfz {version}\n"));
    output.push_str("Browse a product catalog by owner, category and text\n");
    output.push('\n');
    output.push_str("Usage: shelfz [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push_str("\nOptions:\n");
    for arg in cmd.get_arguments() {
        if arg.is_positional() || arg.is_hide_set() {
            continue;
        }
        let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
        output.push_str(&format!("  {:<24} {}\n", option_label(arg), help));
    }

    output
}

/// `-v, --verbose` or `    --fixtures <DIR>`, aligned on the long flag.
fn option_label(arg: &Arg) -> String {
    let short = match arg.get_short() {
        Some(c) => format!("-{}, ", c),
        None => "    ".to_string(),
    };
    let long = arg.get_long().map(|l| format!("--{}", l)).unwrap_or_default();
    let value: String = match arg.get_value_names() {
        Some(names) if arg.get_action().takes_values() => {
            names.iter().map(|n| format!(" <{}>", n)).collect()
        }
        _ => String::new(),
    };
    format!("{}{}{}", short, long, value)
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

pub fn print_subcommand_help(command: &Option<Commands>) {
    let subcommand_name = match command {
        Some(Commands::List { .. }) => "list",
        Some(Commands::Browse) => "browse",
        Some(Commands::Users) => "users",
        Some(Commands::Categories) => "categories",
        Some(Commands::Config { .. }) => "config",
        Some(Commands::Help { .. }) => "help",
        None => {
            print_grouped_help();
            return;
        }
    };

    print_help_for_command(subcommand_name);
}

pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();
    match cmd.find_subcommand_mut(name) {
        Some(subcmd) => print!("{}", subcmd.render_help()),
        None => {
            eprintln!("Unknown command: {}", name);
            eprintln!();
            print_grouped_help();
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the filter panel and product table
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only products owned by this user (exact name)
        #[arg(short, long)]
        user: Option<String>,

        /// Only products in this category (exact title)
        #[arg(short, long)]
        category: Option<String>,

        /// Products whose name, category or owner contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Interactive session: one filter action per line
    #[command(alias = "b", display_order = 2)]
    Browse,

    /// List the users that own categories
    #[command(display_order = 10)]
    Users,

    /// List the categories with their icons
    #[command(display_order = 11)]
    Categories,

    /// Get or set configuration
    #[command(display_order = 20)]
    Config {
        /// Configuration key (filter-mode, fixtures-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for shelfz or a subcommand
    #[command(display_order = 21)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
