//! # CLI Layer
//!
//! This module is **one possible UI client** for shelfz. It is the only place that
//! parses arguments, touches stdout/stdin, installs logging, and formats output.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` from flags and config
//! - `handle_*()`: Per-command handlers that call the API and print the result

use super::browse::run_session;
use super::render::{print_messages, render_panel, render_table, render_text_list};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, Cli, Commands,
};
use super::theme::stdout_supports_color;
use clap::Parser;
use shelfz::api::{CatalogApi, CmdResult, ConfigAction};
use shelfz::error::Result;
use shelfz::init::{initialize, InitOptions};
use shelfz::join::find_owner;
use shelfz::model::Sex;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: CatalogApi,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    if let Some(Commands::Help { command }) = &cli.command {
        return handle_help(command.as_deref());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            user,
            category,
            search,
        }) => handle_list(&mut ctx, user, category, search),
        Some(Commands::Browse) => handle_browse(&mut ctx),
        Some(Commands::Users) => handle_users(&ctx),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Help { .. }) => Ok(()),
        None => handle_list(&mut ctx, None, None, None),
    }
}

/// Logs go to stderr so they never mix with rendered output.
fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `RUST_LOG` wins over the `--verbose` default.
fn log_filter(verbose: bool) -> EnvFilter {
    let level = if verbose {
        "shelfz=debug"
    } else {
        "shelfz=warn"
    };
    match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(level),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let options = InitOptions {
        config_dir: cli.config_dir.clone(),
        fixtures_dir: cli.fixtures.clone(),
        combine: cli.combine,
    };
    Ok(AppContext {
        api: initialize(&options)?,
        use_color: !cli.no_color && stdout_supports_color(),
    })
}

/// Applies the given filters in the order user, category, search, the way the
/// controls would be clicked, and shows the final view.
fn handle_list(
    ctx: &mut AppContext,
    user: Option<String>,
    category: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let mut result: Option<CmdResult> = None;
    if let Some(name) = user {
        result = Some(ctx.api.filter_by_user(name));
    }
    if let Some(title) = category {
        result = Some(ctx.api.filter_by_category(title));
    }
    if let Some(query) = search {
        result = Some(ctx.api.search(query));
    }
    let result = result.unwrap_or_else(|| ctx.api.view());

    print_view(ctx, &result);
    Ok(())
}

fn handle_browse(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = std::io::stdout();

    run_session(
        &mut ctx.api,
        stdin.lock(),
        &mut stdout,
        ctx.use_color,
        interactive,
    )?;

    if interactive {
        println!();
    }
    Ok(())
}

fn handle_users(ctx: &AppContext) -> Result<()> {
    let lines: Vec<String> = ctx
        .api
        .users()
        .iter()
        .map(|u| {
            let sex = match u.sex {
                Sex::M => "m",
                Sex::F => "f",
            };
            format!("{:>3}  {} ({})", u.id, u.name, sex)
        })
        .collect();
    print!("{}", render_text_list(&lines, "No users.", ctx.use_color));
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let users = ctx.api.users();
    let lines: Vec<String> = ctx
        .api
        .categories()
        .iter()
        .map(|c| {
            let owner = find_owner(users, c).map_or("?", |u| u.name.as_str());
            format!("{:>3}  {} {}  (owner: {})", c.id, c.icon, c.title, owner)
        })
        .collect();
    print!(
        "{}",
        render_text_list(&lines, "No categories.", ctx.use_color)
    );
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    let mut lines = Vec::new();

    if key.is_none() {
        if let Some(config) = &result.config {
            for (k, v) in config.list_all() {
                lines.push(format!("{} = {}", k, v));
            }
        }
        print!(
            "{}",
            render_text_list(&lines, "No configuration values.", ctx.use_color)
        );
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_help(command: Option<&str>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(cmd),
        None => print_grouped_help(),
    }
    Ok(())
}

fn print_view(ctx: &AppContext, result: &CmdResult) {
    println!(
        "{}",
        render_panel(
            ctx.api.state(),
            ctx.api.users(),
            ctx.api.categories(),
            ctx.use_color
        )
    );
    print!("{}", render_table(&result.listed_products, ctx.use_color));
    print_messages(&result.messages, ctx.use_color);
}
