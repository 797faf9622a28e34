use super::menu::{confirm, Menu};
use super::render::{print_messages, print_table, render_order_details};
use super::setup::{Cli, Commands};
use clap::Parser;
use log::{debug, warn};
use orderinfo::api::{CmdMessage, ConfigAction, MessageLevel, OrderApi, OrderPaths};
use orderinfo::config::{ConfigKey, OrderInfoConfig};
use orderinfo::error::{OrderError, Result};
use orderinfo::logging::init_logger;
use orderinfo::orders::OrderStore;
use orderinfo::store::csv_file::CsvFileGateway;
use orderinfo::store::Gateway;
use orderinfo::validation::OrderDraft;
use std::io;
use std::path::PathBuf;

struct AppContext {
    api: OrderApi<CsvFileGateway>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli);

    match cli.command {
        None | Some(Commands::Menu) => handle_menu(&mut ctx),
        Some(Commands::List) => handle_list(&mut ctx),
        Some(Commands::Add {
            customer,
            item,
            qty,
            date,
            total,
            status,
        }) => handle_add(
            &mut ctx,
            OrderDraft {
                customer_name: customer,
                item_purchased: item,
                quantity: qty,
                order_date: date,
                total_price: total,
                status,
            },
        ),
        Some(Commands::Delete { order_id, yes }) => handle_delete(&mut ctx, order_id, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let paths = OrderPaths::new(&cwd);

    let loaded = OrderInfoConfig::load(&paths.config_dir);
    let level = match (&loaded, cli.verbose) {
        (_, true) => "debug".to_string(),
        (Ok(config), false) => config.log_level.clone(),
        (Err(_), false) => OrderInfoConfig::default().log_level,
    };
    init_logger(&level);

    let config = loaded.unwrap_or_else(|e| {
        warn!("Ignoring unreadable config in {}: {}", paths.config_dir.display(), e);
        OrderInfoConfig::default()
    });

    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_file_in(&paths.base_dir));
    debug!("Using data file {}", data_file.display());

    let store =
        OrderStore::new(CsvFileGateway::new(data_file)).with_first_order_id(config.first_order_id);
    AppContext {
        api: OrderApi::new(store, paths),
    }
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    Menu::new(&mut ctx.api, stdin.lock(), io::stdout()).run()
}

/// Loads the backing file before a one-shot command. A file that does not
/// exist yet is the same as an empty one.
fn load_existing(ctx: &mut AppContext) -> Result<()> {
    match ctx.api.load() {
        Ok(result) => {
            let notes: Vec<CmdMessage> = result
                .messages
                .into_iter()
                .filter(|m| m.level != MessageLevel::Success)
                .collect();
            print_messages(&notes);
            Ok(())
        }
        Err(e) if e.is_missing_file() => {
            debug!("{} does not exist yet", ctx.api.store().gateway().location());
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    load_existing(ctx)?;
    let result = ctx.api.list()?;
    if result.listed_orders.is_empty() {
        print_messages(&result.messages);
    } else {
        print_table(&result.listed_orders);
    }
    Ok(())
}

fn handle_add(ctx: &mut AppContext, draft: OrderDraft) -> Result<()> {
    load_existing(ctx)?;
    let added = ctx.api.add(&draft)?;
    print_messages(&added.messages);
    let saved = ctx.api.save()?;
    print_messages(&saved.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, order_id: u32, yes: bool) -> Result<()> {
    load_existing(ctx)?;
    let details = ctx
        .api
        .find(order_id)
        .map(render_order_details)
        .ok_or(OrderError::NotFound(order_id))?;

    if !yes {
        print!("{}", details);
        let stdin = io::stdin();
        let confirmed = confirm(
            &mut stdin.lock(),
            &mut io::stdout(),
            "Are you sure you want to delete this record? (Y/N): ",
        )?;
        if !confirmed {
            print_messages(&[CmdMessage::info("Deletion cancelled.")]);
            return Ok(());
        }
    }

    let deleted = ctx.api.delete(order_id)?;
    print_messages(&deleted.messages);
    let saved = ctx.api.save()?;
    print_messages(&saved.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in ConfigKey::ALL {
                println!("{} = {}", key.name(), config.get(key));
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
