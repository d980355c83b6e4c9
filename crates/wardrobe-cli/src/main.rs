use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::{ColoredString, Colorize};

use wardrobe_core::color::{parse_hex, ALL_CATEGORIES};
use wardrobe_core::config::Config;
use wardrobe_core::inventory::{InventoryStore, ItemDraft, ItemPatch, ItemView};
use wardrobe_core::{Result, WardrobeError};

mod args;
use args::{Cli, Commands, ConfigAction, ItemAction, KindAction, LocationAction, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let base_dir = resolve_base_dir(cli.base_dir);

    let result = match cli.command {
        Some(Commands::Location { action }) => handle_location(action, &base_dir),
        Some(Commands::Kind { action }) => handle_kind(action, &base_dir),
        Some(Commands::Item { action }) => handle_item(action, &base_dir),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "wardrobe", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("WARDROBE_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".wardrobe"))
        .unwrap_or_else(|| PathBuf::from(".wardrobe"))
}

fn confirm(prompt: &str) -> bool {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush().ok();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    matches!(input.trim(), "y" | "Y" | "yes")
}

/// Terminal color swatch for a stored hex color
fn swatch(color: &str) -> ColoredString {
    match parse_hex(color) {
        Ok([r, g, b]) => "  ".on_truecolor(r, g, b),
        Err(_) => "  ".normal(),
    }
}

fn handle_location(action: LocationAction, base_dir: &Path) -> Result<()> {
    let mut store = InventoryStore::load(base_dir)?;

    match action {
        LocationAction::Add { name } => {
            let location = store.add_location(&name)?;
            store.save()?;
            println!("{} {}", "Added:".green(), location.name.cyan().bold());
        }
        LocationAction::List => {
            let locations = store.locations();
            if locations.is_empty() {
                println!("No locations found.");
                println!();
                println!("Create one with: wardrobe location add <name>");
                return Ok(());
            }

            println!();
            for location in locations {
                println!("  {} {}", location.id.to_string().dimmed(), location.name);
            }
            println!();
        }
    }

    Ok(())
}

fn handle_kind(action: KindAction, base_dir: &Path) -> Result<()> {
    let mut store = InventoryStore::load(base_dir)?;

    match action {
        KindAction::Add { name } => {
            let kind = store.add_kind(&name)?;
            store.save()?;
            println!("{} {}", "Added:".green(), kind.name.cyan().bold());
        }
        KindAction::List => {
            let kinds = store.kinds();
            if kinds.is_empty() {
                println!("No kinds found.");
                println!();
                println!("Create one with: wardrobe kind add <name>");
                return Ok(());
            }

            println!();
            for kind in kinds {
                println!("  {} {}", kind.id.to_string().dimmed(), kind.name);
            }
            println!();
        }
    }

    Ok(())
}

fn handle_item(action: ItemAction, base_dir: &Path) -> Result<()> {
    match action {
        ItemAction::Add {
            name,
            kind,
            color,
            color_name,
            location,
            last_used,
            image,
        } => {
            let location = match location {
                Some(location) => location,
                None => {
                    let fallback = Config::load(base_dir)?.inventory.default_location;
                    if fallback.is_empty() {
                        return Err(WardrobeError::NoDefaultLocation);
                    }
                    fallback
                }
            };

            let mut store = InventoryStore::load(base_dir)?;
            let item = store.add_item(ItemDraft {
                name,
                kind,
                color,
                color_name,
                location,
                last_used,
                image,
            })?;
            store.save()?;

            println!(
                "{} {} (id {})",
                "Added:".green(),
                item.name.cyan().bold(),
                item.id
            );
            println!(
                "  Color: {} {} ({})",
                swatch(&item.color),
                item.color,
                item.color_name
            );
            println!("  Category: {}", item.category.as_str().bold());
        }
        ItemAction::List {
            location,
            category,
            json,
        } => {
            let store = InventoryStore::load(base_dir)?;
            let mut views = match location {
                Some(location) => store.items_in_location(&location)?,
                None => store.item_views(),
            };

            if let Some(wanted) = category {
                match ALL_CATEGORIES
                    .iter()
                    .find(|c| c.as_str().eq_ignore_ascii_case(&wanted))
                {
                    Some(c) => views.retain(|v| v.category == *c),
                    None => {
                        eprintln!("{} Unknown category: {}", "[ERROR]".red().bold(), wanted);
                        eprintln!(
                            "Valid categories: {}",
                            ALL_CATEGORIES.map(|c| c.as_str()).join(", ")
                        );
                        return Ok(());
                    }
                }
            }

            views.sort_by(|a, b| a.name.cmp(&b.name));
            print_item_views(&views, json);
        }
        ItemAction::Update {
            id,
            name,
            kind,
            color,
            location,
            last_used,
            image,
        } => {
            let mut store = InventoryStore::load(base_dir)?;
            let item = store.update_item(
                id,
                ItemPatch {
                    name,
                    kind,
                    color,
                    location,
                    last_used,
                    image,
                },
            )?;
            store.save()?;

            println!("{} {} (id {})", "Updated:".green(), item.name, item.id);
            println!(
                "  Color: {} {} Category: {}",
                swatch(&item.color),
                item.color,
                item.category
            );
        }
        ItemAction::Move { id, location } => {
            let mut store = InventoryStore::load(base_dir)?;
            let item = store.update_item(
                id,
                ItemPatch {
                    location: Some(location.clone()),
                    ..Default::default()
                },
            )?;
            store.save()?;

            println!("{} {} -> {}", "Moved:".green(), item.name, location);
        }
        ItemAction::Remove { id, force } => {
            let mut store = InventoryStore::load(base_dir)?;
            if !force && !confirm(&format!("Remove item {id}?")) {
                println!("Aborted.");
                return Ok(());
            }

            let removed = store.remove_item(id)?;
            store.save()?;
            println!("{} {}", "Removed:".green(), removed.name);
        }
    }

    Ok(())
}

fn print_item_views(views: &[ItemView], json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(views).unwrap_or_default()
        );
        return;
    }

    if views.is_empty() {
        println!("No items found.");
        println!();
        println!("Add one with: wardrobe item add <name> --kind <kind> --color '#RRGGBB'");
        return;
    }

    println!();
    for view in views {
        println!(
            "  {} {} {} {} ({})",
            view.id.to_string().dimmed(),
            view.name.cyan().bold(),
            swatch(&view.color),
            view.color,
            view.color_name
        );
        println!(
            "     {}  Kind: {}  Location: {}  Last used: {}",
            view.category.as_str().bold(),
            view.kind,
            view.location,
            view.last_used
        );
        println!();
    }
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(WardrobeError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}
