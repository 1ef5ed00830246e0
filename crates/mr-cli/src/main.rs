//! CLI frontend for Mythic Realms save slots and turns.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use mr_engine::EngineConfig;

#[derive(Parser)]
#[command(
    name = "mr",
    about = "Mythic Realms: a narrated fantasy RPG driven from the command line",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding save files
    #[arg(long, global = true, default_value = "saves")]
    saves: PathBuf,

    /// RNG seed for level-up rolls
    #[arg(long, global = true, default_value = "42")]
    seed: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List save slots
    Slots,

    /// Create a character, replacing any save in the slot
    New {
        /// Save slot (slot1, slot2, ...)
        slot: String,

        /// Character name
        #[arg(long)]
        name: String,

        /// Race (e.g. Human, Elf, Dwarf)
        #[arg(long, default_value = "Human")]
        race: String,

        /// Class (e.g. Fighter, Wizard, Rogue)
        #[arg(long, default_value = "Fighter")]
        class: String,

        /// Background (e.g. Soldier, Sage, Acolyte)
        #[arg(long, default_value = "Soldier")]
        background: String,

        /// One-line character concept
        #[arg(long, default_value = "")]
        concept: String,
    },

    /// Show the character, world and recent log
    Show {
        /// Save slot
        slot: String,

        /// Number of log entries to show
        #[arg(short, long, default_value = "6")]
        log: usize,
    },

    /// Play one turn using a prepared narrator reply
    Turn {
        /// Save slot
        slot: String,

        /// What the character does
        action: String,

        /// File with the narrator's raw reply ("-" for stdin)
        #[arg(long, required_unless_present = "fail", conflicts_with = "fail")]
        reply: Option<PathBuf>,

        /// Simulate a narrator failure with this error message
        #[arg(long)]
        fail: Option<String>,
    },

    /// Pick one of the offered choices
    Choose {
        /// Save slot
        slot: String,

        /// Choice id
        choice: String,

        /// File with the narrator's raw reply ("-" for stdin)
        #[arg(long, conflicts_with = "fail")]
        reply: Option<PathBuf>,

        /// Simulate a narrator failure with this error message
        #[arg(long)]
        fail: Option<String>,
    },

    /// Equip an inventory item
    Equip {
        /// Save slot
        slot: String,

        /// Inventory index as listed by `show`
        index: usize,
    },

    /// Move an equipped item back to the inventory
    Unequip {
        /// Save slot
        slot: String,

        /// Equipment slot (mainHand, offHand, head, chest, ring1, ...)
        equipment_slot: String,
    },

    /// Buy an item from the open shop
    Buy {
        /// Save slot
        slot: String,

        /// Shop index as listed by `show`
        index: usize,
    },

    /// Sell an inventory item to the open shop
    Sell {
        /// Save slot
        slot: String,

        /// Inventory index as listed by `show`
        index: usize,
    },

    /// Leave the open shop
    LeaveShop {
        /// Save slot
        slot: String,
    },

    /// Delete a save
    Delete {
        /// Save slot
        slot: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EngineConfig::default()
        .with_seed(cli.seed)
        .with_save_dir(cli.saves);

    let result = match cli.command {
        Commands::Slots => commands::slots::run(&config),
        Commands::New {
            slot,
            name,
            race,
            class,
            background,
            concept,
        } => commands::new::run(&config, &slot, name, race, class, background, concept),
        Commands::Show { slot, log } => commands::show::run(&config, &slot, log),
        Commands::Turn {
            slot,
            action,
            reply,
            fail,
        } => commands::turn::run(&config, &slot, &action, reply.as_deref(), fail.as_deref()),
        Commands::Choose {
            slot,
            choice,
            reply,
            fail,
        } => commands::turn::choose(&config, &slot, &choice, reply.as_deref(), fail.as_deref()),
        Commands::Equip { slot, index } => commands::gear::equip(&config, &slot, index),
        Commands::Unequip {
            slot,
            equipment_slot,
        } => commands::gear::unequip(&config, &slot, &equipment_slot),
        Commands::Buy { slot, index } => commands::shop::buy(&config, &slot, index),
        Commands::Sell { slot, index } => commands::shop::sell(&config, &slot, index),
        Commands::LeaveShop { slot } => commands::shop::leave(&config, &slot),
        Commands::Delete { slot } => commands::slots::delete(&config, &slot),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
