mod kit;
mod pantry;
mod recipe;

use anyhow::Result;
use clap::{Parser, Subcommand};
use larder_core::Store;

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Recipe-from-pantry assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage pantry ingredients
    Pantry {
        #[command(subcommand)]
        command: PantryCommands,
    },
    /// Manage cooking equipment
    Equipment {
        #[command(subcommand)]
        command: kit::KitCommands,
    },
    /// Manage condiments and spices
    Condiments {
        #[command(subcommand)]
        command: kit::KitCommands,
    },
    /// Get or set the output language
    Lang {
        #[command(subcommand)]
        command: LangCommands,
    },
    /// Generate a recipe from the current pantry
    Generate {
        /// Meal type (e.g. "Dinner", "Soup", "Baking/Cake")
        #[arg(long, default_value = "Dinner")]
        meal_type: String,
        /// Dietary restriction (e.g. "None", "Vegan", "Muscle Building")
        #[arg(long, default_value = "None")]
        diet: String,
        /// Maximum total time (e.g. "Any", "< 30 mins", "> 1 hour")
        #[arg(long, default_value = "Any")]
        max_time: String,
        /// Something specific you are craving
        #[arg(long, default_value = "")]
        craving: String,
    },
    /// Mark the pending recipe as cooked and consume matching pantry items
    Cook,
    /// Show the pending recipe again
    Show,
}

#[derive(Subcommand)]
enum PantryCommands {
    /// Add an ingredient
    Add {
        /// Ingredient name (e.g. "flour")
        name: String,
        /// Quantity description (e.g. "2 cups")
        quantity: String,
        /// Expiry date (YYYY-MM-DD)
        #[arg(long)]
        expires: Option<String>,
    },
    /// List pantry contents
    List,
    /// Remove an ingredient by id prefix
    Remove { id: String },
}

#[derive(Subcommand)]
enum LangCommands {
    /// Set the language ("en" or "zh")
    Set { language: String },
    /// Show the current language
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = Store::from_env();

    match cli.command {
        Commands::Pantry { command } => match command {
            PantryCommands::Add {
                name,
                quantity,
                expires,
            } => pantry::add(&store, &name, &quantity, expires.as_deref())?,
            PantryCommands::List => pantry::list(&store),
            PantryCommands::Remove { id } => pantry::remove(&store, &id)?,
        },
        Commands::Equipment { command } => kit::run(&store, kit::Kit::Equipment, command)?,
        Commands::Condiments { command } => kit::run(&store, kit::Kit::Condiments, command)?,
        Commands::Lang { command } => match command {
            LangCommands::Set { language } => kit::set_language(&store, &language)?,
            LangCommands::Show => println!("{}", store.load_language().as_str()),
        },
        Commands::Generate {
            meal_type,
            diet,
            max_time,
            craving,
        } => recipe::generate(&store, &meal_type, &diet, &max_time, craving).await?,
        Commands::Cook => recipe::cook(&store),
        Commands::Show => recipe::show(&store),
    }

    Ok(())
}
