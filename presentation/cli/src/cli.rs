use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Zodiac Brew storefront from the terminal.
#[derive(Debug, Parser)]
#[command(name = "zodiac-brew", version, about)]
pub struct Cli {
    /// Base url of the storefront API
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Path of the local store file
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the coffee catalog
    #[command(subcommand)]
    Catalog(CatalogCommand),
    /// Coffees picked for a zodiac sign, a mood, or both
    Recommend {
        #[arg(long)]
        sign: Option<String>,
        #[arg(long)]
        mood: Option<String>,
    },
    /// Flavor keywords for a sign and mood
    Preferences {
        #[arg(long)]
        sign: String,
        #[arg(long)]
        mood: Option<String>,
    },
    /// Manage the shopping cart
    #[command(subcommand)]
    Cart(CartCommand),
    /// Manage favorite coffees
    #[command(subcommand)]
    Favorites(FavoritesCommand),
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Register(RegisterArgs),
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Place an order for the cart contents
    Checkout,
    /// List previous orders
    Orders,
    /// Replace the cart with the items of a previous order
    Reorder { order_id: String },
}

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    List,
    Show { id: String },
}

#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Add a coffee from the catalog
    Add {
        id: String,
        #[arg(long, default_value_t = 1)]
        qty: u32,
    },
    /// Set the quantity of a cart line (values below 1 are ignored)
    Set {
        id: String,
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    Remove { id: String },
    Show,
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    Toggle { id: String },
    List,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub full_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm_password: String,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date_of_birth: String,
    /// Mood label, used in place of the camera mood capture
    #[arg(long)]
    pub mood: Option<String>,
}
