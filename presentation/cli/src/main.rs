use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod config {
    pub mod api_config;
    pub mod app_config;
    pub mod error;
    pub mod store_config;
}
mod commands {
    pub mod error;
    pub mod auth {
        pub mod error_mapper;
        pub mod handlers;
    }
    pub mod cart {
        pub mod error_mapper;
        pub mod handlers;
    }
    pub mod catalog {
        pub mod error_mapper;
        pub mod handlers;
    }
    pub mod favorite {
        pub mod error_mapper;
        pub mod handlers;
    }
    pub mod order {
        pub mod error_mapper;
        pub mod handlers;
    }
}
mod setup {
    pub mod dependency_injection;
    pub mod listeners;
    pub mod mood_detector;
}

use business::domain::auth::registration::RegistrationForm;
use business::domain::cart::use_cases::summary::GetCartSummaryUseCase;
use cli::{CartCommand, CatalogCommand, Cli, Command, FavoritesCommand, RegisterArgs};
use commands::error::CommandError;
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;
use setup::mood_detector::ManualMoodDetector;

/// Storefront CLI entry point
///
/// Initializes logging and configuration, wires dependencies, runs one command
/// and redraws the cart badge when the cart changed.
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Parse arguments and load configuration
    let cli = Cli::parse();
    let config = AppConfig::load(cli.api_url.as_deref(), cli.store.clone())?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config).await?;

    // 5. Run the command
    let exit_code = match run(&container, cli.command).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!("Command failed with {}", err.name);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    };

    // 6. Pick up writes from other processes and refresh the badge
    if let Err(err) = container
        .store
        .sync_external_changes(&container.events)
        .await
    {
        tracing::warn!("Could not check the store for outside changes: {}", err);
    }
    if container.cart_badge.take_dirty() {
        let summary = container.cart_summary_use_case.execute().await;
        println!(
            "Cart: {} item(s), {} unit(s), subtotal {}",
            summary.lines, summary.units, summary.subtotal
        );
    }

    Ok(exit_code)
}

async fn run(container: &DependencyContainer, command: Command) -> Result<String, CommandError> {
    match command {
        Command::Catalog(CatalogCommand::List) => container.catalog_commands.list().await,
        Command::Catalog(CatalogCommand::Show { id }) => {
            container.catalog_commands.show(&id).await
        }
        Command::Recommend { sign, mood } => {
            container
                .catalog_commands
                .recommend(sign.as_deref(), mood.as_deref())
                .await
        }
        Command::Preferences { sign, mood } => {
            container.catalog_commands.preferences(&sign, mood.as_deref())
        }
        Command::Cart(CartCommand::Add { id, qty }) => {
            container.cart_commands.add(&id, qty).await
        }
        Command::Cart(CartCommand::Set { id, qty }) => {
            container.cart_commands.set_quantity(&id, qty).await
        }
        Command::Cart(CartCommand::Remove { id }) => container.cart_commands.remove(&id).await,
        Command::Cart(CartCommand::Show) => container.cart_commands.show().await,
        Command::Cart(CartCommand::Clear) => container.cart_commands.clear().await,
        Command::Favorites(FavoritesCommand::Toggle { id }) => {
            container.favorite_commands.toggle(&id).await
        }
        Command::Favorites(FavoritesCommand::List) => container.favorite_commands.list().await,
        Command::Login { email, password } => {
            container.auth_commands.login(email, password).await
        }
        Command::Register(args) => {
            let mood_detector = ManualMoodDetector::new(args.mood.clone());
            container
                .auth_commands
                .register(registration_form(args), &mood_detector)
                .await
        }
        Command::Logout => container.auth_commands.logout().await,
        Command::Whoami => container.auth_commands.whoami().await,
        Command::Checkout => container.order_commands.checkout().await,
        Command::Orders => container.order_commands.history().await,
        Command::Reorder { order_id } => container.order_commands.reorder(&order_id).await,
    }
}

/// The mood is filled in by the capture step, not copied from the arguments.
fn registration_form(args: RegisterArgs) -> RegistrationForm {
    RegistrationForm {
        full_name: args.full_name,
        email: args.email,
        password: args.password,
        confirm_password: args.confirm_password,
        date_of_birth: args.date_of_birth,
        mood: None,
    }
}
