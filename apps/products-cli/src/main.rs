//! Products CLI
//!
//! Create, describe, enable and disable products stored in a SQL database
//! (SQLite by default, see `DATABASE_URL`).

use clap::Parser;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::{handlers, Action, ProductService, SqlProductRepository};
use eyre::Result;
use migration::Migrator;
use tracing::info;

mod config;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "products")]
#[command(about = "Manage products: create, get, enable, disable")]
struct Cli {
    /// Action to run: create, enable, disable or get (anything else describes the product)
    #[arg(short, long, default_value = "get")]
    action: String,

    /// Product ID (enable, disable, get)
    #[arg(short, long, default_value = "")]
    id: String,

    /// Product name (create)
    #[arg(short, long, default_value = "")]
    name: String,

    /// Product price (create)
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    price: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(sqlite = config.database.is_sqlite(), "Connecting to database");
    let db = database::sql::connect_with_retry(config.database.clone(), None).await?;
    database::sql::run_migrations::<Migrator>(&db, "products").await?;

    let service = ProductService::new(SqlProductRepository::new(db));
    let action = Action::from(cli.action.as_str());

    let output = handlers::run(&service, action, &cli.id, &cli.name, cli.price).await?;
    println!("{output}");

    Ok(())
}
