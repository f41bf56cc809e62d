use std::error::Error;

use clap::{Args, Parser, Subcommand};
use engine::Engine;
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

#[derive(Parser, Debug)]
#[command(name = "mahsool_admin")]
#[command(about = "Admin utilities for Mahsool (bootstrap zones and sub-units)")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./mahsool.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Zone(Zone),
    SubUnit(SubUnit),
}

#[derive(Args, Debug)]
struct Zone {
    #[command(subcommand)]
    command: ZoneCommand,
}

#[derive(Subcommand, Debug)]
enum ZoneCommand {
    Add(ZoneAddArgs),
    List,
}

#[derive(Args, Debug)]
struct ZoneAddArgs {
    /// Zone name, in Urdu script.
    #[arg(long)]
    name: String,
}

#[derive(Args, Debug)]
struct SubUnit {
    #[command(subcommand)]
    command: SubUnitCommand,
}

#[derive(Subcommand, Debug)]
enum SubUnitCommand {
    Add(SubUnitAddArgs),
    List(SubUnitListArgs),
}

#[derive(Args, Debug)]
struct SubUnitAddArgs {
    /// Owning zone, which must already exist.
    #[arg(long)]
    zone: String,
    /// Sub-unit name, in Urdu script.
    #[arg(long)]
    name: String,
}

#[derive(Args, Debug)]
struct SubUnitListArgs {
    /// Restrict the listing to one zone.
    #[arg(long)]
    zone: Option<String>,
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let db = connect_db(&cli.database_url).await?;
    let engine = Engine::builder().database(db).build().await?;

    match cli.command {
        Command::Zone(Zone {
            command: ZoneCommand::Add(args),
        }) => match engine.create_zone(&args.name).await {
            Ok(zone) => println!("created zone: {}", zone.name),
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
        Command::Zone(Zone {
            command: ZoneCommand::List,
        }) => {
            for zone in engine.zones().await? {
                println!("{}", zone.name);
            }
        }
        Command::SubUnit(SubUnit {
            command: SubUnitCommand::Add(args),
        }) => match engine.create_sub_unit(&args.zone, &args.name).await {
            Ok(sub_unit) => {
                println!("created sub-unit: {} ({})", sub_unit.name, sub_unit.zone_name);
            }
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
        Command::SubUnit(SubUnit {
            command: SubUnitCommand::List(args),
        }) => {
            for sub_unit in engine.sub_units(args.zone.as_deref()).await? {
                println!("{}\t{}", sub_unit.zone_name, sub_unit.name);
            }
        }
    }

    Ok(())
}
