use clap::{Args, Parser, Subcommand};
use role_hierarchy::{
    cli::{
        db::{db_generate, db_list, db_migrate, db_revert},
        role,
    },
    init_role_store,
    settings::get_config,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database related command
    Db(DbArgs),
    /// Role related command
    Role(RoleArgs),
}

#[derive(Debug, Args)]
struct RoleArgs {
    #[command(subcommand)]
    command: RoleCommands,
}

#[derive(Debug, Subcommand)]
enum RoleCommands {
    /// Create new role
    Create {
        #[arg(short, long)]
        role_name: String,
        #[arg(short, long, allow_negative_numbers = true)]
        level: i32,
    },
    /// Get role by id
    Get {
        #[arg(short, long)]
        id: i32,
    },
    /// Get role by name
    GetByName {
        #[arg(short, long)]
        role_name: String,
    },
    /// List all roles
    List,
}

#[derive(Debug, Args)]
struct DbArgs {
    #[command(subcommand)]
    command: DbCommands,
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Generate new migration file
    Generate { migration_name: String },
    /// List all migration
    List,
    /// Run all pending migration
    Migrate,
    /// Revert latest migration
    Revert,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Db(db_args) => match &db_args.command {
            DbCommands::Generate { migration_name } => {
                println!("generate migration: {migration_name:?}");
                db_generate(migration_name).await?;
            }
            DbCommands::List => {
                println!("list migration");
                let config = get_config()?;
                db_list(&config).await?;
            }
            DbCommands::Migrate => {
                println!("run all pending migration");
                let config = get_config()?;
                db_migrate(&config).await?;
            }
            DbCommands::Revert => {
                println!("revert latest migration");
                let config = get_config()?;
                db_revert(&config).await?;
            }
        },
        Commands::Role(role_args) => {
            let config = get_config()?;
            let store = init_role_store(&config).await?;
            match &role_args.command {
                RoleCommands::Create { role_name, level } => {
                    role::create_role(store.as_ref(), role_name, *level).await?
                }
                RoleCommands::Get { id } => role::get_role(store.as_ref(), *id).await?,
                RoleCommands::GetByName { role_name } => {
                    role::get_role_by_name(store.as_ref(), role_name).await?
                }
                RoleCommands::List => role::list_roles(store.as_ref()).await?,
            }
        }
    }
    Ok(())
}
