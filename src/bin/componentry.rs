//! Standalone `componentry` CLI binary.
//!
//! Browses the component library and, for the admin wallet, manages
//! components, variants and categories:
//!
//! ```text
//! componentry components list --category Buttons
//! componentry components show 42
//! componentry categories add Buttons --wallet <ADDRESS>
//! ```
//!
//! The wallet check is advisory UI gating only: the address is compared
//! against one hardcoded constant and never validated by the API, which
//! performs no authorization of its own.

use clap::{Parser, Subcommand};
use componentry::client::{ApiClient, ApiError};
use componentry::forms;
use uuid::Uuid;

/// The only wallet allowed to use management commands.
const ADMIN_ADDRESS: &str = "ZifcjgKLVpnPInkBSRA3pe4A9Niwop-3uevJP4PDPH0";

#[derive(Parser, Debug)]
#[command(
    name = "componentry",
    version,
    about = "Browse and manage the component library"
)]
struct Cli {
    /// Base URL of the component API
    #[arg(long, env = "COMPONENTRY_API_URL", default_value = "http://127.0.0.1:8000")]
    api_url: String,

    /// Connected wallet address (management commands only)
    #[arg(long, env = "WALLET_ADDRESS")]
    wallet: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse and manage components
    Components {
        #[command(subcommand)]
        command: ComponentCommands,
    },
    /// Browse and manage variants of a component
    Variants {
        #[command(subcommand)]
        command: VariantCommands,
    },
    /// Browse and manage categories
    Categories {
        #[command(subcommand)]
        command: CategoryCommands,
    },
}

#[derive(Debug, Subcommand)]
enum ComponentCommands {
    /// List components, optionally filtered by category
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one component with its variants
    Show { id: i32 },
    /// Create a component (admin)
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update fields of a component; omitted flags are left unchanged (admin)
    Update {
        id: i32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a component (admin)
    Delete { id: i32 },
}

#[derive(Debug, Subcommand)]
enum VariantCommands {
    /// Append a variant to a component (admin)
    Add {
        component_id: i32,
        #[arg(long)]
        name: String,
        #[arg(long)]
        code: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        deployed_link: Option<String>,
        #[arg(long)]
        package_commands: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Update fields of a variant; omitted flags are left unchanged (admin)
    Update {
        component_id: i32,
        variant_id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        deployed_link: Option<String>,
        #[arg(long)]
        package_commands: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Remove a variant from a component (admin)
    Delete { component_id: i32, variant_id: Uuid },
}

#[derive(Debug, Subcommand)]
enum CategoryCommands {
    /// List categories
    List,
    /// Create a category (admin)
    Add { name: String },
    /// Delete a category; fails while components still reference it (admin)
    Delete { name: String },
}

fn require_admin(wallet: Option<&str>) -> anyhow::Result<()> {
    match wallet {
        Some(address) if address == ADMIN_ADDRESS => Ok(()),
        Some(_) => anyhow::bail!("connected wallet is not the admin wallet"),
        None => anyhow::bail!("no wallet connected; pass --wallet or set WALLET_ADDRESS"),
    }
}

fn report(err: ApiError) -> anyhow::Error {
    match err {
        // Shown verbatim; the message names the blocking component count.
        ApiError::Conflict(message) => anyhow::anyhow!("{}", message),
        other => anyhow::anyhow!("{}", other),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = ApiClient::new(cli.api_url.clone());
    let wallet = cli.wallet.as_deref();

    match cli.command {
        Commands::Components { command } => match command {
            ComponentCommands::List { category } => {
                let components = match category {
                    Some(category) => client
                        .list_components_by_category(&category)
                        .await
                        .map_err(report)?,
                    None => client.list_components().await.map_err(report)?,
                };
                for component in &components {
                    println!("{:>5}  {}", component.id, component);
                }
            }
            ComponentCommands::Show { id } => {
                let component = client.get_component(id).await.map_err(report)?;
                println!("{} [{}]", component.name, component.category);
                if !component.description.is_empty() {
                    println!("{}", component.description);
                }
                for variant in &component.variants.0 {
                    println!("  {}  {} by {}", variant.id, variant.name, variant.author);
                }
            }
            ComponentCommands::Add {
                name,
                category,
                description,
            } => {
                require_admin(wallet)?;
                let form = forms::ComponentForm {
                    name,
                    category,
                    description,
                    variants: None,
                };
                let component = client.create_component(&form).await.map_err(report)?;
                println!("Created component {}", component.id);
            }
            ComponentCommands::Update {
                id,
                name,
                category,
                description,
            } => {
                require_admin(wallet)?;
                let form = forms::ComponentUpdateForm {
                    name,
                    category,
                    description,
                };
                let component = client.update_component(id, &form).await.map_err(report)?;
                println!("Updated component {}", component.id);
            }
            ComponentCommands::Delete { id } => {
                require_admin(wallet)?;
                client.delete_component(id).await.map_err(report)?;
                println!("Deleted component {}", id);
            }
        },
        Commands::Variants { command } => match command {
            VariantCommands::Add {
                component_id,
                name,
                code,
                description,
                author,
                deployed_link,
                package_commands,
                image_url,
            } => {
                require_admin(wallet)?;
                let form = forms::VariantForm {
                    name,
                    description,
                    code,
                    author,
                    deployed_link,
                    package_commands,
                    image_url,
                };
                let variant = client
                    .create_variant(component_id, &form)
                    .await
                    .map_err(report)?;
                println!("Created variant {}", variant.id);
            }
            VariantCommands::Update {
                component_id,
                variant_id,
                name,
                code,
                description,
                author,
                deployed_link,
                package_commands,
                image_url,
            } => {
                require_admin(wallet)?;
                let form = forms::VariantUpdateForm {
                    name,
                    description,
                    code,
                    author,
                    deployed_link,
                    package_commands,
                    image_url,
                };
                let variant = client
                    .update_variant(component_id, variant_id, &form)
                    .await
                    .map_err(report)?;
                println!("Updated variant {}", variant.id);
            }
            VariantCommands::Delete {
                component_id,
                variant_id,
            } => {
                require_admin(wallet)?;
                client
                    .delete_variant(component_id, variant_id)
                    .await
                    .map_err(report)?;
                println!("Deleted variant {}", variant_id);
            }
        },
        Commands::Categories { command } => match command {
            CategoryCommands::List => {
                let categories = client.list_categories().await.map_err(report)?;
                for category in &categories {
                    println!("{}", category.name);
                }
            }
            CategoryCommands::Add { name } => {
                require_admin(wallet)?;
                let category = client.create_category(&name).await.map_err(report)?;
                println!("Created category {}", category.name);
            }
            CategoryCommands::Delete { name } => {
                require_admin(wallet)?;
                client.delete_category(&name).await.map_err(report)?;
                println!("Deleted category {}", name);
            }
        },
    }

    Ok(())
}
