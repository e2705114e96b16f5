//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::FinanceResult;
use crate::models::{CategoryInput, OTHER_COLOR};
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Chart color (#rrggbb)
        #[arg(long, default_value = OTHER_COLOR)]
        color: String,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New color (#rrggbb)
        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a category
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> FinanceResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let mut rows = Vec::new();
            for category in service.list()? {
                let count = service.usage(&category.name)?;
                rows.push((category, count));
            }
            print!("{}", format_category_list(&rows));
        }

        CategoryCommands::Add { name, color } => {
            let category = service.create(CategoryInput { name, color })?;
            println!("Created category: {} ({})", category.name, category.color);
        }

        CategoryCommands::Edit {
            category,
            name,
            color,
        } => {
            let existing = service.find(&category)?;
            if name.is_none() && color.is_none() {
                println!("Nothing to change.");
                return Ok(());
            }

            let updated = service.update(existing.id, name.as_deref(), color.as_deref())?;
            println!("Updated category: {} ({})", updated.name, updated.color);
            if updated.name != existing.name {
                let left_behind = service.usage(&existing.name)?;
                if left_behind > 0 {
                    println!(
                        "  Note: {} transaction(s) still use the name \"{}\".",
                        left_behind, existing.name
                    );
                }
            }
        }

        CategoryCommands::Delete { category } => {
            let existing = service.find(&category)?;
            let in_use = service.usage(&existing.name)?;
            let deleted = service.delete(existing.id)?;

            println!("Deleted category: {}", deleted.name);
            if deleted.is_other() {
                println!("  Note: \"Other\" is recreated automatically on the next run.");
            }
            if in_use > 0 {
                println!(
                    "  Note: {} transaction(s) still use the name \"{}\".",
                    in_use, deleted.name
                );
            }
        }
    }

    Ok(())
}
