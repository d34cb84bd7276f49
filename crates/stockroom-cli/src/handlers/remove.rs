//! Remove command handler.
//!
//! Deletes a product record together with its stored image.

use anyhow::Result;
use stockroom_core::Product;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{ProductSummaryOpts, display_product_summary};
use crate::utils::input;

/// Execute the remove command.
///
/// Shows the product and asks on stdin for confirmation unless `force` is
/// set. Returns whether the product was removed.
///
/// # Errors
///
/// This function will return an error if:
/// - No product has the given ID
/// - User input fails
/// - The database delete fails
pub async fn execute(ctx: &CliContext, id: &str, force: bool) -> Result<bool> {
    execute_with(ctx, id, force, |product| {
        display_product_summary(product, &ProductSummaryOpts::for_removal());
        println!();
        input::prompt_confirmation("Are you sure you want to remove this product?")
    })
    .await
}

/// Execute the remove command with a custom confirmation step.
///
/// `confirm` is skipped when `force` is set. Declining leaves the record and
/// its image untouched.
pub async fn execute_with<F>(ctx: &CliContext, id: &str, force: bool, confirm: F) -> Result<bool>
where
    F: FnOnce(&Product) -> Result<bool>,
{
    let Some(product) = ctx.app().inventory().get(id).await? else {
        return Err(CliError::NotFound(format!("No product with ID '{id}'")).into());
    };

    if !force && !confirm(&product)? {
        println!("Remove operation cancelled.");
        return Ok(false);
    }

    ctx.app().inventory().delete_product(&product).await?;
    println!("Product '{}' (ID {}) removed.", product.name, product.id);

    Ok(true)
}
