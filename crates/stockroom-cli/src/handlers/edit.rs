//! Edit command handler.
//!
//! Loads the product into the form, applies the given overrides and saves.

use std::path::PathBuf;

use anyhow::Result;
use stockroom_core::SubmitOutcome;

use super::read_optional_image;
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{ProductSummaryOpts, display_product_summary};

/// Arguments for the edit command. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct EditArgs {
    pub id: String,
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub image: Option<PathBuf>,
}

/// Execute the edit command.
///
/// # Errors
///
/// This function will return an error if:
/// - No product has the given ID
/// - The image file cannot be read
/// - The database or object store write fails
pub async fn execute(ctx: &CliContext, args: EditArgs) -> Result<SubmitOutcome> {
    let Some(product) = ctx.app().inventory().get(&args.id).await? else {
        return Err(CliError::NotFound(format!("No product with ID '{}'", args.id)).into());
    };
    let image = read_optional_image(args.image.as_deref()).await?;

    let mut form = ctx.app().form();
    form.edit(&product);
    {
        let values = form.values_mut();
        if let Some(name) = args.name {
            values.name = name;
        }
        if let Some(quantity) = args.quantity {
            values.quantity = quantity;
        }
        if let Some(price) = args.price {
            values.price = price;
        }
    }

    let outcome = form.submit_current(image).await?;
    match &outcome {
        SubmitOutcome::Updated(id) => {
            let product = ctx.app().inventory().find(id).await?;
            display_product_summary(&product, &ProductSummaryOpts::with_title("Product updated:"));
        }
        SubmitOutcome::Skipped => {
            println!("A product name is required; nothing was saved.");
        }
        SubmitOutcome::Created(_) => {}
    }

    Ok(outcome)
}
