//! Add command handler.
//!
//! Creates a product through the form controller, uploading the image
//! first when one is given.

use std::path::PathBuf;

use anyhow::Result;
use stockroom_core::{FormValues, SubmitOutcome};

use super::read_optional_image;
use crate::bootstrap::CliContext;
use crate::presentation::{ProductSummaryOpts, display_product_summary};

/// Arguments for the add command.
#[derive(Debug, Clone)]
pub struct AddArgs {
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub image: Option<PathBuf>,
}

/// Execute the add command.
///
/// A name that is blank after trimming saves nothing and prints a notice.
///
/// # Errors
///
/// This function will return an error if:
/// - The image file cannot be read
/// - The database or object store write fails
pub async fn execute(ctx: &CliContext, args: AddArgs) -> Result<SubmitOutcome> {
    let image = read_optional_image(args.image.as_deref()).await?;

    let mut form = ctx.app().form();
    let values = FormValues::new(args.name, args.quantity, args.price);
    let outcome = form.submit(&values, image).await?;

    match &outcome {
        SubmitOutcome::Created(id) => {
            let product = ctx.app().inventory().find(id).await?;
            display_product_summary(&product, &ProductSummaryOpts::with_title("Product added:"));
        }
        SubmitOutcome::Skipped => {
            println!("A product name is required; nothing was saved.");
        }
        SubmitOutcome::Updated(_) => {}
    }

    Ok(outcome)
}
