use anyhow::Result;
use portfolio::Config;
use portfolio_contact::{ContactFormInput, HttpRelay, SubmissionController};
use validator::Validate;

/// Pushes one message through the same relay the page uses.
pub async fn send(config: Config, input: ContactFormInput) -> Result<()> {
    input.validate()?;

    let endpoint = config.relay.endpoint_url().map_err(|e| anyhow::anyhow!(e))?;
    let relay = HttpRelay::new(endpoint);
    tracing::info!(endpoint = %relay.endpoint(), "Sending contact message from the command line");

    let controller = SubmissionController::with_fields(relay, input);
    let outcome = controller.submit().await?;

    if !outcome.is_success() {
        anyhow::bail!(outcome.message());
    }

    tracing::info!("{}", outcome.message());

    Ok(())
}
