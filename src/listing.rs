use std::io::Write;

use modelist_core::{ListModelsProvider, Model, sort_by_id};

use crate::{
    error::ListingError,
    report::{OutputFormat, write_report},
};

/// Fetches the provider's models and sorts them by id.
pub async fn fetch_sorted<P: ListModelsProvider + ?Sized>(
    provider: &P,
) -> Result<Vec<Model>, ListingError> {
    let mut models = provider.list_models().await?;
    sort_by_id(&mut models);
    Ok(models)
}

/// Fetches, sorts and writes the report. Returns how many models were listed.
pub async fn run<P, W>(provider: &P, format: OutputFormat, out: &mut W) -> Result<usize, ListingError>
where
    P: ListModelsProvider + ?Sized,
    W: Write + ?Sized,
{
    let models = fetch_sorted(provider).await?;
    write_report(out, &models, format)?;
    Ok(models.len())
}

/// Like [`run`], but a failure is written to `out` as its user-facing message
/// instead of being returned.
pub async fn execute<P, W>(provider: &P, format: OutputFormat, out: &mut W)
where
    P: ListModelsProvider + ?Sized,
    W: Write + ?Sized,
{
    match run(provider, format, out).await {
        Ok(count) => tracing::info!(count, "listed models"),
        Err(err) => report_failure(&err, out),
    }
}

/// Prints a failure. A failure to print it is only logged.
pub fn report_failure<W: Write + ?Sized>(err: &ListingError, out: &mut W) {
    tracing::error!(error = ?err, "model listing failed");

    if let Err(write_err) = writeln!(out, "{err}").and_then(|_| out.flush()) {
        tracing::error!(error = %write_err, "failed to print listing error");
    }
}
