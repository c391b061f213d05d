//! Claim and issued-document listings

use std::io::Write;
use std::sync::Arc;

use core_kernel::{InsuranceId, PatientId};
use domain_claims::{
    Claim, ClaimStatus, FetchState, InsuranceDashboard, IssuedDocument, ListFetcher,
    PatientClaims, PatientDashboard, PatientIssuedDocuments,
};

use super::App;
use crate::error::CliError;
use crate::output::{claim_line, document_line, write_list};

pub(super) async fn patient_claims<W>(app: &App, patient_id: PatientId, out: &mut W) -> anyhow::Result<()>
where
    W: Write + Send,
{
    let fetcher: ListFetcher<PatientId, Claim> =
        ListFetcher::new(Arc::new(PatientClaims::new(app.client())));
    fetcher.mount(patient_id).await;
    let claims = loaded("Claims", fetcher.snapshot())?;

    write_list(out, &format!("Claims for patient {}", patient_id), &claims, claim_line)?;
    Ok(())
}

pub(super) async fn insurance_claims<W>(
    app: &App,
    insurance_id: InsuranceId,
    status: Option<ClaimStatus>,
    out: &mut W,
) -> anyhow::Result<()>
where
    W: Write + Send,
{
    let dashboard = InsuranceDashboard::new(app.client());
    dashboard.mount(insurance_id, status).await;
    let claims = loaded("Claims", dashboard.claims.snapshot())?;

    let title = match status {
        Some(status) => format!("{} claims for insurer {}", status, insurance_id),
        None => format!("Claims for insurer {}", insurance_id),
    };
    write_list(out, &title, &claims, claim_line)?;
    writeln!(out, "Pending: {}", dashboard.pending_count())?;
    Ok(())
}

pub(super) async fn issued_documents<W>(app: &App, patient_id: PatientId, out: &mut W) -> anyhow::Result<()>
where
    W: Write + Send,
{
    let fetcher: ListFetcher<PatientId, IssuedDocument> =
        ListFetcher::new(Arc::new(PatientIssuedDocuments::new(app.client())));
    fetcher.mount(patient_id).await;
    let documents = loaded("Issued documents", fetcher.snapshot())?;

    write_list(
        out,
        &format!("Issued documents for patient {}", patient_id),
        &documents,
        document_line,
    )?;
    Ok(())
}

/// Loads both patient lists; a list that fails is reported in place and
/// the command fails only when both do
pub(super) async fn patient_dashboard<W>(app: &App, patient_id: PatientId, out: &mut W) -> anyhow::Result<()>
where
    W: Write + Send,
{
    let dashboard = PatientDashboard::new(app.client(), app.client());
    dashboard.mount(patient_id).await;

    let claims = dashboard.claims.snapshot();
    let documents = dashboard.documents.snapshot();

    writeln!(out, "Dashboard for patient {}", patient_id)?;
    match &claims.error {
        Some(error) => writeln!(out, "Claims: {}", error)?,
        None => write_list(out, "Claims", &claims.items, claim_line)?,
    }
    match &documents.error {
        Some(error) => writeln!(out, "Issued documents: {}", error)?,
        None => write_list(out, "Issued documents", &documents.items, document_line)?,
    }

    match (claims.error, documents.error) {
        (Some(claims_error), Some(_)) => Err(CliError::ListFailed {
            list: "Dashboard",
            message: claims_error,
        }
        .into()),
        _ => Ok(()),
    }
}

fn loaded<T>(list: &'static str, state: FetchState<T>) -> Result<Vec<T>, CliError> {
    match state.error {
        Some(message) => Err(CliError::ListFailed { list, message }),
        None => Ok(state.items),
    }
}
