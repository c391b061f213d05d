//! Dashboard groupings of list fetchers
//!
//! Each list on a dashboard loads on its own: one list failing or lagging
//! leaves the others untouched.

use std::sync::Arc;

use core_kernel::{InsuranceId, PatientId};

use crate::claim::{Claim, ClaimStatus};
use crate::document::IssuedDocument;
use crate::fetcher::{FetchOutcome, ListFetcher};
use crate::ports::{ClaimsPort, IssuedDocumentsPort};
use crate::sources::{InsuranceClaims, InsuranceClaimsQuery, PatientClaims, PatientIssuedDocuments};

/// Patient dashboard: the patient's claims and issued documents
pub struct PatientDashboard {
    pub claims: ListFetcher<PatientId, Claim>,
    pub documents: ListFetcher<PatientId, IssuedDocument>,
}

impl PatientDashboard {
    pub fn new(claims: Arc<dyn ClaimsPort>, documents: Arc<dyn IssuedDocumentsPort>) -> Self {
        Self {
            claims: ListFetcher::new(Arc::new(PatientClaims::new(claims))),
            documents: ListFetcher::new(Arc::new(PatientIssuedDocuments::new(documents))),
        }
    }

    /// Loads both lists concurrently
    ///
    /// Returns the claims outcome, then the documents outcome.
    pub async fn mount(&self, patient_id: PatientId) -> (FetchOutcome, FetchOutcome) {
        tokio::join!(self.claims.mount(patient_id), self.documents.mount(patient_id))
    }

    pub async fn refresh(&self) -> (FetchOutcome, FetchOutcome) {
        tokio::join!(self.claims.refresh(), self.documents.refresh())
    }

    pub fn unmount(&self) {
        self.claims.unmount();
        self.documents.unmount();
    }
}

/// Insurance dashboard: claims addressed to the insurer
pub struct InsuranceDashboard {
    pub claims: ListFetcher<InsuranceClaimsQuery, Claim>,
}

impl InsuranceDashboard {
    pub fn new(claims: Arc<dyn ClaimsPort>) -> Self {
        Self {
            claims: ListFetcher::new(Arc::new(InsuranceClaims::new(claims))),
        }
    }

    pub async fn mount(&self, insurance_id: InsuranceId, status: Option<ClaimStatus>) -> FetchOutcome {
        self.claims.mount(InsuranceClaimsQuery { insurance_id, status }).await
    }

    /// Reloads the mounted insurer's claims under a new status filter
    pub async fn filter_by(&self, status: Option<ClaimStatus>) -> FetchOutcome {
        match self.claims.key() {
            Some(query) if self.claims.is_mounted() => self.mount(query.insurance_id, status).await,
            _ => FetchOutcome::NotMounted,
        }
    }

    pub async fn refresh(&self) -> FetchOutcome {
        self.claims.refresh().await
    }

    pub fn unmount(&self) {
        self.claims.unmount();
    }

    /// Number of loaded claims still awaiting a decision
    pub fn pending_count(&self) -> usize {
        self.claims.snapshot().items.iter().filter(|claim| claim.is_pending()).count()
    }
}
