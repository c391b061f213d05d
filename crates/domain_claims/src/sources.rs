//! List sources over the claims ports

use async_trait::async_trait;
use std::sync::Arc;

use core_kernel::{InsuranceId, PatientId, RequestError};

use crate::claim::{Claim, ClaimStatus};
use crate::document::IssuedDocument;
use crate::fetcher::ListSource;
use crate::ports::{ClaimsPort, IssuedDocumentsPort};

/// Claims filed for a patient
pub struct PatientClaims {
    port: Arc<dyn ClaimsPort>,
}

impl PatientClaims {
    pub fn new(port: Arc<dyn ClaimsPort>) -> Self {
        Self { port }
    }
}

#[async_trait]
impl ListSource<PatientId, Claim> for PatientClaims {
    fn name(&self) -> &'static str {
        "patient_claims"
    }

    async fn fetch(&self, patient_id: &PatientId) -> Result<Vec<Claim>, RequestError> {
        self.port.claims_by_patient(*patient_id).await
    }
}

/// Key of an insurer's claim list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InsuranceClaimsQuery {
    pub insurance_id: InsuranceId,
    /// Only claims in this status; all claims when `None`
    pub status: Option<ClaimStatus>,
}

impl InsuranceClaimsQuery {
    pub fn all(insurance_id: InsuranceId) -> Self {
        Self { insurance_id, status: None }
    }

    pub fn with_status(insurance_id: InsuranceId, status: ClaimStatus) -> Self {
        Self { insurance_id, status: Some(status) }
    }
}

/// Claims addressed to an insurer
pub struct InsuranceClaims {
    port: Arc<dyn ClaimsPort>,
}

impl InsuranceClaims {
    pub fn new(port: Arc<dyn ClaimsPort>) -> Self {
        Self { port }
    }
}

#[async_trait]
impl ListSource<InsuranceClaimsQuery, Claim> for InsuranceClaims {
    fn name(&self) -> &'static str {
        "insurance_claims"
    }

    async fn fetch(&self, query: &InsuranceClaimsQuery) -> Result<Vec<Claim>, RequestError> {
        self.port.claims_by_insurance(query.insurance_id, query.status).await
    }
}

/// Documents issued to a patient
pub struct PatientIssuedDocuments {
    port: Arc<dyn IssuedDocumentsPort>,
}

impl PatientIssuedDocuments {
    pub fn new(port: Arc<dyn IssuedDocumentsPort>) -> Self {
        Self { port }
    }
}

#[async_trait]
impl ListSource<PatientId, IssuedDocument> for PatientIssuedDocuments {
    fn name(&self) -> &'static str {
        "patient_issued_documents"
    }

    async fn fetch(&self, patient_id: &PatientId) -> Result<Vec<IssuedDocument>, RequestError> {
        self.port.issued_docs_by_patient(*patient_id).await
    }
}
