//! Claims Domain Ports
//!
//! Read-only endpoints behind the dashboard lists.

use async_trait::async_trait;

use core_kernel::{DomainPort, InsuranceId, PatientId, RequestError};

use crate::claim::{Claim, ClaimStatus};
use crate::document::IssuedDocument;

/// Claim listings
#[async_trait]
pub trait ClaimsPort: DomainPort {
    /// `GET /claims/by-patient/{patient_id}`
    async fn claims_by_patient(&self, patient_id: PatientId) -> Result<Vec<Claim>, RequestError>;

    /// `GET /claims/by-insurance/{insurance_id}`, filtered by `status` when given
    async fn claims_by_insurance(
        &self,
        insurance_id: InsuranceId,
        status: Option<ClaimStatus>,
    ) -> Result<Vec<Claim>, RequestError>;
}

/// Issued document listings
#[async_trait]
pub trait IssuedDocumentsPort: DomainPort {
    /// `GET /issuer/issued-docs/by-patient/{patient_id}`
    async fn issued_docs_by_patient(
        &self,
        patient_id: PatientId,
    ) -> Result<Vec<IssuedDocument>, RequestError>;
}

/// Mock implementation for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory claims backend
    #[derive(Debug, Clone, Default)]
    pub struct MockClaimsBackend {
        claims: Arc<RwLock<Vec<Claim>>>,
        documents: Arc<RwLock<Vec<IssuedDocument>>>,
        failures: Arc<HashMap<&'static str, (u16, String)>>,
        calls: Arc<RwLock<Vec<&'static str>>>,
    }

    impl MockClaimsBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn add_claim(&self, claim: Claim) {
            self.claims.write().await.push(claim);
        }

        pub async fn add_document(&self, document: IssuedDocument) {
            self.documents.write().await.push(document);
        }

        /// Makes an operation fail with a rejection, by port method name
        pub fn failing(mut self, operation: &'static str, status: u16, detail: &str) -> Self {
            Arc::make_mut(&mut self.failures).insert(operation, (status, detail.to_string()));
            self
        }

        /// Operations invoked so far, in order
        pub async fn calls(&self) -> Vec<&'static str> {
            self.calls.read().await.clone()
        }

        async fn record(&self, operation: &'static str) -> Result<(), RequestError> {
            self.calls.write().await.push(operation);
            match self.failures.get(operation) {
                Some((status, detail)) => Err(RequestError::rejected(*status, detail.clone())),
                None => Ok(()),
            }
        }
    }

    impl DomainPort for MockClaimsBackend {}

    #[async_trait]
    impl ClaimsPort for MockClaimsBackend {
        async fn claims_by_patient(&self, patient_id: PatientId) -> Result<Vec<Claim>, RequestError> {
            self.record("claims_by_patient").await?;
            let claims = self.claims.read().await;
            Ok(claims.iter().filter(|c| c.patient_id == patient_id).cloned().collect())
        }

        async fn claims_by_insurance(
            &self,
            insurance_id: InsuranceId,
            status: Option<ClaimStatus>,
        ) -> Result<Vec<Claim>, RequestError> {
            self.record("claims_by_insurance").await?;
            let claims = self.claims.read().await;
            Ok(claims
                .iter()
                .filter(|c| c.insurance_id == insurance_id)
                .filter(|c| status.map_or(true, |s| c.status == s))
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl IssuedDocumentsPort for MockClaimsBackend {
        async fn issued_docs_by_patient(
            &self,
            patient_id: PatientId,
        ) -> Result<Vec<IssuedDocument>, RequestError> {
            self.record("issued_docs_by_patient").await?;
            let documents = self.documents.read().await;
            Ok(documents.iter().filter(|d| d.patient_id == patient_id).cloned().collect())
        }
    }
}
