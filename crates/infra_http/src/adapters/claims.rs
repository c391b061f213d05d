//! Claims and issued-document listings over HTTP

use async_trait::async_trait;

use core_kernel::{InsuranceId, PatientId, RequestError};
use domain_claims::{Claim, ClaimStatus, ClaimsPort, IssuedDocument, IssuedDocumentsPort};

use crate::client::ApiClient;
use crate::endpoints;

#[async_trait]
impl ClaimsPort for ApiClient {
    async fn claims_by_patient(&self, patient_id: PatientId) -> Result<Vec<Claim>, RequestError> {
        self.get_json(
            &endpoints::claims_by_patient(patient_id),
            &[],
            endpoints::FETCH_CLAIMS_FAILED,
        )
        .await
    }

    async fn claims_by_insurance(
        &self,
        insurance_id: InsuranceId,
        status: Option<ClaimStatus>,
    ) -> Result<Vec<Claim>, RequestError> {
        // `status` is only sent when filtering
        let query: Vec<(&str, String)> = status
            .map(|status| ("status", status.as_str().to_string()))
            .into_iter()
            .collect();

        self.get_json(
            &endpoints::claims_by_insurance(insurance_id),
            &query,
            endpoints::FETCH_CLAIMS_FAILED,
        )
        .await
    }
}

#[async_trait]
impl IssuedDocumentsPort for ApiClient {
    async fn issued_docs_by_patient(
        &self,
        patient_id: PatientId,
    ) -> Result<Vec<IssuedDocument>, RequestError> {
        self.get_json(
            &endpoints::issued_docs_by_patient(patient_id),
            &[],
            endpoints::FETCH_ISSUED_DOCUMENTS_FAILED,
        )
        .await
    }
}
