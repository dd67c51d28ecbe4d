//! Mock Payments API
//!
//! In-memory backend for tests: scripted outcomes, and a record of every
//! request so tests can assert which calls reached the network layer.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::{PaymentCreated, PaymentsApi};
use crate::error::{PaymentError, Result};
use crate::request::PaymentRequest;

/// Scripted backend behavior
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockOutcome {
    Success,
    /// Anti-abuse rejection (403)
    Forbidden,
    /// Unexpected server failure (500)
    ServerError,
}

/// Mock payments backend
pub struct MockPaymentsApi {
    create_outcome: MockOutcome,
    delete_outcome: MockOutcome,
    created: Mutex<Vec<PaymentRequest>>,
    deleted: Mutex<Vec<Uuid>>,
}

impl Default for MockPaymentsApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPaymentsApi {
    /// Backend where everything succeeds
    pub fn new() -> Self {
        Self {
            create_outcome: MockOutcome::Success,
            delete_outcome: MockOutcome::Success,
            created: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub fn with_create_outcome(mut self, outcome: MockOutcome) -> Self {
        self.create_outcome = outcome;
        self
    }

    pub fn with_delete_outcome(mut self, outcome: MockOutcome) -> Self {
        self.delete_outcome = outcome;
        self
    }

    /// Requests that reached the create endpoint
    pub fn created_requests(&self) -> Vec<PaymentRequest> {
        self.created.lock().unwrap().clone()
    }

    /// Identifiers that reached the delete endpoint
    pub fn deleted_uuids(&self) -> Vec<Uuid> {
        self.deleted.lock().unwrap().clone()
    }

    /// Total calls that reached the backend
    pub fn request_count(&self) -> usize {
        self.created.lock().unwrap().len() + self.deleted.lock().unwrap().len()
    }

    fn fail(outcome: MockOutcome) -> Option<PaymentError> {
        match outcome {
            MockOutcome::Success => None,
            MockOutcome::Forbidden => Some(PaymentError::Rejected),
            MockOutcome::ServerError => Some(PaymentError::Api {
                status: 500,
                body: "internal error".into(),
            }),
        }
    }
}

#[async_trait]
impl PaymentsApi for MockPaymentsApi {
    async fn create_payment(&self, request: &PaymentRequest) -> Result<PaymentCreated> {
        self.created.lock().unwrap().push(request.clone());
        if let Some(err) = Self::fail(self.create_outcome) {
            return Err(err);
        }
        Ok(PaymentCreated {
            email_hash: "6d3599752099d0ff6e4c2bb4213a9c3a".into(),
            client_secret: "pi_mock_secret".into(),
            uuid: Uuid::new_v4(),
        })
    }

    async fn delete_payment(&self, uuid: &Uuid) -> Result<()> {
        self.deleted.lock().unwrap().push(*uuid);
        match Self::fail(self.delete_outcome) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "MockPayments"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_requests() {
        let mock = MockPaymentsApi::new();
        let created = mock
            .create_payment(&PaymentRequest::default())
            .await
            .unwrap();
        mock.delete_payment(&created.uuid).await.unwrap();

        assert_eq!(mock.created_requests().len(), 1);
        assert_eq!(mock.deleted_uuids(), vec![created.uuid]);
        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn test_scripted_forbidden() {
        let mock = MockPaymentsApi::new().with_create_outcome(MockOutcome::Forbidden);
        let err = mock
            .create_payment(&PaymentRequest::default())
            .await
            .unwrap_err();
        assert!(err.is_expected_rejection());
        // The request still reached the backend.
        assert_eq!(mock.request_count(), 1);
    }
}
