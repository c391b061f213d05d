//! Multipart request bodies
//!
//! Document uploads are always sent as `multipart/form-data`. A
//! [`MultipartPayload`] collects the named parts in order; ids and other
//! scalars become decimal or plain text parts, files keep their name and
//! content type. Optional fields that are absent are left out entirely, and a
//! field name never appears twice.

use reqwest::multipart::{Form, Part};

use core_kernel::{FileUpload, RequestError};
use domain_registration::{PatientIdentityInsurance, ValidatorDocuments};

/// Value of one multipart part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    File(FileUpload),
}

/// Ordered multipart body under construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    parts: Vec<(String, PartValue)>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text part
    pub fn text(self, name: &str, value: impl ToString) -> Self {
        self.push(name, PartValue::Text(value.to_string()))
    }

    /// Adds a text part when the value is present, even if it is blank
    pub fn optional_text<V: AsRef<str>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.text(name, value.as_ref()),
            None => self,
        }
    }

    /// Adds a file part
    pub fn file(self, name: &str, file: FileUpload) -> Self {
        self.push(name, PartValue::File(file))
    }

    pub fn optional_file(self, name: &str, file: Option<FileUpload>) -> Self {
        match file {
            Some(file) => self.file(name, file),
            None => self,
        }
    }

    /// Part names, in order
    pub fn field_names(&self) -> Vec<&str> {
        self.parts.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&PartValue> {
        self.parts.iter().find(|(n, _)| n == name).map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn has_file(&self) -> bool {
        self.parts.iter().any(|(_, value)| matches!(value, PartValue::File(_)))
    }

    /// Converts into a reqwest form
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Encode` if a file's content type is not a
    /// valid MIME type.
    pub fn into_form(self) -> Result<Form, RequestError> {
        self.parts
            .into_iter()
            .try_fold(Form::new(), |form, (name, value)| match value {
                PartValue::Text(text) => Ok(form.text(name, text)),
                PartValue::File(file) => {
                    let part = Part::bytes(file.bytes)
                        .file_name(file.file_name.clone())
                        .mime_str(&file.content_type)
                        .map_err(|e| {
                            RequestError::encode(format!(
                                "Invalid content type '{}' for {}: {}",
                                file.content_type, file.file_name, e
                            ))
                        })?;
                    Ok(form.part(name, part))
                }
            })
    }

    // Replaces an existing part of the same name in place.
    fn push(mut self, name: &str, value: PartValue) -> Self {
        match self.parts.iter_mut().find(|(n, _)| n == name) {
            Some(existing) => existing.1 = value,
            None => self.parts.push((name.to_string(), value)),
        }
        self
    }
}

/// Request types sent as multipart bodies
pub trait IntoMultipart {
    fn to_multipart(&self) -> MultipartPayload;
}

impl IntoMultipart for PatientIdentityInsurance {
    fn to_multipart(&self) -> MultipartPayload {
        let files = &self.files;
        MultipartPayload::new()
            .text("patient_id", self.patient_id)
            .file("identity_document", files.identity_document.clone())
            .optional_file("insurance_document", files.insurance_document.clone())
            .optional_text("aadhaar_number", files.aadhaar_number.as_deref())
            .optional_text("insurance_provider", files.insurance_provider.as_deref())
            .optional_text("policy_number", files.policy_number.as_deref())
    }
}

impl IntoMultipart for ValidatorDocuments {
    fn to_multipart(&self) -> MultipartPayload {
        let files = &self.files;
        MultipartPayload::new()
            .text("validator_id", self.validator_id)
            .file("license_document", files.license_document.clone())
            .optional_file("id_proof", files.id_proof.clone())
            .optional_text("notes", files.notes.as_deref())
    }
}
