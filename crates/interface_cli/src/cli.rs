//! Command-line arguments

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use core_kernel::{InsuranceId, PatientId, Role};
use domain_claims::ClaimStatus;
use domain_registration::Gender;
use domain_validation::RuleName;

/// MedVerify client
#[derive(Debug, Parser)]
#[command(name = "medverify", version, about = "Register users and browse claims on a MedVerify backend")]
pub struct Cli {
    /// Backend base URL, overriding MEDVERIFY_API_BASE_URL
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    /// Session file, overriding MEDVERIFY_SESSION_FILE
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a user and the profile for its role
    #[command(subcommand)]
    Register(RegisterCommand),

    /// List claims for a patient or an insurer
    #[command(subcommand)]
    Claims(ClaimsCommand),

    /// List documents issued to a patient
    IssuedDocs {
        patient_id: PatientId,
    },

    /// Load a patient's claims and issued documents together
    Dashboard {
        patient_id: PatientId,
    },

    /// Check a single value against a validation rule
    Validate {
        /// Rule name, e.g. walletAddress or aadhaar
        rule: RuleName,
        value: String,
        /// Accept an empty value
        #[arg(long)]
        optional: bool,
    },

    /// Inspect or change the stored session
    #[command(subcommand)]
    Session(SessionCommand),
}

#[derive(Debug, Subcommand)]
pub enum RegisterCommand {
    Patient(PatientArgs),
    Validator(ValidatorArgs),
    Issuer(IssuerArgs),
    Insurance(InsuranceArgs),
}

#[derive(Debug, Clone, Args)]
pub struct PatientArgs {
    #[arg(long)]
    pub wallet_address: String,
    #[arg(long)]
    pub full_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    /// Date of birth as YYYY-MM-DD
    #[arg(long)]
    pub date_of_birth: NaiveDate,
    /// male, female or other
    #[arg(long)]
    pub gender: Gender,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub emergency_contact: Option<String>,

    /// Identity document to upload; enables the document step
    #[arg(long)]
    pub identity_document: Option<PathBuf>,
    #[arg(long, requires = "identity_document")]
    pub insurance_document: Option<PathBuf>,
    #[arg(long, requires = "identity_document")]
    pub aadhaar_number: Option<String>,
    #[arg(long, requires = "identity_document")]
    pub insurance_provider: Option<String>,
    #[arg(long, requires = "identity_document")]
    pub policy_number: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ValidatorArgs {
    #[arg(long)]
    pub wallet_address: String,
    #[arg(long)]
    pub full_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub organization: String,
    #[arg(long)]
    pub license_number: String,
    #[arg(long)]
    pub specialization: Option<String>,

    /// Medical license to upload; enables the document step
    #[arg(long)]
    pub license_document: Option<PathBuf>,
    #[arg(long, requires = "license_document")]
    pub id_proof: Option<PathBuf>,
    #[arg(long, requires = "license_document")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct IssuerArgs {
    #[arg(long)]
    pub wallet_address: String,
    #[arg(long)]
    pub organization_name: String,
    #[arg(long)]
    pub registration_number: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct InsuranceArgs {
    #[arg(long)]
    pub wallet_address: String,
    #[arg(long)]
    pub company_name: String,
    #[arg(long)]
    pub license_number: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
}

#[derive(Debug, Subcommand)]
pub enum ClaimsCommand {
    Patient {
        patient_id: PatientId,
    },
    Insurance {
        insurance_id: InsuranceId,
        /// pending, approved or rejected
        #[arg(long)]
        status: Option<ClaimStatus>,
    },
}

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Print the stored session
    Show,
    /// Select the role to register or sign in as
    Role {
        role: Role,
    },
    /// Forget the role and signed-in user
    Logout,
}
