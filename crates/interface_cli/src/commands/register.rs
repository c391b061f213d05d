//! `register` commands

use std::io::Write;

use tracing::{info, warn};

use core_kernel::FileUpload;
use domain_registration::{
    InsuranceDetails, InsuranceRegistration, IssuerDetails, IssuerRegistration, PatientDetails,
    PatientDocumentFiles, PatientRegistration, ProfileSteps, RegistrationError,
    RegistrationOrchestrator, RegistrationOutcome, RegistrationProgress, RegistrationService,
    ValidatorDetails, ValidatorDocumentFiles, ValidatorRegistration,
};

use super::App;
use crate::cli::{InsuranceArgs, IssuerArgs, PatientArgs, RegisterCommand, ValidatorArgs};
use crate::error::CliError;
use crate::output::{progress_line, write_json};

pub(super) async fn run<W>(app: &App, command: RegisterCommand, out: &mut W) -> anyhow::Result<()>
where
    W: Write + Send,
{
    let service = RegistrationService::new(app.client());

    let result = match command {
        RegisterCommand::Patient(args) => {
            run_flow(service.patient_flow(patient_registration(args).await?)).await
        }
        RegisterCommand::Validator(args) => {
            run_flow(service.validator_flow(validator_registration(args).await?)).await
        }
        RegisterCommand::Issuer(args) => run_flow(service.issuer_flow(issuer_registration(args))).await,
        RegisterCommand::Insurance(args) => {
            run_flow(service.insurance_flow(insurance_registration(args))).await
        }
    };

    let outcome = result.map_err(registration_failure)?;

    let mut session = app.store().load().await?;
    session.sign_in(outcome.role, outcome.user_id);
    app.store().save(&session).await?;

    info!(
        role = %outcome.role,
        user_id = %outcome.user_id,
        profile_id = %outcome.profile_id,
        "Signed in after registration"
    );

    write_json(out, &outcome)?;
    writeln!(out, "Dashboard: {}", outcome.role.dashboard_route())?;
    Ok(())
}

async fn run_flow<S: ProfileSteps>(
    flow: RegistrationOrchestrator<S>,
) -> Result<RegistrationOutcome, RegistrationError> {
    let mut flow = flow.with_progress(report_progress);
    flow.run().await
}

fn report_progress(progress: &RegistrationProgress) {
    eprintln!("{}", progress_line(progress));
}

/// Turns a failed registration into the message shown to the user
pub(crate) fn registration_failure(error: RegistrationError) -> CliError {
    let message = match &error {
        RegistrationError::InvalidForm(result) => {
            format!("{}:\n  {}", error.user_message(), result.messages().join("\n  "))
        }
        _ => error.user_message(),
    };

    let orphaned_user = error.orphaned_user();
    if let Some(user_id) = orphaned_user {
        warn!(%user_id, "Registration stopped after the user was created");
    }

    let message = match orphaned_user {
        Some(user_id) => format!(
            "{}\nUser {} was created before the failure and remains on the server",
            message, user_id
        ),
        None => message,
    };

    CliError::Registration { message, orphaned_user }
}

async fn read_optional(path: Option<std::path::PathBuf>) -> anyhow::Result<Option<FileUpload>> {
    match path {
        Some(path) => Ok(Some(FileUpload::read_from(path).await?)),
        None => Ok(None),
    }
}

async fn patient_registration(args: PatientArgs) -> anyhow::Result<PatientRegistration> {
    let documents = match args.identity_document {
        Some(path) => Some(PatientDocumentFiles {
            identity_document: FileUpload::read_from(path).await?,
            insurance_document: read_optional(args.insurance_document).await?,
            aadhaar_number: args.aadhaar_number,
            insurance_provider: args.insurance_provider,
            policy_number: args.policy_number,
        }),
        None => None,
    };

    Ok(PatientRegistration {
        wallet_address: args.wallet_address,
        details: PatientDetails {
            full_name: args.full_name,
            email: args.email,
            phone: args.phone,
            date_of_birth: args.date_of_birth,
            gender: args.gender,
            address: args.address,
            emergency_contact: args.emergency_contact,
        },
        documents,
    })
}

async fn validator_registration(args: ValidatorArgs) -> anyhow::Result<ValidatorRegistration> {
    let documents = match args.license_document {
        Some(path) => Some(ValidatorDocumentFiles {
            license_document: FileUpload::read_from(path).await?,
            id_proof: read_optional(args.id_proof).await?,
            notes: args.notes,
        }),
        None => None,
    };

    Ok(ValidatorRegistration {
        wallet_address: args.wallet_address,
        details: ValidatorDetails {
            full_name: args.full_name,
            email: args.email,
            phone: args.phone,
            organization: args.organization,
            license_number: args.license_number,
            specialization: args.specialization,
        },
        documents,
    })
}

fn issuer_registration(args: IssuerArgs) -> IssuerRegistration {
    IssuerRegistration {
        wallet_address: args.wallet_address,
        details: IssuerDetails {
            organization_name: args.organization_name,
            registration_number: args.registration_number,
            email: args.email,
            phone: args.phone,
            address: args.address,
        },
    }
}

fn insurance_registration(args: InsuranceArgs) -> InsuranceRegistration {
    InsuranceRegistration {
        wallet_address: args.wallet_address,
        details: InsuranceDetails {
            company_name: args.company_name,
            license_number: args.license_number,
            email: args.email,
            phone: args.phone,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{RequestError, UserId};
    use domain_registration::RegistrationStep;
    use domain_validation::ValidationResult;

    #[test]
    fn test_step_failure_names_orphaned_user() {
        let error = RegistrationError::StepFailed {
            step: RegistrationStep::CreateProfile,
            user_id: Some(UserId::new(7)),
            profile_id: None,
            source: RequestError::rejected(400, "Email already registered"),
        };

        match registration_failure(error) {
            CliError::Registration { message, orphaned_user } => {
                assert_eq!(orphaned_user, Some(UserId::new(7)));
                assert!(message.starts_with("Profile creation failed: Email already registered"));
                assert!(message.contains("User 7 was created before the failure"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_invalid_form_lists_fields() {
        let mut result = ValidationResult::ok();
        result.add_error("email", "Please enter a valid email address");

        let message = registration_failure(RegistrationError::InvalidForm(result)).to_string();
        assert!(message.starts_with("Please correct the highlighted fields:"));
        assert!(message.contains("Please enter a valid email address"));
    }
}
