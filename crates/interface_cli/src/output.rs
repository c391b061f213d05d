//! Plain-text rendering of command results

use std::io::{self, Write};

use serde::Serialize;

use domain_claims::{Claim, IssuedDocument};
use domain_registration::RegistrationProgress;

/// One progress line, e.g. `[1/3] Creating user account...`
pub fn progress_line(progress: &RegistrationProgress) -> String {
    format!("[{}/{}] {}", progress.step_number, progress.total_steps, progress.message)
}

/// Writes a value as pretty JSON followed by a newline
pub fn write_json<W, T>(out: &mut W, value: &T) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

pub fn claim_line(claim: &Claim) -> String {
    format!(
        "#{} {:<8} patient={} insurance={} verified={} issued_by={} created={} {}",
        claim.claim_id,
        claim.status.as_str(),
        claim.patient_id,
        claim.insurance_id,
        yes_no(claim.is_verified),
        claim.issued_by.as_deref().unwrap_or("-"),
        claim.created_at.format("%Y-%m-%d"),
        claim.report_url,
    )
}

pub fn document_line(document: &IssuedDocument) -> String {
    format!(
        "#{} {} issuer={} verified={} created={} {}",
        document.document_id,
        document.document_type,
        document.issuer_id,
        yes_no(document.is_verified),
        document.created_at.format("%Y-%m-%d"),
        document.document_url,
    )
}

/// Writes a titled list, or a placeholder line when it is empty
pub fn write_list<W, T>(out: &mut W, title: &str, items: &[T], line: fn(&T) -> String) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out, "{} ({})", title, items.len())?;
    if items.is_empty() {
        writeln!(out, "  none")?;
    }
    for item in items {
        writeln!(out, "  {}", line(item))?;
    }
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_registration::RegistrationStep;

    #[test]
    fn test_progress_line() {
        let progress = RegistrationProgress {
            step: Some(RegistrationStep::CreateUser),
            message: "Creating user account...".to_string(),
            step_number: 1,
            total_steps: 3,
        };
        assert_eq!(progress_line(&progress), "[1/3] Creating user account...");
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        let mut out = Vec::new();
        write_list::<_, Claim>(&mut out, "Claims", &[], claim_line).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Claims (0)\n  none\n");
    }
}
