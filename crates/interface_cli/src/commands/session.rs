//! `session` commands

use std::io::Write;

use tracing::info;

use super::App;
use crate::cli::SessionCommand;
use crate::output::write_json;

pub(super) async fn run<W>(app: &App, command: SessionCommand, out: &mut W) -> anyhow::Result<()>
where
    W: Write + Send,
{
    let store = app.store();

    match command {
        SessionCommand::Show => {
            let session = store.load().await?;
            write_json(out, &session)?;
            if let Some(route) = session.dashboard_route() {
                writeln!(out, "Dashboard: {}", route)?;
            }
        }
        SessionCommand::Role { role } => {
            let mut session = store.load().await?;
            session.select_role(role);
            store.save(&session).await?;
            info!(%role, "Role selected");
            writeln!(out, "Selected role {}", role)?;
        }
        SessionCommand::Logout => {
            store.clear().await?;
            info!(path = %store.path().display(), "Session cleared");
            writeln!(out, "Logged out")?;
        }
    }
    Ok(())
}
