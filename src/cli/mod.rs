mod handler;
mod ui;

use std::io::Write;

pub use handler::{parse_args, Command};
pub use ui::{render_help, render_todos};

use crate::app::App;
use crate::error::Result;

/// Runs one command, writing user output to `out`.
///
/// Failures of `add`, `complete` and `delete` are reported on `out` and
/// swallowed. An error returned from here is fatal to the process.
pub async fn dispatch<W: Write>(app: &App, command: Command, out: &mut W) -> Result<()> {
    let outcome = match command {
        Command::Help => {
            write!(out, "{}", render_help())?;
            return Ok(());
        }
        Command::Show => {
            let todos = app.list().await?;
            write!(out, "{}", render_todos(&todos))?;
            return Ok(());
        }
        Command::InsufficientArguments => {
            writeln!(out, "Insufficient arguments!")?;
            write!(out, "{}", render_help())?;
            return Ok(());
        }
        Command::Invalid => {
            writeln!(out, "Invalid command!")?;
            write!(out, "{}", render_help())?;
            return Ok(());
        }
        Command::Add(description) => app
            .add(&description)
            .await
            .map(|_| "Todo added successfully!"),
        Command::Complete(id) => app.complete(id).await.map(|_| "Todo Marked as Completed!"),
        Command::Delete(id) => app.delete(id).await.map(|_| "Todo deleted successfully!"),
    };

    match outcome {
        Ok(message) => writeln!(out, "{message}")?,
        Err(e) => {
            if !e.is_user_facing() {
                tracing::warn!(error = %e, "todo operation failed");
            }
            writeln!(out, "{e}")?;
        }
    }
    Ok(())
}
