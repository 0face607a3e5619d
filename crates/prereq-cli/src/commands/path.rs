//! `prereq path` command implementation.

use prereq_core::error::{PrereqError, PrereqResult};

use super::{suggest_similar, CommandContext};

/// Execute the `prereq path` command
pub async fn execute(target: String, strict: bool, ctx: &CommandContext) -> PrereqResult<()> {
    let (catalog, _) = ctx.load_catalog(strict).await?;
    let graph = catalog.to_graph()?;
    let resolution = graph.resolve(catalog.policy())?;

    let path = match resolution.learning_path(&target) {
        Ok(path) => path,
        Err(err @ PrereqError::UnknownItem { .. }) => {
            if let Some(suggestion) = suggest_similar(&target, resolution.order()) {
                ctx.output.info(&format!("Did you mean '{}'?", suggestion));
            }
            return Err(err);
        }
        Err(err) => return Err(err),
    };

    if ctx.json {
        return ctx.output.json(&path);
    }

    ctx.output.plain(&path.prefix.join(" -> "));
    ctx.output.success(&format!(
        "{} courses, total cost {}",
        path.len(),
        path.total_cost
    ));

    Ok(())
}
