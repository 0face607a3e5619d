//! `prereq order` command implementation.
//!
//! Resolves the whole catalog and prints every course in study order.

use prereq_core::error::PrereqResult;

use super::CommandContext;

/// Execute the `prereq order` command
pub async fn execute(strict: bool, ctx: &CommandContext) -> PrereqResult<()> {
    let (catalog, source) = ctx.load_catalog(strict).await?;
    let graph = catalog.to_graph()?;
    let resolution = graph.resolve(catalog.policy())?;

    if ctx.json {
        return ctx.output.json(&resolution);
    }

    ctx.output.info(&format!(
        "Catalog: {} ({} policy)",
        source.path(),
        resolution.policy()
    ));

    let width = resolution.order().map(str::len).max().unwrap_or(0);
    for (position, (name, cost)) in resolution.costs().iter().enumerate() {
        let mut line = format!(
            "{:>3}. {:<width$}  {:>8}",
            position + 1,
            name,
            cost.to_string(),
            width = width
        );
        if let Some(title) = catalog.courses.get(name).and_then(|spec| spec.title()) {
            line.push_str("  ");
            line.push_str(title);
        }
        ctx.output.plain(&line);
    }

    for class in resolution.merged_classes() {
        ctx.output.warn(&format!(
            "Circular prerequisites merged: {}",
            class.join(", ")
        ));
    }

    Ok(())
}
