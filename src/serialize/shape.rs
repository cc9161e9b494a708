use crate::foundation::error::StoryResult;
use crate::markup::node::MarkupNode;
use crate::markup::style::Style;
use crate::model::fill::{Fill, FillSpec};
use crate::serialize::RenderCtx;

/// Validate `spec` and translate it to CSS, resolving pattern-image addresses first.
pub(crate) fn fill_style(spec: &FillSpec, owner: &str, ctx: &RenderCtx<'_>) -> StoryResult<Style> {
    let fill = match spec.resolve(owner)? {
        Fill::Image(src) => Fill::Image(ctx.resolver.resolve(&src).to_string()),
        other => other,
    };
    Ok(Style::new().extend(ctx.fills.declarations(&fill)))
}

pub(crate) fn shape(spec: &FillSpec, owner: &str, ctx: &RenderCtx<'_>) -> StoryResult<MarkupNode> {
    filled_div("shape", spec, owner, ctx)
}

pub(crate) fn background(
    spec: &FillSpec,
    owner: &str,
    ctx: &RenderCtx<'_>,
) -> StoryResult<MarkupNode> {
    filled_div("background-fill", spec, owner, ctx)
}

fn filled_div(
    class: &str,
    spec: &FillSpec,
    owner: &str,
    ctx: &RenderCtx<'_>,
) -> StoryResult<MarkupNode> {
    let style = fill_style(spec, owner, ctx)?
        .decl("width", "100%")
        .decl("height", "100%");
    Ok(MarkupNode::new("div")
        .attr("class", class)
        .attr("style", style.to_css()))
}

#[cfg(test)]
#[path = "../../tests/unit/serialize/shape.rs"]
mod tests;
