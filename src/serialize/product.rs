use crate::markup::node::MarkupNode;
use crate::model::element::ProductElement;
use crate::serialize::RenderCtx;

/// Shopping tag for a product. Nothing is emitted while shopping is disabled or when the product
/// has no id to key the tag on.
pub(crate) fn product(p: &ProductElement, ctx: &RenderCtx<'_>) -> Option<MarkupNode> {
    if !ctx.args.shopping {
        return None;
    }
    let id = p.product.product_id.trim();
    if id.is_empty() {
        tracing::warn!("product element without product id omitted");
        return None;
    }
    Some(MarkupNode::new("amp-story-shopping-tag").attr("data-product-id", id))
}

#[cfg(test)]
#[path = "../../tests/unit/serialize/product.rs"]
mod tests;
