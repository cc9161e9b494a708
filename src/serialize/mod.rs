//! Per-kind element serializers.
//!
//! Each serializer is a pure function of the element, its page-relative box and the render
//! context. Missing optional fields degrade to omitted attributes; the only errors are
//! malformed-input ones (unknown discriminant, invalid fill).

pub(crate) mod media;
pub(crate) mod product;
pub(crate) mod shape;
pub(crate) mod text;

use crate::foundation::config::RenderArgs;
use crate::foundation::error::{StoryError, StoryResult};
use crate::foundation::geometry::{ElementBox, fmt_number};
use crate::markup::node::MarkupNode;
use crate::markup::style::{FillTranslator, Style};
use crate::model::element::{Element, ElementKind, Mask};
use crate::resource::resolve::ResourceResolver;

#[derive(Clone, Copy)]
/// Read-only inputs shared by every serializer during one compilation.
pub struct RenderCtx<'a> {
    /// Capability flags.
    pub args: &'a RenderArgs,
    /// Media address resolution.
    pub resolver: ResourceResolver<'a>,
    /// Fill-to-CSS translation.
    pub fills: &'a dyn FillTranslator,
}

impl std::fmt::Debug for RenderCtx<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderCtx")
            .field("args", self.args)
            .finish_non_exhaustive()
    }
}

/// DOM id of the positioned frame of an element.
pub fn frame_id(element_id: &str) -> String {
    format!("el-{element_id}")
}

/// DOM id of the playable node of a media element.
pub fn media_id(element_id: &str) -> String {
    format!("el-{element_id}-media")
}

/// DOM id of the caption attachment of a video element.
pub fn captions_id(element_id: &str) -> String {
    format!("el-{element_id}-captions")
}

/// Serialize one element into its positioned frame.
///
/// Returns `Ok(None)` when the element has no output under the current flags (for example a
/// product while shopping is disabled).
pub fn serialize_element(
    el: &Element,
    bx: &ElementBox,
    ctx: &RenderCtx<'_>,
) -> StoryResult<Option<MarkupNode>> {
    let owner = format!("element '{}'", el.id);
    let content = match &el.kind {
        ElementKind::Image(img) => Some(media::image(img, ctx)),
        ElementKind::Video(video) => Some(media::video(el, video, ctx)),
        ElementKind::Gif(gif) => Some(media::gif(el, gif, ctx)),
        ElementKind::Sticker(sticker) => Some(media::sticker(sticker, ctx)),
        ElementKind::Text(text) => Some(text::text(text)),
        ElementKind::Shape(shape) => Some(shape::shape(&shape.fill, &owner, ctx)?),
        ElementKind::Background(bg) => Some(shape::background(&bg.fill, &owner, ctx)?),
        ElementKind::Product(product) => product::product(product, ctx),
        ElementKind::Unknown => {
            return Err(StoryError::malformed(format!("{owner} has an unknown type")));
        }
    };
    Ok(content.map(|c| frame(el, bx, decorate(el, ctx, c))))
}

/// Wrap content in its mask container and, when the element links somewhere, an anchor.
fn decorate(el: &Element, ctx: &RenderCtx<'_>, content: MarkupNode) -> MarkupNode {
    let mut class = format!("mask {}-element", el.type_name());
    if el.is_page_background() {
        class.push_str(" background-element");
    }
    let mut mask = MarkupNode::new("div")
        .attr("class", class)
        .attr("data-leaf-element", "true");
    let mask_style = mask_style(el);
    if !mask_style.is_empty() {
        mask.set_attr("style", mask_style.to_css());
    }
    let mask = mask.child(content);

    let Some(link) = &el.link else {
        return mask;
    };
    let href = ctx.resolver.resolve(link.url.trim());
    if href.is_empty() {
        return mask;
    }
    MarkupNode::new("a")
        .attr("href", href)
        .attr("class", "page-element-link")
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .attr_opt("aria-label", link.desc.as_deref())
        .child(mask)
}

fn mask_style(el: &Element) -> Style {
    match el.mask {
        None | Some(Mask::Rectangle) => Style::new(),
        Some(Mask::Circle) => Style::new()
            .decl("clip-path", "ellipse(50% 50% at 50% 50%)")
            .decl("overflow", "hidden"),
        Some(Mask::Rounded { radius }) => {
            let pct = |of: f64| {
                if of > 0.0 && radius.is_finite() {
                    fmt_number((radius / of * 100.0).clamp(0.0, 50.0))
                } else {
                    "0".to_string()
                }
            };
            Style::new()
                .decl(
                    "border-radius",
                    format!("{}% / {}%", pct(el.geometry.width), pct(el.geometry.height)),
                )
                .decl("overflow", "hidden")
        }
    }
}

/// Absolutely positioned frame carrying the element box.
fn frame(el: &Element, bx: &ElementBox, body: MarkupNode) -> MarkupNode {
    let mut style = Style::new()
        .decl("position", "absolute")
        .decl("left", format!("{}%", fmt_number(bx.left)))
        .decl("top", format!("{}%", fmt_number(bx.top)))
        .decl("width", format!("{}%", fmt_number(bx.width)))
        .decl("height", format!("{}%", fmt_number(bx.height)));
    if bx.rotation != 0.0 {
        style = style.decl("transform", format!("rotate({}deg)", fmt_number(bx.rotation)));
    }
    let opacity = if el.opacity.is_finite() {
        el.opacity.clamp(0.0, 100.0)
    } else {
        100.0
    };
    if opacity < 100.0 {
        style = style.decl("opacity", fmt_number(opacity / 100.0));
    }
    MarkupNode::new("div")
        .attr("class", "page-element")
        .attr("id", frame_id(&el.id))
        .attr("style", style.to_css())
        .child(body)
}

#[cfg(test)]
#[path = "../../tests/unit/serialize/mod.rs"]
mod tests;
