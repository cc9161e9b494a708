use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::compile::animation::{
    animation_node, collect_entries, json_script, warn_skipped, wrap_animated,
};
use crate::foundation::error::{StoryError, StoryResult};
use crate::foundation::geometry::{ElementBox, PageSize, fmt_number};
use crate::markup::node::MarkupNode;
use crate::model::element::{Element, ElementKind, Product};
use crate::model::story::Page;
use crate::serialize::shape::fill_style;
use crate::serialize::{RenderCtx, captions_id, serialize_element};

/// AMP extension names a page may require.
pub(crate) const EXT_VIDEO: &str = "amp-video";
pub(crate) const EXT_CAPTIONS: &str = "amp-story-captions";
pub(crate) const EXT_SHOPPING: &str = "amp-story-shopping";

#[derive(Clone, Debug)]
/// Compiled page plus the AMP extensions its markup uses.
pub struct PageMarkup {
    /// `<amp-story-page>` node.
    pub node: MarkupNode,
    /// Extension names (for example `amp-video`) required by `node`.
    pub extensions: BTreeSet<&'static str>,
}

/// Compile one page.
///
/// The background element is painted first in its own layer. The remaining elements follow in
/// stored order, which is both paint order and DOM order. Animation blocks follow the same
/// order and are emitted only for elements that produced markup.
#[tracing::instrument(skip_all, fields(page = %page.id))]
pub fn compile_page(
    page: &Page,
    page_size: PageSize,
    ctx: &RenderCtx<'_>,
) -> StoryResult<PageMarkup> {
    let background = page.background()?;
    let entries = collect_entries(page);
    warn_skipped(page);
    let mut extensions = BTreeSet::new();
    let mut emitted = HashSet::new();
    let owner = format!("page '{}'", page.id);

    let mut page_node = MarkupNode::new("amp-story-page").attr("id", page.id.as_str());
    if let Some(adv) = page.advancement.filter(|a| a.auto_advance) {
        let secs = if adv.page_duration_secs.is_finite() && adv.page_duration_secs > 0.0 {
            adv.page_duration_secs
        } else {
            7.0
        };
        page_node.set_attr("auto-advance-after", format!("{}s", fmt_number(secs)));
    }
    if let Some(audio) = &page.background_audio {
        let src = ctx.resolver.resolve(&audio.src);
        if !src.is_empty() {
            page_node.set_attr("background-audio", src);
        }
    }

    // Background layer.
    let mut fullbleed = MarkupNode::new("div").attr("class", "page-fullbleed-area");
    if let Some(fill) = &page.background_color {
        let style = fill_style(fill, &owner, ctx)?;
        if !style.is_empty() {
            fullbleed.set_attr("style", style.to_css());
        }
    }
    let mut safe_area = MarkupNode::new("div").attr("class", "page-safe-area");
    if let Some(bg) = background {
        if let Some(node) = serialize_element(bg, &ElementBox::full_page(), ctx)? {
            note_extensions(bg, ctx, &mut extensions);
            emitted.insert(bg.id.as_str());
            safe_area = safe_area.child(wrap_animated(node, &bg.id, &entries));
        }
    }
    let background_layer = grid_layer(page_size).child(fullbleed.child(safe_area));

    // Element layer.
    let mut elements_area = MarkupNode::new("div").attr("class", "page-safe-area");
    for el in page.elements.iter().filter(|e| !e.is_page_background()) {
        let bx = ElementBox::from_geometry(&el.geometry, page_size);
        if let Some(node) = serialize_element(el, &bx, ctx)? {
            note_extensions(el, ctx, &mut extensions);
            emitted.insert(el.id.as_str());
            elements_area = elements_area.child(wrap_animated(node, &el.id, &entries));
        }
    }
    let element_layer = grid_layer(page_size).child(
        MarkupNode::new("div")
            .attr("class", "page-fullbleed-area")
            .child(elements_area),
    );

    // Animation blocks only for elements that produced markup, so every selector resolves.
    page_node = page_node
        .children_from(
            entries
                .iter()
                .filter(|e| emitted.contains(e.element.id.as_str()))
                .filter_map(animation_node),
        )
        .child(background_layer)
        .child(element_layer);

    // Caption attachments, in element order.
    let captions: Vec<MarkupNode> = page
        .paint_order()
        .filter(|el| emitted.contains(el.id.as_str()) && has_caption_attachment(el, ctx))
        .map(|el| {
            MarkupNode::new("amp-story-captions")
                .attr("id", captions_id(&el.id))
                .attr("layout", "fixed-height")
                .attr("height", "100")
                .attr("style-preset", "default")
        })
        .collect();
    if !captions.is_empty() {
        extensions.insert(EXT_CAPTIONS);
        page_node = page_node.child(
            MarkupNode::new("amp-story-grid-layer")
                .attr("template", "vertical")
                .attr("class", "grid-layer align-bottom")
                .child(
                    MarkupNode::new("div")
                        .attr("class", "captions-area")
                        .children_from(captions),
                ),
        );
    }

    // At most one attachment, and it must be the last child.
    let shopping = shopping_attachment(page, ctx)?;
    let has_shopping = shopping.is_some();
    if let Some(node) = shopping {
        extensions.insert(EXT_SHOPPING);
        page_node = page_node.child(node);
    }
    if let Some(att) = page.page_attachment.as_ref().filter(|_| ctx.args.page_outlinks) {
        let href = ctx.resolver.resolve(att.url.trim());
        if has_shopping {
            tracing::warn!(
                page = %page.id,
                "page outlink dropped: page already has a shopping attachment"
            );
        } else if !href.is_empty() {
            page_node = page_node.child(
                MarkupNode::new("amp-story-page-outlink")
                    .attr("layout", "nodisplay")
                    .child(
                        MarkupNode::new("a")
                            .attr("href", href)
                            .attr("target", "_blank")
                            .text(att.cta_text.as_str()),
                    ),
            );
        }
    }

    tracing::debug!(
        elements = page.elements.len(),
        animations = entries.len(),
        "compiled page"
    );
    Ok(PageMarkup {
        node: page_node,
        extensions,
    })
}

fn grid_layer(page_size: PageSize) -> MarkupNode {
    MarkupNode::new("amp-story-grid-layer")
        .attr("template", "vertical")
        .attr("aspect-ratio", page_size.aspect_ratio())
        .attr("class", "grid-layer")
}

fn has_caption_attachment(el: &Element, ctx: &RenderCtx<'_>) -> bool {
    match &el.kind {
        ElementKind::Video(v) => ctx.args.enhanced_captions && !v.tracks.is_empty(),
        _ => false,
    }
}

fn note_extensions(el: &Element, ctx: &RenderCtx<'_>, extensions: &mut BTreeSet<&'static str>) {
    match &el.kind {
        ElementKind::Video(_) => {
            extensions.insert(EXT_VIDEO);
        }
        ElementKind::Gif(g) if !g.resource.output.is_empty() => {
            extensions.insert(EXT_VIDEO);
        }
        ElementKind::Product(_) if ctx.args.shopping => {
            extensions.insert(EXT_SHOPPING);
        }
        _ => {}
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShoppingItem<'a> {
    product_id: &'a str,
    product_title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_brand: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_price_currency: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    product_images: Vec<ShoppingImage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_url: Option<&'a str>,
}

#[derive(Serialize)]
struct ShoppingImage<'a> {
    url: &'a str,
    alt: &'a str,
}

impl<'a> ShoppingItem<'a> {
    fn new(p: &'a Product, ctx: &RenderCtx<'_>) -> Self {
        Self {
            product_id: p.product_id.trim(),
            product_title: &p.product_title,
            product_brand: p.product_brand.as_deref(),
            product_price: p.product_price.filter(|v| v.is_finite()),
            product_price_currency: p.product_price_currency.as_deref(),
            product_images: p
                .product_images
                .iter()
                .filter(|img| ctx.resolver.is_embeddable(&img.url))
                .map(|img| ShoppingImage {
                    url: &img.url,
                    alt: &img.alt,
                })
                .collect(),
            product_url: p
                .product_url
                .as_deref()
                .filter(|u| ctx.resolver.is_embeddable(u)),
        }
    }
}

/// One shopping attachment listing the page's products in element order, first occurrence of a
/// product id wins.
fn shopping_attachment(page: &Page, ctx: &RenderCtx<'_>) -> StoryResult<Option<MarkupNode>> {
    if !ctx.args.shopping {
        return Ok(None);
    }
    let mut seen = HashSet::new();
    let items: Vec<ShoppingItem<'_>> = page
        .elements
        .iter()
        .filter_map(|el| match &el.kind {
            ElementKind::Product(p) => Some(&p.product),
            _ => None,
        })
        .filter(|p| !p.product_id.trim().is_empty() && seen.insert(p.product_id.trim()))
        .map(|p| ShoppingItem::new(p, ctx))
        .collect();
    if items.is_empty() {
        return Ok(None);
    }
    let items = serde_json::to_value(&items)
        .map_err(|e| StoryError::serde(format!("shopping attachment: {e}")))?;
    let mut config = serde_json::Map::new();
    config.insert("items".to_string(), items);
    Ok(Some(
        MarkupNode::new("amp-story-shopping-attachment")
            .attr("layout", "nodisplay")
            .child(json_script(&serde_json::Value::Object(config))),
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/compile/page.rs"]
mod tests;
