use crate::markup::node::MarkupNode;
use crate::model::element::{
    Element, GifElement, ImageElement, StickerElement, VideoElement, override_or_default,
};
use crate::serialize::{RenderCtx, captions_id, media_id};

pub(crate) fn image(img: &ImageElement, ctx: &RenderCtx<'_>) -> MarkupNode {
    let alt = override_or_default(img.alt.as_deref(), img.resource.alt.as_deref());
    MarkupNode::new("amp-img")
        .attr("layout", "fill")
        .attr_opt("src", ctx.resolver.resolve_present(&img.resource.src))
        .attr_opt("alt", alt)
}

/// Playable video with one source and its caption tracks.
///
/// The caption attachment id is emitted only when enhanced captions are enabled and the element
/// has at least one track. The first track is the default one.
pub(crate) fn video(el: &Element, v: &VideoElement, ctx: &RenderCtx<'_>) -> MarkupNode {
    let poster = ctx.resolver.resolve_opt(override_or_default(
        v.poster.as_deref(),
        v.resource.poster.as_deref(),
    ));
    let alt = override_or_default(v.alt.as_deref(), v.resource.alt.as_deref());
    let captions = ctx.args.enhanced_captions && !v.tracks.is_empty();

    let source = MarkupNode::new("source")
        .attr_opt("type", v.resource.mime_type.as_deref())
        .attr_opt("src", ctx.resolver.resolve_present(&v.resource.src));

    let tracks = v.tracks.iter().enumerate().map(|(i, t)| {
        MarkupNode::new("track")
            .attr_opt("srclang", t.srclang.as_deref())
            .attr_opt("label", t.label.as_deref())
            .attr("kind", t.kind.as_str())
            .attr_opt("src", ctx.resolver.resolve_present(&t.track))
            .flag("default", i == 0)
    });

    MarkupNode::new("amp-video")
        .attr("autoplay", "autoplay")
        .attr_opt("poster", poster)
        .attr_opt("artwork", poster)
        .attr_opt("title", alt)
        .attr_opt("alt", alt)
        .attr("layout", "fill")
        .flag("loop", v.looping)
        .flag("noaudio", v.resource.is_muted)
        .attr("id", media_id(&el.id))
        .attr_opt("captions-id", captions.then(|| captions_id(&el.id)))
        .child(source)
        .children_from(tracks)
}

/// Animated media: a muted looping video over the converted renditions, or the original file
/// as an image when nothing was converted.
pub(crate) fn gif(el: &Element, g: &GifElement, ctx: &RenderCtx<'_>) -> MarkupNode {
    let alt = override_or_default(g.alt.as_deref(), g.resource.alt.as_deref());
    if g.resource.output.is_empty() {
        return MarkupNode::new("amp-img")
            .attr("layout", "fill")
            .attr_opt("src", ctx.resolver.resolve_present(&g.resource.src))
            .attr_opt("alt", alt);
    }

    let poster = ctx.resolver.resolve_opt(override_or_default(
        g.poster.as_deref(),
        g.resource.poster.as_deref(),
    ));
    let sources = g.resource.output.iter().map(|o| {
        MarkupNode::new("source")
            .attr_opt("type", Some(o.mime_type.as_str()).filter(|t| !t.is_empty()))
            .attr_opt("src", ctx.resolver.resolve_present(&o.src))
    });
    MarkupNode::new("amp-video")
        .attr("autoplay", "autoplay")
        .attr_opt("poster", poster)
        .attr_opt("artwork", poster)
        .attr_opt("title", alt)
        .attr_opt("alt", alt)
        .attr("layout", "fill")
        .attr("loop", "loop")
        .attr("noaudio", "noaudio")
        .attr("id", media_id(&el.id))
        .children_from(sources)
}

pub(crate) fn sticker(s: &StickerElement, ctx: &RenderCtx<'_>) -> MarkupNode {
    match s.sticker.src.as_deref() {
        Some(src) => MarkupNode::new("amp-img")
            .attr("layout", "fill")
            .attr("class", "sticker")
            .attr("data-sticker", s.sticker.sticker_type.as_str())
            .attr_opt("src", ctx.resolver.resolve_present(src))
            .attr_opt("alt", s.alt.as_deref()),
        None => MarkupNode::new("div")
            .attr("class", "sticker")
            .attr("data-sticker", s.sticker.sticker_type.as_str())
            .attr_opt("aria-label", s.alt.as_deref()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/serialize/media.rs"]
mod tests;
