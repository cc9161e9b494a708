use crate::foundation::geometry::fmt_number;
use crate::markup::node::MarkupNode;
use crate::markup::style::{Style, css_color};
use crate::model::element::{Font, TextElement};

pub(crate) fn text(t: &TextElement) -> MarkupNode {
    let style = Style::new()
        .decl("white-space", "pre-wrap")
        .decl("overflow-wrap", "break-word")
        .decl_opt("font-family", t.font.as_ref().and_then(font_family))
        .decl_opt(
            "font-size",
            t.font_size
                .filter(|s| s.is_finite() && *s > 0.0)
                .map(|s| format!("{}px", fmt_number(s))),
        )
        .decl_opt(
            "line-height",
            t.line_height.filter(|l| l.is_finite() && *l > 0.0).map(fmt_number),
        )
        .decl_opt("text-align", t.text_align.map(|a| a.as_css()))
        .decl_opt("color", t.color.as_ref().map(css_color))
        .decl_opt("background-color", t.background_color.as_ref().map(css_color));

    MarkupNode::new("p")
        .attr("class", "text-wrapper")
        .attr("style", style.to_css())
        .raw(t.content.as_str())
}

fn font_family(font: &Font) -> Option<String> {
    let family = font.family.replace(['\'', '"', ';'], "");
    let family = family.trim();
    if family.is_empty() {
        return None;
    }
    let mut out = format!("'{family}'");
    for fallback in &font.fallbacks {
        let fallback = fallback.replace(['\'', '"', ';'], "");
        let fallback = fallback.trim();
        if !fallback.is_empty() {
            out.push(',');
            out.push_str(fallback);
        }
    }
    Some(out)
}

#[cfg(test)]
#[path = "../../tests/unit/serialize/text.rs"]
mod tests;
