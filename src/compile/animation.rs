use std::collections::HashSet;

use serde_json::{Map, Value, json};

use crate::markup::node::MarkupNode;
use crate::model::element::Element;
use crate::model::story::{Animation, AnimationEffect, Direction, Page};

/// One animation applied to one element.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AnimationEntry<'p> {
    pub(crate) element: &'p Element,
    pub(crate) animation: &'p Animation,
}

impl AnimationEntry<'_> {
    /// DOM id of the wrapper the animation selects.
    pub(crate) fn target_id(&self) -> String {
        format!("anim-{}-{}", self.animation.id, self.element.id)
    }
}

/// Element-level animation entries of a page, ordered by paint order (background first) and then
/// by the page's animation list order.
///
/// Targets that are not on the page and effects this compiler does not know are skipped.
pub(crate) fn collect_entries(page: &Page) -> Vec<AnimationEntry<'_>> {
    let mut entries = Vec::new();
    for el in page.paint_order() {
        for anim in &page.animations {
            if anim.effect == AnimationEffect::Unknown {
                continue;
            }
            if anim.targets.iter().any(|t| *t == el.id) {
                entries.push(AnimationEntry {
                    element: el,
                    animation: anim,
                });
            }
        }
    }
    entries
}

/// Log the animations and targets [`collect_entries`] skips.
pub(crate) fn warn_skipped(page: &Page) {
    let on_page: HashSet<&str> = page.elements.iter().map(|e| e.id.as_str()).collect();
    for anim in &page.animations {
        if anim.effect == AnimationEffect::Unknown {
            tracing::warn!(page = %page.id, animation = %anim.id, "unknown animation effect skipped");
        }
        for target in anim.targets.iter().filter(|t| !on_page.contains(t.as_str())) {
            tracing::warn!(
                page = %page.id,
                animation = %anim.id,
                target = %target,
                "animation target is not on this page; skipped"
            );
        }
    }
}

/// Keyframes for an effect. `None` for effects without output.
pub(crate) fn keyframes(effect: &AnimationEffect) -> Option<Value> {
    let frames = match *effect {
        AnimationEffect::FadeIn => json!([{ "opacity": 0 }, { "opacity": 1 }]),
        AnimationEffect::FlyIn { direction } => {
            let from = match direction {
                Direction::Left => "translate3d(-100vw,0,0)",
                Direction::Right => "translate3d(100vw,0,0)",
                Direction::Top => "translate3d(0,-100vh,0)",
                Direction::Bottom => "translate3d(0,100vh,0)",
            };
            json!([{ "transform": from }, { "transform": "translate3d(0,0,0)" }])
        }
        AnimationEffect::Zoom { from, to } => json!([
            { "transform": format!("scale({})", finite_or(from, 0.0)) },
            { "transform": format!("scale({})", finite_or(to, 1.0)) }
        ]),
        AnimationEffect::Spin { rotation } => json!([
            { "transform": format!("rotate({}deg)", finite_or(rotation, 0.0)) },
            { "transform": "rotate(0deg)" }
        ]),
        AnimationEffect::Pulse { scale } => json!([
            { "transform": "scale(1)" },
            { "transform": format!("scale({})", finite_or(scale, 1.0)) },
            { "transform": "scale(1)" }
        ]),
        AnimationEffect::Unknown => return None,
    };
    Some(frames)
}

fn finite_or(v: f64, fallback: f64) -> String {
    crate::foundation::geometry::fmt_number(if v.is_finite() { v } else { fallback })
}

/// `<amp-story-animation>` node for one entry.
pub(crate) fn animation_node(entry: &AnimationEntry<'_>) -> Option<MarkupNode> {
    let frames = keyframes(&entry.animation.effect)?;
    let mut config = Map::new();
    config.insert(
        "selector".to_string(),
        Value::String(format!("#{}", entry.target_id())),
    );
    config.insert("keyframes".to_string(), frames);
    config.insert("duration".to_string(), json!(entry.animation.duration));
    config.insert("delay".to_string(), json!(entry.animation.delay));
    if let Some(easing) = &entry.animation.easing {
        config.insert("easing".to_string(), Value::String(easing.clone()));
    }
    config.insert("fill".to_string(), Value::String("both".to_string()));

    Some(
        MarkupNode::new("amp-story-animation")
            .attr("layout", "nodisplay")
            .attr("trigger", "visibility")
            .child(json_script(&Value::Object(config))),
    )
}

/// Inline JSON configuration script.
pub(crate) fn json_script(value: &Value) -> MarkupNode {
    // `</` must not appear inside a script body.
    let body = value.to_string().replace("</", "<\\/");
    MarkupNode::new("script")
        .attr("type", "application/json")
        .raw(body)
}

/// Wrap the contents of an element frame in one animation wrapper per entry targeting
/// `element_id`, first entry outermost. The frame itself keeps its position.
pub(crate) fn wrap_animated(
    frame: MarkupNode,
    element_id: &str,
    entries: &[AnimationEntry<'_>],
) -> MarkupNode {
    entries
        .iter()
        .filter(|e| e.element.id == element_id)
        .rev()
        .fold(frame, |frame, entry| {
            frame.wrap_contents(
                MarkupNode::new("div")
                    .attr("class", "animation-wrapper")
                    .attr("id", entry.target_id()),
            )
        })
}

#[cfg(test)]
#[path = "../../tests/unit/compile/animation.rs"]
mod tests;
