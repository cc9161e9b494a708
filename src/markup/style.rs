use crate::foundation::geometry::fmt_number;
use crate::model::fill::{Color, Fill, GradientKind};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Ordered inline CSS declarations.
pub struct Style {
    decls: Vec<(String, String)>,
}

impl Style {
    /// Empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration.
    pub fn decl(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.decls.push((property.into(), value.into()));
        self
    }

    /// Append a declaration when `value` is present.
    pub fn decl_opt(self, property: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.decl(property, v),
            None => self,
        }
    }

    /// Append several declarations in order.
    pub fn extend(mut self, decls: impl IntoIterator<Item = (String, String)>) -> Self {
        self.decls.extend(decls);
        self
    }

    /// No declarations.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// `property:value;property:value` form for a `style` attribute.
    pub fn to_css(&self) -> String {
        self.decls
            .iter()
            .map(|(p, v)| format!("{p}:{v}"))
            .collect::<Vec<_>>()
            .join(";")
    }
}

/// Translates a validated fill into concrete CSS declarations.
///
/// Image fills arrive with their address already resolved; an empty address yields no
/// declarations.
pub trait FillTranslator: Send + Sync {
    /// Declarations painting `fill`.
    fn declarations(&self, fill: &Fill) -> Vec<(String, String)>;
}

#[derive(Clone, Copy, Debug, Default)]
/// Background-based CSS rendering of fills.
pub struct CssFillTranslator;

impl FillTranslator for CssFillTranslator {
    fn declarations(&self, fill: &Fill) -> Vec<(String, String)> {
        match fill {
            Fill::Solid(c) => vec![("background-color".to_string(), css_color(c))],
            Fill::Gradient(g) => {
                let stops = g
                    .stops
                    .iter()
                    .map(|s| {
                        format!(
                            "{} {}%",
                            css_color(&s.color),
                            fmt_number(s.position.clamp(0.0, 1.0) * 100.0)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(",");
                let image = match g.kind {
                    GradientKind::Linear => {
                        format!("linear-gradient({}turn,{stops})", fmt_number(0.5 + g.rotation))
                    }
                    GradientKind::Radial => format!("radial-gradient({stops})"),
                };
                vec![("background-image".to_string(), image)]
            }
            Fill::Image(src) if src.is_empty() => vec![],
            Fill::Image(src) => vec![
                (
                    "background-image".to_string(),
                    format!("url(\"{}\")", src.replace('"', "%22")),
                ),
                ("background-size".to_string(), "cover".to_string()),
                ("background-position".to_string(), "center".to_string()),
            ],
        }
    }
}

/// CSS color: `#rrggbb` when opaque, `rgba(..)` otherwise.
pub fn css_color(c: &Color) -> String {
    if c.a >= 1.0 || !c.a.is_finite() {
        format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
    } else {
        format!(
            "rgba({},{},{},{})",
            c.r,
            c.g,
            c.b,
            fmt_number(c.a.max(0.0))
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/markup/style.rs"]
mod tests;
