use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use rayon::prelude::*;

use crate::compile::animation::collect_entries;
use crate::compile::fingerprint::{DocumentFingerprint, fingerprint_markup};
use crate::compile::page::compile_page;
use crate::foundation::config::RenderArgs;
use crate::foundation::error::{StoryError, StoryResult};
use crate::markup::node::{MarkupNode, escape_attr, escape_text};
use crate::markup::style::{CssFillTranslator, FillTranslator};
use crate::model::element::ElementKind;
use crate::model::story::Story;
use crate::resource::resolve::{AddressClassifier, BlobUrlClassifier, ResourceResolver};
use crate::serialize::{RenderCtx, captions_id, frame_id, media_id};

const AMP_RUNTIME: &str = "https://cdn.ampproject.org/v0.js";

const AMP_BOILERPLATE: &str = "body{-webkit-animation:-amp-start 8s steps(1,end) 0s 1 normal both;-moz-animation:-amp-start 8s steps(1,end) 0s 1 normal both;-ms-animation:-amp-start 8s steps(1,end) 0s 1 normal both;animation:-amp-start 8s steps(1,end) 0s 1 normal both}@-webkit-keyframes -amp-start{from{visibility:hidden}to{visibility:visible}}@-moz-keyframes -amp-start{from{visibility:hidden}to{visibility:visible}}@-ms-keyframes -amp-start{from{visibility:hidden}to{visibility:visible}}@-o-keyframes -amp-start{from{visibility:hidden}to{visibility:visible}}@keyframes -amp-start{from{visibility:hidden}to{visibility:visible}}";

const AMP_BOILERPLATE_NOSCRIPT: &str =
    "body{-webkit-animation:none;-moz-animation:none;-ms-animation:none;animation:none}";

const GLOBAL_STYLES: &str = concat!(
    ".page-fullbleed-area,.page-background-overlay-area{position:absolute;overflow:hidden;",
    "width:100%;left:0;height:calc(1.1851851852 * 100%);top:calc((1 - 1.1851851852) * 100% / 2)}",
    ".page-safe-area{overflow:visible;position:absolute;top:0;bottom:0;left:0;right:0;",
    "width:100%;height:calc(0.8436018957 * 100%);margin:auto 0}",
    ".mask{position:absolute;overflow:hidden}",
    ".page-element,.animation-wrapper{position:absolute}",
    ".animation-wrapper{width:100%;height:100%;left:0;top:0}",
    ".mask,.page-element-link{width:100%;height:100%;left:0;top:0}",
    ".page-element-link{display:block}",
    ".text-wrapper{margin:0}",
    ".captions-area{padding:0 32px 64px}",
);

/// Version of each custom element script, keyed by extension name.
fn extension_version(name: &str) -> &'static str {
    match name {
        "amp-story" => "1.0",
        _ => "0.1",
    }
}

#[derive(Clone, Debug)]
/// A compiled story document.
pub struct Document {
    /// Complete markup text, starting with the doctype.
    pub markup: String,
    /// AMP extensions loaded by the document shell, sorted.
    pub extensions: Vec<String>,
    /// Number of pages emitted.
    pub page_count: usize,
}

impl Document {
    /// Stable digest of [`Document::markup`].
    pub fn fingerprint(&self) -> DocumentFingerprint {
        fingerprint_markup(&self.markup)
    }
}

#[derive(Clone, Copy)]
/// Story compiler with its injected collaborators.
///
/// Holds no state between calls; a single compiler may serve any number of concurrent
/// compilations.
pub struct StoryCompiler<'a> {
    classifier: &'a dyn AddressClassifier,
    fills: &'a dyn FillTranslator,
}

impl Default for StoryCompiler<'static> {
    fn default() -> Self {
        Self {
            classifier: &BlobUrlClassifier,
            fills: &CssFillTranslator,
        }
    }
}

impl std::fmt::Debug for StoryCompiler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryCompiler").finish_non_exhaustive()
    }
}

impl<'a> StoryCompiler<'a> {
    /// Compiler using a custom transient-address policy and fill translator.
    pub fn new(classifier: &'a dyn AddressClassifier, fills: &'a dyn FillTranslator) -> Self {
        Self { classifier, fills }
    }

    /// Compile `story` into a full document.
    ///
    /// The story is validated first. Any malformed-input error aborts the whole document; no
    /// partial markup is returned.
    #[tracing::instrument(skip_all, fields(pages = story.pages.len()))]
    pub fn compile(&self, story: &Story, args: &RenderArgs) -> StoryResult<Document> {
        story.validate()?;
        check_dom_ids(story)?;

        let ctx = RenderCtx {
            args,
            resolver: ResourceResolver::new(self.classifier),
            fills: self.fills,
        };

        let mut extensions = BTreeSet::from(["amp-story"]);
        let mut pages = Vec::with_capacity(story.pages.len());
        for page in &story.pages {
            let compiled = compile_page(page, story.page_size, &ctx)?;
            extensions.extend(compiled.extensions);
            pages.push(compiled.node.to_markup());
        }

        let meta = &story.metadata;
        let embeddable = |address: Option<&String>| {
            ctx.resolver
                .resolve_opt(address.map(|a| a.trim()))
                .filter(|a| !a.is_empty())
                .map(str::to_string)
        };
        let amp_story = MarkupNode::new("amp-story")
            .attr("standalone", "")
            .attr("title", meta.title.as_str())
            .attr_opt("publisher", meta.publisher.as_deref())
            .attr_opt("publisher-logo-src", embeddable(meta.publisher_logo.as_ref()))
            .attr_opt("poster-portrait-src", embeddable(meta.poster_portrait.as_ref()))
            .raw(pages.join("\n"));

        let lang = meta
            .language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or("en");

        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n");
        out.push_str(&format!("<html amp=\"\" lang=\"{}\">\n<head>\n", escape_attr(lang)));
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(
            "<meta name=\"viewport\" content=\"width=device-width,minimum-scale=1,initial-scale=1\">\n",
        );
        out.push_str(&format!("<script async=\"\" src=\"{AMP_RUNTIME}\"></script>\n"));
        for ext in &extensions {
            out.push_str(&format!(
                "<script async=\"\" custom-element=\"{ext}\" src=\"https://cdn.ampproject.org/v0/{ext}-{}.js\"></script>\n",
                extension_version(ext)
            ));
        }
        out.push_str(&format!("<title>{}</title>\n", escape_text(&meta.title)));
        if let Some(canonical) = embeddable(meta.canonical_url.as_ref()) {
            out.push_str(&format!(
                "<link rel=\"canonical\" href=\"{}\">\n",
                escape_attr(&canonical)
            ));
        }
        out.push_str(&format!(
            "<style amp-boilerplate=\"\">{AMP_BOILERPLATE}</style><noscript><style amp-boilerplate=\"\">{AMP_BOILERPLATE_NOSCRIPT}</style></noscript>\n"
        ));
        out.push_str(&format!("<style amp-custom=\"\">{GLOBAL_STYLES}</style>\n"));
        out.push_str("</head>\n<body>\n");
        amp_story.write_to(&mut out);
        out.push_str("\n</body>\n</html>\n");

        tracing::info!(
            pages = pages.len(),
            extensions = extensions.len(),
            bytes = out.len(),
            "compiled story"
        );
        Ok(Document {
            markup: out,
            extensions: extensions.into_iter().map(str::to_string).collect(),
            page_count: pages.len(),
        })
    }
}

/// Reject stories whose derived DOM ids collide. Ids are built by concatenation (`el-<id>`,
/// `anim-<animation>-<element>`), so distinct source ids can still produce the same DOM id.
fn check_dom_ids(story: &Story) -> StoryResult<()> {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut claim = |id: String, owner: String| match seen.entry(id) {
        Entry::Occupied(prev) => Err(StoryError::malformed(format!(
            "DOM id '{}' of {owner} collides with {}",
            prev.key(),
            prev.get()
        ))),
        Entry::Vacant(slot) => {
            slot.insert(owner);
            Ok(())
        }
    };
    for page in &story.pages {
        claim(page.id.clone(), format!("page '{}'", page.id))?;
        for el in &page.elements {
            let owner = format!("element '{}'", el.id);
            claim(frame_id(&el.id), owner.clone())?;
            match &el.kind {
                ElementKind::Video(_) => {
                    claim(media_id(&el.id), owner.clone())?;
                    claim(captions_id(&el.id), owner)?;
                }
                ElementKind::Gif(_) => claim(media_id(&el.id), owner)?,
                _ => {}
            }
        }
        for entry in collect_entries(page) {
            claim(
                entry.target_id(),
                format!("animation '{}' on element '{}'", entry.animation.id, entry.element.id),
            )?;
        }
    }
    Ok(())
}

/// Compile one story with the default address policy and fill translator.
pub fn compile_story(story: &Story, args: &RenderArgs) -> StoryResult<Document> {
    StoryCompiler::default().compile(story, args)
}

/// Compile independent stories in parallel. Results are returned in input order, and one
/// malformed story does not affect the others.
pub fn compile_stories(stories: &[Story], args: &RenderArgs) -> Vec<StoryResult<Document>> {
    let compiler = StoryCompiler::default();
    stories
        .par_iter()
        .map(|story| compiler.compile(story, args))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/compile/story.rs"]
mod tests;
