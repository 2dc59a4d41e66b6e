//! View composition.

use std::fmt::Write;

use super::nav::{render_breadcrumb, render_sidebar};
use super::{Links, PageError};
use crate::config::SiteConfig;
use crate::content::{ContentError, FsContent, PageEntry, PageSlug, TreeNode, flatten, retain_pages};
use crate::embed::{css::GUIDE_CSS_NAME, layout};
use crate::render::outline::{Heading, anchor_headings};
use crate::render::{RenderError, check_page, convert};
use crate::utils::html::{escape, escape_attr};

/// Everything a view needs besides the page itself.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub site: &'a SiteConfig,
    pub content: FsContent<'a>,
    pub links: Links,
    tree: Vec<TreeNode>,
}

impl<'a> PageContext<'a> {
    /// Scan the content tree, leaving out broken pages when
    /// `content.hide_broken` is set.
    pub fn load(site: &'a SiteConfig, links: Links) -> Result<Self, ContentError> {
        let content = FsContent::new(site);
        let mut tree = content.tree()?;
        if site.content.hide_broken {
            retain_pages(&mut tree, &mut |entry: &PageEntry| is_healthy(&content, &entry.slug));
        }
        Ok(Self {
            site,
            content,
            links,
            tree,
        })
    }

    /// Same pages, different link style.
    pub fn with_links(&self, links: Links) -> Self {
        Self {
            links,
            ..self.clone()
        }
    }

    /// Navigable pages ordered by slug.
    pub fn visible_pages(&self) -> Vec<PageEntry> {
        let mut pages = flatten(&self.tree);
        pages.sort_by(|a, b| a.slug.cmp(&b.slug));
        pages
    }
}

/// A page reads and every board it references loads.
fn is_healthy(content: &FsContent<'_>, slug: &PageSlug) -> bool {
    content
        .read_page(slug)
        .is_ok_and(|source| check_page(&source, slug, content).is_empty())
}

/// Page source to article HTML with heading anchors.
///
/// Reader and editor views both call this, so the preview always matches
/// what readers see.
pub fn render_article(
    ctx: &PageContext<'_>,
    slug: &PageSlug,
    source: &str,
) -> Result<(String, Vec<Heading>), RenderError> {
    let html = convert(source, slug, &ctx.content)?;
    Ok(anchor_headings(&html))
}

/// Reader view of one page.
pub fn render_reader(ctx: &PageContext<'_>, slug: &PageSlug) -> Result<String, PageError> {
    let source = ctx.content.read_page(slug)?;
    let (article, headings) = render_article(ctx, slug, &source)?;
    let title = slug.title();

    let mut body = String::new();
    body.push_str(&render_breadcrumb(slug));
    let _ = write!(body, r#"<div class="article-title">{}</div>"#, escape(&title));
    if let Some(editor) = ctx.links.editor(slug) {
        let _ = write!(
            body,
            r#"<div class="article-actions"><a href="{}">View source</a></div>"#,
            escape_attr(&editor)
        );
    }
    let _ = write!(body, "\n<article class=\"article\">\n{article}</article>");

    Ok(shell(ctx, &title, "reader", Some(slug), &render_outline(&headings), &body))
}

/// Editor view: raw source, read-only, beside the rendered preview.
pub fn render_editor(ctx: &PageContext<'_>, slug: &PageSlug) -> Result<String, PageError> {
    let source = ctx.content.read_page(slug)?;
    let (article, _) = render_article(ctx, slug, &source)?;
    let title = slug.title();

    let mut body = String::new();
    body.push_str(&render_breadcrumb(slug));
    let _ = write!(
        body,
        r#"<div class="article-title">{}</div><div class="article-actions"><a href="{}">Back to page</a></div>"#,
        escape(&title),
        escape_attr(&ctx.links.page(slug))
    );
    // A newline right after <textarea> is dropped by parsers, keeping the
    // source's own first line intact.
    let _ = write!(
        body,
        "\n<div class=\"editor\">\n<textarea class=\"editor-source\" readonly spellcheck=\"false\">\n{}</textarea>\n<div class=\"editor-preview\">\n<article class=\"article\">\n{article}</article>\n</div>\n</div>",
        escape(&source)
    );

    Ok(shell(ctx, &format!("Source: {title}"), "editor", Some(slug), "", &body))
}

/// Landing page listing every navigable page.
pub fn render_index(ctx: &PageContext<'_>) -> String {
    let pages = ctx.visible_pages();
    let mut body = format!(
        r#"<div class="article-title">{}</div>"#,
        escape(&ctx.site.site.title)
    );

    if pages.is_empty() {
        body.push_str(r#"<p class="empty">No pages yet.</p>"#);
    } else {
        body.push_str(r#"<ul class="page-list">"#);
        for entry in &pages {
            let _ = write!(
                body,
                r#"<li><a href="{}">{}</a><span class="page-slug">{}"#,
                escape_attr(&ctx.links.page(&entry.slug)),
                escape(&entry.title),
                escape(entry.slug.as_str())
            );
            if let Some(editor) = ctx.links.editor(&entry.slug) {
                let _ = write!(body, r#" · <a href="{}">source</a>"#, escape_attr(&editor));
            }
            body.push_str("</span></li>");
        }
        body.push_str("</ul>");
    }

    shell(ctx, "", "index", None, "", &body)
}

/// Error page naming what went wrong; never contains partial page output.
pub fn render_error(ctx: &PageContext<'_>, heading: &str, detail: &str) -> String {
    let body = format!(
        r#"<div class="error-page"><div class="article-title">{}</div><pre>{}</pre></div>"#,
        escape(heading),
        escape(detail)
    );
    shell(ctx, heading, "error", None, "", &body)
}

/// "On this page" box; empty when the page has no headings.
fn render_outline(headings: &[Heading]) -> String {
    if headings.is_empty() {
        return String::new();
    }

    let mut html =
        String::from(r#"<nav class="outline"><div class="outline-title">On this page</div><ul>"#);
    for heading in headings {
        let _ = write!(
            html,
            r##"<li class="level-{}"><a href="#{}">{}</a></li>"##,
            heading.level,
            heading.id,
            escape(&heading.text)
        );
    }
    html.push_str("</ul></nav>");
    html
}

fn shell(
    ctx: &PageContext<'_>,
    title: &str,
    body_class: &str,
    current: Option<&PageSlug>,
    outline: &str,
    body: &str,
) -> String {
    let site = &ctx.site.site;
    let full_title = if title.is_empty() {
        escape(&site.title).into_owned()
    } else {
        format!("{} | {}", escape(title), escape(&site.title))
    };

    let home = ctx.links.home();
    let stylesheet = ctx.links.static_file(GUIDE_CSS_NAME);
    let sidebar = render_sidebar(&ctx.tree, &ctx.links, current);
    let footer = footer_html(ctx.site);

    layout::render(&layout::LayoutVars {
        title: &full_title,
        site_title: &escape(&site.title),
        home: &escape_attr(&home),
        stylesheet: &escape_attr(&stylesheet),
        body_class,
        sidebar: &sidebar,
        outline,
        footer: &footer,
        body,
    })
}

fn footer_html(site: &SiteConfig) -> String {
    let section = &site.site;
    if !section.footer.is_empty() {
        return section.footer.clone();
    }
    if section.author.is_empty() {
        escape(&section.title).into_owned()
    } else {
        format!("{} · {}", escape(&section.title), escape(&section.author))
    }
}
