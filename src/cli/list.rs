//! Page listing command.

use anyhow::Result;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::PageEntry;
use crate::page::{Links, PageContext};

/// One row of `list --json`.
#[derive(Debug, Serialize)]
struct ListedPage<'a> {
    slug: String,
    title: &'a str,
    url: String,
}

/// Print visible pages as `slug  title` lines or JSON.
pub fn list_pages(config: &SiteConfig, json: bool, pretty: bool) -> Result<()> {
    let ctx = PageContext::load(config, Links::serve())?;
    let pages = ctx.visible_pages();

    let output = if json {
        format_json(&ctx.links, &pages, pretty)?
    } else {
        format_text(&pages)
    };
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn format_text(pages: &[PageEntry]) -> String {
    let width = pages.iter().map(|p| p.slug.as_str().len()).max().unwrap_or(0);
    pages
        .iter()
        .map(|p| format!("{:<width$}  {}", p.slug.as_str(), p.title))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_json(links: &Links, pages: &[PageEntry], pretty: bool) -> Result<String> {
    let rows: Vec<ListedPage<'_>> = pages
        .iter()
        .map(|p| ListedPage {
            slug: p.slug.to_string(),
            title: &p.title,
            url: links.page(&p.slug),
        })
        .collect();

    let formatted = if pretty {
        serde_json::to_string_pretty(&rows)?
    } else {
        serde_json::to_string(&rows)?
    };
    Ok(formatted)
}
