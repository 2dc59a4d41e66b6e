//! Static export.
//!
//! Phases:
//! - **Prepare** - clear the output directory
//! - **Pages** - reader view for the index and every page (parallel)
//! - **Static** - copy the project's static dir, then embedded assets
//!
//! Any render failure aborts the export; pages are never written half done.

use crate::{
    config::SiteConfig,
    content::PageEntry,
    embed::write_embedded_assets,
    log,
    logger::ProgressLine,
    page::{self, Links, PageContext, STATIC_PREFIX},
    utils::plural_count,
};
use anyhow::{Context, Result, bail};
use jwalk::WalkDir;
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// File written for every exported route.
const INDEX_FILE: &str = "index.html";

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Export every visible page as static HTML into `export.output`.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let output = config.export.output.as_path();
    let base_url = config.export.base_url.as_deref();

    prepare_output(config, output)?;

    let ctx = PageContext::load(config, Links::export(base_url, 0))
        .context("Failed to scan content")?;
    let pages = ctx.visible_pages();
    let static_files = collect_static_files(&config.content.static_dir);

    let progress = ProgressLine::new(
        "build",
        &[("pages", pages.len() + 1), ("static", static_files.len())],
    );

    write_file(&output.join(INDEX_FILE), &page::render_index(&ctx))?;
    progress.inc("pages");

    pages.par_iter().try_for_each(|entry| {
        export_page(&ctx, output, base_url, entry)?;
        progress.inc("pages");
        Ok::<_, anyhow::Error>(())
    })?;

    let static_out = output.join(STATIC_PREFIX);
    static_files.par_iter().try_for_each(|path| {
        copy_static_file(&config.content.static_dir, &static_out, path)?;
        progress.inc("static");
        Ok::<_, anyhow::Error>(())
    })?;
    write_embedded_assets(&static_out)?;

    progress.finish();
    log!(
        "build";
        "exported {} to {}",
        plural_count(pages.len(), "page"),
        config.root_relative(output).display()
    );
    Ok(())
}

/// Remove a previous export, refusing directories that hold project files.
fn prepare_output(config: &SiteConfig, output: &Path) -> Result<()> {
    let protected = [
        config.get_root(),
        config.content.dir.as_path(),
        config.content.static_dir.as_path(),
    ];
    if protected.iter().any(|dir| dir.starts_with(output)) {
        bail!(
            "Refusing to export into {}: it contains the project, content or static directory",
            output.display()
        );
    }

    if output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

/// Render one page's reader view to `<slug>/index.html`.
fn export_page(
    ctx: &PageContext<'_>,
    output: &Path,
    base_url: Option<&str>,
    entry: &PageEntry,
) -> Result<()> {
    let slug = &entry.slug;
    let page_ctx = ctx.with_links(Links::export(base_url, slug.depth()));
    let html = page::render_reader(&page_ctx, slug)
        .with_context(|| format!("Failed to render page `{slug}`"))?;

    let dir = slug.segments().fold(output.to_path_buf(), |dir, s| dir.join(s));
    write_file(&dir.join(INDEX_FILE), &html)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// All files below the static dir; empty when it does not exist.
fn collect_static_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .collect()
}

fn copy_static_file(static_dir: &Path, static_out: &Path, path: &Path) -> Result<()> {
    let rel = path
        .strip_prefix(static_dir)
        .with_context(|| format!("{} is outside the static directory", path.display()))?;
    let dest = static_out.join(rel);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::copy(path, &dest)
        .with_context(|| format!("Failed to copy {} to {}", path.display(), dest.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_at;
    use tempfile::TempDir;

    const BOARD_ROW: &str = "__________\n";

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn empty_board() -> String {
        BOARD_ROW.repeat(20)
    }

    fn site(root: &Path, extra: &str) -> SiteConfig {
        write(root, "content/Basics/Intro/page.txt", "Hello\n---\n[[BOARD: start.txt]]\n");
        write(root, "content/Basics/Intro/boards/start.txt", &empty_board());
        write(root, "content/Overview/page.txt", "<div class=\"h1\">Overview</div>\n");
        write(root, "static/img/logo.png", "png");
        test_config_at(root, extra)
    }

    #[test]
    fn test_build_writes_pages_and_assets() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path(), "");
        build_site(&config).unwrap();

        let output = &config.export.output;
        assert!(output.join("index.html").is_file());
        assert!(output.join("static/img/logo.png").is_file());
        assert!(output.join("static/guide.css").is_file());

        let intro = fs::read_to_string(output.join("Basics/Intro/index.html")).unwrap();
        assert!(intro.contains(r#"class="tetris-board""#));
        assert!(intro.contains(r#"href="../../static/guide.css""#));
        assert!(!intro.contains("/editor/"));

        let index = fs::read_to_string(output.join("index.html")).unwrap();
        assert!(index.contains("Overview/index.html"));
    }

    #[test]
    fn test_build_aborts_on_missing_board() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path(), "[content]\nhide_broken = false\n");
        write(dir.path(), "content/Broken/page.txt", "[[BOARD: nope.txt]]\n");

        let err = build_site(&config).unwrap_err();
        assert!(format!("{err:#}").contains("Broken"));
    }

    #[test]
    fn test_build_skips_hidden_broken_page() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path(), "");
        write(dir.path(), "content/Broken/page.txt", "[[BOARD: nope.txt]]\n");

        build_site(&config).unwrap();
        assert!(!config.export.output.join("Broken").exists());
    }

    #[test]
    fn test_build_clears_previous_output() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path(), "");
        write(&config.export.output, "stale.html", "old");

        build_site(&config).unwrap();
        assert!(!config.export.output.join("stale.html").exists());
    }

    #[test]
    fn test_build_refuses_project_root() {
        let dir = TempDir::new().unwrap();
        let mut config = site(dir.path(), "");
        config.export.output = config.get_root().to_path_buf();

        assert!(build_site(&config).is_err());
        assert!(dir.path().join("content/Overview/page.txt").exists());
    }

    #[test]
    fn test_build_refuses_static_dir() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path(), "[export]\noutput = \"static\"");

        assert!(config.validate().is_err());
        assert!(build_site(&config).is_err());
        assert!(dir.path().join("static/img/logo.png").is_file());
    }
}
