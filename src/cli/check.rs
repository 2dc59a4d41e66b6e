//! Content check command.
//!
//! Loads every board every page refers to and reports all failures at once,
//! grouped by page.

use std::collections::BTreeMap;
use std::fmt;

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use rayon::prelude::*;

use crate::config::SiteConfig;
use crate::content::FsContent;
use crate::log;
use crate::render::{check_page, referenced_boards};
use crate::utils::plural_count;

/// Problems found per page.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Page slug → error messages, sorted by slug.
    pub pages: BTreeMap<String, Vec<String>>,
    /// Pages checked.
    pub page_count: usize,
    /// Board references checked.
    pub board_count: usize,
    /// Failures caused by a malformed board file rather than a missing one.
    pub malformed_count: usize,
}

impl CheckReport {
    pub fn error_count(&self) -> usize {
        self.pages.values().map(Vec::len).sum()
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.pages.is_empty()
    }

    /// Print failures to stderr.
    pub fn print(&self) {
        for (page, errors) in &self.pages {
            eprintln!("{}{}{}", "[".dimmed(), page.cyan(), "]".dimmed());
            for error in errors {
                eprintln!("{} {}", "→".red(), error);
            }
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.error_count();
        if total == 0 {
            write!(f, "{}", "all boards load".green())
        } else {
            write!(
                f,
                "{} {} in {} ({} malformed)",
                "found".dimmed(),
                plural_count(total, "error").red().bold(),
                plural_count(self.pages.len(), "page"),
                self.malformed_count
            )
        }
    }
}

/// Check every page, including ones hidden from navigation.
pub fn check_site(config: &SiteConfig) -> Result<CheckReport> {
    let content = FsContent::new(config);
    let pages = content.list_pages()?;

    let results: Vec<_> = pages
        .par_iter()
        .map(|entry| {
            let slug = &entry.slug;
            match content.read_page(slug) {
                Ok(source) => {
                    let boards = referenced_boards(&source).len();
                    let failures = check_page(&source, slug, &content);
                    let malformed = failures.iter().filter(|e| e.is_malformed()).count();
                    let errors: Vec<String> = failures.iter().map(ToString::to_string).collect();
                    (slug.to_string(), boards, malformed, errors)
                }
                Err(e) => (slug.to_string(), 0, 0, vec![e.to_string()]),
            }
        })
        .collect();

    let mut report = CheckReport {
        page_count: pages.len(),
        ..CheckReport::default()
    };
    for (page, boards, malformed, errors) in results {
        report.board_count += boards;
        report.malformed_count += malformed;
        if !errors.is_empty() {
            report.pages.insert(page, errors);
        }
    }
    Ok(report)
}

/// Run `check`, failing when any board is missing or malformed.
pub fn run_check(config: &SiteConfig) -> Result<()> {
    let report = check_site(config)?;
    log!(
        "check";
        "checked {} with {}",
        plural_count(report.page_count, "page"),
        plural_count(report.board_count, "board reference")
    );

    if report.is_ok() {
        log!("check"; "{}", report);
        return Ok(());
    }

    report.print();
    bail!("{}", report);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_at;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_check_clean_site() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "content/Intro/page.txt", "[[BOARDS: a.txt, a.txt]]\n");
        write(dir.path(), "content/Intro/boards/a.txt", &"__________\n".repeat(20));

        let report = check_site(&test_config_at(dir.path(), "")).unwrap();
        assert!(report.is_ok());
        assert_eq!(report.page_count, 1);
        assert_eq!(report.board_count, 2);
    }

    #[test]
    fn test_check_reports_every_failure() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "content/Intro/page.txt",
            "[[BOARD: gone.txt]]\n[[BOARD: short.txt]]\n",
        );
        write(dir.path(), "content/Intro/boards/short.txt", &"__________\n".repeat(19));
        write(dir.path(), "content/Other/page.txt", "plain text\n");

        let report = check_site(&test_config_at(dir.path(), "")).unwrap();
        assert_eq!(report.page_count, 2);
        assert_eq!(report.error_count(), 2);
        assert_eq!(report.malformed_count, 1);

        let errors = &report.pages["Intro"];
        assert!(errors[0].contains("gone.txt"));
        assert!(errors[1].contains("short.txt"));
        assert!(!report.pages.contains_key("Other"));
    }

    #[test]
    fn test_run_check_fails_on_errors() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "content/Intro/page.txt", "[[BOARD: gone.txt]]\n");
        assert!(run_check(&test_config_at(dir.path(), "")).is_err());
    }
}
