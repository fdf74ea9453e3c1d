use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{DocumentExporter, ExportError, PrintableRegion};

/// Columns per line in the exported document.
pub const PAGE_WIDTH: usize = 80;
/// Lines per page before a form feed is emitted.
pub const PAGE_LINES: usize = 60;

const FORM_FEED: char = '\u{000C}';

/// Writes the region as plain text, wrapped and split into pages.
#[derive(Debug, Clone)]
pub struct PagedTextExporter {
    directory: PathBuf,
    file_name: String,
    width: usize,
    page_lines: usize,
}

impl PagedTextExporter {
    pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
            width: PAGE_WIDTH,
            page_lines: PAGE_LINES,
        }
    }

    #[must_use]
    pub fn with_page_size(mut self, width: usize, page_lines: usize) -> Self {
        self.width = width.max(1);
        self.page_lines = page_lines.max(1);
        self
    }

    #[must_use]
    pub fn target(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Lay out `region` as the full document text.
    #[must_use]
    pub fn layout(&self, region: &PrintableRegion) -> String {
        let mut lines = Vec::new();
        lines.push(region.heading.clone());
        lines.push("=".repeat(region.heading.width().min(self.width)));
        lines.push(String::new());
        lines.extend(wrap(&region.body, self.width));
        if let Some(source) = &region.source {
            lines.push(String::new());
            lines.extend(wrap(&format!("Source: {source}"), self.width));
        }
        paginate(&lines, self.page_lines)
    }
}

impl DocumentExporter for PagedTextExporter {
    fn export(&self, region: &PrintableRegion) -> Result<PathBuf, ExportError> {
        if region.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        let path = self.target();
        let document = self.layout(region);
        write_document(&path, &document).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), bytes = document.len(), "exported summary");
        Ok(path)
    }
}

fn write_document(path: &Path, document: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, document)
}

/// Greedy word wrap by display width. Blank lines are kept; words wider than
/// `width` are split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if line_width > 0 && line_width + 1 + word_width <= width {
                line.push(' ');
                line.push_str(word);
                line_width += 1 + word_width;
                continue;
            }
            if line_width > 0 {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if word_width <= width {
                line.push_str(word);
                line_width = word_width;
                continue;
            }
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if line_width + ch_width > width && line_width > 0 {
                    out.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += ch_width;
            }
        }

        out.push(line);
    }

    out
}

/// Join `lines` into pages of `page_lines`, separated by form feeds.
#[must_use]
pub fn paginate(lines: &[String], page_lines: usize) -> String {
    let page_lines = page_lines.max(1);
    let pages: Vec<String> = lines
        .chunks(page_lines)
        .map(|page| {
            let mut text = page.join("\n");
            text.push('\n');
            text
        })
        .collect();
    pages.join(&FORM_FEED.to_string())
}
