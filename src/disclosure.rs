//! Progressive disclosure for long text.
//!
//! A [`Disclosure`] truncates a text value to a character limit until the user
//! expands it. [`SnippetDisclosure`] layers a one-line preview on top of that
//! for per-result snippets: preview, then a block of up to the snippet limit.
//! Both are pure functions of their input text plus their own toggle state.

use std::borrow::Cow;
use std::num::NonZeroUsize;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "…";

/// Default character limit for the combined summary block.
pub const SUMMARY_LIMIT: NonZeroUsize = NonZeroUsize::new(500).unwrap();

/// Character limit applied once a result snippet has been expanded.
pub const SNIPPET_LIMIT: NonZeroUsize = NonZeroUsize::new(1000).unwrap();

/// Default number of characters shown by a collapsed snippet preview.
pub const SNIPPET_PREVIEW_CHARS: NonZeroUsize = NonZeroUsize::new(120).unwrap();

pub const READ_MORE: &str = "Read more";
pub const SHOW_LESS: &str = "Show less";
pub const SHOW_MORE: &str = "Show more";

/// Output of [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered<'a> {
    pub display_text: Cow<'a, str>,
    pub is_truncatable: bool,
}

/// Apply the truncation rule to `text`.
///
/// Returns `None` for empty text: nothing is rendered at all, not even a
/// container. Text longer than `limit` characters is cut to its first `limit`
/// characters followed by [`ELLIPSIS`] unless `expanded` is set.
#[must_use]
pub fn render(text: &str, limit: NonZeroUsize, expanded: bool) -> Option<Rendered<'_>> {
    if text.is_empty() {
        return None;
    }

    let limit = limit.get();
    let cut = text.char_indices().nth(limit).map(|(offset, _)| offset);
    let is_truncatable = cut.is_some();
    let display_text = match cut {
        Some(offset) if !expanded => {
            let mut truncated = String::with_capacity(offset + ELLIPSIS.len());
            truncated.push_str(&text[..offset]);
            truncated.push_str(ELLIPSIS);
            Cow::Owned(truncated)
        }
        _ => Cow::Borrowed(text),
    };

    Some(Rendered {
        display_text,
        is_truncatable,
    })
}

/// Block-mode rendering: the visible text plus the toggle label, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockView<'a> {
    pub text: Cow<'a, str>,
    pub toggle_label: Option<&'static str>,
}

/// Expand/collapse state for a single text value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    expanded: bool,
}

impl Disclosure {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    #[must_use]
    pub fn render<'a>(&self, text: &'a str, limit: NonZeroUsize) -> Option<Rendered<'a>> {
        render(text, limit, self.expanded)
    }

    /// Render in block mode with "Read more" / "Show less" labels.
    #[must_use]
    pub fn block<'a>(&self, text: &'a str, limit: NonZeroUsize) -> Option<BlockView<'a>> {
        let rendered = self.render(text, limit)?;
        let toggle_label = rendered
            .is_truncatable
            .then_some(if self.expanded { SHOW_LESS } else { READ_MORE });
        Some(BlockView {
            text: rendered.display_text,
            toggle_label,
        })
    }

    /// Flip between collapsed and expanded.
    ///
    /// Has no effect when `text` fits within `limit`, since no control is shown
    /// in that case. Returns whether the state changed.
    pub fn toggle(&mut self, text: &str, limit: NonZeroUsize) -> bool {
        let truncatable = render(text, limit, false).is_some_and(|r| r.is_truncatable);
        if truncatable {
            self.expanded = !self.expanded;
        }
        truncatable
    }

    pub fn reset(&mut self) {
        self.expanded = false;
    }
}

/// Rendering of a snippet in either of its two levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetView<'a> {
    /// Single-line preview. `show_more` is set when the text does not fit.
    Preview { line: Cow<'a, str>, show_more: bool },
    /// Block rendering with the snippet limit, plus the collapse affordance.
    Expanded {
        block: BlockView<'a>,
        show_less: &'static str,
    },
}

/// Two-level disclosure used for result descriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnippetDisclosure {
    expanded: bool,
    detail: Disclosure,
}

impl SnippetDisclosure {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether `text` is fully visible as a one-line preview.
    #[must_use]
    pub fn fits_inline(text: &str, preview_chars: NonZeroUsize) -> bool {
        let text = text.trim_end();
        !text.contains('\n') && text.chars().count() <= preview_chars.get()
    }

    #[must_use]
    pub fn render<'a>(
        &self,
        text: &'a str,
        preview_chars: NonZeroUsize,
        limit: NonZeroUsize,
    ) -> Option<SnippetView<'a>> {
        if text.is_empty() {
            return None;
        }

        if self.expanded {
            let block = self.detail.block(text, limit)?;
            return Some(SnippetView::Expanded {
                block,
                show_less: SHOW_LESS,
            });
        }

        let first_line = text.lines().next().unwrap_or_default();
        let multiline = first_line.len() < text.trim_end().len();
        let line = match render(first_line, preview_chars, false) {
            Some(rendered) if !rendered.is_truncatable && multiline => {
                Cow::Owned(format!("{first_line}{ELLIPSIS}"))
            }
            Some(rendered) => rendered.display_text,
            None => Cow::Borrowed(ELLIPSIS),
        };

        Some(SnippetView::Preview {
            line,
            show_more: !Self::fits_inline(text, preview_chars),
        })
    }

    /// Switch between the one-line preview and the expanded block.
    ///
    /// Collapsing always returns to the preview and forgets the nested block
    /// state. Expanding is a no-op when the text already fits on one line.
    pub fn toggle(&mut self, text: &str, preview_chars: NonZeroUsize) -> bool {
        if self.expanded {
            self.expanded = false;
            self.detail.reset();
            return true;
        }
        if text.is_empty() || Self::fits_inline(text, preview_chars) {
            return false;
        }
        self.expanded = true;
        true
    }

    /// Toggle the nested block truncation; only meaningful while expanded.
    pub fn toggle_detail(&mut self, text: &str, limit: NonZeroUsize) -> bool {
        self.expanded && self.detail.toggle(text, limit)
    }
}
