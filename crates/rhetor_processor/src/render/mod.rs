/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rendering of runs, paragraphs and fragment pages.

pub mod format;
pub mod html;
pub mod page;
pub mod plain;
pub mod run;

pub use page::{render_card, render_page};
pub use run::{render_paragraph, style_run};

use html::Html;
use rhetor_core::{Paragraph, Run};

/// Render a run as HTML markup.
pub fn style(run: &Run) -> String {
    style_run::<Html>(run)
}

/// Render a paragraph as HTML markup.
pub fn render(paragraph: &Paragraph) -> String {
    render_paragraph::<Html>(paragraph)
}
