/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Plain text output format.

use super::format::OutputFormat;

#[derive(Default, Clone)]
pub struct PlainText;

impl OutputFormat for PlainText {
    type Output = String;

    fn text(&self, s: &str) -> Self::Output {
        s.to_string()
    }

    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output {
        items.join(delimiter)
    }

    fn finish(&self, output: Self::Output) -> String {
        output
    }

    fn strong(&self, content: Self::Output) -> Self::Output {
        content
    }

    fn underline(&self, content: Self::Output) -> Self::Output {
        content
    }

    fn mark(&self, content: Self::Output) -> Self::Output {
        content
    }

    fn font_size(&self, _size_pt: f32, content: Self::Output) -> Self::Output {
        content
    }
}
