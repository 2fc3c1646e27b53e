/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for pluggable renderers.

/// Trait for defining how styled runs are rendered into a specific format.
///
/// Implementations translate the four supported inline effects (strong,
/// underline, highlight, font size) into markup or leave the text alone.
pub trait OutputFormat: Default + Clone {
    /// The type used for intermediate rendered content.
    type Output;

    /// Convert a raw string into the format's output type.
    fn text(&self, s: &str) -> Self::Output;

    /// Join multiple outputs into a single output using a delimiter.
    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output;

    /// Convert the intermediate output into the final result string.
    fn finish(&self, output: Self::Output) -> String;

    /// Render content with strong emphasis (typically bold).
    fn strong(&self, content: Self::Output) -> Self::Output;

    /// Render underlined content.
    fn underline(&self, content: Self::Output) -> Self::Output;

    /// Render highlighted content.
    fn mark(&self, content: Self::Output) -> Self::Output;

    /// Render content at an explicit point size.
    fn font_size(&self, size_pt: f32, content: Self::Output) -> Self::Output;
}
