/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Extracted citation fragments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One citation with its optional lead-in tag and collected body text.
///
/// The parts hold already-formatted markup. [`Fragment::markup`] joins them
/// as `tag + " " + label + ": " + body` and trims the result.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Fragment {
    pub tag: String,
    pub label: String,
    pub body: String,
}

impl Fragment {
    pub fn new(tag: String, label: String, body: String) -> Self {
        Self { tag, label, body }
    }

    /// The display markup for this fragment.
    pub fn markup(&self) -> String {
        format!("{} {}: {}", self.tag, self.label, self.body)
            .trim()
            .to_string()
    }

    pub fn has_tag(&self) -> bool {
        !self.tag.is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup())
    }
}
