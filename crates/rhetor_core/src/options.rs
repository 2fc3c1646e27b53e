/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Extraction options.
//!
//! Every field has a default, so a configuration file only needs to name the
//! values it changes.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Top-level extraction configuration.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case", default)]
pub struct ExtractorConfig {
    /// Citation detection heuristics.
    pub citation: CitationOptions,
    /// Context tag detection heuristics.
    pub tag: TagOptions,
}

impl ExtractorConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// Settings for scoring a paragraph as a citation.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case", default)]
pub struct CitationOptions {
    /// Substrings that mark a paragraph as a citation outright.
    pub url_markers: Vec<String>,
    /// Case-sensitive keywords; any match adds one point.
    pub keywords: Vec<String>,
    /// Points needed when no URL marker is present.
    pub min_score: u8,
}

impl Default for CitationOptions {
    fn default() -> Self {
        Self {
            url_markers: ["http://", "https://", "www."]
                .into_iter()
                .map(String::from)
                .collect(),
            keywords: [
                "professor",
                "journal",
                "researcher",
                "university",
                "institute",
                "PhD",
                "published",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            min_score: 2,
        }
    }
}

/// Settings for recognizing a context tag.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case", default)]
pub struct TagOptions {
    /// Tags must be strictly shorter than this many characters.
    pub max_length: usize,
    /// Runs at or below this point size disqualify a tag.
    pub min_size_pt: f32,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self {
            max_length: 500,
            min_size_pt: 10.0,
        }
    }
}
