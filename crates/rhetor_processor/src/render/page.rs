/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Standalone HTML pages for viewing fragments in a browser.

use rhetor_core::Fragment;

const PAGE_STYLE: &str = "    body { font-family: Calibri, sans-serif; font-size: 12pt; padding: 20px; }
    .card { margin-bottom: 1em; }";

const CARD_STYLE: &str = "    body { font-family: Arial, sans-serif; padding: 20px; }
    .card { margin-bottom: 40px; border-bottom: 1px solid #ccc; padding-bottom: 20px; }";

/// Render every fragment as a card on one page, in order.
pub fn render_page(fragments: &[Fragment], title: Option<&str>) -> String {
    let cards: Vec<String> = fragments.iter().map(Fragment::markup).collect();
    page(PAGE_STYLE, title, &cards)
}

/// Render a single markup string as a one-card page.
pub fn render_card(markup: &str) -> String {
    page(CARD_STYLE, None, &[markup.to_string()])
}

fn page(style: &str, title: Option<&str>, cards: &[String]) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n");
    if let Some(title) = title {
        out.push_str(&format!("  <title>{}</title>\n", escape(title)));
    }
    out.push_str(&format!("  <style>\n{}\n  </style>\n</head>\n<body>\n", style));
    for card in cards {
        out.push_str(&format!("<div class=\"card\">{}</div>\n", card));
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
