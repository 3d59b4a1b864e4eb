//! HTML report rendering
//!
//! Composes all per-page heading trees and the validation summary into one
//! self-contained HTML document: a toggle button per page plus a Report
//! button, one hidden content block per page, and a summary list coloring
//! each page by its aggregate error status. Exactly one content block is
//! visible at a time; re-toggling the visible one hides it.

use crate::outline::{build_tree, HeadingNode, PageResult};
use chrono::Utc;
use html_escape::encode_safe;
use url::Url;

const STYLE: &str = r#"
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 20px;
        }
        .button-container {
            margin-bottom: 20px;
        }
        .button-container button {
            padding: 10px 20px;
            margin-right: 10px;
            margin-bottom: 10px;
            border: none;
            background-color: #007BFF;
            color: white;
            cursor: pointer;
            border-radius: 4px;
            transition: background-color 0.3s;
        }
        .button-container button:hover {
            background-color: #0056b3;
        }
        .content {
            display: none;
            margin-top: 20px;
        }
        .active {
            display: block;
        }
        .ok {
            color: green;
        }
        .error {
            color: red;
        }
        .heading {
            margin: 5px 0;
        }
        .heading.level-1 { margin-left: 0px; }
        .heading.level-2 { margin-left: 20px; }
        .heading.level-3 { margin-left: 40px; }
        .heading.level-4 { margin-left: 60px; }
        .heading.level-5 { margin-left: 80px; }
        .heading.level-6 { margin-left: 100px; }
        .report-item.ok {
            color: green;
            margin: 5px 0;
        }
        .report-item.error {
            color: red;
            margin: 5px 0;
        }
        footer {
            margin-top: 40px;
            color: #888;
            font-size: 0.8em;
        }
    </style>
"#;

const SCRIPT: &str = r#"
<script>
    function toggleContent(id) {
        var content = document.getElementById(id);
        if (content.classList.contains('active')) {
            content.classList.remove('active');
        } else {
            var contents = document.getElementsByClassName('content');
            for (var i = 0; i < contents.length; i++) {
                contents[i].classList.remove('active');
            }
            content.classList.add('active');
        }
    }
</script>
"#;

/// Renders the combined heading-structure report for all crawled pages.
///
/// Every user-supplied string (page titles, heading text, button labels) is
/// HTML-escaped before embedding. Pages without headings get an explicit
/// "No headings found." placeholder.
pub fn render_report(pages: &[PageResult]) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n");
    out.push_str("<title>Heading Structures</title>\n");
    out.push_str(STYLE);
    out.push_str("</head>\n<body>\n");
    out.push_str("<h1>Heading Structures</h1>\n");

    // Toggle buttons: one per page, plus the Report toggle
    out.push_str("<div class=\"button-container\">\n");
    for (idx, page) in pages.iter().enumerate() {
        out.push_str(&format!(
            "  <button type=\"button\" onclick=\"toggleContent('page{}')\">{}</button>\n",
            idx,
            encode_safe(&page_label(&page.url))
        ));
    }
    out.push_str("  <button type=\"button\" onclick=\"toggleContent('report')\">Report</button>\n");
    out.push_str("</div>\n");

    // Content blocks, collecting per-page render-time error flags as we go
    let mut render_errors = Vec::with_capacity(pages.len());
    for (idx, page) in pages.iter().enumerate() {
        out.push_str(&format!("<div id=\"page{}\" class=\"content\">\n", idx));
        out.push_str(&format!("  <h2>{}</h2>\n", encode_safe(&page.title)));
        out.push_str("  <div>\n");

        let errors_found = if page.headings.is_empty() {
            out.push_str("    <p>No headings found.</p>\n");
            false
        } else {
            let tree = build_tree(&page.headings);
            render_tree(&tree, &mut out)
        };
        render_errors.push(errors_found);

        out.push_str("  </div>\n");
        out.push_str("</div>\n");
    }

    // Summary: each page colored by its aggregate error status
    out.push_str("<div id=\"report\" class=\"content\">\n");
    out.push_str("  <h2>Report</h2>\n  <div>\n    <ul>\n");
    for (page, render_error) in pages.iter().zip(&render_errors) {
        let css_class = if page.structural_error || *render_error {
            "error"
        } else {
            "ok"
        };
        out.push_str(&format!(
            "      <li class=\"report-item {}\">{}</li>\n",
            css_class,
            encode_safe(&page_label(&page.url))
        ));
    }
    out.push_str("    </ul>\n  </div>\n</div>\n");

    out.push_str(&format!(
        "<footer><p>Generated by site-outliner at {}</p></footer>\n",
        Utc::now().to_rfc3339()
    ));
    out.push_str(SCRIPT);
    out.push_str("</body>\n</html>\n");

    out
}

/// Renders one page's heading tree, classifying each node at render time.
///
/// A node is `ok` only when its level is exactly its parent's level plus
/// one; anything else is `error`. This check is independent of both the
/// tree builder (which accepts everything) and the sequence validator
/// (which only flags upward skips).
///
/// The walk is iterative with an explicit work stack so deep or malformed
/// heading sequences cannot exhaust the call stack. Returns true when any
/// node was classified as an error.
fn render_tree(root: &HeadingNode, out: &mut String) -> bool {
    let mut errors_found = false;

    // Children are pushed in reverse so they pop in document order.
    let mut work: Vec<(&HeadingNode, u8, usize)> = Vec::new();
    for child in root.children.iter().rev() {
        work.push((child, root.level, 4));
    }

    while let Some((node, parent_level, indent)) = work.pop() {
        let css_class = if node.level == parent_level + 1 {
            "ok"
        } else {
            errors_found = true;
            "error"
        };

        out.push_str(&format!(
            "{:indent$}<p class=\"heading {} level-{}\">h{} - {}</p>\n",
            "",
            css_class,
            node.level,
            node.level,
            encode_safe(&node.title),
            indent = indent
        ));

        for child in node.children.iter().rev() {
            work.push((child, node.level, indent + 2));
        }
    }

    errors_found
}

/// Label for a page's toggle button and report line: the last non-empty
/// path segment of its URL, or "home" for the site root.
fn page_label(url: &str) -> String {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.to_string(),
    };

    path.trim_matches('/')
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "home".to_string())
}
