//! The ordered rule set applied to every page.
//!
//! The sequence is the union of the historical fix passes, ordered so that
//! the whole set is idempotent: strips run before the inserts that own the
//! stripped blocks, and the trailing-log strip runs before the script block
//! is inserted ahead of `</body>`. The block strips match only the lines
//! this tool emits, so re-running never absorbs a neighboring hand-written
//! reference line.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::{Page, RelinkConfig};

use super::rule::{Anchor, Rule};

/// Marker comment opening the inserted stylesheet block.
pub const STYLE_MARKER: &str = "<!-- Extracted & Organized CSS Files -->";

/// Marker comment opening the inserted script block.
pub const SCRIPT_MARKER: &str = "<!-- Extracted JavaScript Files -->";

/// Marker comment guarding the converted inline script from the inline
/// strip rule on later runs.
pub const INLINE_MARKER: &str = "<!-- Inline JavaScript -->";

/// Non-src inline `<script>` block, with leading blank space. The trailing
/// newline stays unconsumed: it is the leading newline of whatever follows,
/// including an immediately adjacent inline script.
static INLINE_SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\n[ \t\r\n]*<script>.*?</script>").unwrap());

/// Any `<base href="...">` tag.
static BASE_HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<base href="[^"]*">"#).unwrap());

/// Trailing debug log statement immediately before `</body>`.
static TRAILING_LOG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)console\.log\('\[.*?\].*?'\);[ \t\r\n]*</body>").unwrap());

/// Inline module-script opener with the known import statement.
static MODULE_SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"<script type="module">[ \t\r\n]*// Import Supabase client[ \t\r\n]*"#,
        r#"import \{ supabase, getCurrentUser, getUserOrganization, getUserUnits \} "#,
        r#"from '\./lib/supabase-client\.js'"#,
    ))
    .unwrap()
});

/// Replacement opener for converted module scripts. Starts with
/// [`INLINE_MARKER`] so the inline strip rule leaves it alone.
const MODULE_SCRIPT_REPLACEMENT: &str = "<!-- Inline JavaScript -->\n\t<script>\n\t\t// Note: External JS files are loaded after this one\n\t\t// Error tracking";

/// Duplicated header close/open pair produced by an earlier buggy run.
const DUPLICATE_HEADER: &str = "</head>\n<body>\n</head>\n<body>";

/// Build the ordered rule list for one page.
pub fn page_rules(config: &RelinkConfig, page: &Page) -> Vec<Rule> {
    let mut rules = Vec::with_capacity(8);

    // 1. Strip stale non-src inline scripts. Converted inline scripts are
    //    guarded by their marker comment.
    rules.push(Rule::Strip {
        pattern: INLINE_SCRIPT_RE.clone(),
        replacement: String::new(),
        unless_after: Some(INLINE_MARKER),
    });

    // 2. Collapse the duplicated </head><body> pair.
    rules.push(Rule::Literal {
        from: DUPLICATE_HEADER.to_string(),
        to: "</head>\n<body>".to_string(),
    });

    // 3. Normalize the base href.
    rules.push(Rule::Subst {
        pattern: BASE_HREF_RE.clone(),
        replacement: format!(r#"<base href="{}">"#, config.site.base),
    });

    // 4. Drop the trailing console.log before </body>; the script block
    //    insert below owns that spot.
    rules.push(Rule::Subst {
        pattern: TRAILING_LOG_RE.clone(),
        replacement: "</body>".to_string(),
    });

    // 5. Convert the inline module script to a plain inline script.
    rules.push(Rule::Subst {
        pattern: MODULE_SCRIPT_RE.clone(),
        replacement: MODULE_SCRIPT_REPLACEMENT.to_string(),
    });

    // 6. Stylesheet block after the head anchor.
    let hrefs = style_hrefs(config, page);
    if !hrefs.is_empty() {
        rules.push(Rule::Insert {
            strip: style_strip(&hrefs),
            anchor: Anchor::After(config.assets.style_anchor.clone()),
            block: style_block(&hrefs),
        });
    }

    // 7. Script block before </body>.
    let srcs = &config.assets.scripts;
    if !srcs.is_empty() {
        rules.push(Rule::Insert {
            strip: script_strip(srcs),
            anchor: Anchor::Before("</body>".to_string()),
            block: script_block(srcs),
        });
    }

    // 8. Replace the stale base-path literal everywhere.
    if !config.site.old_base.is_empty() && config.site.old_base != config.site.base {
        rules.push(Rule::Literal {
            from: config.site.old_base.clone(),
            to: config.site.base.clone(),
        });
    }

    rules
}

/// Stylesheet hrefs in insertion order: the shared stylesheets, then the
/// page-specific one.
fn style_hrefs(config: &RelinkConfig, page: &Page) -> Vec<String> {
    let mut hrefs = config.assets.styles.clone();
    if let Some(sheet) = &page.stylesheet {
        hrefs.push(format!("css/{sheet}.css"));
    }
    hrefs
}

/// Render the stylesheet block: marker line plus one `<link>` per href.
/// Leading newline, no trailing newline (the anchor's original line break
/// follows it).
fn style_block(hrefs: &[String]) -> String {
    let links: Vec<String> = hrefs
        .iter()
        .map(|href| format!("\t<link rel=\"stylesheet\" href=\"{href}\">"))
        .collect();
    format!("\n\t{STYLE_MARKER}\n{}", links.join("\n"))
}

/// Strip pattern for a previously inserted stylesheet block: the marker
/// line plus a run of the exact `<link>` lines [`style_block`] emits. A
/// hand-written link line sitting below the block never matches.
fn style_strip(hrefs: &[String]) -> Regex {
    Regex::new(&format!(
        r#"\t{}\n(\t<link rel="stylesheet" href="(?:{})">\n)*"#,
        regex::escape(STYLE_MARKER),
        escape_alternation(hrefs),
    ))
    .unwrap()
}

/// Render the script block: marker line plus one `<script src>` per
/// script, every line newline-terminated (it sits flush against `</body>`).
fn script_block(srcs: &[String]) -> String {
    let mut block = format!("\t{SCRIPT_MARKER}\n");
    for src in srcs {
        block.push_str(&format!("\t<script src=\"{src}\"></script>\n"));
    }
    block
}

/// Strip pattern for a previously inserted script block, bounded to the
/// exact `<script src>` lines [`script_block`] emits.
fn script_strip(srcs: &[String]) -> Regex {
    Regex::new(&format!(
        r#"\t{}\n(\t<script src="(?:{})"></script>\n)*"#,
        regex::escape(SCRIPT_MARKER),
        escape_alternation(srcs),
    ))
    .unwrap()
}

/// Escaped `a|b|c` alternation of literal reference paths.
fn escape_alternation(items: &[String]) -> String {
    items
        .iter()
        .map(|item| regex::escape(item))
        .collect::<Vec<_>>()
        .join("|")
}
