//! Typed transformation rules.
//!
//! A rule is a single textual edit applied to the full document text. All
//! rules share two contracts:
//!
//! - **No-op on mismatch**: text without a match is returned unchanged,
//!   never an error.
//! - **Idempotence**: applying the same rule to its own output yields no
//!   further change. Insert rules achieve this by stripping any previously
//!   inserted copy before reinserting.

use regex::{NoExpand, Regex};
use std::borrow::Cow;

/// Where an [`Rule::Insert`] block lands relative to its anchor text.
#[derive(Debug, Clone)]
pub enum Anchor {
    /// Insert the block immediately before the anchor.
    Before(String),
    /// Insert the block immediately after the anchor.
    After(String),
}

impl Anchor {
    /// The anchor text itself.
    pub fn text(&self) -> &str {
        match self {
            Self::Before(text) | Self::After(text) => text,
        }
    }
}

/// One ordered transformation step.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Replace every non-overlapping regex match with a fixed snippet.
    /// Patterns may span multiple lines.
    Subst { pattern: Regex, replacement: String },

    /// Replace every occurrence of a literal string.
    Literal { from: String, to: String },

    /// Remove every regex match, except matches whose preceding text ends
    /// with the `unless_after` marker. The marker guard keeps blocks that a
    /// later rule in the sequence is responsible for.
    Strip {
        pattern: Regex,
        replacement: String,
        unless_after: Option<&'static str>,
    },

    /// Strip any previously inserted copy matching `strip`, then insert
    /// `block` at the first occurrence of the anchor. A document without
    /// the anchor is left as stripped.
    Insert {
        strip: Regex,
        anchor: Anchor,
        block: String,
    },
}

impl Rule {
    /// Short rule kind name, used in verbose logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Subst { .. } => "subst",
            Self::Literal { .. } => "literal",
            Self::Strip { .. } => "strip",
            Self::Insert { .. } => "insert",
        }
    }

    /// Apply this rule to `text`, borrowing when nothing matched.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::Subst {
                pattern,
                replacement,
            } => pattern.replace_all(text, NoExpand(replacement)),

            Self::Literal { from, to } => {
                if text.contains(from.as_str()) {
                    Cow::Owned(text.replace(from.as_str(), to))
                } else {
                    Cow::Borrowed(text)
                }
            }

            Self::Strip {
                pattern,
                replacement,
                unless_after,
            } => strip(pattern, replacement, *unless_after, text),

            Self::Insert {
                strip,
                anchor,
                block,
            } => insert(strip, anchor, block, text),
        }
    }
}

/// Remove matches of `pattern`, keeping matches guarded by `unless_after`.
fn strip<'a>(
    pattern: &Regex,
    replacement: &str,
    unless_after: Option<&str>,
    text: &'a str,
) -> Cow<'a, str> {
    let mut out = String::new();
    let mut last = 0;
    for m in pattern.find_iter(text) {
        let guarded =
            unless_after.is_some_and(|marker| text[..m.start()].trim_end().ends_with(marker));
        if guarded {
            continue;
        }
        out.push_str(&text[last..m.start()]);
        out.push_str(replacement);
        last = m.end();
    }
    if last == 0 {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[last..]);
    Cow::Owned(out)
}

/// Strip any previous copy of the block, then insert at the first anchor.
fn insert<'a>(strip: &Regex, anchor: &Anchor, block: &str, text: &'a str) -> Cow<'a, str> {
    let stripped = strip.replace_all(text, "");
    if !stripped.contains(anchor.text()) {
        return stripped;
    }
    let rendered = match anchor {
        Anchor::Before(a) => format!("{block}{a}"),
        Anchor::After(a) => format!("{a}{block}"),
    };
    Cow::Owned(stripped.replacen(anchor.text(), &rendered, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subst(pattern: &str, replacement: &str) -> Rule {
        Rule::Subst {
            pattern: Regex::new(pattern).unwrap(),
            replacement: replacement.to_string(),
        }
    }

    #[test]
    fn test_subst_no_match_borrows_input() {
        let rule = subst("<base href=\"[^\"]*\">", "<base href=\"/new/\">");
        let text = "<html><body></body></html>";
        let out = rule.apply(text);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, text);
    }

    #[test]
    fn test_subst_replaces_all_matches() {
        let rule = subst("<base href=\"[^\"]*\">", "<base href=\"/new/\">");
        let text = "<base href=\"/a/\">\n<base href=\"/b/\">";
        assert_eq!(rule.apply(text), "<base href=\"/new/\">\n<base href=\"/new/\">");
    }

    #[test]
    fn test_subst_replacement_is_not_a_template() {
        // `$` in the replacement must be literal, not a capture reference.
        let rule = subst("X", "$1");
        assert_eq!(rule.apply("aXb"), "a$1b");
    }

    #[test]
    fn test_literal_replaces_every_occurrence() {
        let rule = Rule::Literal {
            from: "/chaletdashboard/".to_string(),
            to: "/hospitality-dashboard/".to_string(),
        };
        let text = "a /chaletdashboard/x b /chaletdashboard/y";
        let out = rule.apply(text);
        assert_eq!(out, "a /hospitality-dashboard/x b /hospitality-dashboard/y");
        assert!(!out.contains("/chaletdashboard/"));
    }

    #[test]
    fn test_strip_removes_matches() {
        let rule = Rule::Strip {
            pattern: Regex::new(r"(?s)\n[ \t]*<script>.*?</script>[ \t]*\n").unwrap(),
            replacement: "\n".to_string(),
            unless_after: None,
        };
        let text = "<body>\n\t<script>var x = 1;</script>\n</body>";
        assert_eq!(rule.apply(text), "<body>\n</body>");
    }

    #[test]
    fn test_strip_keeps_guarded_match() {
        let rule = Rule::Strip {
            pattern: Regex::new(r"(?s)\n[ \t]*<script>.*?</script>[ \t]*\n").unwrap(),
            replacement: "\n".to_string(),
            unless_after: Some("<!-- keep -->"),
        };
        let text = "<body><!-- keep -->\n\t<script>kept();</script>\n</body>";
        let out = rule.apply(text);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, text);
    }

    #[test]
    fn test_insert_before_anchor() {
        let rule = Rule::Insert {
            strip: Regex::new(r"\t<!-- block -->\n").unwrap(),
            anchor: Anchor::Before("</body>".to_string()),
            block: "\t<!-- block -->\n".to_string(),
        };
        assert_eq!(rule.apply("<body>\n</body>"), "<body>\n\t<!-- block -->\n</body>");
    }

    #[test]
    fn test_insert_is_idempotent() {
        let rule = Rule::Insert {
            strip: Regex::new(r"\t<!-- block -->\n").unwrap(),
            anchor: Anchor::Before("</body>".to_string()),
            block: "\t<!-- block -->\n".to_string(),
        };
        let once = rule.apply("<body>\n</body>").into_owned();
        let twice = rule.apply(&once).into_owned();
        assert_eq!(once, twice);
        // Exactly one block, not two.
        assert_eq!(twice.matches("<!-- block -->").count(), 1);
    }

    #[test]
    fn test_insert_without_anchor_is_noop() {
        let rule = Rule::Insert {
            strip: Regex::new(r"\t<!-- block -->\n").unwrap(),
            anchor: Anchor::Before("</body>".to_string()),
            block: "\t<!-- block -->\n".to_string(),
        };
        let text = "<html>no body close tag";
        assert_eq!(rule.apply(text), text);
    }
}
