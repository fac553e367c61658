//! The transform pipeline: six ordered, pure text-to-text passes.
//!
//! Each pass is a `&str -> Cow<str>` function with no external state; later
//! passes operate on the output of earlier ones. `transform()` composes them
//! in the one order that is known to be safe (wrapper tags must go before the
//! alias declaration, tag rewriting before prop stripping, blank-run
//! collapsing last so it sees every deletion).
//!
//! The pipeline is idempotent on clean text: once no recognized construct
//! remains, a second run is a byte-for-byte no-op.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use super::names::{MOTION_PACKAGE, MOTION_PROPS, MOTION_TAGS, PRESENCE_ALIAS, PRESENCE_WRAPPER};

// ============================================================================
// Compiled Patterns
// ============================================================================

/// `import { motion, AnimatePresence } from 'framer-motion';` plus the
/// trailing line terminator, for any identifier list.
static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"import\s*\{{[^}}]*\}}\s*from\s*['"]{MOTION_PACKAGE}['"]\s*;?[ \t]*\r?\n?"#
    ))
    .unwrap()
});

/// Opening or closing presence-wrapper tag, base name or cast alias,
/// together with the indentation around it on its line.
static PRESENCE_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"[ \t]*</?(?:{PRESENCE_ALIAS}|{PRESENCE_WRAPPER})(?:\s[^>]*)?>[ \t]*"
    ))
    .unwrap()
});

/// `const AnimatePresenceFixed = AnimatePresence as any;` declaration line.
static PRESENCE_ALIAS_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"[ \t]*const\s+{PRESENCE_ALIAS}\s*=\s*{PRESENCE_WRAPPER}\s+as\s+any\s*;?[ \t]*\r?\n?"
    ))
    .unwrap()
});

/// `<motion.TAG` followed by its delimiter (whitespace, `>`, or `/`), so any
/// number of attributes may follow the name.
static OPEN_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alt = MOTION_TAGS.join("|");
    Regex::new(&format!(r"<motion\.({alt})([\s/>])")).unwrap()
});

/// `</motion.TAG>` for the same tag set.
static CLOSE_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alt = MOTION_TAGS.join("|");
    Regex::new(&format!(r"</motion\.({alt})>")).unwrap()
});

/// Head of an animation prop: the leading whitespace run, the name, `=`, and
/// the value opener (`{` or `"`). The value itself is consumed by a scanner.
static PROP_HEAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alt = MOTION_PROPS.join("|");
    Regex::new(&format!(r#"[ \t\r\n]+(?:{alt})=[{{"]"#)).unwrap()
});

/// Three or more consecutive line terminators.
static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:\r?\n){3,}").unwrap());

// ============================================================================
// Pipeline
// ============================================================================

/// Run all passes over one file's text, in fixed order.
pub fn transform(source: &str) -> String {
    let text = strip_motion_import(source);
    let text = strip_presence_wrappers(&text);
    let text = strip_presence_alias(&text);
    let text = rewrite_motion_tags(&text);
    let text = strip_animation_props(&text);
    let text = collapse_blank_runs(&text);
    text.into_owned()
}

// ============================================================================
// Passes (pure functions)
// ============================================================================

/// Pass 1: delete the framer-motion named import, line terminator included.
fn strip_motion_import(text: &str) -> Cow<'_, str> {
    IMPORT_RE.replace_all(text, "")
}

/// Pass 2: delete presence-wrapper tags, base name and alias alike.
///
/// Each removed tag collapses into a single newline so the children around it
/// are not joined onto one line; the blank-run pass bounds the leftovers.
fn strip_presence_wrappers(text: &str) -> Cow<'_, str> {
    PRESENCE_TAG_RE.replace_all(text, "\n")
}

/// Pass 3: delete the local declaration that casts the presence wrapper.
fn strip_presence_alias(text: &str) -> Cow<'_, str> {
    PRESENCE_ALIAS_DECL_RE.replace_all(text, "")
}

/// Pass 4: `<motion.div …>` → `<div …>` and `</motion.div>` → `</div>`,
/// for the enumerated tag set only.
fn rewrite_motion_tags(text: &str) -> Cow<'_, str> {
    match OPEN_TAG_RE.replace_all(text, "<${1}${2}") {
        Cow::Borrowed(_) => CLOSE_TAG_RE.replace_all(text, "</${1}>"),
        Cow::Owned(opened) => Cow::Owned(CLOSE_TAG_RE.replace_all(&opened, "</${1}>").into_owned()),
    }
}

/// Pass 5: delete each enumerated animation prop and its value, together with
/// the single whitespace run that precedes the attribute.
///
/// Value forms: `{expr}`, `{{ object }}` (balanced-brace scan, so nesting
/// depth is not a limit), or a `"string"`. An unterminated value leaves the
/// attribute as written rather than eating the rest of the file.
fn strip_animation_props(text: &str) -> Cow<'_, str> {
    if !PROP_HEAD_RE.is_match(text) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(head) = PROP_HEAD_RE.find(rest) {
        // head ends just past the value opener
        let opener = head.end() - 1;
        let value_end = match rest.as_bytes()[opener] {
            b'{' => balanced_brace_end(rest, opener),
            _ => rest[head.end()..].find('"').map(|i| head.end() + i + 1),
        };

        match value_end {
            Some(end) => {
                out.push_str(&rest[..head.start()]);
                rest = &rest[end..];
            }
            None => {
                out.push_str(&rest[..head.end()]);
                rest = &rest[head.end()..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Pass 6: collapse any run of three or more line terminators to exactly two.
fn collapse_blank_runs(text: &str) -> Cow<'_, str> {
    BLANK_RUN_RE.replace_all(text, "\n\n")
}

// ============================================================================
// Helpers
// ============================================================================

/// Index just past the `}` matching the `{` at `open`, or None if the region
/// never balances.
///
/// Braces inside `"…"`, `'…'`, or `` `…` `` string literals do not count
/// toward the depth; an unterminated string makes the region unbalanced.
fn balanced_brace_end(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            quote @ (b'"' | b'\'' | b'`') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    // skip escaped characters, `\"` included
                    i += if bytes[i] == b'\\' { 2 } else { 1 };
                }
                if i >= bytes.len() {
                    return None;
                }
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

// ============================================================================
// Tests
// ============================================================================
