//! Two-tier extraction of recipe entries from a raw model completion.
//!
//! Model output format compliance is probabilistic. The structured tier
//! handles the cooperative cases (a bare JSON array, or one wrapped in a
//! markdown fence); the line tier salvages a title-only list from anything
//! else. The tiers are tried in a fixed order and the first success wins;
//! failure of the structured tier is an ordinary value, not an exception.

use crate::model::RecipeEntry;
use log::debug;
use serde_json::Value;
use thiserror::Error;

/// Why the structured tier rejected a completion. Never leaves the crate;
/// every variant is recovered by the line tier.
#[derive(Debug, Error)]
pub(crate) enum ParseFailure {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("top-level JSON value is not an array")]
    NotAnArray,

    /// Valid JSON, but fewer usable entries than the caller asked for.
    /// Treated as a failure so the caller gets a full-length (if lower
    /// fidelity) list from the line tier instead of a short one.
    #[error("only {got} of {want} requested entries")]
    UnderFilled { got: usize, want: usize },
}

/// Parse a raw completion into at most `limit` entries.
///
/// Strategies run in order: structured JSON extraction first, then the
/// line-based fallback over the *original* raw text. The fallback may
/// still under-produce; that is accepted silently.
pub fn parse_completion(text: &str, limit: usize) -> Vec<RecipeEntry> {
    match structured_entries(text, limit) {
        Ok(entries) => {
            debug!("structured tier produced {} entries", entries.len());
            entries
        }
        Err(failure) => {
            debug!("structured tier rejected completion ({failure}); using line tier");
            line_entries(text, limit)
        }
    }
}

/// Content of the first triple-backtick fenced block, if the text has one
/// with a closing fence. An optional `json` tag after the opening fence is
/// skipped, case-insensitively.
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let mut rest = &text[start + 3..];
    if let Some(tag) = rest.get(..4) {
        if tag.eq_ignore_ascii_case("json") {
            rest = &rest[4..];
        }
    }
    let end = rest.find("```")?;
    Some(&rest[..end])
}

fn search_fallback_url(title: &str) -> String {
    format!(
        "https://www.google.com/search?q={}",
        urlencoding::encode(&format!("{title} レシピ"))
    )
}

/// Structured tier: JSON array of `{title, url}` objects, possibly fenced.
///
/// Elements without a non-empty string `title` are dropped; a missing or
/// empty `url` gets a synthesized search link so structured entries always
/// carry a usable URL. Emitted order is preserved.
pub(crate) fn structured_entries(
    text: &str,
    limit: usize,
) -> Result<Vec<RecipeEntry>, ParseFailure> {
    let trimmed = text.trim();
    let json_text = fenced_block(trimmed).map(str::trim).unwrap_or(trimmed);

    let value: Value = serde_json::from_str(json_text)?;
    let items = value.as_array().ok_or(ParseFailure::NotAnArray)?;

    let mut entries = Vec::new();
    for item in items {
        let title = match item.get("title").and_then(Value::as_str) {
            Some(t) if !t.is_empty() => t,
            _ => continue,
        };
        let url = match item.get("url").and_then(Value::as_str) {
            Some(u) if !u.is_empty() => u.to_string(),
            _ => search_fallback_url(title),
        };
        entries.push(RecipeEntry::with_url(title, url));
    }
    entries.truncate(limit);

    if entries.len() < limit {
        return Err(ParseFailure::UnderFilled {
            got: entries.len(),
            want: limit,
        });
    }
    Ok(entries)
}

/// Line tier: strip bullet/numbering prefixes and keep non-empty lines as
/// title-only entries. Never synthesizes URLs.
pub(crate) fn line_entries(text: &str, limit: usize) -> Vec<RecipeEntry> {
    text.lines()
        .map(|line| {
            line.trim_start_matches(|c: char| {
                c.is_whitespace() || c.is_ascii_digit() || matches!(c, '-' | '*' | '・' | '.' | ')')
            })
            .trim()
        })
        .filter(|line| !line.is_empty())
        .take(limit)
        .map(RecipeEntry::title_only)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_RECIPES: &str = r#"[
        {"title": "鶏の照り焼き", "url": "https://cookpad.com/jp/recipes/101"},
        {"title": "豚汁", "url": "https://kurashiru.com/recipes/202"}
    ]"#;

    #[test]
    fn test_bare_json_array() {
        let entries = parse_completion(TWO_RECIPES, 2);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "鶏の照り焼き");
        assert_eq!(
            entries[0].url.as_deref(),
            Some("https://cookpad.com/jp/recipes/101")
        );
        assert_eq!(entries[1].title, "豚汁");
    }

    #[test]
    fn test_fenced_json_matches_unfenced() {
        let fenced = format!("```json\n{TWO_RECIPES}\n```");
        assert_eq!(parse_completion(&fenced, 2), parse_completion(TWO_RECIPES, 2));
    }

    #[test]
    fn test_fence_tag_is_case_insensitive() {
        let fenced = format!("```JSON\n{TWO_RECIPES}\n```");
        assert_eq!(parse_completion(&fenced, 2), parse_completion(TWO_RECIPES, 2));
    }

    #[test]
    fn test_untagged_fence() {
        let fenced = format!("ここにレシピがあります:\n```\n{TWO_RECIPES}\n```\nどうぞ!");
        assert_eq!(parse_completion(&fenced, 2), parse_completion(TWO_RECIPES, 2));
    }

    #[test]
    fn test_unclosed_fence_falls_back_to_whole_text() {
        // No closing fence means the fence heuristic does not apply, the
        // whole text is not valid JSON, and the line tier takes over.
        let text = "```json\n- 豚汁\n- 肉じゃが";
        let entries = parse_completion(text, 2);
        assert_eq!(entries[0].title, "```json");
        assert_eq!(entries[1].title, "豚汁");
    }

    #[test]
    fn test_missing_title_dropped_even_with_url() {
        let text = r#"[
            {"url": "https://cookpad.com/jp/recipes/1"},
            {"title": "", "url": "https://cookpad.com/jp/recipes/2"},
            {"title": "肉じゃが", "url": "https://cookpad.com/jp/recipes/3"}
        ]"#;
        let entries = parse_completion(text, 1);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "肉じゃが");
    }

    #[test]
    fn test_non_string_title_dropped() {
        let text = r#"[{"title": 42}, {"title": "豚汁"}]"#;
        let entries = parse_completion(text, 1);
        assert_eq!(entries[0].title, "豚汁");
    }

    #[test]
    fn test_missing_url_gets_search_fallback() {
        let text = r#"[{"title": "肉じゃが"}, {"title": "豚汁", "url": ""}]"#;
        let entries = parse_completion(text, 2);
        let expected_query = urlencoding::encode("肉じゃが レシピ").into_owned();
        assert_eq!(
            entries[0].url.as_deref(),
            Some(format!("https://www.google.com/search?q={expected_query}").as_str())
        );
        // Empty url is treated the same as missing.
        assert!(entries[1].url.as_deref().unwrap().contains("google.com/search"));
    }

    #[test]
    fn test_truncates_to_limit_preserving_order() {
        let text = r#"[
            {"title": "一", "url": "https://cookpad.com/jp/recipes/1"},
            {"title": "二", "url": "https://cookpad.com/jp/recipes/2"},
            {"title": "三", "url": "https://cookpad.com/jp/recipes/3"}
        ]"#;
        let entries = parse_completion(text, 2);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "一");
        assert_eq!(entries[1].title, "二");
    }

    #[test]
    fn test_exact_fill_never_reaches_line_tier() {
        // Would be detectable: the line tier applied to this text yields a
        // single garbled entry, not two clean ones.
        let entries = parse_completion(TWO_RECIPES, 2);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.url.is_some()));
    }

    #[test]
    fn test_underfilled_json_falls_back_to_raw_text_lines() {
        let text = "```json\n[{\"title\": \"豚汁\", \"url\": \"https://cookpad.com/jp/recipes/1\"}]\n```";
        let entries = parse_completion(text, 3);
        // The line tier reprocesses the raw completion, fence markers and
        // all, not the extracted JSON.
        assert_eq!(entries[0].title, "```json");
        assert!(entries.iter().all(|e| e.url.is_none()));
    }

    #[test]
    fn test_bullet_list_fallback() {
        let text = "- 鶏の照り焼き\n- 豚汁\n- 肉じゃが";
        let entries = parse_completion(text, 2);
        assert_eq!(
            entries,
            vec![
                RecipeEntry::title_only("鶏の照り焼き"),
                RecipeEntry::title_only("豚汁"),
            ]
        );
    }

    #[test]
    fn test_numbered_and_dotted_prefixes_stripped() {
        let text = "1. カレーライス\n 2) オムライス\n・チャーハン\n* 餃子";
        let entries = parse_completion(text, 4);
        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["カレーライス", "オムライス", "チャーハン", "餃子"]);
    }

    #[test]
    fn test_blank_lines_discarded() {
        let text = "\n- 豚汁\n\n   \n- 肉じゃが\n";
        let entries = parse_completion(text, 5);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_limit_zero_yields_empty() {
        assert!(parse_completion(TWO_RECIPES, 0).is_empty());
        assert!(parse_completion("- 豚汁", 0).is_empty());
    }

    #[test]
    fn test_line_tier_may_underproduce_silently() {
        let entries = parse_completion("豚汁", 3);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_non_array_json_falls_back() {
        let text = "{\"title\": \"豚汁\"}";
        let entries = parse_completion(text, 1);
        // Object at the top level is a structured-tier failure; the line
        // tier returns the raw line as a title.
        assert_eq!(entries.len(), 1);
        assert!(entries[0].url.is_none());
    }
}
