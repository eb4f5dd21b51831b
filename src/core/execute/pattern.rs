use super::ExecuteError;
use error_stack::{Result, ResultExt};
use regex::Regex;

/// Name of the call whose string argument is rewritten
pub const REFERENCE_CALL: &str = "require";

/// Matcher for `require('<dir>/<target name>')` references.
///
/// The quote can be `'` or `"`, and the same quote must close the string.
/// The target name has to be a whole path component: it is either the entire
/// string or preceded by `/` or `\`. The string cannot span lines or contain
/// another quote. Matching is purely textual.
#[derive(Debug, Clone)]
pub struct ReferencePattern {
    regex: Regex,
    target_name: String,
}

/// One reference found in a text
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceMatch<'t> {
    /// The whole call, e.g. `require('../old/rules.json')`
    pub text: &'t str,
    /// Everything in the string before the target name, e.g. `../old/`
    pub old_dir: &'t str,
    /// The quote around the string
    pub quote: char,
    start: usize,
    end: usize,
}

/// A reference before and after rewriting
#[derive(Debug, Clone, PartialEq)]
pub struct Replacement {
    pub old: String,
    pub new: String,
}

impl std::fmt::Display for Replacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.old, self.new)
    }
}

/// Result of rewriting all references in a text
#[derive(Debug)]
pub struct Rewritten {
    pub content: String,
    pub replacements: Vec<Replacement>,
}

impl ReferencePattern {
    pub fn new(target_name: &str) -> Result<Self, ExecuteError> {
        // no back-references in `regex`, so each quote gets its own branch
        let name = regex::escape(target_name);
        let re = format!(
            r#"\b{call}\((?:'((?:[^'"\r\n]*?[/\\])??){name}'|"((?:[^'"\r\n]*?[/\\])??){name}")\)"#,
            call = regex::escape(REFERENCE_CALL),
        );
        let regex = Regex::new(&re)
            .change_context(ExecuteError)
            .attach_printable_lazy(|| format!("cannot build pattern for `{target_name}`"))?;
        Ok(Self {
            regex,
            target_name: target_name.to_string(),
        })
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// Find all non-overlapping references, left to right
    pub fn find_iter<'p, 't>(&'p self, text: &'t str) -> impl Iterator<Item = ReferenceMatch<'t>> + 'p
    where
        't: 'p,
    {
        self.regex.captures_iter(text).filter_map(|caps| {
            let whole = caps.get(0)?;
            let (quote, old_dir) = match caps.get(1) {
                Some(dir) => ('\'', dir.as_str()),
                None => ('"', caps.get(2)?.as_str()),
            };
            Some(ReferenceMatch {
                text: whole.as_str(),
                old_dir,
                quote,
                start: whole.start(),
                end: whole.end(),
            })
        })
    }

    /// Replace every reference in `text` with one pointing at `new_path`.
    ///
    /// Text outside the matches is copied unchanged.
    pub fn rewrite(&self, text: &str, new_path: &str) -> Rewritten {
        let mut content = String::with_capacity(text.len());
        let mut replacements = vec![];
        let mut last = 0;
        for m in self.find_iter(text) {
            let new = m.replacement(new_path);
            content.push_str(&text[last..m.start]);
            content.push_str(&new);
            last = m.end;
            replacements.push(Replacement {
                old: m.text.to_string(),
                new,
            });
        }
        content.push_str(&text[last..]);
        Rewritten {
            content,
            replacements,
        }
    }
}

impl ReferenceMatch<'_> {
    /// The call that should replace this match, keeping its quote
    pub fn replacement(&self, new_path: &str) -> String {
        format!(
            "{call}({q}{new_path}{q})",
            call = REFERENCE_CALL,
            q = self.quote
        )
    }
}

#[cfg(test)]
mod ut {
    use super::*;

    const NAME: &str = "medicaid_rules_2025.json";

    fn pattern() -> ReferencePattern {
        ReferencePattern::new(NAME).unwrap()
    }

    #[test]
    fn test_single_quote() {
        let p = pattern();
        let text = "const r = require('../old/medicaid_rules_2025.json');";
        let m: Vec<_> = p.find_iter(text).collect();
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].text, "require('../old/medicaid_rules_2025.json')");
        assert_eq!(m[0].old_dir, "../old/");
        assert_eq!(m[0].quote, '\'');
    }

    #[test]
    fn test_double_quote() {
        let p = pattern();
        let m: Vec<_> = p
            .find_iter(r#"require("./medicaid_rules_2025.json")"#)
            .collect();
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].old_dir, "./");
        assert_eq!(m[0].quote, '"');
    }

    #[test]
    fn test_bare_name() {
        let p = pattern();
        let m: Vec<_> = p.find_iter("require('medicaid_rules_2025.json')").collect();
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].old_dir, "");
    }

    #[test]
    fn test_backslash_separator() {
        let p = pattern();
        let m: Vec<_> = p
            .find_iter(r"require('..\old\medicaid_rules_2025.json')")
            .collect();
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].old_dir, r"..\old\");
    }

    #[test]
    fn test_mismatched_quotes() {
        let p = pattern();
        assert_eq!(
            p.find_iter(r#"require('../old/medicaid_rules_2025.json")"#).count(),
            0
        );
        assert_eq!(
            p.find_iter(r#"require("../old/medicaid_rules_2025.json')"#).count(),
            0
        );
    }

    #[test]
    fn test_partial_component() {
        let p = pattern();
        assert_eq!(
            p.find_iter("require('../old/my_medicaid_rules_2025.json')").count(),
            0
        );
        assert_eq!(
            p.find_iter("require('../old/medicaid_rules_2025.json.bak')").count(),
            0
        );
    }

    #[test]
    fn test_name_is_escaped() {
        let p = pattern();
        assert_eq!(
            p.find_iter("require('../old/medicaid_rules_2025xjson')").count(),
            0
        );
    }

    #[test]
    fn test_other_calls() {
        let p = pattern();
        assert_eq!(
            p.find_iter("import('../old/medicaid_rules_2025.json')").count(),
            0
        );
        assert_eq!(
            p.find_iter("myrequire('../old/medicaid_rules_2025.json')").count(),
            0
        );
        assert_eq!(
            p.find_iter("require ('../old/medicaid_rules_2025.json')").count(),
            0
        );
    }

    #[test]
    fn test_no_multiline() {
        let p = pattern();
        assert_eq!(
            p.find_iter("require('../old\n/medicaid_rules_2025.json')").count(),
            0
        );
    }

    #[test]
    fn test_rewrite_keeps_surroundings() {
        let p = pattern();
        let text = "a\nconst x = require(\"../old/medicaid_rules_2025.json\");\r\nb";
        let out = p.rewrite(text, "../data/medicaid_rules_2025.json");
        assert_eq!(
            out.content,
            "a\nconst x = require(\"../data/medicaid_rules_2025.json\");\r\nb"
        );
        assert_eq!(
            out.replacements,
            vec![Replacement {
                old: "require(\"../old/medicaid_rules_2025.json\")".to_string(),
                new: "require(\"../data/medicaid_rules_2025.json\")".to_string(),
            }]
        );
    }

    #[test]
    fn test_rewrite_multiple() {
        let p = pattern();
        let text = "require('a/medicaid_rules_2025.json'); require('b/c/medicaid_rules_2025.json');";
        let out = p.rewrite(text, "data/medicaid_rules_2025.json");
        assert_eq!(
            out.content,
            "require('data/medicaid_rules_2025.json'); require('data/medicaid_rules_2025.json');"
        );
        assert_eq!(out.replacements.len(), 2);
    }

    #[test]
    fn test_rewrite_no_match() {
        let p = pattern();
        let text = "const fs = require('fs');\n";
        let out = p.rewrite(text, "data/medicaid_rules_2025.json");
        assert_eq!(out.content, text);
        assert!(out.replacements.is_empty());
    }

    #[test]
    fn test_rewrite_is_fixed_point() {
        let p = pattern();
        let once = p.rewrite("require('x/medicaid_rules_2025.json')", "../data/medicaid_rules_2025.json");
        let twice = p.rewrite(&once.content, "../data/medicaid_rules_2025.json");
        assert_eq!(once.content, twice.content);
        assert_eq!(twice.replacements.len(), 1);
    }
}
