//! Splits a completed response into the user-visible body and the
//! sentinel-delimited follow-up suggestions embedded at its tail.

/// Marks the start of the suggestions region within the response text.
pub const SUGGESTIONS_START: &str = "[SUGGESTIONS]";
/// Marks the end of the suggestions region.
pub const SUGGESTIONS_END: &str = "[/SUGGESTIONS]";

/// A segmented response: body text plus extracted suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmented {
    pub body: String,
    pub suggestions: Vec<String>,
}

/// Split the accumulated response into body and suggestions.
///
/// The region between a start sentinel and a matching end sentinel is
/// line-split; a line survives as a suggestion only if, after stripping
/// leading bullet characters and surrounding whitespace, it is non-empty
/// and ends with a question mark. The whole sentinel region is removed
/// from the body.
///
/// Without a complete sentinel pair (including a dangling start marker)
/// the text is returned untouched with no suggestions — a deliberate
/// policy: never truncate the body on a malformed sidecar.
pub fn segment(text: &str) -> Segmented {
    let Some(start) = text.find(SUGGESTIONS_START) else {
        return untouched(text);
    };
    let after_start = start + SUGGESTIONS_START.len();
    let Some(rel_end) = text[after_start..].find(SUGGESTIONS_END) else {
        return untouched(text);
    };
    let end = after_start + rel_end;

    let suggestions = text[after_start..end]
        .trim()
        .lines()
        .map(|line| line.trim_start_matches(['-', '*', '•']).trim())
        .filter(|line| !line.is_empty() && line.ends_with('?'))
        .map(ToString::to_string)
        .collect();

    let mut body = String::with_capacity(text.len());
    body.push_str(&text[..start]);
    body.push_str(&text[end + SUGGESTIONS_END.len()..]);

    Segmented {
        body: body.trim().to_string(),
        suggestions,
    }
}

fn untouched(text: &str) -> Segmented {
    Segmented {
        body: text.to_string(),
        suggestions: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_question_lines_only() {
        let text = "Answer text\n[SUGGESTIONS]\n- Question one?\n- Not a question.\n* Question two?\n[/SUGGESTIONS]";
        let seg = segment(text);
        assert_eq!(seg.body, "Answer text");
        assert_eq!(seg.suggestions, vec!["Question one?", "Question two?"]);
    }

    #[test]
    fn no_sentinels_returns_text_unchanged() {
        let text = "Just a plain answer with no markers.";
        let seg = segment(text);
        assert_eq!(seg.body, text);
        assert!(seg.suggestions.is_empty());
    }

    #[test]
    fn dangling_start_leaves_body_untouched() {
        let text = "Answer\n[SUGGESTIONS]\n- Cut off mid-stream?";
        let seg = segment(text);
        assert_eq!(seg.body, text);
        assert!(seg.suggestions.is_empty());
    }

    #[test]
    fn end_before_start_is_no_pair() {
        let text = "[/SUGGESTIONS] weird [SUGGESTIONS]";
        let seg = segment(text);
        assert_eq!(seg.body, text);
        assert!(seg.suggestions.is_empty());
    }

    #[test]
    fn empty_region_yields_no_suggestions() {
        let seg = segment("Body\n[SUGGESTIONS][/SUGGESTIONS]");
        assert_eq!(seg.body, "Body");
        assert!(seg.suggestions.is_empty());
    }

    #[test]
    fn text_after_end_sentinel_survives() {
        let seg = segment("Before [SUGGESTIONS]\n- Why?\n[/SUGGESTIONS] after");
        assert_eq!(seg.body, "Before  after");
        assert_eq!(seg.suggestions, vec!["Why?"]);
    }

    #[test]
    fn bullet_variants_stripped() {
        let seg = segment("B\n[SUGGESTIONS]\n• Dotted one?\n-- Doubled dash?\nBare question?\n[/SUGGESTIONS]");
        assert_eq!(
            seg.suggestions,
            vec!["Dotted one?", "Doubled dash?", "Bare question?"]
        );
    }

    #[test]
    fn body_is_trimmed() {
        let seg = segment("  Answer  \n[SUGGESTIONS]\n- Q?\n[/SUGGESTIONS]\n  ");
        assert_eq!(seg.body, "Answer");
    }
}
