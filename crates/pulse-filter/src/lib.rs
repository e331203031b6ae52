//! Profanity masking applied to user-supplied text before persistence.
//!
//! Matching is whole-token and case-insensitive; each matched token is
//! replaced by `*` of the same length. Everything else, including
//! whitespace and punctuation, passes through untouched.

mod wordlist;

use wordlist::WORDLIST;

/// Replace profane tokens in `text` with masking characters.
pub fn clean(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut token = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '\'' {
            token.push(ch);
        } else {
            flush_token(&mut out, &mut token);
            out.push(ch);
        }
    }
    flush_token(&mut out, &mut token);

    out
}

fn flush_token(out: &mut String, token: &mut String) {
    if token.is_empty() {
        return;
    }
    if is_profane(token) {
        for _ in token.chars() {
            out.push('*');
        }
    } else {
        out.push_str(token);
    }
    token.clear();
}

fn is_profane(token: &str) -> bool {
    let lower = token.to_lowercase();
    WORDLIST.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_passes_through() {
        assert_eq!(clean("add dark mode please"), "add dark mode please");
    }

    #[test]
    fn profane_token_is_masked() {
        assert_eq!(clean("this is shit"), "this is ****");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(clean("total BullShit"), "total ********");
    }

    #[test]
    fn punctuation_and_whitespace_survive() {
        assert_eq!(clean("damn, really?"), "****, really?");
    }

    #[test]
    fn profanity_inside_a_longer_word_is_left_alone() {
        // Whole-token matching only: "classic" contains "ass".
        assert_eq!(clean("classic"), "classic");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean(""), "");
    }
}
