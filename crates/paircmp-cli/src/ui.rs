//! UI helpers for terminal display.

use console::style;

use paircmp_core::Verdict;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Verdict sentence printed at the end of a text report.
#[must_use]
pub fn verdict_sentence(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Reject => {
            "Reject Null Hypothesis: There is a significant difference in mean execution times."
        }
        Verdict::FailToReject => {
            "Fail to Reject Null Hypothesis: There is no significant difference in mean execution times."
        }
    }
}

/// The verdict sentence, colored when the terminal allows it.
#[must_use]
pub fn styled_verdict(verdict: Verdict, color: bool) -> String {
    let text = verdict_sentence(verdict);
    if !color || is_color_disabled() {
        return text.to_string();
    }
    match verdict {
        Verdict::Reject => style(text).green().bold().to_string(),
        Verdict::FailToReject => style(text).yellow().to_string(),
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_sentences() {
        assert!(verdict_sentence(Verdict::Reject).starts_with("Reject Null Hypothesis"));
        assert!(verdict_sentence(Verdict::FailToReject).starts_with("Fail to Reject"));
    }

    #[test]
    fn uncolored_verdict_is_plain() {
        assert_eq!(
            styled_verdict(Verdict::Reject, false),
            verdict_sentence(Verdict::Reject)
        );
    }

    #[test]
    fn colored_verdict_keeps_text() {
        let s = styled_verdict(Verdict::FailToReject, true);
        assert!(s.contains(verdict_sentence(Verdict::FailToReject)));
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("something failed");
        print_error("");
    }
}
