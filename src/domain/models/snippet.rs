#[cfg(test)]
#[path = "snippet_test.rs"]
mod tests;

/// Markers that separate code from explanation in a completion, checked in
/// order. The first marker found wins, even if a later one appears earlier in
/// the text.
pub const EXPLANATION_MARKERS: [&str; 2] = ["# Explanation", "Explanation:"];

/// A completion split into its code and explanation parts. The model's output
/// format isn't fixed, so this is a best effort split.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snippet {
    pub code: String,
    pub explanation: String,
}

impl Snippet {
    pub fn new(code: &str, explanation: &str) -> Snippet {
        return Snippet {
            code: code.to_string(),
            explanation: explanation.to_string(),
        };
    }

    pub fn split(text: &str) -> Snippet {
        for marker in EXPLANATION_MARKERS {
            if let Some((code, explanation)) = text.split_once(marker) {
                return Snippet::new(code.trim(), explanation.trim());
            }
        }

        return Snippet::new(text.trim(), "");
    }

    pub fn is_empty(&self) -> bool {
        return self.code.is_empty() && self.explanation.is_empty();
    }
}
