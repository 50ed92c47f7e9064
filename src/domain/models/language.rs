#[cfg(test)]
#[path = "language_test.rs"]
mod tests;

use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

/// Target languages offered in the language selector. The display name is
/// what gets embedded in prompts and history labels.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display,
)]
pub enum Language {
    #[default]
    Python,
    Java,
    #[strum(to_string = "C++")]
    Cpp,
    C,
    JavaScript,
    #[strum(to_string = "C#")]
    CSharp,
    Go,
    Ruby,
    #[strum(to_string = "PHP")]
    Php,
    Kotlin,
    Swift,
}

impl Language {
    pub fn parse(text: &str) -> Option<Language> {
        let text = text.trim();
        return Language::iter().find(|e| return e.to_string().eq_ignore_ascii_case(text));
    }

    pub fn next(&self) -> Language {
        let languages = Language::iter().collect::<Vec<Language>>();
        let idx = languages
            .iter()
            .position(|e| return e == self)
            .unwrap_or_default();

        return languages[(idx + 1) % languages.len()];
    }

    /// Lowercased display name. Not a real file extension for every language
    /// (`c++`, `c#`), which saved files keep as is.
    pub fn file_extension(&self) -> String {
        return self.to_string().to_lowercase();
    }

    /// Token syntect uses to look up a syntax definition.
    pub fn syntax_token(&self) -> &'static str {
        match self {
            Language::Python => return "py",
            Language::Java => return "java",
            Language::Cpp => return "cpp",
            Language::C => return "c",
            Language::JavaScript => return "js",
            Language::CSharp => return "cs",
            Language::Go => return "go",
            Language::Ruby => return "rb",
            Language::Php => return "php",
            Language::Kotlin => return "kt",
            Language::Swift => return "swift",
        }
    }
}
