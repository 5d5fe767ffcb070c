//! Template catalog — fixed file sets per language.
//!
//! # File sets
//!
//! | Language   | Files (in commit order)                                          |
//! |------------|------------------------------------------------------------------|
//! | python     | `README.md, requirements.txt, main.py, tests/test_main.py, .gitignore` |
//! | java       | `README.md, Main.java, Test.java, .gitignore`                    |
//! | javascript | `README.md, package.json, index.js, index.test.js, .gitignore`   |
//! | cpp        | `README.md, main.cpp, test.cpp, .gitignore`                      |
//!
//! READMEs come first in every set. Adding a language is one enum variant in
//! coursegen-core plus one arm in each function here plus the template files.

use coursegen_core::Language;

/// Template name(s) to render for this language, in output order.
pub fn template_names(language: Language) -> &'static [&'static str] {
    match language {
        Language::Python => &[
            "python/readme.md.tera",
            "python/requirements.txt.tera",
            "python/main.py.tera",
            "python/test_main.py.tera",
            "python/gitignore.tera",
        ],
        Language::Java => &[
            "java/readme.md.tera",
            "java/main.java.tera",
            "java/test.java.tera",
            "java/gitignore.tera",
        ],
        Language::Javascript => &[
            "javascript/readme.md.tera",
            "javascript/package.json.tera",
            "javascript/index.js.tera",
            "javascript/index.test.js.tera",
            "javascript/gitignore.tera",
        ],
        Language::Cpp => &[
            "cpp/readme.md.tera",
            "cpp/main.cpp.tera",
            "cpp/test.cpp.tera",
            "cpp/gitignore.tera",
        ],
    }
}

/// Repository-relative output paths for this language.
/// Returns one path per template (same order as `template_names`).
pub fn relative_paths(language: Language) -> &'static [&'static str] {
    match language {
        Language::Python => &[
            "README.md",
            "requirements.txt",
            "main.py",
            "tests/test_main.py",
            ".gitignore",
        ],
        Language::Java => &["README.md", "Main.java", "Test.java", ".gitignore"],
        Language::Javascript => &[
            "README.md",
            "package.json",
            "index.js",
            "index.test.js",
            ".gitignore",
        ],
        Language::Cpp => &["README.md", "main.cpp", "test.cpp", ".gitignore"],
    }
}
