//! Tera rendering engine — [`ScaffoldRenderer`] turns an assignment plus a
//! language selection into a [`PublishPlan`].

use tera::Tera;

use coursegen_core::{AssignmentDescriptor, Language, PublishPlan, RenderedFile};

use crate::catalog;
use crate::context::ScaffoldContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("python/readme.md.tera", include_str!("templates/python/readme.md.tera")),
    (
        "python/requirements.txt.tera",
        include_str!("templates/python/requirements.txt.tera"),
    ),
    ("python/main.py.tera", include_str!("templates/python/main.py.tera")),
    ("python/test_main.py.tera", include_str!("templates/python/test_main.py.tera")),
    ("python/gitignore.tera", include_str!("templates/python/gitignore.tera")),
    ("java/readme.md.tera", include_str!("templates/java/readme.md.tera")),
    ("java/main.java.tera", include_str!("templates/java/main.java.tera")),
    ("java/test.java.tera", include_str!("templates/java/test.java.tera")),
    ("java/gitignore.tera", include_str!("templates/java/gitignore.tera")),
    (
        "javascript/readme.md.tera",
        include_str!("templates/javascript/readme.md.tera"),
    ),
    (
        "javascript/package.json.tera",
        include_str!("templates/javascript/package.json.tera"),
    ),
    ("javascript/index.js.tera", include_str!("templates/javascript/index.js.tera")),
    (
        "javascript/index.test.js.tera",
        include_str!("templates/javascript/index.test.js.tera"),
    ),
    (
        "javascript/gitignore.tera",
        include_str!("templates/javascript/gitignore.tera"),
    ),
    ("cpp/readme.md.tera", include_str!("templates/cpp/readme.md.tera")),
    ("cpp/main.cpp.tera", include_str!("templates/cpp/main.cpp.tera")),
    ("cpp/test.cpp.tera", include_str!("templates/cpp/test.cpp.tera")),
    ("cpp/gitignore.tera", include_str!("templates/cpp/gitignore.tera")),
];

fn build_tera() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    let items: Vec<(String, String)> = TPLS
        .iter()
        .map(|(name, content)| ((*name).to_string(), (*content).to_string()))
        .collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// ScaffoldRenderer
// ---------------------------------------------------------------------------

/// Tera-based renderer over the embedded template catalog.
///
/// Read-only after construction; create once with [`ScaffoldRenderer::new`]
/// and reuse across runs.
pub struct ScaffoldRenderer {
    tera: Tera,
}

impl ScaffoldRenderer {
    /// Construct a new [`ScaffoldRenderer`] with the embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Ok(ScaffoldRenderer { tera: build_tera()? })
    }

    /// Render the full scaffold for `assignment` in `language`.
    ///
    /// File order matches catalog declaration order (README first).
    /// Rendering is deterministic: identical inputs yield byte-identical
    /// plans.
    pub fn render(
        &self,
        assignment: &AssignmentDescriptor,
        language: Language,
    ) -> Result<PublishPlan, RenderError> {
        let ctx = ScaffoldContext::from_assignment(assignment)?;
        self.render_with_context(&ctx, language)
    }

    /// Render using a caller-provided [`ScaffoldContext`].
    pub fn render_with_context(
        &self,
        ctx: &ScaffoldContext,
        language: Language,
    ) -> Result<PublishPlan, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let names = catalog::template_names(language);
        let paths = catalog::relative_paths(language);

        debug_assert_eq!(
            names.len(),
            paths.len(),
            "template_names() and relative_paths() must return equal-length slices for {language}"
        );

        let mut files = Vec::with_capacity(names.len());
        for (name, path) in names.iter().zip(paths.iter()) {
            let content = self.tera.render(name, &tera_ctx)?;
            files.push(RenderedFile {
                relative_path: (*path).to_string(),
                content,
            });
        }

        Ok(PublishPlan {
            target_repo_name: ctx.repo_slug.clone(),
            repo_description: format!("{} - Due: {}", ctx.assignment_name, ctx.due_date),
            files,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
