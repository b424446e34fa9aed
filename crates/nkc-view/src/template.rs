//! Template rendering boundary and the map info snippet view.

use std::convert::Infallible;
use std::path::{Path, PathBuf};

use nkc_config::{NkcConfig, ViewConfig};
use nkc_core::entities::Institution;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template not found: {name} (searched {searched:?})")]
    TemplateNotFound { name: String, searched: Vec<PathBuf> },

    #[error("failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Lookup roots for templates, layouts, and partials.
///
/// [`FileTemplateRenderer`] reads template and partial roots. Layout roots are
/// carried for renderers that support layouts and are not read by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewPaths {
    pub template_roots: Vec<String>,
    pub layout_roots: Vec<String>,
    pub partial_roots: Vec<String>,
}

impl From<&ViewConfig> for ViewPaths {
    fn from(config: &ViewConfig) -> Self {
        Self {
            template_roots: config.template_roots(),
            layout_roots: config.layout_roots(),
            partial_roots: config.partial_roots(),
        }
    }
}

/// Template engine that renders a named template against a JSON context.
pub trait TemplateRenderer {
    /// # Errors
    ///
    /// Returns [`RenderError`] when the template is missing or unreadable.
    fn render(
        &self,
        paths: &ViewPaths,
        template: &str,
        context: &Value,
    ) -> Result<String, RenderError>;
}

impl<F> TemplateRenderer for F
where
    F: Fn(&ViewPaths, &str, &Value) -> Result<String, RenderError>,
{
    fn render(
        &self,
        paths: &ViewPaths,
        template: &str,
        context: &Value,
    ) -> Result<String, RenderError> {
        self(paths, template, context)
    }
}

/// Renderer for the map info snippet of one detail request.
///
/// Created per request so the configured settings carry the id of the
/// institution the detail page is about.
pub struct MapInfoView<'a> {
    renderer: &'a dyn TemplateRenderer,
    paths: ViewPaths,
    template: String,
    settings: Value,
}

impl<'a> MapInfoView<'a> {
    /// # Errors
    ///
    /// Returns [`RenderError::Json`] if the settings cannot be serialized.
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        config: &NkcConfig,
        record_uid: i64,
    ) -> Result<Self, RenderError> {
        let mut settings = serde_json::to_value(config)?;
        if let Value::Object(map) = &mut settings {
            map.insert("map_info".into(), json!({ "record_uid": record_uid }));
        }
        Ok(Self {
            renderer,
            paths: ViewPaths::from(&config.view),
            template: config.map.info_template.clone(),
            settings,
        })
    }

    /// Render the info snippet for one marker institution.
    ///
    /// # Errors
    ///
    /// Propagates renderer failures.
    pub fn render(&self, institution: &Institution) -> Result<String, RenderError> {
        let context = json!({
            "institution": institution,
            "settings": self.settings,
        });
        self.renderer.render(&self.paths, &self.template, &context)
    }
}

/// Renders `<root>/<template>.html` files with `{{ dotted.path }}` placeholders.
///
/// Roots are searched last-first, so later roots override earlier ones.
/// Placeholders resolve against the context; scalars are inserted
/// HTML-escaped, anything missing or structured renders as an empty string.
///
/// `{{> Name }}` inserts `<partial root>/<Name>.html`, rendered against the
/// same context. Partials do not include further partials.
#[derive(Debug, Clone, Default)]
pub struct FileTemplateRenderer {
    base: PathBuf,
}

impl FileTemplateRenderer {
    /// Roots are resolved relative to `base`.
    #[must_use]
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn locate(&self, roots: &[String], name: &str) -> Result<PathBuf, RenderError> {
        let file_name = format!("{name}.html");
        let searched: Vec<PathBuf> = roots
            .iter()
            .rev()
            .map(|root| self.base.join(root).join(&file_name))
            .collect();

        searched
            .iter()
            .find(|candidate| candidate.is_file())
            .cloned()
            .ok_or_else(|| RenderError::TemplateNotFound {
                name: name.to_string(),
                searched,
            })
    }

    fn partial(
        &self,
        paths: &ViewPaths,
        name: &str,
        context: &Value,
    ) -> Result<String, RenderError> {
        let path = self.locate(&paths.partial_roots, name)?;
        Ok(substitute(&read_template(&path)?, context))
    }
}

impl TemplateRenderer for FileTemplateRenderer {
    fn render(
        &self,
        paths: &ViewPaths,
        template: &str,
        context: &Value,
    ) -> Result<String, RenderError> {
        let path = self.locate(&paths.template_roots, template)?;
        let source = read_template(&path)?;
        tracing::debug!(template, path = %path.display(), "rendering template");

        expand(&source, |key| match key.strip_prefix('>') {
            Some(name) => self.partial(paths, name.trim(), context),
            None => Ok(escape_html(&lookup(context, key))),
        })
    }
}

fn read_template(path: &Path) -> Result<String, RenderError> {
    std::fs::read_to_string(path).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace every `{{ key }}` in `source` with `resolve(key)`.
fn expand<E>(
    source: &str,
    mut resolve: impl FnMut(&str) -> Result<String, E>,
) -> Result<String, E> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start + 2..].find("}}") else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(&resolve(rest[start + 2..start + 2 + len].trim())?);
        rest = &rest[start + 2 + len + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

fn substitute(source: &str, context: &Value) -> String {
    let Ok(rendered) = expand::<Infallible>(source, |key| {
        if key.starts_with('>') {
            tracing::debug!(key, "nested partial not expanded");
            return Ok(String::new());
        }
        Ok(escape_html(&lookup(context, key)))
    });
    rendered
}

fn lookup(context: &Value, key: &str) -> String {
    let value = key
        .split('.')
        .try_fold(context, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        });

    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
