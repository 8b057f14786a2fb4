//! Template module for rendering scaffold files

use handlebars::Handlebars;
use serde::Serialize;
use std::fmt;

use crate::modules::error::TemplateError;

/// A parsed template, ready to be rendered against any serializable data.
///
/// Rendering is strict: a reference to a field the data does not have is an
/// error rather than an empty string. Output is plain text, nothing is
/// HTML-escaped.
pub struct Template {
    name: String,
    registry: Handlebars<'static>,
}

impl Template {
    pub fn parse(name: impl Into<String>, source: &str) -> Result<Self, TemplateError> {
        let name = name.into();
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);

        registry
            .register_template_string(&name, source)
            .map_err(|e| TemplateError::Parse {
                name: name.clone(),
                source: Box::new(e),
            })?;

        Ok(Self { name, registry })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render<T: Serialize>(&self, data: &T) -> Result<String, TemplateError> {
        self.registry
            .render(&self.name, data)
            .map_err(|e| TemplateError::Render {
                name: self.name.clone(),
                source: Box::new(e),
            })
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template").field("name", &self.name).finish()
    }
}

/// Render `template` against `data`.
pub fn render_template<T: Serialize>(template: &Template, data: &T) -> Result<String, TemplateError> {
    template.render(data)
}
