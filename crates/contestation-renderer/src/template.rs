//! `${Name}` placeholder templates

use crate::error::RenderError;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// `$` followed by `$`, an identifier, a braced identifier, or nothing valid.
static RE_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:(\$)|([_A-Za-z][_A-Za-z0-9]*)|\{([_A-Za-z][_A-Za-z0-9]*)\}|())")
        .expect("placeholder pattern is valid")
});

/// A contestation template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Wrap template text
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Raw template text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholder names referenced by the template, in order of first use
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for caps in RE_PLACEHOLDER.captures_iter(&self.source) {
            if let Some(name) = caps.get(2).or_else(|| caps.get(3)) {
                if !names.contains(&name.as_str()) {
                    names.push(name.as_str());
                }
            }
        }
        names
    }

    /// Substitute every placeholder with its value
    ///
    /// # Examples
    ///
    /// ```
    /// use contestation_renderer::Template;
    /// use std::collections::BTreeMap;
    ///
    /// let template = Template::new("Autor: ${Autor}, custo $$10");
    /// let values = BTreeMap::from([("Autor", "Ana".to_string())]);
    /// assert_eq!(template.substitute(&values).unwrap(), "Autor: Ana, custo $10");
    /// ```
    pub fn substitute(&self, values: &BTreeMap<&str, String>) -> Result<String, RenderError> {
        let mut output = String::with_capacity(self.source.len());
        let mut last = 0;

        for caps in RE_PLACEHOLDER.captures_iter(&self.source) {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            output.push_str(&self.source[last..whole.start]);
            output.push_str(&self.resolve(&caps, values)?);
            last = whole.end;
        }

        output.push_str(&self.source[last..]);
        Ok(output)
    }

    fn resolve(
        &self,
        caps: &Captures<'_>,
        values: &BTreeMap<&str, String>,
    ) -> Result<String, RenderError> {
        if caps.get(1).is_some() {
            return Ok("$".to_string());
        }

        if let Some(name) = caps.get(2).or_else(|| caps.get(3)) {
            return values
                .get(name.as_str())
                .cloned()
                .ok_or_else(|| RenderError::MissingPlaceholder {
                    name: name.as_str().to_string(),
                });
        }

        let offset = caps.get(4).map_or(self.source.len(), |m| m.start());
        Err(self.invalid_at(offset))
    }

    fn invalid_at(&self, offset: usize) -> RenderError {
        let prefix = &self.source[..offset];
        let line = prefix.matches('\n').count() + 1;
        let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
        let column = prefix[line_start..].chars().count().max(1);
        RenderError::InvalidPlaceholder { line, column }
    }
}
