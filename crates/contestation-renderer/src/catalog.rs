//! Case type to template mapping

use crate::error::RenderError;
use crate::template::Template;
use contestation_domain::{CaseRecord, CaseType};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

const BAGGAGE_LOSS: &str = include_str!("../templates/baggage-loss.txt");
const FLIGHT_DELAY: &str = include_str!("../templates/flight-delay.txt");
const MORAL_DAMAGES: &str = include_str!("../templates/moral-damages.txt");
const OTHER: &str = include_str!("../templates/other.txt");

/// Total mapping from case type to contestation template
///
/// Specific case types live in the lookup table; `Other` is the fallback
/// entry returned for anything the table does not hold.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: BTreeMap<CaseType, Template>,
    fallback: Template,
}

impl TemplateCatalog {
    /// Catalog with the built-in contestation templates
    pub fn builtin() -> Self {
        let templates = BTreeMap::from([
            (CaseType::BaggageLoss, Template::new(BAGGAGE_LOSS)),
            (CaseType::FlightDelay, Template::new(FLIGHT_DELAY)),
            (CaseType::MoralDamages, Template::new(MORAL_DAMAGES)),
        ]);

        Self {
            templates,
            fallback: Template::new(OTHER),
        }
    }

    /// Replace templates with `<slug>.txt` files found in `dir`
    ///
    /// Case types without a file keep their current template.
    pub fn with_overrides_from_dir(mut self, dir: &Path) -> Result<Self, RenderError> {
        if !dir.is_dir() {
            return Err(RenderError::Io {
                path: dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "template directory not found"),
            });
        }

        for case_type in CaseType::ALL {
            let path = dir.join(format!("{}.txt", case_type.slug()));
            if !path.is_file() {
                debug!("No override for '{}' at {}", case_type, path.display());
                continue;
            }

            let source = fs::read_to_string(&path).map_err(|source| RenderError::Io {
                path: path.clone(),
                source,
            })?;

            info!("Using template override for '{}' from {}", case_type, path.display());
            self.set(case_type, Template::new(source));
        }

        Ok(self)
    }

    /// Replace the template for one case type
    pub fn set(&mut self, case_type: CaseType, template: Template) {
        match case_type {
            CaseType::Other => self.fallback = template,
            _ => {
                self.templates.insert(case_type, template);
            }
        }
    }

    /// Template for a case type
    pub fn template(&self, case_type: CaseType) -> &Template {
        self.templates.get(&case_type).unwrap_or(&self.fallback)
    }

    /// Template for a stored case type label, falling back to `Other`
    pub fn for_label(&self, label: &str) -> &Template {
        self.template(CaseType::from_label(label))
    }

    /// Render the template for `case_type` with the given placeholder values
    pub fn render(
        &self,
        case_type: CaseType,
        values: &BTreeMap<&str, String>,
    ) -> Result<String, RenderError> {
        self.template(case_type).substitute(values)
    }

    /// Render the contestation for an extracted record
    pub fn render_record(&self, record: &CaseRecord) -> Result<String, RenderError> {
        let document = self.render(record.case_type, &record.placeholders())?;
        debug!("Rendered '{}' contestation ({} chars)", record.case_type, document.len());
        Ok(document)
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
