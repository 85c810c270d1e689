//! Contestation Renderer
//!
//! Fills the contestation template that matches a case record's category.
//!
//! # Overview
//!
//! Templates are plain text with `${Name}` placeholders (`$Name` and the
//! `$$` escape are accepted too). Values are substituted verbatim: no
//! escaping and no truncation.
//!
//! The [`TemplateCatalog`] maps every [`CaseType`] to a template. `Other`
//! is the fallback entry, so looking up an unknown label never fails.
//! Built-in templates are compiled into the binary and can be replaced per
//! case type from a directory of `<slug>.txt` files.
//!
//! # Example Usage
//!
//! ```
//! use contestation_domain::CaseType;
//! use contestation_renderer::TemplateCatalog;
//! use std::collections::BTreeMap;
//!
//! let catalog = TemplateCatalog::builtin();
//! let values = BTreeMap::from([
//!     ("Autor", "João Silva".to_string()),
//!     ("Descricao", "Caso simples.".to_string()),
//! ]);
//!
//! let document = catalog.render(CaseType::Other, &values)?;
//! assert!(document.contains("Autor: João Silva  \n"));
//! # Ok::<(), contestation_renderer::RenderError>(())
//! ```
//!
//! [`CaseType`]: contestation_domain::CaseType

#![warn(missing_docs)]

mod catalog;
mod error;
mod template;

pub use catalog::TemplateCatalog;
pub use error::RenderError;
pub use template::Template;
