//! Template command implementation.

use crate::cli::TemplateArgs;
use crate::error::Result;
use crate::output::Formatter;
use contestation_domain::CaseType;
use contestation_renderer::TemplateCatalog;

/// Execute the template command.
pub fn execute_template(
    args: TemplateArgs,
    catalog: &TemplateCatalog,
    formatter: &Formatter,
) -> Result<()> {
    let case_type = CaseType::from(args.case_type);
    println!(
        "{}",
        formatter.format_template(case_type, catalog.template(case_type))?
    );
    Ok(())
}
