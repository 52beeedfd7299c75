use std::collections::HashMap;

use leon::Template;

use crate::error::Result;

/// Renders a command template with the given values.
///
/// Values are inserted verbatim, braces included.
///
/// # Errors
///
/// Returns an error if the template cannot be parsed or a token has no value.
pub fn interpolate_command(template: &str, context: &HashMap<String, String>) -> Result<String> {
    let template = Template::parse(template)?;

    Ok(template.render(&context)?)
}
