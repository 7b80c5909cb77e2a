use validator::ValidationErrors;

/// Flattens `validator` output into `field: message` strings for the
/// `ServiceError::Validation` channel.
pub fn format_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut error_messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match error.code.as_ref() {
                    "email" => "Invalid email format".to_string(),
                    "length" => "Invalid length".to_string(),
                    "range" => "Value out of range".to_string(),
                    _ => format!("Invalid {field}"),
                });
            error_messages.push(format!("{field}: {message}"));
        }
    }

    if error_messages.is_empty() {
        error_messages.push("Validation failed".to_string());
    }

    error_messages
}
