/// Formats an `::error::` workflow command, which the Actions runner turns
/// into a failure annotation.
pub(crate) fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
