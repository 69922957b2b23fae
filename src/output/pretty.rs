use colored::Colorize;

use crate::command::{Response, STATUS_HEADER};

/// Format a response as its plain message.
///
/// Rejections are highlighted and the status header is bold when colors are
/// enabled; the text itself is unchanged.
pub fn format_response_pretty(response: &Response) -> String {
    match response {
        Response::Rejected(rejection) => rejection.to_string().yellow().to_string(),
        Response::Status { slots } if !slots.is_empty() => {
            let mut output = format!("{}\n", STATUS_HEADER.bold());
            for row in slots {
                output.push_str(&format!("{} {}\n", row.slot, row.registration));
            }
            output
        }
        _ => response.to_string(),
    }
}
