use anyhow::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    NotFound,
    PermissionDenied,
    NotADirectory,
    Other,
}

fn find_io_error(error: &Error) -> Option<&std::io::Error> {
    error
        .chain()
        .find_map(|err| err.downcast_ref::<std::io::Error>())
}

/// Classify a listing error based on the io::Error in its chain
pub fn classify_error(error: &Error) -> ErrorType {
    if let Some(io_err) = find_io_error(error) {
        return match io_err.kind() {
            std::io::ErrorKind::NotFound => ErrorType::NotFound,
            std::io::ErrorKind::PermissionDenied => ErrorType::PermissionDenied,
            std::io::ErrorKind::NotADirectory => ErrorType::NotADirectory,
            _ => ErrorType::Other,
        };
    }

    let error_msg = error.to_string().to_lowercase();
    if error_msg.contains("not a directory") {
        return ErrorType::NotADirectory;
    }

    ErrorType::Other
}

/// Status bar message for a failed listing refresh
pub fn format_error_message(error: &Error) -> String {
    let headline = match classify_error(error) {
        ErrorType::NotFound => "Folder not found",
        ErrorType::PermissionDenied => "Permission denied",
        ErrorType::NotADirectory => "Not a folder",
        ErrorType::Other => "Listing failed",
    };

    // Context wrappers carry the path; the root cause carries the detail
    format!("{}: {}", headline, error)
}
