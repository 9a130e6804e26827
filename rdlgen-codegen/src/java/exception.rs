//! `ResourceException` generation.
//!
//! The exception class carries an HTTP status code and a payload. Its status
//! constants and `codeToString` switch are generated from [`STATUS_CODES`],
//! which [`status_name`] also reads, so both always agree.

use std::borrow::Cow;

/// HTTP status known to the generated exception class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatus {
    /// Numeric status code.
    pub code: u16,
    /// Java constant name.
    pub constant: &'static str,
    /// Canonical reason phrase.
    pub reason: &'static str,
}

const fn status(code: u16, constant: &'static str, reason: &'static str) -> HttpStatus {
    HttpStatus {
        code,
        constant,
        reason,
    }
}

/// Status codes with named constants, in ascending order.
pub const STATUS_CODES: &[HttpStatus] = &[
    status(200, "OK", "OK"),
    status(201, "CREATED", "Created"),
    status(202, "ACCEPTED", "Accepted"),
    status(204, "NO_CONTENT", "No Content"),
    status(301, "MOVED_PERMANENTLY", "Moved Permanently"),
    status(302, "FOUND", "Found"),
    status(303, "SEE_OTHER", "See Other"),
    status(304, "NOT_MODIFIED", "Not Modified"),
    status(307, "TEMPORARY_REDIRECT", "Temporary Redirect"),
    status(400, "BAD_REQUEST", "Bad Request"),
    status(401, "UNAUTHORIZED", "Unauthorized"),
    status(403, "FORBIDDEN", "Forbidden"),
    status(404, "NOT_FOUND", "Not Found"),
    status(409, "CONFLICT", "Conflict"),
    status(410, "GONE", "Gone"),
    status(412, "PRECONDITION_FAILED", "Precondition Failed"),
    status(413, "REQUEST_ENTITY_TOO_LARGE", "Request Entity Too Large"),
    status(415, "UNSUPPORTED_MEDIA_TYPE", "Unsupported Media Type"),
    status(421, "MISDIRECTED_REQUEST", "Misdirected Request"),
    status(428, "PRECONDITION_REQUIRED", "Precondition Required"),
    status(429, "TOO_MANY_REQUESTS", "Too Many Requests"),
    status(500, "INTERNAL_SERVER_ERROR", "Internal Server Error"),
    status(501, "NOT_IMPLEMENTED", "Not Implemented"),
    status(503, "SERVICE_UNAVAILABLE", "Service Unavailable"),
];

/// Looks up a status by code.
#[must_use]
pub fn find_status(code: u16) -> Option<&'static HttpStatus> {
    STATUS_CODES.iter().find(|s| s.code == code)
}

/// Returns the reason phrase for `code`, or the code in decimal if it has no
/// named constant. Matches the generated `codeToString`.
#[must_use]
pub fn status_name(code: u16) -> Cow<'static, str> {
    match find_status(code) {
        Some(status) => Cow::Borrowed(status.reason),
        None => Cow::Owned(code.to_string()),
    }
}

/// Generates the body of the `ResourceException` class.
#[must_use]
pub fn generate_resource_exception() -> String {
    let mut output = String::new();

    output.push_str("public class ResourceException extends RuntimeException {\n");

    for status in STATUS_CODES {
        output.push_str(&format!(
            "    public final static int {} = {};\n",
            status.constant, status.code
        ));
    }
    output.push('\n');

    // codeToString
    output.push_str("    public static String codeToString(int code) {\n");
    output.push_str("        switch (code) {\n");
    for status in STATUS_CODES {
        output.push_str(&format!(
            "        case {}: return \"{}\";\n",
            status.constant, status.reason
        ));
    }
    output.push_str("        default: return \"\" + code;\n");
    output.push_str("        }\n");
    output.push_str("    }\n\n");

    output.push_str("    int code;\n");
    output.push_str("    Object data;\n\n");

    // Constructors
    output.push_str("    public ResourceException(int code) {\n");
    output.push_str(
        "        this(code, new ResourceError().code(code).message(codeToString(code)));\n",
    );
    output.push_str("    }\n\n");

    output.push_str("    public ResourceException(int code, Object data) {\n");
    output.push_str("        super(\"ResourceException (\" + code + \"): \" + data);\n");
    output.push_str("        this.code = code;\n");
    output.push_str("        this.data = data;\n");
    output.push_str("    }\n\n");

    // Accessors
    output.push_str("    public int getCode() {\n");
    output.push_str("        return code;\n");
    output.push_str("    }\n\n");

    output.push_str("    public Object getData() {\n");
    output.push_str("        return data;\n");
    output.push_str("    }\n\n");

    // Class.cast throws ClassCastException on a payload of the wrong type.
    output.push_str("    public <T> T getData(Class<T> cl) {\n");
    output.push_str("        return cl.cast(data);\n");
    output.push_str("    }\n\n");

    output.push_str("}\n");

    output
}
