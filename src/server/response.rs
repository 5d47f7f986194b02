use super::http_status::HttpStatus;

/// Appended to every response, success or error, so browsers re-fetch on
/// every reload.
pub const NO_CACHE_HEADERS: &[(&str, &str)] = &[
    ("Cache-Control", "no-cache, no-store, must-revalidate"),
    ("Pragma", "no-cache"),
    ("Expires", "0"),
];

fn no_cache_block() -> String {
    NO_CACHE_HEADERS
        .iter()
        .map(|(name, value)| format!("{}: {}\r\n", name, value))
        .collect()
}

/// Header block for a successful file response; the body (if any) follows.
pub fn file_headers(content_type: &str, content_length: u64) -> String {
    format!(
        "{}{}Content-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        HttpStatus::Ok.as_response_line(),
        no_cache_block(),
        content_type,
        content_length
    )
}

/// Complete error response with a minimal HTML body.
pub fn error_response(status: HttpStatus) -> Vec<u8> {
    let body = match status {
        HttpStatus::NotFound => "<html><body><h1>404 Not Found</h1></body></html>",
        HttpStatus::Forbidden => "<html><body><h1>403 Forbidden</h1></body></html>",
        HttpStatus::BadRequest => "<html><body><h1>400 Bad Request</h1></body></html>",
        HttpStatus::MethodNotAllowed => {
            "<html><body><h1>405 Method Not Allowed</h1></body></html>"
        }
        HttpStatus::InternalServerError => {
            "<html><body><h1>500 Internal Server Error</h1></body></html>"
        }
        HttpStatus::Ok => "",
    };

    format!(
        "{}{}Content-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status.as_response_line(),
        no_cache_block(),
        body.len(),
        body
    )
    .into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_headers_carry_no_cache_triple() {
        let headers = file_headers("text/html", 42);
        assert!(headers.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(headers.contains("Cache-Control: no-cache, no-store, must-revalidate\r\n"));
        assert!(headers.contains("Pragma: no-cache\r\n"));
        assert!(headers.contains("Expires: 0\r\n"));
        assert!(headers.contains("Content-Length: 42\r\n"));
        assert!(headers.ends_with("\r\n\r\n"));
    }

    #[test]
    fn error_responses_carry_no_cache_triple() {
        for status in [
            HttpStatus::BadRequest,
            HttpStatus::Forbidden,
            HttpStatus::NotFound,
            HttpStatus::MethodNotAllowed,
            HttpStatus::InternalServerError,
        ] {
            let response = String::from_utf8(error_response(status)).unwrap();
            for (name, value) in NO_CACHE_HEADERS {
                assert!(
                    response.contains(&format!("{}: {}\r\n", name, value)),
                    "missing {} for {:?}",
                    name,
                    status
                );
            }
            assert!(response.contains(&status.code().to_string()));
        }
    }
}
