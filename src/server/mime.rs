use std::path::Path;

// Default extension table. `js` keeps the platform's legacy `text/javascript`
// mapping here; `content_type_for` overrides it.
static MIME_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("js", "text/javascript"),
    ("mjs", "text/javascript"),
    ("json", "application/json"),
    ("map", "application/json"),
    ("xml", "application/xml"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("webp", "image/webp"),
    ("wasm", "application/wasm"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("ttf", "font/ttf"),
    ("txt", "text/plain"),
];

/// Resolves the Content-Type for a file path. Paths with a `.js` extension
/// always report `application/javascript`; everything else falls through to
/// the default table.
pub fn content_type_for(path: &Path) -> &'static str {
    if path.extension().and_then(|s| s.to_str()) == Some("js") {
        return "application/javascript";
    }

    default_content_type(path)
}

fn default_content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    MIME_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or("application/octet-stream")
}
