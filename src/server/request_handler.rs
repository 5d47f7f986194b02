use log::{debug, error, info, warn};
use std::fs;
use std::io::{BufReader, BufWriter, Read, Write};
use std::net::TcpStream;
use std::path::Path;

use super::http_status::HttpStatus;
use super::mime;
use super::response;

pub fn handle_client(mut stream: TcpStream, document_root: &Path) {
    let peer_addr = stream
        .peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    debug!("Handling request from {}", peer_addr);

    let mut buffer = [0u8; 8192];
    let bytes_read = match stream.read(&mut buffer) {
        Ok(0) => {
            debug!("Connection closed by client {}", peer_addr);
            return;
        }
        Ok(n) => n,
        Err(e) => {
            error!("Error reading from {}: {}", peer_addr, e);
            return;
        }
    };

    let request = String::from_utf8_lossy(&buffer[..bytes_read]);
    let Some(request_line) = request.lines().next() else {
        send_error(&mut stream, HttpStatus::BadRequest);
        return;
    };

    let parts: Vec<&str> = request_line.split_whitespace().collect();
    if parts.len() < 2 {
        send_error(&mut stream, HttpStatus::BadRequest);
        return;
    }

    let method = parts[0];
    let path = match normalize_path(parts[1]) {
        Ok(path) => path,
        Err(status) => {
            warn!(
                "Rejected path from {}: {} ({})",
                peer_addr,
                parts[1],
                status.code()
            );
            send_error(&mut stream, status);
            return;
        }
    };

    let file_path = document_root.join(&path[1..]);

    match method {
        "GET" | "HEAD" => serve_file(&mut stream, &file_path, method == "HEAD", &peer_addr),
        _ => {
            warn!("Unsupported method from {}: {}", peer_addr, method);
            send_error(&mut stream, HttpStatus::MethodNotAllowed);
        }
    }
}

/// Strips the query string and fragment, guards against path traversal, and
/// maps the root path to the index page.
fn normalize_path(raw: &str) -> Result<&str, HttpStatus> {
    let path = raw.split('?').next().unwrap_or(raw);
    let path = path.split('#').next().unwrap_or(path);

    if !path.starts_with('/') {
        return Err(HttpStatus::BadRequest);
    }

    if path.contains("..") {
        return Err(HttpStatus::Forbidden);
    }

    if path == "/" {
        return Ok("/index.html");
    }

    Ok(path)
}

fn serve_file(stream: &mut TcpStream, file_path: &Path, is_head: bool, client_addr: &str) {
    if !file_path.exists() {
        info!("File not found for {}: {:?}", client_addr, file_path);
        send_error(stream, HttpStatus::NotFound);
        return;
    }

    if !file_path.is_file() {
        warn!(
            "Attempt to access directory from {}: {:?}",
            client_addr, file_path
        );
        send_error(stream, HttpStatus::Forbidden);
        return;
    }

    let metadata = match fs::metadata(file_path) {
        Ok(meta) => meta,
        Err(e) => {
            error!("Error getting metadata for {:?}: {}", file_path, e);
            send_error(stream, HttpStatus::InternalServerError);
            return;
        }
    };

    let content_type = mime::content_type_for(file_path);
    let headers = response::file_headers(content_type, metadata.len());

    if is_head {
        if let Err(e) = stream.write_all(headers.as_bytes()) {
            error!("Error sending HEAD response to {}: {}", client_addr, e);
            return;
        }
    } else {
        let file = match fs::File::open(file_path) {
            Ok(file) => file,
            Err(e) => {
                error!("Error opening file {:?} for {}: {}", file_path, client_addr, e);
                send_error(stream, HttpStatus::InternalServerError);
                return;
            }
        };

        let mut reader = BufReader::new(file);
        let mut writer = BufWriter::new(stream);

        if let Err(e) = writer.write_all(headers.as_bytes()) {
            error!("Error sending headers to {}: {}", client_addr, e);
            return;
        }

        if let Err(e) = std::io::copy(&mut reader, &mut writer) {
            error!("Error sending {:?} to {}: {}", file_path, client_addr, e);
            return;
        }

        if let Err(e) = writer.flush() {
            error!("Error flushing stream for {}: {}", client_addr, e);
            return;
        }
    }

    info!(
        "Served {} to {}: {:?} ({} bytes)",
        if is_head { "headers" } else { "file" },
        client_addr,
        file_path,
        metadata.len()
    );
}

fn send_error(stream: &mut TcpStream, status: HttpStatus) {
    if let Err(e) = stream.write_all(&response::error_response(status)) {
        error!("Error sending {} response: {}", status.code(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_maps_to_index() {
        assert_eq!(normalize_path("/"), Ok("/index.html"));
    }

    #[test]
    fn query_and_fragment_are_stripped() {
        assert_eq!(normalize_path("/app.js?v=123"), Ok("/app.js"));
        assert_eq!(normalize_path("/page.html#section"), Ok("/page.html"));
        assert_eq!(normalize_path("/?reload=1"), Ok("/index.html"));
    }

    #[test]
    fn traversal_is_forbidden() {
        assert_eq!(
            normalize_path("/../etc/passwd"),
            Err(HttpStatus::Forbidden)
        );
        assert_eq!(
            normalize_path("/static/../../secret"),
            Err(HttpStatus::Forbidden)
        );
    }

    #[test]
    fn relative_target_is_rejected() {
        assert_eq!(normalize_path("index.html"), Err(HttpStatus::BadRequest));
        assert_eq!(normalize_path("*"), Err(HttpStatus::BadRequest));
    }
}
