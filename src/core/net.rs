// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only), no TLS.
// HTTP/1.0 so the server closes the connection at the end (no chunked transfer).

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::config::consts::HTTP_TIMEOUT_SECS;

/// `http://host[:port]/path` → (host, port, path). Anything else → None.
pub fn parse_http_url(url: &str) -> Option<(String, u16, String)> {
    let rest = url.trim().strip_prefix("http://")?;
    let (authority, path) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, "/"),
    };
    if authority.is_empty() { return None; }
    let (host, port) = match authority.rsplit_once(':') {
        Some((h, p)) => (h, p.parse::<u16>().ok()?),
        None => (authority, 80),
    };
    if host.is_empty() { return None; }
    Some((s!(host), port, s!(path)))
}

pub fn http_get(host: &str, port: u16, path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut s = TcpStream::connect((host, port))?;
    s.set_read_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: result_card/0.1\r\nAccept: application/json\r\nConnection: close\r\n\r\n",
        path, host
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;

    let head_end = buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
        .ok_or("Malformed HTTP response")?;
    let head = String::from_utf8_lossy(&buf[..head_end]);
    let status = head.split("\r\n").next().unwrap_or("");
    let code = status.split_whitespace().nth(1).unwrap_or("");
    if code != "200" {
        return Err(format!("HTTP error: {} {}:{}{}", status, host, port, path).into());
    }
    Ok(String::from_utf8(buf[head_end + 4..].to_vec())?)
}
