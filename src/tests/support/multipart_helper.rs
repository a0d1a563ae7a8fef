//! Hand-rolled multipart/form-data bodies for route tests.

pub fn text_part(name: &str, value: &str) -> Vec<u8> {
    format!(
        "Content-Disposition: form-data; name=\"{}\"\r\n\r\n{}",
        name, value
    )
    .into_bytes()
}

pub fn file_part(name: &str, filename: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut part = format!(
        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
        name, filename, content_type
    )
    .into_bytes();
    part.extend_from_slice(data);
    part
}

pub fn multipart_body(boundary: &str, parts: &[Vec<u8>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(part);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    body
}
