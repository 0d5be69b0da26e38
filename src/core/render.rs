//! Diagnostic echo body rendering.
//!
//! The fresh-response body is not the interesting part of this system: it
//! wraps the request's method, URI, parameters, and headers in a minimal
//! HTML envelope so a browser shows what the server saw.

use crate::core::error::Result;
use crate::core::types::RequestSnapshot;
use bytes::Bytes;
use std::fmt::Write;

/// Render the UTF-8 diagnostic document for a fresh response.
///
/// Headers are dumped one `name: value` pair per line, in the snapshot's
/// sorted order, so identical requests render byte-identical bodies.
///
/// # Errors
///
/// Returns `InvalidUtf8` when parameter extraction reads a body that does
/// not decode.
pub fn render_echo(request: &RequestSnapshot) -> Result<Bytes> {
    let params = request.params()?;

    let mut doc = String::new();
    doc.push_str("<html><body>");
    let _ = write!(doc, "Method: {}<br/>", request.method);
    let _ = write!(doc, "URI: {}<br/>", request.uri);
    let _ = write!(doc, "Parameters: {}<br/>", params);
    doc.push_str("Headers:<br/>");
    let mut first = true;
    for (name, value) in &request.headers {
        if !first {
            doc.push_str("<br/>");
        }
        let _ = write!(doc, "{}: {}", name, value);
        first = false;
    }
    doc.push_str("</body></html>");

    Ok(Bytes::from(doc))
}
