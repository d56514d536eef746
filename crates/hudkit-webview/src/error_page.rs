//! Page shown in place of a URL that failed to load below the HTTP level
//! (unresolvable host, refused connection and the like).

/// Translucent red overlay naming the failure and the URI.
pub fn error_page_html(message: &str, uri: &str) -> String {
    format!(
        "<html>\n\
         <head>\n\
         <style>\n    \
         body {{ background : rgba(255,0,0,0.2) }}\n    \
         h1 {{ color : white; filter: drop-shadow(0 0 0.75rem black); }}\n\
         </style>\n\
         </head>\n\
         <h1>{}<br>{}</h1>\n\
         </html>",
        escape_html(message),
        escape_html(uri)
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_message_and_uri() {
        let html = error_page_html("Could not resolve host", "http://nowhere.invalid/");
        assert!(html.contains("<h1>Could not resolve host<br>http://nowhere.invalid/</h1>"));
        assert!(html.contains("rgba(255,0,0,0.2)"));
    }

    #[test]
    fn markup_in_message_is_inert() {
        let html = error_page_html("<script>alert(1)</script>", "http://x/?a=1&b=2");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("a=1&amp;b=2"));
    }
}
