/// Escape text for safe insertion into HTML element content or attribute values
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape prose and turn its line breaks into `<br>` tags
pub fn text_to_html(text: &str) -> String {
    html_escape(&text.replace("\r\n", "\n")).replace('\n', "<br>")
}
