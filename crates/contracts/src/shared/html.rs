/// Escapes text for use inside an HTML element or a double-quoted attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("Red"), "Red");
        assert_eq!(escape("Black & White"), "Black &amp; White");
        assert_eq!(escape(r#"<b>"x"</b>"#), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
    }
}
