use crate::chapter::GreekSection;
use crate::translation::TranslationIndex;

/// One `<span class="verse">` per verse, labelled with its number, simplified text inside
pub fn section_html(section: &GreekSection, translations: &TranslationIndex) -> String {
    let mut html = String::new();
    for verse in section.verses() {
        let num = verse.verse_num();
        let text = escape_html(&verse.simplified(translations));
        html.push_str(&format!(
            r#"<span class="verse" id="verse{num}"><b>{num}</b> {text}</span>"#
        ));
    }
    html
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
