//! SSML document assembly.

/// Builds the SSML document for the given voice and text.
///
/// The `xml:lang` attribute is derived from the voice name's locale
/// prefix (`ja-JP-KeitaNeural` speaks `ja-JP`).
pub fn build_ssml(voice: &str, text: &str) -> String {
    format!(
        "<speak version='1.0' xml:lang='{lang}'><voice name='{voice}'>{text}</voice></speak>",
        lang = voice_locale(voice),
        voice = voice,
        text = escape_xml(text),
    )
}

/// Locale prefix of a voice name: the first two dash-separated segments.
fn voice_locale(voice: &str) -> &str {
    let mut dashes = voice.char_indices().filter(|(_, c)| *c == '-');
    match dashes.nth(1) {
        Some((index, _)) => &voice[..index],
        None => voice,
    }
}

/// Escapes XML-significant characters in synthesized text.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssml_wraps_text_in_the_configured_voice() {
        let ssml = build_ssml("ja-JP-KeitaNeural", "こんにちは");
        assert_eq!(
            ssml,
            "<speak version='1.0' xml:lang='ja-JP'>\
             <voice name='ja-JP-KeitaNeural'>こんにちは</voice></speak>"
        );
    }

    #[test]
    fn xml_significant_characters_are_escaped() {
        let ssml = build_ssml("en-US-JennyNeural", "a < b & c > 'd' \"e\"");
        assert!(ssml.contains("a &lt; b &amp; c &gt; &apos;d&apos; &quot;e&quot;"));
    }

    #[test]
    fn locale_prefix_is_the_first_two_segments() {
        assert_eq!(voice_locale("ja-JP-KeitaNeural"), "ja-JP");
        assert_eq!(voice_locale("en-US-JennyNeural"), "en-US");
        assert_eq!(voice_locale("nospecialformat"), "nospecialformat");
    }
}
