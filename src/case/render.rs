use crate::case::scheme::{Scheme, WordCasing};
use crate::case::tokenizer::{Word, WordSequence};
use crate::case::AcronymStyle;

/// Render `words` in `scheme`, collapsing acronyms (`HTTP` -> `Http`).
pub fn render(words: &WordSequence, scheme: Scheme) -> String {
    render_with(words, scheme, AcronymStyle::Collapse)
}

/// Render `words` in `scheme` with an explicit acronym style.
///
/// Only capitalized positions are affected by `acronyms`: camelCase keeps
/// its leading word lowercase and snake/kebab output is always lowercase.
pub fn render_with(words: &WordSequence, scheme: Scheme, acronyms: AcronymStyle) -> String {
    let capacity = words.iter().map(|w| w.as_str().len() + 1).sum();
    let mut out = String::with_capacity(capacity);

    for (index, word) in words.iter().enumerate() {
        if index > 0 {
            out.push_str(scheme.separator());
        }

        match scheme.casing(index) {
            WordCasing::Lower => out.push_str(&word.as_str().to_lowercase()),
            WordCasing::Capitalized
                if acronyms == AcronymStyle::Preserve && word.is_acronym() =>
            {
                out.push_str(word.as_str())
            }
            WordCasing::Capitalized => capitalize_into(word, &mut out),
        }
    }

    out
}

fn capitalize_into(word: &Word, out: &mut String) {
    if word.is_numeric() {
        out.push_str(word.as_str());
        return;
    }

    let mut chars = word.as_str().chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::tokenizer::tokenize;

    fn convert(input: &str, scheme: Scheme) -> String {
        render(&tokenize(input), scheme)
    }

    #[test]
    fn test_scheme_table() {
        assert_eq!(convert("user first name", Scheme::Camel), "userFirstName");
        assert_eq!(convert("user first name", Scheme::Pascal), "UserFirstName");
        assert_eq!(convert("UserFirstName", Scheme::Snake), "user_first_name");
        assert_eq!(convert("user_first_name", Scheme::Kebab), "user-first-name");
    }

    #[test]
    fn test_acronyms_collapse_by_default() {
        assert_eq!(convert("HTTPServer2Client", Scheme::Snake), "http_server_2_client");
        assert_eq!(convert("HTTPServer2Client", Scheme::Pascal), "HttpServer2Client");
        assert_eq!(convert("HTTPServer2Client", Scheme::Camel), "httpServer2Client");
        assert_eq!(convert("get HTTP response", Scheme::Camel), "getHttpResponse");
    }

    #[test]
    fn test_acronyms_preserved_on_request() {
        let words = tokenize("get HTTP response");
        assert_eq!(
            render_with(&words, Scheme::Camel, AcronymStyle::Preserve),
            "getHTTPResponse"
        );

        let words = tokenize("HTTPServer");
        assert_eq!(
            render_with(&words, Scheme::Pascal, AcronymStyle::Preserve),
            "HTTPServer"
        );
        assert_eq!(
            render_with(&words, Scheme::Camel, AcronymStyle::Preserve),
            "httpServer"
        );
        assert_eq!(
            render_with(&words, Scheme::Kebab, AcronymStyle::Preserve),
            "http-server"
        );
    }

    #[test]
    fn test_mixed_case_words_are_normalized() {
        assert_eq!(convert("uSER fIRST", Scheme::Snake), "u_ser_f_irst");
        assert_eq!(convert("mcDONALD", Scheme::Pascal), "McDonald");
    }

    #[test]
    fn test_digits_pass_through() {
        assert_eq!(convert("2 fast 4 you", Scheme::Pascal), "2Fast4You");
        assert_eq!(convert("2 fast", Scheme::Camel), "2Fast");
        assert_eq!(convert("level 10", Scheme::Kebab), "level-10");
    }

    #[test]
    fn test_empty_sequence_renders_empty() {
        for scheme in Scheme::ALL {
            assert_eq!(render(&WordSequence::default(), scheme), "");
            assert_eq!(convert("   ", scheme), "");
        }
    }

    #[test]
    fn test_single_word() {
        assert_eq!(convert("NAME", Scheme::Camel), "name");
        assert_eq!(convert("name", Scheme::Pascal), "Name");
        assert_eq!(convert("Name", Scheme::Snake), "name");
    }
}
