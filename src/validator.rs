use crate::error::{HtmlError, HtmlResult};
use regex::Regex;
use std::sync::OnceLock;

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9-]*$").unwrap())
}

fn attribute_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_:][A-Za-z0-9_:.-]*$").unwrap())
}

fn lang_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z]{1,8}(-[A-Za-z0-9]{1,8})*$").unwrap())
}

/// Tag names start with a letter and contain only letters, digits and '-'
pub fn validate_tag_name(tag: &str) -> HtmlResult<()> {
    if tag_regex().is_match(tag) {
        Ok(())
    } else {
        Err(HtmlError::InvalidTag {
            tag: tag.to_string(),
        })
    }
}

/// Attribute names follow the XML name rules (no spaces, quotes, '=' or '>')
pub fn validate_attribute_name(name: &str) -> HtmlResult<()> {
    if attribute_regex().is_match(name) {
        Ok(())
    } else {
        Err(HtmlError::InvalidAttribute {
            name: name.to_string(),
        })
    }
}

/// BCP 47 shaped language tag, e.g. `en` or `pt-BR`
pub fn validate_lang(lang: &str) -> HtmlResult<()> {
    if lang_regex().is_match(lang) {
        Ok(())
    } else {
        Err(HtmlError::InvalidLang {
            lang: lang.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tags() {
        for tag in ["div", "h1", "my-widget", "TABLE"] {
            assert!(validate_tag_name(tag).is_ok(), "{} should be valid", tag);
        }
    }

    #[test]
    fn test_invalid_tags() {
        for tag in ["", "1div", "di v", "<p>", "a\"b"] {
            assert!(validate_tag_name(tag).is_err(), "{} should be invalid", tag);
        }
    }

    #[test]
    fn test_attribute_names() {
        assert!(validate_attribute_name("clazz").is_ok());
        assert!(validate_attribute_name("xml:lang").is_ok());
        assert!(validate_attribute_name("data-id").is_ok());
        assert!(validate_attribute_name("on click").is_err());
        assert!(validate_attribute_name("a=b").is_err());
    }

    #[test]
    fn test_lang() {
        assert!(validate_lang("en").is_ok());
        assert!(validate_lang("pt-BR").is_ok());
        assert!(validate_lang("").is_err());
        assert!(validate_lang("en us").is_err());
    }
}
