//! Inline span tokenization.
//!
//! Converts a raw text span into an ordered sequence of typed fragments.
//! Delimiter splitting runs in a fixed precedence order (bold, italic,
//! code), each pass re-splitting only fragments still classified plain,
//! followed by image and link extraction on the remaining plain runs.

use std::ops::Range;

use regex::Regex;

use crate::error::{Error, Result};

use super::options::ErrorMode;

/// A typed unit of inline content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextFragment {
    /// Unstyled text
    Plain(String),

    /// Bold text delimited by `**`
    Bold(String),

    /// Italic text delimited by `*`
    Italic(String),

    /// Inline code delimited by backticks
    Code(String),

    /// A hyperlink
    Link {
        /// Anchor text
        text: String,
        /// Target URL
        url: String,
    },

    /// An inline image
    Image {
        /// Alternative text
        alt: String,
        /// Source URL
        url: String,
    },
}

/// Inline tokenizer with compiled syntax patterns.
pub struct InlineTokenizer {
    image_regex: Regex,
    link_regex: Regex,
}

impl InlineTokenizer {
    /// Create a new tokenizer.
    pub fn new() -> Self {
        Self {
            image_regex: Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap(),
            link_regex: Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap(),
        }
    }

    /// Tokenize a text span, degrading malformed constructs instead of
    /// failing.
    pub fn tokenize(&self, text: &str) -> Vec<TextFragment> {
        // Lenient tokenization has no error paths.
        self.tokenize_with_mode(text, ErrorMode::Lenient)
            .unwrap_or_else(|_| vec![TextFragment::Plain(text.to_string())])
    }

    /// Tokenize a text span with explicit error handling.
    ///
    /// In strict mode an unbalanced delimiter run fails with
    /// `UnbalancedDelimiter`. In lenient mode the pass that finds the
    /// run leaves it unsplit, though a later pass may still match inside
    /// the leftover text: a stray `**` reads as two `*` to the italic
    /// pass.
    pub fn tokenize_with_mode(&self, text: &str, mode: ErrorMode) -> Result<Vec<TextFragment>> {
        if text.is_empty() {
            return Ok(vec![TextFragment::Plain(String::new())]);
        }

        let mut fragments = vec![TextFragment::Plain(text.to_string())];
        fragments = split_on_delimiter(fragments, "**", TextFragment::Bold, mode)?;
        fragments = split_on_delimiter(fragments, "*", TextFragment::Italic, mode)?;
        fragments = split_on_delimiter(fragments, "`", TextFragment::Code, mode)?;
        Ok(self.split_links_and_images(fragments))
    }

    /// Extract all `(alt, url)` image pairs from a text span.
    pub fn extract_images(&self, text: &str) -> Vec<(String, String)> {
        self.image_regex
            .captures_iter(text)
            .filter_map(|caps| match (caps.get(1), caps.get(2)) {
                (Some(alt), Some(url)) => {
                    Some((alt.as_str().to_string(), url.as_str().to_string()))
                }
                _ => None,
            })
            .collect()
    }

    /// Extract all `(text, url)` link pairs from a text span, ignoring
    /// image syntax.
    pub fn extract_links(&self, text: &str) -> Vec<(String, String)> {
        let masked = self.mask_images(text);
        self.link_regex
            .captures_iter(&masked)
            .filter_map(|caps| match (caps.get(1), caps.get(2)) {
                (Some(anchor), Some(url)) => {
                    Some((anchor.as_str().to_string(), url.as_str().to_string()))
                }
                _ => None,
            })
            .collect()
    }

    /// Split plain fragments on image syntax, then on link syntax.
    ///
    /// Images go first: the link pattern is a subset of the image
    /// pattern, so the link pass only ever sees runs with the image
    /// spans already cut out.
    fn split_links_and_images(&self, fragments: Vec<TextFragment>) -> Vec<TextFragment> {
        let fragments = split_plain_runs(fragments, |text| self.image_matches(text));
        split_plain_runs(fragments, |text| self.link_matches(text))
    }

    /// Image matches with their byte ranges, in order of appearance.
    fn image_matches(&self, text: &str) -> Vec<(Range<usize>, TextFragment)> {
        self.image_regex
            .captures_iter(text)
            .filter_map(|caps| match (caps.get(0), caps.get(1), caps.get(2)) {
                (Some(whole), Some(alt), Some(url)) => Some((
                    whole.range(),
                    TextFragment::Image {
                        alt: alt.as_str().to_string(),
                        url: url.as_str().to_string(),
                    },
                )),
                _ => None,
            })
            .collect()
    }

    /// Link matches with their byte ranges, in order of appearance.
    ///
    /// Image spans are masked out first, so a `[` directly after `!`
    /// never starts a link. The mask preserves byte offsets.
    fn link_matches(&self, text: &str) -> Vec<(Range<usize>, TextFragment)> {
        let masked = self.mask_images(text);
        self.link_regex
            .captures_iter(&masked)
            .filter_map(|caps| match (caps.get(0), caps.get(1), caps.get(2)) {
                (Some(whole), Some(anchor), Some(url)) => Some((
                    whole.range(),
                    TextFragment::Link {
                        text: anchor.as_str().to_string(),
                        url: url.as_str().to_string(),
                    },
                )),
                _ => None,
            })
            .collect()
    }

    /// Replace image spans with spaces of equal byte length, preserving
    /// offsets for the link scan.
    fn mask_images(&self, text: &str) -> String {
        let mut masked = text.to_string();
        for m in self.image_regex.find_iter(text) {
            masked.replace_range(m.range(), &" ".repeat(m.as_str().len()));
        }
        masked
    }
}

impl Default for InlineTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Split the plain fragments on a delimiter, converting the text between
/// delimiter pairs with `styled`.
///
/// Split parts alternate plain and styled. Empty plain parts are dropped;
/// empty styled parts are kept so rendering can substitute a placeholder.
/// An even part count means an odd number of delimiters: lenient mode
/// keeps the fragment unsplit, strict mode fails.
fn split_on_delimiter(
    fragments: Vec<TextFragment>,
    delimiter: &str,
    styled: fn(String) -> TextFragment,
    mode: ErrorMode,
) -> Result<Vec<TextFragment>> {
    let mut result = Vec::new();

    for fragment in fragments {
        let text = match fragment {
            TextFragment::Plain(text) => text,
            other => {
                result.push(other);
                continue;
            }
        };

        let parts: Vec<&str> = text.split(delimiter).collect();
        if parts.len() == 1 {
            result.push(TextFragment::Plain(text));
            continue;
        }
        if parts.len() % 2 == 0 {
            if mode == ErrorMode::Strict {
                return Err(Error::UnbalancedDelimiter(format!(
                    "{} in {:?}",
                    delimiter, text
                )));
            }
            log::debug!("unbalanced {} delimiter, leaving unsplit: {:?}", delimiter, text);
            result.push(TextFragment::Plain(text));
            continue;
        }

        for (index, part) in parts.iter().enumerate() {
            if index % 2 == 0 {
                if !part.is_empty() {
                    result.push(TextFragment::Plain(part.to_string()));
                }
            } else {
                result.push(styled(part.to_string()));
            }
        }
    }

    Ok(result)
}

/// Split each plain fragment around the matches produced by `find`,
/// leaving other fragments untouched. Empty runs between matches are
/// dropped.
fn split_plain_runs<F>(fragments: Vec<TextFragment>, find: F) -> Vec<TextFragment>
where
    F: Fn(&str) -> Vec<(Range<usize>, TextFragment)>,
{
    let mut result = Vec::new();

    for fragment in fragments {
        let text = match fragment {
            TextFragment::Plain(text) => text,
            other => {
                result.push(other);
                continue;
            }
        };

        let matches = find(&text);
        if matches.is_empty() {
            result.push(TextFragment::Plain(text));
            continue;
        }

        let mut cursor = 0;
        for (range, target) in matches {
            if range.start > cursor {
                result.push(TextFragment::Plain(text[cursor..range.start].to_string()));
            }
            result.push(target);
            cursor = range.end;
        }
        if cursor < text.len() {
            result.push(TextFragment::Plain(text[cursor..].to_string()));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn plain(text: &str) -> TextFragment {
        TextFragment::Plain(text.to_string())
    }

    #[test]
    fn test_tokenize_plain_text() {
        let tokenizer = InlineTokenizer::new();
        let fragments = tokenizer.tokenize("Plain text without delimiters");
        assert_eq!(fragments, vec![plain("Plain text without delimiters")]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        let tokenizer = InlineTokenizer::new();
        assert_eq!(tokenizer.tokenize(""), vec![plain("")]);
    }

    #[test]
    fn test_tokenize_bold() {
        let tokenizer = InlineTokenizer::new();
        let fragments = tokenizer.tokenize("a **b** c");
        assert_eq!(
            fragments,
            vec![
                plain("a "),
                TextFragment::Bold("b".to_string()),
                plain(" c"),
            ]
        );
    }

    #[test]
    fn test_tokenize_code_span() {
        let tokenizer = InlineTokenizer::new();
        let fragments = tokenizer.tokenize("This is text with a `code block` word");
        assert_eq!(
            fragments,
            vec![
                plain("This is text with a "),
                TextFragment::Code("code block".to_string()),
                plain(" word"),
            ]
        );
    }

    #[test]
    fn test_tokenize_multiple_code_spans() {
        let tokenizer = InlineTokenizer::new();
        let fragments = tokenizer.tokenize("Hello `code` world `more code`!");
        assert_eq!(
            fragments,
            vec![
                plain("Hello "),
                TextFragment::Code("code".to_string()),
                plain(" world "),
                TextFragment::Code("more code".to_string()),
                plain("!"),
            ]
        );
    }

    #[test]
    fn test_tokenize_bold_and_italic() {
        let tokenizer = InlineTokenizer::new();
        let fragments = tokenizer.tokenize("This is **bold** and *italic* text");
        assert_eq!(
            fragments,
            vec![
                plain("This is "),
                TextFragment::Bold("bold".to_string()),
                plain(" and "),
                TextFragment::Italic("italic".to_string()),
                plain(" text"),
            ]
        );
    }

    #[test]
    fn test_tokenize_empty_styled_content_kept() {
        let tokenizer = InlineTokenizer::new();
        let fragments = tokenizer.tokenize("Text with ``empty`` delimiters");
        assert_eq!(
            fragments,
            vec![
                plain("Text with "),
                TextFragment::Code(String::new()),
                plain("empty"),
                TextFragment::Code(String::new()),
                plain(" delimiters"),
            ]
        );
    }

    #[test]
    fn test_tokenize_unbalanced_backtick_left_unsplit() {
        let tokenizer = InlineTokenizer::new();
        let fragments = tokenizer.tokenize("a `code without close");
        assert_eq!(fragments, vec![plain("a `code without close")]);
    }

    #[test]
    fn test_tokenize_unbalanced_bold_consumed_by_italic_pass() {
        // The bold pass leaves "a **b" unsplit; the italic pass then
        // takes the stray "**" as an empty emphasis span.
        let tokenizer = InlineTokenizer::new();
        let fragments = tokenizer.tokenize("a **b");
        assert_eq!(
            fragments,
            vec![plain("a "), TextFragment::Italic(String::new()), plain("b")]
        );
    }

    #[test]
    fn test_tokenize_styled_content_is_verbatim() {
        let tokenizer = InlineTokenizer::new();
        let fragments = tokenizer.tokenize("**has `tick` and [x](y) inside**");
        assert_eq!(
            fragments,
            vec![TextFragment::Bold("has `tick` and [x](y) inside".to_string())]
        );
    }

    #[test]
    fn test_tokenize_link_and_image_interleave() {
        let tokenizer = InlineTokenizer::new();
        let fragments =
            tokenizer.tokenize("This is a [link](https://example.com) and an ![image](test.png)");
        assert_eq!(
            fragments,
            vec![
                plain("This is a "),
                TextFragment::Link {
                    text: "link".to_string(),
                    url: "https://example.com".to_string(),
                },
                plain(" and an "),
                TextFragment::Image {
                    alt: "image".to_string(),
                    url: "test.png".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_tokenize_adjacent_image_and_link() {
        let tokenizer = InlineTokenizer::new();
        let fragments = tokenizer.tokenize("![a](1.png)[b](2.html)");
        assert_eq!(
            fragments,
            vec![
                TextFragment::Image {
                    alt: "a".to_string(),
                    url: "1.png".to_string(),
                },
                TextFragment::Link {
                    text: "b".to_string(),
                    url: "2.html".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_tokenize_link_syntax_around_image_stays_plain() {
        let tokenizer = InlineTokenizer::new();
        let fragments = tokenizer.tokenize("[a ![i](u) b](c)");
        assert_eq!(
            fragments,
            vec![
                plain("[a "),
                TextFragment::Image {
                    alt: "i".to_string(),
                    url: "u".to_string(),
                },
                plain(" b](c)"),
            ]
        );
    }

    #[test]
    fn test_tokenize_all_fragment_kinds() {
        let tokenizer = InlineTokenizer::new();
        let fragments = tokenizer.tokenize(
            "Read **this** and *that* plus `snippet` with ![logo](logo.png) and a [guide](https://example.com/guide)",
        );
        assert_eq!(
            fragments,
            vec![
                plain("Read "),
                TextFragment::Bold("this".to_string()),
                plain(" and "),
                TextFragment::Italic("that".to_string()),
                plain(" plus "),
                TextFragment::Code("snippet".to_string()),
                plain(" with "),
                TextFragment::Image {
                    alt: "logo".to_string(),
                    url: "logo.png".to_string(),
                },
                plain(" and a "),
                TextFragment::Link {
                    text: "guide".to_string(),
                    url: "https://example.com/guide".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_strict_mode_fails_on_unbalanced_bold() {
        let tokenizer = InlineTokenizer::new();
        let err = tokenizer
            .tokenize_with_mode("unmatched **bold here", ErrorMode::Strict)
            .unwrap_err();
        assert!(matches!(err, Error::UnbalancedDelimiter(_)));
    }

    #[test]
    fn test_strict_mode_fails_on_unbalanced_backtick() {
        let tokenizer = InlineTokenizer::new();
        let err = tokenizer
            .tokenize_with_mode("a `b` and `c", ErrorMode::Strict)
            .unwrap_err();
        assert!(matches!(err, Error::UnbalancedDelimiter(_)));
    }

    #[test]
    fn test_strict_mode_accepts_balanced_input() {
        let tokenizer = InlineTokenizer::new();
        let fragments = tokenizer
            .tokenize_with_mode("a **b** c", ErrorMode::Strict)
            .unwrap();
        assert_eq!(fragments.len(), 3);
    }

    #[test]
    fn test_extract_images() {
        let tokenizer = InlineTokenizer::new();
        let pairs = tokenizer.extract_images(
            "Here is ![first](https://example.com/a.gif) and ![second](https://example.com/b.jpeg)",
        );
        assert_eq!(
            pairs,
            vec![
                (
                    "first".to_string(),
                    "https://example.com/a.gif".to_string()
                ),
                (
                    "second".to_string(),
                    "https://example.com/b.jpeg".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_extract_images_none() {
        let tokenizer = InlineTokenizer::new();
        assert!(tokenizer.extract_images("no images here").is_empty());
    }

    #[test]
    fn test_extract_images_empty_alt() {
        let tokenizer = InlineTokenizer::new();
        let pairs = tokenizer.extract_images("bare ![](https://example.com/image.jpg)");
        assert_eq!(
            pairs,
            vec![(String::new(), "https://example.com/image.jpg".to_string())]
        );
    }

    #[test]
    fn test_extract_images_special_chars() {
        let tokenizer = InlineTokenizer::new();
        let pairs = tokenizer.extract_images("![my (best) shot!](https://example.com/shot!.jpg)");
        assert_eq!(
            pairs,
            vec![(
                "my (best) shot!".to_string(),
                "https://example.com/shot!.jpg".to_string()
            )]
        );
    }

    #[test]
    fn test_extract_links() {
        let tokenizer = InlineTokenizer::new();
        let pairs = tokenizer.extract_links(
            "See [the docs](https://docs.example.com) and [the repo](https://example.com/repo)",
        );
        assert_eq!(
            pairs,
            vec![
                (
                    "the docs".to_string(),
                    "https://docs.example.com".to_string()
                ),
                (
                    "the repo".to_string(),
                    "https://example.com/repo".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_extract_links_empty_text() {
        let tokenizer = InlineTokenizer::new();
        let pairs = tokenizer.extract_links("bare [](https://example.com)");
        assert_eq!(pairs, vec![(String::new(), "https://example.com".to_string())]);
    }

    #[test]
    fn test_extract_links_ignores_images() {
        let tokenizer = InlineTokenizer::new();
        let text = "This has ![a chart](chart.png) and [the source](data.csv)";
        assert_eq!(
            tokenizer.extract_images(text),
            vec![("a chart".to_string(), "chart.png".to_string())]
        );
        assert_eq!(
            tokenizer.extract_links(text),
            vec![("the source".to_string(), "data.csv".to_string())]
        );
    }

    proptest! {
        #[test]
        fn prop_text_without_punctuation_is_single_plain(
            text in "[a-zA-Z0-9 ,.?;:]{0,80}"
        ) {
            let tokenizer = InlineTokenizer::new();
            prop_assert_eq!(tokenizer.tokenize(&text), vec![plain(&text)]);
        }

        #[test]
        fn prop_tokenize_never_returns_empty(text in "\\PC{0,100}") {
            let tokenizer = InlineTokenizer::new();
            prop_assert!(!tokenizer.tokenize(&text).is_empty());
        }

        #[test]
        fn prop_bold_round_trip(word in "[a-z]{1,12}") {
            let tokenizer = InlineTokenizer::new();
            let text = format!("a **{}** b", word);
            prop_assert_eq!(
                tokenizer.tokenize(&text),
                vec![plain("a "), TextFragment::Bold(word), plain(" b")]
            );
        }
    }
}
