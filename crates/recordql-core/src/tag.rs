//! The `ql` field tag language.
//!
//! ```text
//! tag       := ε | directive ("," directive)*
//! directive := "-" | "name" IDENT | "index" IDENT | "uindex" IDENT
//! ```
//!
//! Whitespace around tokens is insignificant; a keyword and its argument
//! are separated by whitespace.

use thiserror::Error as ThisError;

///
/// TagError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TagError {
    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("unexpected '{found}' at offset {offset}, expected {expected}")]
    UnexpectedToken {
        found: String,
        offset: usize,
        expected: &'static str,
    },

    #[error("empty directive at offset {offset}")]
    EmptyDirective { offset: usize },

    #[error("unknown directive '{keyword}'")]
    UnknownDirective { keyword: String },

    #[error("directive '{keyword}' requires an identifier")]
    MissingArgument { keyword: &'static str },

    #[error("directive '{keyword}' given more than once")]
    DuplicateDirective { keyword: &'static str },

    #[error("directive '-' must appear alone")]
    ExcludeNotAlone,

    #[error("field cannot carry both index '{index}' and unique index '{unique}'")]
    IndexConflict { index: String, unique: String },
}

impl TagError {
    /// Whether this failure is a directive conflict rather than bad syntax.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::IndexConflict { .. })
    }
}

///
/// Directives
///
/// Parsed directive set of one field. The default value is what an absent
/// or empty tag yields: include the field, keep its name, no index.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Directives {
    pub exclude: bool,
    pub name: Option<String>,
    pub index: Option<IndexSpec>,
}

impl Directives {
    #[must_use]
    pub const fn is_excluded(&self) -> bool {
        self.exclude
    }

    /// Column name for a field called `field`.
    #[must_use]
    pub fn column_name<'a>(&'a self, field: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(field)
    }
}

///
/// IndexSpec
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexSpec {
    pub name: String,
    pub unique: bool,
}

/// Parse one field tag.
pub fn parse_tag(input: &str) -> Result<Directives, TagError> {
    Parser::new(input)?.parse()
}

/// Parse an optional field tag; `None` yields the default directive set.
pub fn parse_opt_tag(input: Option<&str>) -> Result<Directives, TagError> {
    input.map_or_else(|| Ok(Directives::default()), parse_tag)
}

///
/// Token
///

#[derive(Clone, Debug, Eq, PartialEq)]
enum Token<'a> {
    Ident(&'a str),
    Dash,
    Comma,
    End,
}

impl Token<'_> {
    fn describe(&self) -> String {
        match self {
            Self::Ident(s) => (*s).to_string(),
            Self::Dash => "-".to_string(),
            Self::Comma => ",".to_string(),
            Self::End => "end of tag".to_string(),
        }
    }
}

// Identifiers follow field names: any Unicode letter or `_`, then letters,
// digits or `_`.
fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_ident_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn tokenize(input: &str) -> Result<Vec<(Token<'_>, usize)>, TagError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            c if c.is_whitespace() => {}
            ',' => tokens.push((Token::Comma, offset)),
            '-' => tokens.push((Token::Dash, offset)),
            c if is_ident_start(c) => {
                let mut end = offset + c.len_utf8();
                while let Some(&(next_offset, next)) = chars.peek() {
                    if !is_ident_continue(next) {
                        break;
                    }
                    end = next_offset + next.len_utf8();
                    chars.next();
                }
                tokens.push((Token::Ident(&input[offset..end]), offset));
            }
            ch => return Err(TagError::UnexpectedChar { ch, offset }),
        }
    }
    tokens.push((Token::End, input.len()));

    Ok(tokens)
}

///
/// Keyword
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Keyword {
    Name,
    Index,
    UniqueIndex,
}

impl Keyword {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "index" => Some(Self::Index),
            "uindex" => Some(Self::UniqueIndex),
            _ => None,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Index => "index",
            Self::UniqueIndex => "uindex",
        }
    }
}

///
/// Directive
///

enum Directive {
    Exclude,
    Keyword(Keyword, String),
}

///
/// Parser
///

struct Parser<'a> {
    tokens: Vec<(Token<'a>, usize)>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Result<Self, TagError> {
        Ok(Self {
            tokens: tokenize(input)?,
            pos: 0,
        })
    }

    fn peek(&self) -> &(Token<'a>, usize) {
        // tokenize always terminates the stream with End
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn bump(&mut self) -> (Token<'a>, usize) {
        let token = self.peek().clone();
        if token.0 != Token::End {
            self.pos += 1;
        }
        token
    }

    fn parse(mut self) -> Result<Directives, TagError> {
        if self.peek().0 == Token::End {
            return Ok(Directives::default());
        }

        let mut directives = Vec::new();
        loop {
            directives.push(self.directive()?);

            match self.bump() {
                (Token::Comma, _) => {}
                (Token::End, _) => break,
                (found, offset) => {
                    return Err(TagError::UnexpectedToken {
                        found: found.describe(),
                        offset,
                        expected: "',' or end of tag",
                    });
                }
            }
        }

        Self::fold(directives)
    }

    fn directive(&mut self) -> Result<Directive, TagError> {
        match self.bump() {
            (Token::Dash, _) => Ok(Directive::Exclude),
            (Token::Ident(word), _) => {
                let keyword = Keyword::parse(word).ok_or_else(|| TagError::UnknownDirective {
                    keyword: word.to_string(),
                })?;

                match self.bump() {
                    (Token::Ident(arg), _) => Ok(Directive::Keyword(keyword, arg.to_string())),
                    (Token::Comma | Token::End, _) => Err(TagError::MissingArgument {
                        keyword: keyword.as_str(),
                    }),
                    (found, offset) => Err(TagError::UnexpectedToken {
                        found: found.describe(),
                        offset,
                        expected: "identifier",
                    }),
                }
            }
            (Token::Comma | Token::End, offset) => Err(TagError::EmptyDirective { offset }),
        }
    }

    fn fold(directives: Vec<Directive>) -> Result<Directives, TagError> {
        let count = directives.len();
        let mut out = Directives::default();
        let mut index = None;
        let mut unique = None;

        for directive in directives {
            let (keyword, arg) = match directive {
                Directive::Exclude if count == 1 => {
                    out.exclude = true;
                    continue;
                }
                Directive::Exclude => return Err(TagError::ExcludeNotAlone),
                Directive::Keyword(keyword, arg) => (keyword, arg),
            };

            let slot = match keyword {
                Keyword::Name => &mut out.name,
                Keyword::Index => &mut index,
                Keyword::UniqueIndex => &mut unique,
            };
            if slot.is_some() {
                return Err(TagError::DuplicateDirective {
                    keyword: keyword.as_str(),
                });
            }
            *slot = Some(arg);
        }

        out.index = match (index, unique) {
            (Some(index), Some(unique)) => return Err(TagError::IndexConflict { index, unique }),
            (Some(name), None) => Some(IndexSpec {
                name,
                unique: false,
            }),
            (None, Some(name)) => Some(IndexSpec { name, unique: true }),
            (None, None) => None,
        };

        Ok(out)
    }
}

///
/// TESTS
///
