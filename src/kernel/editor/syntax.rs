//! Line tokenizer used by renderers to color text. Pure functions, no state.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    #[default]
    PlainText,
    C,
}

impl LanguageId {
    pub fn from_hint(hint: &str) -> Self {
        match hint.trim().to_ascii_lowercase().as_str() {
            "c" | "c89" => Self::C,
            _ => Self::PlainText,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Default,
    Comment,
    String,
    Literal,
    Special,
    Identifier,
    Keyword,
    Operator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    fn new(chars: &[char], kind: TokenKind) -> Self {
        Self {
            text: chars.iter().collect(),
            kind,
        }
    }
}

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while",
];

const C_LITERALS: &[&str] = &["true", "false", "NULL"];

pub fn tokenize(language: LanguageId, line: &str) -> Vec<Token> {
    match language {
        LanguageId::PlainText => vec![Token {
            text: line.to_string(),
            kind: TokenKind::Default,
        }],
        LanguageId::C => tokenize_c(line),
    }
}

fn scan_while(chars: &[char], from: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut i = from;
    while i < chars.len() && pred(chars[i]) {
        i += 1;
    }
    i
}

/// A delimited run such as `"..."` or `<...>`; unterminated runs end at the line end.
fn scan_delimited(chars: &[char], from: usize, close: char) -> usize {
    let end = scan_while(chars, from + 1, |c| c != close);
    (end + 1).min(chars.len())
}

fn tokenize_c(line: &str) -> Vec<Token> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let (end, kind) = if c.is_whitespace() {
            (
                scan_while(&chars, i, char::is_whitespace),
                TokenKind::Default,
            )
        } else if c == '/' && chars.get(i + 1) == Some(&'/') {
            (chars.len(), TokenKind::Comment)
        } else if c == '"' {
            (scan_delimited(&chars, i, '"'), TokenKind::String)
        } else if c == '<' {
            (scan_delimited(&chars, i, '>'), TokenKind::String)
        } else if c.is_ascii_digit() {
            (
                scan_while(&chars, i, |c| c.is_ascii_digit()),
                TokenKind::Literal,
            )
        } else if c == '#' {
            (
                scan_while(&chars, i, |c| !c.is_whitespace()),
                TokenKind::Special,
            )
        } else if c.is_ascii_alphabetic() || c == '_' {
            let end = scan_while(&chars, i, |c| c.is_ascii_alphanumeric() || c == '_');
            let word: String = chars[i..end].iter().collect();
            let kind = if C_KEYWORDS.contains(&word.as_str()) {
                TokenKind::Keyword
            } else if C_LITERALS.contains(&word.as_str()) {
                TokenKind::Literal
            } else {
                TokenKind::Identifier
            };
            (end, kind)
        } else {
            (i + 1, TokenKind::Operator)
        };

        tokens.push(Token::new(&chars[i..end], kind));
        i = end;
    }

    tokens
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/syntax.rs"]
mod tests;
