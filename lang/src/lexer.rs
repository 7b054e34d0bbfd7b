// lang/src/lexer.rs
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: String,
    /// 1부터 시작하는 줄 번호
    pub line: usize,
}

impl Token {
    pub fn new(word: impl Into<String>, line: usize) -> Self {
        Self { word: word.into(), line }
    }

    pub fn is(&self, word: &str) -> bool {
        self.word == word
    }
}

/// 줄 번호 -> 들여쓰기 폭(앞쪽 공백 문자 수). 빈 줄은 기록하지 않는다.
pub type LineIndents = BTreeMap<usize, usize>;

#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    pub tokens: Vec<Token>,
    pub indents: LineIndents,
}

impl TokenStream {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(|t| t.word.as_str())
    }

    pub fn indent_of(&self, line: usize) -> usize {
        self.indents.get(&line).copied().unwrap_or(0)
    }

    /// 해당 토큰이 자기 줄의 첫 토큰인지
    pub fn starts_line(&self, index: usize) -> bool {
        match index.checked_sub(1) {
            None => true,
            Some(prev) => self.tokens[prev].line != self.tokens[index].line,
        }
    }
}

pub struct Lexer<'a> {
    source: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    pub fn tokenize(&self) -> TokenStream {
        let mut stream = TokenStream::default();
        for (idx, line) in split_lines(self.source).enumerate() {
            let line_num = idx + 1;
            if line.trim().is_empty() {
                continue;
            }
            let indent = line.chars().take_while(|ch| ch.is_whitespace()).count();
            stream.indents.insert(line_num, indent);
            stream
                .tokens
                .extend(line.split_whitespace().map(|word| Token::new(word, line_num)));
        }
        stream
    }
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// 줄 단위로 자른다. `\r\n`은 한 번의 줄바꿈으로 센다.
fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    let mut rest = source;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.char_indices().find(|&(_, ch)| is_line_break(ch)) {
            Some((at, ch)) => {
                let line = &rest[..at];
                let mut next = at + ch.len_utf8();
                if ch == '\r' && rest[next..].starts_with('\n') {
                    next += 1;
                }
                rest = &rest[next..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}
