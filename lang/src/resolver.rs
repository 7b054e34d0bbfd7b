// lang/src/resolver.rs
// 블록 해석: 토큰을 한 번 훑으며 필승/받아쓰 짝을 맞추고 들여쓰기를 검사한다.
use std::collections::HashMap;

use tracing::debug;

use crate::error::Fault;
use crate::lexer::TokenStream;
use crate::vocab::{AGAIN, ASK, BLOCK_CLOSE, BLOCK_OPEN};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    /// `여쭤봐도 되겠습니까 필승`
    Conditional,
    /// `다시 알아보겠습니다 필승`
    Loop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Jump {
    pub partner: usize,
    pub kind: BlockKind,
}

/// 필승 <-> 받아쓰 양방향 점프표. 생성 후에는 바뀌지 않는다.
#[derive(Clone, Debug, Default)]
pub struct JumpTable {
    entries: HashMap<usize, Jump>,
}

impl JumpTable {
    pub fn get(&self, index: usize) -> Option<Jump> {
        self.entries.get(&index).copied()
    }

    pub fn partner(&self, index: usize) -> Option<usize> {
        self.get(index).map(|jump| jump.partner)
    }

    /// 짝지어진 블록 수
    pub fn block_count(&self) -> usize {
        self.entries.len() / 2
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn link(&mut self, open: usize, close: usize, kind: BlockKind) {
        self.entries.insert(open, Jump { partner: close, kind });
        self.entries.insert(close, Jump { partner: open, kind });
    }
}

struct OpenBlock {
    kind: BlockKind,
    index: usize,
    line: usize,
    indent: usize,
}

fn phrase_at(stream: &TokenStream, index: usize, phrase: (&str, &str)) -> bool {
    stream.word(index) == Some(phrase.0) && stream.word(index + 1) == Some(phrase.1)
}

/// 도입구(두 낱말) 바로 뒤에 필승이 있는지
fn require_open_after(stream: &TokenStream, index: usize, phrase: (&str, &str)) -> bool {
    !phrase_at(stream, index, phrase) || stream.word(index + 2) == Some(BLOCK_OPEN)
}

pub fn resolve(stream: &TokenStream) -> Result<JumpTable, Fault> {
    let mut table = JumpTable::default();
    let mut stack: Vec<OpenBlock> = Vec::new();

    for (i, token) in stream.tokens.iter().enumerate() {
        let line = token.line;
        match token.word.as_str() {
            word if word == ASK.0 => {
                if !require_open_after(stream, i, ASK) {
                    return Err(Fault::AskWithoutOpen { line });
                }
            }
            word if word == AGAIN.0 => {
                if !require_open_after(stream, i, AGAIN) {
                    return Err(Fault::AgainWithoutOpen { line });
                }
            }
            BLOCK_OPEN => {
                let kind = match i.checked_sub(2) {
                    Some(at) if phrase_at(stream, at, ASK) => BlockKind::Conditional,
                    Some(at) if phrase_at(stream, at, AGAIN) => BlockKind::Loop,
                    _ => return Err(Fault::OrphanOpen { line }),
                };
                stack.push(OpenBlock {
                    kind,
                    index: i,
                    line,
                    indent: stream.indent_of(line),
                });
            }
            BLOCK_CLOSE => {
                let open = stack.pop().ok_or(Fault::UnmatchedClose { line })?;
                table.link(open.index, i, open.kind);
            }
            _ => {
                if let Some(open) = stack.last() {
                    if stream.starts_line(i)
                        && line > open.line
                        && stream.indent_of(line) <= open.indent
                    {
                        return Err(Fault::BodyNotIndented { line });
                    }
                }
            }
        }
    }

    if let Some(open) = stack.pop() {
        return Err(Fault::UnclosedBlock { line: open.line });
    }

    debug!(tokens = stream.len(), blocks = table.block_count(), "블록 해석 완료");
    Ok(table)
}
