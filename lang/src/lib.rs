// haebyeong-lang/src/lib.rs
// 해병어 인터프리터 코어
//
// - Lexer: 공백 단위 토큰화 + 줄별 들여쓰기
// - Numeral: 악/!/아 정수 표기
// - Resolver: 필승/받아쓰 짝 맞춤, 들여쓰기 검사, 점프표
// - Engine: 프로그램 카운터 기반 해독/실행

pub mod engine;
pub mod error;
pub mod lexer;
pub mod numeral;
pub mod resolver;
pub mod vocab;

pub use engine::{ArithOp, Instruction, Interpreter, Variables};
pub use error::{Fault, FaultFamily};
pub use lexer::{Lexer, LineIndents, Token, TokenStream};
pub use numeral::{parse_numeral, to_tally};
pub use resolver::{resolve, BlockKind, Jump, JumpTable};

/// 편리 함수: 소스를 해석해 주어진 입력으로 실행하고 출력 글자를 모아 돌려준다.
pub fn run_to_string(source: &str, input: &str) -> Result<String, Fault> {
    let program = Interpreter::new(source)?;
    let mut out = Vec::new();
    program.run_with(std::io::Cursor::new(input), &mut out)?;
    String::from_utf8(out).map_err(|err| Fault::Internal {
        line: 0,
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests;
