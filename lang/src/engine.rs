// lang/src/engine.rs
// 실행 엔진: 프로그램 카운터로 토큰열을 훑으며 명령 하나씩 해독/실행한다.
use std::io::{self, BufRead, Write};

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};
use tracing::{debug, trace};

use crate::error::Fault;
use crate::lexer::{Lexer, Token, TokenStream};
use crate::numeral::parse_numeral;
use crate::resolver::{resolve, BlockKind, JumpTable};
use crate::vocab::{
    declared_name, is_numeral_mark, ACCUMULATOR, ADD, AGAIN, ASK, BLOCK_CLOSE, DECLARE, INPUT,
    DECL_SUFFIX, OUTPUT, SUB,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
}

/// 토큰 창 하나를 해독한 결과. 변형 순서가 곧 인식 우선순위다.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction<'p> {
    /// `신병 받아라 <정수>`
    Declare { literal: Option<&'p str> },
    /// `헤이빠빠리빠`
    Input,
    /// `라이라이 차차차`
    Output,
    /// `<변수> 여쭤봐도 되겠습니까 필승`
    Conditional { test: &'p str, open: usize },
    /// `<변수> 다시 알아보겠습니다 필승`
    Loop { test: &'p str, open: usize },
    /// `받아쓰`
    BlockClose,
    /// `<변수1> <변수2> 돌격|역돌격`
    Arithmetic { lhs: &'p str, rhs: &'p str, op: ArithOp },
    /// 인식되지 않은 낱말 (주석 취급)
    Skip,
}

impl Instruction<'_> {
    /// 명령이 차지하는 토큰 수
    pub fn width(&self) -> usize {
        match self {
            Instruction::Declare { .. } | Instruction::Arithmetic { .. } => 3,
            Instruction::Output => 2,
            Instruction::Conditional { .. } | Instruction::Loop { .. } => 4,
            Instruction::Input | Instruction::BlockClose | Instruction::Skip => 1,
        }
    }
}

/// 변수 저장소. 누산기 하나로 시작하고 선언마다 새 이름이 생긴다.
/// n번째 선언 변수의 이름은 누산기 이름 뒤에 `!`를 n개 붙인 것이다.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Variables {
    accumulator: BigInt,
    declared: Vec<BigInt>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulator(&self) -> &BigInt {
        &self.accumulator
    }

    /// 선언 횟수 (누산기 제외)
    pub fn declared(&self) -> usize {
        self.declared.len()
    }

    pub fn get(&self, name: &str) -> Option<&BigInt> {
        match slot_of(name)? {
            0 => Some(&self.accumulator),
            n => self.declared.get(n - 1),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = String> {
        (0..=self.declared.len()).map(declared_name)
    }

    /// 새 변수를 만들고 그 이름을 돌려준다.
    pub fn declare(&mut self, value: BigInt) -> String {
        self.declared.push(value);
        declared_name(self.declared.len())
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut BigInt> {
        match slot_of(name)? {
            0 => Some(&mut self.accumulator),
            n => self.declared.get_mut(n - 1),
        }
    }

    fn lookup(&self, name: &str, line: usize) -> Result<&BigInt, Fault> {
        self.get(name).ok_or_else(|| Fault::Undeclared {
            line,
            name: name.to_string(),
        })
    }

    fn assign(&mut self, name: &str, value: BigInt, line: usize) -> Result<(), Fault> {
        let slot = self.slot_mut(name).ok_or_else(|| Fault::Undeclared {
            line,
            name: name.to_string(),
        })?;
        *slot = value;
        Ok(())
    }
}

/// 이름 -> 선언 순번 (누산기는 0)
fn slot_of(name: &str) -> Option<usize> {
    let tail = name.strip_prefix(ACCUMULATOR)?;
    tail.chars()
        .all(|ch| ch == DECL_SUFFIX)
        .then(|| tail.chars().count())
}

/// 해석이 끝난 해병어 프로그램. 생성 시점에 구조 오류를 모두 잡는다.
#[derive(Clone, Debug)]
pub struct Interpreter {
    stream: TokenStream,
    jumps: JumpTable,
}

impl Interpreter {
    pub fn new(source: &str) -> Result<Self, Fault> {
        let stream = Lexer::new(source).tokenize();
        let jumps = resolve(&stream)?;
        Ok(Self { stream, jumps })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.stream.tokens
    }

    pub fn jumps(&self) -> &JumpTable {
        &self.jumps
    }

    fn matches(&self, index: usize, word: &str) -> bool {
        self.stream.word(index) == Some(word)
    }

    fn phrase_at(&self, index: usize, phrase: (&str, &str)) -> bool {
        self.matches(index, phrase.0) && self.matches(index + 1, phrase.1)
    }

    fn word(&self, index: usize) -> &str {
        self.stream.word(index).unwrap_or_default()
    }

    pub fn decode(&self, pc: usize) -> Instruction<'_> {
        if self.phrase_at(pc, DECLARE) {
            return Instruction::Declare {
                literal: self.stream.word(pc + 2),
            };
        }
        if self.matches(pc, INPUT) {
            return Instruction::Input;
        }
        if self.phrase_at(pc, OUTPUT) {
            return Instruction::Output;
        }
        if self.phrase_at(pc + 1, ASK) {
            return Instruction::Conditional {
                test: self.word(pc),
                open: pc + 3,
            };
        }
        if self.phrase_at(pc + 1, AGAIN) {
            return Instruction::Loop {
                test: self.word(pc),
                open: pc + 3,
            };
        }
        if self.matches(pc, BLOCK_CLOSE) {
            return Instruction::BlockClose;
        }
        match self.stream.word(pc + 2) {
            Some(ADD) => Instruction::Arithmetic {
                lhs: self.word(pc),
                rhs: self.word(pc + 1),
                op: ArithOp::Add,
            },
            Some(SUB) => Instruction::Arithmetic {
                lhs: self.word(pc),
                rhs: self.word(pc + 1),
                op: ArithOp::Sub,
            },
            _ => Instruction::Skip,
        }
    }

    /// 표준 입출력으로 실행한다.
    pub fn run(&self) -> Result<Variables, Fault> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// 실행할 때마다 변수와 프로그램 카운터는 새로 시작한다.
    pub fn run_with<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<Variables, Fault> {
        debug!(tokens = self.stream.len(), "실행 시작");
        let mut machine = Machine {
            program: self,
            vars: Variables::new(),
            pc: 0,
            input,
            output,
        };
        while machine.pc < self.stream.len() {
            machine.step()?;
        }
        debug!(declared = machine.vars.declared(), "실행 종료");
        Ok(machine.vars)
    }
}

struct Machine<'p, R, W> {
    program: &'p Interpreter,
    vars: Variables,
    pc: usize,
    input: R,
    output: W,
}

impl<'p, R: BufRead, W: Write> Machine<'p, R, W> {
    fn step(&mut self) -> Result<(), Fault> {
        let program = self.program;
        let line = program.stream.tokens[self.pc].line;
        let instr = program.decode(self.pc);
        trace!(pc = self.pc, line, ?instr, "해독");

        match instr {
            Instruction::Declare { literal } => {
                let literal = literal.ok_or(Fault::MissingDeclValue { line })?;
                if !literal.chars().any(is_numeral_mark) {
                    return Err(Fault::NotANumeral { line });
                }
                let value = parse_numeral(literal, line)?;
                self.vars.declare(value);
            }
            Instruction::Input => {
                let mut raw = String::new();
                self.input
                    .read_line(&mut raw)
                    .map_err(|err| Fault::io(line, err))?;
                let value = parse_input_integer(raw.trim()).ok_or_else(|| Fault::BadInput {
                    line,
                    raw: raw.trim().to_string(),
                })?;
                self.vars.accumulator = value;
            }
            Instruction::Output => {
                let ch = self
                    .vars
                    .accumulator()
                    .to_u32()
                    .and_then(char::from_u32)
                    .ok_or(Fault::NotAScalar { line })?;
                write!(self.output, "{ch}").map_err(|err| Fault::io(line, err))?;
                self.output.flush().map_err(|err| Fault::io(line, err))?;
            }
            Instruction::Conditional { test, open } | Instruction::Loop { test, open } => {
                if self.vars.lookup(test, line)?.is_zero() {
                    self.pc = self.partner(open, line)? + 1;
                    return Ok(());
                }
            }
            Instruction::BlockClose => {
                let jump = program.jumps.get(self.pc).ok_or_else(|| missing_jump(self.pc, line))?;
                if jump.kind == BlockKind::Loop {
                    // 변수 토큰으로 돌아가 조건을 다시 검사한다
                    if let Some(test) = jump.partner.checked_sub(3) {
                        self.pc = test;
                        return Ok(());
                    }
                }
            }
            Instruction::Arithmetic { lhs, rhs, op } => {
                let a = self.vars.lookup(lhs, line)?;
                let b = self.vars.lookup(rhs, line)?;
                let value = match op {
                    ArithOp::Add => a + b,
                    ArithOp::Sub => a - b,
                };
                self.vars.assign(lhs, value, line)?;
            }
            Instruction::Skip => {}
        }

        self.pc += instr.width();
        Ok(())
    }

    fn partner(&self, index: usize, line: usize) -> Result<usize, Fault> {
        self.program
            .jumps
            .partner(index)
            .ok_or_else(|| missing_jump(index, line))
    }
}

fn missing_jump(index: usize, line: usize) -> Fault {
    Fault::Internal {
        line,
        message: format!("점프표에 {index}번 토큰이 없다"),
    }
}

/// 입력 한 줄을 10진 정수로 읽는다. 부호는 하나까지, `_`는 숫자 사이에 하나씩만 허용한다.
fn parse_input_integer(text: &str) -> Option<BigInt> {
    let digits = text.strip_prefix(&['+', '-'][..]).unwrap_or(text);
    let well_formed = !digits.is_empty()
        && digits
            .split('_')
            .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    if !well_formed {
        return None;
    }
    let sign = if text.starts_with('-') { "-" } else { "" };
    format!("{sign}{}", digits.replace('_', "")).parse().ok()
}
