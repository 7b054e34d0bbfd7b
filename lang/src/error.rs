// lang/src/error.rs
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaultFamily {
    /// 생성 시점(블록 해석)에 잡히는 구조 오류
    Structural,
    /// 실행 중 오류
    Runtime,
    /// 그 밖의 모든 오류 (입출력 실패 등)
    Internal,
}

/// 해병어 프로그램의 오도기합짜세 오류. 모든 변형은 줄 번호를 가진다.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Fault {
    #[error("[줄 {line}] 구문 오류: '여쭤봐도 되겠습니까' 뒤에는 반드시 '필승'이 와야 한다! 기열!")]
    AskWithoutOpen { line: usize },
    #[error("[줄 {line}] 구문 오류: '다시 알아보겠습니다' 뒤에는 반드시 '필승'이 와야 한다! 기열!")]
    AgainWithoutOpen { line: usize },
    #[error("[줄 {line}] 구문 오류: '필승' 앞에는 '여쭤봐도 되겠습니까' 또는 '다시 알아보겠습니다'가 와야 한다! 악!")]
    OrphanOpen { line: usize },
    #[error("[줄 {line}] 구문 오류: '받아쓰'에 대응하는 '필승'이 없다! 기열!")]
    UnmatchedClose { line: usize },
    #[error("[줄 {line}] 구문 오류: '필승'과 '받아쓰' 사이의 명령문은 반드시 들여쓰기가 되어야 한다! 악!")]
    BodyNotIndented { line: usize },
    #[error("[줄 {line}] 구문 오류: '필승'에 대응하는 '받아쓰'가 닫히지 않았다! 탈영인가!")]
    UnclosedBlock { line: usize },

    #[error("[줄 {line}] 구문 오류: '신병 받아라' 뒤에 정수가 오지 않았다!")]
    MissingDeclValue { line: usize },
    #[error("[줄 {line}] 구문 오류: '신병 받아라' 뒤에 올바른 해병 정수가 오지 않았다!")]
    NotANumeral { line: usize },
    #[error("[줄 {line}] 구문 오류: 숫자가 비어있다!")]
    EmptyNumeral { line: usize },
    #[error("[줄 {line}] 구문 오류: 정수 표기에 '악', '!', '아' 외의 흘러빠진 문자가 포함되어 있다!")]
    StrayNumeralChar { line: usize, ch: char },
    #[error("[줄 {line}] 구문 오류: '아'는 음수 표기를 위해 맨 앞에만 올 수 있다! 기열!")]
    MisplacedSign { line: usize },
    #[error("[줄 {line}] 구문 오류: 정수는 무조건 '악'으로 시작해야 한다!")]
    MissingZeroMark { line: usize },
    #[error("[줄 {line}] 구문 오류: '악' 뒤에 '!'가 10개 이상 붙을 수 없다!")]
    DigitOverflow { line: usize },

    #[error("[줄 {line}] 런타임 오류: 선언되지 않은 변수를 사용했다! 미확인 인원 접근!")]
    Undeclared { line: usize, name: String },
    #[error("[줄 {line}] 런타임 오류: '헤이빠빠리빠' 입력 시 해병 정수 외의 기열 값이 들어왔다!")]
    BadInput { line: usize, raw: String },
    #[error("[줄 {line}] 런타임 오류: '아쎄이'에 유니코드로 변환 불가능한 수가 들어있다!")]
    NotAScalar { line: usize },

    #[error("[줄 {line}] 실행 중 알 수 없는 기열 오류 발생: {message}")]
    Internal { line: usize, message: String },
}

impl Fault {
    pub fn line(&self) -> usize {
        match self {
            Fault::AskWithoutOpen { line }
            | Fault::AgainWithoutOpen { line }
            | Fault::OrphanOpen { line }
            | Fault::UnmatchedClose { line }
            | Fault::BodyNotIndented { line }
            | Fault::UnclosedBlock { line }
            | Fault::MissingDeclValue { line }
            | Fault::NotANumeral { line }
            | Fault::EmptyNumeral { line }
            | Fault::StrayNumeralChar { line, .. }
            | Fault::MisplacedSign { line }
            | Fault::MissingZeroMark { line }
            | Fault::DigitOverflow { line }
            | Fault::Undeclared { line, .. }
            | Fault::BadInput { line, .. }
            | Fault::NotAScalar { line }
            | Fault::Internal { line, .. } => *line,
        }
    }

    pub fn family(&self) -> FaultFamily {
        match self {
            Fault::AskWithoutOpen { .. }
            | Fault::AgainWithoutOpen { .. }
            | Fault::OrphanOpen { .. }
            | Fault::UnmatchedClose { .. }
            | Fault::BodyNotIndented { .. }
            | Fault::UnclosedBlock { .. } => FaultFamily::Structural,
            Fault::Internal { .. } => FaultFamily::Internal,
            _ => FaultFamily::Runtime,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Fault::AskWithoutOpen { .. } => "E_BLOCK_ASK_NO_OPEN",
            Fault::AgainWithoutOpen { .. } => "E_BLOCK_AGAIN_NO_OPEN",
            Fault::OrphanOpen { .. } => "E_BLOCK_ORPHAN_OPEN",
            Fault::UnmatchedClose { .. } => "E_BLOCK_UNMATCHED_CLOSE",
            Fault::BodyNotIndented { .. } => "E_BLOCK_INDENT",
            Fault::UnclosedBlock { .. } => "E_BLOCK_UNCLOSED",
            Fault::MissingDeclValue { .. } => "E_DECL_MISSING_VALUE",
            Fault::NotANumeral { .. } => "E_DECL_NOT_NUMERAL",
            Fault::EmptyNumeral { .. } => "E_NUMERAL_EMPTY",
            Fault::StrayNumeralChar { .. } => "E_NUMERAL_STRAY_CHAR",
            Fault::MisplacedSign { .. } => "E_NUMERAL_SIGN",
            Fault::MissingZeroMark { .. } => "E_NUMERAL_NO_ZERO_MARK",
            Fault::DigitOverflow { .. } => "E_NUMERAL_DIGIT_OVERFLOW",
            Fault::Undeclared { .. } => "E_RUNTIME_UNDECLARED",
            Fault::BadInput { .. } => "E_RUNTIME_BAD_INPUT",
            Fault::NotAScalar { .. } => "E_RUNTIME_NOT_SCALAR",
            Fault::Internal { .. } => "E_INTERNAL",
        }
    }

    pub(crate) fn io(line: usize, err: std::io::Error) -> Self {
        Fault::Internal {
            line,
            message: err.to_string(),
        }
    }
}
