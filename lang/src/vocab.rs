// lang/src/vocab.rs
// 해병어 낱말 목록. 토큰은 정확히 일치할 때만 키워드로 취급한다.

/// 암묵 누산기 변수 이름
pub const ACCUMULATOR: &str = "아쎄이";
/// 선언된 변수 이름 꼬리표 (선언 순번만큼 반복)
pub const DECL_SUFFIX: char = '!';

pub const DECLARE: (&str, &str) = ("신병", "받아라");
pub const INPUT: &str = "헤이빠빠리빠";
pub const OUTPUT: (&str, &str) = ("라이라이", "차차차");
pub const ASK: (&str, &str) = ("여쭤봐도", "되겠습니까");
pub const AGAIN: (&str, &str) = ("다시", "알아보겠습니다");
pub const BLOCK_OPEN: &str = "필승";
pub const BLOCK_CLOSE: &str = "받아쓰";
pub const ADD: &str = "돌격";
pub const SUB: &str = "역돌격";

/// 정수 표기: 자리 구분자
pub const ZERO_MARK: char = '악';
/// 정수 표기: 한 자리 안의 1
pub const UNIT_MARK: char = '!';
/// 정수 표기: 음수 부호 (맨 앞에만)
pub const NEG_MARK: char = '아';

pub fn is_numeral_mark(ch: char) -> bool {
    matches!(ch, ZERO_MARK | UNIT_MARK | NEG_MARK)
}

/// n번째 선언 변수 이름. n은 1부터.
pub fn declared_name(n: usize) -> String {
    let mut name = String::from(ACCUMULATOR);
    name.extend(std::iter::repeat(DECL_SUFFIX).take(n));
    name
}
