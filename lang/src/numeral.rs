// lang/src/numeral.rs
// 해병 정수: `아`? (`악` `!`{0,9})+
// `악` 하나가 자리 하나를 열고, 뒤따르는 `!`의 개수가 그 자리의 십진 숫자다.
//   악!!!      => 3
//   악!악      => 10
//   아악!!악!! => -22
use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::Fault;
use crate::vocab::{is_numeral_mark, NEG_MARK, UNIT_MARK, ZERO_MARK};

pub fn parse_numeral(word: &str, line: usize) -> Result<BigInt, Fault> {
    if word.is_empty() {
        return Err(Fault::EmptyNumeral { line });
    }
    if let Some(ch) = word.chars().find(|ch| !is_numeral_mark(*ch)) {
        return Err(Fault::StrayNumeralChar { line, ch });
    }

    let (negative, body) = match word.strip_prefix(NEG_MARK) {
        Some(rest) => (true, rest),
        None => (false, word),
    };
    if body.contains(NEG_MARK) {
        return Err(Fault::MisplacedSign { line });
    }
    if !body.starts_with(ZERO_MARK) {
        return Err(Fault::MissingZeroMark { line });
    }

    let mut digits = String::new();
    for run in body.split(ZERO_MARK).skip(1) {
        let len = run.chars().count();
        if len >= 10 {
            return Err(Fault::DigitOverflow { line });
        }
        digits.push(char::from(b'0' + len as u8));
    }
    if digits.is_empty() {
        return Ok(BigInt::zero());
    }

    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(|| Fault::Internal {
        line,
        message: format!("정수 자리 해석 실패: {digits}"),
    })?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// `parse_numeral`의 역변환. 0은 `악` 하나로 쓴다.
pub fn to_tally(value: &BigInt) -> String {
    let mut out = String::new();
    if value.sign() == num_bigint::Sign::Minus {
        out.push(NEG_MARK);
    }
    for digit in value.magnitude().to_str_radix(10).bytes() {
        out.push(ZERO_MARK);
        out.extend(std::iter::repeat(UNIT_MARK).take(usize::from(digit - b'0')));
    }
    out
}
