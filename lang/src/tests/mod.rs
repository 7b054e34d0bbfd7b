mod faults;

use std::io::Cursor;

use crate::{Fault, Interpreter, Variables};

/// 실행 결과: (출력 글자, 변수 또는 오류)
pub(crate) fn exec(source: &str, input: &str) -> (String, Result<Variables, Fault>) {
    let program = Interpreter::new(source).expect("구조 오류 없이 생성되어야 한다");
    let mut out = Vec::new();
    let result = program.run_with(Cursor::new(input), &mut out);
    (String::from_utf8(out).expect("utf8 output"), result)
}
