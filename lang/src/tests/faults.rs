use super::exec;
use crate::{Fault, FaultFamily, Interpreter};

#[test]
fn fault_halts_run_and_keeps_prior_output() {
    let source = "\
신병 받아라 악!!!!!!악!!!!!
아쎄이 아쎄이! 돌격
라이라이 차차차
아쎄이!!! 아쎄이 돌격
라이라이 차차차
";
    let (out, result) = exec(source, "");
    assert_eq!(out, "A");
    assert_eq!(
        result.expect_err("undeclared"),
        Fault::Undeclared { line: 4, name: "아쎄이!!!".to_string() }
    );
}

#[test]
fn undeclared_test_variable_faults() {
    let source = "아쎄이! 여쭤봐도 되겠습니까 필승\n  라이라이 차차차\n받아쓰";
    let (_, result) = exec(source, "");
    let err = result.expect_err("undeclared");
    assert_eq!(err.line(), 1);
    assert_eq!(err.code(), "E_RUNTIME_UNDECLARED");
}

#[test]
fn undeclared_rhs_faults() {
    let (_, result) = exec("아쎄이 병장 돌격", "");
    assert_eq!(
        result.expect_err("undeclared"),
        Fault::Undeclared { line: 1, name: "병장".to_string() }
    );
}

#[test]
fn output_rejects_values_outside_unicode_scalars() {
    let negative = "신병 받아라 아악!\n아쎄이 아쎄이! 돌격\n라이라이 차차차";
    let (_, result) = exec(negative, "");
    assert_eq!(result.expect_err("negative"), Fault::NotAScalar { line: 3 });

    // 0xD800 (서로게이트)
    let (_, result) = exec("헤이빠빠리빠\n라이라이 차차차", "55296\n");
    assert_eq!(result.expect_err("surrogate"), Fault::NotAScalar { line: 2 });

    let (_, result) = exec("헤이빠빠리빠\n라이라이 차차차", "1114112\n");
    assert_eq!(result.expect_err("too large"), Fault::NotAScalar { line: 2 });
}

#[test]
fn declaration_needs_a_numeral() {
    let (_, result) = exec("신병 받아라", "");
    assert_eq!(result.expect_err("missing"), Fault::MissingDeclValue { line: 1 });

    let (_, result) = exec("신병 받아라 이병", "");
    assert_eq!(result.expect_err("not numeral"), Fault::NotANumeral { line: 1 });

    let (_, result) = exec("신병 받아라 악!!!!!!!!!!", "");
    assert_eq!(result.expect_err("overflow"), Fault::DigitOverflow { line: 1 });
}

#[test]
fn structural_faults_surface_before_any_output() {
    let cases = [
        ("라이라이 차차차\n아쎄이 여쭤봐도 되겠습니까\n", Fault::AskWithoutOpen { line: 2 }),
        ("아쎄이 다시 알아보겠습니다", Fault::AgainWithoutOpen { line: 1 }),
        ("라이라이 차차차 필승", Fault::OrphanOpen { line: 1 }),
        ("아쎄이 여쭤봐도 되겠습니까 필승\n라이라이 차차차\n받아쓰", Fault::BodyNotIndented { line: 2 }),
        ("\n\n아쎄이 여쭤봐도 되겠습니까 필승\n  라이라이 차차차", Fault::UnclosedBlock { line: 3 }),
    ];
    for (source, expected) in cases {
        let err = Interpreter::new(source).expect_err(source);
        assert_eq!(err, expected);
        assert_eq!(err.family(), FaultFamily::Structural);
    }
}
