use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_as_str_matches_variant() {
    assert_eq!(ErrorCode::E3002.as_str(), "E3002");
    assert_eq!(ErrorCode::E3002.to_string(), "E3002");
}

#[test]
fn test_phase_follows_first_digit() {
    for code in ErrorCode::ALL {
        let expected = match &code.as_str()[1..2] {
            "0" => Phase::Lexer,
            "1" => Phase::Parser,
            "3" => Phase::Pattern,
            "6" => Phase::Eval,
            _ => Phase::Internal,
        };
        assert_eq!(code.phase(), expected, "{code}");
    }
}

#[test]
fn test_only_unreachable_is_warning() {
    let warnings: Vec<ErrorCode> = ErrorCode::ALL
        .iter()
        .copied()
        .filter(|code| code.is_warning())
        .collect();
    assert_eq!(warnings, vec![ErrorCode::E3003]);
}

#[test]
fn test_from_str_round_trips_every_code() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
    assert_eq!("e3004".parse::<ErrorCode>(), Ok(ErrorCode::E3004));
    assert!("E4242".parse::<ErrorCode>().is_err());
}

#[test]
fn test_all_is_sorted_and_unique() {
    let strs: Vec<&str> = ErrorCode::ALL.iter().map(|code| code.as_str()).collect();
    let mut sorted = strs.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(strs, sorted);
}
