use indoc::indoc;
use numscan::*;
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn test_presets() {
    assert_eq!(Policy::strict().on_fail, OnFail::Raise);
    assert_eq!(Policy::permissive().on_fail, OnFail::Sentinel);
    assert_eq!(Policy::strict().max_int_len, DEFAULT_MAX_INT_LEN);
}

#[test]
fn test_policy_from_toml() {
    let policy = parse_policy(indoc! {r#"
        input_kinds = "string-only"
        on_fail = "sentinel"
        min_exp = -40
        max_exp = 40
        exp_bounds = "clamp"
        max_int_len = 12
        allow_unicode_digits = true
        coerce = false
    "#})
    .unwrap();

    assert_eq!(policy.input_kinds, InputKinds::StringOnly);
    assert_eq!(policy.on_fail, OnFail::Sentinel);
    assert_eq!((policy.min_exp, policy.max_exp), (-40, 40));
    assert_eq!(policy.exp_bounds, ExpBoundsMode::Clamp);
    assert_eq!(policy.max_int_len, 12);
    assert!(policy.allow_unicode_digits);
    assert!(!policy.coerce);
    // Unset fields keep their defaults
    assert!(policy.allow_whitespace);
    assert!(policy.allow_sign);
}

#[test]
fn test_substitute_default_from_toml() {
    let int_default = parse_policy("on_fail = { substitute = 0 }\n").unwrap();
    assert_eq!(int_default.on_fail, OnFail::Substitute(Number::Int(0)));

    let float_default = parse_policy("on_fail = { substitute = -1.5 }\n").unwrap();
    assert_eq!(float_default.on_fail, OnFail::Substitute(Number::Float(-1.5)));
}

#[test]
fn test_loaded_policy_drives_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("policy.toml");
    fs::write(
        &path,
        indoc! {r#"
            on_fail = { substitute = -1 }
            max_int_len = 4
        "#},
    )
    .unwrap();

    let policy = load_policy(&path).unwrap();
    assert_eq!(
        resolve(Input::Text("12345"), Target::Int, &policy),
        Ok(Some(Number::Int(-1))),
        "over-long integer resolves to the file's substitution default"
    );
    assert_eq!(
        resolve(Input::Text("1234"), Target::Int, &policy),
        Ok(Some(Number::Int(1234)))
    );
}

#[test]
fn test_invalid_policy_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("policy.toml");
    fs::write(&path, "min_exp = 50\nmax_exp = -50\n").unwrap();

    assert_eq!(try_load_policy_from_path(&path), None);
    assert_eq!(load_policy_or_default(&path), Policy::default());
    assert!(load_policy(&path).is_err());
}

#[test]
fn test_policy_serialization_round_trip() {
    let policy = Policy::permissive()
        .with_exp_window(-20, 20)
        .with_max_int_len(9)
        .with_unicode_digits(true);
    let text = toml::to_string(&policy).unwrap();
    assert_eq!(parse_policy(&text).unwrap(), policy);
}

#[test]
fn test_input_kind_selectors() {
    let strings = Policy::default().with_input_kinds(InputKinds::StringOnly);
    let numbers = Policy::default().with_input_kinds(InputKinds::NumberOnly);
    let any = Policy::default();

    assert!(is_real_number(Input::Text("5"), &strings));
    assert!(!is_real_number(Input::Float(5.0), &strings));
    assert!(is_real_number(Input::Float(5.0), &numbers));
    assert!(!is_real_number(Input::Text("5"), &numbers));
    assert!(is_real_number(Input::Text("5"), &any));
    assert!(is_real_number(Input::Int(5), &any));
}
