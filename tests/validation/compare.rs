use valid_rail::prelude::*;

struct Record {
    n: Option<i32>,
    m: i32,
    label: String,
}

fn record(n: Option<i32>) -> Record {
    Record { n, m: 5, label: "draft".into() }
}

fn n() -> FieldAccessor<Record, Option<i32>> {
    FieldAccessor::new("n", |r: &Record| &r.n)
}

fn m() -> FieldAccessor<Record, i32> {
    FieldAccessor::new("m", |r: &Record| &r.m)
}

fn fails(validator: &Validator<Record>, value: Option<i32>) -> bool {
    validator.apply(&record(value)).unwrap().has_error()
}

#[test]
fn less_than_is_strict() {
    let validator = Validator::<Record>::none().less_than(n(), 10, msg!("{:?}"));

    assert!(!fails(&validator, Some(9)));
    assert!(fails(&validator, Some(10)));
    assert!(fails(&validator, Some(11)));
}

#[test]
fn not_greater_than_includes_the_bound() {
    let validator = Validator::<Record>::none().not_greater_than(n(), 10, msg!("{:?}"));

    assert!(!fails(&validator, Some(9)));
    assert!(!fails(&validator, Some(10)));
    assert!(fails(&validator, Some(11)));
}

#[test]
fn greater_than_is_strict() {
    let validator = Validator::<Record>::none().greater_than(n(), 10, msg!("{:?}"));

    assert!(fails(&validator, Some(9)));
    assert!(fails(&validator, Some(10)));
    assert!(!fails(&validator, Some(11)));
}

#[test]
fn not_less_than_includes_the_bound() {
    let validator = Validator::<Record>::none().not_less_than(n(), 10, msg!("{:?}"));

    assert!(fails(&validator, Some(9)));
    assert!(!fails(&validator, Some(10)));
    assert!(!fails(&validator, Some(11)));
}

#[test]
fn inclusive_range_includes_both_ends() {
    let validator = Validator::<Record>::none().in_range_inclusive(n(), 1, 3, msg!("{:?}"));

    assert!(fails(&validator, Some(0)));
    assert!(!fails(&validator, Some(1)));
    assert!(!fails(&validator, Some(2)));
    assert!(!fails(&validator, Some(3)));
    assert!(fails(&validator, Some(4)));
}

#[test]
fn exclusive_range_excludes_both_ends() {
    let validator = Validator::<Record>::none().in_range_exclusive(n(), 1, 3, msg!("{:?}"));

    assert!(fails(&validator, Some(1)));
    assert!(!fails(&validator, Some(2)));
    assert!(fails(&validator, Some(3)));
}

#[test]
fn absent_values_fail_every_ordering_check() {
    let validators = [
        Validator::<Record>::none().less_than(n(), i32::MAX, msg!("{:?}")),
        Validator::<Record>::none().not_greater_than(n(), i32::MAX, msg!("{:?}")),
        Validator::<Record>::none().greater_than(n(), i32::MIN, msg!("{:?}")),
        Validator::<Record>::none().not_less_than(n(), i32::MIN, msg!("{:?}")),
        Validator::<Record>::none().in_range_inclusive(n(), i32::MIN, i32::MAX, msg!("{:?}")),
        Validator::<Record>::none().in_range_exclusive(n(), i32::MIN, i32::MAX, msg!("{:?}")),
    ];

    for validator in &validators {
        assert!(fails(validator, None));
        assert!(!fails(validator, Some(0)));
    }
}

#[test]
fn plain_values_are_always_present() {
    let validator = Validator::<Record>::none()
        .less_than(m(), 5, msg!("m must be below 5, got {}"))
        .non_null(m(), |_: &i32| "unreachable");

    let report = validator.apply(&record(None)).unwrap();
    assert_eq!(report.to_string(), "m: m must be below 5, got 5");
}

#[test]
fn null_checks() {
    let non_null = Validator::<Record>::none().non_null(n(), |_: &Option<i32>| "required");
    let is_null = Validator::<Record>::none().is_null(n(), |_: &Option<i32>| "must be empty");

    assert!(fails(&non_null, None));
    assert!(!fails(&non_null, Some(0)));
    assert!(!fails(&is_null, None));
    assert!(fails(&is_null, Some(0)));

    let report = is_null.apply(&record(Some(1))).unwrap();
    assert_eq!(report.to_string(), "n: must be empty");
}

#[test]
fn equality_checks() {
    let label = FieldAccessor::new("label", |r: &Record| &r.label);
    let is_draft = Validator::<Record>::none().equal(label.clone(), "draft", msg!("got {}"));
    let not_draft = Validator::<Record>::none().not_equal(label, "draft", msg!("got {}"));

    let mut input = record(None);
    assert!(is_draft.apply(&input).unwrap().is_none());
    assert_eq!(not_draft.apply(&input).unwrap().to_string(), "label: got draft");

    input.label = "final".into();
    assert_eq!(is_draft.apply(&input).unwrap().to_string(), "label: got final");
    assert!(not_draft.apply(&input).unwrap().is_none());

    let some_two = Validator::<Record>::none().equal(n(), Some(2), msg!("{:?}"));
    assert!(!fails(&some_two, Some(2)));
    assert!(fails(&some_two, None));
}

#[test]
fn messages_receive_the_projected_value() {
    let validator = Validator::<Record>::none().in_range_inclusive(
        n(),
        1,
        3,
        |n: &Option<i32>| match n {
            Some(n) => format!("{n} is out of range"),
            None => "no value".to_string(),
        },
    );

    assert_eq!(validator.apply(&record(Some(7))).unwrap().to_string(), "n: 7 is out of range");
    assert_eq!(validator.apply(&record(None)).unwrap().to_string(), "n: no value");
}
