use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use valid_rail::{ErrorTree, FieldAccessor, RejectedValue, RuleKind, Validator};

#[derive(Debug)]
struct Sample {
    a: i32,
    b: i32,
    c: i32,
}

struct Line {
    sku: String,
    qty: u32,
}

struct Cart {
    lines: Vec<Line>,
    owner: Owner,
}

struct Owner {
    name: String,
    email: String,
}

fn three_rules() -> Validator<Sample> {
    Validator::<Sample>::none()
        .with_subject_rule(|s: &Sample| s.a > 0, |_: &Sample| "r1")
        .with_field_rule(
            FieldAccessor::new("b", |s: &Sample| &s.b),
            |b: &i32| *b > 0,
            |_: &i32| "r2",
        )
        .with_field_rule(
            FieldAccessor::new("c", |s: &Sample| &s.c),
            |c: &i32| *c > 0,
            |_: &i32| "r3",
        )
}

fn line_rules() -> Validator<Line> {
    Validator::<Line>::none()
        .with_field_rule(
            FieldAccessor::new("sku", |l: &Line| l.sku.as_str()),
            |sku: &str| !sku.is_empty(),
            |_: &str| "sku is required",
        )
        .with_field_rule(
            FieldAccessor::new("qty", |l: &Line| &l.qty),
            |qty: &u32| *qty > 0,
            |_: &u32| "qty must be positive",
        )
}

fn line(sku: &str, qty: u32) -> Line {
    Line { sku: sku.into(), qty }
}

fn cart(lines: Vec<Line>) -> Cart {
    Cart { lines, owner: Owner { name: "ada".into(), email: "ada@example.com".into() } }
}

#[test]
fn empty_validator_accepts_everything() {
    let validator = Validator::<Sample>::none();
    assert!(validator.is_empty());
    assert!(!validator.is_fail_fast());

    let report = validator.apply(&Sample { a: -1, b: -1, c: -1 }).unwrap();
    assert!(report.is_none());
}

#[test]
fn fail_fast_yields_only_the_first_failing_rule() {
    let s = Sample { a: 0, b: 1, c: 0 };
    let report = three_rules().fail_fast(true).apply(&s).unwrap();

    assert_eq!(report, ErrorTree::leaf_of(&s, "r1"));
}

#[test]
fn accumulate_yields_every_failing_rule() {
    let s = Sample { a: 0, b: 1, c: 0 };
    let report = three_rules().apply(&s).unwrap();

    let c = ErrorTree::leaf(Some(RejectedValue::field_of(&s, "c")), "r3");
    let expected = ErrorTree::leaf_of(&s, "r1").plus(ErrorTree::scope("c", c));
    assert_eq!(report, expected);
    assert!(report.field("b").is_none());
}

#[test]
fn fail_fast_skips_later_rules() {
    let evaluated = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&evaluated);

    let validator = Validator::<Sample>::none()
        .with_subject_rule(|_: &Sample| false, |_: &Sample| "first")
        .with_subject_rule(
            move |_: &Sample| {
                counter.fetch_add(1, Ordering::SeqCst);
                false
            },
            |_: &Sample| "second",
        );

    let s = Sample { a: 0, b: 0, c: 0 };
    let report = validator.fail_fast(true).apply(&s).unwrap();
    assert_eq!(report.messages(), ["first"]);
    assert_eq!(evaluated.load(Ordering::SeqCst), 0);

    let report = validator.apply(&s).unwrap();
    assert_eq!(evaluated.load(Ordering::SeqCst), 1);
    assert_eq!(report.messages(), ["first", "second"]);
}

#[test]
fn passing_rules_do_not_stop_fail_fast() {
    let s = Sample { a: 1, b: 1, c: 0 };
    let report = three_rules().fail_fast(true).apply(&s).unwrap();

    let c = ErrorTree::leaf(Some(RejectedValue::field_of(&s, "c")), "r3");
    assert_eq!(report, ErrorTree::scope("c", c));
}

#[test]
fn builders_leave_the_original_untouched() {
    let base = Validator::<Sample>::none();
    let one = base.with_subject_rule(|s: &Sample| s.a > 0, |_: &Sample| "a");
    let two = one.with_subject_rule(|s: &Sample| s.b > 0, |_: &Sample| "b");
    let strict = two.fail_fast(true);

    assert_eq!(base.len(), 0);
    assert_eq!(one.len(), 1);
    assert_eq!(two.len(), 2);
    assert_eq!(strict.len(), 2);
    assert!(!two.is_fail_fast());
    assert!(strict.is_fail_fast());
    assert!(!strict.fail_fast(false).is_fail_fast());

    let s = Sample { a: 0, b: 0, c: 0 };
    assert_eq!(one.apply(&s).unwrap().messages(), ["a"]);
    assert_eq!(two.apply(&s).unwrap().messages(), ["a", "b"]);
}

#[test]
fn rule_kinds_follow_declaration_order() {
    let validator = Validator::<Cart>::none()
        .with_subject_rule(|c: &Cart| !c.lines.is_empty(), |_: &Cart| "empty cart")
        .with_elements_rule(FieldAccessor::new("lines", |c: &Cart| &c.lines), line_rules())
        .with_nested_rule(FieldAccessor::new("owner", |c: &Cart| &c.owner), Validator::none())
        .with_field_rule(
            FieldAccessor::new("size", |c: &Cart| &c.lines),
            |lines: &Vec<Line>| lines.len() < 10,
            |_: &Vec<Line>| "too many lines",
        );

    let kinds: Vec<RuleKind> = validator.rule_kinds().collect();
    assert_eq!(kinds, [RuleKind::Subject, RuleKind::Elements, RuleKind::Nested, RuleKind::Field]);

    let debug = format!("{:?}", validator);
    assert!(debug.contains("Validator"));
    assert!(debug.contains("fail_fast: false"));
}

#[test]
fn elements_report_only_failing_indices() {
    let validator = Validator::<Cart>::none()
        .with_elements_rule(FieldAccessor::new("items", |c: &Cart| &c.lines), line_rules());

    let input = cart(vec![line("", 1), line("A-1", 1), line("B-2", 0)]);
    let report = validator.apply(&input).unwrap();

    let items = report.field("items").unwrap();
    assert_eq!(items.field_errors().count(), 2);
    assert!(items.element(0).is_some());
    assert!(items.element(1).is_none());
    assert!(items.element(2).is_some());
    assert_eq!(
        report.to_string(),
        "items.0.sku: sku is required\nitems.2.qty: qty must be positive"
    );
}

#[test]
fn elements_over_empty_or_passing_sequences_yield_none() {
    let validator = Validator::<Cart>::none()
        .with_elements_rule(FieldAccessor::new("lines", |c: &Cart| &c.lines), line_rules());

    assert!(validator.apply(&cart(Vec::new())).unwrap().is_none());
    assert!(validator.apply(&cart(vec![line("A-1", 2)])).unwrap().is_none());
}

#[test]
fn elements_accept_borrowed_slices() {
    let lines = FieldAccessor::new("lines", |c: &Cart| c.lines.as_slice());
    let validator = Validator::<Cart>::none().with_elements_rule(lines, line_rules());

    let report = validator.apply(&cart(vec![line("A-1", 1), line("", 1)])).unwrap();
    assert_eq!(report.to_string(), "lines.1.sku: sku is required");
}

#[test]
fn nested_fail_fast_is_independent_of_the_outer_flag() {
    let input = cart(vec![line("", 0), line("", 0)]);

    let lenient_inner = Validator::<Cart>::none()
        .with_elements_rule(FieldAccessor::new("lines", |c: &Cart| &c.lines), line_rules())
        .fail_fast(true);
    let report = lenient_inner.apply(&input).unwrap();
    assert_eq!(report.paths().len(), 4);

    let strict_inner = Validator::<Cart>::none()
        .with_elements_rule(
            FieldAccessor::new("lines", |c: &Cart| &c.lines),
            line_rules().fail_fast(true),
        );
    let report = strict_inner.apply(&input).unwrap();
    assert_eq!(
        report.to_string(),
        "lines.0.sku: sku is required\nlines.1.sku: sku is required"
    );
}

#[test]
fn outer_fail_fast_stops_after_the_elements_rule() {
    let input = cart(vec![line("", 1)]);
    let validator = Validator::<Cart>::none()
        .with_elements_rule(FieldAccessor::new("lines", |c: &Cart| &c.lines), line_rules())
        .with_subject_rule(|_: &Cart| false, |_: &Cart| "never reported")
        .fail_fast(true);

    let report = validator.apply(&input).unwrap();
    assert!(report.messages().is_empty());
    assert_eq!(report.to_string(), "lines.0.sku: sku is required");
}

#[test]
fn nested_rule_scopes_under_the_field_name() {
    let owner = Validator::<Owner>::none()
        .with_field_rule(
            FieldAccessor::new("name", |o: &Owner| o.name.as_str()),
            |name: &str| !name.is_empty(),
            |_: &str| "name is required",
        )
        .with_field_rule(
            FieldAccessor::new("email", |o: &Owner| o.email.as_str()),
            |email: &str| email.contains('@'),
            |email: &str| format!("`{email}` is not an email address"),
        );
    let validator = Validator::<Cart>::none()
        .with_nested_rule(FieldAccessor::new("owner", |c: &Cart| &c.owner), owner);

    let mut input = cart(Vec::new());
    assert!(validator.apply(&input).unwrap().is_none());

    input.owner = Owner { name: String::new(), email: "nowhere".into() };
    assert_eq!(
        validator.apply(&input).unwrap().to_string(),
        "owner.email: `nowhere` is not an email address\nowner.name: name is required"
    );
}

#[test]
fn subject_rules_report_at_their_own_level() {
    let input = cart(vec![line("A-1", 1)]);
    let validator = Validator::<Cart>::none()
        .with_subject_rule(|_: &Cart| false, |_: &Cart| "outer")
        .with_nested_rule(
            FieldAccessor::new("owner", |c: &Cart| &c.owner),
            Validator::<Owner>::none().with_subject_rule(|_: &Owner| false, |_: &Owner| "inner"),
        );

    let report = validator.apply(&input).unwrap();
    assert_eq!(report.to_string(), "outer\nowner: inner");
}

#[test]
fn rules_sharing_a_name_report_one_field() {
    let validator = Validator::<Sample>::none()
        .with_field_rule(FieldAccessor::new("x", |s: &Sample| &s.a), |_: &i32| false, |_: &i32| "a")
        .with_field_rule(FieldAccessor::new("x", |s: &Sample| &s.b), |_: &i32| false, |_: &i32| {
            "b"
        });

    let s = Sample { a: 0, b: 0, c: 0 };
    let report = validator.apply(&s).unwrap();
    let x = report.field("x").unwrap();
    assert_eq!(x.messages(), ["a", "b"]);
    assert_eq!(x.rejected_value(), Some(RejectedValue::field_of(&s, "x")));

    assert_eq!(validator.fail_fast(true).apply(&s).unwrap().to_string(), "x: a");
}

#[test]
fn repeated_rules_on_the_same_field_merge() {
    let validator = Validator::<Sample>::none()
        .with_field_rule(
            FieldAccessor::new("a", |s: &Sample| &s.a),
            |a: &i32| *a > 0,
            |_: &i32| "positive",
        )
        .with_field_rule(
            FieldAccessor::new("a", |s: &Sample| &s.a),
            |a: &i32| a % 2 == 1,
            |_: &i32| "odd",
        );

    let report = validator.apply(&Sample { a: 0, b: 0, c: 0 }).unwrap();
    assert_eq!(report.field("a").unwrap().messages(), ["odd", "positive"]);
}

#[test]
fn one_field_borrowed_in_different_shapes_merges() {
    let validator = Validator::<Owner>::none()
        .with_field_rule(
            FieldAccessor::new("name", |o: &Owner| &o.name),
            |name: &String| name.len() > 3,
            |_: &String| "too short",
        )
        .with_field_rule(
            FieldAccessor::new("name", |o: &Owner| o.name.as_str()),
            |name: &str| name.starts_with(char::is_uppercase),
            |_: &str| "must be capitalised",
        );

    let owner = Owner { name: "bob".into(), email: "bob@example.com".into() };
    let report = validator.apply(&owner).unwrap();
    assert_eq!(report.field("name").unwrap().messages(), ["must be capitalised", "too short"]);
    assert_eq!(report.to_string(), "name: must be capitalised\nname: too short");
}

#[test]
fn reports_for_distinct_subjects_with_empty_fields_stay_apart() {
    let validator = Validator::<Owner>::none().with_field_rule(
        FieldAccessor::new("name", |o: &Owner| o.name.as_str()),
        |name: &str| !name.is_empty(),
        |_: &str| "name is required",
    );

    let first = Owner { name: String::new(), email: String::new() };
    let second = Owner { name: String::new(), email: String::new() };
    let a = validator.apply(&first).unwrap();
    let b = validator.apply(&second).unwrap();

    assert_eq!(a.clone().try_plus(a.clone()).unwrap(), a);
    let mismatch = a.try_plus(b).unwrap_err();
    assert_eq!(mismatch.left, RejectedValue::field_of(&first, "name"));
    assert_eq!(mismatch.right, RejectedValue::field_of(&second, "name"));
}

#[test]
fn validators_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Validator<Cart>>();
    assert_send_sync::<ErrorTree>();

    let validator = Validator::<Cart>::none()
        .with_elements_rule(FieldAccessor::new("lines", |c: &Cart| &c.lines), line_rules());

    let carts: Vec<Cart> = (0..8u32).map(|i| cart(vec![line("A", i % 2), line("", 1)])).collect();

    let validator = &validator;
    let rendered: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = carts
            .iter()
            .map(|input| scope.spawn(move || validator.apply(input).unwrap().to_string()))
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    for (i, report) in rendered.iter().enumerate() {
        if i % 2 == 0 {
            assert_eq!(report, "lines.0.qty: qty must be positive\nlines.1.sku: sku is required");
        } else {
            assert_eq!(report, "lines.1.sku: sku is required");
        }
    }
}
