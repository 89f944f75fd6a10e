use valid_rail::prelude::*;

#[derive(Debug, Clone)]
struct Entity {
    field1: Option<String>,
    field2: Option<i64>,
    children: Vec<Entity>,
}

fn child_validator() -> Validator<Entity> {
    Validator::<Entity>::none()
        .non_null(
            FieldAccessor::new("field1", |e: &Entity| &e.field1),
            msg!("field1 is null: {:?}"),
        )
        .less_than(
            FieldAccessor::new("field2", |e: &Entity| &e.field2),
            1,
            msg!("field2 should be less than 1, got {:?}"),
        )
}

fn entity_validator() -> Validator<Entity> {
    Validator::<Entity>::none()
        .with_subject_rule(
            |e: &Entity| e.children.len() <= 3,
            |e: &Entity| format!("at most 3 children allowed, got {}", e.children.len()),
        )
        .less_than(
            FieldAccessor::new("field2", |e: &Entity| &e.field2),
            1,
            msg!("field2 should be less than 1, got {:?}"),
        )
        .non_null(FieldAccessor::new("field1", |e: &Entity| &e.field1), |_: &Option<String>| {
            "field1 must not be null"
        })
        .with_elements_rule(
            FieldAccessor::new("children", |e: &Entity| &e.children),
            child_validator(),
        )
}

fn main() {
    let leaf = Entity { field1: None, field2: Some(1), children: Vec::new() };
    let root = Entity {
        field1: Some("null".into()),
        field2: Some(0),
        children: vec![leaf.clone(), leaf.clone(), leaf],
    };

    let validator = entity_validator();

    for fail_fast in [true, false] {
        match root.validate_with(&validator.fail_fast(fail_fast)) {
            Ok(report) => println!("{}", report.wrapped("name")),
            Err(mismatch) => eprintln!("validator misuse: {mismatch}"),
        }
        println!("------------------------------------------------------");
    }

    if let Ok(report) = root.validate_with(&validator) {
        println!("{:#}", report.wrapped("name"));
    }
}
