use fieldcheck::groups::GroupTracker;
use fieldcheck::{Callback, Field, FieldPath, Inspect, Node, Validator, ViolationKind};

use super::common::{error_lines, error_paths};

fn quiet() -> Validator {
    Validator::builder().logger(fieldcheck::NullLogger).build()
}

// ─── GroupTracker ───────────────────────────────────────────────────────────

#[test]
fn tracker_reports_groups_with_only_empty_members() {
    let a = FieldPath::root().field("a");
    let b = FieldPath::root().field("b");
    let c = FieldPath::root().field("c");
    let g = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    let mut tracker = GroupTracker::new();
    tracker.record(&a, &g(&["x", "y"]), true);
    tracker.record(&b, &g(&["x"]), true);
    tracker.record(&c, &g(&["y"]), false);

    let unsatisfied = tracker.unsatisfied();
    assert_eq!(unsatisfied.len(), 1);
    assert_eq!(unsatisfied[0].0, "x");
    assert_eq!(unsatisfied[0].1, &[a.clone(), b.clone()][..]);
}

#[test]
fn tracker_ignores_fields_without_groups() {
    let mut tracker = GroupTracker::new();
    tracker.record(&FieldPath::root().field("a"), &[], true);
    assert!(tracker.is_empty());
    assert!(tracker.unsatisfied().is_empty());
}

// ─── In traversal ───────────────────────────────────────────────────────────

struct Pair {
    left: String,
    right: Option<u32>,
}

impl Inspect for Pair {
    fn inspect(&self) -> Node<'_> {
        Node::Record(vec![
            Field::new("Left", &self.left).validate("must:g;omitempty"),
            Field::new("Right", &self.right).validate("must:g;omitempty"),
        ])
    }
}

#[test]
fn both_members_empty_yields_one_joint_violation() {
    let report = quiet().validate(&Pair {
        left: String::new(),
        right: None,
    });
    assert_eq!(report.errors.len(), 1);
    let err = &report.errors[0];
    assert_eq!(err.kind, ViolationKind::Group);
    assert_eq!(err.fields, vec![".Left", ".Right"]);
    assert_eq!(err.args[2], "g");
    assert_eq!(
        err.to_string(),
        "`.Left,.Right` at least one of [.Left,.Right] should be valued"
    );
}

#[test]
fn any_non_empty_member_satisfies_the_group() {
    let left = quiet().validate(&Pair {
        left: "x".into(),
        right: None,
    });
    assert!(left.is_valid());

    let right = quiet().validate(&Pair {
        left: String::new(),
        right: Some(0),
    });
    assert!(right.is_valid());
}

#[test]
fn required_member_reports_emptiness_and_group() {
    struct Strict {
        a: String,
        b: String,
    }
    impl Inspect for Strict {
        fn inspect(&self) -> Node<'_> {
            Node::Record(vec![
                Field::new("A", &self.a).validate("must:g"),
                Field::new("B", &self.b).validate("must:g;omitempty"),
            ])
        }
    }
    let report = quiet().validate(&Strict {
        a: String::new(),
        b: String::new(),
    });
    assert_eq!(
        error_lines(&report),
        vec![
            "`.A` not allowed empty",
            "`.A,.B` at least one of [.A,.B] should be valued",
        ]
    );
}

struct Contact {
    email: String,
    phone: String,
    fax: String,
    pager: String,
}

impl Inspect for Contact {
    fn inspect(&self) -> Node<'_> {
        Node::Record(vec![
            Field::new("Email", &self.email).validate("must:digital,any;omitempty"),
            Field::new("Phone", &self.phone).validate("must:voice,any;omitempty"),
            Field::new("Fax", &self.fax).validate("must:digital;omitempty"),
            Field::new("Pager", &self.pager).validate("must:voice;omitempty"),
        ])
    }
}

#[test]
fn groups_are_reported_in_first_declaration_order() {
    let report = quiet().validate(&Contact {
        email: String::new(),
        phone: String::new(),
        fax: String::new(),
        pager: String::new(),
    });
    let groups: Vec<&str> = report.errors.iter().map(|e| e.args[2].as_str()).collect();
    assert_eq!(groups, vec!["digital", "any", "voice"]);
    assert_eq!(
        error_paths(&report),
        vec![".Email,.Fax", ".Email,.Phone", ".Phone,.Pager"]
    );
}

#[test]
fn a_field_can_satisfy_several_groups() {
    let report = quiet().validate(&Contact {
        email: "a@example.com".into(),
        phone: String::new(),
        fax: String::new(),
        pager: String::new(),
    });
    assert_eq!(error_paths(&report), vec![".Phone,.Pager"]);
}

struct Parent {
    name: String,
    child: Pair,
    alias: String,
}

impl Inspect for Parent {
    fn inspect(&self) -> Node<'_> {
        Node::Record(vec![
            Field::new("Name", &self.name).validate("must:g;omitempty"),
            Field::new("Child", &self.child),
            Field::new("Alias", &self.alias).validate("must:g;omitempty"),
        ])
    }
}

#[test]
fn groups_do_not_cross_composite_boundaries() {
    // The parent's group is satisfied by Name; the child's group of the
    // same name is judged on its own members only.
    let report = quiet().validate(&Parent {
        name: "n".into(),
        child: Pair {
            left: String::new(),
            right: None,
        },
        alias: String::new(),
    });
    assert_eq!(error_paths(&report), vec![".Child.Left,.Child.Right"]);

    let report = quiet().validate(&Parent {
        name: String::new(),
        child: Pair {
            left: "x".into(),
            right: None,
        },
        alias: String::new(),
    });
    assert_eq!(error_paths(&report), vec![".Name,.Alias"]);
}

#[test]
fn child_group_violations_precede_later_siblings() {
    struct Wrapper {
        first: Pair,
        last: String,
    }
    impl Inspect for Wrapper {
        fn inspect(&self) -> Node<'_> {
            Node::Record(vec![Field::new("First", &self.first), Field::new("Last", &self.last)])
        }
    }
    let report = quiet().validate(&Wrapper {
        first: Pair {
            left: String::new(),
            right: None,
        },
        last: String::new(),
    });
    assert_eq!(error_paths(&report), vec![".First.Left,.First.Right", ".Last"]);
}

#[test]
fn table_rules_declare_groups_too() {
    struct Plain {
        a: String,
        b: String,
    }
    impl Inspect for Plain {
        fn inspect(&self) -> Node<'_> {
            Node::Record(vec![Field::new("A", &self.a), Field::new("B", &self.b)])
        }
    }
    let validator = Validator::builder()
        .rule(".A", "must:one;omitempty")
        .rule(".B", "must:one;omitempty")
        .logger(fieldcheck::NullLogger)
        .build();
    let report = validator.validate(&Plain {
        a: String::new(),
        b: String::new(),
    });
    assert_eq!(error_paths(&report), vec![".A,.B"]);
}

#[test]
fn callback_members_still_measure_emptiness() {
    let validator = Validator::builder()
        .rule(".Left", Callback::new(|_| Ok(())))
        .logger(fieldcheck::NullLogger)
        .build();
    // The callback accepts Left, but Left is still empty for its group.
    let report = validator.validate(&Pair {
        left: String::new(),
        right: None,
    });
    assert_eq!(error_paths(&report), vec![".Left,.Right"]);
    assert_eq!(report.errors[0].kind, ViolationKind::Group);
}

#[test]
fn sequence_elements_can_share_a_group() {
    let validator = Validator::builder()
        .rule(".*", "must:any;omitempty")
        .logger(fieldcheck::NullLogger)
        .build();
    let empty = vec![String::new(), String::new()];
    assert_eq!(error_paths(&validator.validate(&empty)), vec![".0,.1"]);
    let one = vec![String::new(), "x".to_string()];
    assert!(validator.validate(&one).is_valid());
}
