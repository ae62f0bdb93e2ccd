//! Algebraic laws of the combinators, checked over a range of values.
//!
//! Every law is checked through the operator, fluent and named surfaces.

use verdict_test::prelude::*;

const VALUES: std::ops::RangeInclusive<i32> = -3..=12;

fn a() -> LessThan<i32> {
    LessThan::new(10)
}

fn b() -> GreaterThan<i32> {
    GreaterThan::new(2)
}

fn c() -> NotOf<Equals<i32>> {
    !Equals::new(5)
}

#[test]
fn conjunction_is_logical_and() {
    let m = a() & b();
    for v in VALUES {
        assert_eq!(m.matches(&v), a().matches(&v) && b().matches(&v), "value {v}");
    }
}

#[test]
fn disjunction_is_logical_or() {
    let m = a() | b();
    for v in VALUES {
        assert_eq!(m.matches(&v), a().matches(&v) || b().matches(&v), "value {v}");
    }
}

#[test]
fn negation_is_logical_not() {
    let m = !a();
    for v in VALUES {
        assert_eq!(m.matches(&v), !a().matches(&v), "value {v}");
    }
}

#[test]
fn conjunction_is_associative() {
    let left = (a() & b()) & c();
    let right = a() & (b() & c());
    let named = all_of![a(), b(), c()];
    let fluent = a().and(b()).and(c());

    assert_eq!(left.len(), 3);
    assert_eq!(right.len(), 3);
    for m in [&right, &named, &fluent] {
        assert_eq!(m.description(), left.description());
    }
    for v in VALUES {
        let expected = left.matches(&v);
        assert_eq!(right.matches(&v), expected, "value {v}");
        assert_eq!(named.matches(&v), expected, "value {v}");
        assert_eq!(fluent.matches(&v), expected, "value {v}");
    }
}

#[test]
fn disjunction_is_associative() {
    let left = (a() | b()) | c();
    let right = a() | (b() | c());
    let named = any_of![a(), any_of![b(), c()]];
    let fluent = a().or(b().or(c()));

    assert_eq!(left.len(), 3);
    for m in [&right, &named, &fluent] {
        assert_eq!(m.description(), left.description());
        assert_eq!(m.len(), 3);
    }
    for v in VALUES {
        let expected = left.matches(&v);
        assert_eq!(right.matches(&v), expected, "value {v}");
        assert_eq!(named.matches(&v), expected, "value {v}");
        assert_eq!(fluent.matches(&v), expected, "value {v}");
    }
}

#[test]
fn double_negation_matches_like_inner() {
    let m = !!a();
    for v in VALUES {
        assert_eq!(m.matches(&v), a().matches(&v), "value {v}");
    }
    assert_eq!(m.description(), format!("not not {}", a().description()));
}

#[test]
fn and_skips_rest_after_first_false() {
    let probe = Probe::<i32>::new(true);
    let counts = probe.counts();

    let m = Nothing::<i32>::new() & probe;
    assert!(!m.matches(&0));
    assert_eq!(counts.evaluations(), 0);
}

#[test]
fn or_skips_rest_after_first_true() {
    let probe = Probe::<i32>::new(false);
    let counts = probe.counts();

    let m = Anything::<i32>::new() | probe;
    assert!(m.matches(&0));
    assert_eq!(counts.evaluations(), 0);
}

#[test]
fn arity_n_evaluates_n_without_short_circuit() {
    let probes: Vec<Probe<i32>> = (0..5).map(|_| Probe::new(true)).collect();
    let counts: Vec<_> = probes.iter().map(Probe::counts).collect();

    let m = probes
        .into_iter()
        .fold(AllOf::empty(), |acc, probe| acc & probe);
    assert_eq!(m.len(), 5);
    assert!(m.matches(&0));
    for count in &counts {
        assert_eq!(count.evaluations(), 1);
    }
    assert_eq!(
        m.description(),
        "( is probed and is probed and is probed and is probed and is probed )"
    );
}

#[test]
fn description_is_stable_and_computed_once() {
    let probe = Probe::<i32>::labelled("is watched", true);
    let counts = probe.counts();

    let first = probe.description().to_string();
    assert_eq!(first, probe.describe());
    for _ in 0..3 {
        assert_eq!(probe.description(), first);
    }
    // one call through `description`, one direct `describe`
    assert_eq!(counts.descriptions(), 2);
}

#[test]
fn composite_describes_children_once() {
    let left = Probe::<i32>::labelled("is left", true);
    let right = Probe::<i32>::labelled("is right", true);
    let (left_counts, right_counts) = (left.counts(), right.counts());

    let m = !(left | right);
    for _ in 0..3 {
        assert_eq!(m.description(), "not ( is left or is right )");
    }
    assert_eq!(left_counts.descriptions(), 1);
    assert_eq!(right_counts.descriptions(), 1);
}

#[test]
fn trace_agrees_with_matches() {
    let m = (a() & c()) | (b() & !Equals::new(11));
    for v in VALUES {
        assert_eq!(m.trace(&v).matched(), m.matches(&v), "value {v}");
    }
}

#[test]
fn trace_explains_failure() {
    let m = LessThan::new(10) & !Equals::new(5);
    let trace = m.trace(&5);
    insta::assert_snapshot!(trace.to_string(), @r###"
    ✗ ( is less than 10 and not equals 5 )
      ✓ is less than 10
      ✗ not equals 5
        ✓ equals 5
    "###);

    let failing: Vec<&str> = trace
        .failing_leaves()
        .into_iter()
        .map(MatchTrace::description)
        .collect();
    assert_eq!(failing, ["equals 5"]);
}

#[test]
fn shared_across_threads() {
    let m = (a() & b()) | c();
    std::thread::scope(|s| {
        for v in VALUES {
            let m = &m;
            s.spawn(move || {
                assert_eq!(
                    m.description(),
                    "( ( is less than 10 and is greater than 2 ) or not equals 5 )"
                );
                let _ = m.matches(&v);
            });
        }
    });
}

#[test]
fn borrowed_expectations_compose() {
    let expected = vec![String::from("foo"), String::from("bar")];
    let foo = || Equals::new(expected[0].as_str());
    let bar = || Equals::new(expected[1].as_str());

    let fluent = foo().or(bar());
    let named = any_of![foo(), bar()];
    let extended = AnyOf::empty() | foo() | bar();

    for m in [&fluent, &named, &extended] {
        assert_eq!(m.len(), 2);
        assert!(m.matches(&"bar"));
        assert!(!m.matches(&"baz"));
        assert_eq!(m.description(), "( equals foo or equals bar )");
    }
}
