//! End-to-end move-assignment scenario
//!
//! Two containers are built from literal lists, rendered, then one is
//! move-assigned into the other and both are rendered again.

use coffer::coffer::Coffer;

#[test]
fn test_move_assignment_scenario() {
    let mut a = Coffer::from_list(["one", "two", "three", "four", "five"].map(String::from));
    let mut b = Coffer::from_list(["five", "six", "seven"].map(String::from));

    insta::assert_snapshot!(a.render(), @"one:two:three:four:five");
    insta::assert_snapshot!(b.render(), @"five:six:seven");

    b.assign(Coffer::from_move(&mut a));

    insta::assert_snapshot!(b.render(), @"one:two:three:four:five");
    insta::assert_snapshot!(a.render(), @"[empty]");
}

#[test]
fn test_scenario_transcript() {
    let mut a = Coffer::from_list(["one", "two", "three", "four", "five"].map(String::from));
    let mut b = Coffer::from_list(["five", "six", "seven"].map(String::from));

    let mut transcript = Vec::new();
    transcript.push(format!("a: {}", a.render()));
    transcript.push(format!("b: {}", b.render()));

    b.assign(Coffer::from_move(&mut a));

    transcript.push(format!("a: {}", a.render()));
    transcript.push(format!("b: {}", b.render()));

    insta::assert_snapshot!(transcript.join("\n"), @r###"
    a: one:two:three:four:five
    b: five:six:seven
    a: [empty]
    b: one:two:three:four:five
    "###);
}
