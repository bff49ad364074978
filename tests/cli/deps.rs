use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn deps_prints_dependencies_before_the_bundle() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["deps", "strike_lookup"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let position = |needle: &str| stdout.find(needle).unwrap_or_else(|| panic!("{needle} missing"));
    assert!(position(" svg (component)") < position(" strike_chip (component)"));
    assert!(position(" strike_evt (event)") < position(" strike_chip (component)"));
    assert!(position(" strike_chip (component)") < position(" strike_lookup (component)"));
    assert!(stdout.contains("- strike_lookupController"));
}

#[test]
fn deps_rejects_unknown_bundle() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["deps", "strike_nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bundle 'strike_nope' not found"));
}

#[test]
fn deps_requires_a_bundle() {
    let ctx = TestContext::new();

    ctx.cli().arg("deps").assert().failure();
}
