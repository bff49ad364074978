use crate::harness::TestContext;
use predicates::prelude::*;

const LOCAL: &str = "<aura:token name=\"a\" value=\"1\"/>\n<aura:token name=\"b\" value=\"2\"/>\n";

#[test]
fn merge_prints_remote_with_missing_lines() {
    let ctx = TestContext::new();
    ctx.write_file("local.tokens", LOCAL);
    ctx.write_file(
        "remote.tokens",
        "<aura:tokens><aura:token name=\"a\" value=\"1\"/></aura:tokens>",
    );

    ctx.cli()
        .args(["tokens", "merge", "local.tokens", "remote.tokens"])
        .assert()
        .success()
        .stdout(
            "<aura:tokens><aura:token name=\"a\" value=\"1\"/><aura:token name=\"b\" value=\"2\"/>\n</aura:tokens>",
        );
}

#[test]
fn merge_writes_output_file() {
    let ctx = TestContext::new();
    ctx.write_file("local.tokens", LOCAL);
    ctx.write_file("remote.tokens", "<aura:tokens>\n</aura:tokens>\n");

    ctx.cli()
        .args(["tokens", "merge", "local.tokens", "remote.tokens", "--output", "merged.tokens"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged 2 line(s)"));

    assert_eq!(ctx.read_file("merged.tokens"), format!("<aura:tokens>\n{LOCAL}</aura:tokens>\n"));
}

#[test]
fn merge_reports_up_to_date_remote() {
    let ctx = TestContext::new();
    ctx.write_file("local.tokens", LOCAL);
    ctx.write_file("remote.tokens", &format!("<aura:tokens>\n{LOCAL}</aura:tokens>"));

    ctx.cli()
        .args(["tokens", "merge", "local.tokens", "remote.tokens"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));
}

#[test]
fn merge_fails_on_malformed_remote() {
    let ctx = TestContext::new();
    ctx.write_file("local.tokens", LOCAL);
    ctx.write_file("remote.tokens", "<aura:tokens>");

    ctx.cli()
        .args(["tokens", "merge", "local.tokens", "remote.tokens"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed document"))
        .stderr(predicate::str::contains("</aura:tokens>"));
}
