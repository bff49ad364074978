use crate::harness::TestContext;
use mockito::Matcher;
use predicates::prelude::*;

const SOAP_PATH: &str = "/services/Soap/u/32.0";

fn login_response(server: &mockito::Server) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><soapenv:Envelope xmlns:soapenv=\"http://schemas.xmlsoap.org/soap/envelope/\"><soapenv:Body><loginResponse><result><serverUrl>{}/services/Soap/u/32.0/00D</serverUrl><sessionId>SESSION</sessionId></result></loginResponse></soapenv:Body></soapenv:Envelope>",
        server.url()
    )
}

fn configure(ctx: &TestContext, server: &mockito::Server) {
    ctx.write_config(&format!("[platform]\nlogin_url = \"{}\"\n", server.url()));
}

#[test]
fn deploy_creates_missing_event_bundle_and_closes_session() {
    let mut server = mockito::Server::new();
    let login_body = login_response(&server);
    let login = server
        .mock("POST", SOAP_PATH)
        .match_header("SOAPAction", "login")
        .match_body(Matcher::Regex("<n1:username>dev@example.com</n1:username>".into()))
        .with_status(200)
        .with_body(login_body)
        .create();
    let query = server
        .mock("GET", "/services/data/v32.0/tooling/query/")
        .match_query(Matcher::Regex("AuraDefinitionBundle".into()))
        .match_header("authorization", "Bearer SESSION")
        .with_status(200)
        .with_body(r#"{"records":[]}"#)
        .create();
    let bundle = server
        .mock("POST", "/services/data/v32.0/tooling/sobjects/AuraDefinitionBundle/")
        .match_body(Matcher::PartialJsonString(r#"{"DeveloperName":"strike_evt"}"#.into()))
        .with_status(201)
        .with_body(r#"{"id":"0Ab000000000001","success":true,"errors":[]}"#)
        .create();
    let definition = server
        .mock("POST", "/services/data/v32.0/tooling/sobjects/AuraDefinition/")
        .match_body(Matcher::PartialJsonString(
            r#"{"AuraDefinitionBundleId":"0Ab000000000001","DefType":"EVENT","Format":"XML"}"#
                .into(),
        ))
        .with_status(201)
        .with_body(r#"{"id":"0Ad000000000001","success":true,"errors":[]}"#)
        .create();
    let logout = server
        .mock("POST", SOAP_PATH)
        .match_header("SOAPAction", "logout")
        .match_body(Matcher::Regex("SESSION".into()))
        .with_status(200)
        .with_body("<logoutResponse/>")
        .create();

    let ctx = TestContext::new();
    configure(&ctx, &server);
    ctx.write_file("strike-components/strike_evt/strike_evt.evt", "<aura:event type=\"APPLICATION\"/>");

    ctx.cli()
        .args(["deploy", "strike_evt"])
        .env("SF_STRIKE_USERNAME", "dev@example.com")
        .env("SF_STRIKE_PASSWORD", "secret")
        .assert()
        .success()
        .stdout(predicate::str::contains("strike_evt Bundle has been created"))
        .stdout(predicate::str::contains("strike_evt Event has been created"))
        .stdout(predicate::str::contains("secret").not());

    login.assert();
    query.assert();
    bundle.assert();
    definition.assert();
    logout.assert();
}

#[test]
fn deploy_reports_rejected_login() {
    let mut server = mockito::Server::new();
    let _login = server
        .mock("POST", SOAP_PATH)
        .with_status(500)
        .with_body("<soapenv:Fault><faultstring>INVALID_LOGIN: Invalid username, password, security token; or user locked out.</faultstring></soapenv:Fault>")
        .create();

    let ctx = TestContext::new();
    configure(&ctx, &server);

    ctx.cli()
        .args(["deploy", "strike_evt"])
        .env("SF_STRIKE_USERNAME", "dev@example.com")
        .env("SF_STRIKE_PASSWORD", "wrong")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Login failed: INVALID_LOGIN"));
}

#[test]
fn deploy_rejects_invalid_bundle_name_before_login() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["deploy", "bad-name"])
        .env("SF_STRIKE_USERNAME", "dev@example.com")
        .env("SF_STRIKE_PASSWORD", "secret")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bundle name 'bad-name'"));
}
