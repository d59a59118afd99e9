//! Schema-level tests that drive whole GraphQL documents end to end.

use std::net::{IpAddr, Ipv4Addr};

use async_graphql::Request;
use serde_json::json;
use sw_graphql::{ApiSchema, ClientAddr, Roller, build_schema, shared_store};

fn schema_with_seed(seed: u64) -> ApiSchema {
    build_schema(shared_store(), Roller::seeded(seed))
}

/// Execute a document that is expected to succeed and return its data.
async fn execute(schema: &ApiSchema, document: &str) -> serde_json::Value {
    let resp = schema.execute(document).await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);
    resp.data.into_json().unwrap()
}

// ---------------------------------------------------------------------------
// scalar queries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn hello_returns_the_greeting() {
    let schema = schema_with_seed(1);
    let data = execute(&schema, "{ hello }").await;
    assert_eq!(data, json!({ "hello": "Hello World" }));
}

#[tokio::test]
async fn quote_of_the_day_cycles_between_the_two_quotes() {
    let schema = schema_with_seed(2);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..50 {
        let data = execute(&schema, "{ quoteOfTheDay }").await;
        seen.insert(data["quoteOfTheDay"].as_str().unwrap().to_string());
    }
    assert_eq!(seen.len(), 2);
}

#[tokio::test]
async fn random_stays_in_the_unit_interval() {
    let schema = schema_with_seed(3);
    for _ in 0..50 {
        let data = execute(&schema, "{ random }").await;
        let value = data["random"].as_f64().unwrap();
        assert!((0.0..1.0).contains(&value), "out of range: {value}");
    }
}

// ---------------------------------------------------------------------------
// dice
// ---------------------------------------------------------------------------

#[tokio::test]
async fn roll_three_dice_yields_three_six_sided_values() {
    let schema = schema_with_seed(4);
    for _ in 0..20 {
        let data = execute(&schema, "{ rollThreeDice }").await;
        let values = data["rollThreeDice"].as_array().unwrap();
        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|v| (1..=6).contains(&v.as_i64().unwrap())));
    }
}

#[tokio::test]
async fn roll_dice_respects_count_and_sides() {
    let schema = schema_with_seed(5);
    let data = execute(&schema, "{ rollDice(numDice: 5, numSides: 12) }").await;
    let values = data["rollDice"].as_array().unwrap();
    assert_eq!(values.len(), 5);
    assert!(values.iter().all(|v| (1..=12).contains(&v.as_i64().unwrap())));
}

#[tokio::test]
async fn roll_dice_defaults_to_six_sides() {
    let schema = schema_with_seed(6);
    let data = execute(&schema, "{ rollDice(numDice: 40) }").await;
    let values = data["rollDice"].as_array().unwrap();
    assert_eq!(values.len(), 40);
    assert!(values.iter().all(|v| (1..=6).contains(&v.as_i64().unwrap())));
}

#[tokio::test]
async fn roll_dice_with_no_dice_yields_an_empty_list() {
    let schema = schema_with_seed(7);
    let data = execute(&schema, "{ rollDice(numDice: 0) }").await;
    assert_eq!(data, json!({ "rollDice": [] }));
    let data = execute(&schema, "{ rollDice(numDice: -3) }").await;
    assert_eq!(data, json!({ "rollDice": [] }));
}

#[tokio::test]
async fn get_die_resolves_nested_fields() {
    let schema = schema_with_seed(8);
    let data = execute(
        &schema,
        "{ getDie(numSides: 10) { numSides rollOnce roll(numRolls: 4) } }",
    )
    .await;
    let die = &data["getDie"];
    assert_eq!(die["numSides"], json!(10));
    assert!((1..=10).contains(&die["rollOnce"].as_i64().unwrap()));
    let rolls = die["roll"].as_array().unwrap();
    assert_eq!(rolls.len(), 4);
    assert!(rolls.iter().all(|v| (1..=10).contains(&v.as_i64().unwrap())));
}

#[tokio::test]
async fn get_die_clamps_awkward_side_counts() {
    let schema = schema_with_seed(9);
    let data = execute(&schema, "{ getDie { numSides } }").await;
    assert_eq!(data, json!({ "getDie": { "numSides": 6 } }));
    let data = execute(&schema, "{ getDie(numSides: 0) { numSides } }").await;
    assert_eq!(data, json!({ "getDie": { "numSides": 6 } }));
    let data = execute(&schema, "{ getDie(numSides: -5) { numSides rollOnce } }").await;
    assert_eq!(data["getDie"]["numSides"], json!(1));
    assert_eq!(data["getDie"]["rollOnce"], json!(1));
}

#[tokio::test]
async fn seeded_schemas_roll_the_same_sequence() {
    let a = schema_with_seed(42);
    let b = schema_with_seed(42);
    let document = "{ rollDice(numDice: 10, numSides: 20) }";
    assert_eq!(execute(&a, document).await, execute(&b, document).await);
}

// ---------------------------------------------------------------------------
// messages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_then_get_returns_the_same_record() {
    let schema = schema_with_seed(10);
    let created = execute(
        &schema,
        r#"mutation { createMessage(input: { content: "hi", author: "alice" }) {
            id content author
        } }"#,
    )
    .await;
    let id = created["createMessage"]["id"].as_str().unwrap().to_string();
    assert_eq!(created["createMessage"]["content"], json!("hi"));
    assert_eq!(created["createMessage"]["author"], json!("alice"));

    let fetched = execute(
        &schema,
        &format!(r#"{{ getMessage(id: "{id}") {{ id content author }} }}"#),
    )
    .await;
    assert_eq!(fetched["getMessage"], created["createMessage"]);
}

#[tokio::test]
async fn create_message_accepts_an_empty_input() {
    let schema = schema_with_seed(11);
    let data = execute(
        &schema,
        "mutation { createMessage(input: {}) { id content author } }",
    )
    .await;
    assert_eq!(data["createMessage"]["content"], json!(null));
    assert_eq!(data["createMessage"]["author"], json!(null));
    assert!(!data["createMessage"]["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn update_message_replaces_every_field() {
    let schema = schema_with_seed(12);
    let created = execute(
        &schema,
        r#"mutation { createMessage(input: { content: "first", author: "alice" }) { id } }"#,
    )
    .await;
    let id = created["createMessage"]["id"].as_str().unwrap().to_string();

    let updated = execute(
        &schema,
        &format!(
            r#"mutation {{ updateMessage(id: "{id}", input: {{ content: "second" }}) {{
                id content author
            }} }}"#
        ),
    )
    .await;
    assert_eq!(
        updated["updateMessage"],
        json!({ "id": id, "content": "second", "author": null })
    );

    let fetched = execute(
        &schema,
        &format!(r#"{{ getMessage(id: "{id}") {{ id content author }} }}"#),
    )
    .await;
    assert_eq!(fetched["getMessage"], updated["updateMessage"]);
}

#[tokio::test]
async fn get_missing_message_reports_the_exact_id() {
    let schema = schema_with_seed(13);
    let resp = schema
        .execute(r#"{ getMessage(id: "nonexistent-id") { id } }"#)
        .await;
    assert_eq!(resp.errors.len(), 1);
    assert_eq!(
        resp.errors[0].message,
        "no message exists with id nonexistent-id"
    );
}

#[tokio::test]
async fn update_missing_message_reports_the_exact_id() {
    let schema = schema_with_seed(14);
    let resp = schema
        .execute(r#"mutation { updateMessage(id: "nonexistent-id", input: {}) { id } }"#)
        .await;
    assert_eq!(resp.errors.len(), 1);
    assert_eq!(
        resp.errors[0].message,
        "no message exists with id nonexistent-id"
    );
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let schema = schema_with_seed(15);
    let document = r#"mutation { createMessage(input: { content: "race" }) { id } }"#;
    let (a, b) = tokio::join!(schema.execute(document), schema.execute(document));
    assert!(a.errors.is_empty() && b.errors.is_empty());
    let a = a.data.into_json().unwrap();
    let b = b.data.into_json().unwrap();
    assert_ne!(a["createMessage"]["id"], b["createMessage"]["id"]);
}

// ---------------------------------------------------------------------------
// request context and introspection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ip_reads_the_injected_client_address() {
    let schema = schema_with_seed(16);
    let request = Request::new("{ ip }").data(ClientAddr(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    let resp = schema.execute(request).await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);
    assert_eq!(resp.data.into_json().unwrap(), json!({ "ip": "127.0.0.1" }));
}

#[tokio::test]
async fn sdl_lists_every_operation() {
    let schema = schema_with_seed(17);
    let sdl = schema.sdl();
    for needle in [
        "hello",
        "quoteOfTheDay",
        "random",
        "rollThreeDice",
        "rollDice",
        "getDie",
        "getMessage",
        "ip",
        "createMessage",
        "updateMessage",
        "RandomDie",
        "MessageInput",
    ] {
        assert!(sdl.contains(needle), "sdl is missing {needle}");
    }
}
