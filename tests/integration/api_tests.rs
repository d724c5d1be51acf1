//! API integration tests
//!
//! These run against a live server backed by a scratch database.

use reqwest::{
    multipart::{Form, Part},
    Client, StatusCode,
};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Lab names are global, so every test works under its own prefix
fn unique(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}", prefix, nanos)
}

fn upload(file_name: &str, content: String, entity: &str) -> Form {
    Form::new()
        .part(
            "file",
            Part::bytes(content.into_bytes()).file_name(file_name.to_string()),
        )
        .text("entity", entity.to_string())
}

async fn import(client: &Client, form: Form) -> (StatusCode, Value) {
    let response = client
        .post(format!("{}/labs/import", BASE_URL))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send import request");
    let status = response.status();
    let body: Value = response.json().await.expect("Failed to parse import response");
    (status, body)
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_import_labs_skips_duplicates() {
    let client = Client::new();
    let name = unique("Lab A");
    let csv = format!("name,location\n{name},Block 1\n{name},Block 2\n");

    let (status, body) = import(&client, upload("labs.csv", csv.clone(), "labs")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["entity"], "labs");
    assert_eq!(body["created"], 1);
    assert_eq!(body["skipped"], 1);
    assert_eq!(body["errors"], json!([]));

    // a second run only skips
    let (_, body) = import(&client, upload("labs.csv", csv, "labs")).await;
    assert_eq!(body["created"], 0);
    assert_eq!(body["skipped"], 2);
}

#[tokio::test]
#[ignore]
async fn test_import_equipment_reports_invalid_type() {
    let client = Client::new();
    let lab_name = unique("Equipment Lab");
    let csv = "equipment_code,name,equipment_type,quantity\nLT-1,Laptop cart,laptop,0\n".to_string();

    let form = upload("equipment.csv", csv, "lab-equipment").text("lab_name", lab_name.clone());
    let (status, body) = import(&client, form).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["created"], 1);
    assert_eq!(body["lab"]["name"], lab_name.as_str());
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].as_str().unwrap().contains("laptop"));

    let lab_id = body["lab"]["id"].as_i64().unwrap();
    let equipment: Value = client
        .get(format!("{}/labs/{}/lab-equipment", BASE_URL, lab_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(equipment[0]["equipment_type"], "OTHER");
    assert_eq!(equipment[0]["quantity"], 1);
}

#[tokio::test]
#[ignore]
async fn test_import_rejects_invalid_entity() {
    let client = Client::new();

    let (status, body) = import(&client, upload("labs.csv", "name\nX\n".to_string(), "printers")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Invalid entity");
}

#[tokio::test]
#[ignore]
async fn test_import_requires_file() {
    let client = Client::new();

    let form = Form::new().text("entity", "labs");
    let (status, body) = import(&client, form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("required"));
}

#[tokio::test]
#[ignore]
async fn test_import_rejects_unsupported_format() {
    let client = Client::new();

    let (status, body) = import(&client, upload("labs.json", "[]".to_string(), "labs")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_import_unknown_lab_id() {
    let client = Client::new();

    let form = upload("pcs.csv", "device_name\nPC-1\n".to_string(), "pcs").text("lab_id", "999999");
    let (status, body) = import(&client, form).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Lab 999999 not found");
}

#[tokio::test]
#[ignore]
async fn test_maintenance_requires_one_target() {
    let client = Client::new();

    let response = client
        .post(format!("{}/maintenance", BASE_URL))
        .json(&json!({ "issue_description": "Flickering screen" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore]
async fn test_detail_type_guard() {
    let client = Client::new();

    let lab: Value = client
        .post(format!("{}/labs", BASE_URL))
        .json(&json!({ "name": unique("Guard Lab") }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let fan: Value = client
        .post(format!("{}/lab-equipment", BASE_URL))
        .json(&json!({
            "lab_id": lab["id"],
            "equipment_code": "FAN-1",
            "name": "Ceiling fan",
            "category": "APPLIANCE",
            "equipment_type": "FAN"
        }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let response = client
        .put(format!("{}/lab-equipment/{}/details", BASE_URL, fan["id"]))
        .json(&json!({ "kind": "projector", "resolution": "1920x1080" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

async fn post_json(client: &Client, path: &str, body: Value) -> (StatusCode, Value) {
    let response = client
        .post(format!("{}{}", BASE_URL, path))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

async fn put_json(client: &Client, path: &str, body: Value) -> (StatusCode, Value) {
    let response = client
        .put(format!("{}{}", BASE_URL, path))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

/// A fresh lab holding one PC
async fn lab_with_pc(client: &Client, prefix: &str) -> (Value, Value) {
    let (_, lab) = post_json(client, "/labs", json!({ "name": unique(prefix) })).await;
    let (status, pc) = post_json(
        client,
        "/pcs",
        json!({ "lab_id": lab["id"], "device_name": "PC-01" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    (lab, pc)
}

#[tokio::test]
#[ignore]
async fn test_update_lab_keeps_omitted_fields() {
    let client = Client::new();
    let (_, lab) = post_json(
        &client,
        "/labs",
        json!({ "name": unique("Edit Lab"), "location": "Block A" }),
    )
    .await;

    let renamed = unique("Edited Lab");
    let (status, body) =
        put_json(&client, &format!("/labs/{}", lab["id"]), json!({ "name": renamed })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], renamed.as_str());
    assert_eq!(body["location"], "Block A");

    let (status, _) = put_json(&client, "/labs/999999", json!({ "location": "x" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_pc_update_moves_between_labs() {
    let client = Client::new();
    let (_, pc) = lab_with_pc(&client, "Move From").await;
    let (_, target) = post_json(&client, "/labs", json!({ "name": unique("Move To") })).await;

    let (status, body) = put_json(
        &client,
        &format!("/pcs/{}", pc["id"]),
        json!({ "lab_id": target["id"], "status": "not_working" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lab_id"], target["id"]);
    assert_eq!(body["status"], "not_working");
    assert_eq!(body["device_name"], "PC-01");

    let (status, _) =
        put_json(&client, &format!("/pcs/{}", pc["id"]), json!({ "lab_id": 999999 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_equipment_retype_keeps_details_valid() {
    let client = Client::new();
    let (_, lab) = post_json(&client, "/labs", json!({ "name": unique("Retype Lab") })).await;
    let (_, fan) = post_json(
        &client,
        "/lab-equipment",
        json!({
            "lab_id": lab["id"],
            "equipment_code": "FAN-1",
            "name": "Ceiling fan",
            "category": "APPLIANCE",
            "equipment_type": "FAN"
        }),
    )
    .await;
    let (status, _) = put_json(
        &client,
        &format!("/lab-equipment/{}/details", fan["id"]),
        json!({ "kind": "electrical", "power_rating": "75W" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let path = format!("/lab-equipment/{}", fan["id"]);
    let (status, _) = put_json(&client, &path, json!({ "equipment_type": "PROJECTOR" })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Electrical details also fit a LIGHT
    let (status, body) = put_json(&client, &path, json!({ "equipment_type": "LIGHT" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["equipment_type"], "LIGHT");
    assert_eq!(body["name"], "Ceiling fan");
}

#[tokio::test]
#[ignore]
async fn test_peripheral_and_software_lookup() {
    let client = Client::new();
    let (_, pc) = lab_with_pc(&client, "Lookup Lab").await;

    let (status, monitor) = post_json(
        &client,
        "/peripherals",
        json!({ "pc_id": pc["id"], "peripheral_type": "monitor", "brand": "Dell" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let listed: Value = client
        .get(format!("{}/peripherals?pc_id={}", BASE_URL, pc["id"]))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let (status, body) = put_json(
        &client,
        &format!("/peripherals/{}", monitor["id"]),
        json!({ "status": "not_working" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["brand"], "Dell");

    let (_, office) = post_json(
        &client,
        "/software",
        json!({ "pc_id": pc["id"], "name": "Office", "version": "2019" }),
    )
    .await;
    let response = client
        .get(format!("{}/software/{}", BASE_URL, office["id"]))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_pc_cpu_and_os_records() {
    let client = Client::new();
    let (_, pc) = lab_with_pc(&client, "Parts Lab").await;

    let (status, cpu) = post_json(
        &client,
        "/cpu",
        json!({ "pc_id": pc["id"], "model": "Intel Core i5-10400", "core_count": 6 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(cpu["integrated_graphics"], false);

    let (status, _) =
        post_json(&client, "/cpu", json!({ "pc_id": pc["id"], "model": "Spare" })).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = put_json(
        &client,
        &format!("/cpu/{}", cpu["id"]),
        json!({ "clock_speed": "2.9GHz" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], "Intel Core i5-10400");

    let (status, os) = post_json(
        &client,
        "/os",
        json!({ "pc_id": pc["id"], "name": "Windows 11 Pro" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(os["architecture"], "64-bit");

    let response = client
        .delete(format!("{}/os/{}", BASE_URL, os["id"]))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{}/os/{}", BASE_URL, os["id"]))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_maintenance_update_and_delete() {
    let client = Client::new();
    let (_, pc) = lab_with_pc(&client, "Ticket Lab").await;
    let (_, log) = post_json(
        &client,
        "/maintenance",
        json!({ "pc_id": pc["id"], "issue_description": "No boot" }),
    )
    .await;
    assert!(log["fixed_on"].is_null());

    let path = format!("/maintenance/{}", log["id"]);
    let (status, body) = put_json(
        &client,
        &path,
        json!({ "status": "fixed", "fixed_by": "tech" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "fixed");
    assert!(!body["fixed_on"].is_null());
    assert_eq!(body["issue_description"], "No boot");

    let response = client
        .delete(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
