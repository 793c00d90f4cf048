use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde_json::{json, Value};
use url::Url;

use crate::config::Backend;
use crate::report::Report;

const DEPARTMENT_TABLE: &str = "departments";
const USER_TABLE: &str = "users";
const SUBMISSION_TABLE: &str = "carbon_submissions";

const DEPARTMENT_NAME: &str = "Institution-wide";
const DEPARTMENT_STUDENT_COUNT: u32 = 10000;

const ADMIN_NAME: &str = "System Admin";
const ADMIN_EMAIL: &str = "admin@institution.edu";
const ADMIN_ROLE: &str = "admin";

const TRAVEL_KM: u32 = 40000;

/// Metered consumption for one month. Campus travel and the waste columns
/// were flat over the whole period, so only the varying meters are listed.
struct MonthlyUsage {
    month: &'static str,
    electricity_kwh: u32,
    diesel_liters: u32,
    petrol_liters: u32,
    lpg_kg: u32,
}

impl MonthlyUsage {
    fn payload(&self, user_id: &str, department_id: &str) -> Value {
        json!({
            "user_id": user_id,
            "department_id": department_id,
            "submission_date": self.month,
            "electricity_kwh": self.electricity_kwh,
            "diesel_liters": self.diesel_liters,
            "petrol_liters": self.petrol_liters,
            "lpg_kg": self.lpg_kg,
            "travel_km": TRAVEL_KM,
            "water_liters": 0,
            "paper_kg": 0,
            "plastic_kg": 0,
            "ewaste_kg": 0,
            "organic_waste_kg": 0,
        })
    }
}

fn submission_history() -> Vec<MonthlyUsage> {
    vec![
        MonthlyUsage {
            month: "2024-07-01",
            electricity_kwh: 30416,
            diesel_liters: 600,
            petrol_liters: 525,
            lpg_kg: 133,
        },
        MonthlyUsage {
            month: "2024-08-01",
            electricity_kwh: 76038,
            diesel_liters: 1200,
            petrol_liters: 525,
            lpg_kg: 285,
        },
        MonthlyUsage {
            month: "2024-09-01",
            electricity_kwh: 82006,
            diesel_liters: 1200,
            petrol_liters: 525,
            lpg_kg: 285,
        },
        MonthlyUsage {
            month: "2024-10-01",
            electricity_kwh: 89221,
            diesel_liters: 400,
            petrol_liters: 525,
            lpg_kg: 285,
        },
        MonthlyUsage {
            month: "2024-11-01",
            electricity_kwh: 85703,
            diesel_liters: 600,
            petrol_liters: 525,
            lpg_kg: 228,
        },
        MonthlyUsage {
            month: "2024-12-01",
            electricity_kwh: 83948,
            diesel_liters: 300,
            petrol_liters: 525,
            lpg_kg: 247,
        },
        MonthlyUsage {
            month: "2025-01-01",
            electricity_kwh: 71298,
            diesel_liters: 400,
            petrol_liters: 525,
            lpg_kg: 190,
        },
        MonthlyUsage {
            month: "2025-02-01",
            electricity_kwh: 65174,
            diesel_liters: 400,
            petrol_liters: 525,
            lpg_kg: 285,
        },
        MonthlyUsage {
            month: "2025-03-01",
            electricity_kwh: 84851,
            diesel_liters: 400,
            petrol_liters: 525,
            lpg_kg: 285,
        },
        MonthlyUsage {
            month: "2025-04-01",
            electricity_kwh: 91594,
            diesel_liters: 400,
            petrol_liters: 525,
            lpg_kg: 228,
        },
        MonthlyUsage {
            month: "2025-05-01",
            electricity_kwh: 94464,
            diesel_liters: 300,
            petrol_liters: 525,
            lpg_kg: 247,
        },
        MonthlyUsage {
            month: "2025-06-01",
            electricity_kwh: 78637,
            diesel_liters: 400,
            petrol_liters: 175,
            lpg_kg: 133,
        },
    ]
}

/// A failed monthly insert is reported and the remaining months still sent;
/// a failure while setting up the department or user aborts the import.
pub fn run(backend: &Backend) -> Result<Report> {
    let client = Client::new();
    let mut report = Report::new();

    println!("Starting data import...");
    let department_id = ensure_department(&client, backend, &mut report)?;
    let user_id = ensure_user(&client, backend, &department_id, &mut report)?;

    println!("Importing 12 months of historical data...");
    for usage in submission_history() {
        match insert_submission(&client, backend, &user_id, &department_id, &usage) {
            Ok(()) => report.done(format!("Imported {}", usage.month)),
            Err(err) => report.failed(format!("Error importing {}: {:#}", usage.month, err)),
        }
    }

    println!("Data import completed!");
    Ok(report)
}

fn ensure_department(client: &Client, backend: &Backend, report: &mut Report) -> Result<String> {
    if let Some(id) = find_id(client, backend, DEPARTMENT_TABLE, "name", DEPARTMENT_NAME)? {
        report.done(format!("Using existing department: {}", id));
        return Ok(id);
    }
    println!("Creating Institution-wide department...");
    let id = create_row(
        client,
        backend,
        DEPARTMENT_TABLE,
        &json!({
            "name": DEPARTMENT_NAME,
            "student_count": DEPARTMENT_STUDENT_COUNT,
        }),
    )?;
    report.done(format!("Department created: {}", id));
    Ok(id)
}

fn ensure_user(
    client: &Client,
    backend: &Backend,
    department_id: &str,
    report: &mut Report,
) -> Result<String> {
    if let Some(id) = find_id(client, backend, USER_TABLE, "email", ADMIN_EMAIL)? {
        report.done(format!("Using existing user: {}", id));
        return Ok(id);
    }
    println!("Creating admin user...");
    let id = create_row(
        client,
        backend,
        USER_TABLE,
        &json!({
            "name": ADMIN_NAME,
            "email": ADMIN_EMAIL,
            "role": ADMIN_ROLE,
            "department_id": department_id,
        }),
    )?;
    report.done(format!("User created: {}", id));
    Ok(id)
}

fn insert_submission(
    client: &Client,
    backend: &Backend,
    user_id: &str,
    department_id: &str,
    usage: &MonthlyUsage,
) -> Result<()> {
    let url = table_url(backend, SUBMISSION_TABLE);
    client
        .post(url.clone())
        .header("apikey", &backend.api_key)
        .bearer_auth(&backend.api_key)
        .json(&usage.payload(user_id, department_id))
        .send()
        .with_context(|| format!("Failed to send request to {}", url))?
        .error_for_status()
        .with_context(|| format!("Request to {} failed", url))?;
    Ok(())
}

fn find_id(
    client: &Client,
    backend: &Backend,
    table: &str,
    column: &str,
    value: &str,
) -> Result<Option<String>> {
    let url = select_by(backend, table, column, value);
    let rows: Value = client
        .get(url.clone())
        .header("apikey", &backend.api_key)
        .bearer_auth(&backend.api_key)
        .send()
        .with_context(|| format!("Failed to send request to {}", url))?
        .error_for_status()
        .with_context(|| format!("Request to {} failed", url))?
        .json()
        .with_context(|| format!("Failed to parse response from {}", url))?;
    Ok(rows.get(0).and_then(row_id))
}

fn create_row(client: &Client, backend: &Backend, table: &str, payload: &Value) -> Result<String> {
    let url = table_url(backend, table);
    let rows: Value = client
        .post(url.clone())
        .header("apikey", &backend.api_key)
        .bearer_auth(&backend.api_key)
        .header("Prefer", "return=representation")
        .json(payload)
        .send()
        .with_context(|| format!("Failed to send request to {}", url))?
        .error_for_status()
        .with_context(|| format!("Request to {} failed", url))?
        .json()
        .with_context(|| format!("Failed to parse response from {}", url))?;
    rows.get(0)
        .and_then(row_id)
        .ok_or_else(|| anyhow!("No id in response from {}", url))
}

fn table_url(backend: &Backend, table: &str) -> Url {
    let mut url = backend.api_url.clone();
    url.set_path(&format!("/rest/v1/{}", table));
    url
}

fn select_by(backend: &Backend, table: &str, column: &str, value: &str) -> Url {
    let mut url = table_url(backend, table);
    url.set_query(Some(&format!(
        "select=id&{}=eq.{}",
        column,
        urlencoding::encode(value)
    )));
    url
}

/// Ids come back as uuids on hosted projects and as integers on local ones.
fn row_id(row: &Value) -> Option<String> {
    match row.get("id") {
        Some(Value::String(id)) => Some(id.clone()),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    }
}
