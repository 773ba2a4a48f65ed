use reqwest::Client;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new();
    let base_url =
        std::env::var("RELAY_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());

    println!("Testing query relay at {}", base_url);

    println!("\nLiveness:");
    let health_response = client.get(format!("{}/", base_url)).send().await?;

    println!("Status: {}", health_response.status());
    let health_json: serde_json::Value = health_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&health_json)?);

    println!("\nChat:");
    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "What topics do the documents in this store cover?".to_string());

    let chat_response = client
        .post(format!("{}/chat", base_url))
        .header("Content-Type", "application/json")
        .json(&json!({ "query": query }))
        .send()
        .await?;

    println!("Status: {}", chat_response.status());
    let chat_json: serde_json::Value = chat_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&chat_json)?);

    Ok(())
}
