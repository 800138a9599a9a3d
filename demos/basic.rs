//! Basic usage example.
//!
//! Creates a datastream, writes and reads a few datapoints, then cleans up.
//!
//! Run with: cargo run --example basic
//!
//! Environment variables:
//! - DOTIDE_DATABASE: database name
//! - DOTIDE_CLIENT_ID / DOTIDE_CLIENT_SECRET: database credentials

use chrono::{Duration, Utc};

use dotide_rs::api::{DatapointSelector, DatapointsQuery, NewDatastream};
use dotide_rs::models::{NewDatapoint, Order, Permission, Scope};
use dotide_rs::DotideClient;

#[tokio::main]
async fn main() -> dotide_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let database = std::env::var("DOTIDE_DATABASE")
        .expect("DOTIDE_DATABASE environment variable required");
    let client_id = std::env::var("DOTIDE_CLIENT_ID")
        .expect("DOTIDE_CLIENT_ID environment variable required");
    let client_secret = std::env::var("DOTIDE_CLIENT_SECRET")
        .expect("DOTIDE_CLIENT_SECRET environment variable required");

    let client = DotideClient::with_client_credentials(database, client_id, client_secret)?;

    let mut datastream = client
        .datastreams()
        .create(
            &NewDatastream::new()
                .id("demo")
                .name("Demo Datastream")
                .kind("number")
                .tags(["demo"])
                .property("unit", "celsius"),
        )
        .await?;
    println!("Created datastream {}", datastream.id());

    datastream.tags.push("example".to_string());
    datastream.save().await?;

    let datapoints = datastream.datapoints()?;
    let now = Utc::now();
    let created = datapoints
        .create(&[
            NewDatapoint::at(now - Duration::minutes(2), 20.5),
            NewDatapoint::at(now - Duration::minutes(1), 21.0),
        ])
        .await?;
    println!("Wrote {} datapoints", created.len());

    let dataset = datapoints
        .filter(
            DatapointsQuery::new()
                .start(now - Duration::hours(1))
                .end(now)
                .order(Order::Asc)
                .limit(1000),
        )
        .await?;
    for point in &dataset.datapoints {
        println!("  {} = {}", point.t, point.v);
    }

    let token = client
        .access_tokens()
        .create(Some(&[Scope::new([Permission::Read]).with_ids(["demo"])][..]))
        .await?;
    println!("Read-only token: {}", token.token);

    datapoints
        .delete(DatapointSelector::range(Some(now - Duration::hours(1)), Some(now)))
        .await?;
    token.delete().await?;
    datastream.delete().await?;

    println!("Cleaned up");
    Ok(())
}
