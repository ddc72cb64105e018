//! Lists pending interruptions and approves the first one that offers `Proceed`.
//!
//! ```text
//! cargo run -p octopus-client --example pending_interruptions -- https://octopus.example.com API-XXXX
//! ```

use octopus_client::{
    ClientConfig, ClientError, InterruptionQuery, InterruptionService, InterruptionSubmitRequest,
    ResolutionKind,
};

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "octopus_client=debug".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let base_url = args.next().unwrap_or_else(|| "http://localhost:8080".into());
    let mut config = ClientConfig::new(base_url);
    if let Some(api_key) = args.next() {
        config = config.with_api_key(api_key);
    }

    let service = InterruptionService::new(config.build_http_client()?);
    let page = service
        .list(&InterruptionQuery::new().pending_only(true))
        .await?;
    println!("{} pending interruption(s)", page.total_results);

    for interruption in &page.items {
        println!("  {} - {}", interruption.id, interruption.title);
    }

    let Some(target) = page.items.iter().find(|i| {
        i.form
            .resolutions()
            .any(|b| b.value == ResolutionKind::MANUAL_INTERVENTION_APPROVE)
    }) else {
        return Ok(());
    };

    let holder = service.take_responsibility(target).await?;
    println!("Responsibility taken by {}", holder.display_name);

    let resolved = service
        .submit(target, &InterruptionSubmitRequest::approve("Approved from example"))
        .await?;
    println!("{} pending: {}", resolved.id, resolved.is_pending);
    Ok(())
}
