mod decode;
mod error;
mod extract;
mod fetch;
mod handler;
mod models;
mod notify;

use std::env;

use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use tracing_subscriber::filter;

use fetch::ObjectFetcher;
use notify::SlackNotifier;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_level(true)
        .with_max_level(filter::LevelFilter::INFO)
        // CloudWatch stamps every line with its own ingestion time.
        .without_time()
        .init();

    let slack_url = env::var("SLACK_URL").expect("SLACK_URL not set");

    let fetcher = ObjectFetcher::new(aws_sdk_s3::Client::new(&aws_config::load_from_env().await));
    let notifier = SlackNotifier::new(reqwest::Client::new(), slack_url);

    let fetcher_ref = &fetcher;
    let notifier_ref = &notifier;
    run(service_fn(move |event: LambdaEvent<S3Event>| async move {
        handler::handle_event(event, fetcher_ref, notifier_ref).await
    }))
    .await
}
