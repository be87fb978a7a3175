use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_gateway::application::processor::TransactionProcessor;
use payment_gateway::config::{DEFAULT_RESULT_TOPIC, ProcessorConfig};
use payment_gateway::domain::decision::DEFAULT_LIMIT;
use payment_gateway::infrastructure::broker::{DEFAULT_PARTITIONS, InMemoryBroker};
use payment_gateway::infrastructure::factory::transaction_store_factory;
use payment_gateway::infrastructure::producer::BusProducer;
use payment_gateway::interfaces::csv::outcome_writer::OutcomeWriter;
use payment_gateway::interfaces::csv::request_reader::RequestReader;
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input transaction requests CSV file
    input: PathBuf,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, env = "GATEWAY_DB_PATH")]
    db_path: Option<PathBuf>,

    /// Topic receiving outcome events
    #[arg(long, env = "GATEWAY_RESULT_TOPIC", default_value = DEFAULT_RESULT_TOPIC)]
    result_topic: String,

    /// Highest approved amount
    #[arg(long, env = "GATEWAY_LIMIT", default_value_t = DEFAULT_LIMIT)]
    limit: Decimal,

    /// Partitions per topic on the in-process broker
    #[arg(long, env = "GATEWAY_PARTITIONS", default_value_t = DEFAULT_PARTITIONS)]
    partitions: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ProcessorConfig::new(cli.result_topic, cli.limit);
    let store_factory = transaction_store_factory(cli.db_path).into_diagnostic()?;
    let broker = InMemoryBroker::with_partitions(cli.partitions);
    let publisher = Box::new(BusProducer::json(broker.clone()));
    let processor = TransactionProcessor::with_config(store_factory(), publisher, &config);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);
    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());

    let mut processed = 0usize;
    let mut failed = 0usize;
    for request in reader.requests() {
        match request {
            Ok(request) => match processor.execute(request).await {
                Ok(outcome) => {
                    writer.write_outcome(&outcome).into_diagnostic()?;
                    processed += 1;
                }
                Err(e) => {
                    warn!(error = %e, "Error processing transaction");
                    failed += 1;
                }
            },
            Err(e) => {
                warn!(error = %e, "Error reading transaction");
                failed += 1;
            }
        }
    }
    writer.flush().into_diagnostic()?;

    info!(
        processed,
        failed,
        published = broker.messages(processor.result_topic()).await.len(),
        topic = processor.result_topic(),
        "run complete"
    );

    Ok(())
}
