use csv::{ReaderBuilder, Trim};
use register::Register;
use tokio::sync::mpsc;

/// The size of the channel for processing sales.
const CHANNEL_SIZE: usize = 100;

#[tokio::main]
async fn main() {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() != 2 {
        eprintln!("Usage: {} <input_csv_file>", args[0]);
        std::process::exit(1);
    }
    let input_file = &args[1];

    let (sender, receiver) = mpsc::channel(CHANNEL_SIZE);
    let mut register = Register::new(receiver);

    let handle = tokio::spawn(async move {
        register.run().await;
        register
    });

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(input_file)
        .expect("Failed to read CSV file");

    for sale in reader.deserialize().flatten() {
        if let Err(err) = sender.send(sale).await {
            eprintln!("Error sending sale: {err}");
        }
    }

    drop(sender); // Close the sender to signal no more sales will be sent
    let register = handle
        .await
        .expect("Failed to join the register handling task");

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for record in register.records() {
        if let Err(err) = writer.serialize(record) {
            eprintln!("Error writing settlement: {err}");
        }
    }
}
