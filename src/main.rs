use boarding_sequencer::{
    generate_boarding_sequence, read_booking_rows_from_string, read_manifest,
    read_manifest_from_path, write_boarding_sequence_csv, BoardingSequence, BusLayout, Error,
    NormalizedSeatKey,
};
use clap::{Parser, ValueEnum};
use log::{error, info};
use std::collections::HashSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "boarding-sequencer-cli")]
#[command(about = "Orders bus bookings from a CSV manifest into an outside-in boarding sequence")]
struct Args {
    /// Manifest with `Booking_ID` and `Seats` columns (`.csv` or `.csv.gz`). Reads stdin when omitted
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Step through the sequence on the seat map instead of printing it
    #[arg(long)]
    animate: bool,

    /// Delay between animation steps, in milliseconds
    #[arg(long, env = "BOARDING_STEP_INTERVAL_MS", default_value_t = 1500)]
    step_interval_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
    Table,
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("Error generating boarding sequence: {}", e);
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let manifest = load_manifest(args.input.as_deref())?;
    let rows = read_booking_rows_from_string(&manifest)?;
    let sequence = generate_boarding_sequence(&rows)?;

    info!("Sequenced {} bookings from {} rows", sequence.len(), rows.len());

    if args.animate {
        animate(&sequence, Duration::from_millis(args.step_interval_ms));
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.format {
        OutputFormat::Csv => write_boarding_sequence_csv(&sequence, &mut out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &sequence)?;
            writeln!(out)?;
        }
        OutputFormat::Table => write_table(&sequence, &mut out)?,
    }

    Ok(())
}

fn load_manifest(path: Option<&Path>) -> Result<String, Error> {
    match path {
        Some(path) if path.as_os_str() != "-" => read_manifest_from_path(path),
        _ => read_manifest(io::stdin().lock(), false),
    }
}

fn write_table<W: Write>(sequence: &BoardingSequence, out: &mut W) -> Result<(), Error> {
    writeln!(out, "Boarding sequence: {}", sequence.summary())?;

    for (index, booking) in sequence.iter().enumerate() {
        let row = booking
            .lead_row()
            .map(|row| row.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let seat_count = booking.seat_count();

        writeln!(
            out,
            "{:>3}  {:<12} Row {:<4} {} seat{:<2} Seats: {}",
            index + 1,
            booking.booking_id,
            row,
            seat_count,
            if seat_count == 1 { "" } else { "s" },
            booking.seats_display
        )?;
    }

    Ok(())
}

fn animate(sequence: &BoardingSequence, interval: Duration) {
    let layout = BusLayout::standard();
    let steps = sequence.steps();

    for (index, step) in steps.iter().enumerate() {
        let boarding: HashSet<NormalizedSeatKey> = step.seat_keys.iter().cloned().collect();

        println!(
            "\nStep {}/{}: {}",
            step.position,
            steps.len(),
            step.booking_id
        );
        println!("{}", layout.render(&boarding));

        if index + 1 < steps.len() {
            thread::sleep(interval);
        }
    }
}
