use boarding_sequencer::generate_boarding_sequence_from_csv;

fn main() {
    env_logger::init();

    let manifest = "Booking_ID,Seats\nB1,\"A1,B1\"\nB2,C20\nB3,10C\nB4,18D";

    let sequence = generate_boarding_sequence_from_csv(manifest).unwrap();

    println!("Boarding sequence for the given manifest ({})", sequence.summary());
    for (index, booking) in sequence.iter().enumerate() {
        println!("{}: {} ({})", index + 1, booking.booking_id, booking.seats_display);
    }
}
