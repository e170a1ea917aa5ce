use std::io;

use smsman::{BulkPolicy, CountryId, RequestNumbers, ServiceId, Token, blocking::SmsManClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let token = std::env::var("SMSMAN_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSMAN_TOKEN environment variable is required",
        )
    })?;
    let amount = std::env::var("SMSMAN_AMOUNT")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(3);

    let client = SmsManClient::builder(Token::new(token)?)
        .bulk_policy(BulkPolicy::default())
        .build()
        .map(SmsManClient::from)?;

    let request = RequestNumbers::new(CountryId::new("7")?, ServiceId::new("5")?, amount);
    for (slot, rented) in client.request_numbers(request)?.into_iter().enumerate() {
        match rented {
            Some(rented) => println!(
                "slot {slot}: {} (request {})",
                rented.number.raw(),
                rented.request_id.as_str()
            ),
            None => println!("slot {slot}: no number after retries"),
        }
    }

    Ok(())
}
