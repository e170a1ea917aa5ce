use std::io;

use smsman::{Token, blocking::SmsManClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let token = std::env::var("SMSMAN_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSMAN_TOKEN environment variable is required",
        )
    })?;

    let client = SmsManClient::new(Token::new(token)?)?;
    println!("balance: {}", client.balance()?);

    let countries = client.countries()?;
    let services = client.services()?;
    println!(
        "{} countries, {} services available",
        countries.len(),
        services.len()
    );

    Ok(())
}
