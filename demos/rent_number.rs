use std::io;
use std::thread;
use std::time::Duration;

use smsman::{
    CountryId, GetSms, RequestNumber, ServiceId, SetStatus, SmsManError, Token,
    blocking::SmsManClient,
};

const POLL_INTERVAL: Duration = Duration::from_secs(5);
const POLL_ATTEMPTS: u32 = 24;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let client = SmsManClient::new(Token::new(required_env("SMSMAN_TOKEN")?)?)?;
    let country = CountryId::new(required_env("SMSMAN_COUNTRY_ID")?)?;
    let service = ServiceId::new(required_env("SMSMAN_SERVICE_ID")?)?;

    let rented = client.request_number(RequestNumber::new(country, service))?;
    println!(
        "rented {} (request {})",
        rented.number.e164().unwrap_or_else(|_| rented.number.raw().to_owned()),
        rented.request_id.as_str()
    );

    for _ in 0..POLL_ATTEMPTS {
        match client.sms_code(GetSms::new(rented.request_id.clone())) {
            Ok(code) => {
                println!("sms code: {code}");
                client.set_status(SetStatus::new(
                    rented.request_id.clone(),
                    smsman::NumberStatus::Close,
                ))?;
                return Ok(());
            }
            Err(SmsManError::SmsNotReceived(_)) => thread::sleep(POLL_INTERVAL),
            Err(err) => return Err(err.into()),
        }
    }

    println!("no sms received, giving the number back");
    client.set_status(SetStatus::reject(rented.request_id))?;
    Ok(())
}
