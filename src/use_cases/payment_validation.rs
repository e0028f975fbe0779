use chrono::{DateTime, TimeZone, Utc};

use crate::domain::errors::PaymentError;

const CARD_NUMBER_LEN: usize = 16;
const CVV_LEN: usize = 3;
const MIN_CARDHOLDER_NAME_LEN: usize = 2;

// Borrowed view of the card fields checked before a mock charge.
#[derive(Clone, Copy, Debug, Default)]
pub struct CardDetails<'a> {
    pub card_number: Option<&'a str>,
    pub card_name: Option<&'a str>,
    pub expiry: Option<&'a str>,
    pub cvv: Option<&'a str>,
    pub amount: Option<f64>,
}

/// Structural checks over a submitted card, evaluated in a fixed order and
/// stopping at the first failure.
///
/// A card number, expiry or CVV that is missing altogether is reported as
/// [`PaymentError::MalformedPayload`] at the point where it would have been
/// read; callers treat that as an internal failure rather than a 400.
pub fn validate_card(card: CardDetails<'_>, now: DateTime<Utc>) -> Result<(), PaymentError> {
    let card_number = card
        .card_number
        .ok_or(PaymentError::MalformedPayload("cardNumber"))?;
    if !card_number.starts_with('4') || card_number.chars().count() != CARD_NUMBER_LEN {
        return Err(PaymentError::InvalidCardNumber);
    }

    let expiry = card.expiry.ok_or(PaymentError::MalformedPayload("expiry"))?;
    let expires_at = expiry_instant(expiry).ok_or(PaymentError::InvalidExpiry)?;
    if expires_at < now {
        return Err(PaymentError::InvalidExpiry);
    }

    let cvv = card.cvv.ok_or(PaymentError::MalformedPayload("cvv"))?;
    if cvv.chars().count() != CVV_LEN {
        return Err(PaymentError::InvalidCvv);
    }

    let name_len = card
        .card_name
        .map(|name| name.trim().chars().count())
        .unwrap_or_default();
    if name_len < MIN_CARDHOLDER_NAME_LEN {
        return Err(PaymentError::InvalidCardholderName);
    }

    match card.amount {
        Some(amount) if amount > 0.0 => Ok(()),
        _ => Err(PaymentError::InvalidAmount),
    }
}

// First instant of the expiry month, reading `MM/YY` as 20YY.
fn expiry_instant(expiry: &str) -> Option<DateTime<Utc>> {
    let (month, year) = expiry.split_once('/')?;
    let month = parse_two_digits(month)?;
    let year = parse_two_digits(year)?;

    if !(1..=12).contains(&month) {
        return None;
    }

    Utc.with_ymd_and_hms(2000 + year as i32, month, 1, 0, 0, 0).single()
}

fn parse_two_digits(value: &str) -> Option<u32> {
    if value.is_empty() || value.len() > 2 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
