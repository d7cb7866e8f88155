//! Chilean RUT (tax id) parsing and person-type classification
//!
//! Contractors are classified as natural persons or companies from the
//! numeric body of their RUT. Companies are issued bodies from
//! 70.000.000 upward; everything below is a natural person.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::contractor::PersonType;

/// Lowest RUT body issued to companies
pub const COMPANY_RUT_THRESHOLD: u32 = 70_000_000;

/// Largest body accepted (eight digits)
const MAX_RUT_BODY: u32 = 99_999_999;

/// A parsed RUT: numeric body plus verifier character (`0`-`9` or `K`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rut {
    body: u32,
    verifier: char,
}

impl Rut {
    /// Parse a RUT such as `12.345.678-5`, `12345678-5` or `123456785`
    ///
    /// Parsing only checks the shape; use [`Rut::is_valid`] to check the
    /// verifier digit.
    pub fn parse(s: &str) -> Result<Self, RutParseError> {
        let cleaned: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '.')
            .collect::<String>()
            .to_uppercase();

        if cleaned.is_empty() {
            return Err(RutParseError::Empty);
        }

        let (body, verifier) = match cleaned.rsplit_once('-') {
            Some((body, verifier)) => (body.to_string(), verifier.to_string()),
            None => {
                let split = cleaned.len() - cleaned.chars().last().map_or(0, |c| c.len_utf8());
                (cleaned[..split].to_string(), cleaned[split..].to_string())
            }
        };

        let mut verifier_chars = verifier.chars();
        let verifier = match (verifier_chars.next(), verifier_chars.next()) {
            (Some(c), None) if c.is_ascii_digit() || c == 'K' => c,
            (Some(c), None) => return Err(RutParseError::InvalidVerifier(c)),
            _ => return Err(RutParseError::MissingVerifier),
        };

        if body.is_empty() || body.len() > 8 || !body.chars().all(|c| c.is_ascii_digit()) {
            return Err(RutParseError::InvalidBody(body));
        }

        let body: u32 = body
            .parse()
            .map_err(|_| RutParseError::InvalidBody(body.clone()))?;

        Ok(Self { body, verifier })
    }

    /// Numeric body
    pub fn body(&self) -> u32 {
        self.body
    }

    /// Verifier character as written
    pub fn verifier(&self) -> char {
        self.verifier
    }

    /// Verifier the body should carry (modulo 11)
    pub fn expected_verifier(&self) -> char {
        verifier_for(self.body)
    }

    /// Whether the verifier matches the body
    pub fn is_valid(&self) -> bool {
        self.body <= MAX_RUT_BODY && self.verifier == self.expected_verifier()
    }

    /// Person type implied by the body
    pub fn person_type(&self) -> PersonType {
        classify_person_type(self)
    }
}

/// Classify a RUT as a natural person or a company
///
/// Bodies strictly below [`COMPANY_RUT_THRESHOLD`] are natural persons;
/// the threshold itself and above are companies.
pub fn classify_person_type(rut: &Rut) -> PersonType {
    if rut.body < COMPANY_RUT_THRESHOLD {
        PersonType::Natural
    } else {
        PersonType::Company
    }
}

fn verifier_for(body: u32) -> char {
    let mut remaining = body;
    let mut sum = 0;
    let mut weight = 2;

    loop {
        sum += (remaining % 10) * weight;
        remaining /= 10;
        weight = if weight == 7 { 2 } else { weight + 1 };
        if remaining == 0 {
            break;
        }
    }

    match 11 - (sum % 11) {
        11 => '0',
        10 => 'K',
        digit => char::from_digit(digit, 10).unwrap_or('0'),
    }
}

impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.body.to_string();
        let mut grouped = String::new();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        write!(f, "{}-{}", grouped, self.verifier)
    }
}

impl FromStr for Rut {
    type Err = RutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors from RUT parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RutParseError {
    Empty,
    MissingVerifier,
    InvalidVerifier(char),
    InvalidBody(String),
}

impl fmt::Display for RutParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "RUT cannot be empty"),
            Self::MissingVerifier => write!(f, "RUT is missing its verifier digit"),
            Self::InvalidVerifier(c) => write!(f, "Invalid RUT verifier: {}", c),
            Self::InvalidBody(body) => write!(f, "Invalid RUT number: {}", body),
        }
    }
}

impl std::error::Error for RutParseError {}
