//! Phone number scanner.

use super::{EntityScanner, candidates};
use crate::entity::{Entity, EntityType};

const MIN_LENGTH: usize = 10;
const MIN_DIGITS: usize = 10;
const MAX_DIGITS: usize = 15;

/// A scanner that recognizes phone-number-like digit groups.
///
/// A delimiter-separated piece qualifies when it is at least 10 characters
/// long, consists only of digits and `- . ( )` or space separators, and holds
/// between 10 and 15 digits. No country-specific format is checked.
#[derive(Clone, Debug, Default)]
pub struct PhoneScanner;

impl PhoneScanner {
    /// Create a new phone scanner.
    pub fn new() -> Self {
        PhoneScanner
    }

    /// Check if `candidate` looks like a phone number.
    pub fn is_phone(candidate: &str) -> bool {
        if candidate.len() < MIN_LENGTH {
            return false;
        }

        let mut digits = 0;
        for c in candidate.chars() {
            match c {
                '0'..='9' => digits += 1,
                '-' | '.' | '(' | ')' | ' ' => {}
                _ => return false,
            }
        }
        (MIN_DIGITS..=MAX_DIGITS).contains(&digits)
    }
}

impl EntityScanner for PhoneScanner {
    fn scan(&self, text: &str) -> Vec<Entity> {
        candidates(text)
            .into_iter()
            .filter(|(_, piece)| Self::is_phone(piece))
            .map(|(start, piece)| {
                Entity::from_span(EntityType::Phone, text, start, start + piece.len())
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "phone"
    }
}
