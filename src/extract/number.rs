//! Number scanner.

use super::EntityScanner;
use crate::entity::{Entity, EntityType};

/// A scanner that recognizes integers and decimals.
///
/// A number is a run of ASCII digits with at most one interior decimal
/// point. A `.` joins the run only when both of its neighbours are digits,
/// so sentence periods and the separators of version strings like `1.2.3`
/// end the run instead. The captured text must parse as a finite value.
#[derive(Clone, Debug, Default)]
pub struct NumberScanner;

impl NumberScanner {
    /// Create a new number scanner.
    pub fn new() -> Self {
        NumberScanner
    }

    /// End of the number starting at `start`, which must be a digit.
    fn run_end(bytes: &[u8], start: usize) -> usize {
        let mut i = start;
        let mut has_decimal = false;

        while i < bytes.len() {
            let b = bytes[i];
            if b.is_ascii_digit() {
                i += 1;
            } else if b == b'.'
                && !has_decimal
                && i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
            {
                has_decimal = true;
                i += 1;
            } else {
                break;
            }
        }

        i
    }
}

impl EntityScanner for NumberScanner {
    fn scan(&self, text: &str) -> Vec<Entity> {
        let bytes = text.as_bytes();
        let mut entities = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            if !bytes[i].is_ascii_digit() {
                i += 1;
                continue;
            }

            let start = i;
            i = Self::run_end(bytes, start);

            // Digits and '.' are ASCII, so both ends are char boundaries
            let candidate = &text[start..i];
            if candidate.parse::<f64>().is_ok_and(f64::is_finite) {
                entities.push(Entity::from_span(EntityType::Number, text, start, i));
            }
        }

        entities
    }

    fn name(&self) -> &'static str {
        "number"
    }
}
