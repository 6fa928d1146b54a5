//! DecNumber formatting.

use crate::defs::Exponent;
use crate::num::DecNumber;
use num_traits::One;

/// Numbers with the absolute value out of the range `[10^PLAIN_MIN_MAG, 10^PLAIN_MAX_MAG]` are formatted in scientific notation.
const PLAIN_MIN_MAG: Exponent = -18;
const PLAIN_MAX_MAG: Exponent = 18;

impl DecNumber {
    /// Formats the number in plain notation if its absolute value is between 1e-18 and 1e18 inclusive,
    /// and in scientific notation `d.dddE+n` otherwise.
    pub fn format(&self) -> String {
        if self.is_zero() {
            return "0".to_owned();
        }

        let mag = self.magnitude();
        let (m, e) = self.to_raw_parts();

        // 1e18 is the only number with the magnitude 18 in the plain range
        let plain = mag >= PLAIN_MIN_MAG && (mag < PLAIN_MAX_MAG || (mag == PLAIN_MAX_MAG && m.magnitude().is_one()));

        let digits = m.magnitude().to_string();

        let mut s = if self.is_negative() {
            "-".to_owned()
        } else {
            String::new()
        };

        if plain {
            if e >= 0 {
                s.push_str(&digits);
                s.extend(std::iter::repeat('0').take(e as usize));
            } else {
                let frac_len = (-e) as usize;
                if digits.len() > frac_len {
                    let (int, frac) = digits.split_at(digits.len() - frac_len);
                    s.push_str(int);
                    s.push('.');
                    s.push_str(frac);
                } else {
                    s.push_str("0.");
                    s.extend(std::iter::repeat('0').take(frac_len - digits.len()));
                    s.push_str(&digits);
                }
            }
        } else {
            let (first, rest) = digits.split_at(1);
            s.push_str(first);
            if !rest.is_empty() {
                s.push('.');
                s.push_str(rest);
            }
            s.push_str(&format!("E{}{}", if mag < 0 { '-' } else { '+' }, mag.unsigned_abs()));
        }

        s
    }
}
