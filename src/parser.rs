//! Parser parses numbers represented in plain or scientific decimal format, infinities, and NaN.

use crate::defs::Exponent;
use crate::defs::Sign;
use crate::defs::EXPONENT_MAX;
use std::str::Chars;

pub struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    sign: Sign,
    mantissa: String,
    e: Exponent,
    inf: bool,
    nan: bool,
    valid: bool,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            sign: Sign::Pos,
            mantissa: String::new(),
            e: 0,
            inf: false,
            nan: false,
            valid: false,
        }
    }

    /// Returns next character of a string in lower case,
    /// or None if string end reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next().map(|c| c.to_ascii_lowercase());
        self.cur_ch
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_inf(&self) -> bool {
        self.inf
    }

    pub fn is_nan(&self) -> bool {
        self.nan
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the significant digits, the sign, and the exponent `e` of the number `0.digits * 10^e`.
    pub fn raw_parts(&self) -> (&str, Sign, Exponent) {
        (&self.mantissa, self.sign, self.e)
    }
}

/// Parses a number. The whole string must be consumed for the result to be valid.
pub fn parse(s: &str) -> ParserState {
    let mut parser_state = ParserState::new(s);
    let mut ch = parser_state.next_char();

    // sign
    if let Some(c) = ch {
        match c {
            '+' => ch = parser_state.next_char(),
            '-' => {
                parser_state.sign = Sign::Neg;
                ch = parser_state.next_char()
            }
            _ => {}
        };
    }

    if let Some(c) = ch {
        match c {
            'i' => parse_inf(&mut parser_state),
            'n' => parse_nan(&mut parser_state),
            '.' | '0'..='9' => parse_num(&mut parser_state),
            _ => {}
        };
    }

    // trailing characters
    if parser_state.cur_char().is_some() {
        parser_state.valid = false;
    }

    parser_state
}

fn parse_word(parser_state: &mut ParserState, rest: &str) -> bool {
    rest.chars().all(|c| parser_state.next_char() == Some(c))
}

// inf, infinity
fn parse_inf(parser_state: &mut ParserState) {
    if parse_word(parser_state, "nf") {
        match parser_state.next_char() {
            None => parser_state.valid = true,
            Some('i') => {
                if parse_word(parser_state, "nity") {
                    parser_state.next_char();
                    parser_state.valid = true;
                }
            }
            _ => {}
        }
    }
    parser_state.inf = parser_state.valid;
}

fn parse_nan(parser_state: &mut ParserState) {
    if parse_word(parser_state, "an") {
        parser_state.next_char();
        parser_state.valid = true;
        parser_state.nan = true;
    }
}

fn parse_num(parser_state: &mut ParserState) {
    let (int_len, skip_cnt1) = parse_digits(parser_state, true, true);
    if Some('.') == parser_state.cur_char() {
        parser_state.next_char();
    }
    let (frac_len, skip_cnt2) = parse_digits(parser_state, int_len == 0, false);
    if frac_len > 0 || int_len > 0 {
        parser_state.valid = true;
        if Some('e') == parser_state.cur_char() {
            parser_state.next_char();
            parse_exp(parser_state);
        }
        if int_len != 0 {
            parser_state.e += int_len as Exponent;
        } else {
            parser_state.e -= skip_cnt2 as Exponent;
        }
    } else if skip_cnt1 > 0 || skip_cnt2 > 0 {
        // just zeroes
        parser_state.valid = true;
        if Some('e') == parser_state.cur_char() {
            parser_state.next_char();
            parse_exp(parser_state);
        }
        parser_state.e = 0;
    }
}

fn parse_digits(parser_state: &mut ParserState, skip_zeroes: bool, int: bool) -> (usize, usize) {
    let mut ch = parser_state.cur_char();
    let mut len = 0;
    let mut skip_cnt = 0;
    if skip_zeroes {
        // skip leading zeroes
        while let Some('0') = ch {
            skip_cnt += 1;
            if !int {
                len += 1; // for fractional part count length
            }
            ch = parser_state.next_char();
        }
    }
    while let Some(c) = ch {
        if c.is_ascii_digit() {
            parser_state.mantissa.push(c);
            len += 1;
        } else {
            break;
        }
        ch = parser_state.next_char();
    }
    if skip_cnt == len {
        // just zeroes
        len = 0;
    }
    (len, skip_cnt)
}

fn parse_exp(parser_state: &mut ParserState) {
    let mut neg = false;
    let mut ch = parser_state.cur_char();
    if let Some(c) = ch {
        match c {
            '+' => {
                ch = parser_state.next_char();
            }
            '-' => {
                neg = true;
                ch = parser_state.next_char();
            }
            _ => {}
        };
    }
    let mut e: Exponent = 0;
    while let Some(c) = ch {
        if let Some(d) = c.to_digit(10) {
            // saturate far outside of the exponent range
            if e < EXPONENT_MAX * 10 {
                e = e * 10 + d as Exponent;
            }
        } else {
            break;
        }
        ch = parser_state.next_char();
    }
    parser_state.e = if neg { -e } else { e };
}
