//! Deserialization of BigDec.

use core::fmt::Formatter;

use crate::BigDec;
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

pub struct BigDecVisitor {}

impl<'de> Deserialize<'de> for BigDec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BigDecVisitor {})
    }
}

impl<'de> Visitor<'de> for BigDecVisitor {
    type Value = BigDec;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "except `String`, `Number`")
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(BigDec::from_u64(v))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(BigDec::from_i64(v))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(BigDec::from_f64(v))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        BigDec::parse(v).map_err(|e| Error::custom(format!("{e:?}")))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}
