//! Serialization of BigDec.
//! Numbers are serialized as strings in the display format.

use crate::BigDec;
use serde::{Serialize, Serializer};

impl Serialize for BigDec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
