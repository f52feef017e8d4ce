//! Scalar codec table shared by the text-based writers.
//!
//! The query and XML writers render every leaf value as a string. They route
//! leaves through [`ScalarSerializer`], which accepts exactly the scalar
//! types a model may carry and rejects compound values.

use std::fmt;

use serde::ser::{Impossible, Serialize, Serializer};

use crate::error::MarshalError;
use crate::primitives::{TIMESTAMP_TOKEN, Timestamp};

/// A leaf value ready to be written as text.
#[derive(Debug, Clone, PartialEq)]
pub enum WireScalar {
    /// Boolean, written `true`/`false`.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point number.
    Float(f64),
    /// Text, including rendered timestamps, blobs and enum values.
    Str(String),
}

impl WireScalar {
    /// Renders the scalar as its wire string.
    #[must_use]
    pub fn into_wire_string(self) -> String {
        match self {
            Self::Str(s) => s,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for WireScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
        }
    }
}

/// Renders a value as a [`WireScalar`].
///
/// Timestamps come out as ISO 8601 strings; byte slices as base64.
pub fn to_scalar<T: Serialize + ?Sized>(value: &T) -> Result<WireScalar, MarshalError> {
    value.serialize(ScalarSerializer)
}

fn not_scalar(kind: &str) -> MarshalError {
    MarshalError::InvalidInput(format!("expected a scalar value, found {kind}"))
}

/// Serializer that accepts scalars only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarSerializer;

impl Serializer for ScalarSerializer {
    type Ok = WireScalar;
    type Error = MarshalError;
    type SerializeSeq = Impossible<WireScalar, MarshalError>;
    type SerializeTuple = Impossible<WireScalar, MarshalError>;
    type SerializeTupleStruct = Impossible<WireScalar, MarshalError>;
    type SerializeTupleVariant = Impossible<WireScalar, MarshalError>;
    type SerializeMap = Impossible<WireScalar, MarshalError>;
    type SerializeStruct = Impossible<WireScalar, MarshalError>;
    type SerializeStructVariant = Impossible<WireScalar, MarshalError>;

    fn serialize_bool(self, v: bool) -> Result<WireScalar, MarshalError> {
        Ok(WireScalar::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<WireScalar, MarshalError> {
        Ok(WireScalar::Int(v.into()))
    }

    fn serialize_i16(self, v: i16) -> Result<WireScalar, MarshalError> {
        Ok(WireScalar::Int(v.into()))
    }

    fn serialize_i32(self, v: i32) -> Result<WireScalar, MarshalError> {
        Ok(WireScalar::Int(v.into()))
    }

    fn serialize_i64(self, v: i64) -> Result<WireScalar, MarshalError> {
        Ok(WireScalar::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<WireScalar, MarshalError> {
        Ok(WireScalar::UInt(v.into()))
    }

    fn serialize_u16(self, v: u16) -> Result<WireScalar, MarshalError> {
        Ok(WireScalar::UInt(v.into()))
    }

    fn serialize_u32(self, v: u32) -> Result<WireScalar, MarshalError> {
        Ok(WireScalar::UInt(v.into()))
    }

    fn serialize_u64(self, v: u64) -> Result<WireScalar, MarshalError> {
        Ok(WireScalar::UInt(v))
    }

    fn serialize_f32(self, v: f32) -> Result<WireScalar, MarshalError> {
        Ok(WireScalar::Float(v.into()))
    }

    fn serialize_f64(self, v: f64) -> Result<WireScalar, MarshalError> {
        Ok(WireScalar::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<WireScalar, MarshalError> {
        Ok(WireScalar::Str(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<WireScalar, MarshalError> {
        Ok(WireScalar::Str(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<WireScalar, MarshalError> {
        use base64::Engine as _;
        Ok(WireScalar::Str(
            base64::engine::general_purpose::STANDARD.encode(v),
        ))
    }

    fn serialize_none(self) -> Result<WireScalar, MarshalError> {
        Err(not_scalar("an unset value"))
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<WireScalar, MarshalError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<WireScalar, MarshalError> {
        Err(not_scalar("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<WireScalar, MarshalError> {
        Err(not_scalar(name))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<WireScalar, MarshalError> {
        Ok(WireScalar::Str(variant.to_owned()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        value: &T,
    ) -> Result<WireScalar, MarshalError> {
        if name != TIMESTAMP_TOKEN {
            return value.serialize(self);
        }
        let ts = match value.serialize(self)? {
            WireScalar::Int(secs) => Timestamp::from_epoch_seconds(secs),
            WireScalar::Float(secs) => Timestamp::from_epoch_seconds_f64(secs),
            other => return Err(not_scalar(&format!("timestamp payload {other:?}"))),
        };
        ts.map(|t| WireScalar::Str(t.to_iso8601()))
            .ok_or_else(|| MarshalError::InvalidInput("timestamp out of range".to_owned()))
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<WireScalar, MarshalError> {
        Err(not_scalar(variant))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, MarshalError> {
        Err(not_scalar("a list"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, MarshalError> {
        Err(not_scalar("a tuple"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, MarshalError> {
        Err(not_scalar(name))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, MarshalError> {
        Err(not_scalar(variant))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, MarshalError> {
        Err(not_scalar("a map"))
    }

    fn serialize_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, MarshalError> {
        Err(not_scalar(name))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, MarshalError> {
        Err(not_scalar(variant))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::Blob;

    #[test]
    fn test_should_render_numbers_and_bools() {
        assert_eq!(to_scalar(&5_i32).unwrap().into_wire_string(), "5");
        assert_eq!(to_scalar(&-7_i64).unwrap().into_wire_string(), "-7");
        assert_eq!(to_scalar(&1.5_f64).unwrap().into_wire_string(), "1.5");
        assert_eq!(to_scalar(&true).unwrap().into_wire_string(), "true");
    }

    #[test]
    fn test_should_render_timestamp_as_iso8601() {
        let ts = Timestamp::new(Utc.with_ymd_and_hms(2021, 7, 4, 8, 0, 0).unwrap());
        assert_eq!(
            to_scalar(&ts).unwrap(),
            WireScalar::Str("2021-07-04T08:00:00.000Z".to_owned())
        );
    }

    #[test]
    fn test_should_render_blob_as_base64() {
        let blob = Blob::new(&b"\x00\x01"[..]);
        assert_eq!(to_scalar(&blob).unwrap().into_wire_string(), "AAE=");
    }

    #[test]
    fn test_should_reject_compound_values() {
        assert!(matches!(
            to_scalar(&vec![1, 2]),
            Err(MarshalError::InvalidInput(_))
        ));
        assert!(to_scalar(&HashMap::<String, String>::new()).is_err());
        assert!(to_scalar(&Option::<i32>::None).is_err());
    }
}
