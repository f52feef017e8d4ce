//! Serde serializer that flattens a model into query parameters.

use awsmarshal_core::wire::{ScalarSerializer, WireScalar, to_scalar};
use awsmarshal_core::{MarshalError, TIMESTAMP_TOKEN};
use serde::ser::{self, Impossible, Serialize, Serializer};

use crate::ListStyle;

/// Flattens `model` into ordered `(name, value)` pairs under `prefix`.
///
/// `model` must serialize as a struct; any other top-level value is rejected
/// before a single pair is produced.
pub fn to_params<T: Serialize + ?Sized>(
    model: &T,
    prefix: &str,
    list_style: ListStyle,
) -> Result<Vec<(String, String)>, MarshalError> {
    let mut out = Vec::new();
    model.serialize(ParamSerializer {
        out: &mut out,
        target: Target::Root(prefix),
        list_style,
    })?;
    Ok(out)
}

#[derive(Debug)]
enum Target<'p> {
    /// The model itself; only structs are accepted here.
    Root(&'p str),
    /// A named parameter.
    Key(String),
}

fn not_a_model(kind: &str) -> MarshalError {
    MarshalError::InvalidInput(format!("query input must be a model, found {kind}"))
}

fn unsupported(kind: &str) -> MarshalError {
    MarshalError::InvalidInput(format!("{kind} has no query representation"))
}

struct ParamSerializer<'a, 'p> {
    out: &'a mut Vec<(String, String)>,
    target: Target<'p>,
    list_style: ListStyle,
}

impl<'a> ParamSerializer<'a, '_> {
    fn emit(self, scalar: WireScalar) -> Result<(), MarshalError> {
        match self.target {
            Target::Root(_) => Err(not_a_model("a scalar")),
            Target::Key(name) => {
                self.out.push((name, scalar.into_wire_string()));
                Ok(())
            }
        }
    }

    fn into_key(
        self,
        kind: &str,
    ) -> Result<(String, &'a mut Vec<(String, String)>, ListStyle), MarshalError> {
        match self.target {
            Target::Root(_) => Err(not_a_model(kind)),
            Target::Key(name) => Ok((name, self.out, self.list_style)),
        }
    }
}

macro_rules! scalar_methods {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(self, v: $ty) -> Result<(), MarshalError> {
                let scalar = ScalarSerializer.$method(v)?;
                self.emit(scalar)
            }
        )*
    };
}

impl<'a, 'p> Serializer for ParamSerializer<'a, 'p> {
    type Ok = ();
    type Error = MarshalError;
    type SerializeSeq = ListSerializer<'a>;
    type SerializeTuple = ListSerializer<'a>;
    type SerializeTupleStruct = Impossible<(), MarshalError>;
    type SerializeTupleVariant = Impossible<(), MarshalError>;
    type SerializeMap = EntrySerializer<'a>;
    type SerializeStruct = FieldSerializer<'a>;
    type SerializeStructVariant = Impossible<(), MarshalError>;

    scalar_methods! {
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_f32: f32,
        serialize_f64: f64,
        serialize_char: char,
        serialize_str: &str,
        serialize_bytes: &[u8],
    }

    fn serialize_none(self) -> Result<(), MarshalError> {
        match self.target {
            Target::Root(_) => Err(not_a_model("an unset value")),
            Target::Key(_) => Ok(()),
        }
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<(), MarshalError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), MarshalError> {
        Err(unsupported("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<(), MarshalError> {
        Err(unsupported(name))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<(), MarshalError> {
        self.emit(WireScalar::Str(variant.to_owned()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        value: &T,
    ) -> Result<(), MarshalError> {
        if name == TIMESTAMP_TOKEN {
            let scalar = ScalarSerializer.serialize_newtype_struct(name, value)?;
            return self.emit(scalar);
        }
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<(), MarshalError> {
        Err(unsupported(variant))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<ListSerializer<'a>, MarshalError> {
        let (name, out, list_style) = self.into_key("a list")?;
        Ok(ListSerializer {
            out,
            name,
            list_style,
            count: 0,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<ListSerializer<'a>, MarshalError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, MarshalError> {
        Err(unsupported(name))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, MarshalError> {
        Err(unsupported(variant))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<EntrySerializer<'a>, MarshalError> {
        let (name, out, list_style) = self.into_key("a map")?;
        Ok(EntrySerializer {
            out,
            name,
            list_style,
            count: 0,
        })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<FieldSerializer<'a>, MarshalError> {
        let prefix = match self.target {
            Target::Root(prefix) => prefix.to_owned(),
            Target::Key(name) => format!("{name}."),
        };
        Ok(FieldSerializer {
            out: self.out,
            prefix,
            list_style: self.list_style,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, MarshalError> {
        Err(unsupported(variant))
    }
}

struct FieldSerializer<'a> {
    out: &'a mut Vec<(String, String)>,
    prefix: String,
    list_style: ListStyle,
}

impl ser::SerializeStruct for FieldSerializer<'_> {
    type Ok = ();
    type Error = MarshalError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), MarshalError> {
        value.serialize(ParamSerializer {
            out: &mut *self.out,
            target: Target::Key(format!("{}{key}", self.prefix)),
            list_style: self.list_style,
        })
    }

    fn end(self) -> Result<(), MarshalError> {
        Ok(())
    }
}

struct ListSerializer<'a> {
    out: &'a mut Vec<(String, String)>,
    name: String,
    list_style: ListStyle,
    count: usize,
}

impl ser::SerializeSeq for ListSerializer<'_> {
    type Ok = ();
    type Error = MarshalError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), MarshalError> {
        self.count += 1;
        let key = match self.list_style {
            ListStyle::Flat => format!("{}.{}", self.name, self.count),
            ListStyle::Member => format!("{}.member.{}", self.name, self.count),
        };
        value.serialize(ParamSerializer {
            out: &mut *self.out,
            target: Target::Key(key),
            list_style: self.list_style,
        })
    }

    fn end(self) -> Result<(), MarshalError> {
        if self.count == 0 {
            self.out.push((self.name, String::new()));
        }
        Ok(())
    }
}

impl ser::SerializeTuple for ListSerializer<'_> {
    type Ok = ();
    type Error = MarshalError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), MarshalError> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<(), MarshalError> {
        ser::SerializeSeq::end(self)
    }
}

struct EntrySerializer<'a> {
    out: &'a mut Vec<(String, String)>,
    name: String,
    list_style: ListStyle,
    count: usize,
}

impl ser::SerializeMap for EntrySerializer<'_> {
    type Ok = ();
    type Error = MarshalError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), MarshalError> {
        self.count += 1;
        let key = to_scalar(key)?.into_wire_string();
        self.out
            .push((format!("{}.entry.{}.key", self.name, self.count), key));
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), MarshalError> {
        value.serialize(ParamSerializer {
            out: &mut *self.out,
            target: Target::Key(format!("{}.entry.{}.value", self.name, self.count)),
            list_style: self.list_style,
        })
    }

    fn end(self) -> Result<(), MarshalError> {
        if self.count == 0 {
            self.out.push((self.name, String::new()));
        }
        Ok(())
    }
}
