//! Serde serializer that writes a model as an XML element tree.

use awsmarshal_core::wire::{ScalarSerializer, WireScalar, to_scalar};
use awsmarshal_core::{MarshalError, TIMESTAMP_TOKEN, WireFormat};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde::ser::{self, Impossible, Serialize, Serializer};

/// Writes `value` as a document whose root element is `root`.
///
/// Unset fields are omitted, list items are wrapped in `<member>` and map
/// entries are written as `<entry><key/><value/></entry>`.
pub fn to_xml<T: Serialize + ?Sized>(
    value: &T,
    root: &str,
    xmlns: Option<&str>,
) -> Result<Vec<u8>, MarshalError> {
    let mut writer = Writer::new(Vec::with_capacity(256));
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(write_error)?;
    value.serialize(ElementSerializer {
        writer: &mut writer,
        name: root,
        xmlns,
    })?;
    Ok(writer.into_inner())
}

fn write_error(err: impl Into<awsmarshal_core::BoxError>) -> MarshalError {
    MarshalError::serialize(WireFormat::Xml, err)
}

fn unsupported(kind: &str) -> MarshalError {
    MarshalError::InvalidInput(format!("{kind} has no XML representation"))
}

type XmlWriter = Writer<Vec<u8>>;

fn start(writer: &mut XmlWriter, name: &str, xmlns: Option<&str>) -> Result<(), MarshalError> {
    let mut tag = BytesStart::new(name);
    if let Some(ns) = xmlns {
        tag.push_attribute(("xmlns", ns));
    }
    writer.write_event(Event::Start(tag)).map_err(write_error)
}

fn end(writer: &mut XmlWriter, name: &str) -> Result<(), MarshalError> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(write_error)
}

fn text_element(
    writer: &mut XmlWriter,
    name: &str,
    xmlns: Option<&str>,
    text: &str,
) -> Result<(), MarshalError> {
    start(writer, name, xmlns)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(write_error)?;
    end(writer, name)
}

struct ElementSerializer<'w, 'n> {
    writer: &'w mut XmlWriter,
    name: &'n str,
    xmlns: Option<&'n str>,
}

impl ElementSerializer<'_, '_> {
    fn scalar(self, scalar: WireScalar) -> Result<(), MarshalError> {
        text_element(self.writer, self.name, self.xmlns, &scalar.into_wire_string())
    }
}

macro_rules! scalar_methods {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(self, v: $ty) -> Result<(), MarshalError> {
                let scalar = ScalarSerializer.$method(v)?;
                self.scalar(scalar)
            }
        )*
    };
}

impl<'w, 'n> Serializer for ElementSerializer<'w, 'n> {
    type Ok = ();
    type Error = MarshalError;
    type SerializeSeq = ContainerWriter<'w, 'n>;
    type SerializeTuple = ContainerWriter<'w, 'n>;
    type SerializeTupleStruct = Impossible<(), MarshalError>;
    type SerializeTupleVariant = Impossible<(), MarshalError>;
    type SerializeMap = ContainerWriter<'w, 'n>;
    type SerializeStruct = ContainerWriter<'w, 'n>;
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
        Ok(())
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
        self.scalar(WireScalar::Str(variant.to_owned()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        value: &T,
    ) -> Result<(), MarshalError> {
        if name == TIMESTAMP_TOKEN {
            let scalar = ScalarSerializer.serialize_newtype_struct(name, value)?;
            return self.scalar(scalar);
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

    fn serialize_seq(self, _len: Option<usize>) -> Result<ContainerWriter<'w, 'n>, MarshalError> {
        start(self.writer, self.name, self.xmlns)?;
        Ok(ContainerWriter {
            writer: self.writer,
            name: self.name,
            pending_key: None,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<ContainerWriter<'w, 'n>, MarshalError> {
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

    fn serialize_map(self, len: Option<usize>) -> Result<ContainerWriter<'w, 'n>, MarshalError> {
        self.serialize_seq(len)
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<ContainerWriter<'w, 'n>, MarshalError> {
        self.serialize_seq(None)
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

/// An open element whose children are being written.
struct ContainerWriter<'w, 'n> {
    writer: &'w mut XmlWriter,
    name: &'n str,
    pending_key: Option<String>,
}

impl ContainerWriter<'_, '_> {
    fn child<T: Serialize + ?Sized>(&mut self, name: &str, value: &T) -> Result<(), MarshalError> {
        value.serialize(ElementSerializer {
            writer: &mut *self.writer,
            name,
            xmlns: None,
        })
    }

    fn close(self) -> Result<(), MarshalError> {
        end(self.writer, self.name)
    }
}

impl ser::SerializeSeq for ContainerWriter<'_, '_> {
    type Ok = ();
    type Error = MarshalError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), MarshalError> {
        self.child("member", value)
    }

    fn end(self) -> Result<(), MarshalError> {
        self.close()
    }
}

impl ser::SerializeTuple for ContainerWriter<'_, '_> {
    type Ok = ();
    type Error = MarshalError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), MarshalError> {
        self.child("member", value)
    }

    fn end(self) -> Result<(), MarshalError> {
        self.close()
    }
}

impl ser::SerializeMap for ContainerWriter<'_, '_> {
    type Ok = ();
    type Error = MarshalError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), MarshalError> {
        self.pending_key = Some(to_scalar(key)?.into_wire_string());
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), MarshalError> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| MarshalError::InvalidInput("map value without a key".to_owned()))?;
        start(self.writer, "entry", None)?;
        text_element(self.writer, "key", None, &key)?;
        self.child("value", value)?;
        end(self.writer, "entry")
    }

    fn end(self) -> Result<(), MarshalError> {
        self.close()
    }
}

impl ser::SerializeStruct for ContainerWriter<'_, '_> {
    type Ok = ();
    type Error = MarshalError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), MarshalError> {
        self.child(key, value)
    }

    fn end(self) -> Result<(), MarshalError> {
        self.close()
    }
}
