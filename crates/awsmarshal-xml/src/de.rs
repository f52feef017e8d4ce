//! Serde deserializer driven by quick-xml pull events.
//!
//! Every deserializer in this module is positioned just after the start tag
//! of the element it decodes and returns once the matching end tag has been
//! consumed, so nested models can be decoded without tracking depth
//! explicitly. Child elements that the target model does not declare are
//! skipped with their whole subtree.

use std::fmt::Display;
use std::str::FromStr;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::de::{
    self, DeserializeOwned, DeserializeSeed, IntoDeserializer, MapAccess, SeqAccess, Visitor,
};

use crate::error::XmlError;

type XmlReader<'de> = Reader<&'de [u8]>;

/// Decodes the root element of `body` into `T`.
pub fn from_xml<T: DeserializeOwned>(body: &[u8]) -> Result<T, XmlError> {
    let mut reader = new_reader(body);
    let name = seek(&mut reader, None, 1)?
        .ok_or_else(|| XmlError::MissingElement("root element".to_owned()))?;
    T::deserialize(ElementDeserializer {
        reader: &mut reader,
        name,
    })
}

/// Decodes the first element named `element`, at any depth, into `T`.
pub fn from_xml_element<T: DeserializeOwned>(body: &[u8], element: &str) -> Result<T, XmlError> {
    let mut reader = new_reader(body);
    let name = seek(&mut reader, Some(element), usize::MAX)?
        .ok_or_else(|| XmlError::MissingElement(element.to_owned()))?;
    T::deserialize(ElementDeserializer {
        reader: &mut reader,
        name,
    })
}

/// Decodes a query-protocol response.
///
/// When the root has a `wrapper` child (`<{Action}Result>`), that element is
/// decoded; otherwise the root element itself is.
pub fn from_xml_result<T: DeserializeOwned>(body: &[u8], wrapper: &str) -> Result<T, XmlError> {
    let mut reader = new_reader(body);
    match seek(&mut reader, Some(wrapper), 2)? {
        Some(name) => T::deserialize(ElementDeserializer {
            reader: &mut reader,
            name,
        }),
        None => from_xml(body),
    }
}

fn new_reader(body: &[u8]) -> XmlReader<'_> {
    let mut reader = Reader::from_reader(body);
    reader.config_mut().expand_empty_elements = true;
    reader
}

fn parse_error(err: impl Display) -> XmlError {
    XmlError::ParseError(err.to_string())
}

fn local_name(start: &BytesStart<'_>) -> Result<String, XmlError> {
    std::str::from_utf8(start.local_name().as_ref())
        .map(str::to_owned)
        .map_err(parse_error)
}

/// Advances to the start tag of `element` (any element when `None`) no deeper
/// than `max_depth`, returning its local name.
fn seek(
    reader: &mut XmlReader<'_>,
    element: Option<&str>,
    max_depth: usize,
) -> Result<Option<String>, XmlError> {
    let mut depth = 0_usize;
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                let name = local_name(&e)?;
                if element.is_none_or(|wanted| wanted == name) && depth <= max_depth {
                    return Ok(Some(name));
                }
                if depth >= max_depth {
                    skip_element(reader, &name)?;
                    depth -= 1;
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// Consumes everything up to and including the end tag of the current element.
fn skip_element(reader: &mut XmlReader<'_>, name: &str) -> Result<(), XmlError> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => return Err(XmlError::UnexpectedEof(name.to_owned())),
            _ => {}
        }
    }
}

/// Collects the text of the current element, resolving entity references.
/// Child elements are skipped.
fn read_text(reader: &mut XmlReader<'_>, name: &str) -> Result<String, XmlError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e.decode().map_err(parse_error)?;
                let unescaped = quick_xml::escape::unescape(&decoded).map_err(parse_error)?;
                text.push_str(&unescaped);
            }
            Event::CData(e) => {
                text.push_str(std::str::from_utf8(&e).map_err(parse_error)?);
            }
            Event::GeneralRef(e) => {
                let reference = e.decode().map_err(parse_error)?;
                text.push(resolve_reference(&reference)?);
            }
            Event::Start(e) => {
                let child = local_name(&e)?;
                skip_element(reader, &child)?;
            }
            Event::End(_) => return Ok(text),
            Event::Eof => return Err(XmlError::UnexpectedEof(name.to_owned())),
            _ => {}
        }
    }
}

fn resolve_reference(reference: &str) -> Result<char, XmlError> {
    let code = match reference {
        "amp" => return Ok('&'),
        "lt" => return Ok('<'),
        "gt" => return Ok('>'),
        "quot" => return Ok('"'),
        "apos" => return Ok('\''),
        r if r.starts_with("#x") => u32::from_str_radix(&r[2..], 16).ok(),
        r if r.starts_with('#') => r[1..].parse::<u32>().ok(),
        _ => None,
    };
    code.and_then(char::from_u32)
        .ok_or_else(|| XmlError::ParseError(format!("unknown entity reference &{reference};")))
}

/// Decodes one element.
struct ElementDeserializer<'a, 'de> {
    reader: &'a mut XmlReader<'de>,
    name: String,
}

impl ElementDeserializer<'_, '_> {
    fn text(self) -> Result<String, XmlError> {
        read_text(self.reader, &self.name)
    }

    fn parse<T>(self, kind: &str) -> Result<T, XmlError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let name = self.name.clone();
        let text = self.text()?;
        let trimmed = text.trim();
        trimmed.parse().map_err(|e| {
            XmlError::ParseError(format!("invalid {kind} {trimmed:?} in <{name}>: {e}"))
        })
    }
}

macro_rules! deserialize_parsed {
    ($($method:ident => $visit:ident($ty:ty)),* $(,)?) => {
        $(
            fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, XmlError> {
                visitor.$visit(self.parse::<$ty>(stringify!($ty))?)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for ElementDeserializer<'_, 'de> {
    type Error = XmlError;

    deserialize_parsed! {
        deserialize_bool => visit_bool(bool),
        deserialize_i8 => visit_i8(i8),
        deserialize_i16 => visit_i16(i16),
        deserialize_i32 => visit_i32(i32),
        deserialize_i64 => visit_i64(i64),
        deserialize_u8 => visit_u8(u8),
        deserialize_u16 => visit_u16(u16),
        deserialize_u32 => visit_u32(u32),
        deserialize_u64 => visit_u64(u64),
        deserialize_f32 => visit_f32(f32),
        deserialize_f64 => visit_f64(f64),
        deserialize_char => visit_char(char),
    }

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, XmlError> {
        visitor.visit_string(self.text()?)
    }

    fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, XmlError> {
        visitor.visit_string(self.text()?)
    }

    fn deserialize_string<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, XmlError> {
        visitor.visit_string(self.text()?)
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, XmlError> {
        visitor.visit_byte_buf(self.text()?.into_bytes())
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, XmlError> {
        self.deserialize_bytes(visitor)
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, XmlError> {
        visitor.visit_some(self)
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, XmlError> {
        skip_element(self.reader, &self.name)?;
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, XmlError> {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, XmlError> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, XmlError> {
        let mut access = ListAccess {
            reader: self.reader,
            name: self.name,
            done: false,
        };
        let value = visitor.visit_seq(&mut access)?;
        access.finish()?;
        Ok(value)
    }

    fn deserialize_tuple<V: Visitor<'de>>(
        self,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, XmlError> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, XmlError> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, XmlError> {
        let mut access = EntryAccess {
            reader: self.reader,
            name: self.name,
            done: false,
        };
        let value = visitor.visit_map(&mut access)?;
        access.finish()?;
        Ok(value)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, XmlError> {
        let mut access = FieldAccess {
            reader: self.reader,
            name: self.name,
            fields,
            pending: None,
            done: false,
        };
        let value = visitor.visit_map(&mut access)?;
        access.finish()?;
        Ok(value)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, XmlError> {
        let text = self.text()?;
        visitor.visit_enum(text.trim().to_owned().into_deserializer())
    }

    fn deserialize_identifier<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, XmlError> {
        self.deserialize_string(visitor)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, XmlError> {
        self.deserialize_unit(visitor)
    }
}

/// Children of a model element, matched against the model's field names.
struct FieldAccess<'a, 'de> {
    reader: &'a mut XmlReader<'de>,
    name: String,
    fields: &'static [&'static str],
    pending: Option<String>,
    done: bool,
}

impl FieldAccess<'_, '_> {
    fn finish(self) -> Result<(), XmlError> {
        if self.done {
            Ok(())
        } else {
            skip_element(self.reader, &self.name)
        }
    }
}

impl<'de> MapAccess<'de> for FieldAccess<'_, 'de> {
    type Error = XmlError;

    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, XmlError> {
        if self.done {
            return Ok(None);
        }
        loop {
            match self.reader.read_event()? {
                Event::Start(e) => {
                    let child = local_name(&e)?;
                    if self.fields.contains(&child.as_str()) {
                        self.pending = Some(child.clone());
                        return seed.deserialize(child.into_deserializer()).map(Some);
                    }
                    skip_element(self.reader, &child)?;
                }
                Event::End(_) => {
                    self.done = true;
                    return Ok(None);
                }
                Event::Eof => return Err(XmlError::UnexpectedEof(self.name.clone())),
                _ => {}
            }
        }
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, XmlError> {
        let name = self
            .pending
            .take()
            .ok_or_else(|| XmlError::Custom("value requested before key".to_owned()))?;
        seed.deserialize(ElementDeserializer {
            reader: &mut *self.reader,
            name,
        })
    }
}

/// Children of a list element; every child is one item, whatever its name.
struct ListAccess<'a, 'de> {
    reader: &'a mut XmlReader<'de>,
    name: String,
    done: bool,
}

impl ListAccess<'_, '_> {
    fn finish(self) -> Result<(), XmlError> {
        if self.done {
            Ok(())
        } else {
            skip_element(self.reader, &self.name)
        }
    }
}

impl<'de> SeqAccess<'de> for ListAccess<'_, 'de> {
    type Error = XmlError;

    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, XmlError> {
        if self.done {
            return Ok(None);
        }
        loop {
            match self.reader.read_event()? {
                Event::Start(e) => {
                    let name = local_name(&e)?;
                    return seed
                        .deserialize(ElementDeserializer {
                            reader: &mut *self.reader,
                            name,
                        })
                        .map(Some);
                }
                Event::End(_) => {
                    self.done = true;
                    return Ok(None);
                }
                Event::Eof => return Err(XmlError::UnexpectedEof(self.name.clone())),
                _ => {}
            }
        }
    }
}

/// `<entry><key/><value/></entry>` children of a map element.
struct EntryAccess<'a, 'de> {
    reader: &'a mut XmlReader<'de>,
    name: String,
    done: bool,
}

impl EntryAccess<'_, '_> {
    fn finish(self) -> Result<(), XmlError> {
        if self.done {
            Ok(())
        } else {
            skip_element(self.reader, &self.name)
        }
    }

    /// Advances to `<child>` inside the current entry, skipping anything else.
    fn enter(&mut self, child: &str) -> Result<(), XmlError> {
        loop {
            match self.reader.read_event()? {
                Event::Start(e) => {
                    let name = local_name(&e)?;
                    if name == child {
                        return Ok(());
                    }
                    skip_element(self.reader, &name)?;
                }
                Event::End(_) => return Err(XmlError::MissingElement(child.to_owned())),
                Event::Eof => return Err(XmlError::UnexpectedEof(self.name.clone())),
                _ => {}
            }
        }
    }
}

impl<'de> MapAccess<'de> for EntryAccess<'_, 'de> {
    type Error = XmlError;

    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, XmlError> {
        if self.done {
            return Ok(None);
        }
        loop {
            match self.reader.read_event()? {
                Event::Start(_) => break,
                Event::End(_) => {
                    self.done = true;
                    return Ok(None);
                }
                Event::Eof => return Err(XmlError::UnexpectedEof(self.name.clone())),
                _ => {}
            }
        }
        self.enter("key")?;
        seed.deserialize(ElementDeserializer {
            reader: &mut *self.reader,
            name: "key".to_owned(),
        })
        .map(Some)
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, XmlError> {
        self.enter("value")?;
        let value = seed.deserialize(ElementDeserializer {
            reader: &mut *self.reader,
            name: "value".to_owned(),
        })?;
        skip_element(self.reader, "entry")?;
        Ok(value)
    }
}
