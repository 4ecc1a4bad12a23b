use core::fmt;

use serde::{
    de,
    de::{MapAccess, SeqAccess, Visitor},
    ser::{SerializeStruct, SerializeTuple},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::ApInt;

const FIELDS: &[&str] = &["bw", "bits"];

/// A `serde_support` impl
impl Serialize for ApInt {
    /// Serializes `self` in a platform independent way. In human readable
    /// form, it serializes into a struct named "ApInt" with two fields "bw"
    /// and "bits". "bw" is the bitwidth in decimal, and "bits" is the
    /// unsigned value as a lowercase hexadecimal string.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut str_buf = self.to_string_radix(16);
        str_buf.make_ascii_lowercase();
        if serializer.is_human_readable() {
            let mut s = serializer.serialize_struct("ApInt", 2)?;
            s.serialize_field("bw", &self.bitwidth())?;
            s.serialize_field("bits", &str_buf)?;
            s.end()
        } else {
            let mut s = serializer.serialize_tuple(2)?;
            s.serialize_element(&self.bitwidth())?;
            s.serialize_element(&str_buf)?;
            s.end()
        }
    }
}

/// Helper for the deserialization impl
enum Field {
    Bw,
    Bits,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Field, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("`bw` or `bits`")
            }

            fn visit_str<E>(self, value: &str) -> Result<Field, E>
            where
                E: de::Error,
            {
                match value {
                    "bw" => Ok(Field::Bw),
                    "bits" => Ok(Field::Bits),
                    _ => Err(de::Error::unknown_field(value, FIELDS)),
                }
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}

fn rebuild<E: de::Error>(w: usize, bits: &str) -> Result<ApInt, E> {
    if w == 0 {
        return Err(de::Error::custom("`bw` field should be nonzero"))
    }
    ApInt::parse(bits, 16, w).map_err(de::Error::custom)
}

struct ApIntVisitor;

impl<'de> Visitor<'de> for ApIntVisitor {
    type Value = ApInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(
            "struct ApInt consisting of a decimal bitwidth \"bw\" and a hexadecimal unsigned \
             integer \"bits\"",
        )
    }

    fn visit_map<V>(self, mut map: V) -> Result<ApInt, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut w: Option<usize> = None;
        let mut bits: Option<&str> = None;
        while let Some(key) = map.next_key()? {
            match key {
                Field::Bw => {
                    if w.is_some() {
                        return Err(de::Error::duplicate_field("bw"))
                    }
                    w = Some(map.next_value()?);
                }
                Field::Bits => {
                    if bits.is_some() {
                        return Err(de::Error::duplicate_field("bits"))
                    }
                    bits = Some(map.next_value()?);
                }
            }
        }
        let w = w.ok_or_else(|| de::Error::missing_field("bw"))?;
        let bits = bits.ok_or_else(|| de::Error::missing_field("bits"))?;
        rebuild(w, bits)
    }

    fn visit_seq<V>(self, mut seq: V) -> Result<ApInt, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let w: usize = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let bits: &str = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        rebuild(w, bits)
    }
}

/// A `serde_support` impl
impl<'de> Deserialize<'de> for ApInt {
    /// Deserializes `self` in a platform independent way.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("ApInt", FIELDS, ApIntVisitor)
    }
}
