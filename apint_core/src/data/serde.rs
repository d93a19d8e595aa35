use core::fmt;

use apint_internals::bw;
use serde::{
    de,
    de::{MapAccess, SeqAccess, Visitor},
    ser::{SerializeStruct, SerializeTuple},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::ApInt;

/// A `serde_support` impl
impl Serialize for ApInt {
    /// Serializes `self` in a platform independent way. In human readable
    /// form, it serializes into a struct named "ApInt" with two fields "bw"
    /// and "bits". "bw" is the bitwidth in decimal, and "bits" is the
    /// unsigned hexadecimal significand with no prefix or leading zeros.
    ///
    /// ```
    /// // Example using the `ron` crate. Note that it
    /// // omits the struct name which would be "ApInt".
    /// use apint_core::{bw, ApInt};
    /// use ron::to_string;
    ///
    /// let x = ApInt::from_str_radix(bw(100), "fedcba9876543210", 16).unwrap();
    /// assert_eq!(to_string(&x).unwrap(), "(bw:100,bits:\"fedcba9876543210\")");
    /// ```
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let buf = self.to_string_unsigned(16);
        if serializer.is_human_readable() {
            let mut s = serializer.serialize_struct("ApInt", 2)?;
            s.serialize_field("bw", &self.bw())?;
            s.serialize_field("bits", buf.as_str())?;
            s.end()
        } else {
            let mut s = serializer.serialize_tuple(2)?;
            s.serialize_element(&self.bw())?;
            s.serialize_element(buf.as_str())?;
            s.end()
        }
    }
}

const FIELDS: &[&str] = &["bw", "bits"];

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

fn apint_from_parts<E: de::Error>(w: usize, bits: &str) -> Result<ApInt, E> {
    if w == 0 {
        return Err(de::Error::custom("`bw` field should be nonzero"))
    }
    match ApInt::from_bytes_radix(None, bits.as_bytes(), 16, bw(w)) {
        Ok(res) => Ok(res),
        Err(e) => Err(de::Error::custom(e)),
    }
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
        apint_from_parts(w, bits)
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
        apint_from_parts(w, bits)
    }
}

/// A `serde_support` impl
impl<'de> Deserialize<'de> for ApInt {
    /// Deserializes `self` in a platform independent way.
    ///
    /// ```
    /// // Example using the `ron` crate.
    /// use apint_core::{bw, ApInt};
    /// use ron::from_str;
    ///
    /// let x: ApInt = from_str("(bw:100,bits:\"fedcba9876543210\")").unwrap();
    /// assert_eq!(x, ApInt::from_str_radix(bw(100), "fedcba9876543210", 16).unwrap());
    /// ```
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("ApInt", FIELDS, ApIntVisitor)
    }
}
