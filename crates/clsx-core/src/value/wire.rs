use crate::value::{ClassDict, ClassValue};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, SeqAccess, Visitor},
    ser::{SerializeMap, SerializeSeq},
};
use std::fmt;

///
/// ClassValue wire shape
///
/// Values travel as plain JSON-like data: text, numbers, booleans, null,
/// arrays and objects. Object key order is preserved in both directions.
/// Big integers serialize as their decimal text; `Undefined`, `Unit` and
/// `Opaque` serialize as null.
///

impl Serialize for ClassValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::BigInt(n) => serializer.collect_str(n),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Null | Self::Undefined | Self::Unit | Self::Opaque => serializer.serialize_unit(),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Dict(dict) => {
                let mut map = serializer.serialize_map(Some(dict.len()))?;
                for (key, value) in dict.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ClassValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ClassValueVisitor)
    }
}

struct ClassValueVisitor;

impl<'de> Visitor<'de> for ClassValueVisitor {
    type Value = ClassValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a class value (string, number, boolean, null, array or object)")
    }

    fn visit_bool<E>(self, value: bool) -> Result<ClassValue, E> {
        Ok(ClassValue::Bool(value))
    }

    // JSON numbers are doubles; integers are read the same way a browser
    // would read them.
    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E>(self, value: i64) -> Result<ClassValue, E> {
        Ok(ClassValue::Number(value as f64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E>(self, value: u64) -> Result<ClassValue, E> {
        Ok(ClassValue::Number(value as f64))
    }

    fn visit_f64<E>(self, value: f64) -> Result<ClassValue, E> {
        Ok(ClassValue::Number(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<ClassValue, E> {
        Ok(ClassValue::Text(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<ClassValue, E> {
        Ok(ClassValue::Text(value))
    }

    fn visit_unit<E>(self) -> Result<ClassValue, E> {
        Ok(ClassValue::Null)
    }

    fn visit_none<E>(self) -> Result<ClassValue, E> {
        Ok(ClassValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<ClassValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        ClassValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<ClassValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<ClassValue>()? {
            items.push(item);
        }

        Ok(ClassValue::List(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<ClassValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut dict = ClassDict::new();
        while let Some((key, value)) = map.next_entry::<String, ClassValue>()? {
            dict.insert(key, value);
        }

        Ok(ClassValue::Dict(dict))
    }
}
