//! Conversion of loosely typed decoded payloads into the generated models.
//!
//! Every declared field type implements [`ConvertToType`], so the target
//! type of a conversion is chosen at compile time. Models get their
//! [`ConstructFromObject`] and [`ConvertToType`] impls from the
//! [`construct_from_object!`](crate::construct_from_object) macro.

use log::{debug, trace};
use serde::Serialize;
use std::collections::HashMap;

mod error;
mod options;

use self::error::kind_of;
pub use self::error::ConvertError;
pub use self::options::{Coercion, ConvertOptions};
pub use serde_json::Value;

/// A decoded JSON object, keys kept in wire order.
pub type RawObject = serde_json::Map<String, Value>;

pub trait ConvertToType: Sized {
    fn convert_to_type(raw: &Value, options: &ConvertOptions) -> Result<Self, ConvertError>;
}

/// Convert `raw` into `T` using the default (strict) options.
///
/// ```
/// use cells_rest_openapi::convert::convert_to_type;
/// use serde_json::json;
///
/// let flags: Vec<bool> = convert_to_type(&json!([true, false]))?;
/// assert_eq!(vec![true, false], flags);
/// # Ok::<(), cells_rest_openapi::ConvertError>(())
/// ```
pub fn convert_to_type<T: ConvertToType>(raw: &Value) -> Result<T, ConvertError> {
    T::convert_to_type(raw, &ConvertOptions::default())
}

/// Build a model out of a decoded object.
///
/// Only keys present in the object are assigned: a field absent from `data`
/// keeps the value it had in the target, while a key carrying `false`, `0`
/// or `null` is converted and assigned like any other.
pub trait ConstructFromObject: Default {
    const MODEL_NAME: &'static str;
    /// Wire keys of the declared fields.
    const KNOWN_KEYS: &'static [&'static str];

    /// Assign every declared field found in `data` onto `target`.
    fn populate(
        data: &RawObject,
        target: Self,
        options: &ConvertOptions,
    ) -> Result<Self, ConvertError>;

    /// Populate `target`, or a fresh instance, from `data`.
    ///
    /// Absent `data` gives back `target` untouched, which is `None` when no
    /// target was supplied.
    ///
    /// ```
    /// use cells_rest_openapi::{ConstructFromObject, RestDeleteVirtualNodeResponse};
    /// use serde_json::json;
    ///
    /// let data = json!({"Success": false});
    /// let res = RestDeleteVirtualNodeResponse::construct_from_object(data.as_object(), None)?;
    ///
    /// assert_eq!(Some(false), res.and_then(|r| r.success));
    /// # Ok::<(), cells_rest_openapi::ConvertError>(())
    /// ```
    fn construct_from_object(
        data: Option<&RawObject>,
        target: Option<Self>,
    ) -> Result<Option<Self>, ConvertError> {
        Self::construct_from_object_with(data, target, &ConvertOptions::default())
    }

    fn construct_from_object_with(
        data: Option<&RawObject>,
        target: Option<Self>,
        options: &ConvertOptions,
    ) -> Result<Option<Self>, ConvertError> {
        let data = match data {
            Some(data) => data,
            None => return Ok(target),
        };

        for key in data.keys() {
            if !Self::KNOWN_KEYS.iter().any(|known| *known == key.as_str()) {
                trace!("{}: ignoring unknown key {:?}", Self::MODEL_NAME, key);
            }
        }

        Self::populate(data, target.unwrap_or_default(), options).map(Some)
    }

    /// Like [`construct_from_object_with`](Self::construct_from_object_with),
    /// treating `null` as absent data. Anything but an object or `null` is an
    /// error.
    fn construct_from_value(
        data: &Value,
        target: Option<Self>,
        options: &ConvertOptions,
    ) -> Result<Option<Self>, ConvertError> {
        match data {
            Value::Null => Ok(target),
            Value::Object(map) => Self::construct_from_object_with(Some(map), target, options),
            other => Err(ConvertError::NotAnObject {
                model: Self::MODEL_NAME,
                found: kind_of(other),
            }),
        }
    }

    /// Parse a response body and build the model from it.
    fn construct_from_str(json: &str) -> Result<Option<Self>, ConvertError> {
        let data: Value = serde_json::from_str(json)?;
        Self::construct_from_value(&data, None, &ConvertOptions::default())
    }

    /// The model as a raw object, unset fields left out.
    fn to_object(&self) -> Result<RawObject, ConvertError>
    where
        Self: Serialize,
    {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(ConvertError::mismatch("Object", &other)),
        }
    }
}

/// Implement [`ConstructFromObject`] and [`ConvertToType`] for a model, given
/// its fields and their wire keys.
///
/// ```
/// use cells_rest_openapi::{construct_from_object, ConstructFromObject};
///
/// #[derive(Default)]
/// struct RestNodeLocator {
///     path: Option<String>,
/// }
///
/// construct_from_object!(RestNodeLocator { path: "Path" });
///
/// let data = serde_json::json!({"Path": "personal/admin"});
/// let locator = RestNodeLocator::construct_from_object(data.as_object(), None)?.unwrap();
/// assert_eq!(Some("personal/admin"), locator.path.as_deref());
/// # Ok::<(), cells_rest_openapi::ConvertError>(())
/// ```
#[macro_export]
macro_rules! construct_from_object {
    ($model:ident { $($field:ident: $key:literal),* $(,)? }) => {
        impl $crate::convert::ConstructFromObject for $model {
            const MODEL_NAME: &'static str = stringify!($model);
            const KNOWN_KEYS: &'static [&'static str] = &[$($key),*];

            #[allow(unused_mut, unused_variables)]
            fn populate(
                data: &$crate::convert::RawObject,
                mut target: Self,
                options: &$crate::convert::ConvertOptions,
            ) -> Result<Self, $crate::convert::ConvertError> {
                $(
                    if let Some(raw) = data.get($key) {
                        target.$field = $crate::convert::ConvertToType::convert_to_type(raw, options)
                            .map_err(|err| err.at($key))?;
                    }
                )*
                Ok(target)
            }
        }

        impl $crate::convert::ConvertToType for $model {
            fn convert_to_type(
                raw: &$crate::convert::Value,
                options: &$crate::convert::ConvertOptions,
            ) -> Result<Self, $crate::convert::ConvertError> {
                <Self as $crate::convert::ConstructFromObject>::construct_from_value(raw, None, options)?
                    .ok_or_else(|| $crate::convert::ConvertError::mismatch(stringify!($model), raw))
            }
        }
    };
}

impl ConvertToType for bool {
    fn convert_to_type(raw: &Value, options: &ConvertOptions) -> Result<Self, ConvertError> {
        match raw {
            Value::Bool(b) => Ok(*b),
            Value::Number(n) if options.is_lenient() => {
                debug!("coercing number {} into Boolean", n);
                Ok(n.as_f64() != Some(0.0))
            }
            Value::String(s) if options.is_lenient() => {
                debug!("coercing string {:?} into Boolean", s);
                parse_bool(s).ok_or_else(|| ConvertError::InvalidLiteral {
                    expected: "Boolean",
                    value: s.clone(),
                })
            }
            other => Err(ConvertError::mismatch("Boolean", other)),
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    let s = s.trim();
    if s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false") {
        Some(false)
    } else if s == "1" || s.eq_ignore_ascii_case("true") {
        Some(true)
    } else {
        None
    }
}

fn read_integer(raw: &Value, options: &ConvertOptions) -> Result<i64, ConvertError> {
    match raw {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            if n.is_u64() {
                return Err(ConvertError::OutOfRange {
                    expected: "Integer",
                    value: n.to_string(),
                });
            }
            match n.as_f64() {
                Some(f) if options.is_lenient() && f.fract() == 0.0 => {
                    debug!("coercing number {} into Integer", n);
                    float_to_integer(f)
                }
                _ => Err(ConvertError::mismatch("Integer", raw)),
            }
        }
        Value::String(s) if options.is_lenient() => {
            debug!("coercing string {:?} into Integer", s);
            s.trim()
                .parse::<i64>()
                .map_err(|_| ConvertError::InvalidLiteral {
                    expected: "Integer",
                    value: s.clone(),
                })
        }
        Value::Bool(b) if options.is_lenient() => Ok(i64::from(*b)),
        other => Err(ConvertError::mismatch("Integer", other)),
    }
}

fn float_to_integer(f: f64) -> Result<i64, ConvertError> {
    if f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Ok(f as i64)
    } else {
        Err(ConvertError::OutOfRange {
            expected: "Integer",
            value: f.to_string(),
        })
    }
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {
        $(
            impl ConvertToType for $ty {
                fn convert_to_type(raw: &Value, options: &ConvertOptions) -> Result<Self, ConvertError> {
                    let wide = read_integer(raw, options)?;
                    <$ty>::try_from(wide).map_err(|_| ConvertError::OutOfRange {
                        expected: stringify!($ty),
                        value: wide.to_string(),
                    })
                }
            }
        )*
    };
}

impl_integer!(i32, i64);

impl ConvertToType for f64 {
    fn convert_to_type(raw: &Value, options: &ConvertOptions) -> Result<Self, ConvertError> {
        match raw {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| ConvertError::mismatch("Number", raw)),
            Value::String(s) if options.is_lenient() => {
                debug!("coercing string {:?} into Number", s);
                s.trim()
                    .parse::<f64>()
                    .map_err(|_| ConvertError::InvalidLiteral {
                        expected: "Number",
                        value: s.clone(),
                    })
            }
            Value::Bool(b) if options.is_lenient() => Ok(if *b { 1.0 } else { 0.0 }),
            other => Err(ConvertError::mismatch("Number", other)),
        }
    }
}

impl ConvertToType for String {
    fn convert_to_type(raw: &Value, options: &ConvertOptions) -> Result<Self, ConvertError> {
        match raw {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) if options.is_lenient() => Ok(n.to_string()),
            Value::Bool(b) if options.is_lenient() => Ok(b.to_string()),
            other => Err(ConvertError::mismatch("String", other)),
        }
    }
}

impl ConvertToType for Value {
    fn convert_to_type(raw: &Value, _options: &ConvertOptions) -> Result<Self, ConvertError> {
        Ok(raw.clone())
    }
}

impl<T: ConvertToType> ConvertToType for Option<T> {
    fn convert_to_type(raw: &Value, options: &ConvertOptions) -> Result<Self, ConvertError> {
        match raw {
            Value::Null => Ok(None),
            other => T::convert_to_type(other, options).map(Some),
        }
    }
}

impl<T: ConvertToType> ConvertToType for Box<T> {
    fn convert_to_type(raw: &Value, options: &ConvertOptions) -> Result<Self, ConvertError> {
        T::convert_to_type(raw, options).map(Box::new)
    }
}

impl<T: ConvertToType> ConvertToType for Vec<T> {
    fn convert_to_type(raw: &Value, options: &ConvertOptions) -> Result<Self, ConvertError> {
        match raw {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(idx, item)| T::convert_to_type(item, options).map_err(|err| err.at(idx)))
                .collect(),
            other => Err(ConvertError::mismatch("Array", other)),
        }
    }
}

impl<T: ConvertToType> ConvertToType for HashMap<String, T> {
    fn convert_to_type(raw: &Value, options: &ConvertOptions) -> Result<Self, ConvertError> {
        match raw {
            Value::Object(entries) => entries
                .iter()
                .map(|(key, item)| {
                    T::convert_to_type(item, options)
                        .map(|converted| (key.clone(), converted))
                        .map_err(|err| err.at(key))
                })
                .collect(),
            other => Err(ConvertError::mismatch("Object", other)),
        }
    }
}
