use crate::FieldError;
use crate::Value;
use futures::FutureExt;
use futures::StreamExt;
use futures::future::LocalBoxFuture;
use futures::stream::LocalBoxStream;
use std::any::Any;
use std::sync::Arc;

/// What a resolver returns.
pub type FieldResult = Result<FieldValue, FieldError>;

/// A value produced by a resolver, before completion against the field's
/// type.
///
/// Plain data travels as [`FieldValue::Value`]. Host objects are wrapped in
/// [`FieldValue::Object`], where the default resolver looks fields up by name
/// through [`ObjectSource::field`] and explicit resolvers can get the concrete
/// type back with [`FieldValue::downcast_ref`].
pub enum FieldValue {
    Value(Value),
    List(Vec<FieldValue>),
    /// A lazily produced list. Drained once, when the field is completed.
    Iter(Box<dyn Iterator<Item = FieldValue>>),
    Object(Arc<dyn ObjectSource>),
    /// A zero-argument function, invoked by the default resolver.
    Callable(Arc<dyn Fn() -> FieldResult>),
    /// A value that is not available yet.
    Deferred(LocalBoxFuture<'static, FieldResult>),
    /// A source event stream. Only meaningful as the result of a top-level
    /// subscription field.
    Stream(LocalBoxStream<'static, FieldResult>),
}

impl FieldValue {
    pub fn null() -> Self {
        FieldValue::Value(Value::Null)
    }

    pub fn object(source: impl ObjectSource + 'static) -> Self {
        FieldValue::Object(Arc::new(source))
    }

    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FieldValue>,
    {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }

    pub fn iter(items: impl Iterator<Item = FieldValue> + 'static) -> Self {
        FieldValue::Iter(Box::new(items))
    }

    pub fn callable(f: impl Fn() -> FieldResult + 'static) -> Self {
        FieldValue::Callable(Arc::new(f))
    }

    pub fn deferred(future: impl Future<Output = FieldResult> + 'static) -> Self {
        FieldValue::Deferred(future.boxed_local())
    }

    pub fn stream(stream: impl futures::Stream<Item = FieldResult> + 'static) -> Self {
        FieldValue::Stream(stream.boxed_local())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Value(Value::Null))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            FieldValue::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The host object behind [`FieldValue::Object`], if it is a `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            FieldValue::Object(source) => (**source).as_any().downcast_ref::<T>(),
            _ => None,
        }
    }

    /// The object type name the value reports for itself: an
    /// [`ObjectSource::type_name`], or a `__typename` entry of an object
    /// value.
    pub(crate) fn reported_type_name(&self) -> Option<&str> {
        match self {
            FieldValue::Object(source) => source.type_name(),
            FieldValue::Value(Value::Object(entries)) => entries.get("__typename")?.as_str(),
            _ => None,
        }
    }

    /// A short description used in error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            FieldValue::Value(value) => value.to_string(),
            FieldValue::List(_) | FieldValue::Iter(_) => "a list".to_string(),
            FieldValue::Object(source) => match source.type_name() {
                Some(name) => format!("an object of type {name}"),
                None => "an object".to_string(),
            },
            FieldValue::Callable(_) => "a function".to_string(),
            FieldValue::Deferred(_) => "a pending value".to_string(),
            FieldValue::Stream(_) => "a stream".to_string(),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::null()
    }
}

impl std::fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Value(value) => f.debug_tuple("Value").field(value).finish(),
            FieldValue::List(items) => f.debug_tuple("List").field(items).finish(),
            FieldValue::Iter(_) => f.write_str("Iter(..)"),
            FieldValue::Object(source) => {
                f.debug_tuple("Object").field(&source.type_name()).finish()
            },
            FieldValue::Callable(_) => f.write_str("Callable(..)"),
            FieldValue::Deferred(_) => f.write_str("Deferred(..)"),
            FieldValue::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

macro_rules! from_value_impls {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    FieldValue::Value(Value::from(value))
                }
            }
        )*
    };
}

from_value_impls!(Value, i32, i64, f64, bool, &str, String);

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(FieldValue::null, Into::into)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::list(items)
    }
}

/// Upcast helper so [`FieldValue::downcast_ref`] can reach the concrete
/// type behind an `Arc<dyn ObjectSource>`. Implemented for every
/// `'static` type.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A host object exposed to the executor.
///
/// Both methods are optional. Types that only serve explicit resolvers
/// (which downcast the source) can implement this with an empty body.
pub trait ObjectSource: AsAny {
    /// The value of the attribute called `name`, read by the default
    /// resolver. `None` resolves to null.
    fn field(&self, _name: &str) -> Option<FieldValue> {
        None
    }

    /// The object type this value belongs to, used to resolve abstract
    /// types when neither `resolve_type` nor `is_type_of` decide.
    fn type_name(&self) -> Option<&str> {
        None
    }
}
