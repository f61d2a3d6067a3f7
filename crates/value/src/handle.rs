//! Reference-counted handles for values that are never copied structurally:
//! callables and opaque host objects.

use std::any::{self, Any};
use std::fmt;
use std::rc::Rc;

use crate::value::Value;

type Callable = dyn Fn(&[Value]) -> Value;

/// A callable value. Cloning a `Function` shares the same callable.
///
/// # Examples
///
/// ```
/// use objkit_value::{Function, Value};
///
/// let double = Function::new(|args| match args.first() {
///     Some(Value::Number(n)) => Value::Number(n * 2.0),
///     _ => Value::Undefined,
/// });
/// assert_eq!(double.call(&[Value::Number(21.0)]), Value::Number(42.0));
/// assert!(double.ptr_eq(&double.clone()));
/// ```
#[derive(Clone)]
pub struct Function {
    inner: Rc<Callable>,
}

impl Function {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + 'static,
    {
        Self { inner: Rc::new(f) }
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.inner)(args)
    }

    /// Returns `true` if both handles refer to the same callable.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Function]")
    }
}

/// A host object the engines never look inside: class instances, promises,
/// symbols and anything else that is not a plain container.
#[derive(Clone)]
pub struct Opaque {
    inner: Rc<dyn Any>,
    type_name: &'static str,
}

impl Opaque {
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            inner: Rc::new(value),
            type_name: any::type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Returns `true` if both handles refer to the same object.
    pub fn ptr_eq(&self, other: &Opaque) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[object {}]", self.type_name)
    }
}
