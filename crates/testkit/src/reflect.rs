// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime type descriptors for type-sequence assertions.

use std::any::{type_name, Any, TypeId};
use std::fmt;

/// A runtime type descriptor: a `TypeId` paired with the type's name so
/// failure messages can render it.
///
/// Equality is by `TypeId` only; the name is diagnostic.
#[derive(Debug, Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Descriptor for the concrete type `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The full type path.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The path-trimmed type name used in failure messages.
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }

    /// Whether `value`'s runtime type matches this descriptor.
    pub fn matches(&self, value: &dyn Any) -> bool {
        value.type_id() == self.id
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Access to a value's runtime type, implementable by trait objects.
///
/// Heterogeneous lists in tests are usually `Vec<Box<dyn Something>>`; a
/// blanket impl over `Any` would resolve to the trait-object type itself
/// rather than the concrete one, so implementors spell out the two methods:
///
/// ```
/// use console_testkit::Reflect;
/// use std::any::Any;
///
/// struct LogEntry;
///
/// impl Reflect for LogEntry {
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
///     fn type_name(&self) -> &'static str {
///         std::any::type_name::<Self>()
///     }
/// }
/// ```
pub trait Reflect {
    /// The value as `&dyn Any`, carrying the concrete type's `TypeId`.
    fn as_any(&self) -> &dyn Any;

    /// The concrete type's name, for failure messages.
    fn type_name(&self) -> &'static str;
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

/// Path-trimmed name of a value's runtime type.
pub(crate) fn short_type_name<R: Reflect>(value: &R) -> &'static str {
    let name = value.type_name();
    name.rsplit("::").next().unwrap_or(name)
}

#[cfg(test)]
#[path = "reflect_tests.rs"]
mod tests;
