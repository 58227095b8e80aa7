//! Classification of field types into flag kinds.

use std::marker::PhantomData;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use crate::bind::FlagBind;
use crate::value::{Native, Scalar, Value, short_type_name};

/// The flag kind of a field, borrowed mutably so a registry can write into
/// it.
pub enum Target<'a> {
    /// A `bool` field.
    Bool(&'a mut bool),
    /// An `isize` field.
    Int(&'a mut isize),
    /// A `usize` field.
    Uint(&'a mut usize),
    /// An `i64` field.
    Int64(&'a mut i64),
    /// A `u64` field.
    Uint64(&'a mut u64),
    /// An `f32` field; only the extended flag set supports it.
    Float32(&'a mut f32),
    /// An `f64` field.
    Float64(&'a mut f64),
    /// A `String` field.
    String(&'a mut String),
    /// A [`Duration`] field.
    Duration(&'a mut Duration),
    /// An [`IpAddr`] field; only the extended flag set supports it.
    Ip(&'a mut IpAddr),
    /// A list field; only the extended flag set supports lists.
    List(ListTarget<'a>),
    /// Any other value with a text form.
    Value {
        /// The value to register.
        value: Box<dyn Value + 'a>,
        /// Type label used when the value declares none.
        type_name: &'static str,
    },
    /// A nested struct whose fields become flags.
    Struct(&'a mut dyn FlagBind),
    /// Not bindable; the field is skipped.
    Unsupported,
}

/// The list kinds understood by the extended flag set.
pub enum ListTarget<'a> {
    /// `Vec<bool>`.
    Bool(&'a mut Vec<bool>),
    /// `Vec<isize>`.
    Int(&'a mut Vec<isize>),
    /// `Vec<i64>`.
    Int64(&'a mut Vec<i64>),
    /// `Vec<usize>`.
    Uint(&'a mut Vec<usize>),
    /// `Vec<f32>`.
    Float32(&'a mut Vec<f32>),
    /// `Vec<f64>`.
    Float64(&'a mut Vec<f64>),
    /// `Vec<String>`.
    String(&'a mut Vec<String>),
    /// `Vec<Duration>`.
    Duration(&'a mut Vec<Duration>),
    /// `Vec<IpAddr>`.
    Ip(&'a mut Vec<IpAddr>),
}

/// A field type the binder knows how to declare.
///
/// Implemented for the primitive kinds, lists of them, `Option` of any
/// bindable type with a [`Default`], every [`Value`], and every
/// `#[derive(FlagBind)]` struct.
///
/// `Option<IpAddr>` does not bind because the address types have no
/// `Default` to allocate. Use a plain `IpAddr`, whose zero value is the
/// unspecified address, or `Option<Parsed<IpAddr>>`.
pub trait Bindable {
    /// Prepares the field for binding; `Option` allocates its default here.
    fn prepare(&mut self) {}

    /// Whether the field holds its zero value.
    fn is_zero(&self) -> bool;

    /// Classifies the field.
    fn target(&mut self) -> Target<'_>;
}

macro_rules! bindable_kind {
    ($($ty:ty => $variant:ident;)*) => {
        $(
            impl Bindable for $ty {
                fn is_zero(&self) -> bool {
                    Native::is_zero(self)
                }

                fn target(&mut self) -> Target<'_> {
                    Target::$variant(self)
                }
            }
        )*
    };
}

bindable_kind! {
    bool => Bool;
    isize => Int;
    usize => Uint;
    i64 => Int64;
    u64 => Uint64;
    f32 => Float32;
    f64 => Float64;
    String => String;
    Duration => Duration;
    IpAddr => Ip;
}

macro_rules! bindable_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Bindable for $ty {
                fn is_zero(&self) -> bool {
                    Native::is_zero(self)
                }

                fn target(&mut self) -> Target<'_> {
                    Target::Value {
                        value: Box::new(Scalar::new(self)),
                        type_name: <$ty as Native>::TYPE_NAME,
                    }
                }
            }
        )*
    };
}

bindable_scalar!(i8, i16, i32, u8, u16, u32, Ipv4Addr, Ipv6Addr);

macro_rules! bindable_list {
    ($($ty:ty => $variant:ident;)*) => {
        $(
            impl Bindable for Vec<$ty> {
                fn is_zero(&self) -> bool {
                    self.is_empty()
                }

                fn target(&mut self) -> Target<'_> {
                    Target::List(ListTarget::$variant(self))
                }
            }
        )*
    };
}

bindable_list! {
    bool => Bool;
    isize => Int;
    i64 => Int64;
    usize => Uint;
    f32 => Float32;
    f64 => Float64;
    String => String;
    Duration => Duration;
    IpAddr => Ip;
}

impl<T: Bindable + Default> Bindable for Option<T> {
    fn prepare(&mut self) {
        self.get_or_insert_with(T::default).prepare();
    }

    fn is_zero(&self) -> bool {
        self.as_ref().is_none_or(Bindable::is_zero)
    }

    fn target(&mut self) -> Target<'_> {
        match self {
            Some(inner) => inner.target(),
            None => Target::Unsupported,
        }
    }
}

impl<T: Value> Bindable for T {
    fn is_zero(&self) -> bool {
        Value::is_zero(self)
    }

    fn target(&mut self) -> Target<'_> {
        Target::Value {
            value: Box::new(self),
            type_name: short_type_name::<T>(),
        }
    }
}

impl Bindable for () {
    fn is_zero(&self) -> bool {
        true
    }

    fn target(&mut self) -> Target<'_> {
        Target::Unsupported
    }
}

impl<T: ?Sized> Bindable for PhantomData<T> {
    fn is_zero(&self) -> bool {
        true
    }

    fn target(&mut self) -> Target<'_> {
        Target::Unsupported
    }
}
