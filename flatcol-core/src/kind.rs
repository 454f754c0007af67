use std::fmt::{Display, Formatter};

#[repr(u32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
/// The kind of a single flat column within a [ColumnStore](crate::ColumnStore).
///
/// These kinds have no concept of nested structures, every nested value is
/// decomposed down to these leaves.
pub enum PrimitiveKind {
    Int32 = 1,
    Int64 = 2,
    Float64 = 3,
    /// Container sizes.
    ///
    /// This kind is internal bookkeeping only, its underlying type (`usize`)
    /// cannot be used as a data field.
    Length = 4,
}

impl PrimitiveKind {
    /// Every column kind, in the order columns are laid out in a store.
    pub const ALL: [PrimitiveKind; 4] = [
        PrimitiveKind::Int32,
        PrimitiveKind::Int64,
        PrimitiveKind::Float64,
        PrimitiveKind::Length,
    ];

    #[inline]
    /// Returns the size in bytes of a single value of this kind.
    pub const fn width(self) -> usize {
        match self {
            PrimitiveKind::Int32 => std::mem::size_of::<i32>(),
            PrimitiveKind::Int64 => std::mem::size_of::<i64>(),
            PrimitiveKind::Float64 => std::mem::size_of::<f64>(),
            PrimitiveKind::Length => std::mem::size_of::<usize>(),
        }
    }

    #[inline]
    /// Returns a short, stable name for the kind.
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Int32 => "int32",
            PrimitiveKind::Int64 => "int64",
            PrimitiveKind::Float64 => "float64",
            PrimitiveKind::Length => "length",
        }
    }

    #[inline]
    /// Returns `true` if the kind carries user data rather than bookkeeping.
    pub const fn is_data(self) -> bool {
        !matches!(self, PrimitiveKind::Length)
    }
}

impl Display for PrimitiveKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}
