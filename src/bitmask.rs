use core::cmp::Ordering;
use core::fmt::{self, Binary, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

mod sealed {
    /// Restricts [`Bits`](super::Bits) to the primitive integer types.
    pub trait Sealed {}
}

/// A fixed-width integer type usable as mask storage.
///
/// Implemented for the primitive integer types (`u8` through `u128`, `i8`
/// through `i128`, `usize` and `isize`). This trait is sealed; it cannot be
/// implemented outside this crate.
pub trait Bits:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + Hash
    + Debug
    + Binary
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
{
    /// The value with no bits set.
    const ZERO: Self;

    /// The value with every bit of the representation set.
    ///
    /// For signed types this is `-1`.
    const ALL: Self;
}

/// A flag enumeration registered for bitmask use.
///
/// This trait is the capability that gates [`BitMask`]: a mask can only be
/// instantiated for types that implement it, and a missing registration is a
/// compile-time error, never a runtime one. Implement it through
/// [`enable_bitmask!`](crate::enable_bitmask) or
/// [`enable_bitmask_external!`](crate::enable_bitmask_external) rather than
/// by hand; the macros also generate the operator impls that let flag values
/// combine directly.
///
/// Trait coherence guarantees there is at most one registration per
/// enumeration, fixed for the lifetime of the program.
pub trait BitmaskFlags: Copy {
    /// The integer representation backing the enumeration.
    type Bits: Bits;

    /// The union of every individual flag named at registration time, or
    /// the full-width pattern when none were named.
    const ALL_FLAGS: Self::Bits;

    /// The flag's underlying bit pattern.
    fn bits(self) -> Self::Bits;
}

/// A combination of flags from the enumeration `T`, stored as one integer.
///
/// The mask holds any bit pattern of the underlying representation, not just
/// patterns that correspond to named flags; arbitrary combinations survive
/// every operation unchanged. Negation is the exception in spirit: `!mask`
/// complements within the registered all-flags universe (XOR with
/// [`all`](BitMask::all)) instead of flipping the whole machine word.
///
/// # Examples
/// ```
/// use enum_mask::{enable_bitmask, BitMask};
///
/// #[derive(Clone, Copy, Debug)]
/// enum Perm {
///     Read = 0x1,
///     Write = 0x2,
///     Exec = 0x4,
/// }
/// enable_bitmask!(Perm: u8, Perm::Read, Perm::Write, Perm::Exec);
///
/// let mut perms = Perm::Read | Perm::Write;
/// assert!(perms.is_set(Perm::Read));
/// perms.set(Perm::Exec).remove(Perm::Write);
/// assert_eq!(perms, Perm::Read | Perm::Exec);
/// ```
///
/// An enumeration that was never registered cannot form a mask:
/// ```compile_fail
/// use enum_mask::BitMask;
///
/// #[derive(Clone, Copy)]
/// enum Unregistered {
///     A = 1,
/// }
///
/// let mask = BitMask::<Unregistered>::empty();
/// ```
pub struct BitMask<T: BitmaskFlags>(T::Bits);

impl<T: BitmaskFlags> BitMask<T> {
    /// Creates a mask with no flags set.
    ///
    /// # Examples
    /// ```
    /// use enum_mask::{enable_bitmask, BitMask};
    /// #
    /// # #[derive(Clone, Copy, Debug)]
    /// # enum Perm { Read = 0x1, Write = 0x2, Exec = 0x4 }
    /// # enable_bitmask!(Perm: u8, Perm::Read, Perm::Write, Perm::Exec);
    /// #
    /// let mask = BitMask::<Perm>::empty();
    /// assert_eq!(mask, 0);
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self(<T::Bits as Bits>::ZERO)
    }

    /// Creates a mask with every registered flag set.
    ///
    /// This is the all-flags universe: the union of the flags named at
    /// registration time, or every bit of the representation when the
    /// registration named none.
    ///
    /// # Examples
    /// ```
    /// use enum_mask::{enable_bitmask, BitMask};
    /// #
    /// # #[derive(Clone, Copy, Debug)]
    /// # enum Perm { Read = 0x1, Write = 0x2, Exec = 0x4 }
    /// # enable_bitmask!(Perm: u8, Perm::Read, Perm::Write, Perm::Exec);
    /// #
    /// assert_eq!(BitMask::<Perm>::all(), Perm::Read | Perm::Write | Perm::Exec);
    /// ```
    #[inline]
    pub const fn all() -> Self {
        Self(T::ALL_FLAGS)
    }

    /// Creates a mask from a raw bit pattern.
    ///
    /// This is the only way in from the integer side; raw integers never
    /// convert implicitly. The pattern is stored unchanged, whether or not
    /// its bits correspond to named flags.
    ///
    /// ```compile_fail
    /// use enum_mask::{enable_bitmask, BitMask};
    ///
    /// #[derive(Clone, Copy, Debug)]
    /// enum Perm {
    ///     Read = 0x1,
    ///     Write = 0x2,
    /// }
    /// enable_bitmask!(Perm: u8, Perm::Read, Perm::Write);
    ///
    /// let mask: BitMask<Perm> = 0x3u8;
    /// ```
    ///
    /// # Examples
    /// ```
    /// use enum_mask::{enable_bitmask, BitMask};
    /// #
    /// # #[derive(Clone, Copy, Debug)]
    /// # enum Perm { Read = 0x1, Write = 0x2, Exec = 0x4 }
    /// # enable_bitmask!(Perm: u8, Perm::Read, Perm::Write, Perm::Exec);
    /// #
    /// let mask = BitMask::<Perm>::from_bits(0x3);
    /// assert_eq!(mask, Perm::Read | Perm::Write);
    /// ```
    #[inline]
    pub const fn from_bits(bits: T::Bits) -> Self {
        Self(bits)
    }

    /// Returns the raw bit pattern.
    ///
    /// The escape hatch back to the integer world. There is deliberately no
    /// conversion back to `T`: a mask usually holds a combination that is
    /// not one of the declared enumerators, and such a value cannot exist as
    /// the enumeration type.
    ///
    /// # Examples
    /// ```
    /// use enum_mask::{enable_bitmask, BitMask};
    /// #
    /// # #[derive(Clone, Copy, Debug)]
    /// # enum Perm { Read = 0x1, Write = 0x2, Exec = 0x4 }
    /// # enable_bitmask!(Perm: u8, Perm::Read, Perm::Write, Perm::Exec);
    /// #
    /// let mask = Perm::Read | Perm::Exec;
    /// assert_eq!(mask.bits(), 0x5);
    /// ```
    #[inline]
    pub const fn bits(self) -> T::Bits {
        self.0
    }

    /// Returns `true` if no flags are set.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == <T::Bits as Bits>::ZERO
    }

    /// Returns `true` if every registered flag is set.
    #[inline]
    pub fn is_all(self) -> bool {
        self.0 == T::ALL_FLAGS
    }

    /// Returns `true` if every bit of `flags` is set in `self`.
    ///
    /// `flags` may be a single flag or a whole mask; a combined value is
    /// queried as "all of these at once".
    ///
    /// # Examples
    /// ```
    /// use enum_mask::{enable_bitmask, BitMask};
    /// #
    /// # #[derive(Clone, Copy, Debug)]
    /// # enum Perm { Read = 0x1, Write = 0x2, Exec = 0x4 }
    /// # enable_bitmask!(Perm: u8, Perm::Read, Perm::Write, Perm::Exec);
    /// #
    /// let mask = Perm::Read | Perm::Write;
    /// assert!(mask.is_set(Perm::Read));
    /// assert!(mask.is_set(Perm::Read | Perm::Write));
    /// assert!(!mask.is_set(Perm::Read | Perm::Exec));
    /// ```
    #[inline]
    pub fn is_set(self, flags: impl Into<Self>) -> bool {
        let flags = flags.into().0;
        self.0 & flags == flags
    }

    /// Returns `true` if at least one bit of `flags` is set in `self`.
    ///
    /// # Examples
    /// ```
    /// use enum_mask::{enable_bitmask, BitMask};
    /// #
    /// # #[derive(Clone, Copy, Debug)]
    /// # enum Perm { Read = 0x1, Write = 0x2, Exec = 0x4 }
    /// # enable_bitmask!(Perm: u8, Perm::Read, Perm::Write, Perm::Exec);
    /// #
    /// let mask = Perm::Read | Perm::Write;
    /// assert!(mask.intersects(Perm::Write | Perm::Exec));
    /// assert!(!mask.intersects(Perm::Exec));
    /// ```
    #[inline]
    pub fn intersects(self, flags: impl Into<Self>) -> bool {
        self.0 & flags.into().0 != <T::Bits as Bits>::ZERO
    }

    /// Sets every bit of `flags`, returning `&mut self` for chaining.
    ///
    /// # Examples
    /// ```
    /// use enum_mask::{enable_bitmask, BitMask};
    /// #
    /// # #[derive(Clone, Copy, Debug)]
    /// # enum Perm { Read = 0x1, Write = 0x2, Exec = 0x4 }
    /// # enable_bitmask!(Perm: u8, Perm::Read, Perm::Write, Perm::Exec);
    /// #
    /// let mut mask = BitMask::<Perm>::empty();
    /// mask.set(Perm::Read).set(Perm::Exec);
    /// assert_eq!(mask, Perm::Read | Perm::Exec);
    /// ```
    #[inline]
    pub fn set(&mut self, flags: impl Into<Self>) -> &mut Self {
        self.0 = self.0 | flags.into().0;
        self
    }

    /// Toggles every bit of `flags` off, returning `&mut self` for chaining.
    ///
    /// This is an XOR, not an and-not clear: a bit of `flags` that is
    /// already set in `self` is cleared, but a bit that is *not* set gets
    /// set instead. Only call this when the flag is known to be present, or
    /// when the toggle behavior is exactly what is wanted.
    ///
    /// # Examples
    /// ```
    /// use enum_mask::{enable_bitmask, BitMask};
    /// #
    /// # #[derive(Clone, Copy, Debug)]
    /// # enum Perm { Read = 0x1, Write = 0x2, Exec = 0x4 }
    /// # enable_bitmask!(Perm: u8, Perm::Read, Perm::Write, Perm::Exec);
    /// #
    /// let mut mask = Perm::Read | Perm::Write;
    /// mask.remove(Perm::Write);
    /// assert_eq!(mask, Perm::Read);
    ///
    /// // Removing a flag that is not set toggles it on.
    /// mask.remove(Perm::Exec);
    /// assert_eq!(mask, Perm::Read | Perm::Exec);
    /// ```
    #[inline]
    pub fn remove(&mut self, flags: impl Into<Self>) -> &mut Self {
        self.0 = self.0 ^ flags.into().0;
        self
    }
}

impl<T: BitmaskFlags> From<T> for BitMask<T> {
    #[inline]
    fn from(flag: T) -> Self {
        Self(flag.bits())
    }
}

impl<T: BitmaskFlags> Clone for BitMask<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: BitmaskFlags> Copy for BitMask<T> {}

impl<T: BitmaskFlags> Default for BitMask<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

// Comparison and hashing impls are written out by hand; deriving them would
// put bounds on `T` itself, while only `T::Bits` is ever compared.

impl<T: BitmaskFlags> PartialEq for BitMask<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: BitmaskFlags> Eq for BitMask<T> {}

impl<T: BitmaskFlags> PartialOrd for BitMask<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Masks order as their underlying integers. The order carries no flag
/// semantics; it exists so masks can serve as sorted-container keys.
impl<T: BitmaskFlags> Ord for BitMask<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T: BitmaskFlags> Hash for BitMask<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: BitmaskFlags> Debug for BitMask<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BitMask({:#b})", self.0)
    }
}

impl<T: BitmaskFlags> BitOr for BitMask<T> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl<T: BitmaskFlags> BitOr<T> for BitMask<T> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: T) -> Self {
        Self(self.0 | rhs.bits())
    }
}

impl<T: BitmaskFlags> BitOrAssign for BitMask<T> {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 = self.0 | rhs.0;
    }
}

impl<T: BitmaskFlags> BitOrAssign<T> for BitMask<T> {
    #[inline]
    fn bitor_assign(&mut self, rhs: T) {
        self.0 = self.0 | rhs.bits();
    }
}

impl<T: BitmaskFlags> BitAnd for BitMask<T> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl<T: BitmaskFlags> BitAnd<T> for BitMask<T> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: T) -> Self {
        Self(self.0 & rhs.bits())
    }
}

impl<T: BitmaskFlags> BitAndAssign for BitMask<T> {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 = self.0 & rhs.0;
    }
}

impl<T: BitmaskFlags> BitAndAssign<T> for BitMask<T> {
    #[inline]
    fn bitand_assign(&mut self, rhs: T) {
        self.0 = self.0 & rhs.bits();
    }
}

impl<T: BitmaskFlags> BitXor for BitMask<T> {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl<T: BitmaskFlags> BitXor<T> for BitMask<T> {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: T) -> Self {
        Self(self.0 ^ rhs.bits())
    }
}

impl<T: BitmaskFlags> BitXorAssign for BitMask<T> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 = self.0 ^ rhs.0;
    }
}

impl<T: BitmaskFlags> BitXorAssign<T> for BitMask<T> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: T) {
        self.0 = self.0 ^ rhs.bits();
    }
}

/// Complement within the registered all-flags universe.
///
/// `!mask` is `mask ^ all()`, not a full bitwise NOT of the machine word:
/// a flag type declaring three bits of a sixteen-bit representation negates
/// within those three bits. Bits outside the universe pass through XOR
/// unchanged, so a mask that already carried stray bits keeps them.
impl<T: BitmaskFlags> Not for BitMask<T> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(self.0 ^ T::ALL_FLAGS)
    }
}

macro_rules! impl_bits {
    ($($int:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $int {}

            impl Bits for $int {
                const ZERO: Self = 0;
                const ALL: Self = !0;
            }

            // Raw-integer comparisons, both operand orders. These live here
            // rather than in the registration macros because an impl between
            // a primitive and `BitMask` names no type local to the crate
            // that invokes the macro, so consumers could not write it.
            impl<T: BitmaskFlags<Bits = $int>> PartialEq<$int> for BitMask<T> {
                #[inline]
                fn eq(&self, other: &$int) -> bool {
                    self.0 == *other
                }
            }

            impl<T: BitmaskFlags<Bits = $int>> PartialOrd<$int> for BitMask<T> {
                #[inline]
                fn partial_cmp(&self, other: &$int) -> Option<Ordering> {
                    Some(self.0.cmp(other))
                }
            }

            impl<T: BitmaskFlags<Bits = $int>> PartialEq<BitMask<T>> for $int {
                #[inline]
                fn eq(&self, other: &BitMask<T>) -> bool {
                    other == self
                }
            }

            impl<T: BitmaskFlags<Bits = $int>> PartialOrd<BitMask<T>> for $int {
                #[inline]
                fn partial_cmp(&self, other: &BitMask<T>) -> Option<Ordering> {
                    other.partial_cmp(self).map(Ordering::reverse)
                }
            }
        )+
    };
}

impl_bits!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Registers a flag enumeration for bitmask use.
///
/// `enable_bitmask!(Enum: Repr, flags...)` implements
/// [`BitmaskFlags`](crate::BitmaskFlags) for `Enum` with representation
/// `Repr`, and generates the operator impls that let bare flag values
/// combine: `flag | flag`, `flag & flag`, `flag ^ flag` and `!flag` all
/// produce a [`BitMask<Enum>`](crate::BitMask), flags can appear on either
/// side of an operator or comparison against a mask, and the enumeration
/// becomes usable everywhere a mask is expected.
///
/// The flag list names the *individual* flags (not combinations) whose union
/// defines the all-flags universe used by negation. Entries may be
/// enumeration values or raw values of `Repr`. With an empty list the
/// universe defaults to every bit of `Repr`; that default is only correct
/// when the flags really span the whole representation. For a narrower flag
/// set, pass the explicit list, otherwise negation will produce spurious
/// high bits.
///
/// The enumeration must be fieldless and `Copy`. Invoke the macro once, in
/// the crate that owns the enumeration; a second registration is a
/// conflicting-implementation error:
///
/// ```compile_fail
/// use enum_mask::enable_bitmask;
///
/// #[derive(Clone, Copy)]
/// enum Flag {
///     A = 1,
/// }
/// enable_bitmask!(Flag: u8, Flag::A);
/// enable_bitmask!(Flag: u8);
/// ```
///
/// # Examples
/// ```
/// use enum_mask::{enable_bitmask, BitMask};
///
/// #[derive(Clone, Copy, Debug)]
/// enum Channel {
///     Red = 0x1,
///     Green = 0x2,
///     Blue = 0x4,
/// }
/// enable_bitmask!(Channel: u8, Channel::Red, Channel::Green, Channel::Blue);
///
/// assert_eq!(BitMask::<Channel>::all(), 0x7);
/// assert_eq!(!Channel::Red, Channel::Green | Channel::Blue);
/// ```
///
/// Registered without the list, the same enumeration gets the full-width
/// universe, and negation drags in the five undeclared high bits:
/// ```
/// use enum_mask::{enable_bitmask, BitMask};
///
/// #[derive(Clone, Copy, Debug)]
/// enum Channel {
///     Red = 0x1,
///     Green = 0x2,
///     Blue = 0x4,
/// }
/// enable_bitmask!(Channel: u8);
///
/// assert_eq!(BitMask::<Channel>::all(), 0xFF);
/// assert_eq!(!Channel::Red, 0xFE);
/// ```
#[macro_export]
macro_rules! enable_bitmask {
    ($Flags:ty : $Bits:ty $(,)?) => {
        $crate::__enable_bitmask_impl!($Flags, $Bits, <$Bits as $crate::Bits>::ALL);
    };
    ($Flags:ty : $Bits:ty, $($flag:expr),+ $(,)?) => {
        $crate::__enable_bitmask_impl!($Flags, $Bits, 0 $(| ($flag as $Bits))+);
    };
}

/// Registers a flag enumeration declared somewhere else in the crate.
///
/// Identical in effect to [`enable_bitmask!`](crate::enable_bitmask); this
/// variant exists for the case where the registration cannot sit next to
/// the declaration, and is conventionally invoked at the crate root with a
/// fully qualified path:
///
/// ```
/// use enum_mask::{enable_bitmask_external, BitMask};
///
/// mod vendor {
///     #[derive(Clone, Copy, Debug)]
///     pub enum Reg {
///         Lo = 0x01,
///         Hi = 0x80,
///     }
/// }
///
/// enable_bitmask_external!(vendor::Reg: u8, vendor::Reg::Lo, vendor::Reg::Hi);
///
/// assert_eq!((vendor::Reg::Lo | vendor::Reg::Hi).bits(), 0x81);
/// ```
///
/// Trait coherence still requires the invocation to live in the crate that
/// owns the enumeration. To mask over an enumeration from a crate you do
/// not own, wrap it in a local enumeration (or newtype the foreign
/// constants) and register that.
#[macro_export]
macro_rules! enable_bitmask_external {
    ($Flags:ty : $Bits:ty $(,)?) => {
        $crate::enable_bitmask!($Flags: $Bits);
    };
    ($Flags:ty : $Bits:ty, $($flag:expr),+ $(,)?) => {
        $crate::enable_bitmask!($Flags: $Bits, $($flag),+);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __enable_bitmask_impl {
    ($Flags:ty, $Bits:ty, $all:expr) => {
        impl $crate::BitmaskFlags for $Flags {
            type Bits = $Bits;

            const ALL_FLAGS: $Bits = $all;

            #[inline]
            fn bits(self) -> $Bits {
                self as $Bits
            }
        }

        impl ::core::ops::BitOr for $Flags {
            type Output = $crate::BitMask<$Flags>;

            #[inline]
            fn bitor(self, rhs: Self) -> Self::Output {
                $crate::BitMask::from(self) | rhs
            }
        }

        impl ::core::ops::BitOr<$crate::BitMask<$Flags>> for $Flags {
            type Output = $crate::BitMask<$Flags>;

            #[inline]
            fn bitor(self, rhs: $crate::BitMask<$Flags>) -> Self::Output {
                rhs | self
            }
        }

        impl ::core::ops::BitAnd for $Flags {
            type Output = $crate::BitMask<$Flags>;

            #[inline]
            fn bitand(self, rhs: Self) -> Self::Output {
                $crate::BitMask::from(self) & rhs
            }
        }

        impl ::core::ops::BitAnd<$crate::BitMask<$Flags>> for $Flags {
            type Output = $crate::BitMask<$Flags>;

            #[inline]
            fn bitand(self, rhs: $crate::BitMask<$Flags>) -> Self::Output {
                rhs & self
            }
        }

        impl ::core::ops::BitXor for $Flags {
            type Output = $crate::BitMask<$Flags>;

            #[inline]
            fn bitxor(self, rhs: Self) -> Self::Output {
                $crate::BitMask::from(self) ^ rhs
            }
        }

        impl ::core::ops::BitXor<$crate::BitMask<$Flags>> for $Flags {
            type Output = $crate::BitMask<$Flags>;

            #[inline]
            fn bitxor(self, rhs: $crate::BitMask<$Flags>) -> Self::Output {
                rhs ^ self
            }
        }

        impl ::core::ops::Not for $Flags {
            type Output = $crate::BitMask<$Flags>;

            #[inline]
            fn not(self) -> Self::Output {
                !$crate::BitMask::from(self)
            }
        }

        impl ::core::cmp::PartialEq<$Flags> for $crate::BitMask<$Flags> {
            #[inline]
            fn eq(&self, other: &$Flags) -> bool {
                self.bits() == <$Flags as $crate::BitmaskFlags>::bits(*other)
            }
        }

        impl ::core::cmp::PartialOrd<$Flags> for $crate::BitMask<$Flags> {
            #[inline]
            fn partial_cmp(
                &self,
                other: &$Flags,
            ) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(
                    self.bits().cmp(&<$Flags as $crate::BitmaskFlags>::bits(*other)),
                )
            }
        }

        impl ::core::cmp::PartialEq<$crate::BitMask<$Flags>> for $Flags {
            #[inline]
            fn eq(&self, other: &$crate::BitMask<$Flags>) -> bool {
                other == self
            }
        }

        impl ::core::cmp::PartialOrd<$crate::BitMask<$Flags>> for $Flags {
            #[inline]
            fn partial_cmp(
                &self,
                other: &$crate::BitMask<$Flags>,
            ) -> ::core::option::Option<::core::cmp::Ordering> {
                other.partial_cmp(self).map(::core::cmp::Ordering::reverse)
            }
        }
    };
}
