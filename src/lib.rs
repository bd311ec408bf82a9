//! A type-safe bitmask wrapper over enum flag sets.
//! `no_std`, no heap / `alloc`, no `unsafe` - just `core`.
//!
//! Declare flag constants as a plain fieldless enum, register the enum with
//! [`enable_bitmask!`], and manipulate combinations of flags through the
//! [`BitMask`] value type. Unrelated flag enums and raw integers never mix
//! by accident: composing masks of two different enums is a type error, and
//! the only way in or out of the integer world is the explicit
//! [`from_bits`](BitMask::from_bits) / [`bits`](BitMask::bits) pair.
//!
//! # Examples
//! ```
//! use enum_mask::{enable_bitmask, BitMask};
//!
//! #[derive(Clone, Copy, Debug)]
//! enum Perm {
//!     Read = 0x1,
//!     Write = 0x2,
//!     Exec = 0x4,
//! }
//! enable_bitmask!(Perm: u8, Perm::Read, Perm::Write, Perm::Exec);
//!
//! let mut perms = Perm::Read | Perm::Write;
//! assert!(perms.is_set(Perm::Read));
//! assert_eq!(!perms, Perm::Exec);
//! perms.set(Perm::Exec).remove(Perm::Write);
//! assert_eq!(perms, 0b101);
//! ```
//!
//! Masks of different enumerations do not interoperate:
//! ```compile_fail
//! use enum_mask::enable_bitmask;
//!
//! #[derive(Clone, Copy)]
//! enum Color {
//!     Red = 0x1,
//! }
//! enable_bitmask!(Color: u8, Color::Red);
//!
//! #[derive(Clone, Copy)]
//! enum Shape {
//!     Square = 0x1,
//! }
//! enable_bitmask!(Shape: u8, Shape::Square);
//!
//! let mixed = Color::Red | Shape::Square;
//! ```
//!
//! # Use Cases
//!
//! - Register, permission and capability words in drivers and protocol code
//! - Option sets in APIs that would otherwise take several `bool`s
//! - Any place a raw integer of OR-ed constants is passed around today and
//!   nothing stops an unrelated constant from sneaking in
//!
//! # Features
//!
//! - `#![no_std]` compatible, zero dependencies, no heap allocations
//! - One registration macro per enum: [`enable_bitmask!`], with
//!   [`enable_bitmask_external!`] for enums declared elsewhere in the crate
//! - Eligibility is a trait bound ([`BitmaskFlags`]); using an unregistered
//!   enum is a compile-time error, and there are no runtime failure paths
//! - Full bitwise algebra: `|`, `&`, `^`, `!` and the assigning forms, with
//!   flag values accepted on either side
//! - Negation complements within the registered all-flags universe rather
//!   than flipping the whole machine word
//! - Membership and mutation helpers: [`is_set`](BitMask::is_set),
//!   [`set`](BitMask::set), [`remove`](BitMask::remove),
//!   [`intersects`](BitMask::intersects)
//! - Comparisons against masks, flag values and raw integers in both
//!   operand orders; masks are `Ord + Hash` and work as container keys
//! - Every representation width from `u8`/`i8` up to `u128`/`i128`

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod bitmask;

pub use bitmask::{BitMask, BitmaskFlags, Bits};
