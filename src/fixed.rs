//! Custom fixed-width signed integer type.

//	These lint checks are unnecessary in this module because:
//	  1. We're working with GenericArray where we know the size at compile time.
//	  2. All our indexing is based on the BYTES constant which is tied to the
//	     type's size.
//	  3. Using .get() would add unnecessary runtime checks and make the code
//	     more verbose with .unwrap()s.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]

//	This lint check is unnecessary in this module because these arithmetic
//	operations are essential parts of our logic, and operate on quantities
//	that are bounded by the type's size constants.
#![allow(clippy::arithmetic_side_effects, reason = "Bounded by the type's size constants")]



//		Modules

#[cfg(test)]
#[path = "tests/fixed.rs"]
mod tests;



//		Packages

use crate::errors::{ArithmeticError, ConversionError, ParseError, ReadError};
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	error::Error,
	fmt::{Binary, Debug, Display, Formatter, self},
	hash::{Hash, Hasher},
	marker::PhantomData,
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
	str::FromStr,
};
use generic_array::{ArrayLength, GenericArray};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use std::io::{BufRead, Error as IoError, ErrorKind as IoErrorKind, Write as IoWrite};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};
use typenum::{NonZero, Quot, Sum, Unsigned, U7, U8};



//		Type aliases

/// Helper type to calculate number of bytes needed for bits.
pub type BytesForBits<BITS> = Quot<Sum<BITS, U7>, U8>;



//		Structs

//		FixedInt
/// A fixed-width signed integer of arbitrary bit length.
///
/// This type represents a two's-complement signed integer of exactly `BITS`
/// bits, covering the range `[-2^(BITS-1), 2^(BITS-1)-1]`. All arithmetic is
/// built from bitwise primitives over the storage bytes, so the width is not
/// limited to what a native machine integer can hold: `FixedInt<U1024>` is
/// as valid as `FixedInt<U8>`.
///
/// # Type parameters
///
/// * `BITS` - The number of bits used to represent the integer, as a
///            [`typenum`] unsigned type-level integer (e.g. `U64`). The width
///            must be at least one bit, which is enforced at compile time via
///            the [`NonZero`] bound.
///
/// # Arithmetic
///
/// The overflow policy is uniform and deliberate:
///
///   1. The `+`, `-`, `*` operators and unary negation saturate at the
///      numeric bounds instead of overflowing. Wraparound never happens
///      silently.
///   2. The `checked_*` methods return [`None`] on overflow, and the
///      `overflowing_*` methods return the wrapped value along with a flag.
///   3. Division uses the truncating convention: the quotient rounds towards
///      zero and the remainder takes the sign of the dividend, matching the
///      standard Rust integer types. `MIN / -1` saturates to the maximum.
///   4. Division or remainder by zero panics on the operators, as with the
///      standard integer types. The [`try_div()`](FixedInt::try_div()) and
///      [`try_rem()`](FixedInt::try_rem()) methods surface the failure as an
///      [`ArithmeticError`] instead.
///
/// # Internal representation
///
/// The value is stored as a sequence of bytes in little-endian order (least
/// significant byte first). Bit 0 is the least-significant bit of the first
/// byte, and bit `BITS - 1` is the sign bit. Any padding bits in the last
/// byte beyond the configured width are always kept clear, so that equality
/// and hashing can operate on the raw bytes.
///
/// # Conversion
///
/// Values can be constructed from a raw bit pattern, from an [`i64`] or
/// [`u64`] (fallibly, when the width is too narrow to hold the value), or
/// parsed from a decimal string of any length the width can accommodate.
///
#[derive(Clone, Copy, Default)]
pub struct FixedInt<BITS>(GenericArray<u8, BytesForBits<BITS>>)
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
;

//󰭅		FixedInt
impl<BITS> FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		Public constants
	/// Number of bits used for storage, including the sign bit.
	pub const BITS:  u16 = BITS::U16;

	/// Number of bytes used for storage.
	pub const BYTES: u16 = BytesForBits::<BITS>::U16;

	//		Private constants
	/// Mask for valid bits in the last byte.
	#[expect(
		clippy::cast_possible_truncation,
		reason = "Value is at most 255 after shift of at most 7 bits and subtraction of 1"
	)]
	const LAST_BYTE_MASK: u8 = {
		let bits = Self::BITS;
		if bits % 8 == 0 {
			0xFF
		} else {
			let shift = bits % 8;
			((1_u16 << shift) - 1) as u8
		}
	};

	/// Position of the sign bit within the last byte.
	#[expect(clippy::cast_possible_truncation, reason = "Value is at most 7 after the bitwise AND")]
	const SIGN_BIT_POS: u8 = {
		let bits = Self::BITS;
		((bits - 1) & 0x7) as u8
	};

	//		Constructors

	//		new
	/// Creates a new [`FixedInt`] from bytes.
	///
	/// The bytes are in little-endian order. Padding bits in the last byte
	/// beyond the configured width must either be clear, or (for a negative
	/// value) fully sign-extended, as produced by widening a narrower native
	/// integer. Anything else is rejected rather than silently truncated.
	///
	/// # Parameters
	///
	/// * `bytes` - The bit pattern to create the [`FixedInt`] from.
	///
	/// # Errors
	///
	/// Returns an error if the padding bits carry unexpected data.
	///
	pub fn new(bytes: GenericArray<u8, BytesForBits<BITS>>) -> Result<Self, ConversionError> {
		let mut value = bytes;
		let last      = Self::BYTES as usize - 1;
		let sign_bit  = (value[last] >> Self::SIGN_BIT_POS) & 1;
		let padding   = value[last] & !Self::LAST_BYTE_MASK;

		if padding != 0 && !(sign_bit == 1 && padding == !Self::LAST_BYTE_MASK) {
			return Err(ConversionError::ValueTooLarge);
		}

		//	Clear any padding bits in last byte
		value[last] &= Self::LAST_BYTE_MASK;

		Ok(Self(value))
	}

	//		from_bits
	/// Creates a [`FixedInt`] by adopting a bit pattern directly.
	///
	/// No conversion is performed: the bytes become the two's-complement
	/// encoding of the value. Padding bits beyond the configured width are
	/// masked off.
	///
	/// # Parameters
	///
	/// * `bytes` - The bit pattern to adopt, in little-endian order.
	///
	#[must_use]
	pub fn from_bits(bytes: GenericArray<u8, BytesForBits<BITS>>) -> Self {
		let mut value = bytes;
		value[Self::BYTES as usize - 1] &= Self::LAST_BYTE_MASK;
		Self(value)
	}

	//		from_be_bytes
	/// Creates a [`FixedInt`] from a big-endian byte slice.
	///
	/// As this type uses little-endian storage internally, this reverses the
	/// bytes before validation.
	///
	/// # Parameters
	///
	/// * `bytes` - The big-endian bytes to create the [`FixedInt`] from.
	///
	/// # Errors
	///
	/// Returns an error if the slice is not the correct length, or if the
	/// padding bits carry unexpected data.
	///
	pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, ConversionError> {
		if bytes.len() != Self::BYTES as usize {
			return Err(ConversionError::InvalidLength(bytes.len()));
		}

		let mut value = GenericArray::<u8, BytesForBits<BITS>>::default();
		for i in 0..Self::BYTES as usize {
			value[i] = bytes[Self::BYTES as usize - 1 - i];
		}

		Self::new(value)
	}

	//		from_le_bytes
	/// Creates a [`FixedInt`] from a little-endian byte slice.
	///
	/// As this type uses little-endian storage internally, this is a direct
	/// validation of the provided bytes.
	///
	/// # Parameters
	///
	/// * `bytes` - The little-endian bytes to create the [`FixedInt`] from.
	///
	/// # Errors
	///
	/// Returns an error if the slice is not the correct length, or if the
	/// padding bits carry unexpected data.
	///
	pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, ConversionError> {
		if bytes.len() != Self::BYTES as usize {
			return Err(ConversionError::InvalidLength(bytes.len()));
		}

		let mut value = GenericArray::<u8, BytesForBits<BITS>>::default();
		value.copy_from_slice(bytes);

		Self::new(value)
	}

	//		Public methods

	//		as_slice
	/// Represents the internal value as a slice of bytes, in little-endian
	/// order.
	#[must_use]
	pub const fn as_slice(&self) -> &[u8] {
		self.0.as_slice()
	}

	//		bit
	/// Gets the value of a specific bit.
	///
	/// # Parameters
	///
	/// * `pos` - The position of the bit to get, where `0` is the
	///           least-significant bit and `BITS - 1` is the sign bit.
	///
	/// # Panics
	///
	/// Panics if the position is out of range. An out-of-range bit access is
	/// a contract violation, i.e. a bug in the calling code, and not a
	/// recoverable condition.
	///
	#[expect(clippy::integer_division, reason = "Precision is not needed here")]
	#[must_use]
	pub fn bit(self, pos: u16) -> bool {
		assert!(pos < Self::BITS, "Bit index out of range");
		(self.0[(pos / 8) as usize] & (1 << (pos % 8))) != 0
	}

	//		set_bit
	/// Sets the value of a specific bit.
	///
	/// # Parameters
	///
	/// * `pos`   - The position of the bit to set, where `0` is the
	///             least-significant bit and `BITS - 1` is the sign bit.
	/// * `value` - The value to set the bit to.
	///
	/// # Panics
	///
	/// Panics if the position is out of range. An out-of-range bit access is
	/// a contract violation, i.e. a bug in the calling code, and not a
	/// recoverable condition.
	///
	#[expect(clippy::integer_division, reason = "Precision is not needed here")]
	pub fn set_bit(&mut self, pos: u16, value: bool) {
		assert!(pos < Self::BITS, "Bit index out of range");
		if value {
			self.0[(pos / 8) as usize] |=   1 << (pos % 8);
		} else {
			self.0[(pos / 8) as usize] &= !(1 << (pos % 8));
		}
	}

	//		checked_add
	/// Checked addition.
	///
	/// Computes `self + rhs`, returning [`None`] if overflow occurred.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub fn checked_add(self, rhs: Self) -> Option<Self> {
		let (result, overflowed) = self.overflowing_add(rhs);
		if overflowed {
			None
		} else {
			Some(result)
		}
	}

	//		checked_div
	/// Checked division.
	///
	/// Computes `self / rhs` with the quotient truncated towards zero,
	/// returning [`None`] if `rhs` is zero or if the quotient does not fit
	/// (which only happens for `MIN / -1`).
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_div(self, rhs: Self) -> Option<Self> {
		if rhs.is_zero() {
			return None;
		}

		//	MIN / -1 would be +2^(BITS-1), which is not representable
		if self == Self::min_value() && rhs == -Self::one() {
			return None;
		}

		//	Quotient is negative iff the operand signs differ
		let negative      = self.is_negative() != rhs.is_negative();
		let (quotient, _) = self.magnitude().magnitude_divmod(rhs.magnitude());

		Self::apply_sign(quotient, negative)
	}

	//		checked_mul
	/// Checked multiplication.
	///
	/// Computes `self * rhs`, returning [`None`] if overflow occurred.
	///
	/// The product is formed by shift-and-add over the sign-stripped
	/// magnitudes: for each set bit `i` of the multiplier, `|self| << i` is
	/// accumulated, stopping as soon as any partial result spills past the
	/// available width. The sign is applied at the end.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub fn checked_mul(self, rhs: Self) -> Option<Self> {
		if self.is_zero() || rhs.is_zero() {
			return Some(Self::zero());
		}

		let negative = self.is_negative() != rhs.is_negative();
		let mag_a    = self.magnitude();
		let mag_b    = rhs.magnitude();

		//	Shifting the multiplicand by more than this loses set bits, at
		//	which point the true magnitude no longer fits in the width
		let headroom = mag_a.leading_zeros();
		let mut acc  = Self::zero();

		for i in 0..Self::BITS {
			if !mag_b.bit(i) {
				continue;
			}
			if i > headroom {
				return None;
			}
			let (sum, spilled) = acc.overflowing_unsigned_add(mag_a << u32::from(i));
			if spilled {
				return None;
			}
			acc = sum;
		}

		Self::apply_sign(acc, negative)
	}

	//		checked_neg
	/// Checked negation.
	///
	/// Computes `-self`, returning [`None`] if `self` is the minimum value,
	/// whose negation is not representable.
	///
	#[must_use]
	pub fn checked_neg(self) -> Option<Self> {
		let (result, overflowed) = self.overflowing_neg();
		if overflowed {
			None
		} else {
			Some(result)
		}
	}

	//		checked_rem
	/// Checked remainder.
	///
	/// Computes `self % rhs` under the truncating convention, where the
	/// remainder takes the sign of the dividend. Returns [`None`] if `rhs`
	/// is zero.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_rem(self, rhs: Self) -> Option<Self> {
		if rhs.is_zero() {
			return None;
		}

		//	The remainder's magnitude is strictly less than the divisor's, so
		//	it is always representable with either sign, including MIN % -1,
		//	which is zero
		let (_, remainder) = self.magnitude().magnitude_divmod(rhs.magnitude());

		Self::apply_sign(remainder, self.is_negative())
	}

	//		checked_sub
	/// Checked subtraction.
	///
	/// Computes `self - rhs`, returning [`None`] if overflow occurred.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub fn checked_sub(self, rhs: Self) -> Option<Self> {
		let (result, overflowed) = self.overflowing_sub(rhs);
		if overflowed {
			None
		} else {
			Some(result)
		}
	}

	//		is_negative
	/// Determines if the value is negative, i.e. whether the sign bit is set.
	#[must_use]
	pub fn is_negative(self) -> bool {
		(self.0[Self::BYTES as usize - 1] >> Self::SIGN_BIT_POS) & 1 == 1
	}

	//		is_zero
	/// Determines if the value is zero, i.e. whether no bit is set.
	#[must_use]
	pub fn is_zero(self) -> bool {
		self.0.iter().all(|&b| b == 0)
	}

	//		leading_zeros
	/// Counts the number of leading zeroes in the binary representation of
	/// the value.
	///
	/// If the value is zero, the result is the number of bits in the value.
	///
	#[expect(clippy::integer_division, reason = "Precision is not needed here")]
	#[must_use]
	pub fn leading_zeros(self) -> u16 {
		let mut count = 0;

		for i in (0..Self::BITS).rev() {
			let byte_idx = (i / 8) as usize;
			let bit_idx  =  i % 8;
			if (self.0[byte_idx] & (1 << bit_idx)) != 0 {
				break;
			}
			count += 1;
		}
		count
	}

	//		max_value
	/// The maximum value for a [`FixedInt`], i.e. `2^(BITS-1) - 1`.
	///
	/// Ideally this would be a constant, but that's not possible just yet
	/// until Rust stabilises const generic expressions.
	///
	#[must_use]
	pub fn max_value() -> Self {
		let mut result = GenericArray::<u8, BytesForBits<BITS>>::default();
		result.iter_mut().for_each(|b| *b = 0xFF);
		let last_idx      = result.len() - 1;
		result[last_idx] &= Self::LAST_BYTE_MASK >> 1_i32;
		Self(result)
	}

	//		min_value
	/// The minimum value for a [`FixedInt`], i.e. `-2^(BITS-1)`.
	///
	/// Ideally this would be a constant, but that's not possible just yet
	/// until Rust stabilises const generic expressions.
	///
	#[must_use]
	pub fn min_value() -> Self {
		let mut result   = GenericArray::<u8, BytesForBits<BITS>>::default();
		let last_idx     = result.len() - 1;
		result[last_idx] = 1 << Self::SIGN_BIT_POS;
		Self(result)
	}

	//		one
	/// The value of `1` as a [`FixedInt`].
	///
	/// A 1-bit width cannot represent `1`: its only values are `-1` and `0`,
	/// and the returned pattern (bit 0 set) is the sign bit, denoting `-1`.
	#[must_use]
	pub fn one() -> Self {
		let mut result = GenericArray::default();
		result[0]      = 1;
		Self(result)
	}

	//		overflowing_add
	/// Overflowing addition.
	///
	/// Computes `self + rhs`, returning a tuple of the wrapped result and a
	/// boolean indicating whether a signed arithmetic overflow occurred.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
		let result = self.wrapping_add(rhs);

		//	Signed overflow iff both operands share a sign that the result
		//	lacks, which is equivalent to the carry into the sign bit
		//	differing from the carry out of it
		let overflowed = self.is_negative() == rhs.is_negative()
			&& result.is_negative() != self.is_negative();

		(result, overflowed)
	}

	//		overflowing_neg
	/// Overflowing negation.
	///
	/// Computes `-self` as the bitwise complement plus one. Negation
	/// overflows exactly when `self` is the minimum value, in which case the
	/// original value is returned unchanged along with a `true` flag.
	///
	#[must_use]
	pub fn overflowing_neg(self) -> (Self, bool) {
		if self == Self::min_value() {
			return (self, true);
		}
		(Self(Self::negate_pattern(&self.0)), false)
	}

	//		overflowing_sub
	/// Overflowing subtraction.
	///
	/// Computes `self - rhs`, returning a tuple of the wrapped result and a
	/// boolean indicating whether a signed arithmetic overflow occurred.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
		let result = self.wrapping_sub(rhs);

		//	Signed overflow iff the operands differ in sign and the result
		//	has the subtrahend's sign
		let overflowed = self.is_negative() != rhs.is_negative()
			&& result.is_negative() == rhs.is_negative();

		(result, overflowed)
	}

	//		parse
	/// Parses a decimal string into a [`FixedInt`].
	///
	/// This is a convenience method equivalent to calling
	/// [`str::parse()`]; see the [`FromStr`] implementation for the accepted
	/// format.
	///
	/// # Parameters
	///
	/// * `s` - The string to parse.
	///
	/// # Errors
	///
	/// If the number is invalid or out of range, an error will be returned.
	///
	pub fn parse(s: &str) -> Result<Self, ParseError> {
		s.parse()
	}

	//		read_from
	/// Reads one whitespace-delimited number token from a buffered reader
	/// and parses it.
	///
	/// Leading whitespace is skipped; the token ends at the next whitespace
	/// character or at end of input, whichever comes first. The terminating
	/// whitespace is left unconsumed. This is a thin adapter over the string
	/// parser for console-style input.
	///
	/// # Parameters
	///
	/// * `reader` - The character source to read from.
	///
	/// # Errors
	///
	/// Returns an error if the underlying reader fails, or if the token is
	/// not a valid number for this width.
	///
	pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Self, ReadError> {
		let mut token = String::new();

		loop {
			//	Scan the buffered bytes first, then tell the reader how many
			//	were taken, so the terminating whitespace stays unconsumed
			let (used, done) = {
				let buffer = reader.fill_buf()?;
				if buffer.is_empty() {
					(0, true)
				} else {
					let mut used = 0;
					let mut done = false;
					for &byte in buffer {
						if byte.is_ascii_whitespace() {
							if token.is_empty() {
								//	Still skipping leading whitespace
								used += 1;
								continue;
							}
							done = true;
							break;
						}
						token.push(char::from(byte));
						used += 1;
					}
					(used, done)
				}
			};
			reader.consume(used);
			if done {
				break;
			}
		}

		Ok(token.parse()?)
	}

	//		saturating_add
	/// Saturating addition.
	///
	/// Computes `self + rhs`, saturating at the numeric bounds instead of
	/// overflowing.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub fn saturating_add(self, rhs: Self) -> Self {
		let (result, overflowed) = self.overflowing_add(rhs);
		if overflowed {
			//	Overflow requires both operands to share a sign, which picks
			//	the bound
			if self.is_negative() {
				Self::min_value()
			} else {
				Self::max_value()
			}
		} else {
			result
		}
	}

	//		saturating_div
	/// Saturating division.
	///
	/// Computes `self / rhs` with the quotient truncated towards zero,
	/// saturating at the numeric bounds instead of overflowing. The only
	/// overflowing case is `MIN / -1`, which saturates to the maximum.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn saturating_div(self, rhs: Self) -> Self {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		self.checked_div(rhs).unwrap_or_else(Self::max_value)
	}

	//		saturating_from_i64
	/// Converts a native signed integer, clamping to the representable range.
	///
	/// Where [`TryFrom`] fails when the width is too narrow for the value,
	/// this conversion saturates instead, consistently with the arithmetic
	/// operators. It is the conversion used by the mixed-operand operators.
	///
	/// # Parameters
	///
	/// * `value` - The value to convert.
	///
	#[must_use]
	pub fn saturating_from_i64(value: i64) -> Self {
		Self::try_from(value).unwrap_or_else(|_| {
			if value < 0 {
				Self::min_value()
			} else {
				Self::max_value()
			}
		})
	}

	//		saturating_mul
	/// Saturating multiplication.
	///
	/// Computes `self * rhs`, saturating at the numeric bounds instead of
	/// overflowing.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub fn saturating_mul(self, rhs: Self) -> Self {
		self.checked_mul(rhs).unwrap_or_else(|| {
			if self.is_negative() == rhs.is_negative() {
				Self::max_value()
			} else {
				Self::min_value()
			}
		})
	}

	//		saturating_neg
	/// Saturating negation.
	///
	/// Computes `-self`, saturating to the maximum value when `self` is the
	/// minimum value.
	///
	#[must_use]
	pub fn saturating_neg(self) -> Self {
		self.checked_neg().unwrap_or_else(Self::max_value)
	}

	//		saturating_sub
	/// Saturating subtraction.
	///
	/// Computes `self - rhs`, saturating at the numeric bounds instead of
	/// overflowing.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub fn saturating_sub(self, rhs: Self) -> Self {
		let (result, overflowed) = self.overflowing_sub(rhs);
		if overflowed {
			//	Overflow requires the operands to differ in sign, so the
			//	minuend's sign picks the bound
			if self.is_negative() {
				Self::min_value()
			} else {
				Self::max_value()
			}
		} else {
			result
		}
	}

	//		to_be_bytes
	/// Returns the bytes in big-endian order.
	///
	/// As this type uses little-endian storage internally, this reverses the
	/// bytes before returning.
	///
	#[must_use]
	pub fn to_be_bytes(&self) -> GenericArray<u8, BytesForBits<BITS>> {
		let mut value = GenericArray::<u8, BytesForBits<BITS>>::default();
		for i in 0..Self::BYTES as usize {
			value[i] = self.0[Self::BYTES as usize - 1 - i];
		}
		value
	}

	//		to_le_bytes
	/// Returns the bytes in little-endian order.
	///
	/// As this type uses little-endian storage internally, this is a direct
	/// copy of the internal representation.
	///
	#[must_use]
	pub const fn to_le_bytes(&self) -> GenericArray<u8, BytesForBits<BITS>> {
		self.0
	}

	//		try_div
	/// Fallible division.
	///
	/// Computes `self / rhs` with the quotient truncated towards zero,
	/// surfacing division by zero and overflow as recoverable errors rather
	/// than panicking or producing a silent result.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::DivideByZero`] if `rhs` is zero, and
	/// [`ArithmeticError::Overflow`] for `MIN / -1`.
	///
	pub fn try_div(self, rhs: Self) -> Result<Self, ArithmeticError> {
		if rhs.is_zero() {
			return Err(ArithmeticError::DivideByZero);
		}
		self.checked_div(rhs).ok_or(ArithmeticError::Overflow)
	}

	//		try_rem
	/// Fallible remainder.
	///
	/// Computes `self % rhs` under the truncating convention, surfacing
	/// division by zero as a recoverable error rather than panicking or
	/// producing a silent result.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::DivideByZero`] if `rhs` is zero.
	///
	pub fn try_rem(self, rhs: Self) -> Result<Self, ArithmeticError> {
		if rhs.is_zero() {
			return Err(ArithmeticError::DivideByZero);
		}
		self.checked_rem(rhs).ok_or(ArithmeticError::Overflow)
	}

	//		wrapping_add
	/// Wrapping addition.
	///
	/// Computes `self + rhs`, wrapping around at the boundary of the type.
	/// The carry chain is simulated byte by byte from the least-significant
	/// end.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub fn wrapping_add(self, rhs: Self) -> Self {
		self.overflowing_unsigned_add(rhs).0
	}

	//		wrapping_sub
	/// Wrapping subtraction.
	///
	/// Computes `self - rhs`, wrapping around at the boundary of the type.
	/// The borrow chain is simulated byte by byte from the least-significant
	/// end.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub fn wrapping_sub(self, rhs: Self) -> Self {
		let mut result = GenericArray::<u8, BytesForBits<BITS>>::default();
		let mut borrow = 0_u8;

		for i in 0..Self::BYTES as usize {
			let (diff1, b1) = self.0[i].overflowing_sub(rhs.0[i]);
			let (diff2, b2) = diff1.overflowing_sub(borrow);
			result[i]       = diff2;
			borrow          = u8::from(b1 || b2);
		}

		//	Clear any padding bits in last byte
		result[Self::BYTES as usize - 1] &= Self::LAST_BYTE_MASK;

		Self(result)
	}

	//		write_to
	/// Writes the decimal form of the value to a writer.
	///
	/// This is a thin adapter over the [`Display`] implementation for
	/// console-style output.
	///
	/// # Parameters
	///
	/// * `writer` - The sink to write to.
	///
	/// # Errors
	///
	/// Returns an error if the underlying writer fails.
	///
	pub fn write_to<W: IoWrite>(&self, writer: &mut W) -> Result<(), IoError> {
		write!(writer, "{self}")
	}

	//		zero
	/// The value of `0` as a [`FixedInt`].
	#[must_use]
	pub fn zero() -> Self {
		Self(GenericArray::default())
	}

	//		Private methods

	//		apply_sign
	/// Converts an unsigned magnitude pattern into a signed value.
	///
	/// Returns [`None`] if the magnitude does not fit: a magnitude with the
	/// top bit set is only representable when negative, and then only when
	/// it is exactly `2^(BITS-1)`, i.e. the minimum value.
	///
	fn apply_sign(magnitude: Self, negative: bool) -> Option<Self> {
		let top_bit_set = magnitude.is_negative();
		if negative {
			if top_bit_set && magnitude != Self::min_value() {
				return None;
			}
			Some(Self(Self::negate_pattern(&magnitude.0)))
		} else if top_bit_set {
			None
		} else {
			Some(magnitude)
		}
	}

	//		magnitude
	/// The unsigned N-bit pattern of the absolute value.
	///
	/// For the minimum value this is `2^(BITS-1)`, which is representable as
	/// an unsigned pattern even though its signed negation is not. Callers
	/// treat the result with unsigned semantics.
	///
	fn magnitude(self) -> Self {
		if self.is_negative() {
			Self(Self::negate_pattern(&self.0))
		} else {
			self
		}
	}

	//		magnitude_divmod
	/// Restoring binary long division over unsigned magnitude patterns.
	///
	/// Walks the dividend from the most-significant bit downwards, shifting
	/// each bit into a running remainder and subtracting the divisor
	/// whenever the remainder can bear it, recording a quotient bit at that
	/// position. Comparisons and subtraction are unsigned throughout. The
	/// divisor must be non-zero.
	///
	fn magnitude_divmod(self, divisor: Self) -> (Self, Self) {
		let mut quotient  = Self::zero();
		let mut remainder = Self::zero();

		for i in (0..Self::BITS).rev() {
			remainder = remainder << 1_u32;
			if self.bit(i) {
				remainder.0[0] |= 1;
			}

			if Self::cmp_unsigned(&remainder, &divisor) != Ordering::Less {
				remainder = remainder.wrapping_sub(divisor);
				quotient.set_bit(i, true);
			}
		}

		(quotient, remainder)
	}

	//		cmp_unsigned
	/// Compares two bit patterns as unsigned quantities, most-significant
	/// byte first.
	fn cmp_unsigned(a: &Self, b: &Self) -> Ordering {
		for i in (0..Self::BYTES as usize).rev() {
			match a.0[i].cmp(&b.0[i]) {
				Ordering::Equal => {},
				other           => return other,
			}
		}
		Ordering::Equal
	}

	//		negate_pattern
	/// Two's-complement negation of a raw bit pattern: bitwise complement
	/// plus one, with the carry propagated byte by byte.
	fn negate_pattern(bytes: &GenericArray<u8, BytesForBits<BITS>>) -> GenericArray<u8, BytesForBits<BITS>> {
		let mut result = GenericArray::<u8, BytesForBits<BITS>>::default();
		let mut carry  = 1_u8;

		for i in 0..Self::BYTES as usize {
			let (sum, new_carry) = (!bytes[i]).overflowing_add(carry);
			result[i] = sum;
			carry     = u8::from(new_carry);
		}

		//	Clear any padding bits in last byte
		result[Self::BYTES as usize - 1] &= Self::LAST_BYTE_MASK;

		result
	}

	//		overflowing_unsigned_add
	/// Byte-wise ripple-carry addition, reporting whether the sum spilled
	/// past bit `BITS - 1` when the patterns are read as unsigned.
	fn overflowing_unsigned_add(self, rhs: Self) -> (Self, bool) {
		let mut result = GenericArray::<u8, BytesForBits<BITS>>::default();
		let mut carry  = 0_u8;

		for i in 0..Self::BYTES as usize {
			let (sum1, c1) = self.0[i].overflowing_add(rhs.0[i]);
			let (sum2, c2) = sum1.overflowing_add(carry);
			result[i]      = sum2;
			carry          = u8::from(c1 || c2);
		}

		let last    = Self::BYTES as usize - 1;
		let spilled = carry != 0 || (result[last] & !Self::LAST_BYTE_MASK) != 0;

		//	Clear any padding bits in last byte
		result[last] &= Self::LAST_BYTE_MASK;

		(Self(result), spilled)
	}
}

//󰭅		Add
impl<BITS> Add for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = Self;

	//		add
	fn add(self, rhs: Self) -> Self::Output {
		self.saturating_add(rhs)
	}
}

//󰭅		Add: FixedInt + i64
impl<BITS> Add<i64> for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = Self;

	//		add
	fn add(self, rhs: i64) -> Self::Output {
		self + Self::saturating_from_i64(rhs)
	}
}

//󰭅		Add: i64 + FixedInt
impl<BITS> Add<FixedInt<BITS>> for i64
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = FixedInt<BITS>;

	//		add
	fn add(self, rhs: FixedInt<BITS>) -> Self::Output {
		FixedInt::saturating_from_i64(self) + rhs
	}
}

//󰭅		AddAssign
impl<BITS> AddAssign for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		add_assign
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

//󰭅		Binary
impl<BITS> Binary for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			write!(f, "0b")?;
		}

		//	Find first non-zero byte (or last byte if all zero)
		let mut start = Self::BYTES as usize - 1;
		while start > 0 && self.0[start] == 0 {
			start -= 1;
		}

		//	Handle first byte without leading zeros; padding bits are
		//	invariantly clear so no masking is needed
		write!(f, "{:b}", self.0[start])?;

		//	Handle remaining bytes with full width
		for &byte in self.0[..start].iter().rev() {
			write!(f, "{byte:08b}")?;
		}

		Ok(())
	}
}

//󰭅		BitAnd
impl<BITS> BitAnd for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = Self;

	//		bitand
	fn bitand(self, rhs: Self) -> Self::Output {
		let mut result = GenericArray::<u8, BytesForBits<BITS>>::default();

		for i in 0..Self::BYTES as usize {
			result[i] = self.0[i] & rhs.0[i];
		}

		//	No need to mask the result as both inputs are already properly masked
		Self(result)
	}
}

//󰭅		BitAndAssign
impl<BITS> BitAndAssign for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		bitand_assign
	fn bitand_assign(&mut self, rhs: Self) {
		*self = *self & rhs;
	}
}

//󰭅		BitXor
impl<BITS> BitXor for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = Self;

	//		bitxor
	fn bitxor(self, rhs: Self) -> Self::Output {
		let mut result = GenericArray::<u8, BytesForBits<BITS>>::default();

		for i in 0..Self::BYTES as usize {
			result[i] = self.0[i] ^ rhs.0[i];
		}

		//	No need to mask the result as both inputs are already properly masked
		Self(result)
	}
}

//󰭅		BitXorAssign
impl<BITS> BitXorAssign for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		bitxor_assign
	fn bitxor_assign(&mut self, rhs: Self) {
		*self = *self ^ rhs;
	}
}

//󰭅		Debug
impl<BITS> Debug for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Standard format - FixedInt<bits>(value)
		write!(f, "FixedInt::<{}>({})", Self::BITS, self)?;

		//	For alternate formatting (#), show byte array
		if f.alternate() {
			write!(f, " [")?;
			for (i, byte) in self.0.iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "0x{byte:02x}")?;
			}
			write!(f, "]")?;
		}

		Ok(())
	}
}

//󰭅		Deserialize
impl<'de, BITS> Deserialize<'de> for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		deserialize
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(ValueVisitor::<BITS>(PhantomData))
		} else {
			//	For binary formats, expect raw bytes
			deserializer.deserialize_bytes(BytesVisitor::<BITS>(PhantomData))
		}
	}
}

//󰭅		Display
impl<BITS> Display for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Handle zero case
		if self.is_zero() {
			return write!(f, "0");
		}

		//	For negative numbers, output minus and format the magnitude. The
		//	magnitude is an unsigned pattern, so even the minimum value is
		//	covered without overflowing
		if self.is_negative() {
			write!(f, "-")?;
		}
		let mut magnitude = self.magnitude();

		//	Convert to decimal digits
		let mut digits = Vec::new();

		//	For widths that can't store 10 (1-3 bits), the magnitude is a
		//	single digit
		if Self::BITS < 4 {
			digits.push(match char::from_digit(u32::from(magnitude.0[0]), 10) {
				Some(d) => d,
				None    => return Err(fmt::Error),
			});
		} else {
			//	Create 10 - safe now as we know we have enough bits
			let ten = {
				let mut bytes = GenericArray::<u8, BytesForBits<BITS>>::default();
				bytes[0]      = 10;
				Self(bytes)
			};

			//	Repeated divmod by 10, least-significant digit first
			while !magnitude.is_zero() {
				let (quotient, remainder) = magnitude.magnitude_divmod(ten);
				magnitude = quotient;
				digits.push(match char::from_digit(u32::from(remainder.0[0]), 10) {
					Some(d) => d,
					None    => return Err(fmt::Error),
				});
			}
		}

		//	Write digits in reverse order
		for digit in digits.iter().rev() {
			write!(f, "{digit}")?;
		}

		Ok(())
	}
}

//󰭅		Div
impl<BITS> Div for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = Self;

	//		div
	fn div(self, rhs: Self) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		self.saturating_div(rhs)
	}
}

//󰭅		Div: FixedInt / i64
impl<BITS> Div<i64> for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = Self;

	//		div
	fn div(self, rhs: i64) -> Self::Output {
		self / Self::saturating_from_i64(rhs)
	}
}

//󰭅		Div: i64 / FixedInt
impl<BITS> Div<FixedInt<BITS>> for i64
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = FixedInt<BITS>;

	//		div
	fn div(self, rhs: FixedInt<BITS>) -> Self::Output {
		FixedInt::saturating_from_i64(self) / rhs
	}
}

//󰭅		DivAssign
impl<BITS> DivAssign for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		div_assign
	fn div_assign(&mut self, rhs: Self) {
		*self = *self / rhs;
	}
}

//󰭅		FromSql
impl<'a, BITS> FromSql<'a> for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		from_sql
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT8 => Ok(Self::try_from(i64::from_sql(ty, raw)?).map_err(Box::new)?),
			&Type::TEXT => Ok(
				String::from_utf8(raw.to_vec()).map_err(Box::new)?.parse::<Self>().map_err(Box::new)?
			),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for FixedInt<{}>: {}", Self::BITS, unknown),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT8 | Type::TEXT)
	}
}

//󰭅		FromStr
impl<BITS> FromStr for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Err = ParseError;

	//		from_str
	/// Parses a decimal string into a [`FixedInt`].
	///
	/// The accepted format is an optional single leading `+` or `-` followed
	/// by one or more ASCII digits. Nothing else: no whitespace, no radix
	/// prefixes, no digit separators. A sign anywhere but the first position
	/// is reported as an invalid digit.
	///
	/// Digits accumulate into a negative running total using the type's own
	/// checked arithmetic, so the minimum value parses without needing a
	/// wider intermediate; positive inputs are negated once at the end.
	///
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.is_empty() {
			return Err(ParseError::Empty);
		}

		let (digits, negative) = match s.as_bytes()[0] {
			b'+' => (s.get(1..).unwrap_or(""), false),
			b'-' => (s.get(1..).unwrap_or(""), true),
			_    => (s, false),
		};

		if digits.is_empty() {
			return Err(ParseError::Empty);
		}

		//	Widths where ten is not a representable positive value (1-4 bits)
		//	go through native arithmetic instead
		if Self::BITS < 5 {
			let min       = -(1_i64 << (Self::BITS - 1));
			let mut value = 0_i64;
			for c in digits.chars() {
				let digit = c.to_digit(10).ok_or(ParseError::InvalidDigit(c))?;
				value     = value * 10 - i64::from(digit);
				if value < min {
					return Err(ParseError::OutOfRange);
				}
			}
			if !negative {
				value = -value;
			}
			return Self::try_from(value).map_err(|_| ParseError::OutOfRange);
		}

		//	Create 10 - safe now as we know we have enough bits
		let ten = {
			let mut bytes = GenericArray::<u8, BytesForBits<BITS>>::default();
			bytes[0]      = 10;
			Self(bytes)
		};

		//	Accumulate negatively so that the minimum value parses cleanly
		let mut acc = Self::zero();
		for c in digits.chars() {
			let digit = c.to_digit(10).ok_or(ParseError::InvalidDigit(c))?;
			let digit = {
				let mut bytes = GenericArray::<u8, BytesForBits<BITS>>::default();
				#[expect(clippy::cast_possible_truncation, reason = "Digit value is at most 9")]
				{ bytes[0]    = digit as u8; }
				Self(bytes)
			};
			acc = acc.checked_mul(ten).ok_or(ParseError::OutOfRange)?;
			acc = acc.checked_sub(digit).ok_or(ParseError::OutOfRange)?;
		}

		if negative {
			Ok(acc)
		} else {
			acc.checked_neg().ok_or(ParseError::OutOfRange)
		}
	}
}

//󰭅		Mul
impl<BITS> Mul for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = Self;

	//		mul
	fn mul(self, rhs: Self) -> Self::Output {
		self.saturating_mul(rhs)
	}
}

//󰭅		Mul: FixedInt * i64
impl<BITS> Mul<i64> for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = Self;

	//		mul
	fn mul(self, rhs: i64) -> Self::Output {
		self * Self::saturating_from_i64(rhs)
	}
}

//󰭅		Mul: i64 * FixedInt
impl<BITS> Mul<FixedInt<BITS>> for i64
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = FixedInt<BITS>;

	//		mul
	fn mul(self, rhs: FixedInt<BITS>) -> Self::Output {
		FixedInt::saturating_from_i64(self) * rhs
	}
}

//󰭅		MulAssign
impl<BITS> MulAssign for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		mul_assign
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

//󰭅		Neg
impl<BITS> Neg for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = Self;

	//		neg
	fn neg(self) -> Self::Output {
		self.saturating_neg()
	}
}

//󰭅		Not
impl<BITS> Not for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = Self;

	//		not
	fn not(self) -> Self::Output {
		let mut result = GenericArray::<u8, BytesForBits<BITS>>::default();

		for i in 0..Self::BYTES as usize {
			result[i] = !self.0[i];
		}

		//	Must mask the result as NOT will set padding bits
		result[Self::BYTES as usize - 1] &= Self::LAST_BYTE_MASK;
		Self(result)
	}
}

//󰭅		Eq
//	Implemented manually rather than derived so that no `Eq` bound is placed
//	on the `BITS` type parameter, which is a type-level integer marker.
impl<BITS> Eq for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{}

//󰭅		Hash
//	Implemented manually rather than derived so that no `Hash` bound is placed
//	on the `BITS` type parameter, which is a type-level integer marker.
impl<BITS> Hash for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		hash
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.hash(state);
	}
}

//󰭅		Ord
impl<BITS> Ord for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		cmp
	/// Total order over the signed values.
	///
	/// Differing sign bits order the negative value first; with equal signs
	/// the two's-complement patterns compare correctly as unsigned byte
	/// strings. Deriving this from subtraction would break totality whenever
	/// the subtraction itself overflows (e.g. comparing the minimum against
	/// the maximum), so the comparison is done on the bit patterns instead.
	///
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.is_negative(), other.is_negative()) {
			(true, false) => Ordering::Less,
			(false, true) => Ordering::Greater,
			_             => Self::cmp_unsigned(self, other),
		}
	}
}

//󰭅		PartialEq
//	Implemented manually rather than derived so that no `PartialEq` bound is
//	placed on the `BITS` type parameter, which is a type-level integer marker.
impl<BITS> PartialEq for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		eq
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

//󰭅		PartialEq: FixedInt == i64
impl<BITS> PartialEq<i64> for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		eq
	fn eq(&self, other: &i64) -> bool {
		Self::try_from(*other).is_ok_and(|o| *self == o)
	}
}

//󰭅		PartialEq: i64 == FixedInt
impl<BITS> PartialEq<FixedInt<BITS>> for i64
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		eq
	fn eq(&self, other: &FixedInt<BITS>) -> bool {
		other == self
	}
}

//󰭅		PartialOrd
impl<BITS> PartialOrd for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		partial_cmp
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		PartialOrd: FixedInt vs i64
impl<BITS> PartialOrd<i64> for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		partial_cmp
	fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
		Some(match Self::try_from(*other) {
			Ok(converted)        => self.cmp(&converted),
			//	The native value lies beyond this width's range, so its sign
			//	alone decides the ordering
			Err(_) if *other < 0 => Ordering::Greater,
			Err(_)               => Ordering::Less,
		})
	}
}

//󰭅		PartialOrd: i64 vs FixedInt
impl<BITS> PartialOrd<FixedInt<BITS>> for i64
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		partial_cmp
	fn partial_cmp(&self, other: &FixedInt<BITS>) -> Option<Ordering> {
		other.partial_cmp(self).map(Ordering::reverse)
	}
}

//󰭅		Rem
impl<BITS> Rem for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = Self;

	//		rem
	#[expect(clippy::expect_used, reason = "Infallible once the divisor is known to be non-zero")]
	fn rem(self, rhs: Self) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to calculate remainder with a divisor of zero");
		self.checked_rem(rhs).expect("Remainder cannot overflow")
	}
}

//󰭅		Rem: FixedInt % i64
impl<BITS> Rem<i64> for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = Self;

	//		rem
	fn rem(self, rhs: i64) -> Self::Output {
		self % Self::saturating_from_i64(rhs)
	}
}

//󰭅		Rem: i64 % FixedInt
impl<BITS> Rem<FixedInt<BITS>> for i64
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = FixedInt<BITS>;

	//		rem
	fn rem(self, rhs: FixedInt<BITS>) -> Self::Output {
		FixedInt::saturating_from_i64(self) % rhs
	}
}

//󰭅		RemAssign
impl<BITS> RemAssign for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		rem_assign
	fn rem_assign(&mut self, rhs: Self) {
		*self = *self % rhs;
	}
}

//󰭅		Serialize
impl<BITS> Serialize for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		serialize
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	For JSON and similar formats, serialise as a number if it
			//	fits in an i64, falling back to a string for wider values
			if let Ok(v) = i64::try_from(*self) {
				return serializer.serialize_i64(v);
			}
			serializer.serialize_str(&self.to_string())
		} else {
			//	For binary formats, serialise raw bytes
			serializer.serialize_bytes(&self.0)
		}
	}
}

//󰭅		Shl
impl<BITS> Shl<u32> for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = Self;

	//		shl
	/// Logical left shift: bits shifted past the width are discarded, and
	/// vacated positions are zero-filled. Shifting by the full width or more
	/// yields zero.
	fn shl(self, rhs: u32) -> Self::Output {
		if rhs >= u32::from(Self::BITS) {
			return Self::zero();
		}
		if rhs == 0 {
			return self;
		}

		let mut result = GenericArray::<u8, BytesForBits<BITS>>::default();

		//	Calculate byte and bit offsets
		#[expect(clippy::integer_division, reason = "Precision is not needed here")]
		let byte_shift = (rhs / 8) as usize;
		#[expect(clippy::cast_possible_truncation, reason = "Value is at most 7 after the modulo")]
		let bit_shift  = (rhs % 8) as u8;

		if bit_shift == 0 {
			//	Simple case - byte aligned shift
			for i in byte_shift..Self::BYTES as usize {
				result[i] = self.0[i - byte_shift];
			}
		} else {
			//	Complex case - bits cross byte boundaries
			for i in byte_shift..Self::BYTES as usize {
				//	Get the main bits from the current byte
				let mut byte = self.0[i - byte_shift] << bit_shift;

				//	Get the remaining bits from the previous byte
				if i > byte_shift {
					byte |= self.0[i - byte_shift - 1] >> (8 - bit_shift);
				}

				result[i] = byte;
			}
		}

		//	Clear any padding bits in last byte
		result[Self::BYTES as usize - 1] &= Self::LAST_BYTE_MASK;

		Self(result)
	}
}

//󰭅		ShlAssign
impl<BITS> ShlAssign<u32> for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		shl_assign
	fn shl_assign(&mut self, rhs: u32) {
		*self = *self << rhs;
	}
}

//󰭅		Shr
impl<BITS> Shr<u32> for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = Self;

	//		shr
	/// Logical right shift: vacated positions are zero-filled regardless of
	/// the sign bit. Callers that need an arithmetic shift compose it
	/// explicitly. Shifting by the full width or more yields zero.
	fn shr(self, rhs: u32) -> Self::Output {
		if rhs >= u32::from(Self::BITS) {
			return Self::zero();
		}
		if rhs == 0 {
			return self;
		}

		let mut result = GenericArray::<u8, BytesForBits<BITS>>::default();

		//	Calculate byte and bit offsets
		#[expect(clippy::integer_division, reason = "Precision is not needed here")]
		let byte_shift = (rhs / 8) as usize;
		#[expect(clippy::cast_possible_truncation, reason = "Value is at most 7 after the modulo")]
		let bit_shift  = (rhs % 8) as u8;

		if bit_shift == 0 {
			//	Simple case - byte aligned shift
			for i in 0..Self::BYTES as usize - byte_shift {
				result[i] = self.0[i + byte_shift];
			}
		} else {
			//	Complex case - bits cross byte boundaries
			for i in 0..Self::BYTES as usize - byte_shift {
				//	Get the main bits from the current byte
				let mut byte = self.0[i + byte_shift] >> bit_shift;

				//	Get the remaining bits from the next byte
				if i + byte_shift + 1 < Self::BYTES as usize {
					byte |= self.0[i + byte_shift + 1] << (8 - bit_shift);
				}

				result[i] = byte;
			}
		}

		//	Clear any padding bits in last byte
		result[Self::BYTES as usize - 1] &= Self::LAST_BYTE_MASK;

		Self(result)
	}
}

//󰭅		ShrAssign
impl<BITS> ShrAssign<u32> for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		shr_assign
	fn shr_assign(&mut self, rhs: u32) {
		*self = *self >> rhs;
	}
}

//󰭅		Sub
impl<BITS> Sub for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = Self;

	//		sub
	fn sub(self, rhs: Self) -> Self::Output {
		self.saturating_sub(rhs)
	}
}

//󰭅		Sub: FixedInt - i64
impl<BITS> Sub<i64> for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = Self;

	//		sub
	fn sub(self, rhs: i64) -> Self::Output {
		self - Self::saturating_from_i64(rhs)
	}
}

//󰭅		Sub: i64 - FixedInt
impl<BITS> Sub<FixedInt<BITS>> for i64
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Output = FixedInt<BITS>;

	//		sub
	fn sub(self, rhs: FixedInt<BITS>) -> Self::Output {
		FixedInt::saturating_from_i64(self) - rhs
	}
}

//󰭅		SubAssign
impl<BITS> SubAssign for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		sub_assign
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

//󰭅		ToSql
impl<BITS> ToSql for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		to_sql
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT8 => i64::try_from(*self)?.to_sql(ty, out),
			&Type::TEXT => self.to_string().to_sql(ty, out),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for FixedInt<{}>: {}", Self::BITS, unknown),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT8 | Type::TEXT)
	}

	to_sql_checked!();
}

//󰭅		TryFrom: i64 -> FixedInt
impl<BITS> TryFrom<i64> for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Error = ConversionError;

	//		try_from
	fn try_from(v: i64) -> Result<Self, Self::Error> {
		//	If our type has fewer bits than i64, we need to check range
		//	If our type has 64 or more bits, all i64 values fit
		if Self::BITS < 64 {
			let max = i64::MAX >> (64 - u32::from(Self::BITS));
			let min = -max - 1;
			if v < min || v > max {
				return Err(ConversionError::ValueTooLarge);
			}
		}

		let mut bytes = GenericArray::<u8, BytesForBits<BITS>>::default();
		let v_bytes   = v.to_le_bytes();
		let used      = (Self::BYTES as usize).min(8);
		bytes[..used].copy_from_slice(&v_bytes[..used]);
		if v < 0 {
			//	Sign extend
			bytes.iter_mut().skip(8).for_each(|b| *b = 0xFF);
		}
		bytes[Self::BYTES as usize - 1] &= Self::LAST_BYTE_MASK;
		Ok(Self(bytes))
	}
}

//󰭅		TryFrom: u64 -> FixedInt
impl<BITS> TryFrom<u64> for FixedInt<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Error = ConversionError;

	//		try_from
	fn try_from(v: u64) -> Result<Self, Self::Error> {
		//	The maximum positive value is 2^(BITS-1) - 1, so any u64 fits
		//	once the width exceeds 64 bits
		if Self::BITS <= 64 {
			let max = if Self::BITS == 1 {
				0
			} else {
				u64::MAX >> (65 - u32::from(Self::BITS))
			};
			if v > max {
				return Err(ConversionError::ValueTooLarge);
			}
		}

		let mut bytes = GenericArray::<u8, BytesForBits<BITS>>::default();
		let v_bytes   = v.to_le_bytes();
		let used      = (Self::BYTES as usize).min(8);
		bytes[..used].copy_from_slice(&v_bytes[..used]);
		Ok(Self(bytes))
	}
}

//󰭅		TryFrom: FixedInt -> i64
impl<BITS> TryFrom<FixedInt<BITS>> for i64
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Error = ConversionError;

	//		try_from
	fn try_from(v: FixedInt<BITS>) -> Result<Self, Self::Error> {
		let negative = v.is_negative();

		//	Re-instate the padding bits dropped by the width mask, so that a
		//	negative value is properly sign-extended when widened
		let mut ext = v.0;
		if negative {
			ext[FixedInt::<BITS>::BYTES as usize - 1] |= !FixedInt::<BITS>::LAST_BYTE_MASK;
		}

		let fill      = if negative { 0xFF } else { 0x00 };
		let mut bytes = [fill; 8];
		let used      = (FixedInt::<BITS>::BYTES as usize).min(8);
		bytes[..used].copy_from_slice(&ext[..used]);

		//	Everything beyond the first eight bytes must match the sign fill
		if ext.iter().skip(8).any(|&b| b != fill) {
			return Err(ConversionError::ValueTooLarge);
		}

		let value = Self::from_le_bytes(bytes);

		//	The narrowed value must agree in sign, which catches values whose
		//	magnitude needs bit 63 of the native representation
		if (value < 0) != negative {
			return Err(ConversionError::ValueTooLarge);
		}

		Ok(value)
	}
}

//󰭅		TryFrom: FixedInt -> u64
impl<BITS> TryFrom<FixedInt<BITS>> for u64
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Error = ConversionError;

	//		try_from
	fn try_from(v: FixedInt<BITS>) -> Result<Self, Self::Error> {
		if v.is_negative() {
			return Err(ConversionError::ValueIsNegative);
		}

		if v.0.iter().skip(8).any(|&b| b != 0) {
			return Err(ConversionError::ValueTooLarge);
		}

		let mut bytes = [0_u8; 8];
		let used      = (FixedInt::<BITS>::BYTES as usize).min(8);
		bytes[..used].copy_from_slice(&v.0[..used]);
		Ok(Self::from_le_bytes(bytes))
	}
}

//		BytesVisitor
/// A visitor for parsing integers from bytes.
struct BytesVisitor<BITS>(PhantomData<BITS>);

//󰭅		Visitor
impl<BITS> Visitor<'_> for BytesVisitor<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Value = FixedInt<BITS>;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "{} bytes representing a signed integer", FixedInt::<BITS>::BYTES)
	}

	//		visit_bytes
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		FixedInt::from_le_bytes(v).map_err(SerdeError::custom)
	}
}

//		ValueVisitor
/// A visitor for parsing integers from numbers and strings.
struct ValueVisitor<BITS>(PhantomData<BITS>);

//󰭅		Visitor
impl<BITS> Visitor<'_> for ValueVisitor<BITS>
where
	BITS: Unsigned + NonZero + Add<U7>,
	Sum<BITS, U7>: Div<U8>,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Value = FixedInt<BITS>;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an integer")
	}

	//		visit_i64
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		FixedInt::try_from(v).map_err(E::custom)
	}

	//		visit_u64
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		FixedInt::try_from(v).map_err(E::custom)
	}

	//		visit_str
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}

	//		visit_bytes
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		FixedInt::from_le_bytes(v).map_err(E::custom)
	}
}


