//! Contains error types used throughout the library.



//		Packages

use std::io::Error as IoError;
use thiserror::Error as ThisError;



//		Enums

//		ArithmeticError
/// Represents arithmetic failures surfaced by the fallible operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ArithmeticError {
	/// The divisor was zero.
	#[error("Division by zero")]
	DivideByZero,

	/// The true mathematical result does not fit in the type's bit width.
	#[error("Arithmetic overflow")]
	Overflow,
}

//		ConversionError
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming byte slice is not the expected length.
	#[error("Invalid byte length: {0}")]
	InvalidLength(usize),

	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,

	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}

//		ParseError
/// Represents all the ways a decimal string can fail to parse.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ParseError {
	/// The incoming string contains no digits, e.g. an empty string or a bare
	/// sign.
	#[error("Empty value")]
	Empty,

	/// The incoming string contains a character that is not an ASCII digit. A
	/// sign anywhere but the first position is reported through this variant
	/// as well.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),

	/// The number is well-formed but does not fit in the type's bit width.
	#[error("Value out of range")]
	OutOfRange,
}

//		ReadError
/// Represents failures when reading a number token from a character source.
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum ReadError {
	/// The underlying reader failed.
	#[error("I/O error: {0}")]
	Io(#[from] IoError),

	/// The token read was not a valid decimal number.
	#[error("Invalid number: {0}")]
	Parse(#[from] ParseError),
}


