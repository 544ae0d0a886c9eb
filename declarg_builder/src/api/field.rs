use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::api::capture::*;

/// A presence-only option that takes no values (precisely 0).
/// Decodes to `true` when matched, and defaults to `false` when omitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tag;

impl Codec for Tag {
    type Value = bool;

    fn placeholder(&self) -> String {
        "".to_string()
    }

    fn decode(&self, _cursor: &mut Cursor<'_>) -> Result<bool, CodecError> {
        Ok(true)
    }

    fn implicit_default(&self) -> Option<bool> {
        Some(false)
    }
}

/// A boolean option that takes a single value (precisely 1).
///
/// Accepts (case insensitive) `on`, `1`, `yes`, `true` and `off`, `0`, `no`, `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Boolean;

impl Codec for Boolean {
    type Value = bool;

    fn placeholder(&self) -> String {
        "<bool>".to_string()
    }

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<bool, CodecError> {
        let token = cursor.next()?;
        match token.to_ascii_lowercase().as_str() {
            "on" | "1" | "yes" | "true" => Ok(true),
            "off" | "0" | "no" | "false" => Ok(false),
            _ => Err(CodecError::InvalidArgument {
                token: token.to_string(),
            }),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// The primitive integer types, as decoded by [`Integer`].
pub trait Integral: FromStr + sealed::Sealed {
    /// Whether the type admits negative values.
    const SIGNED: bool;
}

macro_rules! integral {
    ($signed:expr => $($t:ty),+) => {
        $(
            impl sealed::Sealed for $t {}

            impl Integral for $t {
                const SIGNED: bool = $signed;
            }
        )+
    };
}

integral!(true => i8, i16, i32, i64, i128, isize);
integral!(false => u8, u16, u32, u64, u128, usize);

/// An integer option that takes a single value (precisely 1).
/// The whole token must convert, otherwise the option fails with `not a number`.
/// Only a leading `-` is accepted as a sign (`+3` is not a number).
#[derive(Debug, Clone, Copy)]
pub struct Integer<T> {
    _phantom: PhantomData<T>,
}

impl<T: Integral> Integer<T> {
    /// Create an integer codec.
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: Integral> Default for Integer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Integral> Codec for Integer<T> {
    type Value = T;

    fn placeholder(&self) -> String {
        if T::SIGNED {
            "<int>".to_string()
        } else {
            "<unsigned int>".to_string()
        }
    }

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<T, CodecError> {
        let token = cursor.next()?;
        let not_a_number = || CodecError::NotANumber {
            token: token.to_string(),
        };

        if token.starts_with('+') {
            return Err(not_a_number());
        }

        T::from_str(token).map_err(|_| not_a_number())
    }
}

/// A string option that takes a single value (precisely 1), verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

impl Codec for Text {
    type Value = String;

    fn placeholder(&self) -> String {
        "<string>".to_string()
    }

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<String, CodecError> {
        Ok(cursor.next()?.to_string())
    }
}

/// An option of any [`FromStr`] type that takes a single value (precisely 1).
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{Codec, Cursor, Scalar};
/// use std::path::PathBuf;
///
/// let codec = Scalar::<PathBuf>::new().with_placeholder("<path>");
/// assert_eq!(codec.placeholder(), "<path>");
///
/// let tokens = ["/tmp"];
/// let mut cursor = Cursor::new(&tokens);
/// assert_eq!(codec.decode(&mut cursor).unwrap(), PathBuf::from("/tmp"));
/// ```
#[derive(Debug, Clone)]
pub struct Scalar<T> {
    placeholder: String,
    _phantom: PhantomData<T>,
}

impl<T: FromStr> Scalar<T> {
    /// Create a scalar codec, shown as `<value>` in the help message.
    pub fn new() -> Self {
        Self {
            placeholder: "<value>".to_string(),
            _phantom: PhantomData,
        }
    }

    /// Document the expected value, as shown in the help message.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

impl<T: FromStr> Default for Scalar<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FromStr> Codec for Scalar<T> {
    type Value = T;

    fn placeholder(&self) -> String {
        self.placeholder.clone()
    }

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<T, CodecError> {
        let token = cursor.next()?;
        T::from_str(token).map_err(|_| CodecError::InvalidArgument {
            token: token.to_string(),
        })
    }
}

/// Restrict an inner codec to an enumerated set of values.
///
/// Decoding succeeds for any value of the inner codec; the parser then rejects values outside the set with `impossible enum value`.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{Choice, Codec, Integer};
///
/// let codec = Choice::new(Integer::<u8>::new(), [1, 2, 3]);
/// assert!(codec.admits(&2));
/// assert!(!codec.admits(&0));
/// assert_eq!(codec.possible_values().unwrap(), vec!["1", "2", "3"]);
/// ```
pub struct Choice<C: Codec> {
    inner: C,
    values: Vec<C::Value>,
}

impl<C> Choice<C>
where
    C: Codec,
    C::Value: PartialEq + Display,
{
    /// Create a choice codec over `values`, in the order they are to be displayed.
    pub fn new(inner: C, values: impl IntoIterator<Item = C::Value>) -> Self {
        Self {
            inner,
            values: values.into_iter().collect(),
        }
    }
}

impl<C> Codec for Choice<C>
where
    C: Codec,
    C::Value: PartialEq + Display,
{
    type Value = C::Value;

    fn placeholder(&self) -> String {
        self.inner.placeholder()
    }

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<C::Value, CodecError> {
        self.inner.decode(cursor)
    }

    fn possible_values(&self) -> Option<Vec<String>> {
        Some(self.values.iter().map(|v| v.to_string()).collect())
    }

    fn admits(&self, value: &C::Value) -> bool {
        self.values.contains(value)
    }
}

/// Select one of a list of typed values by its [`Display`] name (precisely 1).
///
/// Suits enums, where each variant displays as the name used on the command line.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{Codec, Cursor, Named};
/// use std::fmt;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Color {
///     Red,
///     Blue,
/// }
///
/// impl fmt::Display for Color {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         match self {
///             Color::Red => write!(f, "red"),
///             Color::Blue => write!(f, "blue"),
///         }
///     }
/// }
///
/// let codec = Named::new([Color::Red, Color::Blue]);
/// let tokens = ["blue"];
/// let mut cursor = Cursor::new(&tokens);
/// assert_eq!(codec.decode(&mut cursor).unwrap(), Color::Blue);
/// ```
#[derive(Debug, Clone)]
pub struct Named<T> {
    values: Vec<T>,
}

impl<T: Display + Clone> Named<T> {
    /// Create a named codec over `values`, in the order they are to be displayed.
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl<T: Display + Clone> Codec for Named<T> {
    type Value = T;

    fn placeholder(&self) -> String {
        "<string>".to_string()
    }

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<T, CodecError> {
        let token = cursor.next()?;
        self.values
            .iter()
            .find(|value| value.to_string() == token)
            .cloned()
            .ok_or_else(|| CodecError::InvalidArgument {
                token: token.to_string(),
            })
    }

    fn possible_values(&self) -> Option<Vec<String>> {
        Some(self.values.iter().map(|v| v.to_string()).collect())
    }
}

/// A composite option of two values (precisely 2), decoded in sequence.
#[derive(Debug, Clone, Default)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A: Codec, B: Codec> Pair<A, B> {
    /// Create a pair codec.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Codec, B: Codec> Codec for Pair<A, B> {
    type Value = (A::Value, B::Value);

    fn placeholder(&self) -> String {
        format!(
            "{a} {b}",
            a = self.first.placeholder(),
            b = self.second.placeholder()
        )
    }

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Self::Value, CodecError> {
        let first = self.first.decode(cursor)?;
        let second = self.second.decode(cursor)?;
        Ok((first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn decode_one<C: Codec>(codec: &C, token: &str) -> Result<C::Value, CodecError> {
        let tokens = [token];
        let mut cursor = Cursor::new(&tokens);
        codec.decode(&mut cursor)
    }

    #[test]
    fn tag() {
        let mut cursor = Cursor::new(&["1"]);
        assert!(Tag.decode(&mut cursor).unwrap());
        assert_eq!(cursor.position(), 0);
        assert_eq!(Tag.implicit_default(), Some(false));
        assert_eq!(Tag.placeholder(), "");
    }

    #[rstest]
    #[case("on", true)]
    #[case("ON", true)]
    #[case("1", true)]
    #[case("yes", true)]
    #[case("YES", true)]
    #[case("true", true)]
    #[case("True", true)]
    #[case("off", false)]
    #[case("OFF", false)]
    #[case("0", false)]
    #[case("no", false)]
    #[case("NO", false)]
    #[case("false", false)]
    fn boolean(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(decode_one(&Boolean, token).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("2")]
    #[case("y")]
    #[case("onn")]
    fn boolean_invalid(#[case] token: &str) {
        assert_matches!(
            decode_one(&Boolean, token),
            Err(CodecError::InvalidArgument { token: t }) if t == token
        );
    }

    #[rstest]
    #[case("0", 0)]
    #[case("-12", -12)]
    #[case("2147483647", i32::MAX)]
    fn integer(#[case] token: &str, #[case] expected: i32) {
        assert_eq!(decode_one(&Integer::<i32>::new(), token).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("1x")]
    #[case(" 1")]
    #[case("+3")]
    #[case("+")]
    #[case("1.0")]
    #[case("2147483648")]
    #[case("abc")]
    fn integer_not_a_number(#[case] token: &str) {
        assert_matches!(
            decode_one(&Integer::<i32>::new(), token),
            Err(CodecError::NotANumber { token: t }) if t == token
        );
    }

    #[test]
    fn integer_unsigned() {
        assert_matches!(
            decode_one(&Integer::<u32>::new(), "-1"),
            Err(CodecError::NotANumber { .. })
        );
        assert_eq!(Integer::<u32>::new().placeholder(), "<unsigned int>");
        assert_eq!(Integer::<i64>::new().placeholder(), "<int>");
    }

    #[rstest]
    #[case(Text.placeholder(), "<string>")]
    #[case(Boolean.placeholder(), "<bool>")]
    #[case(Scalar::<f32>::new().placeholder(), "<value>")]
    #[case(Scalar::<f32>::new().with_placeholder("<float>").placeholder(), "<float>")]
    #[case(Pair::new(Integer::<i8>::new(), Text).placeholder(), "<int> <string>")]
    fn placeholders(#[case] placeholder: String, #[case] expected: &str) {
        assert_eq!(placeholder, expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("-1")]
    #[case("")]
    fn text(#[case] token: &str) {
        assert_eq!(decode_one(&Text, token).unwrap(), token);
    }

    #[test]
    fn missing() {
        let mut cursor = Cursor::new(&[]);
        assert_eq!(
            Boolean.decode(&mut cursor).unwrap_err(),
            CodecError::ArgumentMissing
        );
        assert_eq!(
            Integer::<u8>::new().decode(&mut cursor).unwrap_err(),
            CodecError::ArgumentMissing
        );
        assert_eq!(
            Text.decode(&mut cursor).unwrap_err(),
            CodecError::ArgumentMissing
        );
        assert_eq!(
            Scalar::<f64>::new().decode(&mut cursor).unwrap_err(),
            CodecError::ArgumentMissing
        );
    }

    #[test]
    fn scalar() {
        assert_eq!(decode_one(&Scalar::<f64>::new(), "1.5").unwrap(), 1.5);
        assert_matches!(
            decode_one(&Scalar::<f64>::new(), "x"),
            Err(CodecError::InvalidArgument { token }) if token == "x"
        );
    }

    #[test]
    fn choice() {
        let codec = Choice::new(Integer::<u32>::new(), [1, 2, 3, 4, 5]);
        assert_eq!(codec.placeholder(), "<unsigned int>");
        assert_eq!(
            codec.possible_values().unwrap(),
            vec!["1", "2", "3", "4", "5"]
        );

        // Membership is checked separately from decoding.
        let value = decode_one(&codec, "0").unwrap();
        assert!(!codec.admits(&value));
        let value = decode_one(&codec, "3").unwrap();
        assert!(codec.admits(&value));

        assert_matches!(
            decode_one(&codec, "x"),
            Err(CodecError::NotANumber { .. })
        );
    }

    #[test]
    fn choice_text() {
        let codec = Choice::new(Text, ["red".to_string(), "green".to_string()]);
        assert!(codec.admits(&"red".to_string()));
        assert!(!codec.admits(&"black".to_string()));
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Color {
        Red,
        Green,
    }

    impl Display for Color {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Color::Red => write!(f, "red"),
                Color::Green => write!(f, "green"),
            }
        }
    }

    #[test]
    fn named() {
        let codec = Named::new([Color::Red, Color::Green]);
        assert_eq!(codec.placeholder(), "<string>");
        assert_eq!(codec.possible_values().unwrap(), vec!["red", "green"]);
        assert_eq!(decode_one(&codec, "green").unwrap(), Color::Green);
        assert_matches!(
            decode_one(&codec, "Green"),
            Err(CodecError::InvalidArgument { token }) if token == "Green"
        );
    }

    #[test]
    fn pair() {
        let codec = Pair::new(Integer::<i32>::new(), Integer::<i32>::new());
        let tokens = ["1", "-2", "3"];
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(codec.decode(&mut cursor).unwrap(), (1, -2));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn pair_first_failure() {
        let codec = Pair::new(Integer::<i32>::new(), Integer::<i32>::new());
        let tokens = ["x", "2"];
        let mut cursor = Cursor::new(&tokens);
        assert_matches!(
            codec.decode(&mut cursor),
            Err(CodecError::NotANumber { token }) if token == "x"
        );
        assert_eq!(cursor.position(), 1);

        let tokens = ["1"];
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(
            codec.decode(&mut cursor).unwrap_err(),
            CodecError::ArgumentMissing
        );
    }
}
