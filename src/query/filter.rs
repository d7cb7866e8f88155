//! Filter building blocks shared by every entity filter
//!
//! Each entity filter is a plain struct made of a search string, some
//! [`Choice`] equality filters and some [`Bounds`] range filters. The
//! struct's `Default` value is the neutral filter.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Equality filter: either no constraint or one required value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    /// The "all" option: no constraint
    All,
    /// Only records whose field equals this value
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Choice<T> {
    /// Whether a record field passes this filter
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(required) => required == value,
        }
    }

    /// Whether this filter is set to `value`
    pub fn is(&self, value: &T) -> bool {
        matches!(self, Self::Only(current) if current == value)
    }

    /// Toggle behaviour of a stat card: selecting the active value clears
    /// the filter, selecting any other value sets it.
    pub fn toggle(&mut self, value: T) {
        *self = if self.is(&value) {
            Self::All
        } else {
            Self::Only(value)
        };
    }
}

impl<T> Choice<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Choice<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(value) => write!(f, "{}", value),
        }
    }
}

/// Parses `"all"` (or `"todos"`, or an empty string) as [`Choice::All`]
impl<T> FromStr for Choice<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("all")
            || trimmed.eq_ignore_ascii_case("todos")
        {
            return Ok(Self::All);
        }
        trimmed
            .parse::<T>()
            .map(Self::Only)
            .map_err(|e| e.to_string())
    }
}

/// Inclusive range filter with independently optional bounds
///
/// An unset bound never excludes a record. A bound that cannot be compared
/// with the value (a NaN amount) does not exclude it either.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

impl<T> Bounds<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    pub fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn between(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl<T: PartialOrd> Bounds<T> {
    /// Whether `value` lies within both bounds
    pub fn contains(&self, value: &T) -> bool {
        let above_min = self
            .min
            .as_ref()
            .map_or(true, |min| value.partial_cmp(min) != Some(Ordering::Less));
        let below_max = self
            .max
            .as_ref()
            .map_or(true, |max| value.partial_cmp(max) != Some(Ordering::Greater));
        above_min && below_max
    }
}

/// Case-insensitive substring search over an ordered list of fields
///
/// An empty term matches every record.
pub fn matches_search(term: &str, fields: &[&str]) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_admits() {
        let all: Choice<u8> = Choice::All;
        assert!(all.admits(&1));

        let only = Choice::Only(2u8);
        assert!(only.admits(&2));
        assert!(!only.admits(&3));
    }

    #[test]
    fn test_choice_toggle() {
        let mut choice = Choice::All;
        choice.toggle("Activo");
        assert_eq!(choice, Choice::Only("Activo"));

        // Selecting another value replaces it
        choice.toggle("Inactivo");
        assert_eq!(choice, Choice::Only("Inactivo"));

        // Selecting the active value clears it
        choice.toggle("Inactivo");
        assert_eq!(choice, Choice::All);
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!("all".parse::<Choice<u32>>(), Ok(Choice::All));
        assert_eq!("Todos".parse::<Choice<u32>>(), Ok(Choice::All));
        assert_eq!("".parse::<Choice<u32>>(), Ok(Choice::All));
        assert_eq!(" 7 ".parse::<Choice<u32>>(), Ok(Choice::Only(7)));
        assert!("x".parse::<Choice<u32>>().is_err());
    }

    #[test]
    fn test_choice_from_option() {
        assert_eq!(Choice::from(Some(3)), Choice::Only(3));
        assert_eq!(Choice::<i32>::from(None), Choice::All);
    }

    #[test]
    fn test_bounds_unset_never_excludes() {
        let bounds: Bounds<f64> = Bounds::default();
        assert!(bounds.is_unbounded());
        assert!(bounds.contains(&-1e12));
        assert!(bounds.contains(&1e12));
    }

    #[test]
    fn test_bounds_inclusive() {
        let bounds = Bounds::between(10, 20);
        assert!(bounds.contains(&10));
        assert!(bounds.contains(&20));
        assert!(!bounds.contains(&9));
        assert!(!bounds.contains(&21));

        assert!(Bounds::at_least(5).contains(&5));
        assert!(!Bounds::at_least(5).contains(&4));
        assert!(Bounds::at_most(5).contains(&5));
        assert!(!Bounds::at_most(5).contains(&6));
    }

    #[test]
    fn test_bounds_nan_bound_is_ignored() {
        let bounds = Bounds::new(Some(f64::NAN), Some(100.0));
        assert!(bounds.contains(&50.0));
        assert!(!bounds.contains(&150.0));
    }

    #[test]
    fn test_search() {
        let fields = ["CTR-001", "Constructora Andes", "76.086.428-5"];
        assert!(matches_search("", &fields));
        assert!(matches_search("andes", &fields));
        assert!(matches_search("ctr-0", &fields));
        assert!(matches_search("086", &fields));
        assert!(!matches_search("sur", &fields));
    }
}
