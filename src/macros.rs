/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Mapping entries keep the order they are written in. Leaves that are not
/// `null`, `true`, `false`, sequences or mappings go through
/// [`to_value`](crate::to_value). Negative number literals are accepted as
/// leaves.
///
/// A leaf expression that fails to serialize (e.g. a map with non-string
/// keys) becomes [`Value::Null`](crate::Value::Null), which both renderers
/// reject as a `null` value. Call [`to_value`](crate::to_value) directly to
/// get the serialization error instead.
///
/// ```rust
/// use hash2stuff::{value, Value};
///
/// let db = value!({
///     "host": "localhost",
///     "replicas": ["a", "b"],
///     "ssl": false
/// });
/// assert_eq!(
///     db.as_mapping().and_then(|m| m.get("ssl")),
///     Some(&Value::Bool(false))
/// );
/// ```
#[macro_export]
macro_rules! value {
    (@seq $items:ident) => {};

    (@seq $items:ident - $elem:literal $(, $($rest:tt)*)?) => {
        $items.push($crate::value!(-$elem));
        $crate::value!(@seq $items $($($rest)*)?);
    };

    (@seq $items:ident $elem:tt $(, $($rest:tt)*)?) => {
        $items.push($crate::value!($elem));
        $crate::value!(@seq $items $($($rest)*)?);
    };

    (@map $mapping:ident) => {};

    (@map $mapping:ident $key:literal : - $value:literal $(, $($rest:tt)*)?) => {
        $mapping.insert($key.to_string(), $crate::value!(-$value));
        $crate::value!(@map $mapping $($($rest)*)?);
    };

    (@map $mapping:ident $key:literal : $value:tt $(, $($rest:tt)*)?) => {
        $mapping.insert($key.to_string(), $crate::value!($value));
        $crate::value!(@map $mapping $($($rest)*)?);
    };

    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Sequence(vec![])
    };

    ([ $($elems:tt)+ ]) => {{
        let mut items: ::std::vec::Vec<$crate::Value> = ::std::vec::Vec::new();
        $crate::value!(@seq items $($elems)+);
        $crate::Value::Sequence(items)
    }};

    ({}) => {
        $crate::Value::Mapping($crate::ValueMap::new())
    };

    ({ $($entries:tt)+ }) => {{
        let mut mapping = $crate::ValueMap::new();
        $crate::value!(@map mapping $($entries)+);
        $crate::Value::Mapping(mapping)
    }};

    // Fallback for any other expression
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
