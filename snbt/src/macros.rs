// Adapted from serde_json's json! macro
// https://github.com/serde-rs/json/blob/829175e6069fb16672875f125f6afdd7c6da1dec/src/macros.rs#L60-L303
//
// The source uses the MIT license, which is repeated here:
//
// Permission is hereby granted, free of charge, to any
// person obtaining a copy of this software and associated
// documentation files (the "Software"), to deal in the
// Software without restriction, including without
// limitation the rights to use, copy, modify, merge,
// publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software
// is furnished to do so, subject to the following
// conditions:
//
// The above copyright notice and this permission notice
// shall be included in all copies or substantial portions
// of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF
// ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED
// TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A
// PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT
// SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY
// CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR
// IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
// DEALINGS IN THE SOFTWARE.

/// Build a [`Tag`][`crate::Tag`] with SNBT-like syntax.
///
/// ```rust
/// use snbt::{snbt, Tag};
///
/// let tag = snbt!({
///     "id": "minecraft:chest",
///     "Items": [{"Slot": (0i8), "id": "minecraft:torch"}],
///     "Lock": _,
/// });
/// assert_eq!(
///     snbt::to_string(&tag),
///     r#"{id:"minecraft:chest",Items:[{Slot:0b,id:"minecraft:torch"}],Lock:}"#
/// );
/// ```
///
/// Values are converted with `Tag::from`, so a plain `42` is an Int and
/// `42i8` a Byte. Keys are single tokens: a string literal, a variable, or a
/// parenthesised expression. `_` as a value inserts the empty marker.
///
/// Typed arrays use the SNBT prefixes:
///
/// ```rust
/// # use snbt::{snbt, Tag};
/// let tag = snbt!({
///     "bytes": [B; 1, 2, 3],
///     "ints": [I; 1, 2, 3],
///     "longs": [L; 1, 2, 3],
/// });
/// let c = tag.as_compound().unwrap();
/// assert_eq!(c.get("longs"), Some(&Tag::LongArray(vec![1, 2, 3])));
/// ```
#[macro_export(local_inner_macros)]
macro_rules! snbt {
    // Hide distracting implementation details from the generated rustdoc.
    ($($snbt:tt)+) => {
        snbt_internal!($($snbt)+)
    };
}

#[macro_export(local_inner_macros)]
#[doc(hidden)]
macro_rules! snbt_internal {
    //////////////////////////////////////////////////////////////////////////
    // TT muncher for the inside of a list [...]. Produces a vec![...] of the
    // elements.
    //////////////////////////////////////////////////////////////////////////

    // Done with trailing comma.
    (@list [$($elems:expr,)*]) => {
        snbt_internal_vec![$($elems,)*]
    };

    // Done without trailing comma.
    (@list [$($elems:expr),*]) => {
        snbt_internal_vec![$($elems),*]
    };

    // Next element is a list.
    (@list [$($elems:expr,)*] [$($list:tt)*] $($rest:tt)*) => {
        snbt_internal!(@list [$($elems,)* snbt_internal!([$($list)*])] $($rest)*)
    };

    // Next element is a compound.
    (@list [$($elems:expr,)*] {$($map:tt)*} $($rest:tt)*) => {
        snbt_internal!(@list [$($elems,)* snbt_internal!({$($map)*})] $($rest)*)
    };

    // Next element is an expression followed by comma.
    (@list [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        snbt_internal!(@list [$($elems,)* snbt_internal!($next),] $($rest)*)
    };

    // Last element is an expression with no trailing comma.
    (@list [$($elems:expr,)*] $last:expr) => {
        snbt_internal!(@list [$($elems,)* snbt_internal!($last)])
    };

    // Comma after the most recent element.
    (@list [$($elems:expr),*] , $($rest:tt)*) => {
        snbt_internal!(@list [$($elems,)*] $($rest)*)
    };

    //////////////////////////////////////////////////////////////////////////
    // Entries of a compound {...}, inserted one at a time into $object.
    //////////////////////////////////////////////////////////////////////////

    (@object $object:ident) => {};

    // Empty marker.
    (@object $object:ident $key:tt : _ $(, $($rest:tt)*)?) => {
        let _ = $object.insert_empty($key);
        snbt_internal!(@object $object $($($rest)*)?);
    };

    (@object $object:ident $key:tt : [$($list:tt)*] $(, $($rest:tt)*)?) => {
        let _ = $object.insert($key, snbt_internal!([$($list)*]));
        snbt_internal!(@object $object $($($rest)*)?);
    };

    (@object $object:ident $key:tt : {$($map:tt)*} $(, $($rest:tt)*)?) => {
        let _ = $object.insert($key, snbt_internal!({$($map)*}));
        snbt_internal!(@object $object $($($rest)*)?);
    };

    (@object $object:ident $key:tt : $value:expr $(, $($rest:tt)*)?) => {
        let _ = $object.insert($key, snbt_internal!($value));
        snbt_internal!(@object $object $($($rest)*)?);
    };

    //////////////////////////////////////////////////////////////////////////
    // The main implementation.
    //////////////////////////////////////////////////////////////////////////

    ([]) => {
        $crate::Tag::List(snbt_internal_vec![])
    };

    ([B; $($elems:expr),* $(,)?]) => {
        $crate::Tag::ByteArray(snbt_internal_vec![$($elems),*])
    };

    ([I; $($elems:expr),* $(,)?]) => {
        $crate::Tag::IntArray(snbt_internal_vec![$($elems),*])
    };

    ([L; $($elems:expr),* $(,)?]) => {
        $crate::Tag::LongArray(snbt_internal_vec![$($elems),*])
    };

    ([ $($tt:tt)+ ]) => {
        $crate::Tag::List(snbt_internal!(@list [] $($tt)+))
    };

    ({}) => {
        $crate::Tag::Compound($crate::Compound::new())
    };

    ({ $($tt:tt)+ }) => {
        $crate::Tag::Compound({
            let mut object = $crate::Compound::new();
            snbt_internal!(@object object $($tt)+);
            object
        })
    };

    // Anything with a From conversion: numbers, strings, tags, variables.
    ($other:expr) => {
        $crate::Tag::from($other)
    };
}

// The snbt_internal macro above cannot invoke vec directly because it uses
// local_inner_macros. A vec invocation there would resolve to $crate::vec.
// Instead invoke vec here outside of local_inner_macros.
#[macro_export]
#[doc(hidden)]
macro_rules! snbt_internal_vec {
    ($($content:tt)*) => {
        vec![$($content)*]
    };
}
