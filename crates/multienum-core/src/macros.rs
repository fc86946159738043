// multi_enum
/// Define an enumeration type from a static member table.
///
/// Expands to a marker type implementing `MultiEnumKind` plus a type alias
/// for `MultiEnum<Marker>`. Every section is optional but must appear in
/// this order; a type without `members` exists but cannot be constructed.
///
/// ```ignore
/// multi_enum! {
///     /// Small numbers.
///     pub Number: NumberKind {
///         fields: ["english", "slang", "french", "spanish"],
///         case_insensitive: true,
///         choice_fields: (ChoiceField::Ordinal, ChoiceField::Field("slang")),
///         choice_range: 0..2,
///         members: [
///             ["zero", "zip", "zero", "cero"],
///             ["one", "ace", "une", "uno"],
///             ["two", "deuce", "deux", "dos"],
///         ],
///     }
/// }
/// ```
#[macro_export]
macro_rules! multi_enum {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident : $kind:ident {
            $( fields: [ $($field:literal),* $(,)? ], )?
            $( case_insensitive: $case_insensitive:literal, )?
            $( choice_fields: ( $first:expr, $second:expr $(,)? ), )?
            $( choice_range: $range:expr, )?
            $( members: [ $( [ $($member:literal),* $(,)? ] ),* $(,)? ] $(,)? )?
        }
    ) => {
        $(#[$meta])*
        $vis type $name = $crate::value::MultiEnum<$kind>;

        #[doc = concat!("Marker binding [`", stringify!($name), "`] to its model.")]
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
        $vis struct $kind;

        impl $crate::traits::MultiEnumKind for $kind {
            const MODEL: &'static $crate::model::MultiEnumModel =
                &$crate::model::MultiEnumModel::new(concat!(
                    module_path!(),
                    "::",
                    stringify!($name)
                ))
                $( .with_fields(&[ $($field),* ]) )?
                $( .with_case_insensitive($case_insensitive) )?
                $( .with_choice_fields($first, $second) )?
                $( .with_choice_range(($range).start, ($range).end) )?
                $( .with_members(&[ $( &[ $($member),* ] ),* ]) )?;
        }
    };
}

///
/// TESTS
///
