//! Choice-list projection.
//!
//! Projects a slice of the member table onto two selected columns, e.g. to
//! populate a `(value, label)` dropdown. Pure; no instance is built.

use crate::{
    error::MultiEnumError,
    model::{MultiEnumModel, NameRow},
};
use derive_more::Display;
use serde::Serialize;
use std::ops::Range;

///
/// ChoiceField
///
/// Selects one value out of a member row.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum ChoiceField {
    /// The row's ordinal rather than one of its names.
    Ordinal,

    /// Column named by a field label.
    Field(&'static str),

    /// Column by position, for types without field labels.
    Column(usize),
}

///
/// ChoiceValue
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    Ordinal(usize),
    Name(&'static str),
}

impl ChoiceValue {
    #[must_use]
    pub const fn as_ordinal(self) -> Option<usize> {
        match self {
            Self::Ordinal(ordinal) => Some(ordinal),
            Self::Name(_) => None,
        }
    }

    #[must_use]
    pub const fn as_name(self) -> Option<&'static str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Ordinal(_) => None,
        }
    }
}

/// One projected row, values in selector order.
pub type Choice = (ChoiceValue, ChoiceValue);

///
/// Selector
/// ChoiceField with any field label already bound to its column.
///

#[derive(Clone, Copy)]
enum Selector {
    Ordinal,
    Column { index: usize, label: Option<&'static str> },
}

impl Selector {
    fn bind(model: &MultiEnumModel, field: ChoiceField) -> Result<Self, MultiEnumError> {
        Ok(match field {
            ChoiceField::Ordinal => Self::Ordinal,
            ChoiceField::Field(label) => Self::Column {
                index: model.field_index(label)?,
                label: Some(label),
            },
            ChoiceField::Column(index) => Self::Column { index, label: None },
        })
    }

    fn pick(
        self,
        model: &MultiEnumModel,
        ordinal: usize,
        row: NameRow,
    ) -> Result<ChoiceValue, MultiEnumError> {
        match self {
            Self::Ordinal => Ok(ChoiceValue::Ordinal(ordinal)),
            Self::Column { index, label } => row
                .get(index)
                .copied()
                .map(ChoiceValue::Name)
                .ok_or_else(|| {
                    let field = label.map_or_else(|| format!("#{index}"), str::to_string);
                    MultiEnumError::unknown_field(model.path, field)
                }),
        }
    }
}

/// Project rows `range` of the model onto the selector pair.
///
/// `None` selects the model defaults. Range bounds past the end of the
/// table are clamped; an inverted range yields no rows.
pub fn list_choices(
    model: &MultiEnumModel,
    fields: Option<(ChoiceField, ChoiceField)>,
    range: Option<Range<usize>>,
) -> Result<Vec<Choice>, MultiEnumError> {
    let members = model.members()?;

    let (first, second) = fields.unwrap_or_else(|| model.default_choice_fields());
    let first = Selector::bind(model, first)?;
    let second = Selector::bind(model, second)?;

    let range = range.unwrap_or_else(|| model.default_choice_range());
    let end = range.end.min(members.len());
    let start = range.start.min(end);

    let choices = members[start..end]
        .iter()
        .copied()
        .zip(start..)
        .map(|(row, ordinal)| {
            Ok((
                first.pick(model, ordinal, row)?,
                second.pick(model, ordinal, row)?,
            ))
        })
        .collect::<Result<Vec<_>, MultiEnumError>>()?;

    tracing::trace!(
        path = model.path,
        start,
        end,
        count = choices.len(),
        "listed multienum choices"
    );

    Ok(choices)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, test_fixtures::*};

    fn names(choices: &[Choice]) -> Vec<(String, String)> {
        choices
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn defaults_project_first_two_columns_of_every_row() {
        let choices = list_choices(&NUMBER_MODEL, None, None).unwrap();

        assert_eq!(choices.len(), NUMBER_MEMBERS.len());
        for (choice, row) in choices.iter().zip(NUMBER_MEMBERS) {
            assert_eq!(*choice, (ChoiceValue::Name(row[0]), ChoiceValue::Name(row[1])));
        }
    }

    #[test]
    fn custom_range_selects_only_those_rows() {
        let choices = list_choices(&NUMBER_MODEL, None, Some(1..3)).unwrap();

        assert_eq!(
            names(&choices),
            vec![
                ("one".to_string(), "single".to_string()),
                ("two".to_string(), "deuce".to_string()),
            ]
        );
    }

    #[test]
    fn ordinal_selector_yields_ordinal_name_pairs() {
        let choices = list_choices(
            &NUMBER_MODEL,
            Some((ChoiceField::Ordinal, ChoiceField::Field("second"))),
            None,
        )
        .unwrap();

        assert_eq!(choices[3], (ChoiceValue::Ordinal(3), ChoiceValue::Name("a few")));
        assert_eq!(choices[0].0.as_ordinal(), Some(0));
        assert_eq!(choices[0].1.as_name(), Some("none"));
    }

    #[test]
    fn selectors_keep_requested_order() {
        let choices = list_choices(
            &NUMBER_MODEL,
            Some((ChoiceField::Column(2), ChoiceField::Field("first"))),
            Some(2..3),
        )
        .unwrap();

        assert_eq!(
            choices,
            vec![(ChoiceValue::Name("a couple"), ChoiceValue::Name("two"))]
        );
    }

    #[test]
    fn model_configuration_supplies_defaults() {
        let choices = list_choices(&CHOICE_MODEL, None, None).unwrap();

        assert_eq!(
            choices,
            vec![
                (ChoiceValue::Ordinal(1), ChoiceValue::Name("ace")),
                (ChoiceValue::Ordinal(2), ChoiceValue::Name("deuce")),
            ]
        );
    }

    #[test]
    fn types_without_fields_fall_back_to_columns() {
        let choices = list_choices(&BARE_MODEL, None, Some(0..1)).unwrap();

        assert_eq!(
            choices,
            vec![(ChoiceValue::Name("zero"), ChoiceValue::Name("none"))]
        );
    }

    #[test]
    fn out_of_bounds_ranges_are_clamped() {
        assert_eq!(list_choices(&NUMBER_MODEL, None, Some(2..99)).unwrap().len(), 2);
        assert!(list_choices(&NUMBER_MODEL, None, Some(7..9)).unwrap().is_empty());

        let (start, end) = (3, 1);
        let inverted = list_choices(&NUMBER_MODEL, None, Some(start..end)).unwrap();
        assert!(inverted.is_empty());
    }

    #[test]
    fn unknown_selectors_are_rejected() {
        let err = list_choices(
            &NUMBER_MODEL,
            Some((ChoiceField::Field("third"), ChoiceField::Ordinal)),
            None,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownField);

        let err = list_choices(
            &NUMBER_MODEL,
            Some((ChoiceField::Ordinal, ChoiceField::Column(5))),
            None,
        )
        .unwrap_err();
        assert_eq!(err, MultiEnumError::unknown_field(NUMBER_MODEL.path, "#5"));
    }

    #[test]
    fn undefined_model_cannot_list_choices() {
        let err = list_choices(&EMPTY_MODEL, None, None).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UndefinedEnumeration);
    }

    #[test]
    fn choice_values_serialize_untagged() {
        let choices = list_choices(&CHOICE_MODEL, None, None).unwrap();
        let json = serde_json::to_string(&choices).unwrap();

        assert_eq!(json, r#"[[1,"ace"],[2,"deuce"]]"#);
    }
}
