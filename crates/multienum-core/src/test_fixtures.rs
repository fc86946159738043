//! Shared enumeration fixtures for unit tests.

use crate::{
    choice::ChoiceField,
    model::{MemberTable, MultiEnumModel},
    traits::MultiEnumKind,
    value::MultiEnum,
};

pub(crate) static NUMBER_MEMBERS: MemberTable = &[
    &["zero", "none", "zilch"],
    &["one", "single", "uno"],
    &["two", "deuce", "a couple"],
    &["three", "a few", "trio"],
];

pub(crate) static NUMBER_MODEL: MultiEnumModel = MultiEnumModel::new("test::Number")
    .with_members(NUMBER_MEMBERS)
    .with_fields(&["first", "second"]);

pub(crate) static BARE_MODEL: MultiEnumModel =
    MultiEnumModel::new("test::Bare").with_members(NUMBER_MEMBERS);

pub(crate) static LOUD_MODEL: MultiEnumModel = MultiEnumModel::new("test::Loud")
    .with_members(&[&["Zero", "ZIP"], &["One", "ACE"], &["Two", "DEUCE"]])
    .with_fields(&["english", "slang"])
    .with_case_insensitive(true);

pub(crate) static CHOICE_MODEL: MultiEnumModel = MultiEnumModel::new("test::Card")
    .with_members(&[
        &["zero", "zip", "zero", "cero"],
        &["one", "ace", "une", "uno"],
        &["two", "deuce", "deux", "dos"],
        &["three", "trey", "trois", "tres"],
    ])
    .with_fields(&["english", "slang", "french", "spanish"])
    .with_choice_fields(ChoiceField::Ordinal, ChoiceField::Field("slang"))
    .with_choice_range(1, 3);

pub(crate) static EMPTY_MODEL: MultiEnumModel = MultiEnumModel::new("test::Empty");

pub(crate) struct NumberKind;

impl MultiEnumKind for NumberKind {
    const MODEL: &'static MultiEnumModel = &NUMBER_MODEL;
}

pub(crate) struct BareKind;

impl MultiEnumKind for BareKind {
    const MODEL: &'static MultiEnumModel = &BARE_MODEL;
}

pub(crate) struct LoudKind;

impl MultiEnumKind for LoudKind {
    const MODEL: &'static MultiEnumModel = &LOUD_MODEL;
}

pub(crate) struct CardKind;

impl MultiEnumKind for CardKind {
    const MODEL: &'static MultiEnumModel = &CHOICE_MODEL;
}

pub(crate) struct EmptyKind;

impl MultiEnumKind for EmptyKind {
    const MODEL: &'static MultiEnumModel = &EMPTY_MODEL;
}

pub(crate) type Number = MultiEnum<NumberKind>;
pub(crate) type Bare = MultiEnum<BareKind>;
pub(crate) type Loud = MultiEnum<LoudKind>;
pub(crate) type Card = MultiEnum<CardKind>;
pub(crate) type Empty = MultiEnum<EmptyKind>;
