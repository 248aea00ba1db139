//! The pizza catalog: sizes, the closed set of pizza kinds, and the
//! `Pizza` instances built from them.
//!
//! Every recipe starts from the same base pair (tomato sauce and
//! mozzarella); each kind appends its own fixed ingredients. The kind
//! set is closed, so the menu listing can enumerate it exhaustively.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Ingredients shared by every recipe, in recipe order.
pub const BASE_INGREDIENTS: [&str; 2] = ["tomato sauce", "mozzarella"];

/// Available pizza sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    L,
    Xl,
}

impl Size {
    /// All sizes, in order. Baking time scales with the position here.
    pub const ALL: [Size; 2] = [Size::L, Size::Xl];

    /// Position of this size within [`Size::ALL`] (L is 0, XL is 1).
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }
}

impl FromStr for Size {
    type Err = Error;

    /// Parses a size string case-insensitively; anything outside the
    /// enumerated set is an [`Error::InvalidSize`].
    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "L" => Ok(Size::L),
            "XL" => Ok(Size::Xl),
            _ => Err(Error::InvalidSize {
                size: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::L => write!(f, "L"),
            Size::Xl => write!(f, "XL"),
        }
    }
}

/// The closed set of pizza kinds. `Base` carries only the shared
/// ingredients and is not listed on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PizzaKind {
    Base,
    Margherita,
    Pepperoni,
    Hawaiian,
}

impl PizzaKind {
    /// The orderable kinds, in menu order.
    pub const MENU: [PizzaKind; 3] = [
        PizzaKind::Margherita,
        PizzaKind::Pepperoni,
        PizzaKind::Hawaiian,
    ];

    /// Display name, also used as the lookup key for orders.
    pub fn name(self) -> &'static str {
        match self {
            PizzaKind::Base => "Base",
            PizzaKind::Margherita => "Margherita",
            PizzaKind::Pepperoni => "Pepperoni",
            PizzaKind::Hawaiian => "Hawaiian",
        }
    }

    /// Display glyph shown next to the name on the menu.
    pub fn icon(self) -> &'static str {
        match self {
            PizzaKind::Base => "\u{1F9C7}",
            PizzaKind::Margherita => "\u{1F9C0}",
            PizzaKind::Pepperoni => "\u{1F355}",
            PizzaKind::Hawaiian => "\u{1F34D}",
        }
    }

    /// Ingredients this kind adds on top of [`BASE_INGREDIENTS`].
    pub fn extras(self) -> &'static [&'static str] {
        match self {
            PizzaKind::Base => &[],
            PizzaKind::Margherita => &["tomatoes"],
            PizzaKind::Pepperoni => &["pepperoni"],
            PizzaKind::Hawaiian => &["chicken", "pineapples"],
        }
    }

    /// Resolves a user-supplied name (case-insensitive) to a menu kind.
    ///
    /// Only kinds listed in [`PizzaKind::MENU`] are orderable; anything
    /// else fails with [`Error::UnknownVariant`].
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = name.to_lowercase();
        Self::MENU
            .iter()
            .copied()
            .find(|kind| kind.name().to_lowercase() == wanted)
            .ok_or_else(|| Error::UnknownVariant {
                name: name.to_string(),
            })
    }
}

/// A single pizza, built for one order and then discarded.
///
/// The recipe is assembled at construction and never changes afterwards.
#[derive(Debug, Clone)]
pub struct Pizza {
    kind: PizzaKind,
    size: Size,
    recipe: Vec<&'static str>,
}

impl Pizza {
    /// Builds a pizza of the given kind at the default size, L.
    pub fn new(kind: PizzaKind) -> Self {
        Self::build(kind, Size::L)
    }

    /// Builds a pizza from a user-supplied size string.
    ///
    /// The size is matched case-insensitively against the available
    /// sizes; an unrecognized size is an [`Error::InvalidSize`].
    pub fn with_size(kind: PizzaKind, size: &str) -> Result<Self> {
        Ok(Self::build(kind, size.parse()?))
    }

    fn build(kind: PizzaKind, size: Size) -> Self {
        let mut recipe = BASE_INGREDIENTS.to_vec();
        recipe.extend_from_slice(kind.extras());
        Self { kind, size, recipe }
    }

    pub fn kind(&self) -> PizzaKind {
        self.kind
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The full ingredient list, base pair first.
    pub fn recipe(&self) -> &[&'static str] {
        &self.recipe
    }

    /// The recipe keyed by the kind's display name.
    pub fn as_dict(&self) -> HashMap<&'static str, Vec<&'static str>> {
        HashMap::from([(self.kind.name(), self.recipe.clone())])
    }
}

/// Two pizzas are the same order when their sizes match and their
/// recipes match as unordered sets. The kind tag itself is not compared.
impl PartialEq for Pizza {
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }
        let mut ours = self.recipe.clone();
        let mut theirs = other.recipe.clone();
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_parses_case_insensitively() {
        for input in ["l", "L", "xl", "XL", "xL", "Xl"] {
            let size: Size = input.parse().unwrap();
            assert_eq!(size.to_string(), input.to_uppercase());
        }
    }

    #[test]
    fn test_size_rejects_unknown_strings() {
        for input in ["X", "HAHA", "XXX", "", "large"] {
            let err = input.parse::<Size>().unwrap_err();
            assert_eq!(
                err,
                Error::InvalidSize {
                    size: input.to_string()
                }
            );
        }
    }

    #[test]
    fn test_size_index_follows_declaration_order() {
        assert_eq!(Size::L.index(), 0);
        assert_eq!(Size::Xl.index(), 1);
    }

    #[test]
    fn test_default_size_is_l() {
        for kind in [
            PizzaKind::Base,
            PizzaKind::Margherita,
            PizzaKind::Pepperoni,
            PizzaKind::Hawaiian,
        ] {
            assert_eq!(Pizza::new(kind).size(), Size::L);
        }
    }

    #[test]
    fn test_with_size_accepts_lowercase() {
        let pizza = Pizza::with_size(PizzaKind::Margherita, "xl").unwrap();
        assert_eq!(pizza.size(), Size::Xl);
    }

    #[test]
    fn test_with_size_rejects_unknown_size() {
        let err = Pizza::with_size(PizzaKind::Pepperoni, "XS").unwrap_err();
        assert_eq!(err, Error::InvalidSize { size: "XS".into() });
    }

    #[test]
    fn test_recipes_start_from_the_base_pair() {
        let cases = [
            (PizzaKind::Base, vec!["tomato sauce", "mozzarella"]),
            (
                PizzaKind::Margherita,
                vec!["tomato sauce", "mozzarella", "tomatoes"],
            ),
            (
                PizzaKind::Pepperoni,
                vec!["tomato sauce", "mozzarella", "pepperoni"],
            ),
            (
                PizzaKind::Hawaiian,
                vec!["tomato sauce", "mozzarella", "chicken", "pineapples"],
            ),
        ];
        for (kind, expected) in cases {
            assert_eq!(Pizza::new(kind).recipe(), expected.as_slice());
        }
    }

    #[test]
    fn test_as_dict_keys_recipe_by_name() {
        let pizza = Pizza::new(PizzaKind::Hawaiian);
        let dict = pizza.as_dict();
        assert_eq!(
            dict.get("Hawaiian"),
            Some(&vec!["tomato sauce", "mozzarella", "chicken", "pineapples"])
        );
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(
            PizzaKind::from_name("PEPPERONI").unwrap(),
            PizzaKind::Pepperoni
        );
        assert_eq!(
            PizzaKind::from_name("margherita").unwrap(),
            PizzaKind::Margherita
        );
        assert_eq!(
            PizzaKind::from_name("Hawaiian").unwrap(),
            PizzaKind::Hawaiian
        );
    }

    #[test]
    fn test_from_name_rejects_unknown_and_off_menu_names() {
        for name in ["doner", "calzone", "", "base"] {
            let err = PizzaKind::from_name(name).unwrap_err();
            assert_eq!(err, Error::UnknownVariant { name: name.into() });
        }
    }

    #[test]
    fn test_same_kind_and_size_are_equal() {
        assert_eq!(
            Pizza::new(PizzaKind::Margherita),
            Pizza::new(PizzaKind::Margherita)
        );
        assert_eq!(
            Pizza::with_size(PizzaKind::Hawaiian, "XL").unwrap(),
            Pizza::with_size(PizzaKind::Hawaiian, "xl").unwrap()
        );
    }

    #[test]
    fn test_differing_size_is_not_equal() {
        assert_ne!(
            Pizza::new(PizzaKind::Margherita),
            Pizza::with_size(PizzaKind::Margherita, "XL").unwrap()
        );
    }

    #[test]
    fn test_differing_recipe_is_not_equal() {
        assert_ne!(
            Pizza::new(PizzaKind::Pepperoni),
            Pizza::new(PizzaKind::Margherita)
        );
        assert_ne!(
            Pizza::with_size(PizzaKind::Hawaiian, "XL").unwrap(),
            Pizza::with_size(PizzaKind::Pepperoni, "XL").unwrap()
        );
    }

    #[test]
    fn test_equality_ignores_the_kind_tag() {
        // Base and a hypothetical twin share size and recipe, so they
        // compare equal even though the kinds differ.
        let base = Pizza::new(PizzaKind::Base);
        let same_recipe = Pizza {
            kind: PizzaKind::Margherita,
            size: Size::L,
            recipe: vec!["mozzarella", "tomato sauce"],
        };
        assert_eq!(base, same_recipe);
    }

    #[test]
    fn test_menu_lists_the_three_orderable_kinds() {
        let names: Vec<_> = PizzaKind::MENU.iter().map(|k| k.name()).collect();
        assert_eq!(names, ["Margherita", "Pepperoni", "Hawaiian"]);
    }
}
