//! Sort pill state derivation
//!
//! The selector never stores its own field or direction. Both are derived
//! from the descriptor owned by the folder data, and every interaction
//! produces a new descriptor for the caller's mutator.

use crate::i18n::Translator;
use crate::logic::descriptor;
use crate::{SortDirection, SortField};

/// An entry the user can pick from the sort menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAction {
    SelectField(SortField),
    SelectDirection(SortDirection),
}

/// What the closed pill shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub label: String,
    pub field: SortField,
    pub direction: SortDirection,
}

/// One labelled row of the sort menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub selected: bool,
    pub action: SortAction,
}

/// Menu content: field options first, then direction options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortMenu {
    pub fields: Vec<MenuEntry>,
    pub directions: Vec<MenuEntry>,
}

impl SortMenu {
    /// All entries in display order
    pub fn entries(&self) -> impl Iterator<Item = &MenuEntry> {
        self.fields.iter().chain(self.directions.iter())
    }

    pub fn len(&self) -> usize {
        self.fields.len() + self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&MenuEntry> {
        self.entries().nth(index)
    }

    /// Index of the selected field entry (where the menu cursor starts)
    pub fn selected_field_index(&self) -> usize {
        self.fields.iter().position(|e| e.selected).unwrap_or(0)
    }
}

pub struct SortSelector<'a> {
    descriptor: &'a str,
    translator: &'a dyn Translator,
}

impl<'a> SortSelector<'a> {
    pub fn new(descriptor: &'a str, translator: &'a dyn Translator) -> Self {
        Self {
            descriptor,
            translator,
        }
    }

    /// Selected field; unmatched keys select the first option
    pub fn field(&self) -> SortField {
        descriptor::field(self.descriptor)
    }

    pub fn direction(&self) -> SortDirection {
        descriptor::direction(self.descriptor)
    }

    pub fn trigger(&self) -> Trigger {
        let field = self.field();
        Trigger {
            label: self.translator.t(field.label_key()),
            field,
            direction: self.direction(),
        }
    }

    /// Build the menu content
    pub fn menu(&self) -> SortMenu {
        let field = self.field();
        let direction = self.direction();

        let fields = SortField::ALL
            .into_iter()
            .map(|option| MenuEntry {
                label: self.translator.t(option.label_key()),
                selected: option == field,
                action: SortAction::SelectField(option),
            })
            .collect();

        let directions = SortDirection::ALL
            .into_iter()
            .map(|option| MenuEntry {
                label: self.translator.t(option.label_key()),
                selected: option == direction,
                action: SortAction::SelectDirection(option),
            })
            .collect();

        SortMenu { fields, directions }
    }

    /// Descriptor the action leads to, or None when it would not change
    ///
    /// Picking a field always lands on ascending order. Picking a direction
    /// forces that direction on the current field key.
    pub fn next_descriptor(&self, action: SortAction) -> Option<String> {
        let next = match action {
            SortAction::SelectField(field) => field.key().to_string(),
            SortAction::SelectDirection(direction) => {
                descriptor::with_direction(self.descriptor, direction)
            }
        };

        if next == self.descriptor {
            None
        } else {
            Some(next)
        }
    }

    /// Run an action: hand a changed descriptor to `set_sort`, then `close`
    ///
    /// Returns whether the mutator was called.
    pub fn dispatch<S, C>(&self, action: SortAction, mut set_sort: S, close: C) -> bool
    where
        S: FnMut(String),
        C: FnOnce(),
    {
        let changed = match self.next_descriptor(action) {
            Some(next) => {
                tracing::debug!(from = self.descriptor, to = %next, ?action, "sort changed");
                set_sort(next);
                true
            }
            None => false,
        };
        close();
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;

    #[test]
    fn test_trigger_uses_translated_label() {
        let catalog = Catalog::english();
        let selector = SortSelector::new("-updatedAt", &catalog);
        let trigger = selector.trigger();

        assert_eq!(trigger.label, "Updated At");
        assert_eq!(trigger.field, SortField::UpdatedAt);
        assert_eq!(trigger.direction, SortDirection::Desc);
    }

    #[test]
    fn test_unmatched_key_defaults_to_first_option() {
        let catalog = Catalog::english();
        let selector = SortSelector::new("-title", &catalog);

        assert_eq!(selector.trigger().label, "Title");
        assert_eq!(selector.menu().selected_field_index(), 0);
    }

    #[test]
    fn test_menu_marks_exactly_one_field_and_one_direction() {
        let catalog = Catalog::english();
        for d in ["", "createdAt", "-createdAt", "updatedAt", "-nope"] {
            let menu = SortSelector::new(d, &catalog).menu();
            assert_eq!(menu.fields.iter().filter(|e| e.selected).count(), 1, "{d}");
            assert_eq!(menu.directions.iter().filter(|e| e.selected).count(), 1, "{d}");
            assert_eq!(menu.len(), 5);
        }
    }

    #[test]
    fn test_menu_order_fields_then_directions() {
        let catalog = Catalog::english();
        let menu = SortSelector::new("createdAt", &catalog).menu();
        let actions: Vec<SortAction> = menu.entries().map(|e| e.action).collect();

        assert_eq!(
            actions,
            vec![
                SortAction::SelectField(SortField::DocumentTitle),
                SortAction::SelectField(SortField::CreatedAt),
                SortAction::SelectField(SortField::UpdatedAt),
                SortAction::SelectDirection(SortDirection::Asc),
                SortAction::SelectDirection(SortDirection::Desc),
            ]
        );
        assert_eq!(menu.selected_field_index(), 1);
    }

    #[test]
    fn test_dispatch_closes_even_without_change() {
        let catalog = Catalog::english();
        let selector = SortSelector::new("createdAt", &catalog);
        let mut calls = Vec::new();
        let mut closed = false;

        let changed = selector.dispatch(
            SortAction::SelectDirection(SortDirection::Asc),
            |next| calls.push(next),
            || closed = true,
        );

        assert!(!changed);
        assert!(closed);
        assert!(calls.is_empty());
    }

    #[test]
    fn test_dispatch_calls_mutator_once() {
        let catalog = Catalog::english();
        let selector = SortSelector::new("createdAt", &catalog);
        let mut calls = Vec::new();

        let changed = selector.dispatch(
            SortAction::SelectDirection(SortDirection::Desc),
            |next| calls.push(next),
            || {},
        );

        assert!(changed);
        assert_eq!(calls, vec!["-createdAt".to_string()]);
    }
}
